use bitflags::bitflags;
use gl::types::*;
use glam::{IVec2, Vec4};

use crate::transmutable_u32;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    Points = gl::POINTS,
    Lines = gl::LINES,
    LineStrip = gl::LINE_STRIP,
    LineLoop = gl::LINE_LOOP,
    Triangles = gl::TRIANGLES,
    TriangleStrip = gl::TRIANGLE_STRIP,
    TriangleFan = gl::TRIANGLE_FAN,
}
transmutable_u32!(PrimitiveMode);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

pub fn set_viewport(size: IVec2) {
    unsafe { gl::Viewport(0, 0, size.x, size.y) };
}

pub fn set_clear_color(color: Vec4) {
    unsafe { gl::ClearColor(color.x, color.y, color.z, color.w) };
}

pub fn clear(mask: ClearMask) {
    unsafe { gl::Clear(mask.bits()) };
}

pub fn set_depth_test(enabled: bool) {
    unsafe {
        if enabled {
            gl::Enable(gl::DEPTH_TEST);
        } else {
            gl::Disable(gl::DEPTH_TEST);
        }
    }
}

/// Rasterize polygons as outlines instead of filling them.
pub fn set_wireframe(enabled: bool) {
    let mode = if enabled { gl::LINE } else { gl::FILL };
    unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, mode) };
}

/// Draws from the bound vertex array and program.
pub fn draw_arrays(mode: PrimitiveMode, first: u32, count: u32) {
    unsafe { gl::DrawArrays(mode.to_u32(), first as GLint, count as GLsizei) };
}

/// Draws `count` `u32` indices from the bound vertex array's element buffer.
pub fn draw_elements(mode: PrimitiveMode, count: u32) {
    unsafe {
        gl::DrawElements(
            mode.to_u32(),
            count as GLsizei,
            gl::UNSIGNED_INT,
            std::ptr::null(),
        )
    };
}
