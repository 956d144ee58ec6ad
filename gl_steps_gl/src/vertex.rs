use std::cell::Cell;

use crate::{buffer::BufferBindTarget, gl_check_error, has_handle, transmutable_u32};
use gl::types::*;

use super::buffer::Buffer;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Float = gl::FLOAT,
    Uint = gl::UNSIGNED_INT,
    Int = gl::INT,
}
transmutable_u32!(AttrType);

impl AttrType {
    pub fn size(&self) -> u32 {
        match self {
            Self::Float => 4,
            Self::Uint => 4,
            Self::Int => 4,
        }
    }

    /// Integer attributes go through `glVertexAttribIPointer` so they
    /// reach the shader unconverted.
    fn is_integer(&self) -> bool {
        matches!(self, Self::Int | Self::Uint)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttr {
    /// Location relative to the first attribute of the layout.
    pub index: u32,
    pub attr_type: AttrType,
    pub components: u32,
    /// Byte offset inside one vertex.
    pub offset: u32,
}

/// Interleaved attribute layout of a single vertex buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    attrs: Vec<VertexAttr>,
    stride: u32,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout made only of float attributes with the given component counts.
    pub fn floats(component_counts: &[u32]) -> Self {
        component_counts
            .iter()
            .fold(Self::new(), |layout, &count| layout.with(AttrType::Float, count))
    }

    pub fn with(mut self, attr_type: AttrType, components: u32) -> Self {
        assert!(
            (1..=4).contains(&components),
            "vertex attributes have 1 to 4 components, got {components}"
        );
        self.attrs.push(VertexAttr {
            index: self.attrs.len() as u32,
            attr_type,
            components,
            offset: self.stride,
        });
        self.stride += attr_type.size() * components;
        self
    }

    pub fn attrs(&self) -> &[VertexAttr] {
        &self.attrs
    }

    /// Size of one vertex in bytes.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of scalar components in one vertex.
    pub fn components_per_vertex(&self) -> u32 {
        self.attrs.iter().map(|attr| attr.components).sum()
    }

    /// How many whole vertices `data` holds under this layout.
    pub fn vertex_count<T>(&self, data: &[T]) -> usize {
        match self.stride {
            0 => 0,
            stride => size_of_val(data) / stride as usize,
        }
    }
}

/// A vertex array object. Remembers its attribute setup and element
/// buffer between binds.
pub struct VertexArrayObject {
    handle: u32,
    next_attr_binding: Cell<u32>,
}
has_handle!(VertexArrayObject);

impl Default for VertexArrayObject {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexArrayObject {
    fn next_attr_index(&self) -> u32 {
        let attr_index = self.next_attr_binding.get();
        self.next_attr_binding.set(attr_index + 1);
        attr_index
    }

    pub fn new() -> Self {
        let mut handle = 0;
        unsafe { gl::GenVertexArrays(1, &mut handle) };
        assert_ne!(handle, 0, "vertex array creation failed.");
        unsafe { gl::BindVertexArray(handle) };
        Self {
            handle,
            next_attr_binding: Cell::new(0),
        }
    }

    pub fn use_self(&self) {
        unsafe {
            gl::BindVertexArray(self.handle);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Records `layout` for `buffer` at the next free attribute locations.
    ///
    /// Returns the location given to the first attribute.
    pub fn attach_vertex_buffer(&self, buffer: &Buffer, layout: &VertexLayout) -> u32 {
        assert_eq!(buffer.target(), BufferBindTarget::ArrayBuffer);
        self.use_self();
        buffer.bind_self();

        let first_location = self.next_attr_binding.get();
        for attr in layout.attrs() {
            let location = self.next_attr_index();
            let offset = attr.offset as usize as *const GLvoid;
            unsafe {
                if attr.attr_type.is_integer() {
                    gl::VertexAttribIPointer(
                        location,
                        attr.components as GLint,
                        attr.attr_type.to_u32(),
                        layout.stride() as GLsizei,
                        offset,
                    );
                } else {
                    gl::VertexAttribPointer(
                        location,
                        attr.components as GLint,
                        attr.attr_type.to_u32(),
                        gl::FALSE,
                        layout.stride() as GLsizei,
                        offset,
                    );
                }
                gl::EnableVertexAttribArray(location);
            }
        }
        gl_check_error!();
        first_location
    }

    /// Binds `buffer` as this array's element buffer.
    pub fn attach_element_buffer(&self, buffer: &Buffer) {
        assert_eq!(buffer.target(), BufferBindTarget::ElementArray);
        self.use_self();
        buffer.bind_self();
        gl_check_error!();
    }
}
