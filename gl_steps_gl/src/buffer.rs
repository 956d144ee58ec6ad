use crate::{gl_check_error, has_handle, transmutable_u32};
use gl::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessFrequency {
    /// Modified once, used a few times
    Stream,
    /// Modified once, used many times
    #[default]
    Static,
    /// Modified many times, used many times
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessNature {
    /// Modified by app, used in draw and spec commands
    #[default]
    Draw,
    /// Modified by reading from GL, used to return data to app
    Read,
    /// Modified by reading from GL, used in draw and spec commands
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataUsage {
    frequency: AccessFrequency,
    nature: AccessNature,
}

use AccessFrequency as Freq;
use AccessNature as Nat;

impl DataUsage {
    pub const STATIC_DRAW: Self = Self::new(Freq::Static, Nat::Draw);
    pub const DYNAMIC_DRAW: Self = Self::new(Freq::Dynamic, Nat::Draw);
    pub const STREAM_DRAW: Self = Self::new(Freq::Stream, Nat::Draw);

    pub const fn new(frequency: Freq, nature: Nat) -> Self {
        Self { frequency, nature }
    }

    pub const fn to_u32(self) -> u32 {
        match (self.frequency, self.nature) {
            (Freq::Stream, Nat::Draw) => gl::STREAM_DRAW,
            (Freq::Static, Nat::Draw) => gl::STATIC_DRAW,
            (Freq::Dynamic, Nat::Draw) => gl::DYNAMIC_DRAW,

            (Freq::Stream, Nat::Copy) => gl::STREAM_COPY,
            (Freq::Static, Nat::Copy) => gl::STATIC_COPY,
            (Freq::Dynamic, Nat::Copy) => gl::DYNAMIC_COPY,

            (Freq::Stream, Nat::Read) => gl::STREAM_READ,
            (Freq::Static, Nat::Read) => gl::STATIC_READ,
            (Freq::Dynamic, Nat::Read) => gl::DYNAMIC_READ,
        }
    }
}

/// Bind targets available in a 3.3 core context.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferBindTarget {
    /// Vertex attributes
    ArrayBuffer = gl::ARRAY_BUFFER,
    /// Buffer copy source
    CopyRead = gl::COPY_READ_BUFFER,
    /// Buffer copy destination
    CopyWrite = gl::COPY_WRITE_BUFFER,
    /// Vertex array indices
    ElementArray = gl::ELEMENT_ARRAY_BUFFER,
    /// Pixel read target
    PixelPack = gl::PIXEL_PACK_BUFFER,
    /// Texture data source
    PixelUnpack = gl::PIXEL_UNPACK_BUFFER,
    /// Texture data buffer
    Texture = gl::TEXTURE_BUFFER,
    /// Transform feedback buffer
    TransformFeedback = gl::TRANSFORM_FEEDBACK_BUFFER,
    /// Uniform block storage
    Uniform = gl::UNIFORM_BUFFER,
}
transmutable_u32!(BufferBindTarget);

/// A buffer object. Never deleted; it lives until the context goes away.
pub struct Buffer {
    handle: GLuint,
    target: BufferBindTarget,
}
has_handle!(Buffer);

impl Buffer {
    pub fn new(target: BufferBindTarget) -> Self {
        let mut handle = 0;
        unsafe { gl::GenBuffers(1, &mut handle) };
        assert_ne!(handle, 0, "Buffer generation failed.");
        unsafe { gl::BindBuffer(target.to_u32(), handle) };
        Self { handle, target }
    }

    /// Creates a buffer and fills it with `data` in one go.
    pub fn with_data<T>(target: BufferBindTarget, data: &[T], usage: DataUsage) -> Self {
        let buffer = Self::new(target);
        buffer.store(data, usage);
        buffer
    }

    pub fn target(&self) -> BufferBindTarget {
        self.target
    }

    /// Binds the buffer and (re)allocates its storage from `data`.
    ///
    /// Element buffers are recorded by whichever vertex array is bound.
    pub fn store<T>(&self, data: &[T], usage: DataUsage) {
        self.bind_self();
        unsafe {
            gl::BufferData(
                self.target.to_u32(),
                size_of_val(data) as GLsizeiptr,
                data.as_ptr().cast(),
                usage.to_u32(),
            );
        }
        gl_check_error!();
    }

    pub fn bind_self(&self) {
        unsafe {
            gl::BindBuffer(self.target.to_u32(), self.handle);
        }
    }
}
