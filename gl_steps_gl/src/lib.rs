pub mod buffer;
pub mod draw;
mod error;
pub mod glfw;
pub mod info;
pub mod shader;
pub mod texture;
pub mod vertex;

pub use error::{drain_errors, drain_from, CallSite, GlError, GlErrorGuard};

pub use gl;

#[macro_export]
macro_rules! transmutable_u32 {
    ($name: ident) => {
        impl $name {
            pub const fn to_u32(self) -> u32 {
                self as u32
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.to_u32()
            }
        }
    };
}
#[macro_export]
macro_rules! has_handle {
    ($name: ident) => {
        impl $name {
            pub fn as_handle(&self) -> gl::types::GLuint {
                self.handle
            }
        }
    };
}

/// Drains the GL error queue, logging every error with the call site.
///
/// Compiled to nothing without the `gl-checks` feature.
#[cfg(feature = "gl-checks")]
#[macro_export]
macro_rules! gl_check_error {
    () => {
        $crate::drain_errors($crate::CallSite {
            file: file!(),
            line: line!(),
            function: module_path!(),
        })
    };
}
#[cfg(not(feature = "gl-checks"))]
#[macro_export]
macro_rules! gl_check_error {
    () => {
        ::core::option::Option::<$crate::GlError>::None
    };
}

#[cfg(test)]
mod tests;
