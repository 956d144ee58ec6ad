use std::ffi::CStr;

use crate::transmutable_u32;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlString {
    Vendor = gl::VENDOR,
    Renderer = gl::RENDERER,
    Version = gl::VERSION,
    ShadingLanguageVersion = gl::SHADING_LANGUAGE_VERSION,
}
transmutable_u32!(GlString);

impl GlString {
    pub const ALL: [GlString; 4] = [
        GlString::Vendor,
        GlString::Renderer,
        GlString::Version,
        GlString::ShadingLanguageVersion,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GlString::Vendor => "vendor",
            GlString::Renderer => "renderer",
            GlString::Version => "version",
            GlString::ShadingLanguageVersion => "glsl version",
        }
    }

    /// `None` when the driver hands back a null pointer, i.e. without a context.
    pub fn get_gl(self) -> Option<&'static str> {
        let str_ptr = unsafe { gl::GetString(self.to_u32()) };
        if str_ptr.is_null() {
            return None;
        }
        unsafe { CStr::from_ptr(str_ptr.cast()) }.to_str().ok()
    }
}

pub fn log_context_info() {
    for string in GlString::ALL {
        match string.get_gl() {
            Some(value) => log::info!("{}: {value}", string.label()),
            None => log::warn!("{}: unavailable", string.label()),
        }
    }
}
