use std::fmt;

use crate::transmutable_u32;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    InvalidEnum = gl::INVALID_ENUM,
    InvalidValue = gl::INVALID_VALUE,
    InvalidOperation = gl::INVALID_OPERATION,
    InvalidFramebufferOperation = gl::INVALID_FRAMEBUFFER_OPERATION,
    OutOfMemory = gl::OUT_OF_MEMORY,
    StackUnderflow = gl::STACK_UNDERFLOW,
    StackOverflow = gl::STACK_OVERFLOW,
}
transmutable_u32!(GlError);

impl GlError {
    /// `None` for `GL_NO_ERROR` and for codes this enum does not know.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            gl::INVALID_ENUM => GlError::InvalidEnum,
            gl::INVALID_VALUE => GlError::InvalidValue,
            gl::INVALID_OPERATION => GlError::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => GlError::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => GlError::OutOfMemory,
            gl::STACK_UNDERFLOW => GlError::StackUnderflow,
            gl::STACK_OVERFLOW => GlError::StackOverflow,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            GlError::InvalidEnum => "INVALID_ENUM",
            GlError::InvalidValue => "INVALID_VALUE",
            GlError::InvalidOperation => "INVALID_OPERATION",
            GlError::InvalidFramebufferOperation => "INVALID_FRAMEBUFFER_OPERATION",
            GlError::OutOfMemory => "OUT_OF_MEMORY",
            GlError::StackUnderflow => "STACK_UNDERFLOW",
            GlError::StackOverflow => "STACK_OVERFLOW",
        }
    }

    /// Pops the next recognised error off the GL error queue.
    pub fn try_get() -> Option<Self> {
        Self::next_from(|| unsafe { gl::GetError() })
    }

    /// Pulls codes from `get_error` until one is recognised or it reports
    /// `GL_NO_ERROR`. Unknown codes are logged and skipped.
    pub fn next_from(mut get_error: impl FnMut() -> u32) -> Option<Self> {
        loop {
            let err_num = get_error();
            if err_num == gl::NO_ERROR {
                return None;
            }
            match Self::from_code(err_num) {
                Some(err) => return Some(err),
                None => log::warn!("unrecognised GL error code {err_num:#06x}"),
            }
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::error::Error for GlError {}

/// Source location reported next to drained GL errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}()", self.file, self.line, self.function)
    }
}

/// Pops errors until the queue is empty, logging each one.
///
/// Returns the last error popped, if any.
pub fn drain_errors(site: CallSite) -> Option<GlError> {
    drain_from(site, || unsafe { gl::GetError() })
}

/// [`drain_errors`] over an arbitrary source of error codes.
pub fn drain_from(site: CallSite, mut get_error: impl FnMut() -> u32) -> Option<GlError> {
    let mut last = None;
    while let Some(err) = GlError::next_from(&mut get_error) {
        log::error!("{site}: {err}");
        last = Some(err);
    }
    last
}

/// Clears any GL errors on creation, asserts
/// that no GL errors occur in its lifetime.
///
/// Checks for GL errors on `Drop`, and panics
/// if any occured.
pub struct GlErrorGuard {
    name: Option<&'static str>,
}
impl Drop for GlErrorGuard {
    fn drop(&mut self) {
        Self::check(self.name, GlError::try_get());
    }
}

impl Default for GlErrorGuard {
    fn default() -> Self {
        Self::new_internal(None)
    }
}

impl GlErrorGuard {
    pub fn clear_existing(name: Option<&'static str>) {
        while let Some(err) = GlError::try_get() {
            match name {
                Some(name) => log::warn!("existing error on guard \"{name}\" creation: {err}"),
                None => log::warn!("existing error on guard creation: {err}"),
            }
        }
    }

    pub(crate) fn check(name: Option<&'static str>, err: Option<GlError>) {
        if let Some(err) = err {
            match name {
                Some(name) => panic!("GL error assert \"{name}\" failed: {err}"),
                None => panic!("GL error assert failed: {err}"),
            }
        }
    }

    fn new_internal(name: Option<&'static str>) -> Self {
        Self::clear_existing(name);
        Self { name }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &'static str) -> Self {
        Self::new_internal(Some(name))
    }

    pub fn guard_named<T>(name: &'static str, run: impl FnOnce() -> T) -> T {
        let guard = Self::named(name);
        let result = run();
        drop(guard);
        result
    }
}
