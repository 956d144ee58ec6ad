use color_eyre::{
    eyre::{ensure, eyre},
    Result as EyreResult,
};
use gl_steps_utils::OptExt;
use glam::IVec2;
use std::{
    cell::RefCell,
    ffi::{c_char, c_void, CStr, CString},
    ptr::{self, NonNull},
};

use glfw::ffi;
pub use glfw::Key;

#[repr(i32)]
#[derive(Debug, Clone, Copy)]
pub enum GlfwError {
    NotInitialized,
    NoCurrentContext,
    InvalidEnum,
    InvalidValue,
    OutOfMemory,
    ApiUnavailable,
    VersionUnavailable,
    PlatformError,
    FormatUnavailable,
    NoWindowContext,
    CursorUnavilable,
    FeatureUnavailable,
    FeatureUnimplemented,
    PlatformUnavailable,
}

impl GlfwError {
    pub fn from_num(err: i32) -> Option<Self> {
        Some(match err {
            0x00010001 => Self::NotInitialized,
            0x00010002 => Self::NoCurrentContext,
            0x00010003 => Self::InvalidEnum,
            0x00010004 => Self::InvalidValue,
            0x00010005 => Self::OutOfMemory,
            0x00010006 => Self::ApiUnavailable,
            0x00010007 => Self::VersionUnavailable,
            0x00010008 => Self::PlatformError,
            0x00010009 => Self::FormatUnavailable,
            0x0001000a => Self::NoWindowContext,
            0x0001000b => Self::CursorUnavilable,
            0x0001000c => Self::FeatureUnavailable,
            0x0001000d => Self::FeatureUnimplemented,
            0x0001000e => Self::PlatformUnavailable,
            _ => return None,
        })
    }
}

extern "C" fn err_callback(err: i32, desc: *const c_char) {
    let desc = if desc.is_null() {
        "<no description>".into()
    } else {
        unsafe { CStr::from_ptr(desc) }.to_string_lossy()
    };
    match GlfwError::from_num(err) {
        Some(err) => log::error!("GLFW error {err:?}: {desc}"),
        None => log::error!("GLFW error {err:#x}: {desc}"),
    }
}

/// Keeps GLFW initialised; terminates it when dropped.
#[must_use = "GLFW is terminated as soon as the session is dropped"]
pub struct GlfwSession {
    _private: (),
}

impl Drop for GlfwSession {
    fn drop(&mut self) {
        unsafe { ffi::glfwTerminate() };
        log::info!("cleaned up");
    }
}

pub fn init() -> Option<GlfwSession> {
    let err = unsafe { ffi::glfwInit() };
    (err == ffi::TRUE).then_some(GlfwSession { _private: () })
}

pub fn install_errors() {
    unsafe { ffi::glfwSetErrorCallback(Some(err_callback)) };
}

pub fn get_proc_address(name: &'static str) -> *const c_void {
    let name = CString::new(name).unwrap_unreach();
    unsafe { ffi::glfwGetProcAddress(name.as_ptr()) }
}

/// Loads GL function pointers through the current context.
pub fn load_gl() -> EyreResult<()> {
    gl::load_with(get_proc_address);
    ensure!(
        gl::Clear::is_loaded() && gl::CreateShader::is_loaded(),
        "failed to initialize GL function pointers"
    );
    Ok(())
}

pub fn poll_events() {
    unsafe { ffi::glfwPollEvents() }
}

/// Seconds since GLFW was initialised.
pub fn time() -> f64 {
    unsafe { ffi::glfwGetTime() }
}

pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub gl_version: (i32, i32),
    pub core_profile: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: String::from("LearnOpenGL"),
            gl_version: (3, 3),
            core_profile: true,
        }
    }
}

impl WindowConfig {
    /// Window hints as `(hint, value)` pairs, in the order they are applied.
    pub fn hints(&self) -> Vec<(i32, i32)> {
        let (major, minor) = self.gl_version;
        let mut hints = vec![
            (ffi::CONTEXT_VERSION_MAJOR, major),
            (ffi::CONTEXT_VERSION_MINOR, minor),
        ];
        if self.core_profile {
            hints.push((ffi::OPENGL_PROFILE, ffi::OPENGL_CORE_PROFILE));
            if cfg!(target_os = "macos") {
                hints.push((ffi::OPENGL_FORWARD_COMPAT, ffi::TRUE));
            }
        }
        hints
    }
}

pub struct Window {
    window: NonNull<ffi::GLFWwindow>,
}

impl Window {
    pub fn create(config: &WindowConfig) -> EyreResult<Self> {
        ensure!(
            config.width > 0 && config.height > 0,
            "window size must be positive, got {}x{}",
            config.width,
            config.height
        );
        let as_c_str = CString::new(config.title.as_str())?;

        unsafe { ffi::glfwDefaultWindowHints() };
        for (hint, value) in config.hints() {
            unsafe { ffi::glfwWindowHint(hint, value) };
        }

        let window = unsafe {
            ffi::glfwCreateWindow(
                config.width,
                config.height,
                as_c_str.as_ptr(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };

        if let Some(window) = NonNull::new(window) {
            Ok(Self { window })
        } else {
            Err(eyre!("failed to create window"))
        }
    }

    pub fn should_close(&self) -> bool {
        (unsafe { ffi::glfwWindowShouldClose(self.window.as_ptr()) }) > 0
    }

    pub fn set_should_close(&self, value: bool) {
        let value = if value { ffi::TRUE } else { ffi::FALSE };
        unsafe { ffi::glfwSetWindowShouldClose(self.window.as_ptr(), value) };
    }

    pub fn swap_buffers(&self) {
        unsafe { ffi::glfwSwapBuffers(self.window.as_ptr()) }
    }

    pub fn make_current(&self) {
        unsafe { ffi::glfwMakeContextCurrent(self.window.as_ptr()) };
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        let state = unsafe { ffi::glfwGetKey(self.window.as_ptr(), key as i32) };
        state == ffi::PRESS
    }

    pub fn get_framebuffer_size(&self) -> IVec2 {
        let mut result = IVec2::ZERO;
        unsafe { ffi::glfwGetFramebufferSize(self.window.as_ptr(), &mut result.x, &mut result.y) };
        result
    }

    pub fn install_framebuffer_size_callback(&self, callback: impl FramebufferSizeCallback) {
        set_framebuffer_size_callback(callback);
        unsafe {
            ffi::glfwSetFramebufferSizeCallback(
                self.window.as_ptr(),
                Some(framebuffer_size_callback),
            )
        };
    }
}

/// Closes the window once escape is held down.
pub fn process_input(window: &Window) {
    if window.is_key_down(Key::Escape) {
        window.set_should_close(true);
    }
}

extern "C" fn framebuffer_size_callback(_window: *mut ffi::GLFWwindow, x: i32, y: i32) {
    let size = IVec2::new(x, y);
    FRAMEBUFFER_SIZE_CALLBACK.with_borrow_mut(|callback| {
        if let Some(callback) = callback.as_mut() {
            callback(size);
        }
    })
}

macro_rules! trait_alias {
    ($v:vis trait $alias:ident = $($tr:tt)*) =>{
        $v trait $alias: $($tr)* {}
        impl <T: $($tr)*> $alias for T {}
    };
}
macro_rules! store_callback {
    ( $v:vis static $callback_name:ident : $type_name:ident = $fn_name:ident) => {
        $v fn $fn_name(callback: impl $type_name) {
            $callback_name.with_borrow_mut(|value| *value = Some(Box::new(callback)));
        }
        thread_local! {
            $v static $callback_name: RefCell<Option<Box<dyn $type_name>>> = const { RefCell::new(None) };
        }
    };
}

trait_alias!(pub trait FramebufferSizeCallback = FnMut(IVec2) + 'static);
store_callback!(static FRAMEBUFFER_SIZE_CALLBACK: FramebufferSizeCallback = set_framebuffer_size_callback);
