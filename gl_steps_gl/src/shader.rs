use std::{
    cell::RefCell,
    collections::HashSet,
    ffi::CString,
    io,
    path::{Path, PathBuf},
};

use crate::{gl_check_error, has_handle, transmutable_u32};
use gl::types::*;
use gl_steps_utils::strings::{framed_lines, from_c_buffer};
use glam::{Mat4, Vec4};
use thiserror::Error;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    Compute = gl::COMPUTE_SHADER,
    Vertex = gl::VERTEX_SHADER,
    TessControl = gl::TESS_CONTROL_SHADER,
    TessEval = gl::TESS_EVALUATION_SHADER,
    Geometry = gl::GEOMETRY_SHADER,
    Fragment = gl::FRAGMENT_SHADER,
}
transmutable_u32!(ShaderType);

impl ShaderType {
    /// Guesses the stage from the conventional GLSL file extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        Some(match path.extension()?.to_str()? {
            "vert" | "vs" => Self::Vertex,
            "frag" | "fs" => Self::Fragment,
            "geom" | "gs" => Self::Geometry,
            "comp" => Self::Compute,
            "tesc" => Self::TessControl,
            "tese" => Self::TessEval,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Compute => "COMPUTE",
            Self::Vertex => "VERTEX",
            Self::TessControl => "TESS_CONTROL",
            Self::TessEval => "TESS_EVALUATION",
            Self::Geometry => "GEOMETRY",
            Self::Fragment => "FRAGMENT",
        }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to open shader source {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot tell the shader stage of {}", .0.display())]
    UnknownStage(PathBuf),
    #[error("failed to compile SHADER:{}\n{log}", .stage.name())]
    Compile { stage: ShaderType, log: String },
    #[error("failed to link SHADERS in program\n{log}")]
    Link { log: String },
}

pub type ShaderResult<T> = Result<T, ShaderError>;

/// Reads, compiles and checks a shader stage from a file.
pub fn create_shader(shader_type: ShaderType, path: impl AsRef<Path>) -> ShaderResult<Shader> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("compiling {} shader {}", shader_type.name(), path.display());
    Shader::new(shader_type, &source)
}

/// Fetches a shader or program info log through the matching GL getters.
unsafe fn read_info_log(
    handle: GLuint,
    get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
    get_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    let mut log_size = 0;
    get_iv(handle, gl::INFO_LOG_LENGTH, &mut log_size);

    let mut info_log = vec![0u8; log_size.max(0) as usize];
    let mut bytes_written = 0;
    get_log(
        handle,
        log_size,
        &mut bytes_written,
        info_log.as_mut_ptr().cast(),
    );
    info_log.truncate(bytes_written.max(0) as usize);
    from_c_buffer(info_log)
}

/// A compiled shader stage. Deleted once linked into a program.
pub struct Shader {
    handle: GLuint,
}
has_handle!(Shader);

impl Shader {
    pub fn new(shader_type: ShaderType, source: &str) -> ShaderResult<Self> {
        let handle = unsafe { gl::CreateShader(shader_type.to_u32()) };
        let length = source.len() as GLint;
        let source_ptr = source.as_ptr().cast::<GLchar>();
        unsafe {
            gl::ShaderSource(handle, 1, &source_ptr, &length);
            gl::CompileShader(handle);
        }
        gl_check_error!();

        let mut success = 0;
        unsafe {
            gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut success);
        }
        gl_check_error!();

        if success == GLint::from(gl::FALSE) {
            let log = unsafe {
                let log = read_info_log(handle, gl::GetShaderiv, gl::GetShaderInfoLog);
                gl::DeleteShader(handle);
                log
            };
            log::error!(
                "failed to compile SHADER:{}\n{}",
                shader_type.name(),
                framed_lines(&log)
            );
            return Err(ShaderError::Compile {
                stage: shader_type,
                log,
            });
        }

        Ok(Self { handle })
    }

    /// Like [`create_shader`], with the stage taken from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> ShaderResult<Self> {
        let path = path.as_ref();
        let shader_type =
            ShaderType::from_path(path).ok_or_else(|| ShaderError::UnknownStage(path.to_owned()))?;
        create_shader(shader_type, path)
    }
}

/// Checks the link status of `program`, returning its info log on failure.
pub fn check_program_linking(program: GLuint) -> ShaderResult<()> {
    let mut success = 0;
    unsafe {
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    }
    gl_check_error!();

    if success == GLint::from(gl::FALSE) {
        let log = unsafe { read_info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog) };
        log::error!("failed to link SHADERS in program\n{}", framed_lines(&log));
        return Err(ShaderError::Link { log });
    }
    Ok(())
}

pub struct ShaderProgram {
    handle: GLuint,
    missing_uniforms: RefCell<HashSet<String>>,
}
has_handle!(ShaderProgram);

impl ShaderProgram {
    /// Attaches and links the given stages, detaching them afterwards.
    ///
    /// A stage may be shared by several programs, so stages are borrowed.
    pub fn link<'a>(shaders: impl IntoIterator<Item = &'a Shader>) -> ShaderResult<Self> {
        let shaders: Vec<&Shader> = shaders.into_iter().collect();
        let handle = unsafe { gl::CreateProgram() };
        unsafe {
            for shader in &shaders {
                gl::AttachShader(handle, shader.as_handle());
            }
            gl::LinkProgram(handle);
        }
        gl_check_error!();

        let linked = check_program_linking(handle);
        unsafe {
            for shader in &shaders {
                gl::DetachShader(handle, shader.as_handle());
            }
            if linked.is_err() {
                gl::DeleteProgram(handle);
            }
        }
        linked?;

        Ok(Self::from_handle(handle))
    }

    pub(crate) fn from_handle(handle: GLuint) -> Self {
        Self {
            handle,
            missing_uniforms: RefCell::new(HashSet::new()),
        }
    }

    /// Links a program and releases the stages it was built from.
    pub fn new<const N: usize>(shaders: [Shader; N]) -> ShaderResult<Self> {
        let program = Self::link(&shaders);
        delete_shaders(shaders);
        program
    }

    pub fn use_self(&self) {
        unsafe {
            gl::UseProgram(self.handle);
        }
    }

    /// `None` for names the linker dropped or never saw. Each such name is
    /// warned about once.
    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        let Ok(c_name) = CString::new(name) else {
            self.warn_missing(name, "is not a valid C string");
            return None;
        };
        let location = unsafe { gl::GetUniformLocation(self.handle, c_name.as_ptr()) };
        if location < 0 {
            self.warn_missing(name, "not found");
            return None;
        }
        Some(location)
    }

    /// Whether `name` has already been reported as unusable.
    pub fn is_missing(&self, name: &str) -> bool {
        self.missing_uniforms.borrow().contains(name)
    }

    fn warn_missing(&self, name: &str, reason: &str) {
        if self.missing_uniforms.borrow_mut().insert(name.to_owned()) {
            log::warn!("uniform {name:?} {reason} in program {}", self.handle);
        }
    }

    /// Binds the program, then uploads through `upload` if `name` resolves.
    /// GL 3.3 has no `glProgramUniform*` without extensions.
    fn set_uniform(&self, name: &str, upload: impl FnOnce(GLint)) {
        self.use_self();
        if let Some(location) = self.uniform_location(name) {
            upload(location);
        }
    }

    pub fn set_uniform_i32(&self, name: &str, value: i32) {
        self.set_uniform(name, |location| unsafe { gl::Uniform1i(location, value) });
    }

    pub fn set_uniform_f32(&self, name: &str, value: f32) {
        self.set_uniform(name, |location| unsafe { gl::Uniform1f(location, value) });
    }

    pub fn set_uniform_vec4(&self, name: &str, value: Vec4) {
        self.set_uniform(name, |location| unsafe {
            gl::Uniform4f(location, value.x, value.y, value.z, value.w)
        });
    }

    pub fn set_uniform_mat4(&self, name: &str, value: &Mat4) {
        let columns = value.to_cols_array();
        self.set_uniform(name, |location| unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, columns.as_ptr())
        });
    }
}

/// Deletes stage objects that are no longer needed after linking.
pub fn delete_shaders(shaders: impl IntoIterator<Item = Shader>) {
    for shader in shaders {
        unsafe { gl::DeleteShader(shader.as_handle()) };
    }
}
