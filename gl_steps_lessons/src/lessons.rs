use clap::ValueEnum;
use color_eyre::{eyre::WrapErr, Result as EyreResult};
use gl_steps_gl::{
    buffer::{Buffer, BufferBindTarget, DataUsage},
    draw::ClearMask,
    shader::{create_shader, ShaderProgram, ShaderType},
    vertex::{VertexArrayObject, VertexLayout},
};
use glam::IVec2;

use crate::config::Assets;

pub mod rectangle;
pub mod textures;
pub mod transforms;
pub mod two_triangles;
pub mod vertex_colors;

/// Per-frame state handed to a lesson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Seconds since the window opened.
    pub time: f32,
    pub framebuffer_size: IVec2,
}

pub trait Lesson {
    fn clear_mask(&self) -> ClearMask {
        ClearMask::COLOR
    }

    fn render(&self, frame: &Frame);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LessonKind {
    /// Two triangles, each with its own buffers and program.
    TwoTriangles,
    /// Indexed rectangle drawn through an element buffer.
    Rectangle,
    /// Triangle with a color attribute per vertex.
    VertexColors,
    /// Rectangle blending two textures.
    Textures,
    /// Spinning textured cubes placed with model/view/projection matrices.
    Transforms,
}

impl LessonKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::TwoTriangles => "two triangles",
            Self::Rectangle => "rectangle",
            Self::VertexColors => "vertex colors",
            Self::Textures => "textures",
            Self::Transforms => "transforms",
        }
    }

    /// Needs a current context with loaded GL functions.
    pub fn build(self, assets: &Assets) -> EyreResult<Box<dyn Lesson>> {
        log::info!("setting up lesson \"{}\"", self.title());
        Ok(match self {
            Self::TwoTriangles => Box::new(two_triangles::TwoTriangles::new(assets)?),
            Self::Rectangle => Box::new(rectangle::Rectangle::new(assets)?),
            Self::VertexColors => Box::new(vertex_colors::VertexColors::new(assets)?),
            Self::Textures => Box::new(textures::Textures::new(assets)?),
            Self::Transforms => Box::new(transforms::Transforms::new(assets)?),
        })
    }
}

/// Compiles a vertex and fragment stage from the asset directory and links them.
fn load_program(assets: &Assets, vertex: &str, fragment: &str) -> EyreResult<ShaderProgram> {
    let vs = create_shader(ShaderType::Vertex, assets.shader(vertex))
        .wrap_err("failed to create VERTEX SHADER")?;
    let fs = create_shader(ShaderType::Fragment, assets.shader(fragment))
        .wrap_err("failed to create FRAGMENT SHADER")?;
    let program = ShaderProgram::new([vs, fs])
        .wrap_err_with(|| format!("failed to link {vertex} with {fragment}"))?;
    Ok(program)
}

/// Uploads `vertices` into a fresh buffer and records `layout` in a new
/// vertex array, plus `indices` as its element buffer when given.
///
/// The vertex array is left unbound.
fn upload_mesh(vertices: &[f32], indices: Option<&[u32]>, layout: &VertexLayout) -> VertexArrayObject {
    let vao = VertexArrayObject::new();
    let vbo = Buffer::with_data(BufferBindTarget::ArrayBuffer, vertices, DataUsage::STATIC_DRAW);
    vao.attach_vertex_buffer(&vbo, layout);
    if let Some(indices) = indices {
        let ebo = Buffer::with_data(BufferBindTarget::ElementArray, indices, DataUsage::STATIC_DRAW);
        vao.attach_element_buffer(&ebo);
    }
    VertexArrayObject::unbind();
    vao
}
