//! Rectangle sampling two textures and mixing them in the fragment stage.
use color_eyre::Result as EyreResult;
use gl_steps_gl::{
    draw::{self, PrimitiveMode},
    shader::ShaderProgram,
    texture::{Texture2D, TextureParams},
    vertex::{VertexArrayObject, VertexLayout},
};

use super::{load_program, rectangle::INDICES, upload_mesh, Frame, Lesson};
use crate::config::Assets;

#[rustfmt::skip]
pub const VERTICES: [f32; 32] = [
    // position          // color           // texcoord
     0.5,  0.5, 0.0,     1.0, 0.0, 0.0,     1.0, 1.0,
     0.5, -0.5, 0.0,     0.0, 1.0, 0.0,     1.0, 0.0,
    -0.5, -0.5, 0.0,     0.0, 0.0, 1.0,     0.0, 0.0,
    -0.5,  0.5, 0.0,     1.0, 1.0, 0.0,     0.0, 1.0,
];

/// Weight of the second texture.
pub const MIX_VALUE: f32 = 0.2;

pub const TEXTURES: [(&str, &str); 2] = [
    ("texture1", "container.png"),
    ("texture2", "awesomeface.png"),
];

pub fn layout() -> VertexLayout {
    VertexLayout::floats(&[3, 3, 2])
}

pub struct Textures {
    vao: VertexArrayObject,
    program: ShaderProgram,
    textures: Vec<Texture2D>,
}

impl Textures {
    pub fn new(assets: &Assets) -> EyreResult<Self> {
        let vao = upload_mesh(&VERTICES, Some(INDICES.as_slice()), &layout());
        let program = load_program(assets, "textures.vert", "textures.frag")?;
        let textures = load_samplers(assets, &program, &TEXTURES)?;
        program.set_uniform_f32("mix_value", MIX_VALUE);
        Ok(Self {
            vao,
            program,
            textures,
        })
    }
}

/// Loads each `(sampler, file)` pair and points the sampler at the
/// texture unit matching its position in `textures`.
pub(super) fn load_samplers(
    assets: &Assets,
    program: &ShaderProgram,
    textures: &[(&str, &str)],
) -> EyreResult<Vec<Texture2D>> {
    textures
        .iter()
        .enumerate()
        .map(|(unit, &(sampler, file))| {
            let texture = Texture2D::load(assets.texture(file), TextureParams::default())?;
            program.set_uniform_i32(sampler, unit as i32);
            Ok(texture)
        })
        .collect()
}

pub(super) fn bind_all(textures: &[Texture2D]) {
    for (unit, texture) in textures.iter().enumerate() {
        texture.bind_to_unit(unit as u32);
    }
}

impl Lesson for Textures {
    fn render(&self, _frame: &Frame) {
        bind_all(&self.textures);
        self.program.use_self();
        self.vao.use_self();
        draw::draw_elements(PrimitiveMode::Triangles, INDICES.len() as u32);
    }
}
