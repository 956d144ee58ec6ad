//! A rectangle made of two triangles sharing vertices through an index buffer.
use color_eyre::Result as EyreResult;
use gl_steps_gl::{
    draw::{self, PrimitiveMode},
    shader::ShaderProgram,
    vertex::{VertexArrayObject, VertexLayout},
};

use super::{load_program, upload_mesh, Frame, Lesson};
use crate::config::Assets;

#[rustfmt::skip]
pub const VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0, // top right
     0.5, -0.5, 0.0, // bottom right
    -0.5, -0.5, 0.0, // bottom left
    -0.5,  0.5, 0.0, // top left
];

#[rustfmt::skip]
pub const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

pub struct Rectangle {
    vao: VertexArrayObject,
    program: ShaderProgram,
}

impl Rectangle {
    pub fn new(assets: &Assets) -> EyreResult<Self> {
        let vao = upload_mesh(&VERTICES, Some(INDICES.as_slice()), &VertexLayout::floats(&[3]));
        let program = load_program(assets, "vertex.vert", "t1.frag")?;
        Ok(Self { vao, program })
    }
}

impl Lesson for Rectangle {
    fn render(&self, _frame: &Frame) {
        self.program.use_self();
        self.vao.use_self();
        draw::draw_elements(PrimitiveMode::Triangles, INDICES.len() as u32);
    }
}
