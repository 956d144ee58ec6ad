//! One triangle with a color per corner, interpolated across the face.
use color_eyre::Result as EyreResult;
use gl_steps_gl::{
    draw::{self, PrimitiveMode},
    shader::ShaderProgram,
    vertex::{VertexArrayObject, VertexLayout},
};

use super::{load_program, upload_mesh, Frame, Lesson};
use crate::config::Assets;

#[rustfmt::skip]
pub const VERTICES: [f32; 18] = [
    // position         // color
     0.5, -0.5, 0.0,    1.0, 0.0, 0.0,
    -0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0,
];

pub fn layout() -> VertexLayout {
    VertexLayout::floats(&[3, 3])
}

pub struct VertexColors {
    vao: VertexArrayObject,
    program: ShaderProgram,
}

impl VertexColors {
    pub fn new(assets: &Assets) -> EyreResult<Self> {
        let vao = upload_mesh(&VERTICES, None, &layout());
        let program = load_program(assets, "colors.vert", "colors.frag")?;
        Ok(Self { vao, program })
    }
}

impl Lesson for VertexColors {
    fn render(&self, _frame: &Frame) {
        self.program.use_self();
        self.vao.use_self();
        draw::draw_arrays(PrimitiveMode::Triangles, 0, 3);
    }
}
