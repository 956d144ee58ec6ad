//! Two triangles with separate vertex arrays, buffers and programs. Both
//! programs share one vertex stage and differ in their fragment stage.
use color_eyre::{eyre::WrapErr, Result as EyreResult};
use gl_steps_gl::{
    draw::{self, PrimitiveMode},
    shader::{create_shader, delete_shaders, ShaderProgram, ShaderType},
    vertex::{VertexArrayObject, VertexLayout},
};

use super::{upload_mesh, Frame, Lesson};
use crate::config::Assets;

pub const TRIANGLE_COUNT: usize = 2;

#[rustfmt::skip]
pub const VERTICES: [[f32; 9]; TRIANGLE_COUNT] = [
    [
        -1.0, -0.0, 0.0,
         0.0,  0.0, 0.0,
         0.0,  1.0, 0.0,
    ],
    [
         0.0, -1.0, 0.0,
         0.0,  0.0, 0.0,
         1.0,  0.0, 0.0,
    ],
];

pub const FRAGMENT_SHADERS: [&str; TRIANGLE_COUNT] = ["t1.frag", "t2.frag"];

pub struct TwoTriangles {
    triangles: [(VertexArrayObject, ShaderProgram); TRIANGLE_COUNT],
}

impl TwoTriangles {
    pub fn new(assets: &Assets) -> EyreResult<Self> {
        let layout = VertexLayout::floats(&[3]);
        let [vao_t1, vao_t2] = VERTICES.map(|vertices| upload_mesh(&vertices, None, &layout));

        let vert_shader = create_shader(ShaderType::Vertex, assets.shader("vertex.vert"))
            .wrap_err("failed to create VERTEX SHADER")?;
        let [frag_t1, frag_t2] = FRAGMENT_SHADERS.map(|name| {
            create_shader(ShaderType::Fragment, assets.shader(name))
                .wrap_err("failed to create FRAGMENT SHADER")
        });
        let (frag_t1, frag_t2) = (frag_t1?, frag_t2?);

        let program_t1 = ShaderProgram::link([&vert_shader, &frag_t1])?;
        let program_t2 = ShaderProgram::link([&vert_shader, &frag_t2])?;
        delete_shaders([vert_shader, frag_t1, frag_t2]);

        Ok(Self {
            triangles: [(vao_t1, program_t1), (vao_t2, program_t2)],
        })
    }
}

impl Lesson for TwoTriangles {
    fn render(&self, _frame: &Frame) {
        for (vao, program) in &self.triangles {
            program.use_self();
            vao.use_self();
            draw::draw_arrays(PrimitiveMode::Triangles, 0, 3);
        }
    }
}
