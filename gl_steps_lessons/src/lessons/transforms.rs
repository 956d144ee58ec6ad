//! Textured cubes spinning in front of a fixed camera.
use color_eyre::Result as EyreResult;
use gl_steps_gl::{
    draw::{self, ClearMask, PrimitiveMode},
    shader::ShaderProgram,
    texture::Texture2D,
    vertex::{VertexArrayObject, VertexLayout},
};
use glam::{IVec2, Mat4, Vec3};

use super::{
    load_program,
    textures::{bind_all, load_samplers, MIX_VALUE, TEXTURES},
    upload_mesh, Frame, Lesson,
};
use crate::config::Assets;

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -3.0);
pub const ROTATION_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);
/// Degrees per second.
pub const SPIN_SPEED: f32 = 50.0;

pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Six faces of two triangles each: position, texcoord.
#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

pub fn layout() -> VertexLayout {
    VertexLayout::floats(&[3, 2])
}

/// Perspective projection for a framebuffer of `size`. A collapsed
/// (minimised) framebuffer falls back to a square aspect.
pub fn projection(size: IVec2) -> Mat4 {
    let aspect = if size.x > 0 && size.y > 0 {
        size.x as f32 / size.y as f32
    } else {
        1.0
    };
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

pub fn view() -> Mat4 {
    Mat4::from_translation(CAMERA_OFFSET)
}

/// Cube `index` sits at `position`, starts 20° further along than the
/// previous one and spins at [`SPIN_SPEED`].
pub fn model(position: Vec3, index: usize, time: f32) -> Mat4 {
    let angle = (20.0 * index as f32 + SPIN_SPEED * time).to_radians();
    Mat4::from_translation(position) * Mat4::from_axis_angle(ROTATION_AXIS.normalize(), angle)
}

pub struct Transforms {
    vao: VertexArrayObject,
    vertex_count: u32,
    program: ShaderProgram,
    textures: Vec<Texture2D>,
}

impl Transforms {
    pub fn new(assets: &Assets) -> EyreResult<Self> {
        let layout = layout();
        let vao = upload_mesh(&CUBE_VERTICES, None, &layout);
        let vertex_count = layout.vertex_count(&CUBE_VERTICES) as u32;

        let program = load_program(assets, "transforms.vert", "transforms.frag")?;
        let textures = load_samplers(assets, &program, &TEXTURES)?;
        program.set_uniform_f32("mix_value", MIX_VALUE);
        program.set_uniform_mat4("view", &view());

        draw::set_depth_test(true);

        Ok(Self {
            vao,
            vertex_count,
            program,
            textures,
        })
    }
}

impl Lesson for Transforms {
    fn clear_mask(&self) -> ClearMask {
        ClearMask::COLOR | ClearMask::DEPTH
    }

    fn render(&self, frame: &Frame) {
        bind_all(&self.textures);
        self.program.use_self();
        self.program
            .set_uniform_mat4("projection", &projection(frame.framebuffer_size));
        self.vao.use_self();
        for (index, &position) in CUBE_POSITIONS.iter().enumerate() {
            self.program
                .set_uniform_mat4("model", &model(position, index, frame.time));
            draw::draw_arrays(PrimitiveMode::Triangles, 0, self.vertex_count);
        }
    }
}
