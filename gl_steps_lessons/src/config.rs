use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::{eyre::ensure, Result as EyreResult};
use gl_steps_gl::glfw::{WindowConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

use crate::lessons::LessonKind;

pub const DEFAULT_ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

#[derive(Debug, Parser)]
#[command(name = "gl_steps", about = "Small OpenGL lessons, one window each")]
pub struct Cli {
    /// Lesson to run.
    #[arg(value_enum)]
    pub lesson: LessonKind,

    /// Directory holding `shaders/` and `textures/`.
    #[arg(long, env = "GL_STEPS_ASSETS", default_value = DEFAULT_ASSETS)]
    pub assets: PathBuf,

    /// Draw polygons as outlines.
    #[arg(long)]
    pub wireframe: bool,

    /// Window width in screen coordinates.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Window height in screen coordinates.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,
}

impl Cli {
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            width: self.width,
            height: self.height,
            title: format!("LearnOpenGL - {}", self.lesson.title()),
            ..WindowConfig::default()
        }
    }
}

/// Where shader sources and textures are read from at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> EyreResult<Self> {
        let root = root.into();
        ensure!(
            root.is_dir(),
            "asset directory {} does not exist",
            root.display()
        );
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn shader(&self, name: &str) -> PathBuf {
        self.root.join("shaders").join(name)
    }

    pub fn texture(&self, name: &str) -> PathBuf {
        self.root.join("textures").join(name)
    }
}
