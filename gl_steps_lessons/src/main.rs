use clap::Parser;
use color_eyre::{eyre::OptionExt, Result as EyreResult};
use config::{Assets, Cli};
use gl_steps_gl::{
    draw, gl_check_error,
    glfw::{self, Window},
    info,
};
use glam::{IVec2, Vec4};
use lessons::{Frame, Lesson};

mod config;
mod lessons;

const CLEAR_COLOR: Vec4 = Vec4::new(0.2, 0.3, 0.3, 1.0);

struct App {
    window: Window,
    lesson: Box<dyn Lesson>,
    start_time: f64,
}

impl App {
    fn run(cli: Cli) -> EyreResult<()> {
        glfw::install_errors();
        // Dropped last, after everything that needs the window.
        let _session = glfw::init().ok_or_eyre("glfw init failed")?;

        let window = Window::create(&cli.window_config())?;
        window.make_current();
        glfw::load_gl()?;
        info::log_context_info();

        draw::set_viewport(IVec2::new(cli.width, cli.height));
        window.install_framebuffer_size_callback(draw::set_viewport);

        let assets = Assets::new(&cli.assets)?;
        log::debug!("assets from {}", assets.root().display());
        let lesson = cli.lesson.build(&assets)?;

        draw::set_clear_color(CLEAR_COLOR);
        draw::set_wireframe(cli.wireframe);
        gl_check_error!();

        Self {
            window,
            lesson,
            start_time: glfw::time(),
        }
        .run_internal();

        Ok(())
    }

    fn run_internal(self) {
        while !self.window.should_close() {
            self.tick();
        }
    }

    fn tick(&self) {
        glfw::process_input(&self.window);

        let frame = Frame {
            time: (glfw::time() - self.start_time) as f32,
            framebuffer_size: self.window.get_framebuffer_size(),
        };
        draw::clear(self.lesson.clear_mask());
        self.lesson.render(&frame);
        gl_check_error!();

        glfw::poll_events();
        self.window.swap_buffers();
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    App::run(Cli::parse())
}
