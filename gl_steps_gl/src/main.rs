//! Opens a context with the default window config and reports what the
//! driver offers, without drawing anything.
use color_eyre::{eyre::OptionExt, Result as EyreResult};
use gl_steps_gl::{
    gl_check_error,
    glfw::{self, Window, WindowConfig},
    info, GlErrorGuard,
};

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    glfw::install_errors();
    let _session = glfw::init().ok_or_eyre("glfw init failed")?;

    let window = Window::create(&WindowConfig {
        title: String::from("gl_steps info"),
        ..WindowConfig::default()
    })?;
    window.make_current();
    glfw::load_gl()?;

    // Nothing here should ever raise a GL error; fail loudly if it does.
    GlErrorGuard::guard_named("context info", || {
        info::log_context_info();
        log::info!("framebuffer: {}", window.get_framebuffer_size());
    });
    gl_check_error!();

    Ok(())
}
