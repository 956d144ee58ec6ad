use pretty_assertions::assert_eq;

use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

use crate::buffer::{AccessFrequency, AccessNature, DataUsage};
use crate::draw::ClearMask;
use crate::glfw::{GlfwError, WindowConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::shader::{create_shader, Shader, ShaderError, ShaderProgram, ShaderType};
use crate::texture::{Filter, PixelFormat, TextureImage, TextureParams, Wrap};
use crate::vertex::{AttrType, VertexAttr, VertexLayout};
use crate::{drain_from, CallSite, GlError, GlErrorGuard};

#[test]
fn gl_error_codes() {
    let cases = [
        (0x0500, GlError::InvalidEnum, "INVALID_ENUM"),
        (0x0501, GlError::InvalidValue, "INVALID_VALUE"),
        (0x0502, GlError::InvalidOperation, "INVALID_OPERATION"),
        (0x0503, GlError::StackOverflow, "STACK_OVERFLOW"),
        (0x0504, GlError::StackUnderflow, "STACK_UNDERFLOW"),
        (0x0505, GlError::OutOfMemory, "OUT_OF_MEMORY"),
        (
            0x0506,
            GlError::InvalidFramebufferOperation,
            "INVALID_FRAMEBUFFER_OPERATION",
        ),
    ];
    for (code, err, name) in cases {
        assert_eq!(GlError::from_code(code), Some(err));
        assert_eq!(err.to_u32(), code);
        assert_eq!(err.to_string(), name);
    }
}

#[test]
fn gl_error_no_error_and_unknown() {
    assert_eq!(GlError::from_code(gl::NO_ERROR), None);
    assert_eq!(GlError::from_code(0x1234), None);
}

/// Feeds `codes` one by one, then `GL_NO_ERROR` forever.
fn error_queue(codes: &[u32]) -> impl FnMut() -> u32 + '_ {
    let mut codes = codes.iter().copied();
    move || codes.next().unwrap_or(gl::NO_ERROR)
}

const TEST_SITE: CallSite = CallSite {
    file: "src/tests.rs",
    line: 1,
    function: "gl_steps_gl::tests",
};

#[test]
fn next_error_skips_unknown_codes() {
    let mut queue = error_queue(&[0x1234, 0x0501, 0x0502]);
    assert_eq!(GlError::next_from(&mut queue), Some(GlError::InvalidValue));
    assert_eq!(GlError::next_from(&mut queue), Some(GlError::InvalidOperation));
    assert_eq!(GlError::next_from(&mut queue), None);

    let mut only_unknown = error_queue(&[0x1234, 0x7777]);
    assert_eq!(GlError::next_from(&mut only_unknown), None);
}

#[test]
fn drain_returns_last_error() {
    let codes = [0x0500, 0x1234, 0x0505, 0x0502];
    let mut queue = error_queue(&codes);
    assert_eq!(
        drain_from(TEST_SITE, &mut queue),
        Some(GlError::InvalidOperation)
    );
    // The queue is empty afterwards.
    assert_eq!(queue(), gl::NO_ERROR);

    assert_eq!(drain_from(TEST_SITE, error_queue(&[])), None);
    assert_eq!(drain_from(TEST_SITE, error_queue(&[0x1234])), None);
}

#[test]
fn error_guard_passes_without_errors() {
    GlErrorGuard::check(Some("quiet"), None);
    GlErrorGuard::check(None, None);
}

#[test]
#[should_panic(expected = "GL error assert \"upload\" failed: INVALID_VALUE")]
fn error_guard_panics_on_error() {
    GlErrorGuard::check(Some("upload"), Some(GlError::InvalidValue));
}

#[test]
fn uniform_name_with_nul_is_reported_missing() {
    // Rejected before any GL call, so no context is needed.
    let program = ShaderProgram::from_handle(0);
    assert!(!program.is_missing("mix\0value"));
    assert_eq!(program.uniform_location("mix\0value"), None);
    assert!(program.is_missing("mix\0value"));
    assert_eq!(program.uniform_location("mix\0value"), None);
}

#[test]
fn call_site_format() {
    let site = CallSite {
        file: "src/lessons/two_triangles.rs",
        line: 42,
        function: "gl_steps_lessons::lessons::two_triangles",
    };
    assert_eq!(
        site.to_string(),
        "src/lessons/two_triangles.rs:42:gl_steps_lessons::lessons::two_triangles()"
    );
}

#[test]
fn call_site_from_location_macros() {
    let site = CallSite {
        file: file!(),
        line: line!(),
        function: module_path!(),
    };
    assert!(site.file.ends_with("tests.rs"));
    assert_eq!(site.function, "gl_steps_gl::tests");
}

#[test]
fn data_usage_mapping() {
    assert_eq!(DataUsage::default(), DataUsage::STATIC_DRAW);
    assert_eq!(DataUsage::STATIC_DRAW.to_u32(), gl::STATIC_DRAW);
    assert_eq!(DataUsage::DYNAMIC_DRAW.to_u32(), gl::DYNAMIC_DRAW);
    assert_eq!(DataUsage::STREAM_DRAW.to_u32(), gl::STREAM_DRAW);
    assert_eq!(
        DataUsage::new(AccessFrequency::Stream, AccessNature::Read).to_u32(),
        gl::STREAM_READ
    );
    assert_eq!(
        DataUsage::new(AccessFrequency::Dynamic, AccessNature::Copy).to_u32(),
        gl::DYNAMIC_COPY
    );
}

#[test]
fn layout_position_color_texcoord() {
    let layout = VertexLayout::floats(&[3, 3, 2]);
    assert_eq!(layout.stride(), 32);
    assert_eq!(layout.components_per_vertex(), 8);
    assert_eq!(
        layout.attrs(),
        &[
            VertexAttr {
                index: 0,
                attr_type: AttrType::Float,
                components: 3,
                offset: 0
            },
            VertexAttr {
                index: 1,
                attr_type: AttrType::Float,
                components: 3,
                offset: 12
            },
            VertexAttr {
                index: 2,
                attr_type: AttrType::Float,
                components: 2,
                offset: 24
            },
        ]
    );

    let data = [0.0f32; 32];
    assert_eq!(layout.vertex_count(&data), 4);
}

#[test]
fn layout_mixed_types() {
    let layout = VertexLayout::new()
        .with(AttrType::Float, 2)
        .with(AttrType::Uint, 1)
        .with(AttrType::Int, 4);
    let offsets: Vec<u32> = layout.attrs().iter().map(|attr| attr.offset).collect();
    assert_eq!(offsets, vec![0, 8, 12]);
    assert_eq!(layout.stride(), 28);
}

#[test]
fn layout_empty() {
    let layout = VertexLayout::new();
    assert_eq!(layout.stride(), 0);
    assert_eq!(layout.vertex_count(&[1.0f32, 2.0]), 0);
}

#[test]
#[should_panic(expected = "1 to 4 components")]
fn layout_rejects_wide_attr() {
    let _ = VertexLayout::floats(&[5]);
}

#[test]
fn shader_type_from_extension() {
    let cases = [
        ("shaders/vertex.vert", Some(ShaderType::Vertex)),
        ("shaders/t1.frag", Some(ShaderType::Fragment)),
        ("a.geom", Some(ShaderType::Geometry)),
        ("a.comp", Some(ShaderType::Compute)),
        ("a.tesc", Some(ShaderType::TessControl)),
        ("a.tese", Some(ShaderType::TessEval)),
        ("a.glsl", None),
        ("noext", None),
    ];
    for (path, expected) in cases {
        assert_eq!(ShaderType::from_path(Path::new(path)), expected, "{path}");
    }
}

#[test]
fn missing_shader_file_names_path() {
    let path = "definitely/not/here/vertex.vert";
    let Err(err) = create_shader(ShaderType::Vertex, path) else {
        panic!("reading a missing file succeeded");
    };
    assert!(matches!(err, ShaderError::Read { .. }));
    assert_eq!(
        err.to_string(),
        "failed to open shader source definitely/not/here/vertex.vert"
    );
}

#[test]
fn unknown_stage_is_rejected_before_reading() {
    let Err(err) = Shader::from_file("shaders/thing.glsl") else {
        panic!("unknown stage accepted");
    };
    assert!(matches!(err, ShaderError::UnknownStage(_)));
}

#[test]
fn shader_error_messages() {
    let compile = ShaderError::Compile {
        stage: ShaderType::Vertex,
        log: String::from("0:3(1): error: syntax error"),
    };
    assert_eq!(
        compile.to_string(),
        "failed to compile SHADER:VERTEX\n0:3(1): error: syntax error"
    );
    let link = ShaderError::Link {
        log: String::from("error: unresolved symbol"),
    };
    assert_eq!(
        link.to_string(),
        "failed to link SHADERS in program\nerror: unresolved symbol"
    );
}

#[test]
fn texture_image_is_flipped_rgb() {
    let mut source = RgbImage::new(1, 2);
    source.put_pixel(0, 0, Rgb([255, 0, 0]));
    source.put_pixel(0, 1, Rgb([0, 0, 255]));

    let image = TextureImage::from_image(DynamicImage::ImageRgb8(source));
    assert_eq!(image.format(), PixelFormat::Rgb);
    assert_eq!((image.width(), image.height()), (1, 2));
    assert_eq!(image.pixels(), &[0u8, 0, 255, 255, 0, 0]);
}

#[test]
fn texture_image_keeps_alpha() {
    let source = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 128]));
    let image = TextureImage::from_image(DynamicImage::ImageRgba8(source));
    assert_eq!(image.format(), PixelFormat::Rgba);
    assert_eq!(
        image.pixels().len(),
        3 * 2 * PixelFormat::Rgba.channels()
    );
    assert_eq!(&image.pixels()[..4], &[1u8, 2, 3, 128]);
}

#[test]
fn texture_image_gray_becomes_rgb() {
    let source = image::GrayImage::from_pixel(2, 2, image::Luma([9]));
    let image = TextureImage::from_image(DynamicImage::ImageLuma8(source));
    assert_eq!(image.format(), PixelFormat::Rgb);
    assert_eq!(image.pixels(), &[9u8; 12]);
}

#[test]
fn missing_texture_file() {
    assert!(TextureImage::load("definitely/not/here.png").is_err());
}

#[test]
fn texture_params() {
    let params = TextureParams::default();
    assert_eq!(params.wrap_s, Wrap::Repeat);
    assert_eq!(params.wrap_t, Wrap::Repeat);
    assert!(params.min_filter.uses_mipmaps());
    assert!(!params.mag_filter.uses_mipmaps());
    assert!(!Filter::Nearest.uses_mipmaps());
    assert!(Filter::NearestMipmapNearest.uses_mipmaps());
}

#[test]
fn clear_mask_bits() {
    assert_eq!(ClearMask::COLOR.bits(), gl::COLOR_BUFFER_BIT);
    assert_eq!(
        (ClearMask::COLOR | ClearMask::DEPTH).bits(),
        gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT
    );
}

#[test]
fn window_config_defaults() {
    let config = WindowConfig::default();
    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (800, 600));
    assert_eq!(config.title, "LearnOpenGL");
    assert_eq!(config.gl_version, (3, 3));

    let hints = config.hints();
    assert_eq!(hints[0], (glfw::ffi::CONTEXT_VERSION_MAJOR, 3));
    assert_eq!(hints[1], (glfw::ffi::CONTEXT_VERSION_MINOR, 3));
    assert_eq!(
        hints[2],
        (glfw::ffi::OPENGL_PROFILE, glfw::ffi::OPENGL_CORE_PROFILE)
    );
}

#[test]
fn window_config_compat_profile_has_no_profile_hint() {
    let config = WindowConfig {
        core_profile: false,
        gl_version: (2, 1),
        ..WindowConfig::default()
    };
    assert_eq!(
        config.hints(),
        vec![
            (glfw::ffi::CONTEXT_VERSION_MAJOR, 2),
            (glfw::ffi::CONTEXT_VERSION_MINOR, 1)
        ]
    );
}

#[test]
fn glfw_error_codes() {
    assert!(matches!(
        GlfwError::from_num(0x00010001),
        Some(GlfwError::NotInitialized)
    ));
    assert!(matches!(
        GlfwError::from_num(0x00010008),
        Some(GlfwError::PlatformError)
    ));
    assert!(GlfwError::from_num(0).is_none());
    assert!(GlfwError::from_num(0x7fff).is_none());
}
