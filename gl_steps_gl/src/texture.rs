use std::path::Path;

use color_eyre::{eyre::WrapErr, Result as EyreResult};
use gl::types::*;
use image::DynamicImage;

use crate::{gl_check_error, has_handle, transmutable_u32};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb = gl::RGB,
    Rgba = gl::RGBA,
}
transmutable_u32!(PixelFormat);

impl PixelFormat {
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Decoded pixels, bottom row first as GL expects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl TextureImage {
    pub fn load(path: impl AsRef<Path>) -> EyreResult<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .wrap_err_with(|| format!("failed to load texture {}", path.display()))?;
        log::debug!("loaded texture {}", path.display());
        Ok(Self::from_image(image))
    }

    /// Flips rows so the first one is the bottom one, keeping alpha only
    /// when the source has it.
    pub fn from_image(image: DynamicImage) -> Self {
        let image = image.flipv();
        if image.color().has_alpha() {
            let rgba = image.into_rgba8();
            Self {
                width: rgba.width(),
                height: rgba.height(),
                format: PixelFormat::Rgba,
                pixels: rgba.into_raw(),
            }
        } else {
            let rgb = image.into_rgb8();
            Self {
                width: rgb.width(),
                height: rgb.height(),
                format: PixelFormat::Rgb,
                pixels: rgb.into_raw(),
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Repeat = gl::REPEAT,
    MirroredRepeat = gl::MIRRORED_REPEAT,
    ClampToEdge = gl::CLAMP_TO_EDGE,
    ClampToBorder = gl::CLAMP_TO_BORDER,
}
transmutable_u32!(Wrap);

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Nearest = gl::NEAREST,
    Linear = gl::LINEAR,
    NearestMipmapNearest = gl::NEAREST_MIPMAP_NEAREST,
    LinearMipmapNearest = gl::LINEAR_MIPMAP_NEAREST,
    NearestMipmapLinear = gl::NEAREST_MIPMAP_LINEAR,
    LinearMipmapLinear = gl::LINEAR_MIPMAP_LINEAR,
}
transmutable_u32!(Filter);

impl Filter {
    pub const fn uses_mipmaps(self) -> bool {
        !matches!(self, Self::Nearest | Self::Linear)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub min_filter: Filter,
    /// Only `Nearest` or `Linear` are meaningful here.
    pub mag_filter: Filter,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
            min_filter: Filter::LinearMipmapLinear,
            mag_filter: Filter::Linear,
        }
    }
}

pub struct Texture2D {
    handle: GLuint,
}
has_handle!(Texture2D);

impl Texture2D {
    pub fn new(image: &TextureImage, params: TextureParams) -> Self {
        let mut handle = 0;
        unsafe { gl::GenTextures(1, &mut handle) };
        assert_ne!(handle, 0, "texture creation failed.");

        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, handle);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, params.wrap_s.to_u32() as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, params.wrap_t.to_u32() as GLint);
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                params.min_filter.to_u32() as GLint,
            );
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MAG_FILTER,
                params.mag_filter.to_u32() as GLint,
            );

            // RGB rows are not always 4-byte aligned
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                image.format.to_u32() as GLint,
                image.width as GLsizei,
                image.height as GLsizei,
                0,
                image.format.to_u32(),
                gl::UNSIGNED_BYTE,
                image.pixels.as_ptr().cast(),
            );
            if params.min_filter.uses_mipmaps() {
                gl::GenerateMipmap(gl::TEXTURE_2D);
            }
        }
        gl_check_error!();

        Self { handle }
    }

    pub fn load(path: impl AsRef<Path>, params: TextureParams) -> EyreResult<Self> {
        Ok(Self::new(&TextureImage::load(path)?, params))
    }

    /// Binds to `GL_TEXTURE0 + unit`.
    pub fn bind_to_unit(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.handle);
        }
    }
}
