//! Decode and encode at the file boundary
//!
//! The preprocessing core only ever sees in-memory `RgbaImage`s; this module
//! is where they come from and where they go.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{PrepError, ValidationError};

pub const DEFAULT_QUALITY: u8 = 90;

/// Encoded output container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    WebP,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::WebP => "webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::WebP),
            _ => Err(PrepError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Decode any format the `image` crate recognizes into RGBA
pub fn load(path: &Path) -> Result<RgbaImage, PrepError> {
    let decoded = image::open(path).map_err(|e| PrepError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(decoded.to_rgba8())
}

/// Encode `image` to `path`
///
/// `quality` must be within 1..=100. Only JPEG uses it; PNG and WebP are
/// written lossless. JPEG has no alpha channel, so alpha is dropped.
///
/// The image is fully encoded before `path` is opened, so a failed encode
/// leaves nothing on disk.
pub fn save(
    image: &RgbaImage,
    path: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<(), PrepError> {
    if !(1..=100).contains(&quality) {
        return Err(ValidationError::QualityOutOfRange(quality).into());
    }

    let bytes = encode(image, format, quality).map_err(|e| PrepError::Encode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    fs::write(path, bytes)?;
    Ok(())
}

fn encode(
    image: &RgbaImage,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    match format {
        OutputFormat::Png => {
            image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
        OutputFormat::WebP => {
            image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::WebP)?;
        }
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&rgb)?;
        }
    }
    Ok(bytes)
}
