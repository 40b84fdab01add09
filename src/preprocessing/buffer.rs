//! Pixel buffer capability used by the preprocessing steps
//!
//! Steps never touch a concrete image type directly. They go through
//! [`PixelBuffer`], which `image::RgbaImage` implements with rotation from
//! `imageproc` and luma conversion from `image::imageops`.

use image::{imageops, Rgba, RgbaImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

/// Fill for canvas regions a rotation leaves uncovered
pub const ROTATION_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Read-only RGBA image that produces transformed copies
pub trait PixelBuffer: Clone + Send + Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8>;

    /// New buffer with `f` applied to every pixel
    fn map_pixels<F>(&self, f: F) -> Self
    where
        F: Fn(Rgba<u8>) -> Rgba<u8>;

    /// Rotate about the image center by `radians`
    fn rotated(&self, radians: f32) -> Self;

    /// Weighted-luminance gray, alpha kept
    fn grayscaled(&self) -> Self;
}

impl PixelBuffer for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.get_pixel(x, y)
    }

    fn map_pixels<F>(&self, f: F) -> Self
    where
        F: Fn(Rgba<u8>) -> Rgba<u8>,
    {
        let mut out = self.clone();
        for pixel in out.pixels_mut() {
            *pixel = f(*pixel);
        }
        out
    }

    fn rotated(&self, radians: f32) -> Self {
        rotate_about_center(self, radians, Interpolation::Bilinear, ROTATION_BACKGROUND)
    }

    fn grayscaled(&self) -> Self {
        let gray = imageops::grayscale_alpha(self);
        RgbaImage::from_fn(self.dimensions().0, self.dimensions().1, |x, y| {
            let [luma, alpha] = gray.get_pixel(x, y).0;
            Rgba([luma, luma, luma, alpha])
        })
    }
}
