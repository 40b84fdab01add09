//! Pipeline driven through a buffer type other than `RgbaImage`

use image::Rgba;
use ocr_prep::preprocessing::steps;
use ocr_prep::{prepare_ocr, ContrastLevel, OcrOptions, PixelBuffer};
use std::borrow::Cow;

/// Row-major pixels whose capabilities record which ones ran
#[derive(Debug, Clone, PartialEq)]
struct TracingBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba<u8>>,
    calls: Vec<String>,
}

impl TracingBuffer {
    fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgba<u8>) -> Self {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            pixels,
            calls: Vec::new(),
        }
    }

    fn with_call(&self, pixels: Vec<Rgba<u8>>, width: u32, height: u32, call: String) -> Self {
        let mut calls = self.calls.clone();
        calls.push(call);
        Self {
            width,
            height,
            pixels,
            calls,
        }
    }
}

impl PixelBuffer for TracingBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        self.pixels[(y * self.width + x) as usize]
    }

    fn map_pixels<F>(&self, f: F) -> Self
    where
        F: Fn(Rgba<u8>) -> Rgba<u8>,
    {
        let pixels = self.pixels.iter().map(|&p| f(p)).collect();
        self.with_call(pixels, self.width, self.height, "map".to_string())
    }

    // Transposes the canvas so dimension changes are visible
    fn rotated(&self, radians: f32) -> Self {
        let pixels = (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| (x, y)))
            .map(|(x, y)| self.pixel(x, y))
            .collect();
        self.with_call(pixels, self.height, self.width, format!("rotate {radians:.4}"))
    }

    fn grayscaled(&self) -> Self {
        let pixels = self
            .pixels
            .iter()
            .map(|&Rgba([r, g, b, a])| {
                let mean = ((r as u16 + g as u16 + b as u16) / 3) as u8;
                Rgba([mean, mean, mean, a])
            })
            .collect();
        self.with_call(pixels, self.width, self.height, "grayscale".to_string())
    }
}

fn sample() -> TracingBuffer {
    TracingBuffer::from_fn(6, 3, |x, y| Rgba([x as u8 * 40, y as u8 * 100, 50, 128 + x as u8]))
}

#[test]
fn test_zero_tilt_never_calls_rotation() {
    let prepared = prepare_ocr(&sample(), &OcrOptions::default()).unwrap();
    assert_eq!(prepared.calls, ["grayscale", "map", "map"]);
}

#[test]
fn test_tilt_is_converted_to_radians() {
    let options = OcrOptions {
        tilt_degrees: 90.0,
        binarize: false,
        ..OcrOptions::default()
    };
    let prepared = prepare_ocr(&sample(), &options).unwrap();

    assert_eq!(prepared.calls, ["rotate 1.5708", "grayscale", "map"]);
    assert_eq!((prepared.width(), prepared.height()), (3, 6));
}

#[test]
fn test_rotate_step_borrows_for_zero() {
    let buffer = sample();
    assert!(matches!(steps::rotate::apply(&buffer, 0.0), Cow::Borrowed(_)));
    assert!(matches!(steps::rotate::apply(&buffer, -0.0), Cow::Borrowed(_)));
}

#[test]
fn test_binarize_keeps_alpha_through_any_buffer() {
    let buffer = sample();
    let binary = steps::binarize::apply(&buffer, 60);

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let Rgba([r, g, b, a]) = binary.pixel(x, y);
            assert!([r, g, b] == [0, 0, 0] || [r, g, b] == [255, 255, 255]);
            assert_eq!(a, buffer.pixel(x, y).0[3]);
        }
    }
}

#[test]
fn test_normal_contrast_identity_through_any_buffer() {
    let buffer = sample();
    let result = steps::contrast::apply(&buffer, ContrastLevel::Normal);
    assert_eq!(result.pixels, buffer.pixels);
}

#[test]
fn test_source_buffer_untouched() {
    let buffer = sample();
    let before = buffer.clone();
    let options = OcrOptions {
        tilt_degrees: 12.0,
        ..OcrOptions::default()
    };
    let _ = prepare_ocr(&buffer, &options).unwrap();
    assert_eq!(buffer, before);
}
