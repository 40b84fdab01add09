use image::Rgba;

use crate::preprocessing::buffer::PixelBuffer;

pub const DEFAULT_THRESHOLD: u8 = 128;

/// Global threshold on mean channel brightness
///
/// Pixels brighter than `threshold` become white, everything else (including
/// a brightness equal to the threshold) becomes black. Alpha is kept.
pub fn apply<B: PixelBuffer>(image: &B, threshold: u8) -> B {
    image.map_pixels(|Rgba([r, g, b, a])| {
        if brightness(r, g, b) > threshold {
            Rgba([255, 255, 255, a])
        } else {
            Rgba([0, 0, 0, a])
        }
    })
}

/// Integer mean of the three channels, rounded down
fn brightness(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_binarize_outputs_only_black_or_white() {
        let img = RgbaImage::from_fn(50, 50, |x, y| {
            Rgba([(x * 5) as u8, (y * 5) as u8, ((x + y) * 2) as u8, (x + y) as u8])
        });

        let result = apply(&img, DEFAULT_THRESHOLD);

        for (x, y, pixel) in result.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            assert!(
                [r, g, b] == [0, 0, 0] || [r, g, b] == [255, 255, 255],
                "Expected binary pixel, got {:?}",
                pixel
            );
            assert_eq!(a, img.get_pixel(x, y).0[3]);
        }
    }

    #[test]
    fn test_threshold_is_inclusive_on_black_side() {
        let img = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([128, 128, 128, 255]),
            1 => Rgba([129, 129, 129, 255]),
            // (130 + 129 + 127) / 3 = 128.67 floors to 128
            _ => Rgba([130, 129, 127, 255]),
        });

        let result = apply(&img, 128);
        assert_eq!(*result.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*result.get_pixel(1, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*result.get_pixel(2, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_threshold_extremes() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([0, 0, 0, 3])
            } else {
                Rgba([255, 255, 255, 4])
            }
        });

        let all_white_but_zero = apply(&img, 0);
        assert_eq!(*all_white_but_zero.get_pixel(0, 0), Rgba([0, 0, 0, 3]));
        assert_eq!(*all_white_but_zero.get_pixel(1, 0), Rgba([255, 255, 255, 4]));

        let all_black = apply(&img, 255);
        assert_eq!(*all_black.get_pixel(1, 0), Rgba([0, 0, 0, 4]));
    }

    #[test]
    fn test_brightness_floors() {
        assert_eq!(brightness(255, 255, 255), 255);
        assert_eq!(brightness(1, 1, 0), 0);
        assert_eq!(brightness(2, 2, 1), 1);
    }
}
