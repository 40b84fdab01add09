use image::Rgba;

use crate::preprocessing::buffer::PixelBuffer;
use crate::preprocessing::level::ContrastLevel;

/// Channel value contrast is scaled around
pub const MIDPOINT: f32 = 128.0;

/// Scale each RGB channel's distance from the midpoint by the level's factor
/// Alpha passes through untouched
pub fn apply<B: PixelBuffer>(image: &B, level: ContrastLevel) -> B {
    let factor = level.factor();
    image.map_pixels(|Rgba([r, g, b, a])| {
        Rgba([
            scale_channel(r, factor),
            scale_channel(g, factor),
            scale_channel(b, factor),
            a,
        ])
    })
}

/// Rounds half away from zero, then clamps
fn scale_channel(value: u8, factor: f32) -> u8 {
    ((value as f32 - MIDPOINT) * factor + MIDPOINT)
        .round()
        .clamp(0.0, 255.0) as u8
}
