use std::borrow::Cow;

use crate::preprocessing::buffer::PixelBuffer;

/// Rotate image about its center by `radians`
/// An angle of exactly zero borrows the input back without copying
pub fn apply<B: PixelBuffer>(image: &B, radians: f32) -> Cow<'_, B> {
    if radians == 0.0 {
        return Cow::Borrowed(image);
    }
    Cow::Owned(image.rotated(radians))
}
