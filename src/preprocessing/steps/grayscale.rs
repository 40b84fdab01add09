use crate::preprocessing::buffer::PixelBuffer;

/// Convert image to weighted-luminance grayscale
/// Output keeps the RGBA layout, dimensions and alpha of the input
pub fn apply<B: PixelBuffer>(image: &B) -> B {
    image.grayscaled()
}
