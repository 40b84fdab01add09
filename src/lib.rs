//! Image preparation for OCR
//!
//! - [`color`]: RGB values with clamped arithmetic, hex codec and blending
//! - [`preprocessing`]: rotate, grayscale, contrast and binarize steps and the
//!   pipeline composing them
//! - [`output`]: decoding inputs and encoding results at the file boundary

pub mod color;
pub mod error;
pub mod output;
pub mod preprocessing;

pub use color::{Channel, ColorValue};
pub use error::{PrepError, ValidationError};
pub use output::OutputFormat;
pub use preprocessing::{prepare_ocr, ContrastLevel, OcrOptions, Pipeline, PixelBuffer};
