//! Image preprocessing module for OCR enhancement
//!
//! Every step borrows its input and returns a new image, so the same source
//! can be prepared with different options side by side.

pub mod buffer;
pub mod level;
pub mod pipeline;
pub mod steps;

pub use buffer::PixelBuffer;
pub use level::{ContrastLevel, Factor};
pub use pipeline::{
    prepare_ocr, OcrOptions, Pipeline, PreprocessingReport, PreprocessingResult, StepTiming,
};
