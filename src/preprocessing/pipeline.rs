use crate::error::ValidationError;
use serde::Serialize;
use std::time::Instant;

use super::buffer::PixelBuffer;
use super::level::ContrastLevel;
use super::steps;

/// Knobs for the OCR preparation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OcrOptions {
    /// Counter-clockwise tilt correction in degrees
    pub tilt_degrees: f32,
    /// Contrast multiplier around the channel midpoint
    pub contrast_factor: f32,
    /// Brightness threshold for binarization
    pub threshold: u8,
    /// Run the binarize step at the end
    pub binarize: bool,
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            tilt_degrees: 0.0,
            contrast_factor: 1.4,
            threshold: steps::binarize::DEFAULT_THRESHOLD,
            binarize: true,
        }
    }
}

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Timing stats for one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessingReport {
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Contrast level the factor classified into
    pub contrast: &'static str,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone)]
pub struct PreprocessingResult<B> {
    pub image: B,
    pub report: PreprocessingReport,
}

/// Runs rotate, grayscale, contrast and (optionally) binarize in that order
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: OcrOptions,
}

impl Pipeline {
    pub fn new(options: OcrOptions) -> Self {
        Self { options }
    }

    /// Process an image, leaving the input untouched
    ///
    /// The contrast factor is validated before any pixel is touched.
    pub fn process<B: PixelBuffer>(
        &self,
        image: &B,
    ) -> Result<PreprocessingResult<B>, ValidationError> {
        let level = ContrastLevel::from_factor(self.options.contrast_factor)?;
        let radians = self.options.tilt_degrees.to_radians();

        let start = Instant::now();
        let mut steps_timing = Vec::new();

        let rotated = self.run_step("rotate", &mut steps_timing, || {
            steps::rotate::apply(image, radians)
        });
        let gray = self.run_step("grayscale", &mut steps_timing, || {
            steps::grayscale::apply(&*rotated)
        });
        let mut img = self.run_step("contrast", &mut steps_timing, || {
            steps::contrast::apply(&gray, level)
        });

        if self.options.binarize {
            let threshold = self.options.threshold;
            img = self.run_step("binarize", &mut steps_timing, || {
                steps::binarize::apply(&img, threshold)
            });
        }

        Ok(PreprocessingResult {
            image: img,
            report: PreprocessingReport {
                total_time_ms: start.elapsed().as_millis() as u64,
                contrast: level.as_str(),
                steps: steps_timing,
            },
        })
    }

    fn run_step<T, F>(&self, name: &str, timings: &mut Vec<StepTiming>, step_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        let step_start = Instant::now();
        let result = step_fn();
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms: step_start.elapsed().as_millis() as u64,
        });
        result
    }
}

/// Prepare an image for OCR: rotate, grayscale, contrast, then binarize
/// when `options.binarize` is set
///
/// Pure function of its inputs. `options.tilt_degrees` is converted to
/// radians before rotating.
pub fn prepare_ocr<B: PixelBuffer>(
    image: &B,
    options: &OcrOptions,
) -> Result<B, ValidationError> {
    Pipeline::new(*options)
        .process(image)
        .map(|result| result.image)
}
