use thiserror::Error;

/// Caller input that violates an operation's precondition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Malformed hex color: {0:?}")]
    MalformedHex(String),

    #[error("Blend ratio must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),

    #[error("Contrast factor {factor} is not valid for {level} contrast")]
    ContrastOutOfRange { level: &'static str, factor: f32 },

    #[error("Contrast factor must be finite, got {0}")]
    NonFiniteFactor(f32),

    #[error("Quality must be within 1..=100, got {0}")]
    QualityOutOfRange(u8),
}

#[derive(Error, Debug)]
pub enum PrepError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Failed to encode {path}: {message}")]
    Encode { path: String, message: String },

    #[error("Output {path} was already written for {claimed_by}")]
    DuplicateOutput { path: String, claimed_by: String },

    #[error("Output {0} would overwrite an input image")]
    OverwritesInput(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
