//! Individual preprocessing steps

pub mod binarize;
pub mod contrast;
pub mod grayscale;
pub mod rotate;
