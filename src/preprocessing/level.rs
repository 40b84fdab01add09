use crate::error::ValidationError;

/// A contrast multiplier whose range has already been checked.
///
/// Only [`ContrastLevel::high`] and [`ContrastLevel::low`] can build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor(f32);

impl Factor {
    pub fn get(self) -> f32 {
        self.0
    }
}

/// Contrast multiplier classified by its effect on pixel spread
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContrastLevel {
    /// Factor of exactly 1.0
    #[default]
    Normal,
    /// Factor strictly above 1.0
    High(Factor),
    /// Factor strictly below 1.0
    Low(Factor),
}

impl ContrastLevel {
    pub fn high(factor: f32) -> Result<Self, ValidationError> {
        check_finite(factor)?;
        if factor <= 1.0 {
            return Err(ValidationError::ContrastOutOfRange {
                level: "high",
                factor,
            });
        }
        Ok(Self::High(Factor(factor)))
    }

    pub fn low(factor: f32) -> Result<Self, ValidationError> {
        check_finite(factor)?;
        if factor >= 1.0 {
            return Err(ValidationError::ContrastOutOfRange {
                level: "low",
                factor,
            });
        }
        Ok(Self::Low(Factor(factor)))
    }

    /// Classify any finite factor. NaN and infinities are rejected.
    pub fn from_factor(factor: f32) -> Result<Self, ValidationError> {
        check_finite(factor)?;
        if factor == 1.0 {
            Ok(Self::Normal)
        } else if factor > 1.0 {
            Self::high(factor)
        } else {
            Self::low(factor)
        }
    }

    pub fn factor(&self) -> f32 {
        match self {
            Self::Normal => 1.0,
            Self::High(f) | Self::Low(f) => f.get(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High(_) => "high",
            Self::Low(_) => "low",
        }
    }
}

fn check_finite(factor: f32) -> Result<(), ValidationError> {
    if factor.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteFactor(factor))
    }
}
