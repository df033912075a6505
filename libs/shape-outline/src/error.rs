//! # Outline Errors
//!
//! Error types for outline generation.

use thiserror::Error;

/// Errors that can occur while generating an outline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// Out-of-domain numeric input (non-positive radius, zero branches, ...)
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The captured randomness cannot cover the requested shape
    #[error("Insufficient entropy: {required} random values required, {available} available")]
    InsufficientEntropy { required: usize, available: usize },
}

impl OutlineError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an insufficient entropy error.
    pub fn insufficient_entropy(required: usize, available: usize) -> Self {
        Self::InsufficientEntropy {
            required,
            available,
        }
    }

    /// Returns true for [`OutlineError::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns true for [`OutlineError::InsufficientEntropy`].
    pub fn is_insufficient_entropy(&self) -> bool {
        matches!(self, Self::InsufficientEntropy { .. })
    }
}

/// Fails with [`OutlineError::InvalidParameter`] unless `value` is finite.
pub(crate) fn require_finite(name: &str, value: f64) -> Result<(), OutlineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OutlineError::invalid_parameter(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Fails with [`OutlineError::InvalidParameter`] unless `value` is finite and > 0.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), OutlineError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(OutlineError::invalid_parameter(format!(
            "{name} must be positive, got {value}"
        )))
    }
}
