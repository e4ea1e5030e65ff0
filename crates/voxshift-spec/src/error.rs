//! Error types for settings validation.

use thiserror::Error;

/// Errors raised while validating effect settings or lipsync parameters.
///
/// Amounts outside their range are clamped rather than rejected, so the
/// variants here cover values that have no sane default.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A parameter was NaN or infinite.
    #[error("parameter '{name}' must be a finite number")]
    NonFiniteParameter {
        /// Parameter name.
        name: String,
    },

    /// A parameter was outside any range it could be clamped into.
    #[error("parameter '{name}' is {value}, expected {expected}")]
    OutOfRange {
        /// Parameter name.
        name: String,
        /// Offending value.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: String,
    },

    /// Sample rate was zero.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Analysis frame rate was zero or too high for the sample rate.
    #[error("invalid frame rate: {frame_rate} fps")]
    InvalidFrameRate {
        /// The invalid frame rate.
        frame_rate: u32,
    },

    /// Job file could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Creates a non-finite parameter error.
    pub fn non_finite(name: impl Into<String>) -> Self {
        Self::NonFiniteParameter { name: name.into() }
    }

    /// Returns a stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::NonFiniteParameter { .. } => "CONFIG_001",
            SpecError::OutOfRange { .. } => "CONFIG_002",
            SpecError::InvalidSampleRate { .. } => "CONFIG_003",
            SpecError::InvalidFrameRate { .. } => "CONFIG_004",
            SpecError::Json(_) => "CONFIG_005",
        }
    }
}

/// Checks that a parameter is finite, returning it unchanged.
pub fn require_finite(name: &str, value: f64) -> Result<f64, SpecError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SpecError::non_finite(name))
    }
}

/// Checks that a sample rate is non-zero.
pub fn require_sample_rate(rate: u32) -> Result<u32, SpecError> {
    if rate == 0 {
        Err(SpecError::InvalidSampleRate { rate })
    } else {
        Ok(rate)
    }
}
