//! Error types for the audio backend.

use thiserror::Error;
use voxshift_spec::SpecError;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while decoding, rendering, or encoding audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Input bytes could not be interpreted as audio.
    #[error("could not decode audio: {message}")]
    Decode {
        /// Decoder message.
        message: String,
    },

    /// A buffer broke one of its structural guarantees. Indicates a defect.
    #[error("invariant violation: {message}")]
    InvariantViolation {
        /// What was violated.
        message: String,
    },

    /// Settings or parameters were rejected.
    #[error("configuration error: {0}")]
    Config(#[from] SpecError),

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A shared processing resource could not be obtained.
    #[error("resource unavailable: {message}")]
    ResourceUnavailable {
        /// Error message.
        message: String,
    },

    /// The render was cancelled between stages.
    #[error("render cancelled")]
    Cancelled,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a resource unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            message: message.into(),
        }
    }

    /// Returns a stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Decode { .. } => "AUDIO_001",
            AudioError::InvariantViolation { .. } => "AUDIO_002",
            AudioError::Config(e) => e.code(),
            AudioError::InvalidParameter { .. } => "AUDIO_003",
            AudioError::ResourceUnavailable { .. } => "AUDIO_004",
            AudioError::Cancelled => "AUDIO_005",
            AudioError::Io(_) => "AUDIO_006",
        }
    }

    /// Returns the error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        match self {
            AudioError::Config(_) | AudioError::InvalidParameter { .. } => "config",
            AudioError::Decode { .. } => "decode",
            _ => "audio",
        }
    }

    /// Whether retrying the same input could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AudioError::ResourceUnavailable { .. } | AudioError::Cancelled | AudioError::Io(_)
        )
    }
}
