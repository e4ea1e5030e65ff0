//! Mouth-shape and lipsync parameter types.

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, SpecError};

/// Default analysis frame rate for animation tracks.
pub const DEFAULT_FRAME_RATE: u32 = 30;
/// Default smoothing half-width in frames.
pub const DEFAULT_WINDOW_RADIUS: usize = 3;
/// Default loudness threshold the classification bands are fractions of.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Discrete mouth shape for one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouthShape {
    Closed,
    SlightlyOpen,
    Open,
    WideOpen,
}

impl MouthShape {
    /// Returns the kebab-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            MouthShape::Closed => "closed",
            MouthShape::SlightlyOpen => "slightly-open",
            MouthShape::Open => "open",
            MouthShape::WideOpen => "wide-open",
        }
    }

    /// How far open the mouth is, 0 (closed) to 3 (wide open).
    pub fn openness(&self) -> u8 {
        match self {
            MouthShape::Closed => 0,
            MouthShape::SlightlyOpen => 1,
            MouthShape::Open => 2,
            MouthShape::WideOpen => 3,
        }
    }
}

impl std::fmt::Display for MouthShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for deriving an animation track from audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LipsyncParams {
    /// Envelope level treated as full loudness.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Animation frames per second.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Whether majority-vote smoothing runs.
    #[serde(default = "default_smoothing")]
    pub smoothing: bool,
    /// Smoothing half-width in frames.
    #[serde(default = "default_window_radius")]
    pub window_radius: usize,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}

fn default_smoothing() -> bool {
    true
}

fn default_window_radius() -> usize {
    DEFAULT_WINDOW_RADIUS
}

impl Default for LipsyncParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            frame_rate: DEFAULT_FRAME_RATE,
            smoothing: true,
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

impl LipsyncParams {
    /// Rejects parameters that have no sane default.
    pub fn validate(&self) -> Result<(), SpecError> {
        let threshold = require_finite("threshold", self.threshold)?;
        if threshold <= 0.0 {
            return Err(SpecError::OutOfRange {
                name: "threshold".to_string(),
                value: threshold,
                expected: "a positive level".to_string(),
            });
        }
        if self.frame_rate == 0 {
            return Err(SpecError::InvalidFrameRate {
                frame_rate: self.frame_rate,
            });
        }
        Ok(())
    }
}
