//! Effect settings consumed by the render pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, SpecError};
use crate::preset::VoicePreset;

/// Lowest accepted user pitch multiplier.
pub const MIN_PITCH_MULTIPLIER: f64 = 0.5;
/// Highest accepted user pitch multiplier.
pub const MAX_PITCH_MULTIPLIER: f64 = 2.0;

/// Parameters for one render of the effect chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectSettings {
    /// Voice preset supplying the base pitch.
    #[serde(default)]
    pub voice_preset: VoicePreset,
    /// User multiplier on top of the preset's base pitch (0.5-2.0).
    #[serde(default = "default_pitch_multiplier")]
    pub pitch_multiplier: f64,
    /// Convolution reverb amount (0.0-1.0).
    #[serde(default)]
    pub reverb_amount: f64,
    /// Feedback echo amount (0.0-1.0).
    #[serde(default)]
    pub echo_amount: f64,
    /// Waveshaper distortion amount (0.0-1.0).
    #[serde(default)]
    pub distortion_amount: f64,
}

fn default_pitch_multiplier() -> f64 {
    1.0
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            voice_preset: VoicePreset::None,
            pitch_multiplier: default_pitch_multiplier(),
            reverb_amount: 0.0,
            echo_amount: 0.0,
            distortion_amount: 0.0,
        }
    }
}

/// Settings after range clamping, with a record of which fields moved.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedSettings {
    /// Settings with every field inside its accepted range.
    pub settings: EffectSettings,
    /// Names of the fields that had to be clamped.
    pub clamped: Vec<&'static str>,
}

impl EffectSettings {
    /// Creates settings for a preset with every effect amount at zero.
    pub fn with_preset(voice_preset: VoicePreset) -> Self {
        Self {
            voice_preset,
            ..Self::default()
        }
    }

    /// Sets the reverb amount.
    pub fn reverb(mut self, amount: f64) -> Self {
        self.reverb_amount = amount;
        self
    }

    /// Sets the echo amount.
    pub fn echo(mut self, amount: f64) -> Self {
        self.echo_amount = amount;
        self
    }

    /// Sets the distortion amount.
    pub fn distortion(mut self, amount: f64) -> Self {
        self.distortion_amount = amount;
        self
    }

    /// Sets the user pitch multiplier.
    pub fn pitch(mut self, multiplier: f64) -> Self {
        self.pitch_multiplier = multiplier;
        self
    }

    /// Clamps every field into range.
    ///
    /// Non-finite values have no sane default and are rejected.
    pub fn sanitized(&self) -> Result<SanitizedSettings, SpecError> {
        let mut clamped = Vec::new();
        let mut clamp = |name: &'static str, value: f64, min: f64, max: f64| {
            let value = require_finite(name, value)?;
            let c = value.clamp(min, max);
            if c != value {
                clamped.push(name);
            }
            Ok::<f64, SpecError>(c)
        };

        let settings = EffectSettings {
            voice_preset: self.voice_preset,
            pitch_multiplier: clamp(
                "pitch_multiplier",
                self.pitch_multiplier,
                MIN_PITCH_MULTIPLIER,
                MAX_PITCH_MULTIPLIER,
            )?,
            reverb_amount: clamp("reverb_amount", self.reverb_amount, 0.0, 1.0)?,
            echo_amount: clamp("echo_amount", self.echo_amount, 0.0, 1.0)?,
            distortion_amount: clamp("distortion_amount", self.distortion_amount, 0.0, 1.0)?,
        };

        Ok(SanitizedSettings { settings, clamped })
    }

    /// Combined playback rate: preset base pitch times the user multiplier.
    pub fn playback_rate(&self) -> f64 {
        self.voice_preset.base_pitch() * self.pitch_multiplier
    }

    /// Distortion amount to apply, if the stage is active.
    ///
    /// The robot preset forces the stage on at 0.5 when no amount is set.
    pub fn effective_distortion(&self) -> Option<f64> {
        if self.distortion_amount > 0.0 {
            Some(self.distortion_amount)
        } else if self.voice_preset.forces_distortion() {
            Some(0.5)
        } else {
            None
        }
    }
}
