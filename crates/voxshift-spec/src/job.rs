//! Render job files.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::lipsync::LipsyncParams;
use crate::settings::EffectSettings;

/// A render request as stored in a JSON job file.
///
/// ```
/// use voxshift_spec::{RenderJob, VoicePreset};
///
/// let job = RenderJob::from_json(r#"{
///     "settings": { "voice_preset": "robot", "echo_amount": 0.4 },
///     "seed": 7
/// }"#).unwrap();
/// assert_eq!(job.settings.voice_preset, VoicePreset::Robot);
/// assert_eq!(job.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderJob {
    /// Effect chain parameters.
    #[serde(default)]
    pub settings: EffectSettings,
    /// Optional lipsync track parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lipsync: Option<LipsyncParams>,
    /// Seed for the reverb impulse response; absent means fresh entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl RenderJob {
    /// Parses a job from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the job to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
