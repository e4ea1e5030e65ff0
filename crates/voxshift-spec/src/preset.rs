//! Voice preset table.

use serde::{Deserialize, Serialize};

/// A named voice transformation with a fixed base pitch and formant pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VoicePreset {
    /// No transformation; only the user multiplier applies.
    #[default]
    None,
    MaleToFemale,
    FemaleToMale,
    AdultToChild,
    ChildToAdult,
    /// Forces waveshaper distortion even when no distortion amount is set.
    Robot,
    Elderly,
}

impl VoicePreset {
    /// Every preset, in display order.
    pub const ALL: [VoicePreset; 7] = [
        VoicePreset::None,
        VoicePreset::MaleToFemale,
        VoicePreset::FemaleToMale,
        VoicePreset::AdultToChild,
        VoicePreset::ChildToAdult,
        VoicePreset::Robot,
        VoicePreset::Elderly,
    ];

    /// Playback-rate multiplier applied before the user multiplier.
    pub fn base_pitch(&self) -> f64 {
        match self {
            VoicePreset::None => 1.0,
            VoicePreset::MaleToFemale => 1.5,
            VoicePreset::FemaleToMale => 0.7,
            VoicePreset::AdultToChild => 1.8,
            VoicePreset::ChildToAdult => 0.6,
            VoicePreset::Robot => 1.0,
            VoicePreset::Elderly => 0.9,
        }
    }

    /// Formant scaling paired with the base pitch.
    ///
    /// Reported alongside the preset; the rate stage shifts formants together
    /// with pitch, so this value is informational.
    pub fn base_formant(&self) -> f64 {
        match self {
            VoicePreset::None => 1.0,
            VoicePreset::MaleToFemale => 1.2,
            VoicePreset::FemaleToMale => 0.8,
            VoicePreset::AdultToChild => 1.3,
            VoicePreset::ChildToAdult => 0.75,
            VoicePreset::Robot => 1.0,
            VoicePreset::Elderly => 0.95,
        }
    }

    /// Whether the preset forces the distortion stage on.
    pub fn forces_distortion(&self) -> bool {
        matches!(self, VoicePreset::Robot)
    }

    /// Returns the kebab-case identifier used in job files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoicePreset::None => "none",
            VoicePreset::MaleToFemale => "male-to-female",
            VoicePreset::FemaleToMale => "female-to-male",
            VoicePreset::AdultToChild => "adult-to-child",
            VoicePreset::ChildToAdult => "child-to-adult",
            VoicePreset::Robot => "robot",
            VoicePreset::Elderly => "elderly",
        }
    }

    /// Parses a kebab-case identifier.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
