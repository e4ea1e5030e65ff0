//! VoxShift Settings Library
//!
//! This crate provides the declarative parameter types shared by the VoxShift
//! audio backend and CLI.
//!
//! # Overview
//!
//! - **Effect settings**: voice preset, pitch multiplier, and reverb/echo/distortion amounts
//! - **Voice presets**: fixed (base pitch, base formant) table
//! - **Lipsync parameters**: threshold, frame rate, and smoothing window for mouth-shape tracks
//! - **Render jobs**: JSON job files bundling the above with an optional seed
//!
//! Amounts outside `[0, 1]` are clamped by [`EffectSettings::sanitized`]; values
//! with no sane default (NaN, zero frame rate) are rejected with a [`SpecError`].
//!
//! # Modules
//!
//! - [`error`]: Validation errors
//! - [`job`]: Render job files
//! - [`lipsync`]: Mouth shapes and lipsync parameters
//! - [`preset`]: Voice preset table
//! - [`settings`]: Effect settings and clamping

pub mod error;
pub mod job;
pub mod lipsync;
pub mod preset;
pub mod settings;

pub use error::{require_finite, require_sample_rate, SpecError};
pub use job::RenderJob;
pub use lipsync::{
    LipsyncParams, MouthShape, DEFAULT_FRAME_RATE, DEFAULT_THRESHOLD, DEFAULT_WINDOW_RADIUS,
};
pub use preset::VoicePreset;
pub use settings::{
    EffectSettings, SanitizedSettings, MAX_PITCH_MULTIPLIER, MIN_PITCH_MULTIPLIER,
};
