//! VoxShift Audio Backend
//!
//! This crate renders voice effects offline and derives lipsync tracks:
//!
//! - **Rate** - Playback-rate resampling (pitch and speed together)
//! - **Reverb** - FFT convolution with a synthetic decaying-noise impulse response
//! - **Echo** - 0.3 s feedback delay
//! - **Distortion** - 4x oversampled waveshaper
//!
//! # Overview
//!
//! A render folds a [`SampleBuffer`] through an ordered list of [`effects::Stage`]
//! descriptors built from [`EffectSettings`](voxshift_spec::EffectSettings). The
//! result is clamped to [-1, 1] and can be encoded to 16-bit PCM WAV with
//! [`wav::encode`].
//!
//! # Determinism
//!
//! Only the reverb impulse response is random. Passing a seed gives
//! byte-identical output across runs; without one, the impulse response is
//! drawn from OS entropy and repeated renders differ slightly.
//!
//! # Example
//!
//! ```ignore
//! use voxshift_backend_audio::{render, wav, RenderContext, SampleBuffer};
//! use voxshift_spec::{EffectSettings, VoicePreset};
//!
//! let ctx = RenderContext::shared()?;
//! let settings = EffectSettings::with_preset(VoicePreset::Robot).reverb(0.3);
//! let output = render(&ctx, &source, &settings, Some(42))?;
//!
//! std::fs::write("output.wav", wav::encode(&output)?)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] - Main entry point for effect rendering
//! - [`analysis`] - Amplitude envelope at animation frame rate
//! - [`collab`] - Decoder and export traits, WAV decoder
//! - [`context`] - Shared FFT planning context
//! - [`effects`] - Effect stages and chain builder
//! - [`impulse`] - Synthetic impulse responses
//! - [`lipsync`] - Mouth-shape classification and smoothing
//! - [`rng`] - Seedable RNG
//! - [`wav`] - Deterministic WAV file writer

pub mod analysis;
pub mod buffer;
pub mod collab;
pub mod context;
pub mod effects;
pub mod error;
pub mod impulse;
pub mod lipsync;
pub mod render;
pub mod rng;
pub mod wav;

pub use analysis::analyze;
pub use buffer::SampleBuffer;
pub use collab::{Decoder, ExportArtifact, ExportSink, PlaybackSurface, WavDecoder, WAV_MIME};
pub use context::RenderContext;
pub use error::{AudioError, AudioResult};
pub use lipsync::{build_track, classify, smooth, AnimationTrack};
pub use render::{render, render_with_cancel, render_with_report, CancelToken, RenderReport};
