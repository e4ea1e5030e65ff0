//! Offline render entry point.
//!
//! A render sanitizes the settings, builds the stage chain, and folds the
//! source buffer through it. Every call is independent; the only shared state
//! is the read-only [`RenderContext`].

mod cancel;
mod report;

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::{debug, info, warn};
use voxshift_spec::EffectSettings;

use crate::buffer::SampleBuffer;
use crate::context::RenderContext;
use crate::effects::build_chain;
use crate::error::{AudioError, AudioResult};
use crate::rng::{derive_component_seed, rng_for};

pub use cancel::CancelToken;
pub use report::{RenderReport, StageTiming};

/// Renders `source` through the effect chain described by `settings`.
///
/// # Arguments
/// * `ctx` - Render context supplying FFT plans
/// * `source` - Decoded source audio
/// * `settings` - Effect settings; out-of-range amounts are clamped
/// * `seed` - Seed for the reverb impulse response; `None` draws from entropy
///
/// # Returns
/// A new buffer with every sample in [-1, 1]. An empty source yields an empty
/// buffer with the same sample rate and channel count.
pub fn render(
    ctx: &RenderContext,
    source: &SampleBuffer,
    settings: &EffectSettings,
    seed: Option<u32>,
) -> AudioResult<SampleBuffer> {
    run(ctx, source, settings, seed, None).map(|(buffer, _)| buffer)
}

/// Like [`render`], but checks `cancel` before every stage.
///
/// Returns [`AudioError::Cancelled`] if the token is set; no partial output is
/// produced.
pub fn render_with_cancel(
    ctx: &RenderContext,
    source: &SampleBuffer,
    settings: &EffectSettings,
    seed: Option<u32>,
    cancel: &CancelToken,
) -> AudioResult<SampleBuffer> {
    run(ctx, source, settings, seed, Some(cancel)).map(|(buffer, _)| buffer)
}

/// Like [`render`], but also returns per-stage timings.
pub fn render_with_report(
    ctx: &RenderContext,
    source: &SampleBuffer,
    settings: &EffectSettings,
    seed: Option<u32>,
) -> AudioResult<(SampleBuffer, RenderReport)> {
    run(ctx, source, settings, seed, None)
}

fn run(
    ctx: &RenderContext,
    source: &SampleBuffer,
    settings: &EffectSettings,
    seed: Option<u32>,
    cancel: Option<&CancelToken>,
) -> AudioResult<(SampleBuffer, RenderReport)> {
    let sanitized = settings.sanitized()?;
    for field in &sanitized.clamped {
        warn!(field = *field, "effect setting out of range, clamped");
    }
    let settings = sanitized.settings;

    let mut report = RenderReport::new(source.frame_count());
    if source.is_empty() {
        debug!("empty source, nothing to render");
        return Ok((source.clone(), report));
    }

    let chain = build_chain(&settings);
    let mut rng = rng_for(seed.map(|s| derive_component_seed(s, "reverb")));
    let started = Instant::now();

    let mut current = source.clone();
    for stage in &chain {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            debug!(stage = stage.name(), "render cancelled");
            return Err(AudioError::Cancelled);
        }

        let stage_started = Instant::now();
        let next = stage.apply(ctx, &current, &mut rng)?;
        let timing = StageTiming {
            name: stage.name(),
            input_frames: current.frame_count(),
            output_frames: next.frame_count(),
            elapsed: stage_started.elapsed(),
        };
        debug!(
            stage = timing.name,
            input_frames = timing.input_frames,
            output_frames = timing.output_frames,
            elapsed_us = timing.elapsed.as_micros() as u64,
            "stage complete"
        );
        report.stages.push(timing);
        current = next;
    }

    report.output_frames = current.frame_count();
    report.elapsed = started.elapsed();
    info!(
        preset = settings.voice_preset.as_str(),
        stages = report.stages.len(),
        input_frames = report.input_frames,
        output_frames = report.output_frames,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "render complete"
    );

    Ok((current, report))
}
