//! Mouth-shape sequencing from the amplitude envelope.
//!
//! This is a loudness heuristic: louder frames open the mouth wider. It does
//! not recognize phonemes.

use serde::Serialize;
use voxshift_spec::{LipsyncParams, MouthShape};

use crate::analysis::analyze;
use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

/// Mouth shapes at a fixed frame rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationTrack {
    /// Frames per second.
    pub frame_rate: u32,
    /// One shape per frame.
    pub shapes: Vec<MouthShape>,
}

impl AnimationTrack {
    /// Shape to display `elapsed_seconds` into playback.
    ///
    /// Times past the end hold the last frame; an empty track is always
    /// closed.
    pub fn shape_at(&self, elapsed_seconds: f64) -> MouthShape {
        let last = match self.shapes.len().checked_sub(1) {
            Some(last) => last,
            None => return MouthShape::Closed,
        };
        if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
            return self.shapes[0];
        }
        let frame = (elapsed_seconds * self.frame_rate as f64).floor() as usize;
        self.shapes[frame.min(last)]
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the track has no frames.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Track duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.shapes.len() as f64 / self.frame_rate as f64
    }
}

/// Maps envelope levels to mouth shapes.
///
/// Bands are fractions of `threshold`: below 0.3 closed, below 0.6 slightly
/// open, below 0.8 open, otherwise wide open.
pub fn classify(envelope: &[f32], threshold: f64) -> Vec<MouthShape> {
    envelope
        .iter()
        .map(|&level| {
            let level = level as f64;
            if level < 0.3 * threshold {
                MouthShape::Closed
            } else if level < 0.6 * threshold {
                MouthShape::SlightlyOpen
            } else if level < 0.8 * threshold {
                MouthShape::Open
            } else {
                MouthShape::WideOpen
            }
        })
        .collect()
}

/// Majority-vote smoothing over a sliding window.
///
/// Each frame at least `window_radius` frames from both ends takes the most
/// frequent shape in `[i - r, i + r]` of the input. On a tie, the shape seen
/// first in that window wins. Edge frames pass through unchanged, as does
/// everything when `enabled` is false.
pub fn smooth(shapes: &[MouthShape], window_radius: usize, enabled: bool) -> Vec<MouthShape> {
    let mut out = shapes.to_vec();
    if !enabled || shapes.len() <= 2 * window_radius {
        return out;
    }

    for i in window_radius..shapes.len() - window_radius {
        let window = &shapes[i - window_radius..=i + window_radius];
        out[i] = majority(window);
    }
    out
}

fn majority(window: &[MouthShape]) -> MouthShape {
    // First-seen order, at most four distinct shapes
    let mut counts: Vec<(MouthShape, usize)> = Vec::with_capacity(4);
    for &shape in window {
        match counts.iter_mut().find(|(s, _)| *s == shape) {
            Some((_, count)) => *count += 1,
            None => counts.push((shape, 1)),
        }
    }

    let mut best = counts[0];
    for &entry in &counts[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    best.0
}

/// Builds an animation track from audio.
///
/// Runs envelope analysis, classification, and smoothing with `params`.
pub fn build_track(buffer: &SampleBuffer, params: &LipsyncParams) -> AudioResult<AnimationTrack> {
    params.validate()?;
    let envelope = analyze(buffer, params.frame_rate)?;
    let shapes = classify(&envelope, params.threshold);
    let shapes = smooth(&shapes, params.window_radius, params.smoothing);

    tracing::debug!(
        frames = shapes.len(),
        frame_rate = params.frame_rate,
        smoothing = params.smoothing,
        "built animation track"
    );

    Ok(AnimationTrack {
        frame_rate: params.frame_rate,
        shapes,
    })
}
