//! Playback-rate resampling.
//!
//! Reading the source faster or slower shifts pitch and duration together,
//! the same way a tape or sampler does. Formants move with the pitch.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Number of output frames for a given input length and playback rate.
pub fn output_frames(input_frames: usize, playback_rate: f64) -> usize {
    (input_frames as f64 / playback_rate).ceil() as usize
}

/// Resamples every channel at `playback_rate` with linear interpolation.
///
/// Output frame `j` reads the source at position `j * playback_rate`. Reads
/// past the last frame hold the final sample. A rate of exactly 1.0 copies the
/// source unchanged.
pub fn apply(buffer: &SampleBuffer, playback_rate: f64) -> AudioResult<SampleBuffer> {
    if !playback_rate.is_finite() || playback_rate <= 0.0 {
        return Err(AudioError::invalid_param(
            "playback_rate",
            format!("must be positive and finite, got {}", playback_rate),
        ));
    }

    if playback_rate == 1.0 {
        return Ok(buffer.clone());
    }

    let out_len = output_frames(buffer.frame_count(), playback_rate);
    let channels = buffer
        .channels()
        .iter()
        .map(|ch| resample_channel(ch, playback_rate, out_len))
        .collect();

    buffer.with_channels(channels)
}

fn resample_channel(input: &[f32], playback_rate: f64, out_len: usize) -> Vec<f32> {
    let read = |i: usize| input.get(i).or(input.last()).copied().unwrap_or(0.0) as f64;

    (0..out_len)
        .map(|j| {
            let pos = j as f64 * playback_rate;
            let index = pos.floor() as usize;
            let frac = pos - index as f64;

            // Linear interpolation
            let s = read(index) * (1.0 - frac) + read(index + 1) * frac;
            s as f32
        })
        .collect()
}
