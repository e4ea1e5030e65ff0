//! Waveshaper distortion with a generated transfer curve.

use std::f64::consts::PI;

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Number of entries in a transfer curve.
pub const CURVE_LEN: usize = 44100;
/// Oversampling factor used by the distortion stage.
pub const OVERSAMPLE: usize = 4;

/// Generates a soft-saturating transfer curve.
///
/// Entry `i` maps input `x = 2i/N - 1` to
/// `((3 + a) * x * 20 * π/180) / (π + a * |x|)`. Higher `amount` raises both
/// gain and compression. Since `x` spans `[-1, 1)`, the table is odd-symmetric
/// only up to one step: `curve[0]` and `-curve[N-1]` differ by about `1/N`.
pub fn generate_curve(amount: f64) -> Vec<f32> {
    let amount = if amount.is_finite() {
        amount.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let deg = PI / 180.0;

    (0..CURVE_LEN)
        .map(|i| {
            let x = (2.0 * i as f64) / CURVE_LEN as f64 - 1.0;
            (((3.0 + amount) * x * 20.0 * deg) / (PI + amount * x.abs())) as f32
        })
        .collect()
}

/// Looks up one sample in a transfer curve.
///
/// The sample is clamped to [-1, 1] and mapped to the nearest table index.
/// An empty curve passes the clamped sample through.
#[inline]
pub fn shape_sample(curve: &[f32], sample: f32) -> f32 {
    let Some(last) = curve.len().checked_sub(1) else {
        return sample.clamp(-1.0, 1.0);
    };
    let position = (sample.clamp(-1.0, 1.0) as f64 + 1.0) * 0.5 * last as f64;
    curve[(position.round() as usize).min(last)]
}

/// Shapes a channel with `factor`x oversampling.
///
/// The input is upsampled by linear interpolation, every sub-sample is looked
/// up in the curve, and each group of `factor` shaped sub-samples is averaged
/// back down to one output sample.
pub fn apply_oversampled(curve: &[f32], input: &[f32], factor: usize) -> Vec<f32> {
    let factor = factor.max(1);
    input
        .iter()
        .enumerate()
        .map(|(i, &current)| {
            let next = input.get(i + 1).copied().unwrap_or(current);
            let sum: f64 = (0..factor)
                .map(|k| {
                    let t = k as f32 / factor as f32;
                    let sub = current + (next - current) * t;
                    shape_sample(curve, sub) as f64
                })
                .sum();
            (sum / factor as f64) as f32
        })
        .collect()
}

/// Applies the distortion stage at the given amount.
pub fn apply(buffer: &SampleBuffer, amount: f64) -> AudioResult<SampleBuffer> {
    if !amount.is_finite() {
        return Err(AudioError::invalid_param(
            "distortion_amount",
            "must be a finite number",
        ));
    }
    let curve = generate_curve(amount);
    let channels = buffer
        .channels()
        .iter()
        .map(|ch| apply_oversampled(&curve, ch, OVERSAMPLE))
        .collect();
    buffer.with_channels(channels)
}
