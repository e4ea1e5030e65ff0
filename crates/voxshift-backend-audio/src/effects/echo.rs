//! Feedback echo.
//!
//! A single delay line whose output is fed back into its input, producing
//! repeats spaced by the delay time that decay by the feedback gain.

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::delay_line::DelayLine;

/// Delay between repeats in seconds.
pub const ECHO_DELAY_SECONDS: f64 = 0.3;

/// Gains derived from an echo amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EchoGains {
    /// Portion of the delayed signal fed back into the line.
    pub feedback: f64,
    /// Level of the delayed signal in the output.
    pub wet: f64,
    /// Level of the input in the output.
    pub dry: f64,
}

impl EchoGains {
    /// Computes gains for an amount in [0, 1].
    pub fn for_amount(amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            feedback: 0.4 * amount,
            wet: 0.5 * amount,
            dry: 1.0 - 0.3 * amount,
        }
    }
}

/// Delay time in frames at the given sample rate.
pub fn delay_frames(sample_rate: u32) -> usize {
    ((ECHO_DELAY_SECONDS * sample_rate as f64).round() as usize).max(1)
}

/// Applies the echo stage.
///
/// With delay `D` the line holds `d[n] = x[n-D] + feedback * d[n-D]` and the
/// output is `dry * x[n] + wet * d[n]`. Repeats past the input length are
/// dropped.
pub fn apply(buffer: &SampleBuffer, amount: f64) -> AudioResult<SampleBuffer> {
    let gains = EchoGains::for_amount(amount);
    let delay = delay_frames(buffer.sample_rate());

    let channels = buffer
        .channels()
        .iter()
        .map(|input| {
            let mut line = DelayLine::new(delay);
            input
                .iter()
                .map(|&x| {
                    let x = x as f64;
                    let delayed = line.read(delay);
                    line.write(x + delayed * gains.feedback);
                    (x * gains.dry + delayed * gains.wet) as f32
                })
                .collect()
        })
        .collect();

    buffer.with_channels(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(sample_rate: u32, frames: usize) -> SampleBuffer {
        let mut samples = vec![0.0f32; frames];
        samples[0] = 1.0;
        SampleBuffer::mono(sample_rate, samples).unwrap()
    }

    #[test]
    fn test_gains_for_amount() {
        let gains = EchoGains::for_amount(1.0);
        assert!((gains.feedback - 0.4).abs() < 1e-12);
        assert!((gains.wet - 0.5).abs() < 1e-12);
        assert!((gains.dry - 0.7).abs() < 1e-12);
        assert_eq!(EchoGains::for_amount(0.0).dry, 1.0);
    }

    #[test]
    fn test_delay_frames() {
        assert_eq!(delay_frames(44100), 13230);
        assert_eq!(delay_frames(1000), 300);
    }

    #[test]
    fn test_repeats_decay_by_feedback() {
        // 1 kHz keeps the delay at exactly 300 frames
        let out = apply(&impulse(1000, 1000), 1.0).unwrap();
        let ch = out.channel(0).unwrap();

        assert!((ch[0] - 0.7).abs() < 1e-6, "dry impulse");
        assert!(ch[1..300].iter().all(|s| s.abs() < 1e-9));
        assert!((ch[300] - 0.5).abs() < 1e-6, "first repeat = wet");
        assert!((ch[600] - 0.5 * 0.4).abs() < 1e-6, "second repeat scaled by feedback");
        assert!((ch[900] - 0.5 * 0.4 * 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_length_preserved() {
        let buffer = SampleBuffer::stereo(8000, vec![0.1; 1234], vec![0.2; 1234]).unwrap();
        let out = apply(&buffer, 0.6).unwrap();
        assert_eq!(out.frame_count(), 1234);
        assert_eq!(out.channel_count(), 2);
    }
}
