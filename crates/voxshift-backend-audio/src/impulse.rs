//! Synthetic reverb impulse responses.
//!
//! The reverb stage convolves with decaying stereo noise instead of a recorded
//! room. Each channel draws independent noise, which decorrelates left and
//! right and widens the tail.

use rand::Rng;
use voxshift_spec::{require_finite, require_sample_rate};

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

/// Impulse response length in seconds.
pub const IMPULSE_SECONDS: u32 = 2;
/// Impulse responses are always stereo.
pub const IMPULSE_CHANNELS: usize = 2;

/// Generates a 2-second stereo impulse response.
///
/// Frame `i` of each channel is `uniform(-1, 1) * (1 - i/n)^2 * intensity`.
/// The left channel is drawn in full before the right, so a seeded `rng`
/// reproduces the same response.
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz (non-zero)
/// * `intensity` - Overall level, clamped to [0, 1]
/// * `rng` - Noise source
pub fn generate_impulse<R: Rng>(
    sample_rate: u32,
    intensity: f64,
    rng: &mut R,
) -> AudioResult<SampleBuffer> {
    let sample_rate = require_sample_rate(sample_rate)?;
    let intensity = require_finite("intensity", intensity)?.clamp(0.0, 1.0);
    let frames = IMPULSE_SECONDS as usize * sample_rate as usize;

    let channels = (0..IMPULSE_CHANNELS)
        .map(|_| {
            (0..frames)
                .map(|i| {
                    let remaining = 1.0 - i as f64 / frames as f64;
                    let decay = remaining * remaining;
                    let noise: f64 = rng.gen_range(-1.0..1.0);
                    (noise * decay * intensity) as f32
                })
                .collect()
        })
        .collect();

    SampleBuffer::new(sample_rate, channels)
}
