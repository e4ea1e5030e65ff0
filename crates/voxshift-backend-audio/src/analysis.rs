//! Amplitude envelope at animation frame rate.

use voxshift_spec::SpecError;

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

/// Computes the mean absolute amplitude of channel 0 per animation frame.
///
/// The window is `floor(sample_rate / frame_rate)` samples. The final window
/// may be shorter and is averaged over its actual length, so the envelope has
/// `ceil(frames / window)` entries.
///
/// # Errors
/// [`SpecError::InvalidFrameRate`] if `frame_rate` is zero or higher than the
/// sample rate (which would make the window empty).
pub fn analyze(buffer: &SampleBuffer, frame_rate: u32) -> AudioResult<Vec<f32>> {
    let window = window_len(buffer.sample_rate(), frame_rate)?;
    let samples = match buffer.channel(0) {
        Some(samples) => samples,
        None => return Ok(Vec::new()),
    };

    Ok(samples
        .chunks(window)
        .map(|chunk| {
            let sum: f64 = chunk.iter().map(|&s| s.abs() as f64).sum();
            (sum / chunk.len() as f64) as f32
        })
        .collect())
}

/// Samples per envelope frame.
pub fn window_len(sample_rate: u32, frame_rate: u32) -> Result<usize, SpecError> {
    if frame_rate == 0 || frame_rate > sample_rate {
        return Err(SpecError::InvalidFrameRate { frame_rate });
    }
    Ok((sample_rate / frame_rate) as usize)
}
