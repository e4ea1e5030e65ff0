//! Multi-channel float sample buffer.

use voxshift_spec::require_sample_rate;

use crate::error::{AudioError, AudioResult};

/// Decoded or rendered audio: planar `f32` channels at a fixed sample rate.
///
/// Every channel holds exactly `frame_count` samples; constructors enforce
/// this so stages can index channels in lockstep. Buffers are never mutated in
/// place by the pipeline: each stage returns a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
    frame_count: usize,
}

impl SampleBuffer {
    /// Creates a buffer from planar channels.
    ///
    /// Fails if there are no channels, the sample rate is zero, or the
    /// channels differ in length.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> AudioResult<Self> {
        require_sample_rate(sample_rate)?;
        let frame_count = match channels.first() {
            Some(first) => first.len(),
            None => return Err(AudioError::invariant("buffer must have at least one channel")),
        };
        if let Some((index, ch)) = channels
            .iter()
            .enumerate()
            .find(|(_, ch)| ch.len() != frame_count)
        {
            return Err(AudioError::invariant(format!(
                "channel {} has {} frames, expected {}",
                index,
                ch.len(),
                frame_count
            )));
        }
        Ok(Self {
            sample_rate,
            channels,
            frame_count,
        })
    }

    /// Creates a single-channel buffer.
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> AudioResult<Self> {
        Self::new(sample_rate, vec![samples])
    }

    /// Creates a two-channel buffer.
    pub fn stereo(sample_rate: u32, left: Vec<f32>, right: Vec<f32>) -> AudioResult<Self> {
        Self::new(sample_rate, vec![left, right])
    }

    /// Creates a silent buffer.
    pub fn silence(sample_rate: u32, channel_count: usize, frame_count: usize) -> AudioResult<Self> {
        Self::new(sample_rate, vec![vec![0.0; frame_count]; channel_count])
    }

    /// Creates a buffer from interleaved samples.
    pub fn from_interleaved(
        sample_rate: u32,
        channel_count: usize,
        interleaved: &[f32],
    ) -> AudioResult<Self> {
        if channel_count == 0 {
            return Err(AudioError::invariant("buffer must have at least one channel"));
        }
        if interleaved.len() % channel_count != 0 {
            return Err(AudioError::invariant(format!(
                "{} interleaved samples do not divide into {} channels",
                interleaved.len(),
                channel_count
            )));
        }
        let frames = interleaved.len() / channel_count;
        let mut channels = vec![Vec::with_capacity(frames); channel_count];
        for frame in interleaved.chunks_exact(channel_count) {
            for (ch, &s) in channels.iter_mut().zip(frame) {
                ch.push(s);
            }
        }
        Self::new(sample_rate, channels)
    }

    /// Builds a buffer with the same sample rate from new channel data.
    pub fn with_channels(&self, channels: Vec<Vec<f32>>) -> AudioResult<Self> {
        Self::new(self.sample_rate, channels)
    }

    /// Builds a buffer with the same layout by mapping every sample.
    pub fn map_samples(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            sample_rate: self.sample_rate,
            channels: self
                .channels
                .iter()
                .map(|ch| ch.iter().map(|&s| f(s)).collect())
                .collect(),
            frame_count: self.frame_count,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Consumes the buffer, returning its channels.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }

    /// Largest absolute sample value across all channels.
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flat_map(|ch| ch.iter())
            .map(|s| s.abs())
            .fold(0.0f32, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_channels_rejected() {
        let err = SampleBuffer::stereo(44100, vec![0.0; 10], vec![0.0; 9]).unwrap_err();
        assert!(matches!(err, AudioError::InvariantViolation { .. }));
        assert!(err.to_string().contains("channel 1"));
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let err = SampleBuffer::mono(0, vec![0.0; 4]).unwrap_err();
        assert!(matches!(err, AudioError::Config(_)));
    }

    #[test]
    fn test_no_channels_rejected() {
        assert!(SampleBuffer::new(44100, vec![]).is_err());
    }

    #[test]
    fn test_from_interleaved() {
        let buffer =
            SampleBuffer::from_interleaved(8000, 2, &[0.1, -0.1, 0.2, -0.2, 0.3, -0.3]).unwrap();
        assert_eq!(buffer.frame_count(), 3);
        assert_eq!(buffer.channel(0).unwrap(), &[0.1, 0.2, 0.3]);
        assert_eq!(buffer.channel(1).unwrap(), &[-0.1, -0.2, -0.3]);
        assert!(SampleBuffer::from_interleaved(8000, 2, &[0.1, 0.2, 0.3]).is_err());
    }

    #[test]
    fn test_map_samples_keeps_layout() {
        let buffer = SampleBuffer::stereo(22050, vec![0.5; 4], vec![-0.5; 4]).unwrap();
        let doubled = buffer.map_samples(|s| s * 2.0);
        assert_eq!(doubled.frame_count(), 4);
        assert_eq!(doubled.channel_count(), 2);
        assert_eq!(doubled.peak(), 1.0);
        // Source untouched
        assert_eq!(buffer.peak(), 0.5);
    }

    #[test]
    fn test_duration() {
        let buffer = SampleBuffer::silence(48000, 1, 24000).unwrap();
        assert!((buffer.duration_seconds() - 0.5).abs() < 1e-12);
        assert!(!buffer.is_empty());
    }
}
