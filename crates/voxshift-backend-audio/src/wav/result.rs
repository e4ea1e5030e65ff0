//! Encoded render result.

use super::format::WAV_HEADER_LEN;
use super::writer::encode;
use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

/// An encoded WAV file with identifying metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames per channel.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes a buffer.
    pub fn from_buffer(buffer: &SampleBuffer) -> AudioResult<Self> {
        let wav_data = encode(buffer)?;
        let pcm_hash = blake3::hash(&wav_data[WAV_HEADER_LEN..])
            .to_hex()
            .to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            channels: buffer.channel_count() as u16,
            sample_rate: buffer.sample_rate(),
            num_frames: buffer.frame_count(),
        })
    }

    /// Returns true for two-channel output.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
