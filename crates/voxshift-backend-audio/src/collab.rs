//! Interfaces to the code around the renderer.
//!
//! Decoding uploaded media, playing a preview, and delivering the rendered
//! file are owned by the host application. The renderer only sees these
//! traits. A PCM WAV decoder is provided because the renderer's own output is
//! WAV.

use std::io::Cursor;

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// MIME type of rendered output.
pub const WAV_MIME: &str = "audio/wav";

const WAV_MIME_ALIASES: [&str; 4] = ["audio/wav", "audio/x-wav", "audio/wave", "audio/vnd.wave"];

/// Turns encoded media into a sample buffer.
pub trait Decoder {
    /// Decodes `bytes`. `mime_hint` may be empty when the type is unknown.
    fn decode(&self, bytes: &[u8], mime_hint: &str) -> AudioResult<SampleBuffer>;
}

/// A finished file ready for playback or download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Encoded file contents.
    pub bytes: Vec<u8>,
    /// File name offered to the user.
    pub suggested_filename: String,
    /// MIME type of `bytes`.
    pub mime_type: String,
}

impl ExportArtifact {
    /// Wraps encoded WAV bytes, naming the file `<stem>.wav`.
    pub fn wav(bytes: Vec<u8>, stem: &str) -> Self {
        Self {
            bytes,
            suggested_filename: format!("{}.wav", stem),
            mime_type: WAV_MIME.to_string(),
        }
    }
}

/// Plays an artifact back to the user.
pub trait PlaybackSurface {
    /// Starts playback.
    fn play(&mut self, artifact: &ExportArtifact);
}

/// Delivers an artifact (download, disk, upload).
pub trait ExportSink {
    /// Exports the artifact.
    fn export(&mut self, artifact: &ExportArtifact) -> AudioResult<()>;
}

/// Decodes RIFF/WAVE files with integer or float PCM.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavDecoder;

impl Decoder for WavDecoder {
    fn decode(&self, bytes: &[u8], mime_hint: &str) -> AudioResult<SampleBuffer> {
        if !mime_hint.is_empty() && !WAV_MIME_ALIASES.contains(&mime_hint) {
            return Err(AudioError::decode(format!(
                "unsupported media type '{}'",
                mime_hint
            )));
        }

        let reader = hound::WavReader::new(Cursor::new(bytes))
            .map_err(|e| AudioError::decode(e.to_string()))?;
        let spec = reader.spec();

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Int => {
                if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                    return Err(AudioError::decode(format!(
                        "unsupported bit depth {}",
                        spec.bits_per_sample
                    )));
                }
                // Full scale is the largest positive code, matching the encoder
                let max_val = ((1i64 << (spec.bits_per_sample - 1)) - 1).max(1) as f64;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|s| (s as f64 / max_val).clamp(-1.0, 1.0) as f32))
                    .collect::<Result<_, _>>()
                    .map_err(|e| AudioError::decode(e.to_string()))?
            }
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::decode(e.to_string()))?,
        };

        tracing::debug!(
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            bits = spec.bits_per_sample,
            samples = samples.len(),
            "decoded wav"
        );

        SampleBuffer::from_interleaved(spec.sample_rate, spec.channels as usize, &samples)
    }
}
