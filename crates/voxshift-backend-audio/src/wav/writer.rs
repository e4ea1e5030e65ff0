//! Buffer-to-WAV encoding.

use std::io::Write;

use super::format::{WavFormat, WAV_HEADER_LEN};
use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Converts one float sample to 16-bit PCM.
///
/// The sample is clamped to [-1, 1], scaled by 32767, and truncated toward zero.
#[inline]
pub fn sample_to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0) as i16
}

/// Encodes a buffer as a 16-bit PCM WAV file.
///
/// Samples are interleaved frame by frame. The output is allocated once at its
/// exact final size.
///
/// # Errors
/// Returns [`AudioError::InvariantViolation`] if a channel's length disagrees
/// with the buffer's frame count or if any sample is NaN or infinite.
pub fn encode(buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
    let frames = buffer.frame_count();
    let channels = buffer.channels();

    if let Some(index) = channels.iter().position(|ch| ch.len() != frames) {
        return Err(AudioError::invariant(format!(
            "channel {} has {} frames, buffer declares {}",
            index,
            channels[index].len(),
            frames
        )));
    }
    for (ch_index, ch) in channels.iter().enumerate() {
        if let Some(frame) = ch.iter().position(|s| !s.is_finite()) {
            return Err(AudioError::invariant(format!(
                "non-finite sample at channel {}, frame {}",
                ch_index, frame
            )));
        }
    }

    let channel_count = u16::try_from(buffer.channel_count())
        .map_err(|_| AudioError::invariant("too many channels for WAV"))?;
    let data_len = frames * channels.len() * 2;
    let data_len_u32 = u32::try_from(data_len)
        .ok()
        .filter(|len| len.checked_add(36).is_some())
        .ok_or_else(|| AudioError::invariant("buffer too large for a WAV container"))?;

    let format = WavFormat::pcm16(channel_count, buffer.sample_rate());
    let mut out = Vec::with_capacity(WAV_HEADER_LEN + data_len);
    format.write_header(&mut out, data_len_u32);

    for frame in 0..frames {
        for ch in channels {
            out.extend_from_slice(&sample_to_pcm16(ch[frame]).to_le_bytes());
        }
    }

    debug_assert_eq!(out.len(), WAV_HEADER_LEN + data_len);
    Ok(out)
}

/// Encodes a buffer and writes the WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &SampleBuffer) -> AudioResult<()> {
    let bytes = encode(buffer)?;
    writer.write_all(&bytes)?;
    Ok(())
}
