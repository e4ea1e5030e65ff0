//! Tests for the WAV encoder module.

use super::format::WavFormat;
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{encode, sample_to_pcm16, write_wav};
use crate::buffer::SampleBuffer;
use crate::error::AudioError;

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

// =========================================================================
// Format tests
// =========================================================================

#[test]
fn test_format_derived_fields() {
    let mono = WavFormat::pcm16(1, 44100);
    assert_eq!(mono.bytes_per_sample(), 2);
    assert_eq!(mono.block_align(), 2);
    assert_eq!(mono.byte_rate(), 88200);

    let stereo = WavFormat::pcm16(2, 48000);
    assert_eq!(stereo.block_align(), 4);
    assert_eq!(stereo.byte_rate(), 192000);
}

// =========================================================================
// Header tests
// =========================================================================

#[test]
fn test_header_layout_stereo() {
    let buffer = SampleBuffer::stereo(44100, vec![0.5; 100], vec![-0.5; 100]).unwrap();
    let wav = encode(&buffer).unwrap();

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(read_u32(&wav, 4), wav.len() as u32 - 8);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(read_u32(&wav, 16), 16);
    assert_eq!(read_u16(&wav, 20), 1);
    assert_eq!(read_u16(&wav, 22), 2);
    assert_eq!(read_u32(&wav, 24), 44100);
    assert_eq!(read_u32(&wav, 28), 44100 * 2 * 2);
    assert_eq!(read_u16(&wav, 32), 4);
    assert_eq!(read_u16(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(read_u32(&wav, 40), 400);
    assert_eq!(wav.len(), 44 + 400);
}

#[test]
fn test_empty_buffer_is_header_only() {
    let buffer = SampleBuffer::silence(22050, 1, 0).unwrap();
    let wav = encode(&buffer).unwrap();
    assert_eq!(wav.len(), 44);
    assert_eq!(read_u32(&wav, 4), 36);
    assert_eq!(read_u32(&wav, 40), 0);
}

// =========================================================================
// Sample conversion tests
// =========================================================================

#[test]
fn test_sample_conversion_truncates() {
    assert_eq!(sample_to_pcm16(0.0), 0);
    assert_eq!(sample_to_pcm16(1.0), 32767);
    assert_eq!(sample_to_pcm16(-1.0), -32767);
    // 0.5 * 32767 = 16383.5, truncated toward zero
    assert_eq!(sample_to_pcm16(0.5), 16383);
    assert_eq!(sample_to_pcm16(-0.5), -16383);
}

#[test]
fn test_out_of_range_samples_clamped() {
    assert_eq!(sample_to_pcm16(2.0), 32767);
    assert_eq!(sample_to_pcm16(-2.0), -32767);
}

#[test]
fn test_interleaving_order() {
    let buffer = SampleBuffer::stereo(8000, vec![1.0, 0.0], vec![-1.0, 0.5]).unwrap();
    let wav = encode(&buffer).unwrap();
    let pcm = extract_pcm_data(&wav).unwrap();
    let samples: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(samples, vec![32767, -32767, 0, 16383]);
}

// =========================================================================
// Failure tests
// =========================================================================

#[test]
fn test_non_finite_sample_fails_fast() {
    let buffer = SampleBuffer::mono(44100, vec![0.0, f32::NAN, 0.0]).unwrap();
    let err = encode(&buffer).unwrap_err();
    assert!(matches!(err, AudioError::InvariantViolation { .. }));
    assert!(err.to_string().contains("frame 1"));

    let buffer = SampleBuffer::mono(44100, vec![f32::INFINITY]).unwrap();
    assert!(encode(&buffer).is_err());
}

// =========================================================================
// Determinism and hashing tests
// =========================================================================

#[test]
fn test_encoding_determinism() {
    let samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.01).sin()).collect();
    let buffer = SampleBuffer::mono(44100, samples).unwrap();
    assert_eq!(encode(&buffer).unwrap(), encode(&buffer).unwrap());
}

#[test]
fn test_wav_result_hash_matches_pcm_hash() {
    let buffer = SampleBuffer::mono(44100, vec![0.5, -0.5, 0.3, -0.3]).unwrap();
    let result = WavResult::from_buffer(&buffer).unwrap();

    assert_eq!(result.channels, 1);
    assert!(!result.is_stereo());
    assert_eq!(result.num_frames, 4);
    assert_eq!(result.pcm_hash.len(), 64);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
}

#[test]
fn test_extract_pcm_rejects_non_riff() {
    assert!(extract_pcm_data(b"not a wav file at all, just text").is_none());
    assert!(extract_pcm_data(&[]).is_none());
}

#[test]
fn test_extract_pcm_skips_unknown_chunks() {
    let buffer = SampleBuffer::mono(8000, vec![0.25; 3]).unwrap();
    let wav = encode(&buffer).unwrap();

    // Splice an odd-sized LIST chunk between fmt and data
    let mut spliced = wav[..36].to_vec();
    spliced.extend_from_slice(b"LIST");
    spliced.extend_from_slice(&3u32.to_le_bytes());
    spliced.extend_from_slice(&[1, 2, 3, 0]);
    spliced.extend_from_slice(&wav[36..]);

    assert_eq!(extract_pcm_data(&spliced), extract_pcm_data(&wav));
}

#[test]
fn test_write_wav_matches_encode() {
    let buffer = SampleBuffer::stereo(16000, vec![0.1; 8], vec![0.2; 8]).unwrap();
    let mut out = Vec::new();
    write_wav(&mut out, &buffer).unwrap();
    assert_eq!(out, encode(&buffer).unwrap());
}
