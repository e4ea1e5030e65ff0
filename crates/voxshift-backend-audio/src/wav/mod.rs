//! Deterministic 16-bit PCM WAV encoder.
//!
//! This module writes canonical 44-byte-header WAV files with no timestamps or
//! optional chunks, so identical buffers always encode to identical bytes. The
//! BLAKE3 hash of the PCM body identifies a render independently of the header.

mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::{WavFormat, WAV_HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{encode, sample_to_pcm16, write_wav};
