//! Loading audio files and job files from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use voxshift_backend_audio::{Decoder, SampleBuffer, WavDecoder, WAV_MIME};
use voxshift_spec::RenderJob;

/// Guesses a MIME hint from a file extension. Unknown extensions give an
/// empty hint so the decoder sniffs the content.
pub fn mime_hint(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("wav") | Some("wave") => WAV_MIME,
        _ => "",
    }
}

/// Reads and decodes an audio file.
pub fn load_audio(path: &str) -> Result<SampleBuffer> {
    let path = Path::new(path);
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read audio file: {}", path.display()))?;
    WavDecoder
        .decode(&bytes, mime_hint(path))
        .with_context(|| format!("Failed to decode audio file: {}", path.display()))
}

/// Reads a job file, or returns the default job when no path is given.
pub fn load_job(path: Option<&str>) -> Result<RenderJob> {
    let Some(path) = path else {
        return Ok(RenderJob::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {}", path))?;
    RenderJob::from_json(&json).with_context(|| format!("Failed to parse job file: {}", path))
}
