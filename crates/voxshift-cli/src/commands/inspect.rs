//! Inspect command implementation
//!
//! Prints the layout and basic levels of an audio file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use voxshift_backend_audio::wav::compute_pcm_hash;
use voxshift_backend_audio::{Decoder, WavDecoder};

use crate::input::mime_hint;

/// Summary of one audio file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub sample_rate: u32,
    pub channels: usize,
    pub frames: usize,
    pub duration_seconds: f64,
    pub peak: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

impl InspectReport {
    /// Decodes `bytes` and summarizes them.
    pub fn from_bytes(bytes: &[u8], mime_hint: &str) -> Result<Self> {
        let buffer = WavDecoder
            .decode(bytes, mime_hint)
            .context("Failed to decode audio")?;
        Ok(Self {
            sample_rate: buffer.sample_rate(),
            channels: buffer.channel_count(),
            frames: buffer.frame_count(),
            duration_seconds: buffer.duration_seconds(),
            peak: buffer.peak(),
            pcm_hash: compute_pcm_hash(bytes),
        })
    }
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the audio file
/// * `json` - Print machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let path = Path::new(input);
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", input))?;
    let report = InspectReport::from_bytes(&bytes, mime_hint(path))?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!("  {:<12} {} Hz", "Sample rate:".dimmed(), report.sample_rate);
    println!("  {:<12} {}", "Channels:".dimmed(), report.channels);
    println!(
        "  {:<12} {} ({:.3}s)",
        "Frames:".dimmed(),
        report.frames,
        report.duration_seconds
    );
    println!("  {:<12} {:.4}", "Peak:".dimmed(), report.peak);
    if let Some(hash) = &report.pcm_hash {
        println!("  {:<12} {}", "PCM hash:".dimmed(), hash);
    }

    Ok(ExitCode::SUCCESS)
}
