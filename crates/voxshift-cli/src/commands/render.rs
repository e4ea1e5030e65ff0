//! Render command implementation
//!
//! Decodes an input WAV, runs the effect chain, and exports the result to a
//! directory. Optionally writes a lipsync track for the rendered audio.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use voxshift_backend_audio::wav::WavResult;
use voxshift_backend_audio::{
    build_track, render_with_report, ExportArtifact, ExportSink, RenderContext,
};
use voxshift_spec::{RenderJob, VoicePreset};

use crate::input::{load_audio, load_job};
use crate::sink::DirectorySink;

/// Command-line values that override the job file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobOverrides {
    pub preset: Option<VoicePreset>,
    pub pitch: Option<f64>,
    pub reverb: Option<f64>,
    pub echo: Option<f64>,
    pub distortion: Option<f64>,
    pub seed: Option<u32>,
}

impl JobOverrides {
    /// Applies every set override to `job`.
    pub fn apply(&self, job: &mut RenderJob) {
        let settings = &mut job.settings;
        if let Some(preset) = self.preset {
            settings.voice_preset = preset;
        }
        if let Some(pitch) = self.pitch {
            settings.pitch_multiplier = pitch;
        }
        if let Some(reverb) = self.reverb {
            settings.reverb_amount = reverb;
        }
        if let Some(echo) = self.echo {
            settings.echo_amount = echo;
        }
        if let Some(distortion) = self.distortion {
            settings.distortion_amount = distortion;
        }
        if self.seed.is_some() {
            job.seed = self.seed;
        }
    }
}

/// Options for one render invocation.
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    /// Input audio path.
    pub input: &'a str,
    /// Optional job file.
    pub job: Option<&'a str>,
    /// Directory the WAV is exported to.
    pub out_dir: &'a str,
    /// Output file stem; defaults to `<input stem>-voxshift`.
    pub name: Option<&'a str>,
    /// Where to write a lipsync track, if wanted.
    pub track: Option<&'a str>,
    /// Flag overrides.
    pub overrides: JobOverrides,
}

/// Default output stem for an input path.
pub fn default_stem(input: &str) -> String {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    format!("{}-voxshift", stem)
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(opts: &RenderOptions<'_>) -> Result<ExitCode> {
    println!("{} {}", "Rendering:".cyan().bold(), opts.input);

    let mut job = load_job(opts.job)?;
    opts.overrides.apply(&mut job);
    let source = load_audio(opts.input)?;

    println!(
        "  {} {} Hz, {} ch, {:.2}s",
        "Source:".dimmed(),
        source.sample_rate(),
        source.channel_count(),
        source.duration_seconds()
    );

    let ctx = RenderContext::shared()?;
    let (output, report) = render_with_report(&ctx, &source, &job.settings, job.seed)
        .context("Render failed")?;

    for stage in &report.stages {
        println!(
            "  {} {:<10} {:>8} -> {:<8} frames ({:.1} ms)",
            "Stage:".dimmed(),
            stage.name,
            stage.input_frames,
            stage.output_frames,
            stage.elapsed.as_secs_f64() * 1000.0
        );
    }

    let wav = WavResult::from_buffer(&output).context("Failed to encode WAV")?;
    let stem = opts
        .name
        .map(str::to_string)
        .unwrap_or_else(|| default_stem(opts.input));

    let mut sink = DirectorySink::new(opts.out_dir);
    sink.export(&ExportArtifact::wav(wav.wav_data, &stem))
        .context("Failed to export WAV")?;

    if let Some(track_path) = opts.track {
        let params = job.lipsync.clone().unwrap_or_default();
        let track = build_track(&output, &params).context("Failed to build lipsync track")?;
        let json = serde_json::to_string_pretty(&track).context("Failed to serialize track")?;
        fs::write(track_path, json)
            .with_context(|| format!("Failed to write track: {}", track_path))?;
        println!(
            "  {} {} frames at {} fps -> {}",
            "Track:".dimmed(),
            track.len(),
            track.frame_rate,
            track_path
        );
    }

    for path in sink.written() {
        println!(
            "{} Wrote {} ({} frames)",
            "SUCCESS".green().bold(),
            path.display(),
            wav.num_frames
        );
    }
    println!("  {} {}", "PCM hash:".dimmed(), wav.pcm_hash);

    Ok(ExitCode::SUCCESS)
}
