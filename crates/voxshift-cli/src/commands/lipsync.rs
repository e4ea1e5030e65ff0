//! Lipsync command implementation
//!
//! Derives a mouth-shape track from an audio file and writes it as JSON.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use voxshift_backend_audio::build_track;
use voxshift_spec::{LipsyncParams, MouthShape};

use crate::input::load_audio;

/// Run the lipsync command
///
/// # Arguments
/// * `input` - Path to the audio file
/// * `params` - Lipsync parameters
/// * `output` - Output JSON path (default: stdout)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, params: &LipsyncParams, output: Option<&str>) -> Result<ExitCode> {
    let buffer = load_audio(input)?;
    let track = build_track(&buffer, params).context("Failed to build lipsync track")?;
    let json = serde_json::to_string_pretty(&track).context("Failed to serialize track")?;

    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write track: {}", path))?;
            println!(
                "{} {} frames at {} fps -> {}",
                "SUCCESS".green().bold(),
                track.len(),
                track.frame_rate,
                path
            );
            print_histogram(&track.shapes);
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

/// Counts frames per mouth shape, in openness order.
pub fn shape_histogram(shapes: &[MouthShape]) -> [(MouthShape, usize); 4] {
    let mut counts = [
        (MouthShape::Closed, 0),
        (MouthShape::SlightlyOpen, 0),
        (MouthShape::Open, 0),
        (MouthShape::WideOpen, 0),
    ];
    for shape in shapes {
        counts[shape.openness() as usize].1 += 1;
    }
    counts
}

fn print_histogram(shapes: &[MouthShape]) {
    for (shape, count) in shape_histogram(shapes) {
        println!("  {:<14} {}", format!("{}:", shape).dimmed(), count);
    }
}
