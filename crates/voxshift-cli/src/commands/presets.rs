//! Presets command implementation
//!
//! Lists the voice preset table.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use voxshift_spec::VoicePreset;

/// One row of the preset table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetRow {
    pub name: &'static str,
    pub base_pitch: f64,
    pub base_formant: f64,
    pub forces_distortion: bool,
}

/// All presets in table order.
pub fn preset_rows() -> Vec<PresetRow> {
    VoicePreset::ALL
        .iter()
        .map(|p| PresetRow {
            name: p.as_str(),
            base_pitch: p.base_pitch(),
            base_formant: p.base_formant(),
            forces_distortion: p.forces_distortion(),
        })
        .collect()
}

/// Run the presets command
///
/// # Arguments
/// * `json` - Print machine-readable JSON instead of a table
pub fn run(json: bool) -> Result<ExitCode> {
    let rows = preset_rows();

    if json {
        let out = serde_json::to_string_pretty(&rows).context("Failed to serialize presets")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:<16} {:>6} {:>8}",
        "preset".bold(),
        "pitch".bold(),
        "formant".bold()
    );
    for row in rows {
        let note = if row.forces_distortion {
            " (distortion)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<16} {:>6.2} {:>8.2}{}",
            row.name.cyan(),
            row.base_pitch,
            row.base_formant,
            note
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_table() {
        let rows = preset_rows();
        assert_eq!(rows.len(), 7);
        let child = rows.iter().find(|r| r.name == "adult-to-child").unwrap();
        assert_eq!(child.base_pitch, 1.8);
        assert_eq!(child.base_formant, 1.3);
        assert_eq!(rows.iter().filter(|r| r.forces_distortion).count(), 1);
    }

    #[test]
    fn test_rows_serialize() {
        let json = serde_json::to_value(preset_rows()).unwrap();
        assert_eq!(json[0]["name"], "none");
        assert_eq!(json[0]["base_pitch"], 1.0);
    }
}
