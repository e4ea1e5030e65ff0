//! VoxShift CLI - Command-line interface for offline voice effects
//!
//! This binary renders voice effect chains to WAV files and derives lipsync
//! tracks from audio.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use voxshift_backend_audio::RenderContext;
use voxshift_cli::commands;
use voxshift_cli::commands::render::{JobOverrides, RenderOptions};
use voxshift_cli::logging::init_logging;
use voxshift_spec::{LipsyncParams, VoicePreset, DEFAULT_FRAME_RATE, DEFAULT_THRESHOLD};

/// VoxShift - Offline voice effects and lipsync tracks
#[derive(Parser)]
#[command(name = "voxshift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an audio file through the effect chain
    Render {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// JSON job file with settings, lipsync parameters, and seed
        #[arg(short, long)]
        job: Option<String>,

        /// Directory to write the rendered WAV into
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Output file stem (default: <input stem>-voxshift)
        #[arg(long)]
        name: Option<String>,

        /// Voice preset (none, male-to-female, female-to-male, adult-to-child,
        /// child-to-adult, robot, elderly)
        #[arg(short, long, value_parser = parse_preset)]
        preset: Option<VoicePreset>,

        /// Pitch multiplier applied on top of the preset (0.5-2.0)
        #[arg(long)]
        pitch: Option<f64>,

        /// Reverb amount (0-1)
        #[arg(long)]
        reverb: Option<f64>,

        /// Echo amount (0-1)
        #[arg(long)]
        echo: Option<f64>,

        /// Distortion amount (0-1)
        #[arg(long)]
        distortion: Option<f64>,

        /// Seed for the reverb impulse response
        #[arg(long)]
        seed: Option<u32>,

        /// Also write a lipsync track for the rendered audio
        #[arg(long)]
        track: Option<String>,
    },

    /// Derive a mouth-shape track from an audio file
    Lipsync {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Output JSON path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Envelope level treated as full loudness
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Animation frames per second
        #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
        frame_rate: u32,

        /// Smoothing half-width in frames
        #[arg(long, default_value_t = 3)]
        window_radius: usize,

        /// Disable majority-vote smoothing
        #[arg(long)]
        no_smoothing: bool,
    },

    /// List voice presets
    Presets {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the layout and levels of an audio file
    Inspect {
        /// Path to the audio file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_preset(s: &str) -> Result<VoicePreset, String> {
    VoicePreset::parse(s).ok_or_else(|| {
        let names: Vec<_> = VoicePreset::ALL.iter().map(|p| p.as_str()).collect();
        format!("unknown preset '{}', expected one of: {}", s, names.join(", "))
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{}: {}", colored::Colorize::red("error"), e);
        return ExitCode::from(1);
    }

    let result = match cli.command {
        Commands::Render {
            input,
            job,
            out_dir,
            name,
            preset,
            pitch,
            reverb,
            echo,
            distortion,
            seed,
            track,
        } => commands::render::run(&RenderOptions {
            input: &input,
            job: job.as_deref(),
            out_dir: &out_dir,
            name: name.as_deref(),
            track: track.as_deref(),
            overrides: JobOverrides {
                preset,
                pitch,
                reverb,
                echo,
                distortion,
                seed,
            },
        }),
        Commands::Lipsync {
            input,
            output,
            threshold,
            frame_rate,
            window_radius,
            no_smoothing,
        } => {
            let params = LipsyncParams {
                threshold,
                frame_rate,
                smoothing: !no_smoothing,
                window_radius,
            };
            commands::lipsync::run(&input, &params, output.as_deref())
        }
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    RenderContext::shutdown();

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "voxshift",
            "render",
            "--input",
            "voice.wav",
            "--preset",
            "robot",
            "--reverb",
            "0.4",
            "--seed",
            "7",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                input,
                out_dir,
                preset,
                reverb,
                echo,
                seed,
                ..
            } => {
                assert_eq!(input, "voice.wav");
                assert_eq!(out_dir, ".");
                assert_eq!(preset, Some(VoicePreset::Robot));
                assert_eq!(reverb, Some(0.4));
                assert_eq!(echo, None);
                assert_eq!(seed, Some(7));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_preset() {
        let result = Cli::try_parse_from([
            "voxshift", "render", "--input", "a.wav", "--preset", "chipmunk",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_lipsync_defaults() {
        let cli = Cli::try_parse_from(["voxshift", "lipsync", "--input", "a.wav"]).unwrap();
        match cli.command {
            Commands::Lipsync {
                threshold,
                frame_rate,
                window_radius,
                no_smoothing,
                output,
                ..
            } => {
                assert_eq!(threshold, 0.1);
                assert_eq!(frame_rate, 30);
                assert_eq!(window_radius, 3);
                assert!(!no_smoothing);
                assert_eq!(output, None);
            }
            _ => panic!("expected lipsync command"),
        }
    }

    #[test]
    fn test_cli_counts_verbosity() {
        let cli = Cli::try_parse_from(["voxshift", "-vv", "presets", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Presets { json } => assert!(json),
            _ => panic!("expected presets command"),
        }
    }

    #[test]
    fn test_cli_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["voxshift", "inspect", "-i", "a.wav", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }
}
