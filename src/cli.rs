//! CLI argument parsing for cogniscreen
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use cogniscreen_core::format::OutputFormat;

/// Cogniscreen - heuristic speech analysis for cognitive-risk screening
#[derive(Parser, Debug)]
#[command(name = "cogniscreen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging for the analysis stages
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a transcript and report the risk score with an explanation
    Analyze(TranscriptArgs),

    /// Print the raw 8-metric feature vector for a transcript
    Features(TranscriptArgs),
}

#[derive(Args, Debug)]
pub struct TranscriptArgs {
    /// Transcript file to read; use `-` or omit to read from stdin
    pub file: Option<PathBuf>,

    /// Spoken duration in seconds (enables measured words-per-minute)
    #[arg(long, allow_negative_numbers = true)]
    pub duration: Option<f64>,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
