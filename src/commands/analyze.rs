//! `cogniscreen analyze` command - score a transcript
//!
//! Reads a transcript from a file or stdin, runs the analysis pipeline, and
//! prints the risk score, explanation, and headline metrics. JSON output
//! follows the stable report contract (riskScore / explanation / metrics).

use crate::cli::{Cli, OutputFormat, TranscriptArgs};
use crate::commands::helpers::{metadata_from_args, read_transcript};
use cogniscreen_core::error::Result;

/// Execute the analyze command
pub fn execute(cli: &Cli, args: &TranscriptArgs) -> Result<()> {
    let transcript = read_transcript(args)?;
    let metadata = metadata_from_args(args)?;

    let report = cogniscreen_core::analyze(&transcript, &metadata)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("risk score: {}/100", report.risk_score);
            if !cli.quiet {
                println!(
                    "speech rate: {:.1} wpm  pauses: {}  vocabulary: {:.3}  fluency: {:.1}/10",
                    report.metrics.speech_rate,
                    report.metrics.pause_count as u32,
                    report.metrics.vocabulary_richness,
                    report.metrics.fluency_score,
                );
            }
            println!();
            println!("{}", report.explanation);
        }
    }

    Ok(())
}
