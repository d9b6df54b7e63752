//! `cogniscreen features` command - dump the raw feature vector
//!
//! Inspection surface over the same pipeline as `analyze`, without the
//! aggregation and explanation stages.

use cogniscreen_core::analyzer::{self, Metrics};
use cogniscreen_core::error::Result;

use crate::cli::{Cli, OutputFormat, TranscriptArgs};
use crate::commands::helpers::{metadata_from_args, read_transcript};

/// Execute the features command
pub fn execute(cli: &Cli, args: &TranscriptArgs) -> Result<()> {
    let transcript = read_transcript(args)?;
    let metadata = metadata_from_args(args)?;

    let features = analyzer::extract_features(&transcript, &metadata)?;
    let metrics = Metrics::from(&features);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        OutputFormat::Human => {
            println!("speech_rate             {:.1}", metrics.speech_rate);
            println!("pause_count             {}", metrics.pause_count as u32);
            println!("vocabulary_richness     {:.3}", metrics.vocabulary_richness);
            println!("fluency_score           {:.1}", metrics.fluency_score);
            println!("semantic_fluency        {:.3}", metrics.semantic_fluency);
            println!("syntactic_complexity    {:.3}", metrics.syntactic_complexity);
            println!("repetition_score        {:.3}", metrics.repetition_score);
            println!("word_finding_difficulty {:.3}", metrics.word_finding_difficulty);
        }
    }

    Ok(())
}
