//! Shared helpers for command implementations

use std::io::Read;
use std::path::Path;

use cogniscreen_core::error::{Result, ScreenError};
use cogniscreen_core::Metadata;

use crate::cli::TranscriptArgs;

/// Read the transcript from the given file, or stdin for `-`/no file.
pub fn read_transcript(args: &TranscriptArgs) -> Result<String> {
    match &args.file {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(ScreenError::TranscriptNotFound { path: path.clone() });
            }
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Build analysis metadata from command arguments.
///
/// A non-positive `--duration` is a usage error rather than silently
/// falling back to the estimate.
pub fn metadata_from_args(args: &TranscriptArgs) -> Result<Metadata> {
    match args.duration {
        Some(seconds) if seconds <= 0.0 || !seconds.is_finite() => {
            Err(ScreenError::InvalidDuration(seconds.to_string()))
        }
        Some(seconds) => Ok(Metadata::with_duration(seconds)),
        None => Ok(Metadata::default()),
    }
}
