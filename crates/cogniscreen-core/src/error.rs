//! Error types and exit codes for cogniscreen
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Input error (empty or unusable transcript)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the cogniscreen CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - empty or unusable transcript (3)
    Input = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during cogniscreen operations
#[derive(Error, Debug)]
pub enum ScreenError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid duration: {0} (expected a positive number of seconds)")]
    InvalidDuration(String),

    #[error("{0}")]
    UsageError(String),

    // Input errors (exit code 3)
    #[error("transcript cannot be empty")]
    EmptyTranscript,

    #[error("transcript not found: {path:?}")]
    TranscriptNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ScreenError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScreenError::UnknownFormat(_)
            | ScreenError::InvalidDuration(_)
            | ScreenError::UsageError(_) => ExitCode::Usage,

            ScreenError::EmptyTranscript | ScreenError::TranscriptNotFound { .. } => {
                ExitCode::Input
            }

            ScreenError::Io(_) | ScreenError::Json(_) | ScreenError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ScreenError::UnknownFormat(_) => "unknown_format",
            ScreenError::InvalidDuration(_) => "invalid_duration",
            ScreenError::UsageError(_) => "usage_error",
            ScreenError::EmptyTranscript => "empty_transcript",
            ScreenError::TranscriptNotFound { .. } => "transcript_not_found",
            ScreenError::Io(_) => "io_error",
            ScreenError::Json(_) => "json_error",
            ScreenError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for cogniscreen operations
pub type Result<T> = std::result::Result<T, ScreenError>;
