//! Cogniscreen Core Library
//!
//! Heuristic transcript analysis for early cognitive-risk screening.

pub mod analyzer;
pub mod error;
pub mod explain;
pub mod features;
pub mod format;
pub mod lexicon;
pub mod logging;
pub mod risk;
pub mod text;

pub use analyzer::{analyze, AnalysisReport, Metadata, Metrics};
pub use error::{Result, ScreenError};
