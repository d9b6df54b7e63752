//! Transcript analysis pipeline
//!
//! `analyze` is a pure function of the transcript and metadata: normalize,
//! tokenize, extract the 8-metric feature vector, aggregate it into a risk
//! score, and render the explanation. The JSON shape of [`AnalysisReport`]
//! is a stable external contract.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenError};
use crate::features::{self, Features};
use crate::{explain, risk, text};

/// Optional metadata accompanying a transcript
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Spoken duration in seconds; absent or non-positive values fall back
    /// to the word-count speech-rate estimate
    pub duration: Option<f64>,
}

impl Metadata {
    pub fn with_duration(duration: f64) -> Self {
        Metadata {
            duration: Some(duration),
        }
    }
}

/// Metric values reported to callers, serialized in camelCase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub speech_rate: f64,
    pub pause_count: f64,
    pub vocabulary_richness: f64,
    pub fluency_score: f64,
    pub semantic_fluency: f64,
    pub syntactic_complexity: f64,
    pub repetition_score: f64,
    pub word_finding_difficulty: f64,
}

impl From<&Features> for Metrics {
    fn from(features: &Features) -> Self {
        Metrics {
            speech_rate: features.speech_rate,
            pause_count: features.pause_count as f64,
            vocabulary_richness: features.vocabulary_richness,
            fluency_score: features.fluency_score,
            semantic_fluency: features.semantic_fluency,
            syntactic_complexity: features.syntactic_complexity,
            repetition_score: features.repetition_score,
            word_finding_difficulty: features.word_finding_difficulty,
        }
    }
}

/// Result of analyzing one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overall risk score, 0-100
    pub risk_score: u32,
    /// Prioritized natural-language summary
    pub explanation: String,
    /// The full feature vector
    pub metrics: Metrics,
}

/// Analyze a transcript and produce a risk report.
///
/// Deterministic for identical inputs. Fails only with
/// [`ScreenError::EmptyTranscript`] when the transcript is empty or
/// whitespace-only; every later stage is total.
pub fn analyze(transcript: &str, metadata: &Metadata) -> Result<AnalysisReport> {
    if transcript.trim().is_empty() {
        return Err(ScreenError::EmptyTranscript);
    }

    let lowered = transcript.to_lowercase();
    let normalized = text::normalize(transcript);
    let words = text::tokenize_words(&normalized);
    let sentences = text::tokenize_sentences(&normalized);
    tracing::debug!(
        words = words.len(),
        sentences = sentences.len(),
        "tokenized transcript"
    );

    let features = features::extract(&lowered, &words, &sentences, metadata.duration);
    let risk_score = risk::aggregate(&features);
    let explanation = explain::explain(risk_score, &features);
    tracing::debug!(risk_score, "analysis complete");

    Ok(AnalysisReport {
        risk_score,
        explanation,
        metrics: Metrics::from(&features),
    })
}

/// The feature vector alone, for inspection surfaces.
///
/// Same pipeline and failure behavior as [`analyze`], without aggregation.
pub fn extract_features(transcript: &str, metadata: &Metadata) -> Result<Features> {
    if transcript.trim().is_empty() {
        return Err(ScreenError::EmptyTranscript);
    }

    let lowered = transcript.to_lowercase();
    let normalized = text::normalize(transcript);
    let words = text::tokenize_words(&normalized);
    let sentences = text::tokenize_sentences(&normalized);

    Ok(features::extract(
        &lowered,
        &words,
        &sentences,
        metadata.duration,
    ))
}
