//! Human-readable explanation of an analysis
//!
//! The first sentence is always the overall tier summary. Conditional
//! sentences follow in a fixed order (speech rate, pauses, vocabulary,
//! fluency); the order and wording are a stable contract.

use crate::features::Features;

/// Risk-score threshold below which speech is described as normal
const TIER_NORMAL_BELOW: u32 = 30;
/// Risk-score threshold at which speech raises significant concern
const TIER_SIGNIFICANT_AT: u32 = 70;

/// Render the explanation for a score and its feature vector.
pub fn explain(risk_score: u32, features: &Features) -> String {
    let mut sentences = vec![tier_sentence(risk_score).to_string()];
    let mut flagged = false;

    if features.speech_rate < 80.0 {
        sentences.push(format!(
            "Speech rate is notably slow at {:.1} words/minute (typical range: 120-180).",
            features.speech_rate
        ));
        flagged = true;
    } else if features.speech_rate > 200.0 {
        sentences.push(format!(
            "Speech rate is quite fast at {:.1} words/minute, which may indicate anxiety or other factors.",
            features.speech_rate
        ));
        flagged = true;
    }

    if features.pause_count > 10 {
        sentences.push(format!(
            "Frequent pauses detected ({} instances), which may indicate word-finding difficulties.",
            features.pause_count
        ));
        flagged = true;
    }

    if features.vocabulary_richness < 0.4 {
        sentences.push(format!(
            "Vocabulary diversity is lower than expected ({:.0}% unique words).",
            features.vocabulary_richness * 100.0
        ));
        flagged = true;
    }

    if features.fluency_score < 5.0 {
        sentences.push(format!(
            "Fluency score is concerning ({:.1}/10), with evidence of hesitations or word-finding issues.",
            features.fluency_score
        ));
        flagged = true;
    }

    if !flagged {
        sentences.push("All speech metrics appear within normal ranges for this sample.".to_string());
    }

    sentences.join(" ")
}

fn tier_sentence(risk_score: u32) -> &'static str {
    if risk_score < TIER_NORMAL_BELOW {
        "Speech patterns appear normal with good fluency and vocabulary use."
    } else if risk_score < TIER_SIGNIFICANT_AT {
        "Some speech patterns may warrant attention, showing mild concerns in certain areas."
    } else {
        "Several speech patterns suggest potential cognitive changes that may benefit from professional evaluation."
    }
}
