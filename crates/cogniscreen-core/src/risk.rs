//! Risk aggregation: band tables plus continuous contributions
//!
//! Each banded feature has an ordered rule table evaluated left-to-right;
//! the first matching band contributes its points and the rest are skipped.
//! Bands never interact across features. Word-finding difficulty and
//! repetition contribute continuously instead of through bands.

use crate::features::Features;

/// A half-line or interval a feature value can fall into
#[derive(Debug, Clone, Copy)]
enum Band {
    /// value < threshold
    Below(f64),
    /// low <= value < high
    Within(f64, f64),
    /// value > threshold
    Above(f64),
}

impl Band {
    fn contains(self, value: f64) -> bool {
        match self {
            Band::Below(threshold) => value < threshold,
            Band::Within(low, high) => (low..high).contains(&value),
            Band::Above(threshold) => value > threshold,
        }
    }
}

/// A scoring rule: points awarded when the value falls in the band
#[derive(Debug, Clone, Copy)]
struct Rule {
    band: Band,
    points: f64,
}

const fn rule(band: Band, points: f64) -> Rule {
    Rule { band, points }
}

/// Typical conversational speech runs 120-180 wpm; slow speech scores
/// higher risk than fast speech.
const SPEECH_RATE_RULES: &[Rule] = &[
    rule(Band::Below(80.0), 25.0),
    rule(Band::Within(80.0, 100.0), 15.0),
    rule(Band::Above(200.0), 10.0),
];

const PAUSE_COUNT_RULES: &[Rule] = &[
    rule(Band::Above(15.0), 20.0),
    rule(Band::Above(10.0), 10.0),
    rule(Band::Above(5.0), 5.0),
];

const VOCABULARY_RULES: &[Rule] = &[
    rule(Band::Below(0.3), 25.0),
    rule(Band::Below(0.4), 15.0),
    rule(Band::Below(0.5), 5.0),
];

const FLUENCY_RULES: &[Rule] = &[
    rule(Band::Below(3.0), 25.0),
    rule(Band::Below(5.0), 15.0),
    rule(Band::Below(7.0), 5.0),
];

/// Points scaling for the continuous contributions
const WORD_FINDING_WEIGHT: f64 = 20.0;
const REPETITION_WEIGHT: f64 = 15.0;

fn banded(value: f64, rules: &[Rule]) -> f64 {
    rules
        .iter()
        .find(|r| r.band.contains(value))
        .map_or(0.0, |r| r.points)
}

/// Combine the feature vector into a risk score in [0, 100].
///
/// The final rounding is arithmetic (half away from zero, `f64::round`), so
/// a raw score of 37.5 reports as 38.
pub fn aggregate(features: &Features) -> u32 {
    let mut score = 0.0;

    score += banded(features.speech_rate, SPEECH_RATE_RULES);
    score += banded(features.pause_count as f64, PAUSE_COUNT_RULES);
    score += banded(features.vocabulary_richness, VOCABULARY_RULES);
    score += banded(features.fluency_score, FLUENCY_RULES);

    score += features.word_finding_difficulty * WORD_FINDING_WEIGHT;
    score += features.repetition_score * REPETITION_WEIGHT;

    score.clamp(0.0, 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Features {
        // A feature vector that contributes zero risk
        Features {
            speech_rate: 150.0,
            pause_count: 0,
            vocabulary_richness: 0.9,
            fluency_score: 9.5,
            semantic_fluency: 0.1,
            syntactic_complexity: 0.8,
            repetition_score: 0.0,
            word_finding_difficulty: 0.0,
        }
    }

    #[test]
    fn test_baseline_scores_zero() {
        assert_eq!(aggregate(&baseline()), 0);
    }

    #[test]
    fn test_speech_rate_bands() {
        let cases = [
            (60.0, 25),
            (79.9, 25),
            (80.0, 15),
            (99.9, 15),
            (100.0, 0),
            (200.0, 0),
            (200.1, 10),
            (260.0, 10),
        ];
        for (rate, expected) in cases {
            let features = Features {
                speech_rate: rate,
                ..baseline()
            };
            assert_eq!(aggregate(&features), expected, "speech_rate={rate}");
        }
    }

    #[test]
    fn test_pause_count_bands() {
        let cases = [(0, 0), (5, 0), (6, 5), (10, 5), (11, 10), (15, 10), (16, 20), (20, 20)];
        for (pauses, expected) in cases {
            let features = Features {
                pause_count: pauses,
                ..baseline()
            };
            assert_eq!(aggregate(&features), expected, "pause_count={pauses}");
        }
    }

    #[test]
    fn test_vocabulary_bands() {
        let cases = [(0.1, 25), (0.3, 15), (0.39, 15), (0.4, 5), (0.49, 5), (0.5, 0)];
        for (ttr, expected) in cases {
            let features = Features {
                vocabulary_richness: ttr,
                ..baseline()
            };
            assert_eq!(aggregate(&features), expected, "vocabulary_richness={ttr}");
        }
    }

    #[test]
    fn test_fluency_bands() {
        let cases = [(0.0, 25), (2.9, 25), (3.0, 15), (4.9, 15), (5.0, 5), (6.9, 5), (7.0, 0)];
        for (fluency, expected) in cases {
            let features = Features {
                fluency_score: fluency,
                ..baseline()
            };
            assert_eq!(aggregate(&features), expected, "fluency_score={fluency}");
        }
    }

    #[test]
    fn test_continuous_contributions() {
        let features = Features {
            word_finding_difficulty: 0.5, // +10
            repetition_score: 0.2,        // +3
            ..baseline()
        };
        assert_eq!(aggregate(&features), 13);
    }

    #[test]
    fn test_half_point_rounds_away_from_zero() {
        let features = Features {
            word_finding_difficulty: 0.125, // 2.5 points exactly
            ..baseline()
        };
        assert_eq!(aggregate(&features), 3);
    }

    #[test]
    fn test_score_clamped_to_hundred() {
        let features = Features {
            speech_rate: 40.0,          // +25
            pause_count: 20,            // +20
            vocabulary_richness: 0.1,   // +25
            fluency_score: 0.5,         // +25
            word_finding_difficulty: 1.0, // +20
            repetition_score: 1.0,      // +15
            ..baseline()
        };
        assert_eq!(aggregate(&features), 100);
    }

    #[test]
    fn test_pause_band_monotone() {
        // Raising pause_count past a band boundary never lowers the score
        let mut previous = 0;
        for pauses in 0..=20 {
            let features = Features {
                pause_count: pauses,
                ..baseline()
            };
            let score = aggregate(&features);
            assert!(score >= previous, "score dropped at pause_count={pauses}");
            previous = score;
        }
    }
}
