//! Feature extractors for transcript analysis
//!
//! Every extractor is a pure function over the lowercased transcript, the
//! token sequence, or the sentence sequence. Substring markers (pauses,
//! filler phrases, word-finding phrases) are counted non-overlapping and may
//! match inside unrelated words ("er" in "here"); that imprecision is part
//! of the scoring contract and is pinned by tests.

use std::collections::{HashMap, HashSet};

use crate::lexicon;

/// The fixed 8-metric feature vector computed for every non-empty transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    /// Words per minute, measured or estimated
    pub speech_rate: f64,
    /// Estimated pauses, capped at 20
    pub pause_count: usize,
    /// Type-token ratio in [0, 1]
    pub vocabulary_richness: f64,
    /// Overall fluency in [0, 10]
    pub fluency_score: f64,
    /// Distinct category words over word count
    pub semantic_fluency: f64,
    /// Mean normalized sentence length in [0, 1]
    pub syntactic_complexity: f64,
    /// Excess word repetitions over word count
    pub repetition_score: f64,
    /// Word-finding markers over word count, in [0, 1]
    pub word_finding_difficulty: f64,
}

/// Compute the full feature vector.
///
/// `lowered` is the lowercased raw transcript (substring markers are counted
/// there); `words` and `sentences` come from [`crate::text`].
pub fn extract(
    lowered: &str,
    words: &[String],
    sentences: &[String],
    duration: Option<f64>,
) -> Features {
    let repetition = repetition_score(words);
    let word_finding = word_finding_difficulty(lowered, words.len());

    Features {
        speech_rate: speech_rate(words.len(), duration),
        pause_count: pause_count(lowered),
        vocabulary_richness: vocabulary_richness(words),
        fluency_score: fluency_score(lowered, words, repetition, word_finding),
        semantic_fluency: semantic_fluency(words),
        syntactic_complexity: syntactic_complexity(sentences),
        repetition_score: repetition,
        word_finding_difficulty: word_finding,
    }
}

/// Words per minute.
///
/// With a positive duration: `(word_count / duration) * 60`, rounded to one
/// decimal. Otherwise estimated from word count at an average speaking rate
/// and clamped to [60, 200].
pub fn speech_rate(word_count: usize, duration: Option<f64>) -> f64 {
    match duration {
        Some(seconds) if seconds > 0.0 => round1((word_count as f64 / seconds) * 60.0),
        _ => (word_count as f64 * 2.0).clamp(60.0, 200.0),
    }
}

/// Estimated pause count from explicit markers and punctuation.
///
/// Markers are counted non-overlapping, so `...` contributes both an
/// ellipsis and one `..`. Semicolons count double. Capped at 20.
pub fn pause_count(lowered: &str) -> usize {
    let markers: usize = lexicon::PAUSE_MARKERS
        .iter()
        .map(|marker| lowered.matches(marker).count())
        .sum();

    let punctuation =
        lowered.matches(',').count() + lowered.matches(';').count() * 2;

    (markers + punctuation).min(20)
}

/// Type-token ratio: distinct words over total words, rounded to 3 decimals.
pub fn vocabulary_richness(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    round3(unique.len() as f64 / words.len() as f64)
}

/// Fluency score in [0, 10], starting from a perfect 10.
///
/// Penalties: 30x the filler ratio, 2x the repetition score, 3x the
/// word-finding difficulty. Single-token fillers match tokens; fixed filler
/// phrases match as substrings of the lowercased transcript.
pub fn fluency_score(
    lowered: &str,
    words: &[String],
    repetition: f64,
    word_finding: f64,
) -> f64 {
    let filler_words = lexicon::filler_words();
    let mut filler_count = words
        .iter()
        .filter(|w| filler_words.contains(w.as_str()))
        .count();
    filler_count += lexicon::FILLER_PHRASES
        .iter()
        .map(|phrase| lowered.matches(phrase).count())
        .sum::<usize>();

    let filler_ratio = filler_count as f64 / words.len().max(1) as f64;

    let score = 10.0 - filler_ratio * 30.0 - repetition * 2.0 - word_finding * 3.0;
    round1(score).clamp(0.0, 10.0)
}

/// Distinct semantic-category words over total word count.
pub fn semantic_fluency(words: &[String]) -> f64 {
    let mut category_words: HashSet<&str> = HashSet::new();
    for (_, members) in lexicon::semantic_categories() {
        category_words.extend(
            words
                .iter()
                .map(String::as_str)
                .filter(|w| members.contains(w)),
        );
    }
    category_words.len() as f64 / words.len().max(1) as f64
}

/// Mean of `min(words_in_sentence / 15, 1)` over sentences; 0 with no sentences.
pub fn syntactic_complexity(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: f64 = sentences
        .iter()
        .map(|s| (s.split_whitespace().count() as f64 / 15.0).min(1.0))
        .sum();
    total / sentences.len() as f64
}

/// Excess repetitions: for each word seen more than twice, `count - 1`,
/// summed and divided by the word count.
pub fn repetition_score(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    let repetitions: usize = counts
        .values()
        .filter(|&&count| count > 2)
        .map(|&count| count - 1)
        .sum();
    repetitions as f64 / words.len() as f64
}

/// Word-finding difficulty: marker phrases plus trailing-off ellipses over
/// the word count, clamped to [0, 1].
pub fn word_finding_difficulty(lowered: &str, word_count: usize) -> f64 {
    let mut occurrences: usize = lexicon::WORD_FINDING_MARKERS
        .iter()
        .map(|marker| lowered.matches(marker).count())
        .sum();
    occurrences += lowered.matches("...").count();

    (occurrences as f64 / word_count.max(1) as f64).min(1.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        crate::text::tokenize_words(&crate::text::normalize(text))
    }

    #[test]
    fn test_speech_rate_with_duration() {
        // 30 words in 60 seconds is 30 wpm
        assert_eq!(speech_rate(30, Some(60.0)), 30.0);
        assert_eq!(speech_rate(50, Some(25.0)), 120.0);
    }

    #[test]
    fn test_speech_rate_rounds_to_one_decimal() {
        // 20 words in 9 seconds = 133.333... wpm
        assert_eq!(speech_rate(20, Some(9.0)), 133.3);
    }

    #[test]
    fn test_speech_rate_estimated_when_no_duration() {
        assert_eq!(speech_rate(15, None), 60.0); // 30 clamped up
        assert_eq!(speech_rate(50, None), 100.0);
        assert_eq!(speech_rate(500, None), 200.0); // clamped down
    }

    #[test]
    fn test_speech_rate_non_positive_duration_estimates() {
        assert_eq!(speech_rate(50, Some(0.0)), 100.0);
        assert_eq!(speech_rate(50, Some(-10.0)), 100.0);
    }

    #[test]
    fn test_pause_count_markers_and_punctuation() {
        // "um" x2, "," x1, ";" counts double
        assert_eq!(pause_count("um, i um; yes"), 2 + 1 + 2);
    }

    #[test]
    fn test_pause_count_ellipsis_counts_twice() {
        // "..." contains one "..." and one non-overlapping ".."
        assert_eq!(pause_count("wait..."), 2);
    }

    #[test]
    fn test_pause_count_matches_inside_words() {
        // "er" inside "here", "ah" inside "graham" - known heuristic
        // imprecision, kept as-is
        assert_eq!(pause_count("here"), 1);
        assert_eq!(pause_count("graham"), 1);
        assert_eq!(pause_count("here graham"), 2);
    }

    #[test]
    fn test_pause_count_capped() {
        let lowered = "um ".repeat(50);
        assert_eq!(pause_count(&lowered), 20);
    }

    #[test]
    fn test_vocabulary_richness_all_unique() {
        let w = words("every single word differs here");
        assert_eq!(vocabulary_richness(&w), 1.0);
    }

    #[test]
    fn test_vocabulary_richness_with_repeats() {
        let w = words("cat cat cat dog dog mouse");
        assert_eq!(vocabulary_richness(&w), 0.5);
    }

    #[test]
    fn test_vocabulary_richness_rounds_to_three_decimals() {
        let w = words("one two three one two one");
        // 3 unique / 6 total
        assert_eq!(vocabulary_richness(&w), 0.5);
        let w = words("aa bb cc dd ee ff gg");
        assert_eq!(vocabulary_richness(&w), 1.0);
        let w = words("aa aa bb");
        assert_eq!(vocabulary_richness(&w), 0.667);
    }

    #[test]
    fn test_vocabulary_richness_empty() {
        assert_eq!(vocabulary_richness(&[]), 0.0);
    }

    #[test]
    fn test_fluency_perfect_without_penalties() {
        let w = words("the quick brown fox jumps over");
        assert_eq!(fluency_score("the quick brown fox jumps over", &w, 0.0, 0.0), 10.0);
    }

    #[test]
    fn test_fluency_penalizes_fillers() {
        let lowered = "um um um um well";
        let w = words(lowered);
        // 5 fillers / 5 words -> 10 - 30 = -20, clamped to 0
        assert_eq!(fluency_score(lowered, &w, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_fluency_counts_filler_phrases_as_substrings() {
        let lowered = "you know the story you know";
        let w = words(lowered);
        // 2 phrase hits over 6 words: 10 - 30 * (1/3) lands at 0
        assert_eq!(fluency_score(lowered, &w, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_fluency_bounded() {
        let lowered = "clean speech with plenty of ordinary words";
        let w = words(lowered);
        let score = fluency_score(lowered, &w, 10.0, 1.0);
        assert!((0.0..=10.0).contains(&score));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_semantic_fluency_counts_distinct_category_words() {
        let w = words("my dog chased the cat and another dog");
        // distinct category words: dog, cat -> 2 / 8
        assert_eq!(semantic_fluency(&w), 2.0 / 8.0);
    }

    #[test]
    fn test_semantic_fluency_no_category_words() {
        let w = words("nothing botanical or zoological here");
        assert_eq!(semantic_fluency(&w), 0.0);
    }

    #[test]
    fn test_syntactic_complexity_long_sentences_saturate() {
        let sentences = vec![
            "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen".to_string(),
        ];
        assert_eq!(syntactic_complexity(&sentences), 1.0);
    }

    #[test]
    fn test_syntactic_complexity_averages() {
        let sentences = vec![
            "three word line".to_string(),
            "one two three four five six".to_string(),
        ];
        // (3/15 + 6/15) / 2 = 0.3
        let got = syntactic_complexity(&sentences);
        assert!((got - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_syntactic_complexity_no_sentences() {
        assert_eq!(syntactic_complexity(&[]), 0.0);
    }

    #[test]
    fn test_repetition_score_ignores_words_used_twice() {
        let w = words("red blue red blue green"); // nothing over twice
        assert_eq!(repetition_score(&w), 0.0);
    }

    #[test]
    fn test_repetition_score_counts_excess() {
        let w = words("go go go go stop"); // "go" x4 -> 3 excess / 5 words
        assert_eq!(repetition_score(&w), 0.6);
    }

    #[test]
    fn test_word_finding_counts_markers_and_ellipses() {
        let lowered = "the thing is... the stuff broke";
        // "thing" + "stuff" + one "..."  = 3 over 6 words
        assert_eq!(word_finding_difficulty(lowered, 6), 0.5);
    }

    #[test]
    fn test_word_finding_clamped_to_one() {
        let lowered = "thing thing thing thing";
        assert_eq!(word_finding_difficulty(lowered, 2), 1.0);
    }
}
