//! Fixed lexical sets used by the feature extractors
//!
//! All sets are lowercase, initialized once, and never mutated, so they can
//! be shared freely across concurrent analyses.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Single-token filler words associated with speech hesitation
static FILLER_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Multi-word filler phrases, matched as substrings of the normalized transcript
pub const FILLER_PHRASES: &[&str] = &["you know", "i mean", "sort of", "kind of"];

/// Phrases that suggest word-finding difficulty
pub const WORD_FINDING_MARKERS: &[&str] = &[
    "thing",
    "stuff",
    "what do you call it",
    "whatchamacallit",
    "thingy",
    "whatsit",
    "that thing",
    "you know what i mean",
];

/// Pause markers counted in the raw transcript. `...` also contains one
/// `..`, so an ellipsis deliberately counts twice.
pub const PAUSE_MARKERS: &[&str] = &["...", "..", "um", "uh", "er", "ah"];

/// Semantic fluency category word sets (category name, members)
static SEMANTIC_CATEGORIES: OnceLock<Vec<(&'static str, HashSet<&'static str>)>> =
    OnceLock::new();

pub fn filler_words() -> &'static HashSet<&'static str> {
    FILLER_WORDS.get_or_init(|| {
        [
            "um",
            "uh",
            "er",
            "ah",
            "well",
            "like",
            "so",
            "basically",
            "actually",
        ]
        .iter()
        .copied()
        .collect()
    })
}

pub fn semantic_categories() -> &'static [(&'static str, HashSet<&'static str>)] {
    SEMANTIC_CATEGORIES.get_or_init(|| {
        vec![
            (
                "animals",
                [
                    "dog", "cat", "bird", "fish", "horse", "cow", "pig", "sheep", "chicken",
                    "duck", "rabbit", "mouse", "elephant", "lion", "tiger",
                ]
                .iter()
                .copied()
                .collect(),
            ),
            (
                "fruits",
                [
                    "apple",
                    "banana",
                    "orange",
                    "grape",
                    "strawberry",
                    "peach",
                    "pear",
                    "cherry",
                    "plum",
                    "watermelon",
                    "pineapple",
                    "mango",
                ]
                .iter()
                .copied()
                .collect(),
            ),
        ]
    })
}
