//! Text normalization and tokenization for transcript analysis

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Maximal runs of word characters
static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Runs of sentence terminators, used by the fallback splitter
static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();

/// Abbreviations whose trailing period does not end a sentence
static ABBREVIATIONS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\w+").expect("valid word pattern"))
}

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]+").expect("valid break pattern"))
}

fn abbreviations() -> &'static HashSet<&'static str> {
    ABBREVIATIONS.get_or_init(|| {
        // Plain word tokens only: the trailing-word check cannot see
        // interior periods, so dotted forms like "e.g." would never match
        ["mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc"]
            .iter()
            .copied()
            .collect()
    })
}

/// Lowercase the text, collapse whitespace runs to a single space, and trim.
///
/// Total over any input; the empty string normalizes to itself.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract word tokens from normalized text.
///
/// Tokens are maximal runs of word characters; single-character tokens are
/// discarded as noise.
pub fn tokenize_words(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|w| w.chars().count() > 1)
        .collect()
}

/// Split normalized text into sentences.
///
/// Tries the rule-based boundary detector first; when it yields nothing for
/// non-empty input, degrades to a plain split on terminator runs. Never
/// fails for well-formed string input.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    match split_by_rules(text) {
        Some(sentences) => sentences,
        None => fallback_split(text),
    }
}

/// Rule-based sentence boundary detection.
///
/// A run of `.`, `!`, `?` ends a sentence when it is followed by whitespace
/// or end of input, unless a lone period trails a known abbreviation.
/// Decimal points ("3.5") never match because no whitespace follows them.
/// Returns `None` when no segments were produced from non-empty input.
fn split_by_rules(text: &str) -> Option<Vec<String>> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in sentence_break().find_iter(text) {
        let at_boundary = text[m.end()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if !at_boundary {
            continue;
        }
        if m.as_str() == "." && trailing_word(&text[..m.start()]).is_some_and(is_abbreviation) {
            continue;
        }

        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    if sentences.is_empty() {
        None
    } else {
        Some(sentences)
    }
}

/// Fallback splitter: break on terminator runs, discard empty segments.
fn fallback_split(text: &str) -> Vec<String> {
    sentence_break()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The last word-character run of the text, if any
fn trailing_word(text: &str) -> Option<&str> {
    let end = text.len();
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map(|(i, _)| i)?;
    Some(&text[start..end])
}

fn is_abbreviation(word: &str) -> bool {
    abbreviations().contains(word)
}
