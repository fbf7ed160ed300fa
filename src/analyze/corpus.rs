//! Corpus building: one normalized text blob per input.
//!
//! The corpus is app name, category and captions joined by single spaces,
//! lowercased, with whitespace runs collapsed. Keyword, clarity and ratio
//! sub-scores all read from it. The numeric sub-score reads a second variant
//! that leaves out filename-like captions.

use super::filename::is_filename_like;
use crate::model::ScoreInput;

/// Full corpus over app name, category and every caption.
pub fn build_corpus(input: &ScoreInput) -> String {
    let parts = [input.app_name.as_str(), input.category.as_str()]
        .into_iter()
        .chain(input.captions.iter().map(String::as_str));
    normalize(&join(parts))
}

/// Corpus variant for numeric detection: filename-like captions are skipped.
pub fn build_numeric_corpus(input: &ScoreInput) -> String {
    let parts = [input.app_name.as_str(), input.category.as_str()]
        .into_iter()
        .chain(
            input
                .captions
                .iter()
                .map(String::as_str)
                .filter(|c| !is_filename_like(c)),
        );
    normalize(&join(parts))
}

/// Whitespace tokens of an already-normalized corpus.
pub fn words(corpus: &str) -> Vec<&str> {
    corpus.split_whitespace().collect()
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

/// Lowercase + collapse whitespace runs into a single space + trim.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            last_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}
