//! Clarity heuristic: base 10 plus independent adjustments, clamped to [0, 20].
//!
//! Word-count bands overlap and are evaluated in priority order:
//! 8..=40 first, then 5..=60, then "too short", else "too long".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::SUB_SCORE_MAX;

const BASE: i32 = 10;
const LONG_WORD_CHARS: usize = 24;

static DOUBLE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[!?]{2}").expect("double punctuation regex"));

/// Clarity sub-score of a normalized corpus and its whitespace tokens.
pub fn clarity_score(corpus: &str, words: &[&str]) -> u32 {
    let total = BASE
        + word_count_adjustment(words.len())
        + punctuation_adjustment(corpus)
        + word_length_adjustment(words);
    total.clamp(0, SUB_SCORE_MAX as i32) as u32
}

pub(crate) fn word_count_adjustment(count: usize) -> i32 {
    if (8..=40).contains(&count) {
        6
    } else if (5..=60).contains(&count) {
        3
    } else if count < 5 {
        -4
    } else {
        -5
    }
}

pub(crate) fn punctuation_adjustment(corpus: &str) -> i32 {
    let marks = corpus.chars().filter(|c| matches!(c, '!' | '?')).count() as i32;
    let mut adj = match marks {
        0 => 2,
        1 | 2 => 1,
        n => -(n - 2) * 2,
    };
    if DOUBLE_PUNCT.is_match(corpus) {
        adj -= 2;
    }
    adj
}

pub(crate) fn word_length_adjustment(words: &[&str]) -> i32 {
    if words.is_empty() {
        return 0;
    }
    let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();
    let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    let mut adj = 0;
    if (4.0..=9.0).contains(&avg) {
        adj += 2;
    }
    if lengths.iter().any(|&n| n > LONG_WORD_CHARS) {
        adj -= 2;
    }
    adj
}
