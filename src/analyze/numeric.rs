//! Numeric proof points ("10x faster", "50% off", "1m users").
//!
//! Reads the numeric corpus, which already excludes filename-like captions.
//! Each distinct signal is worth 5 points, capped at 20.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use super::keywords::hit_score;

// number, optional decimal part, optional unit; longer units listed before their prefixes
static NUMERIC_SIGNAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d+(?:[.,]\d+)?(?:\s*(?:%|(?:downloads|minutes|seconds|rating|stars|users|hours|days|mins|hrs|sec|x|k|m|b)\b))?",
    )
    .expect("numeric signal regex")
});

/// Distinct numeric signals found in `corpus`, sorted.
pub fn numeric_signals(corpus: &str) -> Vec<String> {
    NUMERIC_SIGNAL
        .find_iter(corpus)
        .filter(|m| !continues_number(corpus, m.start()))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// "v2.0" or "1,000,000": a digit group after `<digit>[.,]` is the tail of an
// earlier number the pattern could not take whole, not a signal of its own.
fn continues_number(corpus: &str, start: usize) -> bool {
    let mut before = corpus[..start].chars().rev();
    matches!(before.next(), Some('.' | ','))
        && before.next().is_some_and(|c| c.is_ascii_digit())
}

pub fn numeric_score(numeric_corpus: &str) -> u32 {
    hit_score(numeric_signals(numeric_corpus).len())
}
