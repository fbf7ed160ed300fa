//! Recommendations derived from weak sub-scores.
//!
//! Dimensions are checked in a fixed order (CTA, benefit, clarity, numeric,
//! emotion, category). A dimension is weak below 12 on its own scale. When
//! nothing is weak a single affirmation is returned, so the list is never empty.

use crate::model::ScoreBreakdown;

/// Sub-scores below this value trigger a recommendation.
pub const WEAK_THRESHOLD: u32 = 12;

pub const MSG_CTA: &str =
    "Add a clear call to action such as \"Download now\" or \"Try it free\".";
pub const MSG_BENEFIT: &str =
    "Lead with concrete user benefits: what gets faster, easier or more organized.";
pub const MSG_CLARITY: &str = "Tighten the captions: aim for 8 to 40 words in total, plain words, and at most two exclamation or question marks.";
pub const MSG_NUMERIC: &str =
    "Add numeric proof points such as \"10x faster\", \"50% off\" or \"1M users\".";
pub const MSG_EMOTION: &str = "Use emotional language that shows how the app makes people feel.";
pub const MSG_CATEGORY: &str =
    "Strengthen category alignment by using the keywords people search for in this category.";
pub const MSG_ALL_GOOD: &str =
    "Strong copy across every dimension. Keep A/B testing caption variants.";

pub fn recommendations(b: &ScoreBreakdown) -> Vec<String> {
    let checks = [
        (b.cta, MSG_CTA),
        (b.benefit, MSG_BENEFIT),
        (b.clarity, MSG_CLARITY),
        (b.numeric, MSG_NUMERIC),
        (b.emotion, MSG_EMOTION),
        (b.category, MSG_CATEGORY),
    ];

    let mut out: Vec<String> = checks
        .iter()
        .filter(|(value, _)| *value < WEAK_THRESHOLD)
        .map(|(_, msg)| (*msg).to_string())
        .collect();

    if out.is_empty() {
        out.push(MSG_ALL_GOOD.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_weak_in_fixed_order() {
        let out = recommendations(&ScoreBreakdown::default());
        assert_eq!(
            out,
            vec![MSG_CTA, MSG_BENEFIT, MSG_CLARITY, MSG_NUMERIC, MSG_EMOTION, MSG_CATEGORY]
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        let b = ScoreBreakdown {
            cta: 12,
            benefit: 12,
            clarity: 12,
            numeric: 11,
            emotion: 12,
            category: 12,
        };
        assert_eq!(recommendations(&b), vec![MSG_NUMERIC]);
    }

    #[test]
    fn strong_copy_gets_affirmation() {
        let b = ScoreBreakdown {
            cta: 20,
            benefit: 15,
            clarity: 18,
            numeric: 15,
            emotion: 12,
            category: 25,
        };
        assert_eq!(recommendations(&b), vec![MSG_ALL_GOOD]);
    }
}
