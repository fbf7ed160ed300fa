//! Weighted aggregation of the six sub-scores into a 0..=100 total.
//!
//! Each sub-score is divided by its own ceiling and multiplied by its weight:
//! total = Σ (sub / ceiling) × weight, clamped to [0, 100] and rounded.

use crate::model::{ScoreBreakdown, CATEGORY_SCORE_MAX, SUB_SCORE_MAX};

/// Contribution of each dimension to the 100-point total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub cta: f64,
    pub benefit: f64,
    pub clarity: f64,
    pub numeric: f64,
    pub emotion: f64,
    pub category: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cta: 20.0,
            benefit: 20.0,
            clarity: 15.0,
            numeric: 10.0,
            emotion: 10.0,
            category: 25.0,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.cta + self.benefit + self.clarity + self.numeric + self.emotion + self.category
    }
}

/// Compute the overall score from a breakdown.
pub fn weighted_total(b: &ScoreBreakdown, w: &Weights) -> u32 {
    fn part(value: u32, ceiling: u32, weight: f64) -> f64 {
        f64::from(value) / f64::from(ceiling) * weight
    }

    let raw = part(b.cta, SUB_SCORE_MAX, w.cta)
        + part(b.benefit, SUB_SCORE_MAX, w.benefit)
        + part(b.clarity, SUB_SCORE_MAX, w.clarity)
        + part(b.numeric, SUB_SCORE_MAX, w.numeric)
        + part(b.emotion, SUB_SCORE_MAX, w.emotion)
        + part(b.category, CATEGORY_SCORE_MAX, w.category);

    raw.clamp(0.0, 100.0).round() as u32
}
