// src/analyze/mod.rs
//! Copy-scoring pipeline: corpus → six sub-scores → weighted total → recommendations.
//!
//! Pure and deterministic. A `CopyScorer` holds only immutable tables, so one
//! instance can be shared across request handlers without locking.

pub mod clarity;
pub mod corpus;
pub mod debug;
pub mod filename;
pub mod keywords;
pub mod numeric;
pub mod recommend;
pub mod scoring;

use std::sync::Arc;

use crate::config::KeywordTables;
use crate::devlog::{dev_log_score, dev_logging_enabled};
use crate::model::{ScoreBreakdown, ScoreInput, ScoreResult};

pub use crate::analyze::filename::is_filename_like;
pub use crate::analyze::recommend::recommendations;
pub use crate::analyze::scoring::{weighted_total, Weights};

#[derive(Debug, Clone)]
pub struct CopyScorer {
    tables: Arc<KeywordTables>,
    weights: Weights,
    /// Dev diagnostics gate, read from the environment once per scorer.
    dev_log: bool,
}

impl Default for CopyScorer {
    fn default() -> Self {
        Self::new(KeywordTables::builtin())
    }
}

impl CopyScorer {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self {
            tables,
            weights: Weights::default(),
            dev_log: dev_logging_enabled(),
        }
    }

    pub fn with_dev_log(mut self, on: bool) -> Self {
        self.dev_log = on;
        self
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Score one input. Total over any strings; never fails.
    pub fn score(&self, input: &ScoreInput) -> ScoreResult {
        let breakdown = self.breakdown(input);
        let score = weighted_total(&breakdown, &self.weights);
        if self.dev_log {
            let text = corpus::build_corpus(input);
            dev_log_score(&text, corpus::words(&text).len(), &breakdown, score);
        }
        ScoreResult {
            score,
            breakdown,
            recommendation: recommendations(&breakdown),
        }
    }

    /// Sub-scores only. No total, recommendations or diagnostics.
    pub fn breakdown(&self, input: &ScoreInput) -> ScoreBreakdown {
        let text = corpus::build_corpus(input);
        let numeric_text = corpus::build_numeric_corpus(input);
        let words = corpus::words(&text);
        let t = &self.tables;

        ScoreBreakdown {
            cta: keywords::cta_score(&t.cta, &text),
            benefit: keywords::benefit_score(&t.benefit, &text, words.len()),
            clarity: clarity::clarity_score(&text, &words),
            numeric: numeric::numeric_score(&numeric_text),
            emotion: keywords::emotion_score(&t.emotion, &text),
            category: keywords::category_score(t.category(&input.category), &text, words.len()),
        }
    }
}

/// Score with the built-in keyword tables.
pub fn score_copy(input: &ScoreInput) -> ScoreResult {
    CopyScorer::default().score(input)
}
