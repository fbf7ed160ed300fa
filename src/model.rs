//! model.rs: input and output shapes of the copy scorer.
//!
//! Field names follow the JSON contract used by the API layer
//! (`appName`, `captions`, `recommendation`), so these types serialize
//! straight onto the wire without a separate DTO.

use serde::{Deserialize, Serialize};

/// Number of screenshot captions the API contract requires.
pub const CAPTION_COUNT: usize = 6;

/// Ceiling of the `cta`, `benefit`, `clarity`, `numeric` and `emotion` sub-scores.
pub const SUB_SCORE_MAX: u32 = 20;
/// Ceiling of the `category` sub-score.
pub const CATEGORY_SCORE_MAX: u32 = 25;

/// App identity supplied by the caller. Immutable for one scoring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    pub app_name: String,
    pub category: String,
    /// Screenshot captions or filenames. Order does not affect scoring.
    pub captions: Vec<String>,
}

impl ScoreInput {
    pub fn new(
        app_name: impl Into<String>,
        category: impl Into<String>,
        captions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            category: category.into(),
            captions: captions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-dimension sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub cta: u32,
    pub benefit: u32,
    pub clarity: u32,
    pub numeric: u32,
    pub emotion: u32,
    pub category: u32,
}

/// The engine's only output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted total in `0..=100`.
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    /// Advisory messages in fixed dimension order. Never empty.
    pub recommendation: Vec<String>,
}
