// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod devlog;
pub mod metrics;
pub mod model;
pub mod variants;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{score_copy, CopyScorer};
pub use crate::api::{router, AppState};
pub use crate::model::{ScoreBreakdown, ScoreInput, ScoreResult};

use std::sync::Arc;

use axum::Router;

use crate::config::{AppConfig, KeywordTables};
use crate::metrics::Metrics;

/// Full application router: scoring API, dev-only debug routes and
/// `/metrics` when enabled in `cfg`.
pub fn app(cfg: &AppConfig, tables: Arc<KeywordTables>) -> anyhow::Result<Router> {
    let scorer = CopyScorer::new(tables);

    let mut app = api::router(AppState::new(scorer.clone()));
    if devlog::dev_logging_enabled() {
        app = app.merge(analyze::debug::router(Arc::new(scorer)));
    }
    if cfg.metrics_enabled {
        app = app.merge(Metrics::init()?.router());
    }
    Ok(app)
}
