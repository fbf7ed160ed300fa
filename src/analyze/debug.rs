//! Debug endpoints: inspect keyword tables and preview how input is read.
//! Mount with e.g. `app.merge(analyze::debug::router(scorer))` in dev only.

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use super::{corpus, is_filename_like, numeric::numeric_signals, CopyScorer};
use crate::model::ScoreInput;

#[derive(Debug, Serialize)]
pub struct CategoryOut {
    pub name: String,
    pub keywords: usize,
}

#[derive(Debug, Serialize)]
pub struct TablesOut {
    pub cta: usize,
    pub benefit: usize,
    pub emotion: usize,
    pub categories: Vec<CategoryOut>,
}

#[derive(Debug, Serialize)]
pub struct PreviewOut {
    pub corpus: String,
    pub numeric_corpus: String,
    pub words: usize,
    pub filename_captions: Vec<usize>,
    pub numeric_signals: Vec<String>,
    pub category_known: bool,
}

pub fn router(scorer: Arc<CopyScorer>) -> Router {
    Router::new()
        .route("/debug/tables", get(get_tables))
        .route("/debug/preview", post(post_preview))
        .with_state(scorer)
}

async fn get_tables(State(scorer): State<Arc<CopyScorer>>) -> Json<TablesOut> {
    let t = scorer.tables();
    Json(TablesOut {
        cta: t.cta.len(),
        benefit: t.benefit.len(),
        emotion: t.emotion.len(),
        categories: t
            .category_summary()
            .into_iter()
            .map(|(name, keywords)| CategoryOut { name, keywords })
            .collect(),
    })
}

async fn post_preview(
    State(scorer): State<Arc<CopyScorer>>,
    Json(input): Json<ScoreInput>,
) -> Json<PreviewOut> {
    let text = corpus::build_corpus(&input);
    let numeric_corpus = corpus::build_numeric_corpus(&input);
    Json(PreviewOut {
        words: corpus::words(&text).len(),
        filename_captions: input
            .captions
            .iter()
            .enumerate()
            .filter(|(_, c)| is_filename_like(c))
            .map(|(i, _)| i)
            .collect(),
        numeric_signals: numeric_signals(&numeric_corpus),
        category_known: scorer.tables().category(&input.category).is_some(),
        corpus: text,
        numeric_corpus,
    })
}
