// src/devlog.rs
//! Dev-only diagnostics for scoring.
//!
//! Enabled by ASO_DEV_LOG=1 in a dev environment (debug build, or
//! APP_ENV in {local, development, dev}). Copy text is never logged raw;
//! only a short SHA-256 prefix identifies the corpus.

use sha2::{Digest, Sha256};
use tracing::info;

use crate::model::ScoreBreakdown;

pub const ENV_DEV_LOG: &str = "ASO_DEV_LOG";
pub const ENV_APP_ENV: &str = "APP_ENV";

pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    is_dev_env_name(&std::env::var(ENV_APP_ENV).unwrap_or_default())
}

pub(crate) fn is_dev_env_name(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "local" | "development" | "dev"
    )
}

/// First 6 bytes of SHA-256, hex encoded.
pub fn anon_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Callers check `dev_logging_enabled()` first.
pub(crate) fn dev_log_score(corpus: &str, words: usize, breakdown: &ScoreBreakdown, score: u32) {
    let id = anon_hash(corpus);
    info!(
        target: "scoring",
        %id, words, score,
        cta = breakdown.cta,
        benefit = breakdown.benefit,
        clarity = breakdown.clarity,
        numeric = breakdown.numeric,
        emotion = breakdown.emotion,
        category = breakdown.category,
        "scored copy"
    );
}
