//! Template-based copy variants returned next to the score by `/generate`.
//!
//! Variants are filled from fixed templates with the app name, category and
//! the caller's own captions. No text is invented beyond the templates, and
//! output is deterministic.

use serde::Serialize;

use crate::analyze::corpus::normalize;
use crate::analyze::is_filename_like;
use crate::analyze::numeric::numeric_signals;
use crate::model::ScoreInput;

/// App Store limit for both the title and the subtitle field.
pub const STORE_FIELD_MAX_CHARS: usize = 30;

const FALLBACK_CATEGORY: &str = "everyday life";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyVariant {
    /// `benefit`, `action` or `proof`.
    pub label: &'static str,
    pub headline: String,
    pub subtitle: String,
}

pub fn generate_variants(input: &ScoreInput) -> Vec<CopyVariant> {
    let app = input.app_name.trim();
    let category = match input.category.trim() {
        "" => FALLBACK_CATEGORY.to_string(),
        c => c.to_lowercase(),
    };

    let descriptive: Vec<&str> = input
        .captions
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty() && !is_filename_like(c))
        .collect();
    let lead = descriptive.first().copied().unwrap_or(app);
    let proof = descriptive
        .iter()
        .copied()
        .find(|c| !numeric_signals(&normalize(c)).is_empty())
        .unwrap_or(lead);

    vec![
        CopyVariant {
            label: "benefit",
            headline: fit(&format!("{app} makes {category} easy")),
            subtitle: fit(lead),
        },
        CopyVariant {
            label: "action",
            headline: fit(&format!("Download {app} today")),
            subtitle: fit(&format!("Try it free: {lead}")),
        },
        CopyVariant {
            label: "proof",
            headline: fit(&format!("Why people choose {app}")),
            subtitle: fit(proof),
        },
    ]
}

/// Trim to the store field limit on a word boundary when possible.
fn fit(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= STORE_FIELD_MAX_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(STORE_FIELD_MAX_CHARS).collect();
    match cut.rfind(' ') {
        Some(i) if i > 0 => cut[..i].trim_end().to_string(),
        _ => cut,
    }
}
