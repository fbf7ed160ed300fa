// src/config/keywords.rs
//! Keyword tables (CTA, benefit, emotion, category → keywords).
//!
//! The built-in tables ship inside the binary (`config/keywords.toml`) and are
//! compiled once. A different file can be supplied at startup via
//! `ASO_KEYWORDS_PATH`; tables never change after loading.

use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::analyze::corpus::normalize;
use crate::analyze::keywords::KeywordSet;

pub const ENV_KEYWORDS_PATH: &str = "ASO_KEYWORDS_PATH";

/// Raw text of the built-in tables.
pub const BUILTIN_KEYWORDS_TOML: &str = include_str!("../../config/keywords.toml");

static BUILTIN: Lazy<Arc<KeywordTables>> = Lazy::new(|| {
    let tables =
        KeywordTables::from_toml_str(BUILTIN_KEYWORDS_TOML).expect("valid built-in keyword tables");
    Arc::new(tables)
});

/* ----------------------------
File schema (TOML)
---------------------------- */

#[derive(Debug, Clone, Deserialize)]
struct TablesFile {
    cta: Vec<String>,
    benefit: Vec<String>,
    emotion: Vec<String>,
    #[serde(default)]
    categories: BTreeMap<String, CategoryCfg>,
}

#[derive(Debug, Clone, Deserialize)]
struct CategoryCfg {
    #[serde(default)]
    aliases: Vec<String>,
    keywords: Vec<String>,
}

/* ----------------------------
Compiled tables
---------------------------- */

#[derive(Debug)]
pub struct KeywordTables {
    pub cta: KeywordSet,
    pub benefit: KeywordSet,
    pub emotion: KeywordSet,
    categories: Vec<(String, KeywordSet)>,
    // normalized name or alias -> index into `categories`
    index: HashMap<String, usize>,
}

impl KeywordTables {
    /// Shared handle to the built-in tables.
    pub fn builtin() -> Arc<Self> {
        BUILTIN.clone()
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading keyword tables from {}", path.display()))?;
        let tables = Self::from_toml_str(&content)
            .with_context(|| format!("parsing keyword tables at {}", path.display()))?;
        info!(
            path = %path.display(),
            categories = tables.categories.len(),
            "loaded keyword tables"
        );
        Ok(tables)
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let raw: TablesFile = toml::from_str(toml_str)?;

        let cta = KeywordSet::compile(&raw.cta).context("cta keywords")?;
        let benefit = KeywordSet::compile(&raw.benefit).context("benefit keywords")?;
        let emotion = KeywordSet::compile(&raw.emotion).context("emotion keywords")?;

        let mut categories = Vec::with_capacity(raw.categories.len());
        let mut index = HashMap::new();
        for (name, cfg) in raw.categories {
            let set = KeywordSet::compile(&cfg.keywords)
                .with_context(|| format!("category `{}` keywords", name))?;
            let slot = categories.len();
            for key in std::iter::once(&name).chain(cfg.aliases.iter()) {
                let key = category_key(key);
                if key.is_empty() {
                    continue;
                }
                if index.insert(key.clone(), slot).is_some() {
                    bail!("category name or alias `{}` is declared twice", key);
                }
            }
            categories.push((name, set));
        }

        Ok(Self {
            cta,
            benefit,
            emotion,
            categories,
            index,
        })
    }

    /// Keyword list for a declared category (trimmed, case-insensitive, aliases resolved).
    pub fn category(&self, declared: &str) -> Option<&KeywordSet> {
        self.index
            .get(&category_key(declared))
            .map(|&i| &self.categories[i].1)
    }

    /// Canonical category names with their keyword counts, sorted by name.
    pub fn category_summary(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|(name, set)| (name.clone(), set.len()))
            .collect()
    }
}

fn category_key(raw: &str) -> String {
    normalize(raw)
}
