//! Whole-word keyword matching and the keyword-driven sub-scores
//! (CTA, benefit, emotion, category).

use regex::Regex;

use crate::model::{CATEGORY_SCORE_MAX, SUB_SCORE_MAX};

/// Points per CTA / emotion keyword hit.
pub const POINTS_PER_HIT: u32 = 5;
/// Scale applied to the benefit keyword ratio.
pub const BENEFIT_RATIO_SCALE: f64 = 60.0;
/// Scale applied to the category keyword ratio.
pub const CATEGORY_RATIO_SCALE: f64 = 100.0;

/// A fixed keyword list with one compiled whole-word regex per entry.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<String>,
    patterns: Vec<Regex>,
}

impl KeywordSet {
    /// Compile a keyword list. Entries are trimmed, lowercased and deduplicated;
    /// blank entries are dropped.
    pub fn compile<I, S>(keywords: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !list.contains(&kw) {
                list.push(kw);
            }
        }

        let patterns = list
            .iter()
            .map(|kw| {
                Regex::new(&whole_word_pattern(kw))
                    .map_err(|e| anyhow::anyhow!("keyword `{}` regex error: {}", kw, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            keywords: list,
            patterns,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Total whole-word occurrences of every keyword in `corpus`.
    pub fn count_in(&self, corpus: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(corpus).count())
            .sum()
    }
}

/// `\b` is only meaningful next to a word character, so it is added per side.
fn whole_word_pattern(keyword: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if keyword.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let trail = if keyword.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    format!("(?i){lead}{}{trail}", regex::escape(keyword))
}

/// Raw-count scoring shared by CTA and emotion.
pub fn hit_score(hits: usize) -> u32 {
    let hits = u32::try_from(hits).unwrap_or(u32::MAX);
    hits.saturating_mul(POINTS_PER_HIT).min(SUB_SCORE_MAX)
}

/// `round(matches / words * scale)` clamped to `[0, max]`. Zero words scores 0.
pub fn ratio_score(matches: usize, word_count: usize, scale: f64, max: u32) -> u32 {
    if word_count == 0 {
        return 0;
    }
    let raw = (matches as f64 / word_count as f64 * scale).round();
    raw.clamp(0.0, f64::from(max)) as u32
}

pub fn cta_score(set: &KeywordSet, corpus: &str) -> u32 {
    hit_score(set.count_in(corpus))
}

pub fn emotion_score(set: &KeywordSet, corpus: &str) -> u32 {
    hit_score(set.count_in(corpus))
}

pub fn benefit_score(set: &KeywordSet, corpus: &str, word_count: usize) -> u32 {
    ratio_score(
        set.count_in(corpus),
        word_count,
        BENEFIT_RATIO_SCALE,
        SUB_SCORE_MAX,
    )
}

/// Category alignment. `None` means the declared category is not in the table.
pub fn category_score(set: Option<&KeywordSet>, corpus: &str, word_count: usize) -> u32 {
    match set {
        Some(set) if !set.is_empty() => ratio_score(
            set.count_in(corpus),
            word_count,
            CATEGORY_RATIO_SCALE,
            CATEGORY_SCORE_MAX,
        ),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        KeywordSet::compile(words).expect("compile keywords")
    }

    #[test]
    fn counts_whole_words_only() {
        let s = set(&["cat", "try"]);
        assert_eq!(s.count_in("category entry country"), 0);
        assert_eq!(s.count_in("cat. try it, try again"), 3);
    }

    #[test]
    fn phrases_and_punctuated_keywords() {
        let s = set(&["sign up", "stress-free", "c++"]);
        assert_eq!(s.count_in("sign up today for stress-free c++ notes"), 3);
        assert_eq!(s.count_in("signup stressfree"), 0);
    }

    #[test]
    fn compile_normalizes_entries() {
        let s = set(&[" Free ", "free", ""]);
        assert_eq!(s.keywords(), &["free".to_string()]);
        assert_eq!(s.count_in("FREE free"), 2);
    }

    #[test]
    fn hit_score_caps_at_ceiling() {
        assert_eq!(hit_score(0), 0);
        assert_eq!(hit_score(3), 15);
        assert_eq!(hit_score(4), 20);
        assert_eq!(hit_score(50), 20);
    }

    #[test]
    fn ratio_score_rounds_and_clamps() {
        // 1/8 * 100 = 12.5 -> 13
        assert_eq!(ratio_score(1, 8, CATEGORY_RATIO_SCALE, CATEGORY_SCORE_MAX), 13);
        // 1/10 * 60 = 6
        assert_eq!(ratio_score(1, 10, BENEFIT_RATIO_SCALE, SUB_SCORE_MAX), 6);
        assert_eq!(ratio_score(9, 10, BENEFIT_RATIO_SCALE, SUB_SCORE_MAX), 20);
        assert_eq!(ratio_score(3, 0, BENEFIT_RATIO_SCALE, SUB_SCORE_MAX), 0);
    }

    #[test]
    fn unknown_category_scores_zero() {
        assert_eq!(category_score(None, "budget money", 2), 0);
        let empty = KeywordSet::default();
        assert_eq!(category_score(Some(&empty), "budget money", 2), 0);
        let fin = set(&["budget", "money"]);
        assert_eq!(category_score(Some(&fin), "budget money", 2), 25);
    }
}
