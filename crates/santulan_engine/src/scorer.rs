//! Weighted lexical emotion scoring.
//!
//! Pure and deterministic: the same text and configuration always produce
//! the same ranking. Keyword patterns are compiled once per configuration
//! swap, not per call.

use crate::language;
use regex::Regex;
use santulan_core::{AnalysisResult, EmotionCategory, EmotionScore, Language, Mode};

struct CompiledKeyword {
    word: String,
    weight: u32,
    pattern: Regex,
}

struct CompiledCategory {
    name: String,
    mode: Mode,
    en: Vec<CompiledKeyword>,
    hi: Vec<CompiledKeyword>,
}

impl CompiledCategory {
    /// Keywords for the detected language, falling back to the English list
    /// when the language sub-tree is empty (e.g. after a partial config
    /// swap).
    fn keywords(&self, lang: Language) -> &[CompiledKeyword] {
        match lang {
            Language::En => &self.en,
            Language::Hi if self.hi.is_empty() => &self.en,
            Language::Hi => &self.hi,
        }
    }
}

/// Scores text against every emotion category's lexicon.
pub struct EmotionScorer {
    categories: Vec<CompiledCategory>,
}

impl EmotionScorer {
    pub fn new(categories: &[EmotionCategory]) -> Self {
        let compile = |entries: &[santulan_core::LexiconEntry]| {
            entries
                .iter()
                .filter_map(|entry| {
                    // Escaped keywords cannot produce invalid patterns; an
                    // oversized one would be a data-quality problem, so skip
                    // it rather than fail the whole swap.
                    let source = format!(r"(?i)\b{}\b", regex::escape(&entry.word));
                    match Regex::new(&source) {
                        Ok(pattern) => Some(CompiledKeyword {
                            word: entry.word.to_lowercase(),
                            weight: entry.weight,
                            pattern,
                        }),
                        Err(e) => {
                            tracing::warn!("Skipping unmatchable keyword '{}': {}", entry.word, e);
                            None
                        }
                    }
                })
                .collect::<Vec<_>>()
        };

        Self {
            categories: categories
                .iter()
                .map(|c| CompiledCategory {
                    name: c.name.clone(),
                    mode: c.mode,
                    en: compile(&c.keywords.en),
                    hi: compile(&c.keywords.hi),
                })
                .collect(),
        }
    }

    /// Score `text` against every category.
    ///
    /// Whole-word, case-insensitive matching; every occurrence counts, and
    /// each occurrence adds the keyword's weight. Zero-score categories are
    /// dropped; the rest are sorted by score descending with source order
    /// breaking ties (stable sort).
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lang = language::detect(text);
        let cleaned = text.to_lowercase();
        let cleaned = cleaned.trim();

        let mut detected: Vec<EmotionScore> = Vec::new();
        for category in &self.categories {
            let mut score = 0u32;
            let mut matched = Vec::new();
            for keyword in category.keywords(lang) {
                let count = keyword.pattern.find_iter(cleaned).count() as u32;
                if count > 0 {
                    score += keyword.weight * count;
                    matched.push(keyword.word.clone());
                }
            }
            if score > 0 {
                detected.push(EmotionScore {
                    name: category.name.clone(),
                    score,
                    matched_keywords: matched,
                    mode: category.mode,
                });
            }
        }

        detected.sort_by(|a, b| b.score.cmp(&a.score));

        let top = detected.first().map(|e| e.score).unwrap_or(0);
        let confidence = (top as f32 / 5.0).min(1.0);
        let is_mixed = detected.len() > 1 && detected[0].score - detected[1].score < 2;

        AnalysisResult {
            language: lang,
            detected,
            confidence,
            is_mixed,
        }
    }
}
