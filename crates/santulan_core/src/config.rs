//! Engine configuration: the bilingual emotion lexicon, template pools,
//! crisis keyword sets and augmentation settings.
//!
//! The built-in dataset (see [`crate::defaults`]) is the `Default`; a TOML
//! file can replace any part of it, and an administrative collaborator can
//! hot-swap the whole thing at runtime through the engine.

use crate::types::{Language, Mode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A value present in both supported languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bilingual<T: Default> {
    pub en: T,
    pub hi: T,
}

impl<T: Default> Bilingual<T> {
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }
}

/// One weighted keyword in an emotion category's lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub weight: u32,
}

/// Template pools for the four reply fragments plus validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSet {
    pub validation: Bilingual<Vec<String>>,
    pub reflection: Bilingual<Vec<String>>,
    pub insight: Bilingual<Vec<String>>,
    pub action: Bilingual<Vec<String>>,
    pub follow_up: Bilingual<Vec<String>>,
}

/// One emotion category: keywords to score against and templates to speak
/// with, tagged with a response mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionCategory {
    pub name: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub keywords: Bilingual<Vec<LexiconEntry>>,
    #[serde(default)]
    pub templates: TemplateSet,
}

/// Crisis keyword sets, scanned in declaration order: suicide intent first,
/// then self-harm. Matching is case-insensitive substring containment, not
/// tokenized — a short phrase can match inside a longer word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrisisLexicon {
    pub suicide_intent: Bilingual<Vec<String>>,
    pub self_harm: Bilingual<Vec<String>>,
    /// Fixed emergency reply per language. Contains a real helpline number.
    pub emergency_message: Bilingual<String>,
}

impl Default for CrisisLexicon {
    fn default() -> Self {
        crate::defaults::crisis_lexicon()
    }
}

/// Pools that are not tied to any one emotion category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalTemplates {
    /// Used when no category scored at all.
    pub fallback: Bilingual<Vec<String>>,
    /// Session-opening lines for front ends.
    pub greetings: Bilingual<Vec<String>>,
}

/// Settings for the optional generative augmentation collaborator.
///
/// The credential itself is never part of the config file; clients read it
/// from the environment (`GEMINI_API_KEY`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    pub model: String,
    /// Upper bound on the augmentation call. On expiry the turn falls back
    /// to rule-based composition.
    pub timeout_secs: u64,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 8,
        }
    }
}

/// Everything the engine needs to run. Replaceable at runtime as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub emotions: Vec<EmotionCategory>,
    pub crisis: CrisisLexicon,
    pub global: GlobalTemplates,
    pub augment: AugmentConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            emotions: crate::defaults::emotion_categories(),
            crisis: crate::defaults::crisis_lexicon(),
            global: crate::defaults::global_templates(),
            augment: AugmentConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from a TOML file, falling back to the built-in dataset
    /// for missing fields. Env overrides are applied after parsing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: EngineConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, use the
    /// built-in dataset with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using built-in dataset", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SANTULAN_AUGMENT_MODEL") {
            self.augment.model = v;
        }
        if let Ok(v) = std::env::var("SANTULAN_AUGMENT_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                self.augment.timeout_secs = n;
            }
        }
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&EmotionCategory> {
        self.emotions.iter().find(|c| c.name == name)
    }

    /// Data-quality check. Returns one message per gap; none of them is
    /// fatal — the composer's fallback chain covers missing pools, and
    /// zero-weight keywords simply never contribute to a score.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for category in &self.emotions {
            if category.keywords.en.is_empty() && category.keywords.hi.is_empty() {
                warnings.push(format!("category '{}' has no keywords", category.name));
            }
            for entry in category.keywords.en.iter().chain(&category.keywords.hi) {
                if entry.weight == 0 {
                    warnings.push(format!(
                        "category '{}' keyword '{}' has zero weight",
                        category.name, entry.word
                    ));
                }
            }
            let t = &category.templates;
            for (slot, pool) in [
                ("validation", &t.validation),
                ("reflection", &t.reflection),
                ("insight", &t.insight),
                ("action", &t.action),
                ("follow_up", &t.follow_up),
            ] {
                if pool.en.is_empty() {
                    warnings.push(format!(
                        "category '{}' has no English {} templates",
                        category.name, slot
                    ));
                }
            }
        }
        if self.global.fallback.en.is_empty() {
            warnings.push("global fallback pool has no English templates".to_string());
        }
        if self.crisis.suicide_intent.en.is_empty() || self.crisis.self_harm.en.is_empty() {
            warnings.push("crisis lexicon is missing English keywords".to_string());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.emotions.len(), 10);
        assert!(cfg.validate().is_empty(), "built-in dataset should have no gaps");
        assert_eq!(cfg.augment.model, "gemini-1.5-flash");
    }

    #[test]
    fn category_lookup() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.category("Stress").unwrap().mode, Mode::Calm);
        assert_eq!(cfg.category("Anger").unwrap().mode, Mode::Power);
        assert!(cfg.category("Nonexistent").is_none());
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let toml_str = r#"
[augment]
model = "gemini-2.0-flash"
timeout_secs = 3
"#;
        let cfg: EngineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.augment.model, "gemini-2.0-flash");
        assert_eq!(cfg.augment.timeout_secs, 3);
        // Unspecified sections come from the built-in dataset
        assert_eq!(cfg.emotions.len(), 10);
        assert!(!cfg.crisis.suicide_intent.en.is_empty());
    }

    #[test]
    fn parse_custom_category() {
        let toml_str = r#"
[[emotions]]
name = "Gratitude"
mode = "Power"

[[emotions.keywords.en]]
word = "thankful"
weight = 3

[emotions.templates.validation]
en = ["That warmth comes through clearly."]
"#;
        let cfg: EngineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.emotions.len(), 1);
        let cat = cfg.category("Gratitude").unwrap();
        assert_eq!(cat.mode, Mode::Power);
        assert_eq!(cat.keywords.en[0].word, "thankful");
        assert!(cat.templates.validation.hi.is_empty());
    }

    #[test]
    fn validate_flags_gaps() {
        let mut cfg = EngineConfig::default();
        cfg.emotions[0].templates.validation.en.clear();
        cfg.emotions[0].keywords.en[0].weight = 0;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("validation")));
        assert!(warnings.iter().any(|w| w.contains("zero weight")));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = EngineConfig::default();
        let serialized = toml::to_string(&cfg).unwrap();
        let restored: EngineConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(restored, cfg);
    }
}
