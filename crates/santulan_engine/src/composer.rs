//! Reply composition from template pools.
//!
//! A composed reply is: greeting, validation, reflection+insight, action,
//! follow-up, joined by single spaces. The reflection+insight slot may be
//! replaced verbatim by the generative augmentor's output; everything else
//! is always rule-based. Pool selection is uniformly random over the
//! detected language's pool, falling back to English and finally to a fixed
//! placeholder — composition never returns an empty string.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use santulan_core::{AnalysisResult, Bilingual, EngineConfig, Language};
use std::sync::Mutex;

/// Placeholder when a template slot has no entries in any language.
const SLOT_PLACEHOLDER: &str = "...";
/// Placeholder when even the global fallback pool is empty.
const LISTENING_PLACEHOLDER: &str = "I'm listening.";

pub struct Composer {
    rng: Mutex<StdRng>,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic composer for tests: the same seed and inputs produce
    /// the same reply.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Compose the reply for one analyzed turn.
    ///
    /// `augmented` is the (already bounded) output of the generative
    /// collaborator; non-empty text replaces the reflection+insight slot
    /// verbatim.
    pub fn generate(
        &self,
        config: &EngineConfig,
        analysis: &AnalysisResult,
        display_name: Option<&str>,
        augmented: Option<String>,
    ) -> String {
        let lang = analysis.language;

        let Some(dominant) = analysis.dominant() else {
            return self.pick_or(&config.global.fallback, lang, LISTENING_PLACEHOLDER);
        };
        let Some(category) = config.category(&dominant.name) else {
            // The category disappeared in a config swap between scoring and
            // composition; treat it like nothing scored.
            tracing::warn!("No template config for scored category '{}'", dominant.name);
            return self.pick_or(&config.global.fallback, lang, LISTENING_PLACEHOLDER);
        };

        let name = display_name.unwrap_or(match lang {
            Language::En => "friend",
            Language::Hi => "दोस्त",
        });
        let greeting = match lang {
            Language::En => format!("Hey {name}! 👋"),
            Language::Hi => format!("नमस्ते {name}! 👋"),
        };

        let templates = &category.templates;
        let validation = self.pick_or(&templates.validation, lang, SLOT_PLACEHOLDER);

        let reflection_insight = match augmented.filter(|text| !text.trim().is_empty()) {
            Some(text) => text,
            None => {
                let trigger = dominant
                    .matched_keywords
                    .first()
                    .map(String::as_str)
                    .unwrap_or("your feelings");
                let reflection = self
                    .pick_or(&templates.reflection, lang, SLOT_PLACEHOLDER)
                    .replace("{trigger}", trigger);
                let insight = self.pick_or(&templates.insight, lang, SLOT_PLACEHOLDER);
                format!("{reflection} {insight}")
            }
        };

        let action = self.pick_or(&templates.action, lang, SLOT_PLACEHOLDER);
        let follow_up = self.pick_or(&templates.follow_up, lang, SLOT_PLACEHOLDER);

        format!("{greeting} {validation} {reflection_insight} {action} {follow_up}")
    }

    /// Session-opening line for front ends.
    pub fn pick_greeting(&self, pool: &Bilingual<Vec<String>>, lang: Language) -> String {
        self.pick_or(pool, lang, "Hello!")
    }

    /// Uniform pick from the pool for `lang`, falling back to the English
    /// pool, then to `placeholder`.
    fn pick_or(&self, pool: &Bilingual<Vec<String>>, lang: Language, placeholder: &str) -> String {
        let items = pool.get(lang);
        let items = if items.is_empty() { &pool.en } else { items };
        if items.is_empty() {
            tracing::warn!("Template pool empty in every language, using placeholder");
            return placeholder.to_string();
        }
        let index = self.rng.lock().expect("composer rng poisoned").gen_range(0..items.len());
        items[index].clone()
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::EmotionScorer;
    use santulan_core::{EmotionCategory, LexiconEntry, Mode, TemplateSet};

    fn analyze(text: &str) -> (EngineConfig, AnalysisResult) {
        let config = EngineConfig::default();
        let analysis = EmotionScorer::new(&config.emotions).analyze(text);
        (config, analysis)
    }

    #[test]
    fn composes_all_five_fragments() {
        let (config, analysis) = analyze("I feel so alone and lonely");
        let composer = Composer::seeded(7);
        let reply = composer.generate(&config, &analysis, Some("Asha"), None);
        assert!(reply.starts_with("Hey Asha! 👋"));
        // greeting + validation + reflection + insight + action + follow_up,
        // the last four drawn from the Loneliness pools
        let category = config.category("Loneliness").unwrap();
        assert!(category
            .templates
            .follow_up
            .en
            .iter()
            .any(|followup| reply.ends_with(followup.as_str())));
    }

    #[test]
    fn same_seed_same_reply() {
        let (config, analysis) = analyze("I feel sad");
        let a = Composer::seeded(42).generate(&config, &analysis, Some("Asha"), None);
        let b = Composer::seeded(42).generate(&config, &analysis, Some("Asha"), None);
        assert_eq!(a, b);
    }

    #[test]
    fn missing_name_uses_generic_term() {
        let (config, analysis) = analyze("I feel sad");
        let reply = Composer::seeded(1).generate(&config, &analysis, None, None);
        assert!(reply.starts_with("Hey friend! 👋"));
    }

    #[test]
    fn no_dominant_emotion_uses_global_fallback() {
        let (config, analysis) = analyze("the weather is fine");
        assert!(analysis.dominant().is_none());
        let reply = Composer::seeded(1).generate(&config, &analysis, Some("Asha"), None);
        assert!(config.global.fallback.en.contains(&reply));
    }

    #[test]
    fn augmented_text_replaces_reflection_and_insight() {
        let (config, analysis) = analyze("I feel sad");
        let reply = Composer::seeded(3).generate(
            &config,
            &analysis,
            None,
            Some("A colleague would recognize this weight.".to_string()),
        );
        assert!(reply.contains("A colleague would recognize this weight."));
        // The rule-based reflection pool must not also appear
        let reflections = &config.category("Sadness").unwrap().templates.reflection.en;
        assert!(reflections.iter().all(|r| !reply.contains(r.as_str())));
    }

    #[test]
    fn blank_augmented_text_falls_back_to_templates() {
        let (config, analysis) = analyze("I feel sad");
        let with_blank =
            Composer::seeded(3).generate(&config, &analysis, None, Some("   ".to_string()));
        let without = Composer::seeded(3).generate(&config, &analysis, None, None);
        assert_eq!(with_blank, without);
    }

    #[test]
    fn hindi_missing_pool_falls_back_to_english() {
        let mut config = EngineConfig::default();
        config.emotions = vec![EmotionCategory {
            name: "Stress".to_string(),
            keywords: Bilingual {
                en: vec![],
                hi: vec![LexiconEntry {
                    word: "तनाव".to_string(),
                    weight: 3,
                }],
            },
            templates: TemplateSet {
                validation: Bilingual {
                    en: vec!["English validation only.".to_string()],
                    hi: vec![],
                },
                ..TemplateSet::default()
            },
            mode: Mode::Calm,
        }];
        let analysis = EmotionScorer::new(&config.emotions).analyze("मुझे तनाव है");
        assert_eq!(analysis.dominant().unwrap().name, "Stress");
        let reply = Composer::seeded(5).generate(&config, &analysis, None, None);
        assert!(reply.starts_with("नमस्ते दोस्त! 👋"));
        assert!(reply.contains("English validation only."));
        // Remaining slots are empty everywhere → placeholder, never empty
        assert!(reply.contains(SLOT_PLACEHOLDER));
    }

    #[test]
    fn never_returns_empty_string() {
        let mut config = EngineConfig::default();
        config.global.fallback.en.clear();
        config.global.fallback.hi.clear();
        let analysis = EmotionScorer::new(&config.emotions).analyze("nothing matches here");
        let reply = Composer::seeded(9).generate(&config, &analysis, None, None);
        assert_eq!(reply, LISTENING_PLACEHOLDER);
    }

    #[test]
    fn trigger_placeholder_substitution() {
        let mut config = EngineConfig::default();
        let stress = config.emotions.iter_mut().find(|c| c.name == "Stress").unwrap();
        stress.templates.reflection.en = vec!["It keeps coming back to {trigger}.".to_string()];
        let analysis = EmotionScorer::new(&config.emotions).analyze("so much stress");
        let reply = Composer::seeded(2).generate(&config, &analysis, None, None);
        assert!(reply.contains("It keeps coming back to stress."));
    }
}
