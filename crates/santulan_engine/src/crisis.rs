//! Crisis detection. Runs before everything else and short-circuits the
//! whole turn on a hit: no scoring, no context access, no composition.

use crate::language;
use santulan_core::{CrisisHit, CrisisLexicon, Language};

/// Scan text against the crisis lexicon.
///
/// Categories are checked in a fixed order (suicide intent before
/// self-harm). Matching is case-insensitive substring containment — a
/// shorter crisis phrase can match inside a longer word, deliberately. The
/// first hit wins and carries the fixed emergency message for the detected
/// language.
pub fn scan(lexicon: &CrisisLexicon, text: &str) -> Option<CrisisHit> {
    let cleaned = text.to_lowercase();
    let cleaned = cleaned.trim();
    let lang = language::detect(text);

    let sets = [&lexicon.suicide_intent, &lexicon.self_harm];
    for set in sets {
        for keyword in set.get(lang) {
            if cleaned.contains(&keyword.to_lowercase()) {
                return Some(CrisisHit {
                    trigger: keyword.clone(),
                    message: lexicon.emergency_message.get(lang).clone(),
                    language: lang,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use santulan_core::EngineConfig;

    fn lexicon() -> CrisisLexicon {
        EngineConfig::default().crisis
    }

    #[test]
    fn detects_suicide_intent_phrase() {
        let hit = scan(&lexicon(), "I want to kill myself").expect("should detect");
        assert_eq!(hit.trigger, "kill myself");
        assert_eq!(hit.language, Language::En);
        assert!(hit.message.contains("9152987821"));
    }

    #[test]
    fn matching_ignores_case() {
        let hit = scan(&lexicon(), "I WANT TO KILL MYSELF").expect("should detect");
        assert_eq!(hit.trigger, "kill myself");
    }

    #[test]
    fn suicide_intent_takes_priority_over_self_harm() {
        // Contains keywords from both sets; the suicide-intent set is
        // scanned first.
        let hit = scan(&lexicon(), "thinking about suicide and self harm").unwrap();
        assert_eq!(hit.trigger, "suicide");
    }

    #[test]
    fn substring_containment_is_not_tokenized() {
        // "cutting" matches inside "woodcutting" — containment by design
        let hit = scan(&lexicon(), "I spent the day woodcutting").unwrap();
        assert_eq!(hit.trigger, "cutting");
    }

    #[test]
    fn hindi_text_uses_hindi_keywords_and_message() {
        let hit = scan(&lexicon(), "मुझे जीने का मन नहीं है").expect("should detect");
        assert_eq!(hit.language, Language::Hi);
        assert!(hit.message.contains("Vandrevala"));
    }

    #[test]
    fn ordinary_text_is_not_a_crisis() {
        assert!(scan(&lexicon(), "I am very stressed about work").is_none());
        assert!(scan(&lexicon(), "").is_none());
    }

    #[test]
    fn crisis_wins_even_with_emotional_keywords_present() {
        let hit = scan(&lexicon(), "I am sad and hopeless and want to die").unwrap();
        assert_eq!(hit.trigger, "want to die");
    }
}
