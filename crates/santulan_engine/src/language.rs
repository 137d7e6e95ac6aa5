//! Language detection shared by the crisis detector and the emotion scorer.
//! Both compute it independently; there is no shared state between them.

use santulan_core::Language;

/// Any Devanagari codepoint (U+0900–U+097F) anywhere in the text means
/// Hindi, otherwise English.
pub fn detect(text: &str) -> Language {
    if text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c)) {
        Language::Hi
    } else {
        Language::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_english_is_en() {
        assert_eq!(detect("I am feeling stressed"), Language::En);
        assert_eq!(detect(""), Language::En);
    }

    #[test]
    fn devanagari_anywhere_is_hi() {
        assert_eq!(detect("मुझे चिंता है"), Language::Hi);
        // A single Devanagari character flips the whole text
        assert_eq!(detect("I feel दुख today"), Language::Hi);
    }

    #[test]
    fn romanized_hindi_is_en() {
        // Latin-script Hindi has no Devanagari codepoints
        assert_eq!(detect("mujhe tanaav hai"), Language::En);
    }
}
