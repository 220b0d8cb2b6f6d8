//! Dictionary lemmatizer.
//!
//! Lemmas come from the readings the tagger attached to each word: the
//! reading behind the chosen tag wins, then one from the same tag family.
//! Proper nouns, numbers, symbols and punctuation keep their text; words with
//! no reading are lowercased.
//!
//! # Examples
//!
//! ```
//! use text_analyzer::analysis::lemmatizer::Lemmatizer;
//! use text_analyzer::analysis::pos::{Reading, TaggedWord, UniversalTag};
//!
//! let fighting = TaggedWord {
//!     tag: "VBG",
//!     readings: vec![Reading { tag: "VBG", lemma: "fight".to_string() }],
//! };
//! assert_eq!(Lemmatizer::new().lemmatize("fighting", &fighting, UniversalTag::Verb), "fight");
//! ```

use crate::analysis::pos::{TaggedWord, UniversalTag};

/// Reading-based lemmatizer.
#[derive(Clone, Debug, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    /// Create a new lemmatizer.
    pub fn new() -> Self {
        Lemmatizer
    }

    /// Lemmatize `word` given its tagging and universal category.
    pub fn lemmatize(&self, word: &str, tagged: &TaggedWord, pos: UniversalTag) -> String {
        match pos {
            UniversalTag::Propn | UniversalTag::Punct | UniversalTag::Num | UniversalTag::Sym => {
                word.to_string()
            }
            _ => tagged
                .lemma()
                .map(str::to_string)
                .unwrap_or_else(|| word.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pos::Reading;

    fn tagged(tag: &'static str, readings: &[(&'static str, &str)]) -> TaggedWord {
        TaggedWord {
            tag,
            readings: readings
                .iter()
                .map(|(tag, lemma)| Reading { tag, lemma: lemma.to_string() })
                .collect(),
        }
    }

    #[test]
    fn test_reading_for_chosen_tag() {
        let lemmatizer = Lemmatizer::new();
        let saw = tagged("VBD", &[("NN", "saw"), ("VBD", "see")]);
        assert_eq!(lemmatizer.lemmatize("saw", &saw, UniversalTag::Verb), "see");

        let saw = tagged("NN", &[("NN", "saw"), ("VBD", "see")]);
        assert_eq!(lemmatizer.lemmatize("saw", &saw, UniversalTag::Noun), "saw");
    }

    #[test]
    fn test_same_family_reading() {
        let found = tagged("VBN", &[("VBD", "find")]);
        assert_eq!(Lemmatizer::new().lemmatize("found", &found, UniversalTag::Verb), "find");
    }

    #[test]
    fn test_no_reading_lowercases() {
        let blorbs = tagged("NNS", &[]);
        assert_eq!(Lemmatizer::new().lemmatize("Blorbs", &blorbs, UniversalTag::Noun), "blorbs");

        let other_family = tagged("JJ", &[("NN", "cold")]);
        assert_eq!(Lemmatizer::new().lemmatize("Cold", &other_family, UniversalTag::Adj), "cold");
    }

    #[test]
    fn test_text_preserving_categories() {
        let lemmatizer = Lemmatizer::new();
        let avengers = tagged("NNPS", &[("NNS", "avenger")]);
        assert_eq!(lemmatizer.lemmatize("Avengers", &avengers, UniversalTag::Propn), "Avengers");
        assert_eq!(lemmatizer.lemmatize("3.5", &tagged("CD", &[]), UniversalTag::Num), "3.5");
        assert_eq!(lemmatizer.lemmatize(".", &tagged(".", &[]), UniversalTag::Punct), ".");
        assert_eq!(lemmatizer.lemmatize("$", &tagged("$", &[]), UniversalTag::Sym), "$");
    }
}
