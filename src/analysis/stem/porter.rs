//! Porter stemming algorithm implementation.
//!
//! Follows Martin Porter's five-step algorithm with the commonly used
//! extensions: a small table of irregular forms, `-ies`/`-ied` on four-letter
//! words ("dies" → "die"), the `y` → `i` step only after a consonant, and the
//! `-bli`, `-fulli`, `-lessli` and `-logi` step 2 rules. Step 2 reduces
//! `-alli` before any other rule and runs again on the result.
//!
//! # Algorithm
//!
//! 1. Plurals, `-ed`/`-ing`, and final `y`
//! 2. `-ational` → `-ate`, `-tional` → `-tion`, etc.
//! 3. `-icate` → `-ic`, `-ative` → "", etc.
//! 4. Remove `-al`, `-ance`, `-ence`, etc.
//! 5. Remove final `-e` and reduce `-ll`
//!
//! # Examples
//!
//! ```
//! use text_analyzer::analysis::stem::Stemmer;
//! use text_analyzer::analysis::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::stem::Stemmer;

/// Words whose stems the rules get wrong.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("skies", "sky"),
    ("sky", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
    ("lessli", "less"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// Works on ASCII words; anything containing other characters is only
/// lowercased.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` is a consonant.
    fn is_consonant(word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !Self::is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &str) -> usize {
        let bytes = word.as_bytes();
        let n = bytes.len();
        let mut m = 0;
        let mut i = 0;

        // Skip initial consonants
        while i < n && Self::is_consonant(bytes, i) {
            i += 1;
        }

        while i < n {
            while i < n && !Self::is_consonant(bytes, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && Self::is_consonant(bytes, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(word: &str) -> bool {
        let bytes = word.as_bytes();
        (0..bytes.len()).any(|i| !Self::is_consonant(bytes, i))
    }

    fn ends_with_double_consonant(word: &str) -> bool {
        let bytes = word.as_bytes();
        let n = bytes.len();
        n >= 2 && bytes[n - 1] == bytes[n - 2] && Self::is_consonant(bytes, n - 1)
    }

    /// Consonant-vowel-consonant ending, where the last consonant is not w, x or y.
    fn ends_cvc(word: &str) -> bool {
        let bytes = word.as_bytes();
        let n = bytes.len();
        if n >= 3 {
            Self::is_consonant(bytes, n - 3)
                && !Self::is_consonant(bytes, n - 2)
                && Self::is_consonant(bytes, n - 1)
                && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
        } else {
            n == 2 && !Self::is_consonant(bytes, 0) && Self::is_consonant(bytes, 1)
        }
    }

    /// Apply the first rule whose suffix matches, if its stem has measure > 0.
    fn apply_rules(word: String, rules: &[(&str, &str)]) -> String {
        for (suffix, replacement) in rules {
            if let Some(stem) = word.strip_suffix(suffix) {
                if Self::measure(stem) > 0 {
                    return format!("{stem}{replacement}");
                }
                return word;
            }
        }
        word
    }

    fn step2(word: String) -> String {
        if let Some(stem) = word.strip_suffix("alli")
            && Self::measure(stem) > 0
        {
            return Self::step2(format!("{stem}al"));
        }
        // the "l" of "-logi" counts toward the stem's measure
        if let Some(stem) = word.strip_suffix("logi") {
            return if Self::measure(&word[..word.len() - 3]) > 0 {
                format!("{stem}log")
            } else {
                word
            };
        }
        Self::apply_rules(word, STEP2_RULES)
    }

    fn step1a(word: String) -> String {
        if let Some(stem) = word.strip_suffix("sses") {
            format!("{stem}ss")
        } else if let Some(stem) = word.strip_suffix("ies") {
            if word.len() == 4 {
                format!("{stem}ie")
            } else {
                format!("{stem}i")
            }
        } else if word.ends_with("ss") {
            word
        } else if let Some(stem) = word.strip_suffix('s') {
            stem.to_string()
        } else {
            word
        }
    }

    fn step1b(word: String) -> String {
        if let Some(stem) = word.strip_suffix("ied") {
            return if word.len() == 4 {
                format!("{stem}ie")
            } else {
                format!("{stem}i")
            };
        }

        if let Some(stem) = word.strip_suffix("eed") {
            return if Self::measure(stem) > 0 {
                format!("{stem}ee")
            } else {
                word
            };
        }

        let Some(stem) = word
            .strip_suffix("ed")
            .or_else(|| word.strip_suffix("ing"))
            .filter(|stem| Self::contains_vowel(stem))
            .map(str::to_string)
        else {
            return word;
        };

        if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
            format!("{stem}e")
        } else if Self::ends_with_double_consonant(&stem)
            && !matches!(stem.as_bytes()[stem.len() - 1], b'l' | b's' | b'z')
        {
            stem[..stem.len() - 1].to_string()
        } else if Self::measure(&stem) == 1 && Self::ends_cvc(&stem) {
            format!("{stem}e")
        } else {
            stem
        }
    }

    /// Final y becomes i after a consonant that is not the first letter.
    fn step1c(word: String) -> String {
        if let Some(stem) = word.strip_suffix('y')
            && stem.len() > 1
            && Self::is_consonant(stem.as_bytes(), stem.len() - 1)
        {
            return format!("{stem}i");
        }
        word
    }

    fn step4(word: String) -> String {
        for suffix in STEP4_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let ion_ok = *suffix != "ion" || stem.ends_with('s') || stem.ends_with('t');
                if ion_ok && Self::measure(stem) > 1 {
                    return stem.to_string();
                }
                return word;
            }
        }
        word
    }

    fn step5(word: String) -> String {
        let word = match word.strip_suffix('e') {
            Some(stem) => {
                let m = Self::measure(stem);
                if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                    stem.to_string()
                } else {
                    word
                }
            }
            None => word,
        };

        if word.ends_with("ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word;
        }

        if let Some((_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
            return stem.to_string();
        }

        let word = Self::step1a(word);
        let word = Self::step1b(word);
        let word = Self::step1c(word);
        let word = Self::step2(word);
        let word = Self::apply_rules(word, STEP3_RULES);
        let word = Self::step4(word);
        Self::step5(word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("filing"), "file");
        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
        assert_eq!(stemmer.stem("adjustment"), "adjust");
        assert_eq!(stemmer.stem("controll"), "control");
    }

    #[test]
    fn test_porter_step2_extensions() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("conditionally"), "condit");
        assert_eq!(stemmer.stem("geology"), "geolog");
        assert_eq!(stemmer.stem("theology"), "theolog");
        assert_eq!(stemmer.stem("archaeology"), "archaeolog");
        assert_eq!(stemmer.stem("hopefully"), "hope");
    }

    #[test]
    fn test_porter_short_and_irregular_words() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("dies"), "die");
        assert_eq!(stemmer.stem("died"), "die");
        assert_eq!(stemmer.stem("dying"), "die");
        assert_eq!(stemmer.stem("skies"), "sky");
        assert_eq!(stemmer.stem("Is"), "is");
        assert_eq!(stemmer.stem("a"), "a");
    }

    #[test]
    fn test_porter_leaves_non_words_alone() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("."), ".");
        assert_eq!(stemmer.stem("10:30"), "10:30");
        assert_eq!(stemmer.stem("n't"), "n't");
        assert_eq!(stemmer.stem("Café"), "café");
    }

    #[test]
    fn test_porter_measure() {
        assert_eq!(PorterStemmer::measure("tree"), 0);
        assert_eq!(PorterStemmer::measure("trees"), 1);
        assert_eq!(PorterStemmer::measure("trouble"), 1);
        assert_eq!(PorterStemmer::measure("troubles"), 2);
    }

    #[test]
    fn test_porter_consonant_detection() {
        let word = b"toy";
        assert!(PorterStemmer::is_consonant(word, 0)); // t
        assert!(!PorterStemmer::is_consonant(word, 1)); // o
        assert!(PorterStemmer::is_consonant(word, 2)); // y after a vowel

        let word = b"syzygy";
        assert!(!PorterStemmer::is_consonant(word, 1)); // y after a consonant
    }
}
