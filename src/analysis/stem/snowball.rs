//! Snowball (Porter2) stemmer backed by `rust-stemmers`.

use rust_stemmers::Algorithm;

use crate::analysis::stem::Stemmer;

/// Snowball stemmer for a single language.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("inner", &"<snowball>")
            .finish()
    }
}

impl SnowballStemmer {
    /// Create a Snowball stemmer for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        SnowballStemmer {
            inner: rust_stemmers::Stemmer::create(algorithm),
        }
    }

    /// Create the English Snowball stemmer.
    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowball_english() {
        let stemmer = SnowballStemmer::english();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("generously"), "generous");
        assert_eq!(stemmer.stem("Founded"), "found");
    }

    #[test]
    fn test_snowball_punctuation_passes_through() {
        let stemmer = SnowballStemmer::default();
        assert_eq!(stemmer.stem("."), ".");
        assert_eq!(stemmer.name(), "snowball");
    }
}
