//! Tokenizer implementations for text analysis.

use std::sync::LazyLock;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod bpe;
pub mod sentence;
pub mod treebank;

// Re-export all tokenizers for convenient access
pub use bpe::BpeTokenizer;
pub use sentence::SentenceTokenizer;
pub use treebank::TreebankWordTokenizer;

/// Abbreviations whose trailing period neither ends a sentence nor splits off.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "gen", "gov", "sen", "rep",
    "rev", "lt", "sgt", "capt", "cmdr", "inc", "ltd", "co", "corp", "llc", "bros", "vs", "etc",
    "approx", "dept", "fig", "vol", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec",
];

static ABBREVIATION_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

/// Whether `word` (without its trailing period) is a known abbreviation.
///
/// Dotted initialisms such as "U.S" or "e.g" also count.
pub fn is_abbreviation(word: &str) -> bool {
    if ABBREVIATION_SET.contains(word.to_lowercase().as_str()) {
        return true;
    }

    let mut chars = word.chars();
    let mut letters = 0;
    loop {
        match chars.next() {
            Some(c) if c.is_alphabetic() => letters += 1,
            _ => return false,
        }
        match chars.next() {
            Some('.') => continue,
            None => return letters > 1,
            Some(_) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_abbreviation() {
        assert!(is_abbreviation("Mr"));
        assert!(is_abbreviation("dr"));
        assert!(is_abbreviation("U.S"));
        assert!(is_abbreviation("e.g"));
        assert!(!is_abbreviation("U"));
        assert!(!is_abbreviation("world"));
        assert!(!is_abbreviation("U.Sa"));
        assert!(!is_abbreviation(""));
    }
}
