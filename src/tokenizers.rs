//! Sentence, word and LLM sub-word tokenization of a text.
//!
//! # Examples
//!
//! ```
//! use text_analyzer::tokenizers::tokenize_text;
//!
//! let result = tokenize_text("Hello world. How are you?").unwrap();
//! assert_eq!(result.sentence_count, 2);
//! assert!(result.words.contains(&"Hello".to_string()));
//! assert!(result.llm_token_count > 0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{BpeTokenizer, SentenceTokenizer, TreebankWordTokenizer};
use crate::config::AnalyzerConfig;
use crate::error::Result;

/// Everything [`tokenize_text`] learns about a text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizationResult {
    pub sentences: Vec<String>,
    pub sentence_count: usize,
    pub words: Vec<String>,
    pub word_count: usize,
    /// Sub-word units of the configured LLM's byte-pair encoding.
    pub llm_tokens: Vec<String>,
    pub llm_token_count: usize,
    /// Cost of the LLM tokens in US dollars.
    pub estimated_cost: f64,
}

/// Tokenize `text` with the default configuration.
pub fn tokenize_text(text: &str) -> Result<TokenizationResult> {
    tokenize_text_with(text, &AnalyzerConfig::default())
}

/// Tokenize `text`, counting LLM tokens and cost as `config` says.
///
/// Blank input yields an all-empty result without touching any tokenizer.
pub fn tokenize_text_with(text: &str, config: &AnalyzerConfig) -> Result<TokenizationResult> {
    if text.trim().is_empty() {
        return Ok(TokenizationResult::default());
    }

    let sentences = SentenceTokenizer::new().sentences(text);
    let words = TreebankWordTokenizer::new().words(text);

    let bpe = BpeTokenizer::for_model(&config.llm_model)?;
    let llm_tokens = bpe.pieces(text);
    let llm_token_count = llm_tokens.len();

    debug!(
        "Tokenized {} sentences, {} words, {} {} tokens",
        sentences.len(),
        words.len(),
        llm_token_count,
        bpe.model()
    );

    Ok(TokenizationResult {
        sentence_count: sentences.len(),
        sentences,
        word_count: words.len(),
        words,
        llm_tokens,
        llm_token_count,
        estimated_cost: config.estimate_cost(llm_token_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextAnalyzerError;

    #[test]
    fn test_tokenize_sentences_and_words() {
        let result = tokenize_text("Hello world. How are you?").unwrap();
        assert_eq!(result.sentence_count, 2);
        assert_eq!(result.sentences, vec!["Hello world.", "How are you?"]);
        assert_eq!(
            result.words,
            vec!["Hello", "world", ".", "How", "are", "you", "?"]
        );
        assert_eq!(result.word_count, 7);
        assert_eq!(result.llm_tokens.concat(), "Hello world. How are you?");
        assert_eq!(result.llm_token_count, result.llm_tokens.len());
    }

    #[test]
    fn test_estimated_cost_follows_count() {
        let result = tokenize_text("Tokenization").unwrap();
        assert!(result.llm_token_count > 0);
        let expected = AnalyzerConfig::default().estimate_cost(result.llm_token_count);
        assert_eq!(result.estimated_cost, expected);

        let free = AnalyzerConfig::default().with_cost_per_token(0.0);
        assert_eq!(tokenize_text_with("Tokenization", &free).unwrap().estimated_cost, 0.0);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(tokenize_text("").unwrap(), TokenizationResult::default());
        assert_eq!(tokenize_text("  \n\t ").unwrap(), TokenizationResult::default());

        // the model is never loaded for blank input
        let bogus = AnalyzerConfig::default().with_llm_model("no-such-model");
        assert_eq!(tokenize_text_with(" ", &bogus).unwrap().llm_token_count, 0);
    }

    #[test]
    fn test_unknown_model() {
        let bogus = AnalyzerConfig::default().with_llm_model("no-such-model");
        let result = tokenize_text_with("Hello", &bogus);
        assert!(matches!(result, Err(TextAnalyzerError::Tokenizer(_))));
    }
}
