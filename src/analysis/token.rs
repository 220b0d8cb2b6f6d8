//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! the units every tokenizer produces and every tagger consumes.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, position and byte offsets
//! - [`TokenType`] - Classification of token content (word, number, punctuation, etc.)
//! - [`TokenMetadata`] - Additional metadata attached to tokens
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use text_analyzer::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 1, 6, 11).with_token_type(TokenType::Alphanum);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.token_type(), Some(TokenType::Alphanum));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Additional metadata that can be attached to tokens
    pub metadata: Option<TokenMetadata>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values, including decimals and times ("3.14", "10:30")
    Num,
    /// Clitic split off a word ("n't", "'s", "'ll")
    Contraction,
    /// Punctuation marks
    Punctuation,
    /// Currency and other symbols ("$", "%", "#")
    Symbol,
    /// Sub-word unit produced by a byte-pair encoder
    Subword,
    /// A whole sentence
    Sentence,
    /// Other/unknown token types
    Other,
}

/// Additional metadata that can be attached to tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token type classification
    pub token_type: Option<TokenType>,

    /// Whether the token is the first token of a sentence
    pub sentence_start: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            metadata: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            metadata: None,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type in metadata.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::new);
        metadata.token_type = Some(token_type);
        self
    }

    /// Mark the token as the first token of a sentence.
    pub fn with_sentence_start(mut self, sentence_start: bool) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::new);
        metadata.sentence_start = sentence_start;
        self
    }

    /// Token type recorded in the metadata, if any.
    pub fn token_type(&self) -> Option<TokenType> {
        self.metadata.as_ref().and_then(|m| m.token_type)
    }

    /// Whether the token starts a sentence.
    pub fn is_sentence_start(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| m.sentence_start)
    }

    /// Whether this token touches `next` with no gap between them.
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.end_offset == next.start_offset
    }
}

impl TokenType {
    /// Classify a token by its character content.
    pub fn detect(text: &str) -> TokenType {
        if text.is_empty() {
            return TokenType::Other;
        }

        if text.eq_ignore_ascii_case("n't") || text.eq_ignore_ascii_case("n\u{2019}t") {
            return TokenType::Contraction;
        }
        if let Some(rest) = text.strip_prefix(['\'', '\u{2019}'])
            && !rest.is_empty()
            && rest.chars().all(char::is_alphabetic)
        {
            return TokenType::Contraction;
        }

        if text.chars().next().is_some_and(|c| c.is_numeric())
            && text
                .chars()
                .all(|c| c.is_numeric() || matches!(c, '.' | ',' | ':'))
        {
            return TokenType::Num;
        }

        if text.chars().any(char::is_alphanumeric) {
            return TokenType::Alphanum;
        }

        if text
            .chars()
            .all(|c| matches!(c, '$' | '%' | '#' | '&' | '@' | '+' | '=' | '<' | '>' | '€' | '£' | '¥' | '°'))
        {
            return TokenType::Symbol;
        }

        if text
            .chars()
            .all(|c| c.is_ascii_punctuation() || is_unicode_punctuation(c))
        {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

/// Punctuation outside the ASCII range that tokenizers emit on its own.
fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{2013}' | '\u{2014}' | '\u{2026}'
            | '\u{00AB}' | '\u{00BB}' | '\u{00BF}' | '\u{00A1}'
    )
}

impl TokenMetadata {
    /// Create a new empty metadata object.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(token.metadata.is_none());
        assert!(!token.is_sentence_start());
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_token_metadata() {
        let token = Token::new("The", 0)
            .with_token_type(TokenType::Alphanum)
            .with_sentence_start(true);
        assert_eq!(token.token_type(), Some(TokenType::Alphanum));
        assert!(token.is_sentence_start());
    }

    #[test]
    fn test_detect_token_type() {
        assert_eq!(TokenType::detect("hello"), TokenType::Alphanum);
        assert_eq!(TokenType::detect("3.14"), TokenType::Num);
        assert_eq!(TokenType::detect("10:30"), TokenType::Num);
        assert_eq!(TokenType::detect("n't"), TokenType::Contraction);
        assert_eq!(TokenType::detect("'s"), TokenType::Contraction);
        assert_eq!(TokenType::detect("'"), TokenType::Punctuation);
        assert_eq!(TokenType::detect("."), TokenType::Punctuation);
        assert_eq!(TokenType::detect("$"), TokenType::Symbol);
        assert_eq!(TokenType::detect("東京"), TokenType::Alphanum);
    }

    #[test]
    fn test_adjacency() {
        let a = Token::with_offsets("U.S", 0, 0, 3);
        let b = Token::with_offsets(".", 1, 3, 4);
        let c = Token::with_offsets("x", 2, 5, 6);
        assert!(a.is_adjacent_to(&b));
        assert!(!b.is_adjacent_to(&c));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }
}
