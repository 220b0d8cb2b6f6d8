//! Sentence tokenizer.
//!
//! Uses the Unicode sentence boundary rules (UAX #29) and then re-joins
//! fragments that were split after an abbreviation ("Mr. Smith", "e.g. this"),
//! which the Unicode rules alone break on.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::{Tokenizer, is_abbreviation};
use crate::error::Result;

/// A tokenizer that emits one token per sentence.
///
/// Sentence tokens are trimmed of surrounding whitespace; their offsets point
/// at the trimmed text in the input.
///
/// # Examples
///
/// ```
/// use text_analyzer::analysis::tokenizer::sentence::SentenceTokenizer;
///
/// let sentences = SentenceTokenizer::new().sentences("Hello world. How are you?");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }

    /// Split `text` into sentence strings.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.split(text).into_iter().map(|t| t.text).collect()
    }

    /// Split `text` into sentence tokens with offsets.
    pub fn split(&self, text: &str) -> Vec<Token> {
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for (offset, segment) in text.split_sentence_bound_indices() {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + (segment.len() - segment.trim_start().len());
            let end = start + trimmed.len();

            if let Some(last) = spans.last_mut()
                && ends_with_abbreviation(&text[last.0..last.1])
            {
                last.1 = end;
                continue;
            }
            spans.push((start, end));
        }

        spans
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                Token::with_offsets(&text[start..end], position, start, end)
                    .with_token_type(TokenType::Sentence)
                    .with_sentence_start(true)
            })
            .collect()
    }
}

/// Whether the sentence's last word is an abbreviation followed by its period.
fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(last_word) = sentence.split_whitespace().last() else {
        return false;
    };
    let Some(stem) = last_word.strip_suffix('.') else {
        return false;
    };
    let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());

    // A lone initial ("J. K. Rowling") also continues the sentence.
    let single_initial = stem.chars().count() == 1 && stem.chars().all(char::is_uppercase);

    single_initial || is_abbreviation(stem)
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.split(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}
