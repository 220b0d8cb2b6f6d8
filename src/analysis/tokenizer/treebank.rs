//! Penn Treebank style word tokenizer.
//!
//! Splits text on Unicode word boundaries (UAX #29) and then applies the
//! Treebank conventions on top:
//!
//! - punctuation and symbols are kept as separate tokens
//! - clitics are split off: "don't" → "do" + "n't", "SpaceX's" → "SpaceX" + "'s"
//! - hyphenated compounds, clock times, dotted initialisms, known abbreviations
//!   and ellipses stay single tokens
//!
//! # Examples
//!
//! ```
//! use text_analyzer::analysis::tokenizer::Tokenizer;
//! use text_analyzer::analysis::tokenizer::treebank::TreebankWordTokenizer;
//!
//! let tokenizer = TreebankWordTokenizer::new();
//! let words: Vec<String> = tokenizer
//!     .tokenize("Mr. Smith doesn't work.")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["Mr.", "Smith", "does", "n't", "work", "."]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::{Tokenizer, is_abbreviation};
use crate::error::Result;

/// Clitic suffixes split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// A word tokenizer following Penn Treebank conventions.
#[derive(Clone, Debug, Default)]
pub struct TreebankWordTokenizer;

/// A piece of the input before the merge pass.
#[derive(Debug)]
struct Piece {
    start: usize,
    end: usize,
}

impl TreebankWordTokenizer {
    /// Create a new Treebank word tokenizer.
    pub fn new() -> Self {
        TreebankWordTokenizer
    }

    /// Tokenize `text` and return only the token strings.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.split(text).into_iter().map(|t| t.text).collect()
    }

    /// Split `text` into tokens with offsets, types and sentence-start flags.
    pub fn split(&self, text: &str) -> Vec<Token> {
        let mut pieces = Vec::new();
        for (offset, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            Self::split_clitic(segment, offset, &mut pieces);
        }

        let pieces = Self::merge(text, pieces);

        let mut tokens = Vec::with_capacity(pieces.len());
        let mut sentence_start = true;
        for (position, piece) in pieces.into_iter().enumerate() {
            let word = &text[piece.start..piece.end];
            let token = Token::with_offsets(word, position, piece.start, piece.end)
                .with_token_type(TokenType::detect(word))
                .with_sentence_start(sentence_start);
            sentence_start = is_sentence_final(word);
            tokens.push(token);
        }
        tokens
    }

    /// Push `segment` as one or two pieces, splitting a trailing clitic.
    fn split_clitic(segment: &str, offset: usize, pieces: &mut Vec<Piece>) {
        let normalized = segment.replace('\u{2019}', "'").to_lowercase();
        for clitic in CLITICS {
            if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
                // The curly apostrophe is 3 bytes, so measure the clitic in chars.
                let clitic_chars = clitic.chars().count();
                let split_at = segment
                    .char_indices()
                    .rev()
                    .nth(clitic_chars - 1)
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                if split_at == 0 {
                    break;
                }
                pieces.push(Piece {
                    start: offset,
                    end: offset + split_at,
                });
                pieces.push(Piece {
                    start: offset + split_at,
                    end: offset + segment.len(),
                });
                return;
            }
        }
        pieces.push(Piece {
            start: offset,
            end: offset + segment.len(),
        });
    }

    /// Re-join pieces that Treebank conventions keep together.
    fn merge(text: &str, pieces: Vec<Piece>) -> Vec<Piece> {
        let mut merged: Vec<Piece> = Vec::with_capacity(pieces.len());
        let mut iter = pieces.into_iter().peekable();

        while let Some(piece) = iter.next() {
            let current = &text[piece.start..piece.end];

            if let Some(last) = merged.last_mut()
                && last.end == piece.start
            {
                let previous = &text[last.start..last.end];
                let next_adjacent_word = iter.peek().is_some_and(|next| {
                    next.start == piece.end && starts_alphanumeric(&text[next.start..next.end])
                });

                // state-of-the-art, 10:30
                let joins_compound = ((current == "-" && ends_alphanumeric(previous))
                    || (current == ":" && ends_numeric(previous)))
                    && next_adjacent_word;
                if joins_compound {
                    if let Some(next) = iter.next() {
                        last.end = next.end;
                    }
                    continue;
                }

                // U.S., Mr., ...
                if current == "." && is_abbreviation(previous) {
                    last.end = piece.end;
                    continue;
                }

                // "..." and "--"
                if (current == "." || current == "-") && previous.chars().all(|c| current.starts_with(c)) {
                    last.end = piece.end;
                    continue;
                }
            }

            merged.push(piece);
        }

        merged
    }
}

fn starts_alphanumeric(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_alphanumeric)
}

fn ends_alphanumeric(s: &str) -> bool {
    s.chars().last().is_some_and(char::is_alphanumeric)
}

fn ends_numeric(s: &str) -> bool {
    s.chars().last().is_some_and(|c| c.is_ascii_digit())
}

/// Whether a token ends the sentence it belongs to.
pub(crate) fn is_sentence_final(word: &str) -> bool {
    matches!(word, "." | "!" | "?" | "..." | "\u{2026}")
        || (word.len() > 1 && word.chars().all(|c| matches!(c, '!' | '?')))
}

impl Tokenizer for TreebankWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.split(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        TreebankWordTokenizer::new().words(text)
    }

    #[test]
    fn test_basic_words_and_punctuation() {
        assert_eq!(words("Hello world"), vec!["Hello", "world"]);
        assert_eq!(
            words("Hello, world! How are you?"),
            vec!["Hello", ",", "world", "!", "How", "are", "you", "?"]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(words("I can't go"), vec!["I", "ca", "n't", "go"]);
        assert_eq!(words("don't"), vec!["do", "n't"]);
        assert_eq!(words("it's we're I'm"), vec!["it", "'s", "we", "'re", "I", "'m"]);
        assert_eq!(words("SpaceX's rocket"), vec!["SpaceX", "'s", "rocket"]);
        assert_eq!(words("won\u{2019}t"), vec!["wo", "n\u{2019}t"]);
    }

    #[test]
    fn test_merged_tokens() {
        assert_eq!(words("state-of-the-art design"), vec!["state-of-the-art", "design"]);
        assert_eq!(words("at 10:30 today"), vec!["at", "10:30", "today"]);
        assert_eq!(words("the U.S. economy"), vec!["the", "U.S.", "economy"]);
        assert_eq!(words("Dr. Who"), vec!["Dr.", "Who"]);
        assert_eq!(words("wait..."), vec!["wait", "..."]);
    }

    #[test]
    fn test_numbers_and_symbols() {
        assert_eq!(words("$5.00 or 50%"), vec!["$", "5.00", "or", "50", "%"]);
        assert_eq!(words("1,000 people"), vec!["1,000", "people"]);
    }

    #[test]
    fn test_offsets_and_sentence_starts() {
        let tokens = TreebankWordTokenizer::new().split("Hi there. Bye now!");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[1].text, "there");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (3, 8));
        assert!(tokens[0].is_sentence_start());
        assert!(!tokens[1].is_sentence_start());
        assert!(tokens[3].is_sentence_start());
        assert_eq!(tokens[3].text, "Bye");
        assert_eq!(tokens[5].position, 5);
    }

    #[test]
    fn test_blank_input() {
        assert!(words("").is_empty());
        assert!(words("   \n\t").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(TreebankWordTokenizer::new().name(), "treebank");
    }
}
