//! Text analysis components.
//!
//! Tokenizers split text into sentences, words and LLM sub-word units; the
//! stemmers, tagger, lemmatizer and entity recognizer work on the words. The
//! [`pipeline`] module ties the word-level components together.

pub mod lemmatizer;
pub mod ner;
pub mod pipeline;
pub mod pos;
pub mod stem;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use lemmatizer::Lemmatizer;
pub use ner::{Entity, EntityLabel, EntityRecognizer};
pub use pipeline::{Doc, DocToken, Pipeline};
pub use pos::{PosTagger, Reading, TaggedWord, UniversalTag};
pub use stem::{LancasterStemmer, PorterStemmer, SnowballStemmer, Stemmer};
pub use token::{Token, TokenStream, TokenType};
pub use tokenizer::{BpeTokenizer, SentenceTokenizer, Tokenizer, TreebankWordTokenizer};
