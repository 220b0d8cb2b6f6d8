//! # text-analyzer
//!
//! Tokenization, part-of-speech tagging, named entity recognition, stemming
//! and lemmatization of English text, usable as a library or from the
//! `text-analyzer` command.
//!
//! ## Features
//!
//! - Sentence, Penn Treebank word and LLM byte-pair tokenization with cost estimates
//! - Penn Treebank POS tags and Universal Dependencies coarse tags
//! - OntoNotes named entities with per-token BIO tags
//! - Porter, Snowball and Lancaster stemmers
//! - POS-aware lemmatization
//!
//! ## Example
//!
//! ```
//! use text_analyzer::taggers::ner_bio_tagging;
//!
//! let (entities, bio) = ner_bio_tagging("Elon Musk founded SpaceX").unwrap();
//! assert_eq!(entities.len(), 2);
//! assert_eq!(bio[0].1, "B-PERSON");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod normalizers;
pub mod taggers;
pub mod tokenizers;

pub mod prelude {
    pub use crate::config::AnalyzerConfig;
    pub use crate::error::{Result, TextAnalyzerError};
    pub use crate::normalizers::{LemmaRecord, StemRecord, lem_text, stem_text};
    pub use crate::taggers::{PosRecord, ner_bio_tagging, pos_tagging};
    pub use crate::tokenizers::{TokenizationResult, tokenize_text, tokenize_text_with};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
