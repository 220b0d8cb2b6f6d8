//! Shared analysis pipeline.
//!
//! A [`Pipeline`] runs a word tokenizer, the part-of-speech tagger, the
//! lemmatizer and the entity recognizer over a text and returns a [`Doc`]
//! holding one [`DocToken`] per word plus the recognized entity spans.
//!
//! # Examples
//!
//! ```
//! use text_analyzer::analysis::pipeline::Pipeline;
//!
//! let doc = Pipeline::shared().process("Elon Musk founded SpaceX").unwrap();
//!
//! let lemmas: Vec<&str> = doc.tokens.iter().map(|t| t.lemma.as_str()).collect();
//! assert_eq!(lemmas, vec!["Elon", "Musk", "found", "SpaceX"]);
//!
//! let entities: Vec<(&str, &str)> = doc.entity_spans().map(|(text, label)| (text, label.as_str())).collect();
//! assert_eq!(entities, vec![("Elon Musk", "PERSON"), ("SpaceX", "ORG")]);
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::ner::{Entity, EntityLabel, EntityRecognizer, Iob};
use crate::analysis::pos::{PosTagger, UniversalTag, universal_tags};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, TreebankWordTokenizer};
use crate::error::Result;

static SHARED: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::new(Arc::new(TreebankWordTokenizer::new())));

/// A word with everything the pipeline learned about it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocToken {
    /// The token text as it appears in the input.
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Penn Treebank tag.
    pub tag: String,
    /// Coarse universal tag.
    pub pos: UniversalTag,
    pub lemma: String,
    pub ent_iob: Iob,
    pub ent_type: Option<EntityLabel>,
}

impl DocToken {
    /// BIO tag such as `"B-PERSON"`, or `"O"` outside entities.
    pub fn bio(&self) -> String {
        match (self.ent_iob, self.ent_type) {
            (Iob::O, _) | (_, None) => "O".to_string(),
            (iob, Some(label)) => format!("{}-{}", iob.as_str(), label.as_str()),
        }
    }
}

/// The result of running the pipeline over a text.
#[derive(Clone, Debug, PartialEq)]
pub struct Doc {
    pub text: String,
    pub tokens: Vec<DocToken>,
    pub entities: Vec<Entity>,
}

impl Doc {
    /// Entity spans in text order, each with its source text.
    ///
    /// The text is sliced from the input, so spacing inside a span is kept.
    pub fn entity_spans(&self) -> impl Iterator<Item = (&str, EntityLabel)> + '_ {
        self.entities.iter().map(|entity| {
            let start = self.tokens[entity.start].start_offset;
            let end = self.tokens[entity.end - 1].end_offset;
            (&self.text[start..end], entity.label)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizer, tagger, lemmatizer and recognizer run in sequence.
#[derive(Clone)]
pub struct Pipeline {
    tokenizer: Arc<dyn Tokenizer>,
    tagger: PosTagger,
    lemmatizer: Lemmatizer,
    recognizer: EntityRecognizer,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("tokenizer", &self.tokenizer.name())
            .field("tagger", &self.tagger)
            .field("lemmatizer", &self.lemmatizer)
            .field("recognizer", &self.recognizer)
            .finish()
    }
}

impl Pipeline {
    /// Create a pipeline around the given word tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Pipeline {
            tokenizer,
            tagger: PosTagger::new(),
            lemmatizer: Lemmatizer::new(),
            recognizer: EntityRecognizer::new(),
        }
    }

    /// The process-wide pipeline, built on first use.
    pub fn shared() -> &'static Pipeline {
        &SHARED
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Run every stage over `text`.
    pub fn process(&self, text: &str) -> Result<Doc> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();

        let tagged = self.tagger.tag(text, &tokens)?;
        let tags: Vec<&'static str> = tagged.iter().map(|t| t.tag).collect();
        let bases: Vec<String> = tokens
            .iter()
            .zip(&tagged)
            .map(|(token, word)| word.lemma().unwrap_or(token.text.as_str()).to_lowercase())
            .collect();
        let universal = universal_tags(&bases, &tags);

        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let entities = self.recognizer.recognize(&words, &tags);

        let mut iob = vec![(Iob::O, None); tokens.len()];
        for entity in &entities {
            for (offset, slot) in iob[entity.start..entity.end].iter_mut().enumerate() {
                let position = if offset == 0 { Iob::B } else { Iob::I };
                *slot = (position, Some(entity.label));
            }
        }

        let doc_tokens: Vec<DocToken> = tokens
            .into_iter()
            .zip(tagged)
            .zip(universal)
            .zip(iob)
            .map(|(((token, word), pos), (ent_iob, ent_type))| DocToken {
                lemma: self.lemmatizer.lemmatize(&token.text, &word, pos),
                text: token.text,
                start_offset: token.start_offset,
                end_offset: token.end_offset,
                tag: word.tag.to_string(),
                pos,
                ent_iob,
                ent_type,
            })
            .collect();
        trace!(
            "Processed {} tokens, {} entities with {}",
            doc_tokens.len(),
            entities.len(),
            self.tokenizer.name()
        );

        Ok(Doc {
            text: text.to_string(),
            tokens: doc_tokens,
            entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_elon_musk() {
        let doc = Pipeline::shared().process("Elon Musk founded SpaceX").unwrap();

        let bio: Vec<String> = doc.tokens.iter().map(|t| t.bio()).collect();
        assert_eq!(bio, vec!["B-PERSON", "I-PERSON", "O", "B-ORG"]);

        let tags: Vec<&str> = doc.tokens.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["NNP", "NNP", "VBD", "NNP"]);
        assert_eq!(doc.tokens[2].pos, UniversalTag::Verb);
    }

    #[test]
    fn test_entity_text_keeps_spacing() {
        let doc = Pipeline::shared().process("I met Elon   Musk today.").unwrap();
        let spans: Vec<(&str, EntityLabel)> = doc.entity_spans().collect();
        assert_eq!(
            spans,
            vec![("Elon   Musk", EntityLabel::Person), ("today", EntityLabel::Date)]
        );
    }

    #[test]
    fn test_lemmas_and_offsets() {
        let doc = Pipeline::shared().process("The kids were running").unwrap();
        let lemmas: Vec<&str> = doc.tokens.iter().map(|t| t.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["the", "kid", "be", "run"]);
        assert_eq!(doc.tokens[1].start_offset, 4);
        assert_eq!(doc.tokens[1].end_offset, 8);
    }

    #[test]
    fn test_empty_text() {
        let doc = Pipeline::shared().process("").unwrap();
        assert!(doc.is_empty());
        assert!(doc.entities.is_empty());
        assert_eq!(doc.entity_spans().count(), 0);
    }

    #[test]
    fn test_debug_names_tokenizer() {
        let debug = format!("{:?}", Pipeline::shared());
        assert!(debug.contains("treebank"));
    }
}
