//! Stemming and lemmatization.
//!
//! # Examples
//!
//! ```
//! use text_analyzer::normalizers::{lem_text, stem_text};
//!
//! let stems = stem_text("running").unwrap();
//! assert_eq!(stems[0].porter, "run");
//!
//! let lemmas = lem_text("fighting").unwrap();
//! assert_eq!(lemmas[0].lemma, "fight");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::Pipeline;
use crate::analysis::pos::UniversalTag;
use crate::analysis::stem::{LancasterStemmer, PorterStemmer, SnowballStemmer, Stemmer};
use crate::analysis::tokenizer::TreebankWordTokenizer;
use crate::error::Result;

/// A word and its stem under each algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRecord {
    pub original: String,
    pub porter: String,
    pub snowball: String,
    pub lancaster: String,
}

/// A word, its lemma and its coarse part of speech.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub original: String,
    pub lemma: String,
    pub pos: UniversalTag,
}

/// Stem every word of `text` with the Porter, Snowball and Lancaster stemmers.
pub fn stem_text(text: &str) -> Result<Vec<StemRecord>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let words = TreebankWordTokenizer::new().words(text);
    let porter = PorterStemmer::new();
    let snowball = SnowballStemmer::english();
    let lancaster = LancasterStemmer::new();
    debug!(
        "Stemming {} words with {}, {} and {}",
        words.len(),
        porter.name(),
        snowball.name(),
        lancaster.name()
    );

    Ok(words
        .into_iter()
        .map(|word| StemRecord {
            porter: porter.stem(&word),
            snowball: snowball.stem(&word),
            lancaster: lancaster.stem(&word),
            original: word,
        })
        .collect())
}

/// Lemmatize every word of `text`.
pub fn lem_text(text: &str) -> Result<Vec<LemmaRecord>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc = Pipeline::shared().process(text)?;
    debug!("Lemmatized {} tokens", doc.tokens.len());

    Ok(doc
        .tokens
        .into_iter()
        .map(|token| LemmaRecord {
            original: token.text,
            lemma: token.lemma,
            pos: token.pos,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_text() {
        let records = stem_text("Running flies.").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            StemRecord {
                original: "Running".into(),
                porter: "run".into(),
                snowball: "run".into(),
                lancaster: "run".into(),
            }
        );
        assert_eq!(records[1].porter, "fli");
        assert_eq!(records[1].snowball, "fli");
        assert_eq!(records[2].original, ".");
        assert_eq!(records[2].porter, ".");
    }

    #[test]
    fn test_lem_text() {
        let records = lem_text("The Avengers were fighting").unwrap();
        let lemmas: Vec<&str> = records.iter().map(|r| r.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["the", "Avengers", "be", "fight"]);
        let pos: Vec<UniversalTag> = records.iter().map(|r| r.pos).collect();
        assert_eq!(
            pos,
            vec![UniversalTag::Det, UniversalTag::Propn, UniversalTag::Aux, UniversalTag::Verb]
        );
    }

    #[test]
    fn test_lemma_record_serializes_pos_upper_case() {
        let records = lem_text("fighting").unwrap();
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["original"], "fighting");
        assert_eq!(json["lemma"], "fight");
        assert_eq!(json["pos"], "VERB");
    }

    #[test]
    fn test_blank_input() {
        assert!(stem_text("").unwrap().is_empty());
        assert!(lem_text("\n").unwrap().is_empty());
    }
}
