//! Part-of-speech tagging and named entity recognition with BIO tags.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::Pipeline;
use crate::analysis::pos::PosTagger;
use crate::analysis::tokenizer::TreebankWordTokenizer;
use crate::error::Result;

/// A word and its Penn Treebank tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosRecord {
    pub token: String,
    pub pos: String,
}

/// Tag every word of `text` with its Penn Treebank part of speech.
///
/// # Examples
///
/// ```
/// use text_analyzer::taggers::pos_tagging;
///
/// let records = pos_tagging("Naruto trained hard").unwrap();
/// let tags: Vec<&str> = records.iter().map(|r| r.pos.as_str()).collect();
/// assert_eq!(tags, vec!["NNP", "VBD", "RB"]);
/// ```
pub fn pos_tagging(text: &str) -> Result<Vec<PosRecord>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tokens = TreebankWordTokenizer::new().split(text);
    let tagged = PosTagger::new().tag(text, &tokens)?;
    debug!("Tagged {} tokens", tokens.len());

    Ok(tokens
        .into_iter()
        .zip(tagged)
        .map(|(token, word)| PosRecord {
            token: token.text,
            pos: word.tag.to_string(),
        })
        .collect())
}

/// Entities as `(text, label)` and per-token BIO tags as `(token, tag)`.
pub type NerResult = (Vec<(String, String)>, Vec<(String, String)>);

/// Recognize named entities in `text` and tag every token in BIO form.
///
/// Entity text is sliced from `text`, so spacing inside a span is preserved.
///
/// # Examples
///
/// ```
/// use text_analyzer::taggers::ner_bio_tagging;
///
/// let (entities, bio) = ner_bio_tagging("Elon Musk founded SpaceX").unwrap();
/// assert_eq!(entities[0], ("Elon Musk".to_string(), "PERSON".to_string()));
/// assert_eq!(bio[1], ("Musk".to_string(), "I-PERSON".to_string()));
/// ```
pub fn ner_bio_tagging(text: &str) -> Result<NerResult> {
    if text.trim().is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let doc = Pipeline::shared().process(text)?;

    let entities: Vec<(String, String)> = doc
        .entity_spans()
        .map(|(span, label)| (span.to_string(), label.as_str().to_string()))
        .collect();
    let bio_tags: Vec<(String, String)> = doc
        .tokens
        .iter()
        .map(|token| (token.text.clone(), token.bio()))
        .collect();
    debug!("Found {} entities in {} tokens", entities.len(), bio_tags.len());

    Ok((entities, bio_tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_pos_tagging() {
        let records = pos_tagging("The Avengers assembled.").unwrap();
        assert_eq!(
            records,
            vec![
                PosRecord { token: "The".into(), pos: "DT".into() },
                PosRecord { token: "Avengers".into(), pos: "NNPS".into() },
                PosRecord { token: "assembled".into(), pos: "VBD".into() },
                PosRecord { token: ".".into(), pos: ".".into() },
            ]
        );
    }

    #[test]
    fn test_pos_tagging_blank() {
        assert!(pos_tagging("").unwrap().is_empty());
        assert!(pos_tagging(" \t").unwrap().is_empty());
    }

    #[test]
    fn test_ner_bio_tagging() {
        let (entities, bio) = ner_bio_tagging("Elon Musk founded SpaceX").unwrap();
        assert_eq!(entities, vec![pair("Elon Musk", "PERSON"), pair("SpaceX", "ORG")]);
        assert_eq!(
            bio,
            vec![
                pair("Elon", "B-PERSON"),
                pair("Musk", "I-PERSON"),
                pair("founded", "O"),
                pair("SpaceX", "B-ORG"),
            ]
        );
    }

    #[test]
    fn test_ner_bio_tags_are_well_formed() {
        let (_, bio) =
            ner_bio_tagging("In 2008, Apple paid $5 million to 3 people in Paris.").unwrap();
        for (_, tag) in &bio {
            assert!(tag == "O" || tag.starts_with("B-") || tag.starts_with("I-"), "{tag}");
        }
        assert!(bio.iter().any(|(_, tag)| tag == "B-MONEY"));
        assert!(bio.iter().any(|(_, tag)| tag == "B-GPE"));
    }

    #[test]
    fn test_ner_blank() {
        assert_eq!(ner_bio_tagging("   ").unwrap(), (Vec::new(), Vec::new()));
    }
}
