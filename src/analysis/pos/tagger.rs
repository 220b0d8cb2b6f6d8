//! Penn Treebank part-of-speech tagger backed by the `nlprule` English model.
//!
//! nlprule looks every word up in its dictionary and runs its disambiguation
//! rules, leaving each word with one or more readings (a Penn tag plus a
//! lemma). The tagger aligns those readings with the word tokens by byte span
//! and settles on one tag per token: fixed forms first, then capitalization,
//! then the tags already chosen to the left.
//!
//! # Examples
//!
//! ```
//! use text_analyzer::analysis::pos::PosTagger;
//! use text_analyzer::analysis::tokenizer::TreebankWordTokenizer;
//!
//! let text = "He wants to run.";
//! let tokens = TreebankWordTokenizer::new().split(text);
//! let tagged = PosTagger::new().tag(text, &tokens).unwrap();
//!
//! let tags: Vec<&str> = tagged.iter().map(|t| t.tag).collect();
//! assert_eq!(tags, vec!["PRP", "VBZ", "TO", "VB", "."]);
//! assert_eq!(tagged[1].lemma(), Some("want"));
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;
use log::{debug, trace};
use nlprule::Tokenizer as NlpTokenizer;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::treebank::is_sentence_final;
use crate::error::{Result, TextAnalyzerError};

static ENGLISH: LazyLock<std::result::Result<NlpTokenizer, String>> = LazyLock::new(|| {
    let mut bytes: &'static [u8] = include_bytes!(concat!(
        env!("OUT_DIR"),
        "/",
        nlprule::tokenizer_filename!("en")
    ));
    debug!("Loading nlprule English tokenizer ({} bytes)", bytes.len());
    NlpTokenizer::from_reader(&mut bytes).map_err(|e| e.to_string())
});

const PENN_TAGS: &[&str] = &[
    "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS", "NNP",
    "NNPS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB",
    "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB",
];

/// Fallback order when the context does not decide between readings.
const PRIORITY: &[&str] = &[
    "DT", "PRP", "PRP$", "IN", "CC", "MD", "WDT", "WP", "WP$", "WRB", "EX", "PDT", "POS", "RP",
    "UH", "TO", "NN", "NNS", "NNP", "NNPS", "JJ", "JJR", "JJS", "VBD", "VBZ", "VBP", "VB", "VBG",
    "VBN", "RB", "RBR", "RBS", "CD", "FW", "LS", "SYM",
];

const FINITE_TAGS: &[&str] = &["VBD", "VBZ", "VBP", "MD"];

/// Proper nouns ending in -s that are singular.
const SINGULAR_PROPER_S: &[&str] = &[
    "James", "Charles", "Jones", "Williams", "Adams", "Roberts", "Thomas", "Lewis", "Wales",
    "Athens", "Paris", "Texas", "Kansas", "Arkansas", "Illinois", "Brussels", "Marcus",
];

/// One dictionary reading of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub tag: &'static str,
    pub lemma: String,
}

/// A token's chosen Penn tag together with every reading it had.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedWord {
    pub tag: &'static str,
    pub readings: Vec<Reading>,
}

impl TaggedWord {
    /// Lemma of the reading behind the chosen tag, or of one in the same
    /// tag family (`VBD` for `VBN`).
    pub fn lemma(&self) -> Option<&str> {
        self.readings
            .iter()
            .find(|r| r.tag == self.tag)
            .or_else(|| {
                self.readings
                    .iter()
                    .find(|r| r.tag.get(..2) == self.tag.get(..2))
            })
            .map(|r| r.lemma.as_str())
    }
}

/// Penn Treebank tagger over nlprule readings.
#[derive(Clone, Debug, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new tagger.
    pub fn new() -> Self {
        PosTagger
    }

    /// Tag `tokens`, whose byte offsets point into `text`.
    pub fn tag(&self, text: &str, tokens: &[Token]) -> Result<Vec<TaggedWord>> {
        let mut spans = if tokens.is_empty() {
            AHashMap::new()
        } else {
            Self::readings_by_span(text)?
        };

        let mut tagged: Vec<TaggedWord> = Vec::with_capacity(tokens.len());
        let mut seen_finite = false;
        for (i, token) in tokens.iter().enumerate() {
            let sentence_start = i == 0
                || token.is_sentence_start()
                || is_sentence_final(&tokens[i - 1].text);
            if sentence_start {
                seen_finite = false;
            }

            let readings = spans
                .remove(&(token.start_offset, token.end_offset))
                .unwrap_or_default();
            let word = Self::choose(tokens, &tagged, i, readings, sentence_start, seen_finite);
            trace!("'{}' -> {} ({} readings)", token.text, word.tag, word.readings.len());

            seen_finite |= FINITE_TAGS.contains(&word.tag);
            tagged.push(word);
        }
        Ok(tagged)
    }

    fn english() -> Result<&'static NlpTokenizer> {
        ENGLISH
            .as_ref()
            .map_err(|e| TextAnalyzerError::analysis(format!("nlprule English tokenizer: {e}")))
    }

    /// nlprule readings keyed by the byte span of the word they belong to.
    fn readings_by_span(text: &str) -> Result<AHashMap<(usize, usize), Vec<Reading>>> {
        let mut spans = AHashMap::new();
        let mut cursor = 0;

        for sentence in Self::english()?.pipe(text) {
            for token in sentence.tokens() {
                let word = token.word().text().as_str();
                if word.is_empty() {
                    continue;
                }
                let Some(found) = text[cursor..].find(word) else {
                    continue;
                };
                let start = cursor + found;
                cursor = start + word.len();

                let mut readings: Vec<Reading> = Vec::new();
                for data in token.word().tags() {
                    let Some(tag) = penn_tag(data.pos().as_str()) else {
                        continue;
                    };
                    let lemma = match data.lemma().as_str() {
                        "" => word.to_lowercase(),
                        lemma => lemma.to_string(),
                    };
                    if !readings.iter().any(|r| r.tag == tag && r.lemma == lemma) {
                        readings.push(Reading { tag, lemma });
                    }
                }
                spans.insert((start, cursor), readings);
            }
        }
        Ok(spans)
    }

    fn choose(
        tokens: &[Token],
        tagged: &[TaggedWord],
        i: usize,
        readings: Vec<Reading>,
        sentence_start: bool,
        seen_finite: bool,
    ) -> TaggedWord {
        let word = tokens[i].text.as_str();

        if let Some(tag) = Self::punctuation_tag(tokens, i).or_else(|| Self::number_tag(word)) {
            return TaggedWord { tag, readings };
        }

        let lower = word.replace('\u{2019}', "'").to_lowercase();
        let next = tokens.get(i + 1).map(|t| t.text.replace('\u{2019}', "'").to_lowercase());
        if let Some((tag, lemma)) = Self::fixed_form(word, &lower, tokens, tagged, i, next.as_deref()) {
            return TaggedWord {
                tag,
                readings: vec![Reading { tag, lemma: lemma.to_string() }],
            };
        }

        if readings.is_empty() {
            return TaggedWord {
                tag: Self::guess(word, &lower),
                readings,
            };
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        let open_class = readings.iter().all(|r| is_open_class(r.tag));
        let proper = readings.iter().find(|r| matches!(r.tag, "NNP" | "NNPS")).map(|r| r.tag);

        if capitalized && !sentence_start {
            if let Some(tag) = proper {
                return TaggedWord { tag, readings };
            }
            if open_class {
                return TaggedWord {
                    tag: Self::proper_noun_tag(word),
                    readings,
                };
            }
        }

        let mut candidates: Vec<&'static str> = Vec::new();
        for r in &readings {
            if !candidates.contains(&r.tag) && (capitalized || !matches!(r.tag, "NNP" | "NNPS")) {
                candidates.push(r.tag);
            }
        }
        if candidates.is_empty() {
            candidates.extend(readings.iter().map(|r| r.tag));
        }

        let tag = match candidates.as_slice() {
            [only] => *only,
            _ => Self::by_context(tagged, &candidates, sentence_start, seen_finite),
        };
        TaggedWord { tag, readings }
    }

    /// Pick among several readings from the tags to the left.
    fn by_context(
        tagged: &[TaggedWord],
        candidates: &[&'static str],
        sentence_start: bool,
        seen_finite: bool,
    ) -> &'static str {
        let first_of = |options: &[&'static str]| options.iter().copied().find(|t| candidates.contains(t));
        let nouns = ["NN", "NNS", "NNP", "NNPS"];

        let prev = tagged.last();
        let prev_tag = prev.map(|t| t.tag);
        let core = tagged.iter().rev().find(|t| !t.tag.starts_with("RB"));
        let core_tag = core.map(|t| t.tag);
        let core_verb_lemma = core.filter(|t| t.tag.starts_with("VB")).and_then(TaggedWord::lemma);

        // Clause-initial -ing forms are gerunds.
        let choice = if sentence_start {
            first_of(&["VBG"])
        } else if matches!(core_tag, Some("MD" | "TO")) || core_verb_lemma == Some("do") {
            first_of(&["VB"])
        } else if core_verb_lemma == Some("have") {
            first_of(&["VBN"])
        } else if core_verb_lemma == Some("be") {
            first_of(&["VBG", "VBN", "JJ"])
        } else {
            None
        };
        if let Some(tag) = choice {
            return tag;
        }

        let choice = match prev_tag {
            Some(t) if matches!(t, "DT" | "PRP$" | "POS" | "CD" | "PDT" | "WP$") || t.starts_with("JJ") => {
                first_of(&nouns).or_else(|| first_of(&["JJ", "JJR", "JJS"]))
            }
            _ if matches!(core_tag, Some("PRP" | "WP" | "EX"))
                || (prev_tag.is_some_and(|t| nouns.contains(&t)) && !seen_finite) =>
            {
                first_of(&["VBD", "VBZ", "VBP"])
            }
            Some(t) if t.starts_with("VB") && prev.and_then(TaggedWord::lemma) != Some("be") => {
                first_of(&["RB"])
            }
            Some("IN") => first_of(&nouns).or_else(|| first_of(&["VBG"])),
            _ => None,
        };

        choice
            .or_else(|| first_of(PRIORITY))
            .unwrap_or(candidates[0])
    }

    fn punctuation_tag(tokens: &[Token], i: usize) -> Option<&'static str> {
        let word = tokens[i].text.as_str();
        let opening = i == 0 || !tokens[i - 1].is_adjacent_to(&tokens[i]);

        let tag = match word {
            "." | "!" | "?" => ".",
            "," => ",",
            ":" | ";" | "-" | "--" | "..." | "\u{2026}" | "\u{2013}" | "\u{2014}" => ":",
            "(" | "[" | "{" => "(",
            ")" | "]" | "}" => ")",
            "$" | "\u{20AC}" | "\u{00A3}" | "\u{00A5}" => "$",
            "#" => "#",
            "%" => "NN",
            "&" => "CC",
            "\u{201C}" | "\u{2018}" | "``" => "``",
            "\u{201D}" | "''" => "''",
            "\"" => {
                if opening {
                    "``"
                } else {
                    "''"
                }
            }
            "'" | "\u{2019}" => {
                let possessive = !opening && tokens[i - 1].text.ends_with('s');
                if possessive {
                    "POS"
                } else if opening {
                    "``"
                } else {
                    "''"
                }
            }
            _ if word.chars().all(|c| matches!(c, '!' | '?')) => ".",
            _ if word.chars().all(|c| !c.is_alphanumeric()) && !word.starts_with('\'') => "SYM",
            _ => return None,
        };
        Some(tag)
    }

    /// `CD` for numerals, `JJ` for "1st" and "22nd".
    fn number_tag(word: &str) -> Option<&'static str> {
        if !word.chars().next()?.is_ascii_digit() {
            return None;
        }
        let ordinal = ["st", "nd", "rd", "th"].iter().any(|s| {
            word.to_lowercase()
                .strip_suffix(s)
                .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        });
        Some(if ordinal { "JJ" } else { "CD" })
    }

    /// Pronoun "I", infinitival "to" and clitics, with their lemma.
    fn fixed_form(
        word: &str,
        lower: &str,
        tokens: &[Token],
        tagged: &[TaggedWord],
        i: usize,
        next: Option<&str>,
    ) -> Option<(&'static str, &'static str)> {
        let prev = i.checked_sub(1).map(|j| tokens[j].text.to_lowercase());
        let form = match lower {
            _ if word == "I" => ("PRP", "I"),
            "to" => ("TO", "to"),
            "n't" => ("RB", "not"),
            "'re" | "'m" => ("VBP", "be"),
            "'ve" => ("VBP", "have"),
            "'ll" => ("MD", "will"),
            "'d" => ("MD", "would"),
            "ca" if next == Some("n't") => ("MD", "can"),
            "wo" if next == Some("n't") => ("MD", "will"),
            "'s" => {
                let subject = tagged
                    .last()
                    .is_some_and(|t| matches!(t.tag, "PRP" | "EX" | "WP" | "WDT"))
                    || matches!(
                        prev.as_deref(),
                        Some("that" | "there" | "here" | "what" | "where" | "how" | "it" | "who")
                    );
                if prev.as_deref() == Some("let") {
                    ("PRP", "us")
                } else if subject {
                    ("VBZ", "be")
                } else {
                    ("POS", "'s")
                }
            }
            _ => return None,
        };
        Some(form)
    }

    /// Tag for a word nlprule has no reading for.
    fn guess(word: &str, lower: &str) -> &'static str {
        if word.chars().next().is_some_and(char::is_uppercase) {
            return Self::proper_noun_tag(word);
        }
        let len = lower.chars().count();
        if len > 4 && lower.ends_with("ing") {
            "VBG"
        } else if len > 3 && lower.ends_with("ed") {
            "VBD"
        } else if len > 3 && lower.ends_with("ly") {
            "RB"
        } else if len > 2 && lower.ends_with('s') && !lower.ends_with("ss") {
            "NNS"
        } else {
            "NN"
        }
    }

    fn proper_noun_tag(word: &str) -> &'static str {
        let plural = word.chars().count() > 4
            && word.ends_with('s')
            && !["ss", "us", "is", "as", "os"].iter().any(|s| word.ends_with(s))
            && !word.chars().skip(1).any(char::is_uppercase)
            && !SINGULAR_PROPER_S.contains(&word);
        if plural { "NNPS" } else { "NNP" }
    }
}

/// The Penn tag of an nlprule part-of-speech string (`"NN:UN"` is `NN`);
/// `None` for its sentence markers and punctuation classes.
fn penn_tag(pos: &str) -> Option<&'static str> {
    let base = pos.split(':').next().unwrap_or(pos);
    PENN_TAGS.iter().copied().find(|t| *t == base)
}

fn is_open_class(tag: &str) -> bool {
    ["NN", "JJ", "VB", "RB"].iter().any(|p| tag.starts_with(p)) && tag != "WRB"
}
