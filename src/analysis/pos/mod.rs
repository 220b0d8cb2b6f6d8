//! Part-of-speech tagging.
//!
//! [`PosTagger`] assigns fine-grained Penn Treebank tags; [`universal_tags`]
//! collapses them to the coarse Universal Dependencies categories used by the
//! lemmatizer and in lemma output.

pub mod tagger;

pub use tagger::{PosTagger, Reading, TaggedWord};

use serde::{Deserialize, Serialize};

/// Words tagged `IN` that introduce a clause.
const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "whereas", "unless", "whether", "if", "while", "whilst",
    "that", "since",
];

/// Coarse Universal Dependencies part-of-speech category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UniversalTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl UniversalTag {
    /// The upper-case label, e.g. `"NOUN"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            UniversalTag::Adj => "ADJ",
            UniversalTag::Adp => "ADP",
            UniversalTag::Adv => "ADV",
            UniversalTag::Aux => "AUX",
            UniversalTag::Cconj => "CCONJ",
            UniversalTag::Det => "DET",
            UniversalTag::Intj => "INTJ",
            UniversalTag::Noun => "NOUN",
            UniversalTag::Num => "NUM",
            UniversalTag::Part => "PART",
            UniversalTag::Pron => "PRON",
            UniversalTag::Propn => "PROPN",
            UniversalTag::Punct => "PUNCT",
            UniversalTag::Sconj => "SCONJ",
            UniversalTag::Sym => "SYM",
            UniversalTag::Verb => "VERB",
            UniversalTag::X => "X",
        }
    }
}

impl std::fmt::Display for UniversalTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map Penn Treebank tags to universal tags.
///
/// `bases` are the lowercase base forms aligned with `tags`. Forms of be and
/// modals are always auxiliaries; have and do are auxiliaries only when a verb
/// follows (skipping adverbs and an inverted subject).
pub fn universal_tags(bases: &[String], tags: &[&str]) -> Vec<UniversalTag> {
    (0..tags.len())
        .map(|i| universal_tag(bases, tags, i))
        .collect()
}

fn universal_tag(bases: &[String], tags: &[&str], i: usize) -> UniversalTag {
    let base = bases[i].as_str();
    let tag = tags[i];

    match tag {
        "MD" => UniversalTag::Aux,
        _ if tag.starts_with("VB") => match base {
            "be" => UniversalTag::Aux,
            "have" | "do" if verb_follows(tags, i) => UniversalTag::Aux,
            _ => UniversalTag::Verb,
        },
        "NN" | "NNS" => UniversalTag::Noun,
        "NNP" | "NNPS" => UniversalTag::Propn,
        "JJ" | "JJR" | "JJS" => UniversalTag::Adj,
        "RB" if base == "not" => UniversalTag::Part,
        "RB" | "RBR" | "RBS" | "WRB" => UniversalTag::Adv,
        "TO" | "POS" => UniversalTag::Part,
        "RP" => UniversalTag::Adp,
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => UniversalTag::Pron,
        "DT" | "PDT" | "WDT" => UniversalTag::Det,
        "IN" if SUBORDINATORS.contains(&base) => UniversalTag::Sconj,
        "IN" => UniversalTag::Adp,
        "CC" => UniversalTag::Cconj,
        "CD" => UniversalTag::Num,
        "UH" => UniversalTag::Intj,
        "$" | "#" | "SYM" => UniversalTag::Sym,
        "." | "," | ":" | "(" | ")" | "``" | "''" => UniversalTag::Punct,
        _ => UniversalTag::X,
    }
}

/// Whether a verb follows token `i`, past adverbs and an inverted subject.
fn verb_follows(tags: &[&str], i: usize) -> bool {
    let mut rest = tags[i + 1..].iter().skip_while(|t| t.starts_with("RB"));
    match rest.next() {
        Some(t) if t.starts_with("VB") => true,
        Some(&"PRP") | Some(&"NNP") => rest
            .skip_while(|t| t.starts_with("RB"))
            .next()
            .is_some_and(|t| t.starts_with("VB")),
        _ => false,
    }
}

/// Human readable description of a Penn Treebank tag, `"Other"` when unknown.
pub fn describe_tag(tag: &str) -> &'static str {
    match tag {
        "CC" => "Coordinating conjunction",
        "CD" => "Cardinal number",
        "DT" => "Determiner",
        "EX" => "Existential there",
        "FW" => "Foreign word",
        "IN" => "Preposition",
        "JJ" => "Adjective",
        "JJR" => "Adjective, comparative",
        "JJS" => "Adjective, superlative",
        "LS" => "List item marker",
        "MD" => "Modal",
        "NN" => "Noun, singular",
        "NNS" => "Noun, plural",
        "NNP" => "Proper noun",
        "NNPS" => "Proper noun, plural",
        "PDT" => "Predeterminer",
        "POS" => "Possessive ending",
        "PRP" => "Personal pronoun",
        "PRP$" => "Possessive pronoun",
        "RB" => "Adverb",
        "RBR" => "Adverb, comparative",
        "RBS" => "Adverb, superlative",
        "RP" => "Particle",
        "SYM" => "Symbol",
        "TO" => "to",
        "UH" => "Interjection",
        "VB" => "Verb, base form",
        "VBD" => "Verb, past",
        "VBG" => "Verb, gerund",
        "VBN" => "Verb, past participle",
        "VBP" => "Verb, present",
        "VBZ" => "Verb, 3rd person",
        "WDT" => "Wh-determiner",
        "WP" => "Wh-pronoun",
        "WP$" => "Possessive wh-pronoun",
        "WRB" => "Wh-adverb",
        "." => "Punctuation",
        "," => "Comma",
        ":" => "Colon or dash",
        "(" | ")" => "Bracket",
        "``" | "''" => "Quotation mark",
        "$" => "Currency symbol",
        "#" => "Pound sign",
        _ => "Other",
    }
}
