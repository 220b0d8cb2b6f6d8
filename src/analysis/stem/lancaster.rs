//! Lancaster (Paice/Husk) stemmer.
//!
//! An iterative, table-driven stemmer that is considerably more aggressive
//! than Porter. Each rule is written as a compact string:
//!
//! ```text
//! gni3>    ending "ing" (reversed), remove 3 letters, continue
//! sei3y>   ending "ies", remove 3, append "y", continue
//! a*1.     ending "a", only if the word is untouched, remove 1, stop
//! ```
//!
//! Rules are tried against the current last letter of the word; the first
//! applicable rule wins. Stemming ends on a `.` rule or when no rule applies.
//!
//! # Examples
//!
//! ```
//! use text_analyzer::analysis::stem::Stemmer;
//! use text_analyzer::analysis::stem::lancaster::LancasterStemmer;
//!
//! let stemmer = LancasterStemmer::new();
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("maximum"), "maxim");
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;
use regex::Regex;

use crate::analysis::stem::Stemmer;

/// The standard Paice/Husk rule table.
const DEFAULT_RULES: &[&str] = &[
    "ai*2.", "a*1.", "bb1.", "city3s.", "ci2>", "cn1t>", "dd1.", "dei3y>", "deec2ss.", "dee1.",
    "de2>", "dooh4>", "e1>", "feil1v.", "fi2>", "gni3>", "gai3y.", "ga2>", "gg1.", "ht*2.",
    "hsiug5ct.", "hsi3>", "i*1.", "i1y>", "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.",
    "jrev1t.", "jsim2t.", "jn1d.", "j1s.", "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>",
    "lc1.", "lufi4y.", "luf3>", "lu2.", "lai3>", "lau3>", "la2>", "ll1.", "mui3.", "mu*2.",
    "msi3>", "mm1.", "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.",
    "pihs4>", "pp1.", "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>",
    "sei3y>", "sis2.", "si2>", "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.", "tacilp4y.",
    "ta2>", "tnem4>", "tne3>", "tna3>", "tpir2b.", "tpro2b.", "tcud1.", "tpmus2.", "tpec2iv.",
    "tulo2v.", "tsis0.", "tsi3>", "tt1.", "uqi3.", "ugo1.", "vis3j>", "vie0.", "vi2>", "ylb1>",
    "yli3y>", "ylp0.", "yl2>", "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>", "yte3>", "ytl2.",
    "yrtsi5.", "yra3>", "yro3>", "yfi3.", "ycn2t>", "yca3>", "zi2>", "zy1s.",
];

static RULE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)(\*?)(\d)([a-z]*)([>\.]?)$").expect("rule pattern is valid")
});

/// Rules grouped by the last letter of the ending they match.
static DEFAULT_RULE_TABLE: LazyLock<AHashMap<char, Vec<Rule>>> =
    LazyLock::new(|| build_rule_table(DEFAULT_RULES));

/// One parsed stemming rule.
#[derive(Clone, Debug, PartialEq)]
struct Rule {
    /// Ending in normal reading order.
    ending: String,
    /// Only applies to a word no other rule has touched.
    intact_only: bool,
    remove: usize,
    append: String,
    stop: bool,
}

impl Rule {
    fn parse(rule: &str) -> Option<Rule> {
        let captures = RULE_PATTERN.captures(rule)?;
        Some(Rule {
            ending: captures[1].chars().rev().collect(),
            intact_only: !captures[2].is_empty(),
            remove: captures[3].parse().ok()?,
            append: captures[4].to_string(),
            stop: &captures[5] == ".",
        })
    }
}

fn build_rule_table(rules: &[&str]) -> AHashMap<char, Vec<Rule>> {
    let mut table: AHashMap<char, Vec<Rule>> = AHashMap::new();
    for rule in rules.iter().filter_map(|r| Rule::parse(r)) {
        if let Some(last) = rule.ending.chars().last() {
            table.entry(last).or_default().push(rule);
        }
    }
    table
}

/// Lancaster stemmer using the standard rule table.
#[derive(Debug, Clone, Default)]
pub struct LancasterStemmer;

impl LancasterStemmer {
    /// Create a new Lancaster stemmer.
    pub fn new() -> Self {
        LancasterStemmer
    }

    /// Index of the last letter of the leading alphabetic run.
    fn last_letter(word: &[char]) -> Option<usize> {
        word.iter().take_while(|c| c.is_alphabetic()).count().checked_sub(1)
    }

    /// Whether removing `remove` letters leaves an acceptable stem.
    fn is_acceptable(word: &[char], remove: usize) -> bool {
        let is_vowel = |c: char| "aeiouy".contains(c);
        let Some(remaining) = word.len().checked_sub(remove) else {
            return false;
        };

        if is_vowel(word[0]) {
            remaining >= 2
        } else {
            remaining >= 3 && (is_vowel(word[1]) || is_vowel(word[2]))
        }
    }

    fn apply(word: &[char], rule: &Rule) -> Vec<char> {
        let mut stem: Vec<char> = word[..word.len() - rule.remove].to_vec();
        stem.extend(rule.append.chars());
        stem
    }
}

impl Stemmer for LancasterStemmer {
    fn stem(&self, word: &str) -> String {
        let intact: Vec<char> = word.to_lowercase().chars().collect();
        let mut word = intact.clone();

        loop {
            let Some(last) = Self::last_letter(&word) else {
                break;
            };
            let Some(rules) = DEFAULT_RULE_TABLE.get(&word[last]) else {
                break;
            };

            let current: String = word.iter().collect();
            let applied = rules.iter().find(|rule| {
                current.ends_with(rule.ending.as_str())
                    && (!rule.intact_only || word == intact)
                    && Self::is_acceptable(&word, rule.remove)
            });

            match applied {
                Some(rule) => {
                    word = Self::apply(&word, rule);
                    if rule.stop {
                        break;
                    }
                }
                None => break,
            }
        }

        word.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "lancaster"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_parsing() {
        let rule = Rule::parse("sei3y>").unwrap();
        assert_eq!(rule.ending, "ies");
        assert_eq!(rule.remove, 3);
        assert_eq!(rule.append, "y");
        assert!(!rule.intact_only);
        assert!(!rule.stop);

        let rule = Rule::parse("a*1.").unwrap();
        assert!(rule.intact_only);
        assert!(rule.stop);

        assert!(Rule::parse("not a rule").is_none());
    }

    #[test]
    fn test_all_default_rules_parse() {
        let parsed: usize = DEFAULT_RULE_TABLE.values().map(Vec::len).sum();
        assert_eq!(parsed, DEFAULT_RULES.len());
    }

    #[test]
    fn test_lancaster_stemmer() {
        let stemmer = LancasterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("maximum"), "maxim");
        assert_eq!(stemmer.stem("presumably"), "presum");
        assert_eq!(stemmer.stem("multiply"), "multiply");
        assert_eq!(stemmer.stem("provision"), "provid");
        assert_eq!(stemmer.stem("owed"), "ow");
        assert_eq!(stemmer.stem("ear"), "ear");
        assert_eq!(stemmer.stem("saying"), "say");
        assert_eq!(stemmer.stem("crying"), "cry");
        assert_eq!(stemmer.stem("string"), "string");
        assert_eq!(stemmer.stem("meant"), "meant");
        assert_eq!(stemmer.stem("cement"), "cem");
    }

    #[test]
    fn test_lancaster_non_letters() {
        let stemmer = LancasterStemmer::new();

        assert_eq!(stemmer.stem("."), ".");
        assert_eq!(stemmer.stem("2024"), "2024");
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem("Running"), "run");
    }
}
