//! Named entity recognition.
//!
//! Entities are labelled with the OntoNotes 5 label set. The recognizer is a
//! cascade of three layers, each only allowed to claim tokens the previous
//! layers left free:
//!
//! 1. [`patterns`]: money, percentages, times, dates, quantities and numbers
//! 2. [`gazetteer`]: known organizations, places, groups, events, products,
//!    facilities, laws and people
//! 3. capitalization heuristics over the remaining proper-noun runs

pub mod gazetteer;
pub mod patterns;
pub mod recognizer;

pub use recognizer::EntityRecognizer;

use serde::{Deserialize, Serialize};

/// OntoNotes named entity label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

impl EntityLabel {
    /// The label as written in OntoNotes, e.g. `"GPE"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Fac => "FAC",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Law => "LAW",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized entity as a half-open range of token indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(start: usize, end: usize, label: EntityLabel) -> Self {
        Entity { start, end, label }
    }

    /// Number of tokens in the entity.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Position of a token relative to an entity span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Iob {
    /// First token of an entity.
    B,
    /// Token inside an entity, after the first.
    I,
    /// Token outside every entity.
    O,
}

impl Iob {
    pub fn as_str(&self) -> &'static str {
        match self {
            Iob::B => "B",
            Iob::I => "I",
            Iob::O => "O",
        }
    }
}

/// Human readable description of an entity label, `"Other"` when unknown.
pub fn describe_label(label: &str) -> &'static str {
    match label {
        "PERSON" => "Person name",
        "ORG" => "Organization",
        "GPE" => "Geo-political entity",
        "LOC" => "Location",
        "DATE" => "Date",
        "TIME" => "Time",
        "MONEY" => "Monetary value",
        "PERCENT" => "Percentage",
        "NORP" => "Nationality / group",
        "FAC" => "Facility",
        "EVENT" => "Event",
        "LAW" => "Law or regulation",
        "LANGUAGE" => "Language",
        "PRODUCT" => "Product",
        "WORK_OF_ART" => "Title of a work",
        "QUANTITY" => "Measurement",
        "ORDINAL" => "Ordinal number",
        "CARDINAL" => "Cardinal number",
        _ => "Other",
    }
}

/// Split `"word/TAG"` items for tests; bare words are tagged by shape.
#[cfg(test)]
pub(crate) fn annotate(sentence: &str) -> (Vec<&str>, Vec<&str>) {
    sentence
        .split_whitespace()
        .map(|item| match item.rsplit_once('/') {
            Some((word, tag))
                if !word.is_empty()
                    && !tag.is_empty()
                    && tag.chars().all(|c| c.is_ascii_uppercase() || c == '$') =>
            {
                (word, tag)
            }
            _ => (item, shape_tag(item)),
        })
        .unzip()
}

#[cfg(test)]
fn shape_tag(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if c.is_ascii_digit() => "CD",
        Some(c) if c.is_uppercase() => "NNP",
        Some('$') => "$",
        Some('&') => "CC",
        Some(c) if !c.is_alphanumeric() => ".",
        _ => "NN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_names() {
        assert_eq!(EntityLabel::WorkOfArt.as_str(), "WORK_OF_ART");
        assert_eq!(EntityLabel::Gpe.to_string(), "GPE");
        assert_eq!(
            serde_json::to_string(&EntityLabel::WorkOfArt).unwrap(),
            "\"WORK_OF_ART\""
        );
    }

    #[test]
    fn test_describe_label() {
        assert_eq!(describe_label("PERSON"), "Person name");
        assert_eq!(describe_label("CARDINAL"), "Cardinal number");
        assert_eq!(describe_label("UNKNOWN"), "Other");
    }

    #[test]
    fn test_entity_len() {
        let entity = Entity::new(2, 4, EntityLabel::Person);
        assert_eq!(entity.len(), 2);
        assert!(!entity.is_empty());
    }
}
