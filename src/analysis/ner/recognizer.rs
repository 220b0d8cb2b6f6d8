//! Entity recognizer combining patterns, the gazetteer and proper-noun
//! heuristics.

use log::trace;

use crate::analysis::ner::{Entity, EntityLabel, gazetteer, patterns};

const CORPORATE_WORDS: &[&str] = &[
    "Inc.", "Inc", "Corp.", "Corp", "Corporation", "Ltd.", "Ltd", "LLC", "Co.", "Company",
    "Group", "Holdings", "Technologies", "Labs", "Systems", "Bank", "Airlines", "Motors",
    "Foundation", "Association", "Institute", "University", "College", "School", "Academy",
    "Agency", "Department", "Ministry", "Council", "Committee", "Commission", "Party", "Club",
    "Studios", "Records", "Press", "Times", "News", "Society", "Federation", "League",
];

/// Institution words that may be followed by "of" inside a name.
const INSTITUTION_WORDS: &[&str] = &[
    "University", "Bank", "Institute", "Department", "Ministry", "College", "School",
    "Academy", "Museum", "Church", "Board", "Office", "Bureau", "League", "Federation",
];

const LAW_WORDS: &[&str] = &["Act", "Amendment", "Treaty", "Accord", "Accords", "Law", "Code"];

const EVENT_WORDS: &[&str] = &[
    "War", "Cup", "Games", "Olympics", "Festival", "Revolution", "Championship",
    "Championships", "Summit", "Conference", "Series", "Open", "Bowl", "Marathon",
];

const LOCATION_WORDS: &[&str] = &[
    "River", "Ocean", "Sea", "Lake", "Mountain", "Mountains", "Valley", "Desert", "Island",
    "Islands", "Bay", "Gulf", "Peninsula", "Forest", "Canyon", "Coast", "Falls",
];

const FACILITY_WORDS: &[&str] = &[
    "Bridge", "Airport", "Tower", "Stadium", "Building", "Hall", "Center", "Centre", "Station",
    "Palace", "Park", "Museum", "Hospital", "Street", "Avenue", "Road", "Highway", "Square",
    "Temple", "Cathedral", "Castle",
];

const PLACE_WORDS: &[&str] = &[
    "City", "County", "State", "Province", "Republic", "Kingdom", "Town", "Village",
    "District", "Prefecture",
];

/// Prepositions after which an unknown name is most likely a place.
const PLACE_PREPOSITIONS: &[&str] = &["in", "at", "from", "near", "across", "throughout"];

/// A rule based named entity recognizer.
///
/// Each layer only claims tokens that earlier layers left free, except that a
/// gazetteer name may absorb bare numbers ("Falcon 9").
#[derive(Clone, Debug, Default)]
pub struct EntityRecognizer;

impl EntityRecognizer {
    pub fn new() -> Self {
        EntityRecognizer
    }

    /// Recognize entities in `words`, tagged with the aligned Penn `tags`.
    ///
    /// The returned spans are sorted and never overlap.
    pub fn recognize(&self, words: &[&str], tags: &[&str]) -> Vec<Entity> {
        let mut entities = patterns::find_all(words, tags);
        trace!("pattern entities: {entities:?}");

        let mut i = 0;
        while i < words.len() {
            if entities.iter().any(|e| e.start <= i && i < e.end && !is_number_label(e.label)) {
                i += 1;
                continue;
            }
            match gazetteer::lookup(words, tags, i) {
                Some(found) if Self::absorbs(&entities, &found) => {
                    entities.retain(|e| !overlaps(e, &found));
                    entities.push(found);
                    i = found.end;
                }
                _ => i += 1,
            }
        }

        let mut covered = vec![false; words.len()];
        for entity in &entities {
            covered[entity.start..entity.end].fill(true);
        }

        let mut i = 0;
        while i < words.len() {
            if covered[i] || !is_proper(tags, i) {
                i += 1;
                continue;
            }
            let end = Self::proper_run(words, tags, &covered, i);
            if let Some(label) = Self::classify(words, tags, i, end) {
                entities.push(Entity::new(i, end, label));
            }
            i = end;
        }

        entities.sort_by_key(|e| e.start);
        trace!("entities: {entities:?}");
        entities
    }

    /// Whether `found` may replace every entity it overlaps.
    fn absorbs(entities: &[Entity], found: &Entity) -> bool {
        entities.iter().filter(|e| overlaps(e, found)).all(|e| {
            is_number_label(e.label) && found.start <= e.start && e.end <= found.end
        })
    }

    /// End of the run of free proper nouns starting at `start`.
    ///
    /// "&" joins two names ("Johnson & Johnson"); "of" continues a name after
    /// an institution word ("University of Springfield").
    fn proper_run(words: &[&str], tags: &[&str], covered: &[bool], start: usize) -> usize {
        let free_proper = |k: usize| k < words.len() && !covered[k] && is_proper(tags, k);

        let mut end = start + 1;
        loop {
            if free_proper(end) {
                end += 1;
            } else if words.get(end) == Some(&"&") && free_proper(end + 1) {
                end += 2;
            } else if words.get(end) == Some(&"of")
                && INSTITUTION_WORDS.contains(&words[end - 1])
                && free_proper(end + 1)
            {
                end += 2;
            } else {
                return end;
            }
        }
    }

    fn classify(words: &[&str], tags: &[&str], start: usize, end: usize) -> Option<EntityLabel> {
        let span = &words[start..end];
        let last = *span.last()?;

        if span.contains(&"&") {
            return Some(EntityLabel::Org);
        }
        if CORPORATE_WORDS.contains(&last)
            || (span.len() > 2 && INSTITUTION_WORDS.contains(&span[0]) && span[1] == "of")
        {
            return Some(EntityLabel::Org);
        }
        if span.len() > 1 {
            let by_head = [
                (LAW_WORDS, EntityLabel::Law),
                (EVENT_WORDS, EntityLabel::Event),
                (LOCATION_WORDS, EntityLabel::Loc),
                (FACILITY_WORDS, EntityLabel::Fac),
                (PLACE_WORDS, EntityLabel::Gpe),
            ];
            if let Some((_, label)) = by_head.iter().find(|(heads, _)| heads.contains(&last)) {
                return Some(*label);
            }
            // "Mount Fuji", "Lake Tahoe"
            if matches!(span[0], "Mount" | "Lake" | "Cape") {
                return Some(EntityLabel::Loc);
            }
        }
        if span.len() == 1 && (is_camel_case(last) || is_acronym(last)) {
            return Some(EntityLabel::Org);
        }
        let after_place_preposition = start
            .checked_sub(1)
            .is_some_and(|p| PLACE_PREPOSITIONS.contains(&words[p].to_lowercase().as_str()));
        if after_place_preposition {
            return Some(EntityLabel::Gpe);
        }
        if span.len() > 1 {
            return Some(EntityLabel::Person);
        }
        let before_verb = tags
            .get(end)
            .is_some_and(|t| t.starts_with("VB") || *t == "MD");
        before_verb.then_some(EntityLabel::Person)
    }
}

fn is_number_label(label: EntityLabel) -> bool {
    matches!(label, EntityLabel::Cardinal | EntityLabel::Ordinal)
}

fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.start < b.end && b.start < a.end
}

fn is_proper(tags: &[&str], i: usize) -> bool {
    matches!(tags.get(i), Some(&"NNP") | Some(&"NNPS"))
}

/// "SpaceX", "OpenAI", "eBay": an upper-case letter after a lower-case one.
fn is_camel_case(word: &str) -> bool {
    word.chars()
        .zip(word.chars().skip(1))
        .any(|(a, b)| a.is_lowercase() && b.is_uppercase())
}

/// "NASA", "IBM": two or more letters, all upper-case.
fn is_acronym(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && word.chars().all(|c| c.is_uppercase() || c == '.' || c == '&')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ner::annotate;

    fn recognize(sentence: &str) -> Vec<(String, &'static str)> {
        let (words, tags) = annotate(sentence);
        EntityRecognizer::new()
            .recognize(&words, &tags)
            .into_iter()
            .map(|e| (words[e.start..e.end].join(" "), e.label.as_str()))
            .collect()
    }

    fn pair(text: &str, label: &'static str) -> (String, &'static str) {
        (text.to_string(), label)
    }

    #[test]
    fn test_person_and_org() {
        assert_eq!(
            recognize("Elon Musk founded SpaceX"),
            vec![pair("Elon Musk", "PERSON"), pair("SpaceX", "ORG")]
        );
    }

    #[test]
    fn test_mixed_layers() {
        assert_eq!(
            recognize("Apple paid $ 3 billion in London on Monday"),
            vec![
                pair("Apple", "ORG"),
                pair("$ 3 billion", "MONEY"),
                pair("London", "GPE"),
                pair("Monday", "DATE"),
            ]
        );
    }

    #[test]
    fn test_gazetteer_absorbs_numbers() {
        assert_eq!(recognize("the Falcon 9 rocket"), vec![pair("Falcon 9", "PRODUCT")]);
    }

    #[test]
    fn test_heuristics() {
        assert_eq!(recognize("Naruto trained/VBD hard/RB"), vec![pair("Naruto", "PERSON")]);
        assert_eq!(
            recognize("she joined Acme Corp. last year"),
            vec![pair("Acme Corp.", "ORG"), pair("last year", "DATE")]
        );
        assert_eq!(
            recognize("they crossed the Hudson River"),
            vec![pair("Hudson River", "LOC")]
        );
        assert_eq!(recognize("he lives in Springfield"), vec![pair("Springfield", "GPE")]);
        assert_eq!(
            recognize("the University of Springfield opened"),
            vec![pair("University of Springfield", "ORG")]
        );
        assert_eq!(recognize("Johnson & Johnson"), vec![pair("Johnson & Johnson", "ORG")]);
    }

    #[test]
    fn test_no_entities() {
        assert!(recognize("the cat sat on the mat").is_empty());
        assert!(recognize("Hello world").is_empty());
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let (words, tags) =
            annotate("Dr. Jane Roe met/VBD Bill Gates in/IN New York City on/IN May 5 , 2024");
        let entities = EntityRecognizer::new().recognize(&words, &tags);
        assert_eq!(entities.len(), 4);
        for pair in entities.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
