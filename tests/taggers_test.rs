//! Integration tests for POS tagging and named entity recognition

use text_analyzer::prelude::*;

#[test]
fn test_pos_tagging() -> Result<()> {
    let records = pos_tagging("Naruto trained hard")?;

    assert!(!records.is_empty());
    let tokens: Vec<&str> = records.iter().map(|r| r.token.as_str()).collect();
    assert_eq!(tokens, vec!["Naruto", "trained", "hard"]);
    assert!(records.iter().all(|r| !r.pos.is_empty()));
    assert_eq!(records[0].pos, "NNP");

    Ok(())
}

#[test]
fn test_pos_tagging_punctuation_and_contractions() -> Result<()> {
    let records = pos_tagging("I can't go.")?;
    let tokens: Vec<&str> = records.iter().map(|r| r.token.as_str()).collect();

    assert_eq!(tokens, vec!["I", "ca", "n't", "go", "."]);
    assert_eq!(records[0].pos, "PRP");
    assert_eq!(records[2].pos, "RB");
    assert_eq!(records[4].pos, ".");

    Ok(())
}

#[test]
fn test_ner_finds_person() -> Result<()> {
    let (entities, bio) = ner_bio_tagging("Elon Musk founded SpaceX")?;

    assert!(entities.iter().any(|(_, label)| label == "PERSON"));
    assert!(entities.contains(&("Elon Musk".to_string(), "PERSON".to_string())));
    assert!(entities.contains(&("SpaceX".to_string(), "ORG".to_string())));

    assert_eq!(bio.len(), 4);
    assert!(["O", "B-PERSON", "I-PERSON"].contains(&bio[0].1.as_str()));
    assert_eq!(bio[0], ("Elon".to_string(), "B-PERSON".to_string()));
    assert_eq!(bio[1], ("Musk".to_string(), "I-PERSON".to_string()));
    assert_eq!(bio[2].1, "O");

    Ok(())
}

#[test]
fn test_bio_tags_are_well_formed() -> Result<()> {
    let (_, bio) = ner_bio_tagging("Apple paid $3 billion in London on Monday.")?;

    let mut previous: Option<&str> = None;
    for (token, tag) in &bio {
        if let Some(label) = tag.strip_prefix("I-") {
            let prev = previous.unwrap_or("O");
            assert!(
                prev == format!("B-{label}") || prev == format!("I-{label}"),
                "{token} tagged {tag} after {prev}"
            );
        } else {
            assert!(tag == "O" || tag.starts_with("B-"), "unexpected tag {tag}");
        }
        previous = Some(tag);
    }

    Ok(())
}

#[test]
fn test_no_entities() -> Result<()> {
    let (entities, bio) = ner_bio_tagging("the cat sat on the mat")?;

    assert!(entities.is_empty());
    assert!(bio.iter().all(|(_, tag)| tag == "O"));

    Ok(())
}

#[test]
fn test_blank_text() -> Result<()> {
    assert!(pos_tagging("")?.is_empty());

    let (entities, bio) = ner_bio_tagging("  ")?;
    assert!(entities.is_empty());
    assert!(bio.is_empty());

    Ok(())
}
