//! Integration tests for stemming, lemmatization and the stem/lemma comparison

use text_analyzer::cli::{Winner, compare_records};
use text_analyzer::prelude::*;

#[test]
fn test_stem_text() -> Result<()> {
    let records = stem_text("running")?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].original, "running");
    assert_eq!(records[0].porter, "run");
    assert_eq!(records[0].snowball, "run");
    assert_eq!(records[0].lancaster, "run");

    Ok(())
}

#[test]
fn test_stemmers_disagree() -> Result<()> {
    let records = stem_text("generously")?;

    assert_eq!(records[0].porter, "gener");
    assert_eq!(records[0].snowball, "generous");

    Ok(())
}

#[test]
fn test_lem_text() -> Result<()> {
    let records = lem_text("fighting")?;
    assert_eq!(records[0].lemma, "fight");

    let records = lem_text("They were fighting")?;
    assert_eq!(records[2].lemma, "fight");

    let records = lem_text("The Avengers")?;
    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(!record.original.is_empty());
        assert!(!record.lemma.is_empty());
    }
    assert_eq!(records[1].original, "Avengers");

    Ok(())
}

#[test]
fn test_compare_stems_with_lemmas() -> Result<()> {
    let text = "The children were running";
    let stems = stem_text(text)?;
    let lemmas = lem_text(text)?;
    let report = compare_records(text, &stems, &lemmas);

    assert_eq!(report.rows.len(), 4);
    let winners: Vec<Winner> = report.rows.iter().map(|r| r.winner).collect();
    assert_eq!(winners, vec![Winner::Tie, Winner::Stem, Winner::Stem, Winner::Tie]);
    assert_eq!(report.rows[1].lemma, "child");
    assert_eq!(report.rows[2].lemma, "be");

    let summary = report.summary.expect("summary for non-empty text");
    assert_eq!(summary.total, 4);
    assert_eq!(summary.stem_real_words, 4);
    assert_eq!(summary.lemma_real_words, 2);
    assert_eq!(summary.lemma_percent, 50);

    Ok(())
}

#[test]
fn test_blank_text() -> Result<()> {
    assert!(stem_text("")?.is_empty());
    assert!(lem_text("   ")?.is_empty());

    Ok(())
}
