//! Command implementations for the text-analyzer CLI.

use std::fmt;

use ahash::AHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::ner::describe_label;
use crate::analysis::pos::describe_tag;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::normalizers::{LemmaRecord, StemRecord, lem_text, stem_text};
use crate::taggers::{ner_bio_tagging, pos_tagging};
use crate::tokenizers::tokenize_text_with;

/// Which of stem and lemma came out as the better word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    /// Stem and lemma are the same.
    Tie,
    /// The lemma kept the word intact while the stem changed it.
    Lemma,
    /// The stem kept the word intact while the lemma changed it.
    Stem,
    /// Both changed the word differently.
    LemmaFallback,
}

impl Winner {
    /// Judge one word.
    pub fn judge(original: &str, stem: &str, lemma: &str) -> Self {
        if stem == lemma {
            Winner::Tie
        } else if lemma == original {
            Winner::Lemma
        } else if stem == original {
            Winner::Stem
        } else {
            Winner::LemmaFallback
        }
    }

    pub fn credits_stem(&self) -> bool {
        matches!(self, Winner::Tie | Winner::Stem)
    }

    pub fn credits_lemma(&self) -> bool {
        !matches!(self, Winner::Stem)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Winner::Tie => "TIE",
            Winner::Lemma => "LEMMA ✅",
            Winner::Stem => "STEM",
            Winner::LemmaFallback => "LEMMA",
        };
        f.write_str(label)
    }
}

/// Execute a CLI command.
pub fn execute_command(args: TextAnalyzerArgs) -> Result<()> {
    let text = args.command.text();
    debug!("Running {:?} on {} bytes", args.command, text.len());

    match &args.command {
        Command::Tokenize(_) => tokenize(text, &args),
        Command::Pos(_) => pos(text, &args),
        Command::Ner(_) => ner(text, &args),
        Command::Stem(_) => stem(text, &args),
        Command::Lemmatize(_) => lemmatize(text, &args),
        Command::Compare(_) => compare(text, &args),
        Command::Analyze(_) => analyze(text, &args),
    }
}

/// Defaults, then the config file, then explicit flags and environment.
pub fn resolve_config(args: &TextAnalyzerArgs) -> Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            AnalyzerConfig::from_file(path)?
        }
        None => AnalyzerConfig::default(),
    };

    if let Some(model) = &args.llm_model {
        config = config.with_llm_model(model.clone());
    }
    if let Some(cost) = args.cost_per_token {
        config = config.with_cost_per_token(cost);
    }
    config.validate()?;
    debug!("Using {config:?}");
    Ok(config)
}

fn tokenize(text: &str, args: &TextAnalyzerArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let result = tokenize_text_with(text, &config)?;
    output_result(&result, args, |result| render_tokenize(text, result))
}

fn pos(text: &str, args: &TextAnalyzerArgs) -> Result<()> {
    let rows: Vec<PosRow> = pos_tagging(text)?
        .into_iter()
        .map(|record| PosRow {
            description: describe_tag(&record.pos).to_string(),
            token: record.token,
            pos: record.pos,
        })
        .collect();
    output_result(&rows, args, |rows| render_pos(text, rows))
}

fn entity_rows(entities: Vec<(String, String)>) -> Vec<EntityRow> {
    entities
        .into_iter()
        .map(|(text, label)| EntityRow {
            description: describe_label(&label).to_string(),
            text,
            label,
        })
        .collect()
}

fn ner(text: &str, args: &TextAnalyzerArgs) -> Result<()> {
    let (entities, bio_tags) = ner_bio_tagging(text)?;
    let report = NerReport {
        text: text.to_string(),
        entities: entity_rows(entities),
        bio_tags: bio_tags
            .into_iter()
            .map(|(token, tag)| BioRow { token, tag })
            .collect(),
    };
    output_result(&report, args, render_ner)
}

fn stem(text: &str, args: &TextAnalyzerArgs) -> Result<()> {
    let records = stem_text(text)?;
    output_result(&records, args, |records| render_stem(text, records))
}

fn lemmatize(text: &str, args: &TextAnalyzerArgs) -> Result<()> {
    let records = lem_text(text)?;
    output_result(&records, args, |records| render_lemmatize(text, records))
}

/// Pair each Porter stem with the lemma of the same word and judge them.
///
/// Lemmas are looked up by word text; a word the lemmatizer did not see keeps
/// itself as its lemma.
pub fn compare_records(text: &str, stems: &[StemRecord], lemmas: &[LemmaRecord]) -> CompareReport {
    let lemma_map: AHashMap<&str, &str> = lemmas
        .iter()
        .map(|r| (r.original.as_str(), r.lemma.as_str()))
        .collect();

    let rows: Vec<CompareRow> = stems
        .iter()
        .map(|record| {
            let original = record.original.as_str();
            let lemma = lemma_map.get(original).copied().unwrap_or(original);
            CompareRow {
                original: original.to_string(),
                stem: record.porter.clone(),
                lemma: lemma.to_string(),
                winner: Winner::judge(original, &record.porter, lemma),
            }
        })
        .collect();

    let summary = summarize(&rows);
    CompareReport {
        text: text.to_string(),
        rows,
        summary,
    }
}

fn summarize(rows: &[CompareRow]) -> Option<CompareSummary> {
    let total = rows.len();
    if total == 0 {
        return None;
    }
    let stem_real_words = rows.iter().filter(|r| r.winner.credits_stem()).count();
    let lemma_real_words = rows.iter().filter(|r| r.winner.credits_lemma()).count();
    Some(CompareSummary {
        total,
        stem_real_words,
        lemma_real_words,
        stem_percent: stem_real_words * 100 / total,
        lemma_percent: lemma_real_words * 100 / total,
    })
}

fn compare(text: &str, args: &TextAnalyzerArgs) -> Result<()> {
    let stems = stem_text(text)?;
    let lemmas = lem_text(text)?;
    let report = compare_records(text, &stems, &lemmas);
    output_result(&report, args, render_compare)
}

fn analyze(text: &str, args: &TextAnalyzerArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let tokens = tokenize_text_with(text, &config)?;
    let (entities, _) = ner_bio_tagging(text)?;
    let pos_lemmas = lem_text(text)?
        .into_iter()
        .map(|record| PosLemmaRow {
            token: record.original,
            pos: record.pos.to_string(),
            lemma: record.lemma,
        })
        .collect();

    let report = AnalysisReport {
        text: text.to_string(),
        tokens,
        entities: entity_rows(entities),
        pos_lemmas,
    };
    output_result(&report, args, render_analysis)
}
