//! Output formatting for CLI commands.
//!
//! Human output is a [`HumanOutput`]: panels, box-drawn tables and labelled
//! sections built with `prettytable`. Cell styles only reach the terminal when
//! color is enabled.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table, row};
use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextAnalyzerArgs};
use crate::cli::commands::Winner;
use crate::error::Result;
use crate::normalizers::{LemmaRecord, StemRecord};
use crate::tokenizers::TokenizationResult;

/// A recognized entity with its label description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRow {
    pub text: String,
    pub label: String,
    pub description: String,
}

/// A token with its BIO tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioRow {
    pub token: String,
    pub tag: String,
}

/// Result structure for the `ner` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NerReport {
    pub text: String,
    pub entities: Vec<EntityRow>,
    pub bio_tags: Vec<BioRow>,
}

/// A tagged token with its tag description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosRow {
    pub token: String,
    pub pos: String,
    pub description: String,
}

/// One word of the stem versus lemma comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRow {
    pub original: String,
    pub stem: String,
    pub lemma: String,
    pub winner: Winner,
}

/// How many words each method turned into a real word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareSummary {
    pub total: usize,
    pub stem_real_words: usize,
    pub lemma_real_words: usize,
    pub stem_percent: usize,
    pub lemma_percent: usize,
}

/// Result structure for the `compare` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareReport {
    pub text: String,
    pub rows: Vec<CompareRow>,
    pub summary: Option<CompareSummary>,
}

/// A token with its coarse part of speech and lemma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosLemmaRow {
    pub token: String,
    pub pos: String,
    pub lemma: String,
}

/// Result structure for the `analyze` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub text: String,
    pub tokens: TokenizationResult,
    pub entities: Vec<EntityRow>,
    pub pos_lemmas: Vec<PosLemmaRow>,
}

/// Human-readable output: plain text and tables, in print order.
#[derive(Debug, Default)]
pub struct HumanOutput {
    blocks: Vec<Block>,
}

#[derive(Debug)]
enum Block {
    Text(String),
    Table(Table),
}

impl HumanOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unstyled text.
    pub fn text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.blocks.push(Block::Text(text.into()));
        self
    }

    /// Append a table; its cell styles apply when printed in color.
    pub fn table(&mut self, table: Table) -> &mut Self {
        self.blocks.push(Block::Table(table));
        self
    }

    /// Write everything to stdout.
    pub fn print(&self, color: bool) -> Result<()> {
        let mut stdout = io::stdout();
        for block in &self.blocks {
            match block {
                Block::Text(text) => stdout.write_all(text.as_bytes())?,
                Block::Table(table) if color => {
                    stdout.flush()?;
                    table
                        .print_tty(true)
                        .map_err(|e| io::Error::other(e.to_string()))?;
                }
                Block::Table(table) => {
                    table.print(&mut stdout)?;
                }
            }
        }
        stdout.flush()?;
        Ok(())
    }
}

impl fmt::Display for HumanOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                Block::Text(text) => f.write_str(text)?,
                Block::Table(table) => write!(f, "{table}")?,
            }
        }
        Ok(())
    }
}

/// Color only if stdout is a terminal and neither `--no-color` nor `NO_COLOR` is set.
pub fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

fn grid_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(&[LinePosition::Top], LineSeparator::new('─', '┬', '┌', '┐'))
        .separators(&[LinePosition::Title], LineSeparator::new('─', '┼', '├', '┤'))
        .separators(&[LinePosition::Bottom], LineSeparator::new('─', '┴', '└', '┘'))
        .padding(1, 1)
        .build()
}

/// A rounded box around `title`; `spec` is a prettytable style spec such as `"bFc"`.
pub fn panel(title: &str, spec: &str) -> Table {
    let mut table = Table::init(vec![Row::new(vec![Cell::new(title).style_spec(spec)])]);
    table.set_format(
        FormatBuilder::new()
            .borders('│')
            .separators(&[LinePosition::Top], LineSeparator::new('─', '─', '╭', '╮'))
            .separators(&[LinePosition::Bottom], LineSeparator::new('─', '─', '╰', '╯'))
            .padding(1, 1)
            .build(),
    );
    table
}

/// A box-drawn table with a bold magenta header row.
pub fn grid<I>(headers: &[&str], rows: I) -> Table
where
    I: IntoIterator<Item = Row>,
{
    let mut table = Table::init(rows.into_iter().collect());
    table.set_titles(Row::new(
        headers
            .iter()
            .map(|h| Cell::new(h).style_spec("bFm"))
            .collect(),
    ));
    table.set_format(grid_format());
    table
}

/// One borderless line made of separately styled words.
fn line(cells: Vec<Cell>) -> Table {
    let mut table = Table::init(vec![Row::new(cells)]);
    table.set_format(FormatBuilder::new().column_separator(' ').padding(0, 0).build());
    table
}

fn input_line(out: &mut HumanOutput, label_spec: &str, text: &str) {
    out.table(line(vec![
        Cell::new("Input:").style_spec(label_spec),
        Cell::new(text),
    ]))
    .text("\n");
}

fn section(title: &str) -> Table {
    let heading = format!("── {title} {}", "─".repeat(34usize.saturating_sub(title.len())));
    line(vec![Cell::new(&heading).style_spec("bFy")])
}

/// Human output of the `tokenize` command.
pub fn render_tokenize(text: &str, result: &TokenizationResult) -> HumanOutput {
    let mut out = String::from("\nTOKENIZATION\n");
    out.push_str(&format!("Input: {text}\n"));

    out.push_str(&format!("\nSentence Tokens: {}\n", result.sentences.len()));
    for (i, sentence) in result.sentences.iter().enumerate() {
        out.push_str(&format!("{}. {sentence}\n", i + 1));
    }

    out.push_str(&format!("\nWord Tokens: {}\n", result.words.len()));
    out.push_str(&format!("{:?}\n", result.words));

    out.push_str(&format!("\nLLM Token Count: {}\n", result.llm_token_count));
    out.push_str(&format!("Estimated Cost: $ {}\n", result.estimated_cost));

    let mut human = HumanOutput::new();
    human.text(out);
    human
}

/// Human output of the `pos` command.
pub fn render_pos(text: &str, rows: &[PosRow]) -> HumanOutput {
    let mut out = HumanOutput::new();
    out.table(panel(" POS Tagging", "bFc"));
    input_line(&mut out, "b", &format!("\"{text}\""));
    out.table(grid(
        &["Token", "POS", "Description"],
        rows.iter().map(|r| row![r.token, r.pos, r.description]),
    ));
    out
}

/// Human output of the `ner` command.
pub fn render_ner(report: &NerReport) -> HumanOutput {
    let mut out = HumanOutput::new();
    out.table(panel(" Named Entity Recognition", "bFc"));
    input_line(&mut out, "b", &format!("\"{}\"", report.text));
    out.table(line(vec![Cell::new("Entities Found:").style_spec("b")]));

    let rows: Vec<Row> = if report.entities.is_empty() {
        vec![row!["—", "—", "No entities found"]]
    } else {
        report
            .entities
            .iter()
            .map(|e| row![e.text, e.label, e.description])
            .collect()
    };
    out.table(grid(&["Entity", "Label", "Description"], rows));

    out.text("\n");
    out.table(line(vec![Cell::new("BIO Tags:").style_spec("b")]));
    let tags: Vec<String> = report
        .bio_tags
        .iter()
        .map(|b| format!("{}[{}]", b.token, b.tag))
        .collect();
    out.text(format!("{}\n", tags.join(" ")));
    out
}

/// Human output of the `stem` command.
pub fn render_stem(text: &str, records: &[StemRecord]) -> HumanOutput {
    let mut out = HumanOutput::new();
    out.table(panel("Stemming", "bFg"));
    input_line(&mut out, "i", text);
    out.table(grid(
        &["Original", "Porter", "Snowball", "Lancaster"],
        records
            .iter()
            .map(|r| row![r.original, r.porter, r.snowball, r.lancaster]),
    ));
    out
}

/// Human output of the `lemmatize` command.
pub fn render_lemmatize(text: &str, records: &[LemmaRecord]) -> HumanOutput {
    let mut out = HumanOutput::new();
    out.table(panel(" Lemmatization", "bFc"));
    input_line(&mut out, "b", &format!("\"{text}\""));
    out.table(grid(
        &["Original", "Lemma", "POS"],
        records.iter().map(|r| row![r.original, r.lemma, r.pos]),
    ));
    out
}

/// Human output of the `compare` command.
pub fn render_compare(report: &CompareReport) -> HumanOutput {
    let mut out = HumanOutput::new();
    out.table(panel("🔬 Stem vs Lemma Comparison", "bFc"));
    out.table(grid(
        &["Original", "Stem", "Lemma", "Winner"],
        report
            .rows
            .iter()
            .map(|r| row![r.original, r.stem, r.lemma, r.winner]),
    ));

    if let Some(summary) = &report.summary {
        out.text("\n");
        out.table(line(vec![Cell::new("Summary:").style_spec("b")]));
        out.text(format!(
            "  Stemming real words: {}/{} ({}%)\n  Lemmatization real words: {}/{} ({}%)\n",
            summary.stem_real_words,
            summary.total,
            summary.stem_percent,
            summary.lemma_real_words,
            summary.total,
            summary.lemma_percent
        ));
    }
    out
}

/// Human output of the `analyze` command.
pub fn render_analysis(report: &AnalysisReport) -> HumanOutput {
    let mut out = HumanOutput::new();
    out.table(panel(" Full Text Analysis", "bFc"));
    input_line(&mut out, "b", &format!("\"{}\"", report.text));

    out.table(section("Tokens"));
    out.text(format!(
        "Words: {:?}\nLLM Tokens: {} (Est. cost: ${})\n\n",
        report.tokens.words, report.tokens.llm_token_count, report.tokens.estimated_cost
    ));

    out.table(section("Named Entities"));
    if report.entities.is_empty() {
        out.text("No entities found\n");
    } else {
        let bullets: String = report
            .entities
            .iter()
            .map(|entity| format!("• {:<10} → {}\n", entity.text, entity.label))
            .collect();
        out.text(bullets);
    }

    out.text("\n");
    out.table(section("POS + Lemmas"));
    out.table(grid(
        &["Token", "POS", "Lemma"],
        report.pos_lemmas.iter().map(|r| row![r.token, r.pos, r.lemma]),
    ));
    out
}

/// Serialize `result` as JSON, pretty-printed on request.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Print a result in the requested format.
///
/// `human` renders the human-readable form and is only called for
/// [`OutputFormat::Human`].
pub fn output_result<T, F>(result: &T, args: &TextAnalyzerArgs, human: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => human(result).print(use_color(args.no_color))?,
        OutputFormat::Json => println!("{}", render_json(result, args.pretty)?),
    }
    Ok(())
}
