//! Command line argument parsing for the text-analyzer CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// text-analyzer - tokenize, tag, recognize, stem and lemmatize text
#[derive(Parser, Debug, Clone)]
#[command(name = "text-analyzer")]
#[command(about = "Tokenization, POS tagging, NER, stemming and lemmatization")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextAnalyzerArgs {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "FILE", env = "TEXT_ANALYZER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Model whose encoding is used to count LLM tokens
    #[arg(long, value_name = "NAME", env = "TEXT_ANALYZER_LLM_MODEL", global = true)]
    pub llm_model: Option<String>,

    /// Cost of one LLM token in US dollars
    #[arg(long, value_name = "RATE", env = "TEXT_ANALYZER_COST_PER_TOKEN", global = true)]
    pub cost_per_token: Option<f64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextAnalyzerArgs {
    /// Get the effective verbosity level: 0 quiet, 1 normal, one more per `-v`.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split text into sentences, words and LLM tokens
    Tokenize(TextArgs),

    /// Tag every word with its part of speech
    Pos(TextArgs),

    /// Find named entities and show BIO tags
    Ner(TextArgs),

    /// Stem every word with Porter, Snowball and Lancaster
    Stem(TextArgs),

    /// Show the lemma and coarse part of speech of every word
    Lemmatize(TextArgs),

    /// Compare Porter stems with lemmas
    Compare(TextArgs),

    /// Run every analysis on the text
    Analyze(TextArgs),
}

impl Command {
    /// The text the command operates on.
    pub fn text(&self) -> &str {
        match self {
            Command::Tokenize(args)
            | Command::Pos(args)
            | Command::Ner(args)
            | Command::Stem(args)
            | Command::Lemmatize(args)
            | Command::Compare(args)
            | Command::Analyze(args) => &args.text,
        }
    }
}

/// Arguments shared by every command
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
