//! Error types for the text-analyzer library.
//!
//! All errors are represented by the [`TextAnalyzerError`] enum. Library
//! operations return [`Result`] and propagate failures with `?`; the binary
//! prints the error and exits with status 1.
//!
//! # Examples
//!
//! ```
//! use text_analyzer::error::{TextAnalyzerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextAnalyzerError::config("cost_per_token must be finite"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for text-analyzer operations.
#[derive(Error, Debug)]
pub enum TextAnalyzerError {
    /// I/O errors (config files, terminal output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The tagging model could not be loaded
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Tokenizer errors (unknown LLM model, undecodable token ids)
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TextAnalyzerError.
pub type Result<T> = std::result::Result<T, TextAnalyzerError>;

impl TextAnalyzerError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextAnalyzerError::Analysis(msg.into())
    }

    /// Create a new tokenizer error.
    pub fn tokenizer<S: Into<String>>(msg: S) -> Self {
        TextAnalyzerError::Tokenizer(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextAnalyzerError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextAnalyzerError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = TextAnalyzerError::tokenizer("unknown model");
        assert_eq!(error.to_string(), "Tokenizer error: unknown model");

        let error = TextAnalyzerError::config("bad rate");
        assert_eq!(error.to_string(), "Config error: bad rate");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TextAnalyzerError::from(io_error);

        match error {
            TextAnalyzerError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
