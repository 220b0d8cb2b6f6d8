//! Configuration for text analysis operations.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextAnalyzerError};

/// Default model whose byte-pair encoding is used for LLM token counts.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4";

/// Default cost of a single LLM token in US dollars.
pub const DEFAULT_COST_PER_TOKEN: f64 = 0.00003;

/// Default number of decimal places the estimated cost is rounded to.
pub const DEFAULT_COST_PRECISION: u32 = 6;

/// Configuration for the analysis operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Model name used to select the byte-pair encoding (e.g. "gpt-4", "gpt-4o").
    pub llm_model: String,

    /// Cost of one LLM token in US dollars.
    pub cost_per_token: f64,

    /// Decimal places kept in the estimated cost.
    pub cost_precision: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            cost_per_token: DEFAULT_COST_PER_TOKEN,
            cost_precision: DEFAULT_COST_PRECISION,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing keys take default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            TextAnalyzerError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: AnalyzerConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the LLM model name.
    pub fn with_llm_model<S: Into<String>>(mut self, model: S) -> Self {
        self.llm_model = model.into();
        self
    }

    /// Set the per-token cost.
    pub fn with_cost_per_token(mut self, cost: f64) -> Self {
        self.cost_per_token = cost;
        self
    }

    /// Set the number of decimal places of the estimated cost.
    pub fn with_cost_precision(mut self, precision: u32) -> Self {
        self.cost_precision = precision;
        self
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.llm_model.trim().is_empty() {
            return Err(TextAnalyzerError::config("llm_model must not be empty"));
        }
        if !self.cost_per_token.is_finite() || self.cost_per_token < 0.0 {
            return Err(TextAnalyzerError::config(format!(
                "cost_per_token must be a non-negative number, got {}",
                self.cost_per_token
            )));
        }
        // f64 carries ~15 significant decimal digits
        if self.cost_precision > 15 {
            return Err(TextAnalyzerError::config(format!(
                "cost_precision must be at most 15, got {}",
                self.cost_precision
            )));
        }
        Ok(())
    }

    /// Estimated cost of `token_count` tokens, rounded to `cost_precision` places.
    pub fn estimate_cost(&self, token_count: usize) -> f64 {
        let factor = 10f64.powi(self.cost_precision as i32);
        (token_count as f64 * self.cost_per_token * factor).round() / factor
    }
}
