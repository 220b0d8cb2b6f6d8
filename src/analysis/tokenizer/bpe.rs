//! Byte-pair encoding tokenizer for large language models.
//!
//! Wraps the `tiktoken-rs` encoders so text can be split into the sub-word
//! units an OpenAI model actually sees. Encoders are built once per model
//! name and cached for the life of the process.

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use log::debug;
use parking_lot::Mutex;
use tiktoken_rs::CoreBPE;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, TextAnalyzerError};

/// Encoders already built, keyed by model name.
static ENCODERS: LazyLock<Mutex<AHashMap<String, Arc<CoreBPE>>>> =
    LazyLock::new(|| Mutex::new(AHashMap::new()));

/// A tokenizer producing the sub-word tokens of a specific LLM.
///
/// # Examples
///
/// ```
/// use text_analyzer::analysis::tokenizer::bpe::BpeTokenizer;
///
/// let tokenizer = BpeTokenizer::for_model("gpt-4").unwrap();
/// let pieces = tokenizer.pieces("Tokenization");
/// assert!(!pieces.is_empty());
/// assert_eq!(pieces.concat(), "Tokenization");
/// ```
#[derive(Clone)]
pub struct BpeTokenizer {
    model: String,
    bpe: Arc<CoreBPE>,
}

impl std::fmt::Debug for BpeTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BpeTokenizer")
            .field("model", &self.model)
            .field("bpe", &"<encoder>")
            .finish()
    }
}

impl BpeTokenizer {
    /// Get the tokenizer for an OpenAI model name such as "gpt-4" or "gpt-4o".
    pub fn for_model(model: &str) -> Result<Self> {
        let mut encoders = ENCODERS.lock();
        if let Some(bpe) = encoders.get(model) {
            return Ok(BpeTokenizer {
                model: model.to_string(),
                bpe: Arc::clone(bpe),
            });
        }

        debug!("Loading byte-pair encoding for model {model}");
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|e| {
            TextAnalyzerError::tokenizer(format!("no encoding for model '{model}': {e}"))
        })?;
        let bpe = Arc::new(bpe);
        encoders.insert(model.to_string(), Arc::clone(&bpe));

        Ok(BpeTokenizer {
            model: model.to_string(),
            bpe,
        })
    }

    /// The model this tokenizer encodes for.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Number of tokens `text` encodes to.
    ///
    /// Special-token markers such as `<|endoftext|>` are encoded as plain text.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Decode every token id on its own and return the pieces in order.
    ///
    /// Bytes that are not valid UTF-8 within a single piece become U+FFFD;
    /// the valid bytes around them are kept.
    pub fn pieces(&self, text: &str) -> Vec<String> {
        let ids = self.bpe.encode_ordinary(text);
        self.bpe
            ._decode_native_and_split(ids)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .collect()
    }
}

impl Tokenizer for BpeTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pieces(text)
            .into_iter()
            .enumerate()
            .map(|(position, piece)| Token::new(piece, position).with_token_type(TokenType::Subword))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "bpe"
    }
}
