//! Stemmer implementations.
//!
//! Each stemmer lowercases its input before applying its rules, so callers can
//! pass tokens straight from a tokenizer.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod lancaster;
pub mod porter;
pub mod snowball;

// Re-export stemmers
pub use lancaster::LancasterStemmer;
pub use porter::PorterStemmer;
pub use snowball::SnowballStemmer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stemmers_are_independent() {
        let stemmers: Vec<Box<dyn Stemmer>> = vec![
            Box::new(PorterStemmer::new()),
            Box::new(SnowballStemmer::english()),
            Box::new(LancasterStemmer::new()),
        ];

        let names: Vec<&str> = stemmers.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["porter", "snowball", "lancaster"]);

        for stemmer in &stemmers {
            assert_eq!(stemmer.stem("Running"), "run", "{}", stemmer.name());
        }
    }
}
