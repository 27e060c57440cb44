// Tokenization for TF-IDF vectorization.
//
// Documents are lowercased and split on the token pattern `\b\w\w+\b` —
// runs of two or more word characters. Single-letter tokens and punctuation
// are discarded. Stop-word removal is optional and off by default; when
// enabled it uses the English list from the stop-words crate.

use anyhow::{Context, Result};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Token pattern: two or more word characters, matched on the lowercased text.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Splits documents into lowercase tokens, optionally dropping stop words.
pub struct Tokenizer {
    pattern: Regex,
    stop_words: Option<Vec<String>>,
}

impl Tokenizer {
    /// Build a tokenizer. With `remove_stop_words`, English stop words are
    /// filtered out after tokenization.
    pub fn new(remove_stop_words: bool) -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN).context("Failed to compile token pattern")?;
        let stop_words = remove_stop_words.then(|| get(LANGUAGE::English));
        Ok(Self {
            pattern,
            stop_words,
        })
    }

    /// Tokenize a single document into lowercase terms.
    pub fn tokenize(&self, document: &str) -> Vec<String> {
        let lower = document.to_lowercase();
        self.pattern
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .filter(|token| match &self.stop_words {
                Some(stops) => !stops.iter().any(|s| s == token),
                None => true,
            })
            .collect()
    }
}
