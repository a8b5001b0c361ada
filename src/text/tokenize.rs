//! Tokenization for text preprocessing.

use super::Tokenizer;
use crate::error::RecomendarError;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// The catalog loader has already stripped punctuation from descriptions, so
/// splitting on whitespace is all the segmentation this pipeline needs.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("two lonely hitmen").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["two", "lonely", "hitmen"]);
///
/// // Collapses runs of whitespace
/// let tokens = tokenizer.tokenize("foo   bar\n\tbaz").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["foo", "bar", "baz"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, RecomendarError> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}
