//! Text processing for the recommendation pipeline.
//!
//! This module turns free text into comparable numeric features:
//! - Whitespace tokenization
//! - English stop word filtering
//! - TF-IDF vectorization (unigrams + bigrams, capped vocabulary)
//! - Cosine similarity and the full pairwise similarity matrix
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::TfidfVectorizer;
//!
//! let docs = vec!["drama crime heat", "drama thriller collateral"];
//! let mut vectorizer = TfidfVectorizer::new();
//! let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//! assert_eq!(matrix.n_rows(), 2);
//! ```

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::RecomendarError;

/// Trait for tokenizers that split text into tokens.
pub trait Tokenizer {
    /// Split `text` into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, RecomendarError>;
}

pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use stopwords::{StopWordsFilter, ENGLISH_STOP_WORDS};
pub use tokenize::WhitespaceTokenizer;
pub use vectorize::TfidfVectorizer;
