//! TF-IDF vectorization of text documents.

use std::collections::{HashMap, HashSet};

use crate::error::RecomendarError;
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WhitespaceTokenizer;
use crate::text::Tokenizer;

/// TF-IDF vectorizer that converts text documents to a weighted term matrix.
///
/// TF-IDF (Term Frequency-Inverse Document Frequency) reflects how important
/// a term is to a document balanced against its rarity across the corpus.
///
/// **Formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of term t in document d
/// idf(t)      = ln((1 + N) / (1 + df(t))) + 1
/// where N = total documents, df(t) = documents containing term t
/// ```
///
/// The smoothed IDF keeps every fitted term at a strictly positive weight,
/// so a term present in every document still contributes to similarity.
///
/// # Examples
///
/// ```
/// use recomendar::text::TfidfVectorizer;
///
/// let docs = vec![
///     "the cat sat on the mat",
///     "the dog sat on the log",
/// ];
///
/// let mut vectorizer = TfidfVectorizer::new();
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(matrix.n_rows(), 2);
/// assert_eq!(matrix.n_cols(), 7); // the, cat, sat, on, mat, dog, log
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    /// Tokenizer splitting documents into tokens
    tokenizer: Box<dyn Tokenizer>,
    /// Term -> column position, learned by `fit`
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per vocabulary position
    idf: Vec<f64>,
    /// Lowercase tokens before counting
    lowercase: bool,
    /// Inclusive n-gram range, e.g. (1, 2) = unigrams and bigrams
    ngram_range: (usize, usize),
    /// Vocabulary size cap (most frequent terms kept, ties alphabetical)
    max_features: Option<usize>,
    /// Optional stop word exclusion
    stop_words: Option<StopWordsFilter>,
}

impl TfidfVectorizer {
    /// Create a new vectorizer with default settings: whitespace
    /// tokenization, lowercasing, unigrams only, unbounded vocabulary,
    /// no stop word filtering.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            lowercase: true,
            ngram_range: (1, 1),
            max_features: None,
            stop_words: None,
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether to lowercase tokens before counting.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set the inclusive n-gram range for feature extraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::TfidfVectorizer;
    ///
    /// let docs = vec!["the quick brown fox"];
    /// let mut vectorizer = TfidfVectorizer::new().with_ngram_range(1, 2);
    /// vectorizer.fit(&docs).expect("fit should succeed");
    ///
    /// // 4 unigrams + 3 bigrams
    /// assert_eq!(vectorizer.vocabulary_size(), 7);
    /// assert!(vectorizer.vocabulary().contains_key("quick_brown"));
    /// ```
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n.max(1), max_n.max(1));
        self
    }

    /// Cap the vocabulary at the `max_features` most frequent terms
    /// (ties broken alphabetically).
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::TfidfVectorizer;
    ///
    /// let docs = vec!["cat cat dog", "cat bird"];
    /// let mut vectorizer = TfidfVectorizer::new().with_max_features(2);
    /// vectorizer.fit(&docs).expect("fit should succeed");
    ///
    /// assert_eq!(vectorizer.vocabulary_size(), 2);
    /// assert!(vectorizer.vocabulary().contains_key("cat"));
    /// assert!(!vectorizer.vocabulary().contains_key("dog"));
    /// ```
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Exclude English stop words from the vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::TfidfVectorizer;
    ///
    /// let docs = vec!["the cat", "a dog"];
    /// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    /// vectorizer.fit(&docs).expect("fit should succeed");
    ///
    /// assert_eq!(vectorizer.vocabulary_size(), 2); // cat, dog
    /// ```
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Exclude custom stop words from the vocabulary.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Tokenize one document: split, lowercase, drop stop words.
    fn prepare_tokens(&self, text: &str) -> Result<Vec<String>, RecomendarError> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect())
    }

    /// Generate n-grams over prepared tokens, joined with `_`.
    fn ngrams(&self, tokens: &[String]) -> Vec<String> {
        let mut terms = Vec::new();
        for n in self.ngram_range.0..=self.ngram_range.1 {
            for ngram in tokens.windows(n) {
                terms.push(ngram.join("_"));
            }
        }
        terms
    }

    /// Learn vocabulary and IDF weights from documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the document collection is empty or if no term
    /// survives stop word filtering.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<(), RecomendarError> {
        if documents.is_empty() {
            return Err(RecomendarError::Other(
                "cannot fit on an empty document collection".to_string(),
            ));
        }

        let n_docs = documents.len();
        let mut term_freq: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.prepare_tokens(doc.as_ref())?;
            let mut doc_terms: HashSet<String> = HashSet::new();

            for term in self.ngrams(&tokens) {
                *term_freq.entry(term.clone()).or_insert(0) += 1;
                doc_terms.insert(term);
            }

            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Most frequent terms first, alphabetical among equals
        let mut sorted_terms: Vec<(String, usize)> = term_freq.into_iter().collect();
        sorted_terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        if let Some(max_features) = self.max_features {
            sorted_terms.truncate(max_features);
        }

        if sorted_terms.is_empty() {
            return Err(RecomendarError::Other(
                "vocabulary is empty after tokenization and stop word filtering".to_string(),
            ));
        }

        self.vocabulary = sorted_terms
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        let mut idf = vec![0.0; self.vocabulary.len()];
        for (term, &idx) in &self.vocabulary {
            let df = doc_freq.get(term).copied().unwrap_or(0);
            idf[idx] = ((1 + n_docs) as f64 / (1 + df) as f64).ln() + 1.0;
        }
        self.idf = idf;

        Ok(())
    }

    /// Transform documents to a TF-IDF matrix using the learned vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if `fit` has not been called or if the documents
    /// are empty.
    pub fn transform<S: AsRef<str>>(
        &self,
        documents: &[S],
    ) -> Result<Matrix<f64>, RecomendarError> {
        if documents.is_empty() {
            return Err(RecomendarError::Other(
                "cannot transform an empty document collection".to_string(),
            ));
        }

        if self.vocabulary.is_empty() {
            return Err(RecomendarError::Other(
                "vocabulary is empty; call fit() first".to_string(),
            ));
        }

        let n_docs = documents.len();
        let vocab_size = self.vocabulary.len();
        let mut data = vec![0.0; n_docs * vocab_size];

        for (doc_idx, doc) in documents.iter().enumerate() {
            let tokens = self.prepare_tokens(doc.as_ref())?;

            for term in self.ngrams(&tokens) {
                if let Some(&term_idx) = self.vocabulary.get(&term) {
                    data[doc_idx * vocab_size + term_idx] += 1.0;
                }
            }

            for term_idx in 0..vocab_size {
                data[doc_idx * vocab_size + term_idx] *= self.idf[term_idx];
            }
        }

        Matrix::from_vec(n_docs, vocab_size, data)
            .map_err(|e: &str| RecomendarError::Other(e.to_string()))
    }

    /// Learn vocabulary from documents and transform them in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transformation fails.
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<Matrix<f64>, RecomendarError> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The learned term -> column mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// The learned vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The learned IDF weights, one per vocabulary position.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
