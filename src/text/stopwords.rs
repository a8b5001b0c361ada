//! Stop word filtering for text preprocessing.
//!
//! Common English words carry little signal for similarity between movie
//! descriptions, so the vectorizer drops them before building its
//! vocabulary.

use std::collections::HashSet;

/// English stop words, following the usual NLTK/scikit-learn lists.
///
/// # Examples
///
/// ```
/// use recomendar::text::ENGLISH_STOP_WORDS;
///
/// assert!(ENGLISH_STOP_WORDS.contains(&"the"));
/// assert!(ENGLISH_STOP_WORDS.contains(&"and"));
/// assert!(!ENGLISH_STOP_WORDS.contains(&"heist"));
/// ```
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // question words
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "down",
    "during", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "through", "throughout", "to", "toward", "under",
    "underneath", "until", "up", "upon", "with", "within", "without",
    // conjunctions
    "and", "as", "because", "but", "if", "or", "since", "so", "than", "that", "though",
    "unless", "while",
    // auxiliary verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "would", "should", "could", "ought", "can",
    "may", "might", "must", "will", "shall",
    // determiners and quantifiers
    "all", "any", "both", "each", "every", "few", "more", "most", "much", "neither",
    "no", "none", "not", "one", "other", "same", "several", "some", "such", "very",
    "too", "only", "own", "then", "there", "these", "this", "those", "just", "now",
    "here",
    // frequent fillers
    "again", "also", "another", "back", "even", "ever", "get", "give", "go", "got",
    "made", "make", "say", "see", "take", "way",
];

/// Stop words filter with O(1) case-insensitive membership checks.
///
/// # Examples
///
/// ```
/// use recomendar::text::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("The"));
/// assert!(!filter.is_stop_word("detective"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored lowercase for case-insensitive matching
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words (lowercased on insertion).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the default English stop words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_membership() {
        let filter = StopWordsFilter::english();
        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("and"));
        assert!(filter.is_stop_word("with"));
        assert!(!filter.is_stop_word("drama"));
        assert!(!filter.is_stop_word("nolan"));
    }

    #[test]
    fn test_case_insensitive() {
        let filter = StopWordsFilter::english();
        assert!(filter.is_stop_word("The"));
        assert!(filter.is_stop_word("AND"));
    }

    #[test]
    fn test_custom_words() {
        let filter = StopWordsFilter::new(vec!["Foo", "bar"]);
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stop_word("foo"));
        assert!(filter.is_stop_word("BAR"));
        assert!(!filter.is_stop_word("baz"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopWordsFilter::new(Vec::<String>::new());
        assert!(filter.is_empty());
        assert!(!filter.is_stop_word("the"));
    }

    #[test]
    fn test_english_size() {
        let filter = StopWordsFilter::english();
        assert!(filter.len() > 100);
        assert!(!filter.is_empty());
    }
}
