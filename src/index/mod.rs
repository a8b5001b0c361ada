//! Title and feature indexes built once over a loaded catalog.
//!
//! Both indexes are derived data: they must be rebuilt whenever the catalog
//! is reloaded (there are no incremental updates), and they are read-only
//! for their whole lifetime afterwards.

use std::collections::HashMap;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::{RecomendarError, Result};
use crate::primitives::{Matrix, Vector};
use crate::text::{SimilarityMatrix, TfidfVectorizer};

/// Vocabulary cap for the TF-IDF vectorizer.
pub const MAX_VOCABULARY: usize = 5000;

/// Lookup from normalized title to catalog row position.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::{Catalog, MovieRecord};
/// use recomendar::index::TitleIndex;
///
/// let catalog = Catalog::from_records(vec![
///     MovieRecord::new("Heat", ["Crime"], "one last score", "Michael Mann", 8.3, ""),
/// ]);
/// let titles = TitleIndex::build(&catalog);
///
/// assert_eq!(titles.position("  HEAT "), Some(0));
/// assert_eq!(titles.position("casino"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TitleIndex {
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    /// Build the index from a deduplicated catalog.
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        let positions = catalog
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.title.clone(), idx))
            .collect();

        Self { positions }
    }

    /// Row position for a title; the query is normalized (lower-cased,
    /// trimmed) before lookup.
    #[must_use]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(&title.trim().to_lowercase()).copied()
    }

    /// Number of indexed titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no titles are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// TF-IDF feature matrix plus the pairwise similarity matrix over the
/// whole catalog.
///
/// The vectorizer configuration is fixed: unigrams and bigrams, English
/// stop words excluded, vocabulary capped at [`MAX_VOCABULARY`] terms.
#[derive(Debug, Clone)]
pub struct FeatureIndex {
    features: Matrix<f64>,
    similarity: SimilarityMatrix,
}

impl FeatureIndex {
    /// Vectorize every movie's combined feature and compute the pairwise
    /// cosine similarity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::Index`] wrapping the cause when
    /// vectorization fails (empty catalog, empty vocabulary).
    pub fn build(catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecomendarError::Index {
                message: "catalog is empty".to_string(),
            });
        }

        let documents: Vec<String> = catalog.iter().map(|r| r.combined_feature()).collect();

        let mut vectorizer = TfidfVectorizer::new()
            .with_ngram_range(1, 2)
            .with_max_features(MAX_VOCABULARY)
            .with_stop_words_english();

        let features = vectorizer
            .fit_transform(&documents)
            .map_err(|e| RecomendarError::Index {
                message: e.to_string(),
            })?;

        let vectors: Vec<Vector<f64>> = (0..features.n_rows()).map(|i| features.row(i)).collect();
        let similarity =
            SimilarityMatrix::from_vectors(&vectors).map_err(|e| RecomendarError::Index {
                message: e.to_string(),
            })?;

        info!(
            movies = features.n_rows(),
            vocabulary = features.n_cols(),
            "feature index built"
        );

        Ok(Self {
            features,
            similarity,
        })
    }

    /// The TF-IDF feature matrix (movies × vocabulary terms).
    #[must_use]
    pub fn features(&self) -> &Matrix<f64> {
        &self.features
    }

    /// The pairwise similarity matrix.
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieRecord;

    fn small_catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new(
                "Heat",
                ["Action", "Crime"],
                "a thief plans one last score before retiring",
                "Michael Mann",
                8.3,
                "",
            ),
            MovieRecord::new(
                "Collateral",
                ["Action", "Thriller"],
                "a cab driver ferries a hitman between contracts",
                "Michael Mann",
                7.5,
                "",
            ),
            MovieRecord::new(
                "Paddington",
                ["Comedy", "Family"],
                "young bear looks around london searching home",
                "Paul King",
                8.1,
                "",
            ),
        ])
    }

    #[test]
    fn test_title_index_positions() {
        let catalog = small_catalog();
        let titles = TitleIndex::build(&catalog);

        assert_eq!(titles.len(), 3);
        assert_eq!(titles.position("heat"), Some(0));
        assert_eq!(titles.position("Collateral"), Some(1));
        assert_eq!(titles.position(" PADDINGTON  "), Some(2));
        assert_eq!(titles.position("casino"), None);
        assert_eq!(titles.position(""), None);
    }

    #[test]
    fn test_feature_index_dimensions() {
        let catalog = small_catalog();
        let index = FeatureIndex::build(&catalog).expect("build should succeed");

        assert_eq!(index.features().n_rows(), 3);
        assert_eq!(index.similarity().len(), 3);
    }

    #[test]
    fn test_similarity_diagonal_and_symmetry() {
        let catalog = small_catalog();
        let index = FeatureIndex::build(&catalog).expect("build should succeed");
        let sim = index.similarity();

        for i in 0..sim.len() {
            assert_eq!(sim.get(i, i), 1.0);
            for j in 0..sim.len() {
                assert_eq!(sim.get(i, j), sim.get(j, i));
            }
        }
    }

    #[test]
    fn test_shared_director_raises_similarity() {
        let catalog = small_catalog();
        let index = FeatureIndex::build(&catalog).expect("build should succeed");
        let sim = index.similarity();

        // Heat and Collateral share a genre token and a director;
        // Paddington shares nothing with Heat.
        assert!(sim.get(0, 1) > sim.get(0, 2));
    }

    #[test]
    fn test_empty_catalog_fails() {
        let catalog = Catalog::from_records(Vec::new());
        let err = FeatureIndex::build(&catalog).expect_err("empty catalog should fail");
        assert!(matches!(err, RecomendarError::Index { .. }));
        assert!(err.is_fatal());
    }
}
