//! Recommendation engine: mode dispatch, candidate scoring, and ranking.
//!
//! The engine is a pure function of its inputs: given the same catalog and
//! the same request it always returns the same ordered result list. Every
//! request-level failure is returned as a typed error with a displayable
//! message; nothing panics for any catalog the loader can produce.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::catalog::{Catalog, MovieRecord};
//! use recomendar::engine::{Recommender, Request};
//!
//! let catalog = Catalog::from_records(vec![
//!     MovieRecord::new("Heat", ["Action", "Crime"],
//!         "a thief plans one last score", "Michael Mann", 8.3, ""),
//!     MovieRecord::new("Collateral", ["Action", "Thriller"],
//!         "a cab driver ferries a hitman", "Michael Mann", 7.5, ""),
//!     MovieRecord::new("Paddington", ["Comedy", "Family"],
//!         "young bear searching london home", "Paul King", 8.1, ""),
//! ]);
//!
//! let recommender = Recommender::new(catalog).expect("index build should succeed");
//! let request = Request::GenreBased { genres: vec!["Action".to_string()] };
//! let results = recommender.recommend(&request, 2).expect("recommend should succeed");
//!
//! assert_eq!(results[0].title, "heat");
//! assert_eq!(results[1].title, "collateral");
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, MovieRecord};
use crate::error::{RecomendarError, Result};
use crate::index::{FeatureIndex, TitleIndex};
use crate::text::SimilarityMatrix;

/// Candidates rated above this earn a rating-proportional bonus.
const HIGH_RATING_THRESHOLD: f64 = 7.0;
/// Scale of the high-rating bonus (bonus × rating / 10).
const HIGH_RATING_BONUS: f64 = 0.5;
/// Candidates rated below this are strongly penalized.
const LOW_RATING_THRESHOLD: f64 = 6.5;
/// Multiplier applied to low-rated candidates.
const LOW_RATING_PENALTY: f64 = 0.01;
/// Additive bonus for sharing a genre token with the anchor.
const GENRE_OVERLAP_BONUS: f64 = 0.4;
/// Additive bonus for sharing a director with the anchor.
const DIRECTOR_MATCH_BONUS: f64 = 0.3;

/// A recommendation request; the three modes are mutually exclusive and
/// each carries exactly the parameters it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request {
    /// Rank by weighted similarity to an anchor movie.
    ItemBased {
        /// Anchor title; matched case-insensitively against the catalog
        title: String,
    },
    /// Highest-rated movies overlapping any of the requested genres.
    GenreBased {
        /// Requested genre tokens; matched case-insensitively
        genres: Vec<String>,
    },
    /// Highest-rated movies by one director.
    DirectorBased {
        /// Requested director; matched case-insensitively, exact
        director: String,
    },
}

/// The recommendation context: catalog, title index, and feature index,
/// built once and shared read-only by every request.
///
/// `Recommender` is `Send + Sync`; concurrent readers need no locking.
/// For process-wide at-most-once construction, wrap it in a
/// [`std::sync::OnceLock`]:
///
/// ```no_run
/// use std::sync::OnceLock;
/// use recomendar::engine::Recommender;
///
/// static RECOMMENDER: OnceLock<Recommender> = OnceLock::new();
///
/// let recommender = RECOMMENDER.get_or_init(|| {
///     Recommender::from_path("imdb_top_1000.csv").expect("startup should succeed")
/// });
/// ```
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    titles: TitleIndex,
    index: FeatureIndex,
}

impl Recommender {
    /// Build the engine over an already-loaded catalog, constructing both
    /// indexes eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::Index`] when the feature index cannot be
    /// built (empty catalog, empty vocabulary).
    pub fn new(catalog: Catalog) -> Result<Self> {
        let titles = TitleIndex::build(&catalog);
        let index = FeatureIndex::build(&catalog)?;

        Ok(Self {
            catalog,
            titles,
            index,
        })
    }

    /// Load the catalog from a CSV source and build the engine.
    ///
    /// # Errors
    ///
    /// Returns any loader error ([`RecomendarError::MissingSource`],
    /// [`RecomendarError::MissingColumn`], [`RecomendarError::Csv`]) or
    /// index build error. All of these are fatal: the engine never serves
    /// requests over a partially built context.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let catalog = Catalog::load_from_path(path)?;
        Self::new(catalog)
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The normalized-title lookup.
    #[must_use]
    pub fn title_index(&self) -> &TitleIndex {
        &self.titles
    }

    /// The pairwise similarity matrix.
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        self.index.similarity()
    }

    /// Rank and return the top `n` movies for a request.
    ///
    /// Any positive `n` is accepted; asking for more results than there are
    /// candidates returns every candidate without error. No partial results
    /// accompany an error.
    ///
    /// # Errors
    ///
    /// - `n == 0` is rejected.
    /// - [`RecomendarError::TitleNotFound`] when the item-based anchor is
    ///   not in the catalog.
    /// - [`RecomendarError::NoGenreSelected`] /
    ///   [`RecomendarError::NoDirectorSelected`] when the required
    ///   selection is missing.
    /// - [`RecomendarError::NoResults`] when a filter matches nothing.
    pub fn recommend(&self, request: &Request, n: usize) -> Result<Vec<MovieRecord>> {
        if n == 0 {
            return Err(RecomendarError::Other(
                "recommendation count must be positive".to_string(),
            ));
        }

        match request {
            Request::ItemBased { title } => self.recommend_item(title, n),
            Request::GenreBased { genres } => self.recommend_genre(genres, n),
            Request::DirectorBased { director } => self.recommend_director(director, n),
        }
    }

    /// Item-based mode: weighted cosine similarity against the anchor.
    fn recommend_item(&self, title: &str, n: usize) -> Result<Vec<MovieRecord>> {
        let normalized = title.trim().to_lowercase();
        let anchor_idx =
            self.titles
                .position(&normalized)
                .ok_or_else(|| RecomendarError::TitleNotFound {
                    title: normalized.clone(),
                })?;

        let anchor = &self.catalog.records()[anchor_idx];
        let anchor_genres = anchor.genre_set();
        let anchor_director = anchor.director.to_lowercase();
        let similarity = self.index.similarity();

        let mut scored: Vec<(usize, f64)> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(idx, candidate)| {
                let weight = adjusted_weight(&anchor_genres, &anchor_director, candidate);
                (idx, similarity.get(anchor_idx, idx) * weight)
            })
            .collect();

        // Stable sort: equal scores keep catalog row order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        debug!(anchor = %normalized, candidates = scored.len(), "item-based ranking");

        // The anchor is excluded by row identity, not by dropping the top
        // entry, so it can never slip into the results
        Ok(scored
            .into_iter()
            .filter(|&(idx, _)| idx != anchor_idx)
            .take(n)
            .map(|(idx, _)| self.catalog.records()[idx].clone())
            .collect())
    }

    /// Genre-based mode: rating-ranked movies overlapping the requested set.
    fn recommend_genre(&self, genres: &[String], n: usize) -> Result<Vec<MovieRecord>> {
        let wanted: HashSet<String> = genres
            .iter()
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty())
            .collect();

        if wanted.is_empty() {
            return Err(RecomendarError::NoGenreSelected);
        }

        let mut matches: Vec<&MovieRecord> = self
            .catalog
            .iter()
            .filter(|movie| movie.genre_set().intersection(&wanted).next().is_some())
            .collect();

        if matches.is_empty() {
            return Err(RecomendarError::NoResults);
        }

        sort_by_rating_then_title(&mut matches);
        Ok(matches.into_iter().take(n).cloned().collect())
    }

    /// Director-based mode: rating-ranked movies by one director.
    fn recommend_director(&self, director: &str, n: usize) -> Result<Vec<MovieRecord>> {
        let wanted = director.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(RecomendarError::NoDirectorSelected);
        }

        let mut matches: Vec<&MovieRecord> = self
            .catalog
            .iter()
            .filter(|movie| movie.director.to_lowercase() == wanted)
            .collect();

        if matches.is_empty() {
            return Err(RecomendarError::NoResults);
        }

        sort_by_rating_then_title(&mut matches);
        Ok(matches.into_iter().take(n).cloned().collect())
    }
}

/// Re-weighting applied to a candidate's raw similarity in item-based mode.
///
/// Rules, in order:
/// 1. rating above 7.0 adds `0.5 × rating / 10`
/// 2. rating below 6.5 multiplies the weight by 0.01
///    (so 6.5..=7.0 is a flat, unweighted band)
/// 3. any shared genre token with the anchor adds 0.4
/// 4. the same director as the anchor adds 0.3; movies with no recorded
///    director never match each other
fn adjusted_weight(
    anchor_genres: &HashSet<String>,
    anchor_director: &str,
    candidate: &MovieRecord,
) -> f64 {
    let mut weight = 1.0;

    if candidate.rating > HIGH_RATING_THRESHOLD {
        weight += HIGH_RATING_BONUS * (candidate.rating / 10.0);
    }
    if candidate.rating < LOW_RATING_THRESHOLD {
        weight *= LOW_RATING_PENALTY;
    }
    if candidate
        .genre_set()
        .intersection(anchor_genres)
        .next()
        .is_some()
    {
        weight += GENRE_OVERLAP_BONUS;
    }

    let candidate_director = candidate.director.to_lowercase();
    if !candidate_director.is_empty() && candidate_director == anchor_director {
        weight += DIRECTOR_MATCH_BONUS;
    }

    weight
}

/// Rating descending, then title ascending for equal ratings.
fn sort_by_rating_then_title(movies: &mut [&MovieRecord]) {
    movies.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
