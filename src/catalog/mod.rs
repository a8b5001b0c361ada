//! Movie catalog: source loading, field cleaning, and normalized records.
//!
//! The loader reads the tabular source file once, projects it to the
//! required columns, normalizes titles and descriptions, deduplicates
//! titles (first occurrence wins), and produces an immutable [`Catalog`]
//! shared read-only by every request.
//!
//! # Quick Start
//!
//! ```no_run
//! use recomendar::catalog::Catalog;
//!
//! let catalog = Catalog::load_from_path("imdb_top_1000.csv").expect("catalog should load");
//! println!("{} movies", catalog.len());
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{RecomendarError, Result};

/// Columns the catalog source file must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Series_Title",
    "Genre",
    "Overview",
    "Director",
    "IMDB_Rating",
    "Poster_Link",
];

/// Literal missing-value sentinel used by the source data.
const MISSING_SENTINEL: &str = "\\N";

/// One movie after cleaning and normalization.
///
/// Titles are lower-cased and trimmed; they are the deduplication key and
/// unique across a loaded catalog. Descriptions are lower-cased with
/// punctuation stripped. Ratings are always finite, with missing source
/// values coerced to 0.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::MovieRecord;
///
/// let movie = MovieRecord::new(
///     "Heat",
///     ["Action", "Crime"],
///     "a thief plans one last score",
///     "Michael Mann",
///     8.3,
///     "",
/// );
/// assert_eq!(movie.genres_display(), "Action | Crime");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Normalized (lower-case, trimmed) title
    pub title: String,
    /// Ordered genre tokens, e.g. `["Action", "Crime"]`
    pub genres: Vec<String>,
    /// Lower-cased description with punctuation stripped
    pub description: String,
    /// Director name; may be empty
    pub director: String,
    /// Rating in [0, 10]; 0 when the source value is missing
    pub rating: f64,
    /// Poster URL; may be empty
    pub poster_url: String,
}

impl MovieRecord {
    /// Create a record from raw parts. Field normalization (title casing,
    /// description cleanup, rating defaults) is applied when the record
    /// enters a [`Catalog`].
    pub fn new<I, S>(
        title: &str,
        genres: I,
        description: &str,
        director: &str,
        rating: f64,
        poster_url: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title: title.to_string(),
            genres: genres
                .into_iter()
                .map(|g| g.as_ref().to_string())
                .collect(),
            description: description.to_string(),
            director: director.to_string(),
            rating,
            poster_url: poster_url.to_string(),
        }
    }

    /// Genres rendered pipe-delimited for display, e.g. `"Action | Crime"`.
    #[must_use]
    pub fn genres_display(&self) -> String {
        self.genres.join(" | ")
    }

    /// Combined text feature fed to the vectorizer: genres, description,
    /// and director concatenated. Derived on demand so it can never drift
    /// from the fields it is built from.
    #[must_use]
    pub fn combined_feature(&self) -> String {
        format!(
            "{} {} {}",
            self.genres.join(" "),
            self.description,
            self.director
        )
    }

    /// Lower-cased genre token set, for case-insensitive overlap checks.
    #[must_use]
    pub fn genre_set(&self) -> HashSet<String> {
        self.genres.iter().map(|g| g.to_lowercase()).collect()
    }
}

/// Immutable, deduplicated collection of movies.
///
/// Built once at startup (or from in-memory records in tests) and shared
/// read-only; no request ever mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    /// Load and normalize the catalog from a CSV source file.
    ///
    /// # Errors
    ///
    /// - [`RecomendarError::MissingSource`] if the file is absent.
    /// - [`RecomendarError::MissingColumn`] if a required column is absent.
    /// - [`RecomendarError::Csv`] if the file cannot be parsed.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecomendarError::MissingSource {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
            positions[slot] = headers
                .iter()
                .position(|h| h == *column)
                .ok_or_else(|| RecomendarError::MissingColumn {
                    column: (*column).to_string(),
                })?;
        }
        let [title_col, genre_col, overview_col, director_col, rating_col, poster_col] = positions;

        let mut raw = Vec::new();
        for row in reader.records() {
            let row = row?;
            let field = |idx: usize| clean_field(row.get(idx).unwrap_or(""));

            raw.push(MovieRecord {
                title: field(title_col),
                genres: parse_genres(&field(genre_col)),
                description: field(overview_col),
                director: field(director_col),
                rating: parse_rating(&field(rating_col)),
                poster_url: field(poster_col),
            });
        }

        let catalog = Self::from_records(raw);
        info!(
            movies = catalog.len(),
            path = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from in-memory records, applying the same
    /// normalization and deduplication as the file loader: titles are
    /// lower-cased and trimmed, descriptions lower-cased with punctuation
    /// stripped, non-finite ratings coerced to 0, duplicate titles dropped
    /// (first occurrence wins).
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::catalog::{Catalog, MovieRecord};
    ///
    /// let catalog = Catalog::from_records(vec![
    ///     MovieRecord::new("  Heat ", ["Crime"], "One last score.", "Michael Mann", 8.3, ""),
    ///     MovieRecord::new("HEAT", ["Crime"], "duplicate", "Someone Else", 1.0, ""),
    /// ]);
    ///
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.records()[0].title, "heat");
    /// assert_eq!(catalog.records()[0].description, "one last score");
    /// ```
    #[must_use]
    pub fn from_records(raw: Vec<MovieRecord>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut records = Vec::with_capacity(raw.len());
        let mut duplicates = 0usize;

        for mut record in raw {
            record.title = record.title.trim().to_lowercase();
            if !seen.insert(record.title.clone()) {
                duplicates += 1;
                continue;
            }

            record.description = normalize_description(&record.description);
            record.genres = record
                .genres
                .into_iter()
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .collect();
            if !record.rating.is_finite() {
                record.rating = 0.0;
            }

            records.push(record);
        }

        if duplicates > 0 {
            debug!(duplicates, "duplicate titles dropped");
        }

        Self { records }
    }

    /// Number of movies in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in source order.
    #[must_use]
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// One record by row position.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&MovieRecord> {
        self.records.get(idx)
    }

    /// Iterator over records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.iter()
    }

    /// All titles, sorted; selection UIs list these.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.records.iter().map(|r| r.title.as_str()).collect();
        titles.sort_unstable();
        titles
    }

    /// Distinct genre tokens across the catalog, sorted.
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        let unique: HashSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.genres.iter().map(String::as_str))
            .collect();
        let mut genres: Vec<String> = unique.into_iter().map(ToString::to_string).collect();
        genres.sort_unstable();
        genres
    }

    /// Distinct non-empty directors across the catalog, sorted.
    #[must_use]
    pub fn directors(&self) -> Vec<&str> {
        let unique: HashSet<&str> = self
            .records
            .iter()
            .map(|r| r.director.as_str())
            .filter(|d| !d.is_empty())
            .collect();
        let mut directors: Vec<&str> = unique.into_iter().collect();
        directors.sort_unstable();
        directors
    }
}

/// Map the missing-value sentinel to an empty string.
fn clean_field(raw: &str) -> String {
    if raw == MISSING_SENTINEL {
        String::new()
    } else {
        raw.to_string()
    }
}

/// Comma-delimited genre field -> ordered token list.
fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Rating field -> finite f64, defaulting to 0 for missing or
/// unparseable values.
fn parse_rating(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .unwrap_or(0.0)
}

/// Lower-case and keep only alphanumerics and whitespace.
fn normalize_description(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
