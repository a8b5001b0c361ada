//! Error types for recommendation operations.
//!
//! Startup failures (missing source, schema violations, index build faults)
//! are fatal; request-level failures (unknown title, empty selection, empty
//! result set) are recoverable and carry a human-readable message for the
//! caller to display.

use std::fmt;
use std::path::PathBuf;

/// Main error type for recommendation operations.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::TitleNotFound {
///     title: "the matrix".to_string(),
/// };
/// assert!(err.to_string().contains("not found"));
/// assert!(!err.is_fatal());
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Catalog source file is absent.
    MissingSource {
        /// Path that was probed
        path: PathBuf,
    },

    /// A required column is absent from the catalog source header.
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// Feature vectorization or similarity matrix construction failed.
    Index {
        /// Underlying cause
        message: String,
    },

    /// Item-based anchor title is not present in the catalog.
    TitleNotFound {
        /// Normalized title that was looked up
        title: String,
    },

    /// Genre-based request carried no usable genre.
    NoGenreSelected,

    /// Director-based request carried no director.
    NoDirectorSelected,

    /// A filter produced an empty result set.
    NoResults,

    /// Feedback entry failed validation.
    InvalidFeedback {
        /// Validation failure description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// CSV read/write error.
    Csv(csv::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::MissingSource { path } => {
                write!(f, "catalog source not found: {}", path.display())
            }
            RecomendarError::MissingColumn { column } => {
                write!(f, "catalog source missing required column: {column}")
            }
            RecomendarError::Index { message } => {
                write!(f, "feature index build failed: {message}")
            }
            RecomendarError::TitleNotFound { title } => {
                write!(f, "movie not found in catalog: {title}")
            }
            RecomendarError::NoGenreSelected => {
                write!(f, "select at least one genre")
            }
            RecomendarError::NoDirectorSelected => {
                write!(f, "select a director")
            }
            RecomendarError::NoResults => {
                write!(f, "no movies matched the request")
            }
            RecomendarError::InvalidFeedback { message } => {
                write!(f, "invalid feedback: {message}")
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
            RecomendarError::Csv(e) => write!(f, "CSV error: {e}"),
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            RecomendarError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl From<csv::Error> for RecomendarError {
    fn from(err: csv::Error) -> Self {
        RecomendarError::Csv(err)
    }
}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Whether this error aborts startup (as opposed to a recoverable
    /// per-request failure the caller surfaces as a message).
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::error::RecomendarError;
    ///
    /// assert!(RecomendarError::MissingColumn { column: "Genre".into() }.is_fatal());
    /// assert!(!RecomendarError::NoResults.is_fatal());
    /// ```
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RecomendarError::MissingSource { .. }
                | RecomendarError::MissingColumn { .. }
                | RecomendarError::Index { .. }
                | RecomendarError::Io(_)
                | RecomendarError::Csv(_)
        )
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_display() {
        let err = RecomendarError::MissingSource {
            path: PathBuf::from("imdb_top_1000.csv"),
        };
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("imdb_top_1000.csv"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = RecomendarError::MissingColumn {
            column: "IMDB_Rating".to_string(),
        };
        assert!(err.to_string().contains("required column"));
        assert!(err.to_string().contains("IMDB_Rating"));
    }

    #[test]
    fn test_title_not_found_display() {
        let err = RecomendarError::TitleNotFound {
            title: "the matrix".to_string(),
        };
        assert!(err.to_string().contains("the matrix"));
    }

    #[test]
    fn test_selection_errors_display() {
        assert!(RecomendarError::NoGenreSelected.to_string().contains("genre"));
        assert!(RecomendarError::NoDirectorSelected
            .to_string()
            .contains("director"));
        assert!(RecomendarError::NoResults.to_string().contains("no movies"));
    }

    #[test]
    fn test_from_str() {
        let err: RecomendarError = "test error".into();
        assert!(matches!(err, RecomendarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RecomendarError = io_err.into();
        assert!(matches!(err, RecomendarError::Io(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_fatal_split() {
        assert!(RecomendarError::MissingSource {
            path: PathBuf::from("x.csv")
        }
        .is_fatal());
        assert!(RecomendarError::Index {
            message: "empty corpus".into()
        }
        .is_fatal());
        assert!(!RecomendarError::TitleNotFound { title: "x".into() }.is_fatal());
        assert!(!RecomendarError::NoGenreSelected.is_fatal());
        assert!(!RecomendarError::InvalidFeedback {
            message: "empty name".into()
        }
        .is_fatal());
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(RecomendarError::Io(io_err).source().is_some());
        assert!(RecomendarError::NoResults.source().is_none());
    }
}
