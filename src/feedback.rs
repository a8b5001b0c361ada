//! Append-only feedback log.
//!
//! User feedback is persisted to a flat CSV file, one row per submission.
//! The recommendation core never reads this data; the only consumer beyond
//! the append path is [`FeedbackLog::average_rating`], which summarizes the
//! log for display.

use std::fs::OpenOptions;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{RecomendarError, Result};

/// One feedback submission.
///
/// # Examples
///
/// ```
/// use recomendar::feedback::FeedbackRecord;
///
/// let record = FeedbackRecord::new("Ada", "ada@example.com", 5, "Found three new favorites.");
/// assert_eq!(record.rating, 5);
/// assert!(!record.timestamp.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Submission time, `%Y-%m-%d %H:%M:%S` local time
    pub timestamp: String,
    /// Submitter name
    pub name: String,
    /// Submitter email
    pub email: String,
    /// Experience rating, 1-5
    pub rating: u8,
    /// Free-text comment
    pub comment: String,
}

impl FeedbackRecord {
    /// Create a record stamped with the current local time.
    #[must_use]
    pub fn new(name: &str, email: &str, rating: u8, comment: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            name: name.to_string(),
            email: email.to_string(),
            rating,
            comment: comment.to_string(),
        }
    }
}

/// Append-only CSV store for feedback records.
///
/// The header row is written once, when the file is created; every
/// subsequent append adds a single data row.
///
/// # Examples
///
/// ```no_run
/// use recomendar::feedback::{FeedbackLog, FeedbackRecord};
///
/// let log = FeedbackLog::new("feedback.csv");
/// log.append(&FeedbackRecord::new("Ada", "ada@example.com", 5, "Great picks."))
///     .expect("append should succeed");
/// ```
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    /// Create a log handle for `path`. The file itself is created lazily
    /// on first append.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Validate and append one record.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::InvalidFeedback`] when name, email, or
    /// comment is blank or the rating is outside 1-5, and I/O or CSV errors
    /// when the write fails.
    pub fn append(&self, record: &FeedbackRecord) -> Result<()> {
        validate(record)?;

        let exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!exists)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    /// Mean of all logged ratings, or `None` when the log is absent or
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing log cannot be read or parsed.
    pub fn average_rating(&self) -> Result<Option<f64>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut total = 0u64;
        let mut count = 0u64;
        for row in reader.deserialize::<FeedbackRecord>() {
            let record = row?;
            total += u64::from(record.rating);
            count += 1;
        }

        if count == 0 {
            Ok(None)
        } else {
            Ok(Some(total as f64 / count as f64))
        }
    }

    /// Path of the underlying CSV file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// Non-empty name/email/comment, rating within 1-5.
fn validate(record: &FeedbackRecord) -> Result<()> {
    if record.name.trim().is_empty() {
        return Err(RecomendarError::InvalidFeedback {
            message: "name must not be empty".to_string(),
        });
    }
    if record.email.trim().is_empty() {
        return Err(RecomendarError::InvalidFeedback {
            message: "email must not be empty".to_string(),
        });
    }
    if record.comment.trim().is_empty() {
        return Err(RecomendarError::InvalidFeedback {
            message: "comment must not be empty".to_string(),
        });
    }
    if !(1..=5).contains(&record.rating) {
        return Err(RecomendarError::InvalidFeedback {
            message: format!("rating must be between 1 and 5, got {}", record.rating),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(rating: u8) -> FeedbackRecord {
        FeedbackRecord::new("Ada", "ada@example.com", rating, "Found three new favorites.")
    }

    #[test]
    fn test_append_creates_file_with_header_once() -> Result<()> {
        let dir = tempdir().expect("temp dir should be created");
        let log = FeedbackLog::new(dir.path().join("feedback.csv"));

        log.append(&sample(5))?;
        log.append(&sample(3))?;

        let contents = std::fs::read_to_string(log.path())?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[0].starts_with("timestamp,name,email,rating,comment"));
        Ok(())
    }

    #[test]
    fn test_average_rating() -> Result<()> {
        let dir = tempdir().expect("temp dir should be created");
        let log = FeedbackLog::new(dir.path().join("feedback.csv"));

        assert_eq!(log.average_rating()?, None);

        log.append(&sample(4))?;
        log.append(&sample(2))?;
        assert_eq!(log.average_rating()?, Some(3.0));
        Ok(())
    }

    #[test]
    fn test_blank_fields_rejected() {
        let dir = tempdir().expect("temp dir should be created");
        let log = FeedbackLog::new(dir.path().join("feedback.csv"));

        let blank_name = FeedbackRecord::new("  ", "ada@example.com", 4, "fine");
        assert!(matches!(
            log.append(&blank_name),
            Err(RecomendarError::InvalidFeedback { .. })
        ));

        let blank_comment = FeedbackRecord::new("Ada", "ada@example.com", 4, "");
        assert!(matches!(
            log.append(&blank_comment),
            Err(RecomendarError::InvalidFeedback { .. })
        ));

        // Nothing was written
        assert!(!log.path().exists());
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let dir = tempdir().expect("temp dir should be created");
        let log = FeedbackLog::new(dir.path().join("feedback.csv"));

        assert!(log.append(&sample(0)).is_err());
        assert!(log.append(&sample(6)).is_err());
        assert!(log.append(&sample(1)).is_ok());
        assert!(log.append(&sample(5)).is_ok());
    }

    #[test]
    fn test_roundtrip_preserves_fields() -> Result<()> {
        let dir = tempdir().expect("temp dir should be created");
        let log = FeedbackLog::new(dir.path().join("feedback.csv"));

        let record = FeedbackRecord::new("Grace", "grace@example.com", 5, "Sharp, relevant picks");
        log.append(&record)?;

        let mut reader = csv::Reader::from_path(log.path())?;
        let rows: Vec<FeedbackRecord> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .map_err(RecomendarError::Csv)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], record);
        Ok(())
    }
}
