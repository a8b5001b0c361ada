//! Cosine similarity and the pairwise similarity matrix.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::cosine_similarity;
//! use recomendar::primitives::Vector;
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let v2 = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let sim = cosine_similarity(&v1, &v2).expect("cosine similarity should succeed");
//! assert!(sim > 0.9);
//! ```

use rayon::prelude::*;

use crate::error::RecomendarError;
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// Measures the angle between two vectors; with non-negative TF-IDF weights
/// the result lies in [0, 1], where 1 means identical direction and 0 means
/// no shared terms.
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// A zero vector is orthogonal to everything and yields 0.
///
/// # Errors
///
/// Returns an error if the vectors are empty or their lengths differ.
///
/// # Examples
///
/// ```
/// use recomendar::text::cosine_similarity;
/// use recomendar::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0]);
/// let sim = cosine_similarity(&v, &v).expect("cosine similarity should succeed");
/// assert!((sim - 1.0).abs() < 1e-12);
/// ```
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64, RecomendarError> {
    if a.len() != b.len() {
        return Err(RecomendarError::Other(
            "vectors must have the same length".to_string(),
        ));
    }

    if a.is_empty() {
        return Err(RecomendarError::Other(
            "vectors cannot be empty".to_string(),
        ));
    }

    let dot_product = a.dot(b);
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Square, symmetric matrix of pairwise cosine similarities, indexed by
/// catalog row position. Diagonal entries are exactly 1.0.
///
/// Built once at startup and shared read-only across requests. The build is
/// O(n²) in catalog size — the dominant scaling cost if the catalog grows
/// materially beyond its ~1000 rows.
///
/// # Examples
///
/// ```
/// use recomendar::text::SimilarityMatrix;
/// use recomendar::primitives::Vector;
///
/// let vectors = vec![
///     Vector::from_slice(&[1.0, 0.0]),
///     Vector::from_slice(&[0.0, 1.0]),
/// ];
///
/// let sim = SimilarityMatrix::from_vectors(&vectors).expect("build should succeed");
/// assert_eq!(sim.len(), 2);
/// assert_eq!(sim.get(0, 0), 1.0);
/// assert_eq!(sim.get(0, 1), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    inner: Matrix<f64>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise cosine similarity matrix.
    ///
    /// Rows are computed in parallel; entry (i, j) and entry (j, i) run the
    /// same arithmetic, so the result is exactly symmetric.
    ///
    /// # Errors
    ///
    /// Returns an error if `vectors` is empty or any pair of vectors has
    /// mismatched lengths.
    pub fn from_vectors(vectors: &[Vector<f64>]) -> Result<Self, RecomendarError> {
        if vectors.is_empty() {
            return Err(RecomendarError::Other(
                "cannot build a similarity matrix from zero vectors".to_string(),
            ));
        }

        let n = vectors.len();
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| -> Result<Vec<f64>, RecomendarError> {
                (0..n)
                    .map(|j| {
                        if i == j {
                            Ok(1.0)
                        } else {
                            cosine_similarity(&vectors[i], &vectors[j])
                        }
                    })
                    .collect()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let data: Vec<f64> = rows.into_iter().flatten().collect();
        let inner = Matrix::from_vec(n, n, data)
            .map_err(|e: &str| RecomendarError::Other(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Number of rows (equal to the number of movies indexed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.n_rows()
    }

    /// True when the matrix indexes no movies (never the case for a
    /// successfully built matrix).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.n_rows() == 0
    }

    /// Similarity between movie `i` and movie `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.inner.get(i, j)
    }

    /// One movie's similarity row against every movie in the catalog.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        self.inner.row_slice(i)
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
