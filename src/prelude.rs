//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::catalog::{Catalog, MovieRecord};
pub use crate::engine::{Recommender, Request};
pub use crate::error::{RecomendarError, Result};
pub use crate::feedback::{FeedbackLog, FeedbackRecord};
pub use crate::index::{FeatureIndex, TitleIndex};
pub use crate::text::SimilarityMatrix;
