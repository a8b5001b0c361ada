//! Recomendar: content-based movie recommendations in pure Rust.
//!
//! Recomendar loads a static movie catalog (~1000 titles), builds TF-IDF
//! features over each movie's genres, description, and director, precomputes
//! the pairwise cosine similarity matrix, and ranks movies for three request
//! modes: similarity to an anchor title, genre preference, and director
//! preference. Item-based scores are re-weighted with rating, genre-overlap,
//! and director-match heuristics.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
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
//! // Build once; serve any number of concurrent read-only requests.
//! let recommender = Recommender::new(catalog).expect("index build should succeed");
//!
//! let results = recommender
//!     .recommend(&Request::ItemBased { title: "Heat".to_string() }, 2)
//!     .expect("recommend should succeed");
//!
//! assert_eq!(results[0].title, "collateral");
//! assert!(results.iter().all(|r| r.title != "heat"));
//! ```
//!
//! In production the catalog comes from the IMDb top-1000 CSV export:
//!
//! ```no_run
//! use recomendar::prelude::*;
//!
//! let recommender = Recommender::from_path("imdb_top_1000.csv")
//!     .expect("startup should succeed");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Dense Vector and Matrix types
//! - [`text`]: Tokenization, stop words, TF-IDF, cosine similarity
//! - [`catalog`]: Catalog source loading and normalized records
//! - [`index`]: Title lookup and the precomputed feature/similarity index
//! - [`engine`]: Request modes, scoring, and ranking
//! - [`feedback`]: Append-only feedback log

pub mod catalog;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod index;
pub mod prelude;
pub mod primitives;
pub mod text;

pub use catalog::{Catalog, MovieRecord};
pub use engine::{Recommender, Request};
pub use error::{RecomendarError, Result};
