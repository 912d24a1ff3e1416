//! # Jyutliu Index
//!
//! Similarity indexing and retrieval over a curated Cantonese corpus.
//! Prefers dense sentence embeddings (candle, local model files) and
//! falls back to a sparse TF-IDF matrix when no model is available, so
//! an index can always be built. Cosine top-k search runs against either
//! variant.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use jyutliu_core::{CuratedEntry, CuratedStore, Lang};
//! use jyutliu_index::{search, IndexBuilder};
//!
//! # fn main() -> jyutliu_index::Result<()> {
//! let curated = CuratedStore::new(vec![
//!     CuratedEntry::new("聽日 得閒 飲茶", Lang::Yue, "a.srt"),
//!     CuratedEntry::new("今日 天氣 好好", Lang::Yue, "a.srt"),
//! ]);
//!
//! // Without local model files the builder falls back to TF-IDF.
//! let store = IndexBuilder::new(Path::new("models/embedding")).build(&curated)?;
//! let hits = search(&store, None, "飲茶", 1)?;
//! assert_eq!(hits[0].text, "聽日 得閒 飲茶");
//! # Ok(())
//! # }
//! ```
pub mod builder;
pub mod embed;
pub mod error;
pub mod search;
pub mod store;
pub mod tfidf;

// Re-export primary API
pub use builder::{IndexBuilder, INDEXABLE_LABELS};
pub use embed::SentenceEncoder;
pub use error::{IndexError, Result};
pub use search::{search, SearchHit};
pub use store::{VectorIndex, VectorStore};
pub use tfidf::{build_matrix, TfidfAnalyzer};
