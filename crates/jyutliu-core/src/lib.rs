//! # Jyutliu Core
//!
//! The curation half of the Jyutliu corpus pipeline. Turns a directory of
//! raw subtitle/text/CSV files into a deduplicated, dialect-labelled
//! curated store and reports on its label coverage.
//!
//! ## Quick Start
//!
//! ```rust
//! use jyutliu_core::classify::DialectClassifier;
//! use jyutliu_core::normalize::normalize;
//! use jyutliu_core::types::Lang;
//!
//! let classifier = DialectClassifier::with_default_mask().unwrap();
//!
//! let line = normalize("- 冇问题嘅   多谢");
//! assert_eq!(line, "冇问题嘅 多谢");
//! assert_eq!(classifier.classify(&line), Lang::Yue);
//! ```
pub mod classify;
pub mod config;
pub mod dedup;
pub mod error;
pub mod ingest;
pub mod mask;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod store;
pub mod types;

// Re-export primary API
pub use classify::{has_cjk, has_latin, DialectClassifier};
pub use config::CorpusPaths;
pub use dedup::dedup_entries;
pub use error::{CurateError, Result};
pub use ingest::{ingest_dir, IngestReport};
pub use mask::DialectMask;
pub use normalize::normalize;
pub use parser::{parse_path, SourceFormat};
pub use report::CoverageReport;
pub use types::{CuratedEntry, CuratedStore, Lang};
