//! # Jyutliu
//!
//! Facade crate for the Jyutliu corpus pipeline: curation
//! ([`jyutliu_core`]) and similarity indexing ([`jyutliu_index`]) behind
//! one dependency.
//!
//! ```rust
//! use jyutliu::{normalize, DialectClassifier, Lang};
//!
//! let classifier = DialectClassifier::with_default_mask().unwrap();
//! let line = normalize("  唔該晒  ");
//! assert_eq!(classifier.classify(&line), Lang::Yue);
//! ```

pub use jyutliu_core::{
    dedup_entries, has_cjk, has_latin, ingest_dir, normalize, parse_path, CorpusPaths,
    CoverageReport, CurateError, CuratedEntry, CuratedStore, DialectClassifier, DialectMask,
    IngestReport, Lang, SourceFormat,
};
pub use jyutliu_index::{
    build_matrix, search, IndexBuilder, IndexError, SearchHit, SentenceEncoder, TfidfAnalyzer,
    VectorIndex, VectorStore, INDEXABLE_LABELS,
};
