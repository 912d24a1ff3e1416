use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while curating a corpus.
#[derive(Debug, Error)]
pub enum CurateError {
    /// A recognized source file (or the output store) could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A tabular source produced a malformed record.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The curated store could not be serialized or deserialized.
    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The curated store is absent; ingestion has to run first.
    #[error("curated store not found at {path:?}; run ingestion first")]
    MissingCurated {
        /// Where the store was expected.
        path: PathBuf,
    },

    /// The dialect mask pattern failed to compile (should not happen,
    /// mask tokens are escaped before compilation).
    #[error("dialect mask pattern error: {0}")]
    MaskPattern(#[from] regex::Error),

    /// A dialect mask was built from zero tokens.
    #[error("dialect mask contains no tokens")]
    EmptyMask,
}

/// Result type alias for curation operations.
pub type Result<T> = std::result::Result<T, CurateError>;
