use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or querying the vector index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The embedding model files could not be loaded.
    #[error("failed to load embedding model: {0}")]
    ModelLoad(String),

    /// Encoding a text through the embedding model failed.
    #[error("encoding error: {0}")]
    Encode(String),

    /// Candle ML framework error.
    #[error("ML inference error: {0}")]
    Candle(String),

    /// The vector store the query runs against does not exist.
    #[error("vector store not found at {path:?}; run indexing first")]
    MissingIndex {
        /// The path that was expected to hold the vector store.
        path: PathBuf,
    },

    /// No entries survived the label filter; nothing to index.
    #[error("curated store has no indexable entries")]
    EmptyCorpus,

    /// The corpus produced no vocabulary terms (all texts too short to tokenize).
    #[error("corpus produced an empty vocabulary")]
    EmptyVocabulary,

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Pattern(#[from] regex::Error),

    /// Serialization of a persisted artifact failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An underlying filesystem operation failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = IndexError::EmptyCorpus;
        assert_eq!(err.to_string(), "curated store has no indexable entries");

        let err = IndexError::MissingIndex {
            path: PathBuf::from("data/vectors/vector.json"),
        };
        assert!(err.to_string().contains("vector.json"));
        assert!(err.to_string().contains("run indexing first"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IndexError>();
    }
}
