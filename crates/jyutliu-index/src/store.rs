//! Persisted vector store.
//!
//! The store bundles the indexed entries with whichever index variant the
//! build produced, so a query run needs no access to the curated store.
//! It is a cache artifact: anything here can be rebuilt from the curated
//! store at any time.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use jyutliu_core::CuratedEntry;

use crate::error::{IndexError, Result};

/// One persisted similarity index plus the entries it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorStore {
    /// Human-readable build strategy, e.g. `"TF-IDF"`.
    pub built_with: String,
    /// Number of indexed entries; always `items.len()`.
    pub count: usize,
    /// The indexed entries, in curated-store order.
    pub items: Vec<CuratedEntry>,
    /// The index itself.
    pub index: VectorIndex,
}

/// Index payload, tagged by strategy on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VectorIndex {
    /// Dense sentence-embedding matrix, one unit-norm row per entry.
    Sbert {
        /// Identifier of the model that produced the embeddings.
        model: String,
        /// Row-major embedding matrix.
        embeddings: Vec<Vec<f32>>,
    },
    /// Sparse TF-IDF matrix in compressed sparse-row form.
    Tfidf {
        /// Feature string to column index; keys sort in column order.
        vocab: BTreeMap<String, usize>,
        /// CSR row pointer, length `count + 1`.
        indptr: Vec<usize>,
        /// CSR column indices, sorted within each row.
        indices: Vec<usize>,
        /// CSR nonzero values.
        data: Vec<f32>,
    },
}

impl VectorStore {
    /// Writes the store to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(
            path = %path.display(),
            items = self.count,
            strategy = %self.built_with,
            "vector store written"
        );
        Ok(())
    }

    /// Loads a store previously written by [`VectorStore::save_to`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IndexError::MissingIndex {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        let store = serde_json::from_str(&json)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyutliu_core::Lang;

    fn entry(text: &str) -> CuratedEntry {
        CuratedEntry::new(text, Lang::Yue, "a.srt")
    }

    #[test]
    fn tfidf_wire_shape() {
        let mut vocab = BTreeMap::new();
        vocab.insert("你好".to_string(), 0);

        let store = VectorStore {
            built_with: "TF-IDF".to_string(),
            count: 1,
            items: vec![entry("你好")],
            index: VectorIndex::Tfidf {
                vocab,
                indptr: vec![0, 1],
                indices: vec![0],
                data: vec![1.0],
            },
        };

        let json: serde_json::Value = serde_json::to_value(&store).unwrap();
        assert_eq!(json["built_with"], "TF-IDF");
        assert_eq!(json["index"]["type"], "tfidf");
        assert_eq!(json["index"]["indptr"][1], 1);
        assert_eq!(json["index"]["vocab"]["你好"], 0);
    }

    #[test]
    fn sbert_wire_shape_roundtrips() {
        let store = VectorStore {
            built_with: "sbert (test-model)".to_string(),
            count: 2,
            items: vec![entry("a"), entry("b")],
            index: VectorIndex::Sbert {
                model: "test-model".to_string(),
                embeddings: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            },
        };

        let json = serde_json::to_string(&store).unwrap();
        assert!(json.contains("\"type\":\"sbert\""));

        let back: VectorStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors").join("vector.json");

        let store = VectorStore {
            built_with: "TF-IDF".to_string(),
            count: 0,
            items: vec![],
            index: VectorIndex::Tfidf {
                vocab: BTreeMap::new(),
                indptr: vec![0],
                indices: vec![],
                data: vec![],
            },
        };
        store.save_to(&path).unwrap();

        let back = VectorStore::load_from(&path).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn load_missing_is_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        let err = VectorStore::load_from(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, IndexError::MissingIndex { .. }));
    }
}
