//! Index build orchestration with automatic strategy fallback.
//!
//! Strategy order is fixed: try the sentence-embedding encoder, and on any
//! load or encode failure fall back to the sparse TF-IDF matrix. The
//! persisted store always records which strategy produced it.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use jyutliu_core::{CuratedEntry, CuratedStore, Lang};

use crate::embed::SentenceEncoder;
use crate::error::{IndexError, Result};
use crate::store::{VectorIndex, VectorStore};
use crate::tfidf;

/// Labels admitted into the index. Currently every label, kept as an
/// explicit allow-list so future labels stay out until reviewed.
pub const INDEXABLE_LABELS: [Lang; 4] = [Lang::Yue, Lang::Zh, Lang::Mixed, Lang::En];

/// Builds a [`VectorStore`] from a curated store.
pub struct IndexBuilder {
    model_dir: PathBuf,
}

impl IndexBuilder {
    /// Creates a builder that looks for the embedding model under
    /// `model_dir`.
    pub fn new(model_dir: &Path) -> Self {
        Self {
            model_dir: model_dir.to_path_buf(),
        }
    }

    /// Builds the index over every indexable entry of `store`.
    ///
    /// Embedding failures are recovered locally by falling back to TF-IDF;
    /// an error from the fallback itself is fatal and nothing is written.
    pub fn build(&self, store: &CuratedStore) -> Result<VectorStore> {
        let items: Vec<CuratedEntry> = store
            .items
            .iter()
            .filter(|entry| INDEXABLE_LABELS.contains(&entry.lang))
            .cloned()
            .collect();
        if items.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        let (built_with, index) = match self.try_embeddings(&items) {
            Ok(embeddings) => {
                let short_id = SentenceEncoder::MODEL_ID
                    .rsplit('/')
                    .next()
                    .unwrap_or(SentenceEncoder::MODEL_ID);
                info!(model = short_id, items = items.len(), "built dense embedding index");
                (
                    format!("sbert ({short_id})"),
                    VectorIndex::Sbert {
                        model: SentenceEncoder::MODEL_ID.to_string(),
                        embeddings,
                    },
                )
            }
            Err(err) => {
                warn!(%err, "embedding strategy unavailable; falling back to TF-IDF");
                let texts: Vec<&str> = items.iter().map(|e| e.text.as_str()).collect();
                let index = tfidf::build_matrix(&texts)?;
                info!(items = items.len(), "built sparse TF-IDF index");
                ("TF-IDF".to_string(), index)
            }
        };

        Ok(VectorStore {
            built_with,
            count: items.len(),
            items,
            index,
        })
    }

    fn try_embeddings(&self, items: &[CuratedEntry]) -> Result<Vec<Vec<f32>>> {
        let encoder = SentenceEncoder::load(&self.model_dir)?;
        items
            .iter()
            .map(|entry| encoder.encode(&entry.text))
            .collect()
    }
}
