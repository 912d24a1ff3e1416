//! Persistence for the curated corpus store.
//!
//! The store is a single pretty-printed JSON document so that diffs of
//! regenerated corpora stay reviewable in version control.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CurateError, Result};
use crate::types::CuratedStore;

impl CuratedStore {
    /// Writes the store to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), items = self.len(), "curated store written");
        Ok(())
    }

    /// Loads a store previously written by [`CuratedStore::save_to`].
    ///
    /// A missing file is reported as [`CurateError::MissingCurated`] so
    /// callers can tell "run ingestion first" apart from real i/o failures.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CurateError::MissingCurated {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        let store = serde_json::from_str(&json)?;
        Ok(store)
    }
}
