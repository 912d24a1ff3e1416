use serde::{Deserialize, Serialize};

use super::lang::Lang;

/// One deduplicated, labeled corpus line. Immutable once written to the
/// curated store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedEntry {
    /// The normalized line text.
    pub text: String,

    /// Heuristic language label.
    pub lang: Lang,

    /// File name of the originating source.
    pub source: String,
}

impl CuratedEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(text: impl Into<String>, lang: Lang, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang,
            source: source.into(),
        }
    }
}

/// The deduplicated, labeled corpus; the single source of truth for
/// downstream indexing. Persisted as `{"items": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedStore {
    /// Entries in first-seen ingestion order.
    pub items: Vec<CuratedEntry>,
}

impl CuratedStore {
    /// Creates a store from already-deduplicated entries.
    #[must_use]
    pub fn new(items: Vec<CuratedEntry>) -> Self {
        Self { items }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries carrying the given label.
    #[must_use]
    pub fn count_lang(&self, lang: Lang) -> usize {
        self.items.iter().filter(|e| e.lang == lang).count()
    }
}
