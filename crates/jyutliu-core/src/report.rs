//! Coverage reporting over a curated store.
//!
//! Summarizes how much of the corpus actually carries the target dialect
//! label, with a capped sample of the lines that do not, so gaps in the
//! raw material surface before any index is built on top of it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::{CuratedStore, Lang};

/// Maximum number of non-Cantonese example lines carried in a report.
const EXAMPLE_LIMIT: usize = 10;
/// Example lines are truncated to this many characters.
const EXAMPLE_CHARS: usize = 80;

/// Label coverage summary for one curated store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Total number of curated entries.
    pub total: usize,
    /// Entry count per wire label, in stable label order.
    pub by_lang: BTreeMap<String, usize>,
    /// Entries not labelled `yue`.
    pub non_yue: usize,
    /// Up to [`EXAMPLE_LIMIT`] non-Cantonese texts, truncated for display.
    pub examples_non_yue: Vec<String>,
}

impl CoverageReport {
    /// Builds a report from an in-memory store.
    #[must_use]
    pub fn from_store(store: &CuratedStore) -> Self {
        let mut by_lang: BTreeMap<String, usize> = BTreeMap::new();
        let mut examples_non_yue = Vec::new();
        let mut non_yue = 0;

        for entry in &store.items {
            *by_lang.entry(entry.lang.as_str().to_string()).or_insert(0) += 1;
            if entry.lang != Lang::Yue {
                non_yue += 1;
                if examples_non_yue.len() < EXAMPLE_LIMIT {
                    examples_non_yue.push(entry.text.chars().take(EXAMPLE_CHARS).collect());
                }
            }
        }

        Self {
            total: store.len(),
            by_lang,
            non_yue,
            examples_non_yue,
        }
    }

    /// Writes the report to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), total = self.total, non_yue = self.non_yue, "gap report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CuratedEntry;

    fn store_with(langs: &[(Lang, &str)]) -> CuratedStore {
        let items = langs
            .iter()
            .enumerate()
            .map(|(i, (lang, text))| CuratedEntry::new(*text, *lang, format!("f{i}.txt")))
            .collect();
        CuratedStore::new(items)
    }

    #[test]
    fn counts_by_label() {
        let store = store_with(&[
            (Lang::Yue, "係唔係"),
            (Lang::Yue, "得閒飲茶"),
            (Lang::Zh, "你好"),
            (Lang::En, "hello"),
        ]);
        let report = CoverageReport::from_store(&store);

        assert_eq!(report.total, 4);
        assert_eq!(report.by_lang.get("yue"), Some(&2));
        assert_eq!(report.by_lang.get("zh"), Some(&1));
        assert_eq!(report.by_lang.get("en"), Some(&1));
        assert_eq!(report.by_lang.get("mixed"), None);
        assert_eq!(report.non_yue, 2);
        assert_eq!(report.examples_non_yue, ["你好", "hello"]);
    }

    #[test]
    fn examples_are_capped() {
        let entries: Vec<(Lang, &str)> = (0..15).map(|_| (Lang::Zh, "再见")).collect();
        let report = CoverageReport::from_store(&store_with(&entries));

        assert_eq!(report.non_yue, 15);
        assert_eq!(report.examples_non_yue.len(), EXAMPLE_LIMIT);
    }

    #[test]
    fn examples_are_truncated_by_characters() {
        let long = "好".repeat(200);
        let store = store_with(&[(Lang::Zh, long.as_str())]);
        let report = CoverageReport::from_store(&store);

        assert_eq!(report.examples_non_yue[0].chars().count(), EXAMPLE_CHARS);
    }

    #[test]
    fn empty_store_reports_zeroes() {
        let report = CoverageReport::from_store(&CuratedStore::default());
        assert_eq!(report.total, 0);
        assert_eq!(report.non_yue, 0);
        assert!(report.by_lang.is_empty());
        assert!(report.examples_non_yue.is_empty());
    }

    #[test]
    fn save_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curated").join("gap_report.json");

        let store = store_with(&[(Lang::Yue, "唔該"), (Lang::En, "thanks")]);
        CoverageReport::from_store(&store).save_to(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let loaded: CoverageReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded.total, 2);
        assert!(raw.contains("thanks"), "examples must stay unescaped text");
    }
}
