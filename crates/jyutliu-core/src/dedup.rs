//! Case-normalized exact-text deduplication, first occurrence wins.

use std::collections::HashSet;

use crate::types::CuratedEntry;

/// Returns the longest prefix-order subsequence of `entries` whose
/// case-folded texts are unique, keeping the first occurrence of each
/// duplicate group. Deterministic given a deterministic input order.
#[must_use]
pub fn dedup_entries(entries: Vec<CuratedEntry>) -> Vec<CuratedEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut unique = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = entry.text.trim().to_lowercase();
        if seen.insert(key) {
            unique.push(entry);
        }
    }

    unique
}
