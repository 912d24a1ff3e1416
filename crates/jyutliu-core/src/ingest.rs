//! Directory ingestion: raw files in, curated store out.
//!
//! One batch run enumerates the raw directory in lexical file-name order
//! (the stable order duplicate resolution depends on), parses every
//! recognized file, normalizes and classifies each line, deduplicates
//! across the whole batch and writes the curated store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::classify::DialectClassifier;
use crate::config::CorpusPaths;
use crate::dedup::dedup_entries;
use crate::error::Result;
use crate::normalize::normalize;
use crate::parser::{parse_path, SourceFormat};
use crate::types::{CuratedEntry, CuratedStore, Lang};

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Regular files found in the raw directory.
    pub files_seen: usize,
    /// Files with a recognized extension that were parsed.
    pub files_parsed: usize,
    /// Non-empty normalized lines before deduplication.
    pub lines_scanned: usize,
    /// Lines dropped as case-folded duplicates.
    pub duplicates_dropped: usize,
    /// Entries written to the curated store.
    pub items_kept: usize,
    /// Kept entries per label. Labels with no entries are absent.
    pub kept_by_lang: HashMap<Lang, usize>,
}

/// Runs one ingestion batch over `paths.raw_dir` and writes the curated
/// store to `paths.curated_file`.
///
/// A missing raw directory is created empty, which yields an empty store
/// rather than an error. The mask override file is never ingested as
/// corpus input.
pub fn ingest_dir(paths: &CorpusPaths, classifier: &DialectClassifier) -> Result<IngestReport> {
    fs::create_dir_all(&paths.raw_dir)?;

    let mut files: Vec<PathBuf> = fs::read_dir(&paths.raw_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    files.sort();

    let mut report = IngestReport::default();
    let mut entries: Vec<CuratedEntry> = Vec::new();

    for path in &files {
        report.files_seen += 1;

        if path.file_name() == paths.mask_file.file_name() {
            debug!(file = %path.display(), "skipping mask override file");
            continue;
        }
        if SourceFormat::from_path(path).is_none() {
            debug!(file = %path.display(), "skipping unrecognized extension");
            continue;
        }

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let lines = parse_path(path)?;
        report.files_parsed += 1;
        debug!(file = %source, lines = lines.len(), "parsed");

        for raw in lines {
            let text = normalize(&raw);
            if text.is_empty() {
                continue;
            }
            let lang = classifier.classify(&text);
            entries.push(CuratedEntry::new(text, lang, source.clone()));
        }
    }

    report.lines_scanned = entries.len();
    let unique = dedup_entries(entries);
    report.duplicates_dropped = report.lines_scanned - unique.len();
    report.items_kept = unique.len();
    for entry in &unique {
        *report.kept_by_lang.entry(entry.lang).or_insert(0) += 1;
    }

    let store = CuratedStore::new(unique);
    store.save_to(&paths.curated_file)?;

    info!(
        files = report.files_parsed,
        items = report.items_kept,
        duplicates = report.duplicates_dropped,
        "ingestion finished"
    );
    Ok(report)
}
