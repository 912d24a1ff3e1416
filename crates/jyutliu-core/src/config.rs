//! Repository-relative data layout.
//!
//! Every batch step reads and writes inside one directory tree:
//!
//! ```text
//! data/raw/                     input files (.srt / .txt / .csv)
//! data/raw/yue_mask.txt         optional dialect-mask override
//! data/curated/curated.json     curated store
//! data/curated/gap_report.json  coverage report
//! data/vectors/vector.json      vector store
//! models/embedding/             local sentence-embedding model files
//! ```
//!
//! Paths are resolved once at startup and passed by reference; nothing in
//! the pipeline consults the environment afterwards.

use std::path::{Path, PathBuf};

/// Holds all resolved corpus directory/file paths.
#[derive(Debug, Clone)]
pub struct CorpusPaths {
    /// Directory scanned for raw input files.
    pub raw_dir: PathBuf,
    /// Full path to the dialect-mask override file.
    pub mask_file: PathBuf,
    /// Full path to the curated store.
    pub curated_file: PathBuf,
    /// Full path to the coverage report.
    pub gap_report_file: PathBuf,
    /// Full path to the vector store.
    pub vector_file: PathBuf,
    /// Directory holding the local sentence-embedding model files.
    pub model_dir: PathBuf,
}

impl CorpusPaths {
    /// Resolves the conventional layout relative to the current directory.
    pub fn new() -> Self {
        Self::rooted_at(Path::new(""))
    }

    /// Resolves the conventional layout under an explicit base directory.
    pub fn rooted_at(base: &Path) -> Self {
        let raw_dir = base.join("data").join("raw");
        let curated_dir = base.join("data").join("curated");

        Self {
            mask_file: raw_dir.join("yue_mask.txt"),
            curated_file: curated_dir.join("curated.json"),
            gap_report_file: curated_dir.join("gap_report.json"),
            vector_file: base.join("data").join("vectors").join("vector.json"),
            model_dir: base.join("models").join("embedding"),
            raw_dir,
        }
    }
}

impl Default for CorpusPaths {
    fn default() -> Self {
        Self::new()
    }
}
