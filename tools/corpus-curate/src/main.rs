//! Jyutliu corpus batch tool.
//!
//! Drives the pipeline end to end against the conventional `data/`
//! layout: ingest raw files into the curated store, build the vector
//! index, report label coverage, query the index.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use jyutliu::{
    ingest_dir, search, CorpusPaths, CoverageReport, CuratedStore, DialectClassifier,
    DialectMask, IndexBuilder, Lang, SentenceEncoder, VectorIndex, VectorStore,
};

/// CLI arguments
#[derive(Parser)]
#[command(name = "corpus-curate")]
#[command(about = "Curate Cantonese corpora and build similarity indexes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base directory holding the data/ and models/ layout
    #[arg(short, long)]
    base_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest raw subtitle/text/CSV files into the curated store
    Ingest,
    /// Build the vector index from the curated store
    Index,
    /// Write and print the label coverage report
    Report,
    /// Query the vector index
    Search {
        /// Query text
        text: String,
        /// Number of results
        #[arg(short = 'k', long, default_value_t = 8)]
        top_k: usize,
    },
    /// Show which pipeline artifacts exist
    Status,
}

fn resolve_paths(cli: &Cli) -> CorpusPaths {
    match &cli.base_dir {
        Some(base) => CorpusPaths::rooted_at(base),
        None => CorpusPaths::new(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let paths = resolve_paths(&cli);

    match cli.command {
        Commands::Ingest => run_ingest(&paths),
        Commands::Index => run_index(&paths),
        Commands::Report => run_report(&paths),
        Commands::Search { ref text, top_k } => run_search(&paths, text, top_k),
        Commands::Status => run_status(&paths),
    }
}

fn run_ingest(paths: &CorpusPaths) -> Result<()> {
    let mask = DialectMask::load_or_default(&paths.mask_file)?;
    info!(tokens = mask.tokens().len(), "dialect mask ready");
    let classifier = DialectClassifier::new(mask);

    let report = ingest_dir(paths, &classifier).context("ingestion failed")?;
    if report.duplicates_dropped > 0 {
        info!(dropped = report.duplicates_dropped, "removed duplicate lines");
    }
    info!(
        yue = report.kept_by_lang.get(&Lang::Yue).copied().unwrap_or(0),
        zh = report.kept_by_lang.get(&Lang::Zh).copied().unwrap_or(0),
        en = report.kept_by_lang.get(&Lang::En).copied().unwrap_or(0),
        mixed = report.kept_by_lang.get(&Lang::Mixed).copied().unwrap_or(0),
        "label distribution"
    );

    println!(
        "[OK] curated {} items -> {}",
        report.items_kept,
        paths.curated_file.display()
    );
    Ok(())
}

fn run_index(paths: &CorpusPaths) -> Result<()> {
    let curated =
        CuratedStore::load_from(&paths.curated_file).context("cannot load curated store")?;

    let store = IndexBuilder::new(&paths.model_dir).build(&curated)?;
    store.save_to(&paths.vector_file)?;

    println!(
        "[OK] vector index ({}) {} items -> {}",
        store.built_with,
        store.count,
        paths.vector_file.display()
    );
    Ok(())
}

fn run_report(paths: &CorpusPaths) -> Result<()> {
    let curated =
        CuratedStore::load_from(&paths.curated_file).context("cannot load curated store")?;

    let report = CoverageReport::from_store(&curated);
    report.save_to(&paths.gap_report_file)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("[OK] gap report -> {}", paths.gap_report_file.display());
    Ok(())
}

fn run_search(paths: &CorpusPaths, text: &str, top_k: usize) -> Result<()> {
    let store = VectorStore::load_from(&paths.vector_file).context("cannot load vector store")?;

    // A dense index needs the encoder that built it; a sparse one does not.
    let encoder = match &store.index {
        VectorIndex::Sbert { .. } => Some(
            SentenceEncoder::load(&paths.model_dir)
                .context("the index was built with an embedding model that is not available")?,
        ),
        VectorIndex::Tfidf { .. } => None,
    };

    let hits = search(&store, encoder.as_ref(), text, top_k)?;
    if hits.is_empty() {
        println!("no results");
        return Ok(());
    }
    for (rank, hit) in hits.iter().enumerate() {
        println!("{:>2}. {:.4}  [{}]  {}", rank + 1, hit.score, hit.lang, hit.text);
    }
    Ok(())
}

fn run_status(paths: &CorpusPaths) -> Result<()> {
    match fs::read_dir(&paths.raw_dir) {
        Ok(entries) => {
            let files = entries
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
                .count();
            println!("raw dir          {} ({} files)", paths.raw_dir.display(), files);
        }
        Err(_) => println!("raw dir          {} (missing)", paths.raw_dir.display()),
    }

    if paths.mask_file.exists() {
        println!("mask override    {}", paths.mask_file.display());
    } else {
        println!("mask override    absent (built-in mask)");
    }

    match CuratedStore::load_from(&paths.curated_file) {
        Ok(store) => println!(
            "curated store    {} ({} items: {} yue / {} zh / {} en / {} mixed)",
            paths.curated_file.display(),
            store.len(),
            store.count_lang(Lang::Yue),
            store.count_lang(Lang::Zh),
            store.count_lang(Lang::En),
            store.count_lang(Lang::Mixed),
        ),
        Err(_) => println!("curated store    {} (missing)", paths.curated_file.display()),
    }

    match VectorStore::load_from(&paths.vector_file) {
        Ok(store) => println!(
            "vector store     {} ({}, {} items)",
            paths.vector_file.display(),
            store.built_with,
            store.count
        ),
        Err(_) => println!("vector store     {} (missing)", paths.vector_file.display()),
    }

    if paths.model_dir.join("model.safetensors").exists() {
        println!("embedding model  {}", paths.model_dir.display());
    } else {
        println!(
            "embedding model  {} (not found; index builds fall back to TF-IDF)",
            paths.model_dir.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn base_dir_relocates_layout() {
        let cli = Cli::parse_from(["corpus-curate", "--base-dir", "/srv/corpus", "status"]);
        let paths = resolve_paths(&cli);
        assert!(paths.curated_file.starts_with("/srv/corpus"));
        assert!(paths.model_dir.starts_with("/srv/corpus"));
    }

    #[test]
    fn default_layout_is_repository_relative() {
        let cli = Cli::parse_from(["corpus-curate", "ingest"]);
        let paths = resolve_paths(&cli);
        assert_eq!(paths.raw_dir, PathBuf::from("data/raw"));
    }

    #[test]
    fn search_defaults_to_eight_results() {
        let cli = Cli::parse_from(["corpus-curate", "search", "飲茶"]);
        match cli.command {
            Commands::Search { top_k, .. } => assert_eq!(top_k, 8),
            _ => panic!("expected search subcommand"),
        }
    }

    #[test]
    fn ingest_then_index_then_search_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["corpus-curate", "--base-dir", &base, "ingest"]);
        let paths = resolve_paths(&cli);

        fs::create_dir_all(&paths.raw_dir).unwrap();
        fs::write(
            paths.raw_dir.join("lines.txt"),
            "今日 天氣 好好\n聽日 得閒 飲茶\n",
        )
        .unwrap();

        run_ingest(&paths).unwrap();
        run_index(&paths).unwrap();
        run_report(&paths).unwrap();

        let store = VectorStore::load_from(&paths.vector_file).unwrap();
        assert_eq!(store.built_with, "TF-IDF");
        assert_eq!(store.count, 2);

        run_search(&paths, "飲茶", 1).unwrap();
        run_status(&paths).unwrap();
    }
}
