//! Memo Search - CLI entry point
//!
//! Thin demo caller around the engine: reads memo files from disk, runs a
//! query, and prints the highlighted hits. All I/O lives here so the engine
//! stays pure.

use anyhow::{bail, Context, Result};
use memo_search::{Document, EngineConfig, PinyinRomanizer, SearchEngine};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = EngineConfig::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so hit output on stdout stays pipeable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let query = match args.next() {
        Some(query) => query,
        None => bail!("Usage: memo-search <query> <memo-file>..."),
    };
    let paths: Vec<String> = args.collect();
    if paths.is_empty() {
        bail!("Usage: memo-search <query> <memo-file>...");
    }

    let mut documents = Vec::new();
    for path in &paths {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read memo file: {}", path))?;
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        documents.push(Document::new(name, content));
    }
    info!(files = documents.len(), "loaded memo files");

    let engine = SearchEngine::with_config(Arc::new(PinyinRomanizer), config);
    let hits = engine.search(&documents, &query);
    debug!(hits = hits.len(), "search finished");

    println!("已找到{}项", hits.len());
    for hit in &hits {
        println!();
        if let Some(tag) = &hit.record.source_tag {
            println!("来源: {}", tag);
        }
        match hit.location {
            Some(location) => println!("{}  (line {})", hit.address_markup, location.line + 1),
            None => println!("{}", hit.address_markup),
        }
        for line in &hit.note_preview {
            println!("  {}", line);
        }
        if hit.hidden_note_lines > 0 {
            println!("  ...还有{}行", hit.hidden_note_lines);
        }
    }

    Ok(())
}
