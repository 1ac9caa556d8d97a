//! Search engine facade: documents in, rendering-ready hits out.
//!
//! This is the boundary consumed by a surrounding UI layer. The caller
//! supplies a consistent snapshot of its documents per invocation; the
//! engine segments them, filters by query, and returns hits carrying
//! highlighted markup and an optional jump-to location. Records are derived
//! fresh on every call — there is no cross-call cache to invalidate.

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::highlight::Highlighter;
use crate::locate::{locate, Location};
use crate::matching::RecordMatcher;
use crate::models::{Document, Record};
use crate::romanize::LogographicRomanizer;
use crate::segment::segment;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One matched record, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// The matched record, including its source tag.
    pub record: Record,

    /// The address with query matches wrapped in highlight markup.
    pub address_markup: String,

    /// The first few note lines, each with query matches highlighted.
    pub note_preview: Vec<String>,

    /// How many note lines fall outside the preview.
    pub hidden_note_lines: usize,

    /// Where the record's address sits in its source document, when it can
    /// be located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// The memo search engine.
///
/// Pure and synchronous: no I/O, no shared mutable state, no locking.
/// Callers wanting debounced invocation while a user types own that
/// scheduling themselves.
pub struct SearchEngine {
    romanizer: Arc<dyn LogographicRomanizer>,
    config: EngineConfig,
}

impl SearchEngine {
    /// Create an engine with default configuration.
    pub fn new(romanizer: Arc<dyn LogographicRomanizer>) -> Self {
        Self::with_config(romanizer, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(romanizer: Arc<dyn LogographicRomanizer>, config: EngineConfig) -> Self {
        Self { romanizer, config }
    }

    /// Search every document for `query`.
    ///
    /// All documents are segmented into records (tagged with their document
    /// name), the matcher filters them in one pass, and each hit is
    /// decorated with highlighted markup and a location. An empty query
    /// passes every record through with its text unhighlighted.
    pub fn search(&self, documents: &[Document], query: &str) -> Vec<SearchHit> {
        let mut records = Vec::new();
        for document in documents {
            for mut record in segment(&document.content, self.romanizer.as_ref()) {
                record.source_tag = Some(document.name.clone());
                records.push(record);
            }
        }

        let matcher = RecordMatcher::new(self.romanizer.as_ref());
        let matched = matcher.search(&records, query);

        let highlighter = Highlighter::with_marker(
            self.romanizer.as_ref(),
            self.config.highlight_marker.clone(),
        );

        let hits: Vec<SearchHit> = matched
            .into_iter()
            .map(|record| self.decorate(record, documents, &highlighter, query))
            .collect();

        debug!(
            query = %query,
            documents = documents.len(),
            records = records.len(),
            hits = hits.len(),
            "search complete"
        );

        hits
    }

    /// Resolve the jump-to location for a record returned by [`Self::search`].
    ///
    /// This is the strict variant of the optimistic `location` field on
    /// [`SearchHit`]: it reports why resolution failed instead of going
    /// silent, for callers that treat a dangling hit as a bug.
    pub fn jump_target(&self, documents: &[Document], record: &Record) -> EngineResult<Location> {
        let tag = record
            .source_tag
            .as_deref()
            .ok_or(EngineError::UntaggedRecord)?;

        let document = documents
            .iter()
            .find(|d| d.name == tag)
            .ok_or_else(|| EngineError::UnknownDocument(tag.to_string()))?;

        locate(&record.address, &document.content).ok_or_else(|| EngineError::AddressNotFound {
            document: tag.to_string(),
            address: record.address.clone(),
        })
    }

    /// Build the rendering-ready hit for one matched record.
    fn decorate(
        &self,
        record: Record,
        documents: &[Document],
        highlighter: &Highlighter<'_>,
        query: &str,
    ) -> SearchHit {
        let address_markup = highlighter.highlight(&record.address, query);

        let note_lines: Vec<&str> = if record.notes.is_empty() {
            Vec::new()
        } else {
            record.notes.split('\n').collect()
        };
        let preview_len = note_lines.len().min(self.config.note_preview_lines);
        let note_preview = note_lines[..preview_len]
            .iter()
            .map(|line| highlighter.highlight(line, query))
            .collect();
        let hidden_note_lines = note_lines.len() - preview_len;

        let location = record
            .source_tag
            .as_deref()
            .and_then(|tag| documents.iter().find(|d| d.name == tag))
            .and_then(|document| locate(&record.address, &document.content));

        SearchHit {
            record,
            address_markup,
            note_preview,
            hidden_note_lines,
            location,
        }
    }
}
