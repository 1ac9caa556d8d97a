//! Memo Search - a segmentation, pinyin-indexing, and match/highlight engine
//! for free-form "address + notes" memo documents.
//!
//! Users search records by literal substring or by the romanized initials of
//! embedded Chinese text ("bjs" finds 北京市). The engine is pure and
//! synchronous: callers hand it a snapshot of named text blobs and render
//! whatever it returns; storage, sync, and UI are external collaborators.
//!
//! # Architecture
//!
//! - **models**: address records and the raw documents they come from
//! - **segment**: blank-line block segmentation and sub-word tokenization
//! - **romanize**: pluggable logographic-to-initials backends
//! - **matching**: substring / initials-substring record filtering
//! - **highlight**: span-based match highlighting, including projecting
//!   initials-space positions back onto the original text
//! - **locate**: boundary-anchored address location for jump-to
//! - **engine**: the facade tying the pieces together
//! - **error**: custom error types for the few genuinely failable paths
//! - **config**: environment-driven engine configuration

// Re-export commonly used types
pub mod config;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod locate;
pub mod matching;
pub mod models;
pub mod romanize;
pub mod segment;

pub use config::EngineConfig;
pub use engine::{SearchEngine, SearchHit};
pub use error::{ConfigError, EngineError};
pub use highlight::{HighlightMarker, Highlighter};
pub use locate::{locate, Location};
pub use matching::RecordMatcher;
pub use models::{Document, Record};
pub use romanize::{
    initials_index, is_logographic, LogographicRomanizer, NoopRomanizer, PinyinRomanizer,
};
pub use segment::{segment, tokenize};
