//! Data models for address memo documents and records.
//!
//! This module contains the data structures the engine consumes and
//! produces: raw documents supplied by the caller and the address records
//! derived from them.

pub mod document;
pub mod record;

pub use document::Document;
pub use record::Record;
