//! Matching of address records against user queries.
//!
//! This module decides which records match a query, by literal substring or
//! by pinyin-initials substring over the record and its sub-word tokens.

pub mod record_matcher;

pub use record_matcher::RecordMatcher;
