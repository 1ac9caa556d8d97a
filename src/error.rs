//! Error types for the memo search engine.
//!
//! This module defines custom error types using `thiserror`. The engine
//! itself degrades to "no match" / "no highlight" / "not found" on malformed
//! text rather than failing, so errors only exist where something genuinely
//! went wrong: configuration parsing and resolving a jump target against the
//! caller's documents.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that can occur when resolving a record back to its document.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Record carries no source tag, so there is nothing to resolve against
    #[error("Record has no source tag")]
    UntaggedRecord,

    /// Record's source tag names a document the caller did not supply
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// The address no longer occurs in its document
    #[error("Address not found in document {document}: {address}")]
    AddressNotFound { document: String, address: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with EngineError
pub type EngineResult<T> = Result<T, EngineError>;
