//! Document model: a named raw text blob supplied by the caller.

use serde::{Deserialize, Serialize};

/// A raw memo document handed to the engine.
///
/// The engine owns no storage; whatever layer persists memo files supplies a
/// consistent snapshot of them per invocation. The name doubles as the
/// source tag on records derived from the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Caller-chosen identifier, e.g. a file name.
    pub name: String,

    /// Full document text.
    pub content: String,
}

impl Document {
    /// Create a document from a name and its text.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
