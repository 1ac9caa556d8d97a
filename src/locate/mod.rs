//! Locating a record's address inside its source document.
//!
//! Addresses may recur as substrings inside other notes' free text, so the
//! canonical occurrence is the one at a block start: the beginning of the
//! document, or immediately after a blank-line separator.

use serde::Serialize;

/// Position of an address inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Byte offset of the first character of the address.
    pub offset: usize,

    /// Zero-based line number of the address, usable as a scroll target.
    pub line: usize,
}

/// Find `address` inside `full_text`.
///
/// A literal occurrence at the start of the text or directly after a
/// double newline wins; failing that, the first occurrence anywhere is
/// used. Returns `None` when the address does not occur at all.
pub fn locate(address: &str, full_text: &str) -> Option<Location> {
    if address.is_empty() || full_text.is_empty() {
        return None;
    }

    let anchored = full_text
        .match_indices(address)
        .map(|(offset, _)| offset)
        .find(|&offset| offset == 0 || full_text[..offset].ends_with("\n\n"));

    let offset = match anchored {
        Some(offset) => offset,
        None => full_text.find(address)?,
    };

    Some(Location {
        offset,
        line: full_text[..offset].matches('\n').count(),
    })
}
