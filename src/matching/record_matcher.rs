//! Record matcher: boolean inclusion of records for a query.

use crate::models::Record;
use crate::romanize::{initials_index, LogographicRomanizer};
use crate::segment::tokenize;
use std::collections::HashMap;
use tracing::trace;

/// Matcher over a collection of parsed records.
///
/// Matching is boolean inclusion only; there is no ranking. Worst case is
/// O(records x tokens-per-address x query-length), which is fine for a
/// single-user memo corpus.
pub struct RecordMatcher<'a> {
    romanizer: &'a dyn LogographicRomanizer,
}

impl<'a> RecordMatcher<'a> {
    /// Create a matcher using the given romanization backend.
    pub fn new(romanizer: &'a dyn LogographicRomanizer) -> Self {
        Self { romanizer }
    }

    /// Filter `records` down to those matching `query`.
    ///
    /// An empty (or whitespace-only) query returns the records unchanged:
    /// "no query" is not "no matches". Otherwise the query is trimmed and
    /// lowercased and each record is tested with [`Self::matches`].
    ///
    /// Match decisions are memoized per address for the duration of this
    /// call, so repeated identical addresses are only evaluated once.
    /// Records sharing an address but carrying different source tags share
    /// the memoized decision; relevance is address-content-driven, so this
    /// is intended behavior.
    pub fn search(&self, records: &[Record], query: &str) -> Vec<Record> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return records.to_vec();
        }

        let mut memo: HashMap<&str, bool> = HashMap::new();
        let mut hits = Vec::new();

        for record in records {
            let matched = match memo.get(record.address.as_str()) {
                Some(&decision) => decision,
                None => {
                    let decision = self.matches(record, &query);
                    memo.insert(record.address.as_str(), decision);
                    decision
                }
            };
            if matched {
                hits.push(record.clone());
            }
        }

        trace!(
            query = %query,
            records = records.len(),
            hits = hits.len(),
            "record match pass"
        );

        hits
    }

    /// Whether a record matches a normalized (trimmed, lowercase) query.
    ///
    /// Short-circuit order: the precomputed initials index and the literal
    /// address are checked first; only then is the address tokenized and
    /// each token tested by initials and by literal form.
    fn matches(&self, record: &Record, query: &str) -> bool {
        if record.initials_index.contains(query) || record.address.to_lowercase().contains(query) {
            return true;
        }

        tokenize(&record.address).iter().any(|word| {
            initials_index(word, self.romanizer).contains(query)
                || word.to_lowercase().contains(query)
        })
    }
}
