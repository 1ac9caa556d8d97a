//! Query highlighting over matched text.
//!
//! Given matched text and the query, produces a marked-up copy with match
//! spans wrapped. Three strategies are tried in order: direct substring
//! occurrences, sub-word tokens hit by initials or literal form, and
//! finally projecting an initials-space match position back onto the
//! logographic characters of the original text.
//!
//! Spans are computed first as a sorted, non-overlapping list of byte
//! ranges, then rendered in a single left-to-right pass with a running
//! cursor; the text is never spliced in place.

use crate::romanize::{initials_index, is_logographic, LogographicRomanizer};
use crate::segment::tokenize;
use regex::RegexBuilder;

/// A half-open byte range of text to wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

/// Markup inserted around matched spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarker {
    /// Opening markup, e.g. `<mark>`.
    pub open: String,

    /// Closing markup, e.g. `</mark>`.
    pub close: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

/// Highlighter for matched record text.
pub struct Highlighter<'a> {
    romanizer: &'a dyn LogographicRomanizer,
    marker: HighlightMarker,
}

impl<'a> Highlighter<'a> {
    /// Create a highlighter with the default `<mark>` marker.
    pub fn new(romanizer: &'a dyn LogographicRomanizer) -> Self {
        Self::with_marker(romanizer, HighlightMarker::default())
    }

    /// Create a highlighter with a custom marker.
    pub fn with_marker(romanizer: &'a dyn LogographicRomanizer, marker: HighlightMarker) -> Self {
        Self { romanizer, marker }
    }

    /// Produce a marked-up copy of `text` with query matches wrapped.
    ///
    /// Returns `text` unchanged when either input is empty; never fails on
    /// malformed input. Callers must always highlight clean source text —
    /// re-running on previous markup output is undefined.
    pub fn highlight(&self, text: &str, query: &str) -> String {
        if text.is_empty() || query.is_empty() {
            return text.to_string();
        }
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return text.to_string();
        }

        let mut spans = direct_spans(text, &query);
        if spans.is_empty() {
            spans = self.token_spans(text, &query);
        }
        if spans.is_empty() {
            spans = self.projected_spans(text, &query);
        }

        self.render(text, &spans)
    }

    /// Case B: tokens (excluding the whole-string token) hit by initials or
    /// by literal form. An initials-hit wraps every occurrence of the token
    /// itself; a literal-hit wraps every occurrence of the query.
    fn token_spans(&self, text: &str, query: &str) -> Vec<Span> {
        let mut spans = Vec::new();

        for word in tokenize(text) {
            if word == text {
                continue;
            }
            if initials_index(&word, self.romanizer).contains(query) {
                spans.extend(occurrence_spans(text, &word));
            } else if word.to_lowercase().contains(query) {
                spans.extend(occurrence_spans(text, query));
            }
        }

        normalize_spans(spans)
    }

    /// Case C: locate the query inside the initials index of the whole text
    /// and wrap each logographic character whose initials position falls
    /// inside the match. Non-logographic characters never advance the
    /// position counter and are never wrapped. Stops as soon as the match
    /// range is exhausted, and never runs past the end of the text.
    fn projected_spans(&self, text: &str, query: &str) -> Vec<Span> {
        let index = initials_index(text, self.romanizer);
        let match_start = match index.find(query) {
            Some(pos) => pos,
            None => return Vec::new(),
        };
        let match_end = match_start + query.len();

        let mut spans = Vec::new();
        let mut position = 0usize;
        for (offset, c) in text.char_indices() {
            if position >= match_end {
                break;
            }
            if is_logographic(c) {
                if position >= match_start {
                    spans.push(Span {
                        start: offset,
                        end: offset + c.len_utf8(),
                    });
                }
                position += 1;
            }
        }

        spans
    }

    /// Render sorted, non-overlapping spans in one pass with a running
    /// output cursor.
    fn render(&self, text: &str, spans: &[Span]) -> String {
        if spans.is_empty() {
            return text.to_string();
        }

        let markup_len = spans.len() * (self.marker.open.len() + self.marker.close.len());
        let mut out = String::with_capacity(text.len() + markup_len);
        let mut cursor = 0;

        for span in spans {
            out.push_str(&text[cursor..span.start]);
            out.push_str(&self.marker.open);
            out.push_str(&text[span.start..span.end]);
            out.push_str(&self.marker.close);
            cursor = span.end;
        }
        out.push_str(&text[cursor..]);

        out
    }
}

/// Case A: non-overlapping case-insensitive literal occurrences of the
/// query, left to right; the scan resumes strictly after each match end.
fn direct_spans(text: &str, query: &str) -> Vec<Span> {
    occurrence_spans(text, query)
}

/// Byte spans of every case-insensitive occurrence of `literal` in `text`,
/// using escaped-literal matching so query metacharacters stay inert.
fn occurrence_spans(text: &str, literal: &str) -> Vec<Span> {
    let pattern = match RegexBuilder::new(&regex::escape(literal))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    pattern
        .find_iter(text)
        .map(|m| Span {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Reduce candidate spans to a sorted, non-overlapping list.
///
/// A span strictly containing another candidate loses to it: wider windows
/// around the same hit (市朝阳 around 朝阳 for query "cy") would otherwise
/// drag unmatched characters into the markup. Remaining overlaps are
/// resolved greedily left to right.
fn normalize_spans(spans: Vec<Span>) -> Vec<Span> {
    let mut minimal: Vec<Span> = spans
        .iter()
        .filter(|s| {
            !spans.iter().any(|t| {
                s.start <= t.start
                    && t.end <= s.end
                    && (s.start != t.start || s.end != t.end)
            })
        })
        .copied()
        .collect();

    minimal.sort_by_key(|s| (s.start, s.end));
    let mut kept: Vec<Span> = Vec::with_capacity(minimal.len());
    for span in minimal {
        match kept.last() {
            Some(last) if span.start < last.end => {}
            _ => kept.push(span),
        }
    }
    kept
}
