//! Segmentation of raw memo text into address records.
//!
//! A memo document is a sequence of blocks separated by blank lines. The
//! first non-blank line of a block is the address, the remaining lines are
//! its notes. Blocks without notes are dropped.

pub mod tokenizer;

pub use tokenizer::{tokenize, ADDRESS_DELIMITERS};

use crate::models::Record;
use crate::romanize::{initials_index, LogographicRomanizer};
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("Failed to compile block separator regex"));

/// Split `text` into address records.
///
/// Blocks are maximal runs of non-blank lines, delimited by two or more
/// consecutive newlines. Within a block, blank lines are stripped, the first
/// remaining line (trimmed) becomes the address and the rest become the
/// notes. Blocks with fewer than two non-blank lines yield no record.
///
/// The result is materialized eagerly, in document order. Source tags are
/// not attached here; that is the caller's job.
pub fn segment(text: &str, romanizer: &dyn LogographicRomanizer) -> Vec<Record> {
    BLOCK_SEPARATOR
        .split(text)
        .filter_map(|block| parse_block(block, romanizer))
        .collect()
}

/// Parse one block into a record, or nothing for empty/single-line blocks.
fn parse_block(block: &str, romanizer: &dyn LogographicRomanizer) -> Option<Record> {
    let lines: Vec<&str> = block.split('\n').filter(|l| !l.trim().is_empty()).collect();

    // A lone address with no annotation is not search-worthy.
    if lines.len() < 2 {
        return None;
    }

    let address = lines[0].trim().to_string();
    let notes = lines[1..].join("\n").trim().to_string();
    let initials = initials_index(&address, romanizer);

    Some(Record::new(address, notes, initials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romanize::NoopRomanizer;

    #[test]
    fn test_segment_basic_block() {
        let text = "北京市朝阳区幸福路1号\n张三 收件人\n备注：周末在家";
        let records = segment(text, &NoopRomanizer);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "北京市朝阳区幸福路1号");
        assert_eq!(records[0].notes, "张三 收件人\n备注：周末在家");
        assert_eq!(records[0].source_tag, None);
    }

    #[test]
    fn test_segment_discards_single_line_blocks() {
        let text = "北京市朝阳区幸福路1号\n张三 收件人\n备注：周末在家\n\n仅一行无备注";
        let records = segment(text, &NoopRomanizer);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "北京市朝阳区幸福路1号");
    }

    #[test]
    fn test_segment_never_yields_empty_address() {
        let inputs = ["", "\n\n\n", "   \n\n  \n", "a\n\nb\n\nc", "\n\na\nb"];
        for text in inputs {
            for record in segment(text, &NoopRomanizer) {
                assert!(!record.address.is_empty(), "input {:?}", text);
            }
        }
    }

    #[test]
    fn test_segment_splits_on_runs_of_blank_lines() {
        let text = "地址一\n备注一\n\n\n\n地址二\n备注二";
        let records = segment(text, &NoopRomanizer);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].address, "地址一");
        assert_eq!(records[1].address, "地址二");
    }

    #[test]
    fn test_segment_preserves_document_order() {
        let text = "b街1号\nnote\n\na路2号\nnote";
        let records = segment(text, &NoopRomanizer);
        let addresses: Vec<&str> = records.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["b街1号", "a路2号"]);
    }

    #[test]
    fn test_segment_strips_interior_blank_ish_lines() {
        // A whitespace-only line inside a block does not split it, but is
        // dropped from the notes.
        let text = "地址\n  \n备注";
        let records = segment(text, &NoopRomanizer);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].notes, "备注");
    }
}
