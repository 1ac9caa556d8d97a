//! Sub-word tokenization of address strings.
//!
//! Produces the candidate words the matcher and highlighter test against:
//! the whole address, administrative segments peeled off by structural
//! delimiters, and every short window containing logographic text.

use crate::romanize::is_logographic;
use std::collections::HashSet;

/// Structural address delimiters, in priority order: province, city,
/// district, county, town, township, village, road, street, lane, number,
/// room, unit, building, floor. 单元 (unit) is two characters, so delimiters
/// are strings rather than chars.
pub const ADDRESS_DELIMITERS: [&str; 15] = [
    "省", "市", "区", "县", "镇", "乡", "村", "路", "街", "巷", "号", "室", "单元", "栋", "层",
];

/// Window lengths for the logographic sliding-window pass.
const WINDOW_MIN: usize = 2;
const WINDOW_MAX: usize = 4;

/// Split an address into candidate sub-words.
///
/// The result is the union, deduplicated in insertion order, of:
/// 1. the whole address;
/// 2. administrative segments: for each delimiter in priority order, the
///    remaining unconsumed suffix of the address is split on that delimiter,
///    every non-empty leading piece is emitted as `piece + delimiter`, and
///    the suffix narrows to the final piece before the next delimiter is
///    tried;
/// 3. every contiguous 2–4 character substring containing at least one
///    logographic character.
///
/// Delimiters appearing out of priority order are simply not seen by earlier
/// passes once the suffix has narrowed past them; the priority order is
/// authoritative.
pub fn tokenize(address: &str) -> Vec<String> {
    if address.is_empty() {
        return Vec::new();
    }

    let mut words: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    push_unique(&mut words, &mut seen, address.to_string());

    // Peel administrative prefixes off the remaining suffix, one delimiter
    // at a time.
    let mut remaining = address;
    for delimiter in ADDRESS_DELIMITERS {
        let parts: Vec<&str> = remaining.split(delimiter).collect();
        if parts.len() > 1 {
            for part in &parts[..parts.len() - 1] {
                let part = part.trim();
                if !part.is_empty() {
                    push_unique(&mut words, &mut seen, format!("{}{}", part, delimiter));
                }
            }
            remaining = parts[parts.len() - 1];
        }
    }

    // Full sliding window over the address, keeping windows that contain
    // logographic text.
    let chars: Vec<char> = address.chars().collect();
    for start in 0..chars.len() {
        for len in WINDOW_MIN..=WINDOW_MAX {
            if start + len > chars.len() {
                break;
            }
            let window: String = chars[start..start + len].iter().collect();
            if window.chars().any(is_logographic) {
                push_unique(&mut words, &mut seen, window);
            }
        }
    }

    words
}

fn push_unique(words: &mut Vec<String>, seen: &mut HashSet<String>, word: String) {
    if seen.insert(word.clone()) {
        words.push(word);
    }
}
