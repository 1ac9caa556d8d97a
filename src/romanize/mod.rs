//! Logographic romanization and initials extraction.
//!
//! This module turns the Chinese (CJK) subset of a string into a lowercase
//! string of romanized first-letter initials, which is what the matcher and
//! highlighter search against. The actual character-to-initial mapping is a
//! pluggable capability so environments without pinyin data still work —
//! they just lose phonetic matching and keep literal substring matching.

pub mod pinyin;

pub use pinyin::PinyinRomanizer;

/// Capability for converting logographic text to romanized initials.
///
/// Implementations receive a string that contains only logographic
/// characters and return one initial per input character. Returning fewer
/// entries (or none) is treated as a partial or absent capability, never as
/// an error.
pub trait LogographicRomanizer: Send + Sync {
    /// Romanized initial letters for `logographic`, one entry per character.
    fn logographic_to_initials(&self, logographic: &str) -> Vec<String>;
}

/// Backend for environments without romanization data.
///
/// Always yields no initials, which makes every initials index empty and
/// leaves records searchable by literal substring only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRomanizer;

impl LogographicRomanizer for NoopRomanizer {
    fn logographic_to_initials(&self, _logographic: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Whether a character is in the logographic (CJK unified ideograph) range.
pub fn is_logographic(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Build the lowercase initials index for `text`.
///
/// Non-logographic characters are dropped (not replaced), the remaining
/// subsequence is romanized through `romanizer`, and the initials are
/// concatenated and lowercased. Returns an empty string when `text` has no
/// logographic characters or the backend produces nothing. Pure: identical
/// input and backend always yield identical output.
pub fn initials_index(text: &str, romanizer: &dyn LogographicRomanizer) -> String {
    let logographic: String = text.chars().filter(|c| is_logographic(*c)).collect();
    if logographic.is_empty() {
        return String::new();
    }

    romanizer
        .logographic_to_initials(&logographic)
        .concat()
        .to_lowercase()
}
