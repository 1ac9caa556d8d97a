//! Pinyin-backed romanization.

use super::LogographicRomanizer;
use ::pinyin::ToPinyin;

/// Romanizer backed by the `pinyin` crate.
///
/// Each character maps to the first letter of its plain (toneless) pinyin
/// reading. Polyphonic characters use the crate's default reading; characters
/// without pinyin data are skipped rather than reported as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl PinyinRomanizer {
    /// Create a new pinyin romanizer.
    pub fn new() -> Self {
        Self
    }
}

impl LogographicRomanizer for PinyinRomanizer {
    fn logographic_to_initials(&self, logographic: &str) -> Vec<String> {
        logographic
            .to_pinyin()
            .flatten()
            .filter_map(|p| p.plain().chars().next())
            .map(|c| c.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romanize::initials_index;

    #[test]
    fn test_beijing_initials() {
        assert_eq!(initials_index("北京市", &PinyinRomanizer), "bjs");
    }

    #[test]
    fn test_digits_have_no_initials() {
        assert_eq!(initials_index("123", &PinyinRomanizer), "");
    }

    #[test]
    fn test_mixed_text_keeps_only_logographic_initials() {
        // "1号" drops the digit and keeps hao -> "h".
        assert_eq!(initials_index("1号", &PinyinRomanizer), "h");
    }

    #[test]
    fn test_one_initial_per_character() {
        let initials = PinyinRomanizer.logographic_to_initials("幸福路");
        assert_eq!(initials, vec!["x", "f", "l"]);
    }
}
