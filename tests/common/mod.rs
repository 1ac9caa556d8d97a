//! Shared test fixtures.

use memo_search::LogographicRomanizer;

/// Deterministic table-backed romanizer.
///
/// Integration tests use this instead of the pinyin-data backend so that
/// polyphonic characters (朝 reads zhao or chao depending on context) cannot
/// destabilize expectations.
pub struct FixtureRomanizer;

impl LogographicRomanizer for FixtureRomanizer {
    fn logographic_to_initials(&self, logographic: &str) -> Vec<String> {
        logographic
            .chars()
            .filter_map(|c| match c {
                '北' => Some("b"),
                '京' => Some("j"),
                '市' => Some("s"),
                '朝' => Some("c"),
                '阳' => Some("y"),
                '区' => Some("q"),
                '幸' => Some("x"),
                '福' => Some("f"),
                '路' => Some("l"),
                '号' => Some("h"),
                '上' => Some("s"),
                '海' => Some("h"),
                '浦' => Some("p"),
                '东' => Some("d"),
                '新' => Some("x"),
                '张' => Some("z"),
                '三' => Some("s"),
                '收' => Some("s"),
                '件' => Some("j"),
                '人' => Some("r"),
                '备' => Some("b"),
                '注' => Some("z"),
                '周' => Some("z"),
                '末' => Some("m"),
                '在' => Some("z"),
                '家' => Some("j"),
                _ => None,
            })
            .map(str::to_string)
            .collect()
    }
}
