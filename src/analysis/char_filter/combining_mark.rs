use std::ops::RangeInclusive;

use super::CharFilter;

/// The Combining Diacritical Marks block.
pub const COMBINING_DIACRITICAL_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// A char filter that drops combining diacritical marks.
///
/// Only marks already separated from their base letter are removed, so run
/// an NFD [`super::unicode_normalize::UnicodeNormalizationCharFilter`] first.
#[derive(Debug, Clone, Default)]
pub struct CombiningMarkCharFilter;

impl CombiningMarkCharFilter {
    pub fn new() -> Self {
        CombiningMarkCharFilter
    }
}

impl CharFilter for CombiningMarkCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .filter(|c| !COMBINING_DIACRITICAL_MARKS.contains(c))
            .collect()
    }

    fn name(&self) -> &'static str {
        "combining_mark"
    }
}
