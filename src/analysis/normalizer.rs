//! Search-key normalizer built from a chain of char filters.
//!
//! The standard chain is:
//! 1. NFD decomposition
//! 2. Combining diacritical mark removal (U+0300..U+036F)
//! 3. Lowercasing
//!
//! # Examples
//!
//! ```
//! use etymon::analysis::normalize_text;
//!
//! assert_eq!(normalize_text("Café"), normalize_text("cafe"));
//! assert_eq!(normalize_text("Provençal"), "provencal");
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::combining_mark::CombiningMarkCharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};

/// An ordered chain of char filters.
#[derive(Clone)]
pub struct SearchNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    name: String,
}

impl std::fmt::Debug for SearchNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<_> = self.char_filters.iter().map(|c| c.name()).collect();
        f.debug_struct("SearchNormalizer")
            .field("name", &self.name)
            .field("char_filters", &filters)
            .finish()
    }
}

impl Default for SearchNormalizer {
    fn default() -> Self {
        let nfd = UnicodeNormalizationCharFilter::new(NormalizationForm::NFD);
        Self::empty()
            .add_char_filter(Arc::new(nfd))
            .add_char_filter(Arc::new(CombiningMarkCharFilter::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .with_name("standard")
    }
}

impl SearchNormalizer {
    /// A normalizer with no filters; it returns its input unchanged.
    pub fn empty() -> Self {
        SearchNormalizer {
            char_filters: Vec::new(),
            name: "empty".to_string(),
        }
    }

    /// Append a char filter to the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run `text` through every filter in order.
    pub fn normalize(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc))
    }
}

lazy_static! {
    static ref STANDARD_NORMALIZER: Arc<SearchNormalizer> = Arc::new(SearchNormalizer::default());
}

/// The process-wide standard normalizer.
///
/// The search index builder and [`SearchIndex`](crate::search_index::SearchIndex)
/// both default to this instance, so index keys and queries always go through
/// the same chain.
pub fn standard_normalizer() -> Arc<SearchNormalizer> {
    Arc::clone(&STANDARD_NORMALIZER)
}

/// Normalize text with the standard normalizer.
pub fn normalize_text(text: &str) -> String {
    STANDARD_NORMALIZER.normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritic_and_case_insensitive() {
        assert_eq!(normalize_text("Café"), normalize_text("cafe"));
        assert_eq!(normalize_text("CAFE\u{0301}"), "cafe");
        assert_eq!(normalize_text("probāre Latin"), "probare latin");
    }

    #[test]
    fn test_standard_chain_order() {
        let normalizer = SearchNormalizer::default();
        let names: Vec<_> = normalizer.char_filters().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["unicode_normalization", "combining_mark", "lowercase"]
        );
        assert_eq!(normalizer.name(), "standard");
    }

    #[test]
    fn test_standard_normalizer_is_shared() {
        assert!(Arc::ptr_eq(&standard_normalizer(), &standard_normalizer()));
        assert_eq!(standard_normalizer().name(), "standard");
    }

    #[test]
    fn test_empty_normalizer_is_identity() {
        assert_eq!(SearchNormalizer::empty().normalize("Café"), "Café");
    }

    #[test]
    fn test_non_latin_scripts_survive() {
        assert_eq!(normalize_text("Ἀθῆναι"), "αθηναι");
        assert_eq!(normalize_text("манет"), "манет");
    }
}
