//! Char filter implementations for search-key normalization.
//!
//! Each filter rewrites a whole string. Filters are chained by
//! [`crate::analysis::normalizer::SearchNormalizer`].
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//! - [`combining_mark::CombiningMarkCharFilter`] - Removes combining diacritical marks
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lowercasing
//!
//! # Examples
//!
//! ```
//! use etymon::analysis::char_filter::CharFilter;
//! use etymon::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! assert_eq!(LowercaseCharFilter::new().filter("Café"), "café");
//! ```

/// Trait for character filters that transform text before it becomes a key.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod combining_mark;
pub mod lowercase;
pub mod unicode_normalize;
