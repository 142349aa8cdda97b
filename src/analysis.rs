//! Text analysis for the search index.
//!
//! Search keys are produced by running text through a chain of
//! [`char_filter::CharFilter`]s assembled in [`normalizer::SearchNormalizer`].
//! Index keys and queries share one instance, [`standard_normalizer`].

pub mod char_filter;
pub mod normalizer;

pub use normalizer::{SearchNormalizer, normalize_text, standard_normalizer};
