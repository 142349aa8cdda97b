//! Lexical form handling for raw etymology tokens.
//!
//! Raw dataset tokens carry alternate spellings and language codes in a loose
//! notation. This module turns them into canonical node ids and maps the
//! embedded language codes to display names.

pub mod canonical;
pub mod language;

pub use canonical::{canonicalize_id, extract_lang_code, split_forms, strip_lang_code};
pub use language::{language_name_for_id, resolve_language};
