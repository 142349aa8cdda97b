//! Canonical id derivation for raw etymology tokens.
//!
//! A raw token may list several written forms separated by `/`, e.g.
//! `/manet:u/_Unami`. The canonical id is the first form, with the
//! language suffix re-attached when the dataset tokenized it as a separate
//! form.
//!
//! # Examples
//!
//! ```
//! use etymon::lexicon::canonical::canonicalize_id;
//!
//! assert_eq!(canonicalize_id("/manet:u/_Unami"), "manet:u_Unami");
//! assert_eq!(canonicalize_id("mouse (n.)_E"), "mouse (n.)_E");
//! ```

/// Language code used when an id carries no `_code` suffix.
pub const UNKNOWN_LANG_CODE: &str = "UNK";

const FORM_SEPARATOR: char = '/';
const LANG_SEPARATOR: char = '_';

/// Split a raw token into its candidate written forms.
///
/// Segments are trimmed and empty segments dropped, so leading and trailing
/// `/` delimiters disappear.
pub fn split_forms(raw: &str) -> Vec<&str> {
    raw.split(FORM_SEPARATOR)
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .collect()
}

/// Derive the canonical id for a raw token.
///
/// Never fails: a token without any usable form canonicalizes to its trimmed
/// self, which may be the empty string. Applying this to an already
/// canonical id returns it unchanged.
pub fn canonicalize_id(raw: &str) -> String {
    let forms = split_forms(raw);

    let (first, last) = match (forms.first(), forms.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return raw.trim().to_string(),
    };

    // Detached language code, e.g. ["manet:u", "_Unami"].
    if forms.len() >= 2 && last.starts_with(LANG_SEPARATOR) && !first.contains(LANG_SEPARATOR) {
        let code = last.strip_prefix(LANG_SEPARATOR).unwrap_or(last);
        return format!("{first}{LANG_SEPARATOR}{code}");
    }

    first.to_string()
}

/// Extract the language code after the final `_` of an id.
///
/// Returns [`UNKNOWN_LANG_CODE`] when the id has no `_` or nothing follows it.
pub fn extract_lang_code(id: &str) -> &str {
    match id.rsplit_once(LANG_SEPARATOR) {
        Some((_, code)) if !code.is_empty() => code,
        _ => UNKNOWN_LANG_CODE,
    }
}

/// Strip the trailing `_code` suffix from an id, leaving the display word.
///
/// Ids without a non-empty prefix and suffix around the final `_` are
/// returned unchanged.
pub fn strip_lang_code(id: &str) -> &str {
    match id.rsplit_once(LANG_SEPARATOR) {
        Some((base, code)) if !base.is_empty() && !code.is_empty() => base,
        _ => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_forms() {
        assert_eq!(split_forms("/manet:u/_Unami"), vec!["manet:u", "_Unami"]);
        assert_eq!(split_forms(" a / b /"), vec!["a", "b"]);
        assert!(split_forms("//").is_empty());
    }

    #[test]
    fn test_detached_language_code() {
        assert_eq!(canonicalize_id("/manet:u/_Unami"), "manet:u_Unami");
        assert_eq!(canonicalize_id("manet:u/_Unami"), "manet:u_Unami");
    }

    #[test]
    fn test_first_form_wins() {
        assert_eq!(canonicalize_id("colour_E/color_E"), "colour_E");
        // First form already carries a code, so the detached suffix is ignored.
        assert_eq!(canonicalize_id("chief_OF/_L"), "chief_OF");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(canonicalize_id(""), "");
        assert_eq!(canonicalize_id("   "), "");
        assert_eq!(canonicalize_id(" / / "), "/ /");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "mouse (n.)_E",
            "/manet:u/_Unami",
            "*mus-_PIE",
            "plain",
            "a/b/c",
            "  spaced_L  ",
            "",
            "x/_",
        ];
        for raw in samples {
            let once = canonicalize_id(raw);
            assert_eq!(canonicalize_id(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_extract_lang_code() {
        assert_eq!(extract_lang_code("mouse (n.)_E"), "E");
        assert_eq!(extract_lang_code("*mus-_PIE"), "PIE");
        assert_eq!(extract_lang_code("en_hexagon"), "hexagon");
        assert_eq!(extract_lang_code("plain"), UNKNOWN_LANG_CODE);
        assert_eq!(extract_lang_code("dangling_"), UNKNOWN_LANG_CODE);
    }

    #[test]
    fn test_strip_lang_code() {
        assert_eq!(strip_lang_code("mouse (n.)_E"), "mouse (n.)");
        assert_eq!(strip_lang_code("manet:u_Unami"), "manet:u");
        assert_eq!(strip_lang_code("plain"), "plain");
        assert_eq!(strip_lang_code("_E"), "_E");
    }
}
