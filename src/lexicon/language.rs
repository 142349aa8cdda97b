//! Language code resolution.
//!
//! The dataset marks each lexical form with a short language code such as
//! `L` or `PIE`. [`LANGUAGE_NAMES`] is the closed table of known codes;
//! anything not listed resolves to itself.

use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::lexicon::canonical::extract_lang_code;

/// Known language abbreviations and their display names.
///
/// Extend by adding rows. Codes are case-sensitive (`Ger` and `GE` differ).
pub const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("PIE", "Proto-Indo-European"),
    ("F", "French"),
    ("ONF", "Old North French"),
    ("AF", "Anglo-French"),
    ("MF", "Middle French"),
    ("OF", "Old French"),
    ("ASpan", "American Spanish"),
    ("L", "Latin"),
    ("MediL", "Medieval Latin"),
    ("ModL", "Modern Latin"),
    ("LateL", "Late Latin"),
    ("VL", "Vulgar Latin"),
    ("OE", "Old English"),
    ("PGer", "Proto-Germanic"),
    ("H", "Hebrew"),
    ("Avest", "Avestan"),
    ("IndoIr", "Indo-Iranian"),
    ("San", "Sanskrit"),
    ("G", "Greek"),
    ("GE", "Greenland Eskimo"),
    ("I", "Italian"),
    ("A", "Arabic"),
    ("Sy", "Syriac"),
    ("Per", "Persian"),
    ("Ira", "Iranian"),
    ("Por", "Portuguese"),
    ("OHGer", "Old High German"),
    ("Adut", "Afrikaans Dutch"),
    ("Ger", "German"),
    ("AL", "Anglo-Latin"),
    ("Cel", "Celtic"),
    ("Tur", "Turkish"),
    ("ModG", "Modern Greek"),
    ("ChuL", "Church Latin"),
    ("EG", "Ecclesiastical Greek"),
    ("OL", "Old Latin"),
    ("PI", "Proto-Italic"),
    ("Nor", "Norse"),
    ("ONor", "Old Norse"),
    ("Dan", "Danish"),
    ("FCan", "French-Canadian"),
    ("Fran", "Frankish"),
    ("Gae", "Gaelic"),
    ("Scot", "Scottish"),
    ("Hin", "Hindi"),
    ("Yid", "Yiddish"),
    ("Rus", "Russian"),
    ("ORus", "Old Russian"),
    ("OPro", "Old Provençal"),
    ("LGer", "Low German"),
    ("WGer", "West Germanic"),
    ("Ir", "Irish"),
    ("Nah", "Nahuatl (Aztecan)"),
    ("Mal", "Malay"),
    ("Ch", "Chinese"),
    ("Scan", "Scandinavian"),
    ("Wel", "Welsh"),
    ("Sem", "Semitic"),
    ("Norw", "Norwegian"),
    ("Swe", "Swedish"),
    ("Sla", "Slavonic"),
    ("Jap", "Japanese"),
    ("Ber", "Berrichon"),
    ("Afr", "African"),
    ("SerCro", "Serbo-Croatian"),
    ("Aram", "Aramaic"),
    ("Gas", "Gascon"),
    ("Egy", "Egyptian"),
    ("Tup", "Tupi"),
    ("Jav", "Javanese"),
    ("Ben", "Bengali"),
    ("Fin", "Finnish"),
    ("Kut", "Kutchin"),
    ("Guugu", "Yimidhirr"),
    ("Sio", "Siouan"),
    ("Nepa", "Nepalese"),
    ("Dra", "Dravidian"),
    ("Pol", "Polish"),
    ("OFri", "Old Frisian"),
    ("Canto", "Cantonese"),
    ("Esto", "Estonian"),
    ("Lith", "Lithuanian"),
    ("GaRo", "Gallo-Roman"),
    ("CuSpan", "Cuban Spanish"),
    ("Araw", "Arawakan"),
    ("Maori", "Maori"),
    ("NEAl", "Southern New England Algonquian"),
    ("Nar", "Narragansett"),
    ("Flem", "Flemish"),
    ("Aztec", "Aztec"),
    ("ByG", "Byzantine Greek"),
    ("Que", "Quechua"),
    ("Afrika", "Afrikaans"),
    ("Ojib", "Ojibwa"),
    ("Algo", "Algonquian"),
    ("preL", "Pre-Latin"),
    ("Serb", "Serbian"),
    ("Aben", "Abenaki"),
    ("Hun", "Hungarian"),
    ("Lush", "Lushootseed"),
    ("Dako", "Dakota"),
    ("Cro", "Croatian"),
    ("EL", "Extinct Language"),
    ("E", "English"),
];

lazy_static! {
    static ref LANGUAGE_LOOKUP: AHashMap<&'static str, &'static str> =
        LANGUAGE_NAMES.iter().copied().collect();
}

/// Resolve a language code to its display name.
///
/// Unknown codes are returned as-is.
pub fn resolve_language(code: &str) -> &str {
    match LANGUAGE_LOOKUP.get(code) {
        Some(name) => *name,
        None => code,
    }
}

/// Resolve the language name for a canonical id via its `_code` suffix.
pub fn language_name_for_id(id: &str) -> &str {
    resolve_language(extract_lang_code(id))
}
