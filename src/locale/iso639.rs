// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and names.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use super::data::locale_from_code;

/// All ISO 639-1 two-letter codes, sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// Codes are lowercase; `EN` and three-letter codes are rejected.
///
/// ```
/// assert!(treeline::locale::is_valid_iso639_1("qu"));
/// assert!(!treeline::locale::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

/// English name of an ISO 639-1 code, for the languages the locale
/// tables and census forms use.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "cs" => Some("Czech"),
        "da" => Some("Danish"),
        "de" => Some("German"),
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fi" => Some("Finnish"),
        "fr" => Some("French"),
        "he" => Some("Hebrew"),
        "is" => Some("Icelandic"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "km" => Some("Khmer"),
        "lt" => Some("Lithuanian"),
        "nb" | "no" => Some("Norwegian"),
        "nl" => Some("Dutch"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "qu" => Some("Quechua"),
        "ru" => Some("Russian"),
        "sv" => Some("Swedish"),
        "tr" => Some("Turkish"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}

/// The language's name written in itself, taken from the locale tables.
pub fn native_name(code: &str) -> Option<&'static str> {
    if !is_valid_iso639_1(code) {
        return None;
    }
    locale_from_code(code).map(|locale| locale.endonym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(ISO_639_1.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("da"));
        assert!(is_valid_iso639_1("qu"));
        assert!(is_valid_iso639_1("km"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1("EN"));
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("qu"), Some("Quechua"));
        assert_eq!(language_name("lt"), Some("Lithuanian"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn native_names_resolve() {
        assert_eq!(native_name("qu"), Some("Runasimi"));
        assert_eq!(native_name("da"), Some("dansk"));
        assert_eq!(native_name("aa"), None);
        assert_eq!(native_name("xx"), None);
    }
}
