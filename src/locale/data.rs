// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale, language and territory tables.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weekday {
    Monday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Measurement {
    Metric,
    Us,
    Uk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaperSize {
    A4,
    UsLetter,
}

/// Where the percent sign goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PercentFormat {
    /// `50%`
    Plain,
    /// `50 %` with a no-break space
    Nbsp,
    /// `50 %` with a narrow no-break space
    NarrowNbsp,
    /// `%50`
    Prefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerritoryData {
    pub code: &'static str,
    pub first_day_of_week: Weekday,
    pub measurement: Measurement,
    pub paper: PaperSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageData {
    pub code: &'static str,
    pub default_territory: &'static str,
    pub default_script: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleData {
    pub code: &'static str,
    pub language: &'static str,
    pub territory: Option<&'static str>,
    pub endonym: &'static str,
    pub endonym_sortable: &'static str,
    pub direction: Direction,
    pub decimal: char,
    pub group: char,
    pub minimum_grouping_digits: u8,
    pub percent: PercentFormat,
}

impl LocaleData {
    pub fn language(&self) -> LanguageData {
        language(self.language)
    }

    /// The explicit territory, or the language's default one.
    pub fn territory(&self) -> TerritoryData {
        territory(
            self.territory
                .unwrap_or_else(|| self.language().default_territory),
        )
    }

    pub fn script(&self) -> &'static str {
        self.language().default_script
    }
}

const DEFAULT_TERRITORY: TerritoryData = TerritoryData {
    code: "001",
    first_day_of_week: Weekday::Monday,
    measurement: Measurement::Metric,
    paper: PaperSize::A4,
};

/// Every territory code accepted by [`territory`]: ISO 3166-1 alpha-2
/// countries, then UN M.49 regions.
const TERRITORY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW",
    "AX", "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN",
    "BO", "BQ", "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG",
    "CH", "CI", "CK", "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ",
    "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI",
    "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL",
    "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR",
    "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA",
    "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME",
    "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU",
    "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP",
    "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM", "PN", "PR",
    "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC", "SD",
    "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE",
    "VG", "VI", "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
    "001", "002", "003", "005", "009", "011", "013", "014", "015", "017", "018", "019",
    "021", "029", "030", "034", "035", "039", "053", "054", "057", "061", "142", "143",
    "145", "150", "151", "154", "155", "202", "419",
];

/// Territories that differ from the defaults (Monday, metric, A4). Every
/// other ISO 3166 or UN M.49 code resolves to the defaults.
const TERRITORIES: &[TerritoryData] = &[
    TerritoryData { code: "US", first_day_of_week: Weekday::Sunday, measurement: Measurement::Us, paper: PaperSize::UsLetter },
    TerritoryData { code: "CA", first_day_of_week: Weekday::Sunday, measurement: Measurement::Metric, paper: PaperSize::UsLetter },
    TerritoryData { code: "GB", first_day_of_week: Weekday::Monday, measurement: Measurement::Uk, paper: PaperSize::A4 },
    TerritoryData { code: "BR", first_day_of_week: Weekday::Sunday, measurement: Measurement::Metric, paper: PaperSize::A4 },
    TerritoryData { code: "PE", first_day_of_week: Weekday::Sunday, measurement: Measurement::Metric, paper: PaperSize::UsLetter },
    TerritoryData { code: "JP", first_day_of_week: Weekday::Sunday, measurement: Measurement::Metric, paper: PaperSize::A4 },
    TerritoryData { code: "IL", first_day_of_week: Weekday::Sunday, measurement: Measurement::Metric, paper: PaperSize::A4 },
    TerritoryData { code: "AU", first_day_of_week: Weekday::Monday, measurement: Measurement::Metric, paper: PaperSize::A4 },
    TerritoryData { code: "EG", first_day_of_week: Weekday::Saturday, measurement: Measurement::Metric, paper: PaperSize::A4 },
];

const LANGUAGES: &[LanguageData] = &[
    LanguageData { code: "cs", default_territory: "CZ", default_script: "Latn" },
    LanguageData { code: "da", default_territory: "DK", default_script: "Latn" },
    LanguageData { code: "de", default_territory: "DE", default_script: "Latn" },
    LanguageData { code: "en", default_territory: "US", default_script: "Latn" },
    LanguageData { code: "es", default_territory: "ES", default_script: "Latn" },
    LanguageData { code: "fi", default_territory: "FI", default_script: "Latn" },
    LanguageData { code: "fr", default_territory: "FR", default_script: "Latn" },
    LanguageData { code: "he", default_territory: "IL", default_script: "Hebr" },
    LanguageData { code: "is", default_territory: "IS", default_script: "Latn" },
    LanguageData { code: "it", default_territory: "IT", default_script: "Latn" },
    LanguageData { code: "ja", default_territory: "JP", default_script: "Jpan" },
    LanguageData { code: "km", default_territory: "KH", default_script: "Khmr" },
    LanguageData { code: "lt", default_territory: "LT", default_script: "Latn" },
    LanguageData { code: "nb", default_territory: "NO", default_script: "Latn" },
    LanguageData { code: "nl", default_territory: "NL", default_script: "Latn" },
    LanguageData { code: "pl", default_territory: "PL", default_script: "Latn" },
    LanguageData { code: "pt", default_territory: "BR", default_script: "Latn" },
    LanguageData { code: "qu", default_territory: "PE", default_script: "Latn" },
    LanguageData { code: "ru", default_territory: "RU", default_script: "Cyrl" },
    LanguageData { code: "sv", default_territory: "SE", default_script: "Latn" },
    LanguageData { code: "tr", default_territory: "TR", default_script: "Latn" },
    LanguageData { code: "zh", default_territory: "CN", default_script: "Hans" },
];

macro_rules! locale {
    ($code:expr, $lang:expr, $terr:expr, $endonym:expr, $sortable:expr, $dec:expr, $grp:expr, $min:expr, $pct:ident) => {
        LocaleData {
            code: $code,
            language: $lang,
            territory: $terr,
            endonym: $endonym,
            endonym_sortable: $sortable,
            direction: Direction::Ltr,
            decimal: $dec,
            group: $grp,
            minimum_grouping_digits: $min,
            percent: PercentFormat::$pct,
        }
    };
}

const NBSP: char = '\u{a0}';
const NNBSP: char = '\u{202f}';

const LOCALES: &[LocaleData] = &[
    locale!("cs", "cs", None, "čeština", "CESTINA", ',', NBSP, 1, Nbsp),
    locale!("da", "da", None, "dansk", "DANSK", ',', '.', 1, Nbsp),
    locale!("de", "de", None, "Deutsch", "DEUTSCH", ',', '.', 1, Nbsp),
    locale!("de-AT", "de", Some("AT"), "Österreichisches Deutsch", "OSTERREICHISCHES DEUTSCH", ',', NBSP, 1, Nbsp),
    locale!("de-CH", "de", Some("CH"), "Schweizer Hochdeutsch", "SCHWEIZER HOCHDEUTSCH", '.', '\u{2019}', 1, Plain),
    locale!("en", "en", None, "English", "ENGLISH", '.', ',', 1, Plain),
    locale!("en-AU", "en", Some("AU"), "Australian English", "AUSTRALIAN ENGLISH", '.', ',', 1, Plain),
    locale!("en-CA", "en", Some("CA"), "Canadian English", "CANADIAN ENGLISH", '.', ',', 1, Plain),
    locale!("en-GB", "en", Some("GB"), "British English", "BRITISH ENGLISH", '.', ',', 1, Plain),
    locale!("en-US", "en", Some("US"), "American English", "AMERICAN ENGLISH", '.', ',', 1, Plain),
    locale!("es", "es", None, "español", "ESPANOL", ',', '.', 2, Nbsp),
    locale!("fi", "fi", None, "suomi", "SUOMI", ',', NBSP, 1, Nbsp),
    locale!("fr", "fr", None, "français", "FRANCAIS", ',', NNBSP, 1, NarrowNbsp),
    locale!("fr-CA", "fr", Some("CA"), "français canadien", "FRANCAIS CANADIEN", ',', NBSP, 1, Nbsp),
    LocaleData {
        code: "he",
        language: "he",
        territory: None,
        endonym: "עברית",
        endonym_sortable: "עברית",
        direction: Direction::Rtl,
        decimal: '.',
        group: ',',
        minimum_grouping_digits: 1,
        percent: PercentFormat::Plain,
    },
    locale!("is", "is", None, "íslenska", "ISLENSKA", ',', '.', 1, Plain),
    locale!("it", "it", None, "italiano", "ITALIANO", ',', '.', 1, Plain),
    locale!("ja", "ja", None, "日本語", "日本語", '.', ',', 1, Plain),
    locale!("km", "km", None, "ខ្មែរ", "ខ្មែរ", ',', '.', 1, Plain),
    locale!("lt", "lt", None, "lietuvių", "LIETUVIU", ',', NBSP, 1, Nbsp),
    locale!("nb", "nb", None, "norsk bokmål", "NORSK BOKMAL", ',', NBSP, 1, Nbsp),
    locale!("nl", "nl", None, "Nederlands", "NEDERLANDS", ',', '.', 1, Plain),
    locale!("pl", "pl", None, "polski", "POLSKI", ',', NBSP, 2, Plain),
    locale!("pt", "pt", None, "português", "PORTUGUES", ',', '.', 1, Plain),
    locale!("pt-PT", "pt", Some("PT"), "português europeu", "PORTUGUES EUROPEU", ',', NBSP, 2, Plain),
    locale!("qu", "qu", None, "Runasimi", "RUNASIMI", '.', ',', 1, Nbsp),
    locale!("ru", "ru", None, "русский", "РУССКИЙ", ',', NBSP, 1, Nbsp),
    locale!("sv", "sv", None, "svenska", "SVENSKA", ',', NBSP, 1, Nbsp),
    locale!("tr", "tr", None, "Türkçe", "TURKCE", ',', '.', 1, Prefix),
    locale!("zh-Hans", "zh", None, "简体中文", "简体中文", '.', ',', 1, Plain),
];

pub fn all_locales() -> &'static [LocaleData] {
    LOCALES
}

/// Find a locale by tag. Accepts `en-GB`, `en_gb` or `EN-gb`; a tag with an
/// unknown region falls back to its language (`da-DK` → `da`).
pub fn locale_from_code(code: &str) -> Option<&'static LocaleData> {
    let normalized = normalize_tag(code);
    if let Some(found) = LOCALES.iter().find(|l| l.code == normalized) {
        return Some(found);
    }
    let primary = normalized.split('-').next().unwrap_or("");
    LOCALES.iter().find(|l| l.code == primary)
}

/// Language metadata; unknown codes get a Latin-script, world-territory entry.
pub fn language(code: &str) -> LanguageData {
    LANGUAGES
        .iter()
        .copied()
        .find(|l| l.code == code)
        .unwrap_or(LanguageData {
            code: "und",
            default_territory: "001",
            default_script: "Latn",
        })
}

/// Territory metadata. Known territories without overrides keep their own
/// code and share the world defaults; unknown codes resolve to `001`.
pub fn territory(code: &str) -> TerritoryData {
    let upper = code.trim().to_ascii_uppercase();
    if let Some(found) = TERRITORIES.iter().find(|t| t.code == upper) {
        return *found;
    }
    match TERRITORY_CODES.iter().find(|known| **known == upper) {
        Some(known) => TerritoryData {
            code: *known,
            ..DEFAULT_TERRITORY
        },
        None => DEFAULT_TERRITORY,
    }
}

fn normalize_tag(code: &str) -> String {
    let mut parts = code.trim().split(['-', '_']);
    let mut out = parts.next().unwrap_or("").to_ascii_lowercase();
    for part in parts {
        out.push('-');
        match part.len() {
            // script subtag: title case
            4 => {
                let mut chars = part.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.push_str(&chars.as_str().to_ascii_lowercase());
                }
            }
            _ => out.push_str(&part.to_ascii_uppercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quechua_metadata() {
        let qu = locale_from_code("qu").unwrap();
        assert_eq!(qu.endonym, "Runasimi");
        assert_eq!(qu.endonym_sortable, "RUNASIMI");
        assert_eq!(qu.percent, PercentFormat::Nbsp);
        assert_eq!(qu.territory().code, "PE");
    }

    #[test]
    fn tags_are_normalized() {
        assert_eq!(locale_from_code("en_gb").map(|l| l.code), Some("en-GB"));
        assert_eq!(locale_from_code("ZH-hans").map(|l| l.code), Some("zh-Hans"));
        assert_eq!(locale_from_code("da-DK").map(|l| l.code), Some("da"));
        assert!(locale_from_code("xx").is_none());
    }

    #[test]
    fn territories_keep_their_code() {
        let comoros = territory("KM");
        assert_eq!(comoros.code, "KM");
        assert_eq!(comoros, TerritoryData { code: "KM", ..DEFAULT_TERRITORY });
        assert_eq!(territory("145").code, "145");
        assert_eq!(territory("km").code, "KM");
        assert_eq!(territory("ZZ"), DEFAULT_TERRITORY);
        assert_eq!(territory("145").first_day_of_week, Weekday::Monday);
        assert_eq!(territory("145").paper, PaperSize::A4);
        assert_eq!(territory("us").paper, PaperSize::UsLetter);
    }

    #[test]
    fn rtl_languages() {
        assert_eq!(locale_from_code("he").unwrap().direction, Direction::Rtl);
        assert_eq!(locale_from_code("he").unwrap().script(), "Hebr");
    }

    #[test]
    fn every_locale_language_is_known() {
        for locale in all_locales() {
            assert_ne!(locale.language().code, "und", "{} has no language entry", locale.code);
        }
    }
}
