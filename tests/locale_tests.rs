// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale lookups and number formatting through the public API.

use treeline::locale::{
    all_locales, format_number, format_percent, language, locale_from_code, native_name, t, territory,
    Lang, PaperSize, Weekday, NBSP,
};

#[test]
fn quechua_percent() {
    let qu = locale_from_code("qu").unwrap();
    assert_eq!(format_percent(qu, 0.5, 0), format!("50{NBSP}%"));
}

#[test]
fn territories() {
    let comoros = territory("KM");
    assert_eq!(comoros.code, "KM");
    assert_eq!(comoros.first_day_of_week, territory("001").first_day_of_week);
    let europe = territory("145");
    assert_eq!(europe.code, "145");
    assert_eq!(europe.first_day_of_week, Weekday::Monday);
    assert_eq!(europe.paper, PaperSize::A4);
}

#[test]
fn tags_are_normalized() {
    assert_eq!(locale_from_code("EN_gb").unwrap().code, "en-GB");
    assert_eq!(locale_from_code("da-DK").unwrap().code, "da");
    assert!(locale_from_code("xx").is_none());
}

#[test]
fn every_locale_formats_numbers() {
    for locale in all_locales() {
        let text = format_number(locale, 1234.5, 1);
        assert!(text.contains(locale.decimal), "{}: {text}", locale.code);
        assert!(!locale.endonym.is_empty());
    }
}

#[test]
fn names_and_translations() {
    assert_eq!(native_name("pl"), Some("polski"));
    assert_eq!(t(Lang::En, "relation.head"), "head");
    assert_eq!(language("pl").default_territory, "PL");
}
