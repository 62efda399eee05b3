// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-aware number and percentage formatting.

use super::data::{LocaleData, PercentFormat};

pub const PLACEHOLDER: &str = "%s";
pub const NBSP: &str = "\u{a0}";
pub const NNBSP: &str = "\u{202f}";
pub const PERCENT: &str = "%";

impl PercentFormat {
    /// The pattern, with [`PLACEHOLDER`] standing for the number.
    pub fn pattern(&self) -> String {
        match self {
            PercentFormat::Plain => [PLACEHOLDER, PERCENT].concat(),
            PercentFormat::Nbsp => [PLACEHOLDER, NBSP, PERCENT].concat(),
            PercentFormat::NarrowNbsp => [PLACEHOLDER, NNBSP, PERCENT].concat(),
            PercentFormat::Prefix => [PERCENT, PLACEHOLDER].concat(),
        }
    }
}

/// Format `value` with `fraction_digits` decimals using the locale's
/// separators. Grouping only starts once the integer part has more than
/// `3 + minimum_grouping_digits - 1` digits (`1234` stays ungrouped in
/// Polish, `12 345` does not).
pub fn format_number(locale: &LocaleData, value: f64, fraction_digits: usize) -> String {
    let formatted = format!("{:.*}", fraction_digits, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }

    let threshold = 3 + locale.minimum_grouping_digits.max(1) as usize - 1;
    if integer.len() > threshold {
        let digits: Vec<char> = integer.chars().collect();
        let lead = digits.len() % 3;
        for (i, digit) in digits.iter().enumerate() {
            if i > 0 && (i + 3 - lead) % 3 == 0 {
                out.push(locale.group);
            }
            out.push(*digit);
        }
    } else {
        out.push_str(integer);
    }

    if let Some(fraction) = fraction {
        out.push(locale.decimal);
        out.push_str(fraction);
    }
    out
}

/// Format a ratio as a percentage (`0.5` → `50%`, `50 %`, ...).
pub fn format_percent(locale: &LocaleData, ratio: f64, fraction_digits: usize) -> String {
    let number = format_number(locale, ratio * 100.0, fraction_digits);
    locale.percent.pattern().replace(PLACEHOLDER, &number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::locale_from_code;

    fn loc(code: &str) -> &'static LocaleData {
        locale_from_code(code).unwrap()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(loc("en"), 1234567.0, 0), "1,234,567");
        assert_eq!(format_number(loc("de"), 1234567.5, 1), "1.234.567,5");
        assert_eq!(format_number(loc("en"), 123.0, 0), "123");
        assert_eq!(format_number(loc("en"), -4321.0, 0), "-4,321");
    }

    #[test]
    fn minimum_grouping_digits() {
        assert_eq!(format_number(loc("pl"), 1234.0, 0), "1234");
        assert_eq!(format_number(loc("pl"), 12345.0, 0), "12\u{a0}345");
    }

    #[test]
    fn quechua_percent_uses_nbsp() {
        assert_eq!(format_percent(loc("qu"), 0.5, 0), "50\u{a0}%");
        assert_eq!(PercentFormat::Nbsp.pattern(), format!("{}{}{}", PLACEHOLDER, NBSP, PERCENT));
    }

    #[test]
    fn percent_placement() {
        assert_eq!(format_percent(loc("en"), 0.125, 1), "12.5%");
        assert_eq!(format_percent(loc("tr"), 0.25, 0), "%25");
        assert_eq!(format_percent(loc("fr"), 0.25, 0), "25\u{202f}%");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_number(loc("en"), -0.0001, 2), "0.00");
    }
}
