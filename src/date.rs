// SPDX-License-Identifier: PMPL-1.0-or-later

//! GEDCOM date values
//!
//! Genealogical dates are often partial (`FEB 1850`, `1850`) or qualified
//! (`ABT 1850`, `BEF 12 MAR 1851`). A [`GedcomDate`] keeps the precision it
//! was recorded with, and age arithmetic only compares the fields both
//! dates actually carry.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("empty date")]
    Empty,
    #[error("unrecognised date token '{0}'")]
    BadToken(String),
    #[error("year {0} is out of range")]
    YearOutOfRange(i32),
    #[error("day {day} is not valid for {month}/{year}")]
    BadDay { day: u32, month: u32, year: i32 },
}

/// Qualifier written in front of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualifier {
    About,
    Calculated,
    Estimated,
    Before,
    After,
    Interpreted,
}

impl Qualifier {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "ABT" | "ABOUT" => Some(Qualifier::About),
            "CAL" => Some(Qualifier::Calculated),
            "EST" => Some(Qualifier::Estimated),
            "BEF" => Some(Qualifier::Before),
            "AFT" => Some(Qualifier::After),
            "INT" => Some(Qualifier::Interpreted),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Qualifier::About => "ABT",
            Qualifier::Calculated => "CAL",
            Qualifier::Estimated => "EST",
            Qualifier::Before => "BEF",
            Qualifier::After => "AFT",
            Qualifier::Interpreted => "INT",
        }
    }
}

/// A (possibly partial) Gregorian date in GEDCOM notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GedcomDate {
    qualifier: Option<Qualifier>,
    day: Option<u32>,
    month: Option<u32>,
    year: i32,
}

impl GedcomDate {
    /// A fully specified date. Used by the census tables.
    pub const fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            qualifier: None,
            day: Some(day),
            month: Some(month),
            year,
        }
    }

    pub const fn year_only(year: i32) -> Self {
        Self {
            qualifier: None,
            day: None,
            month: None,
            year,
        }
    }

    /// Parse `[qualifier] [[day] month] year`. Ranges (`BET x AND y`,
    /// `FROM x TO y`) keep their first date.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let upper = text.trim().to_ascii_uppercase();
        let mut tokens: Vec<&str> = upper.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(DateError::Empty);
        }

        let mut qualifier = None;
        match tokens[0] {
            "BET" | "FROM" => {
                tokens.remove(0);
                if let Some(end) = tokens.iter().position(|t| *t == "AND" || *t == "TO") {
                    tokens.truncate(end);
                }
            }
            "TO" => {
                tokens.remove(0);
                qualifier = Some(Qualifier::Before);
            }
            first => {
                if let Some(q) = Qualifier::parse(first) {
                    qualifier = Some(q);
                    tokens.remove(0);
                }
            }
        }

        let (day, month, year) = match tokens.as_slice() {
            [year] => (None, None, parse_year(year)?),
            [month, year] => (None, Some(parse_month(month)?), parse_year(year)?),
            [day, month, year] => (
                Some(parse_day(day)?),
                Some(parse_month(month)?),
                parse_year(year)?,
            ),
            [] => return Err(DateError::Empty),
            [extra, ..] => return Err(DateError::BadToken((*extra).to_string())),
        };

        if let (Some(d), Some(m)) = (day, month) {
            if NaiveDate::from_ymd_opt(year, m, d).is_none() {
                return Err(DateError::BadDay {
                    day: d,
                    month: m,
                    year,
                });
            }
        }

        Ok(Self {
            qualifier,
            day,
            month,
            year,
        })
    }

    pub fn qualifier(&self) -> Option<Qualifier> {
        self.qualifier
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Three-letter GEDCOM month abbreviation, when known.
    pub fn month_abbreviation(&self) -> Option<&'static str> {
        self.month.map(|m| MONTHS[(m - 1) as usize])
    }

    /// Earliest calendar day covered by this date.
    pub fn min_date(&self) -> NaiveDate {
        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);
        NaiveDate::from_ymd_opt(self.year, month, day).unwrap_or(NaiveDate::MIN)
    }

    /// Latest calendar day covered by this date.
    pub fn max_date(&self) -> NaiveDate {
        match (self.month, self.day) {
            (Some(m), Some(d)) => NaiveDate::from_ymd_opt(self.year, m, d),
            (Some(m), None) => NaiveDate::from_ymd_opt(self.year, m, 1)
                .and_then(|first| first.checked_add_months(Months::new(1)))
                .and_then(|next| next.pred_opt()),
            _ => NaiveDate::from_ymd_opt(self.year, 12, 31),
        }
        .unwrap_or(NaiveDate::MAX)
    }

    /// True when this date certainly lies before `other`.
    pub fn is_before(&self, other: &GedcomDate) -> bool {
        self.max_date() < other.min_date()
    }

    /// True when this date lies in the twelve months up to and including `other`.
    pub fn is_within_year_before(&self, other: &GedcomDate) -> bool {
        let end = other.min_date();
        let start = end.checked_sub_months(Months::new(12)).unwrap_or(end);
        let this = self.min_date();
        self.month.is_some() && this > start && this <= end
    }
}

impl fmt::Display for GedcomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(q) = self.qualifier {
            write!(f, "{} ", q.tag())?;
        }
        if let Some(d) = self.day {
            write!(f, "{:02} ", d)?;
        }
        if let Some(m) = self.month_abbreviation() {
            write!(f, "{} ", m)?;
        }
        write!(f, "{}", self.year)
    }
}

impl TryFrom<String> for GedcomDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GedcomDate::parse(&value)
    }
}

impl From<GedcomDate> for String {
    fn from(value: GedcomDate) -> Self {
        value.to_string()
    }
}

/// Whole years from `birth` to `at`, comparing only the precision both carry.
pub fn age_years(birth: &GedcomDate, at: &GedcomDate) -> i32 {
    let mut years = at.year.saturating_sub(birth.year);
    if let (Some(bm), Some(am)) = (birth.month, at.month) {
        let birthday_pending = match (birth.day, at.day) {
            (Some(bd), Some(ad)) => (am, ad) < (bm, bd),
            _ => am < bm,
        };
        if birthday_pending {
            years = years.saturating_sub(1);
        }
    }
    years.max(0)
}

/// Whole months from `birth` to `at`, or `None` without month precision.
pub fn age_months(birth: &GedcomDate, at: &GedcomDate) -> Option<i32> {
    let (bm, am) = (birth.month? as i32, at.month? as i32);
    let mut months = at
        .year
        .saturating_sub(birth.year)
        .saturating_mul(12)
        .saturating_add(am - bm);
    if let (Some(bd), Some(ad)) = (birth.day, at.day) {
        if ad < bd {
            months = months.saturating_sub(1);
        }
    }
    Some(months.max(0))
}

/// Years are limited to what a calendar date can represent.
fn parse_year(token: &str) -> Result<i32, DateError> {
    let year = token
        .parse::<i32>()
        .map_err(|_| DateError::BadToken(token.to_string()))?;
    if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    Ok(year)
}

fn parse_month(token: &str) -> Result<u32, DateError> {
    MONTHS
        .iter()
        .position(|m| *m == token)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| DateError::BadToken(token.to_string()))
}

fn parse_day(token: &str) -> Result<u32, DateError> {
    match token.parse::<u32>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(DateError::BadToken(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_years_are_rejected() {
        assert_eq!(
            GedcomDate::parse("JAN -200000000"),
            Err(DateError::YearOutOfRange(-200000000))
        );
        assert!(GedcomDate::parse("2147483647").is_err());
    }

    #[test]
    fn ages_saturate_at_extreme_years() {
        let birth = GedcomDate::ymd(i32::MIN, 1, 1);
        let at = GedcomDate::ymd(i32::MAX, 1, 1);
        assert_eq!(age_years(&birth, &at), i32::MAX);
        assert_eq!(age_months(&birth, &at), Some(i32::MAX));
        assert_eq!(age_years(&at, &birth), 0);
    }

    #[test]
    fn parses_full_and_partial_dates() {
        let full = GedcomDate::parse("01 FEB 1850").unwrap();
        assert_eq!((full.day(), full.month(), full.year()), (Some(1), Some(2), 1850));

        let month = GedcomDate::parse("feb 1850").unwrap();
        assert_eq!((month.day(), month.month()), (None, Some(2)));

        let year = GedcomDate::parse("1850").unwrap();
        assert_eq!(year.month(), None);
    }

    #[test]
    fn keeps_qualifier_and_first_date_of_range() {
        let abt = GedcomDate::parse("ABT 1820").unwrap();
        assert_eq!(abt.qualifier(), Some(Qualifier::About));
        assert_eq!(abt.to_string(), "ABT 1820");

        let range = GedcomDate::parse("BET 1820 AND 1825").unwrap();
        assert_eq!(range.year(), 1820);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(GedcomDate::parse("  "), Err(DateError::Empty));
        assert!(matches!(GedcomDate::parse("31 FEB 1850"), Err(DateError::BadDay { .. })));
        assert!(matches!(GedcomDate::parse("1 FOO 1850"), Err(DateError::BadToken(_))));
    }

    #[test]
    fn displays_in_gedcom_form() {
        assert_eq!(GedcomDate::ymd(1871, 4, 2).to_string(), "02 APR 1871");
    }

    #[test]
    fn age_respects_birthday() {
        let census = GedcomDate::ymd(1871, 4, 2);
        assert_eq!(age_years(&GedcomDate::ymd(1820, 4, 3), &census), 50);
        assert_eq!(age_years(&GedcomDate::ymd(1820, 4, 2), &census), 51);
        assert_eq!(age_years(&GedcomDate::year_only(1820), &census), 51);
        assert_eq!(age_years(&GedcomDate::ymd(1880, 1, 1), &census), 0);
    }

    #[test]
    fn age_in_months() {
        let census = GedcomDate::ymd(1871, 4, 2);
        assert_eq!(age_months(&GedcomDate::ymd(1870, 12, 25), &census), Some(3));
        assert_eq!(age_months(&GedcomDate::year_only(1870), &census), None);
    }

    #[test]
    fn month_range_bounds() {
        let feb = GedcomDate::parse("FEB 1852").unwrap();
        assert_eq!(feb.max_date(), NaiveDate::from_ymd_opt(1852, 2, 29).unwrap());
        assert!(feb.is_before(&GedcomDate::ymd(1852, 3, 1)));
        assert!(!feb.is_before(&GedcomDate::ymd(1852, 2, 15)));
    }

    #[test]
    fn within_year_window() {
        let census = GedcomDate::ymd(1870, 6, 1);
        assert!(GedcomDate::ymd(1869, 12, 5).is_within_year_before(&census));
        assert!(!GedcomDate::ymd(1869, 5, 5).is_within_year_before(&census));
        assert!(!GedcomDate::year_only(1870).is_within_year_before(&census));
    }
}
