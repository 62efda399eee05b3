// SPDX-License-Identifier: PMPL-1.0-or-later

//! Census forms
//!
//! Each historical census is a [`CensusDefinition`]: the country, the
//! census date, the language of the form and its ordered columns. The
//! definitions are grouped by country into [`CensusPlace`]s.
//!
//! Countries covered: Česko, Danmark, Deutschland, England, France,
//! Scotland, United States, Wales.

pub mod column;
pub mod condition;
mod places;
pub mod relationship;
pub mod transcript;

pub use column::{CensusColumn, ColumnKind};
pub use condition::{Condition, ConditionVocabulary};
pub use relationship::{relationship_key, relationship_name};
pub use transcript::{generate_transcript, CensusTranscript, TranscriptRow};

use crate::date::GedcomDate;
use crate::locale::Lang;
use crate::place::same_place;
use tracing::debug;

/// One column of a census form, before it is bound to a census.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    pub abbreviation: &'static str,
    pub title: &'static str,
}

pub(crate) const fn col(kind: ColumnKind, abbreviation: &'static str, title: &'static str) -> ColumnSpec {
    ColumnSpec {
        kind,
        abbreviation,
        title,
    }
}

/// A single census: where, when, in which language, and its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusDefinition {
    place: &'static str,
    date: GedcomDate,
    language: Lang,
    columns: &'static [ColumnSpec],
}

impl CensusDefinition {
    pub const fn new(
        place: &'static str,
        date: GedcomDate,
        language: Lang,
        columns: &'static [ColumnSpec],
    ) -> Self {
        Self {
            place,
            date,
            language,
            columns,
        }
    }

    pub fn census_place(&self) -> &'static str {
        self.place
    }

    pub fn census_date(&self) -> GedcomDate {
        self.date
    }

    pub fn census_language(&self) -> Lang {
        self.language
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The columns of the form, in order.
    pub fn columns(&self) -> Vec<CensusColumn> {
        self.columns
            .iter()
            .map(|spec| CensusColumn::new(self, spec.kind, spec.abbreviation, spec.title))
            .collect()
    }
}

/// All censuses of one country.
#[derive(Debug, Clone, Copy)]
pub struct CensusPlace {
    name: &'static str,
    aliases: &'static [&'static str],
    language: Lang,
    censuses: &'static [CensusDefinition],
}

impl CensusPlace {
    /// The country name used in place hierarchies.
    pub fn census_place(&self) -> &'static str {
        self.name
    }

    pub fn census_language(&self) -> Lang {
        self.language
    }

    /// Every census of this country, oldest first.
    pub fn all_census_dates(&self) -> &'static [CensusDefinition] {
        self.censuses
    }

    fn is_called(&self, name: &str) -> bool {
        same_place(self.name, name) || self.aliases.iter().any(|alias| same_place(alias, name))
    }
}

static CENSUS_PLACES: &[CensusPlace] = &[
    CensusPlace {
        name: places::czech::PLACE,
        aliases: &["Czech Republic", "Czechia"],
        language: Lang::Cs,
        censuses: places::czech::CENSUSES,
    },
    CensusPlace {
        name: places::denmark::PLACE,
        aliases: &["Denmark"],
        language: Lang::Da,
        censuses: places::denmark::CENSUSES,
    },
    CensusPlace {
        name: places::deutschland::PLACE,
        aliases: &["Germany"],
        language: Lang::De,
        censuses: places::deutschland::CENSUSES,
    },
    CensusPlace {
        name: places::england::PLACE,
        aliases: &[],
        language: Lang::En,
        censuses: places::england::CENSUSES,
    },
    CensusPlace {
        name: places::france::PLACE,
        aliases: &[],
        language: Lang::Fr,
        censuses: places::france::CENSUSES,
    },
    CensusPlace {
        name: places::scotland::PLACE,
        aliases: &[],
        language: Lang::En,
        censuses: places::scotland::CENSUSES,
    },
    CensusPlace {
        name: places::usa::PLACE,
        aliases: &["USA", "United States of America"],
        language: Lang::En,
        censuses: places::usa::CENSUSES,
    },
    CensusPlace {
        name: places::wales::PLACE,
        aliases: &[],
        language: Lang::En,
        censuses: places::wales::CENSUSES,
    },
];

/// Every country with census definitions.
pub fn census_places() -> &'static [CensusPlace] {
    CENSUS_PLACES
}

/// Find a country by name (`Danmark`, `Denmark`, `USA`, ...).
pub fn census_place(name: &str) -> Option<&'static CensusPlace> {
    CENSUS_PLACES.iter().find(|place| place.is_called(name))
}

/// Find the census of `place` taken on `date`. A bare year is enough.
pub fn find_census(place: &str, date: &str) -> Option<&'static CensusDefinition> {
    let country = census_place(place)?;
    let wanted = GedcomDate::parse(date).ok()?;
    let found = country.all_census_dates().iter().find(|census| {
        if wanted.month().is_some() {
            census.census_date() == wanted
        } else {
            census.year() == wanted.year()
        }
    });
    debug!(place, date, found = found.is_some(), "census lookup");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scotland_1871_place_and_date() {
        let census = find_census("Scotland", "1871").unwrap();
        assert_eq!(census.census_place(), "Scotland");
        assert_eq!(census.census_date().to_string(), "02 APR 1871");
    }

    #[test]
    fn scotland_1871_columns() {
        let census = find_census("Scotland", "02 APR 1871").unwrap();
        let columns = census.columns();
        assert_eq!(columns.len(), 9);

        let kinds: Vec<ColumnKind> = columns.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::FullName,
                ColumnKind::RelationToHead,
                ColumnKind::ConditionEnglish,
                ColumnKind::AgeMale,
                ColumnKind::AgeFemale,
                ColumnKind::Occupation,
                ColumnKind::BirthPlace,
                ColumnKind::Null,
                ColumnKind::Null,
            ]
        );

        let abbreviations: Vec<&str> = columns.iter().map(|c| c.abbreviation()).collect();
        assert_eq!(
            abbreviations,
            vec![
                "Name",
                "Relation",
                "Condition",
                "AgeM",
                "AgeF",
                "Occupation",
                "Birthplace",
                "Infirm",
                "School"
            ]
        );

        let titles: Vec<&str> = columns.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Name and surname",
                "Relation to head of household",
                "Condition",
                "Age (males)",
                "Age (females)",
                "Rank, profession or occupation",
                "Where born",
                "Whether deaf-and-dumb, blind, imbecile, idiot or lunatic",
                "Number of children between 5 and 13 attending school or educated at home",
            ]
        );
    }

    #[test]
    fn denmark_1850() {
        let census = find_census("Danmark", "01 FEB 1850").unwrap();
        assert_eq!(census.census_language(), Lang::Da);
        let columns = census.columns();
        assert_eq!(columns.len(), 10);
        assert_eq!(columns[0].kind(), ColumnKind::FullName);
        assert_eq!(columns[0].abbreviation(), "Navn");
        assert_eq!(columns[1].kind(), ColumnKind::Age);
        assert_eq!(columns[1].abbreviation(), "Alder");
        assert_eq!(columns[2].kind(), ColumnKind::ConditionDanish);
        assert_eq!(columns[2].abbreviation(), "Civilstand");
        assert_eq!(columns[3].kind(), ColumnKind::Occupation);
        assert_eq!(columns[3].abbreviation(), "Erhverv");
        assert_eq!(columns[4].kind(), ColumnKind::RelationToHead);
        assert_eq!(columns[4].abbreviation(), "Stilling i familien");
        for column in &columns[5..] {
            assert_eq!(column.kind(), ColumnKind::Null);
            assert_eq!(column.abbreviation(), "");
        }
        assert!(columns.iter().all(|c| c.title().is_empty()));
    }

    #[test]
    fn places_are_found_by_alias() {
        assert_eq!(census_place("Denmark").unwrap().census_place(), "Danmark");
        assert_eq!(census_place("usa").unwrap().census_place(), "United States");
        assert!(census_place("Atlantis").is_none());
        assert!(find_census("England", "1850").is_none());
    }

    #[test]
    fn every_census_is_well_formed() {
        for place in census_places() {
            let censuses = place.all_census_dates();
            assert!(!censuses.is_empty(), "{} has no censuses", place.census_place());
            for census in censuses {
                assert_eq!(census.census_place(), place.census_place());
                assert_eq!(census.census_language(), place.census_language());
                assert!(!census.columns().is_empty());
            }
            assert!(
                censuses.windows(2).all(|pair| pair[0].census_date().min_date()
                    < pair[1].census_date().min_date()),
                "{} censuses out of order",
                place.census_place()
            );
        }
    }

    #[test]
    fn catalog_years() {
        let years = |name: &str| -> Vec<i32> {
            census_place(name)
                .unwrap()
                .all_census_dates()
                .iter()
                .map(|c| c.year())
                .collect()
        };
        assert_eq!(
            years("Danmark"),
            vec![
                1787, 1801, 1803, 1834, 1840, 1845, 1850, 1855, 1860, 1870, 1880, 1885, 1890, 1901,
                1906, 1911, 1916, 1921, 1925, 1930, 1940
            ]
        );
        assert_eq!(
            years("England"),
            vec![1841, 1851, 1861, 1871, 1881, 1891, 1901, 1911, 1939]
        );
        assert_eq!(years("Deutschland"), vec![1819, 1867, 1875, 1900, 1919]);
        assert_eq!(years("Česko"), vec![1880, 1890, 1900, 1910, 1921]);
        assert_eq!(years("United States").len(), 16);
    }
}
