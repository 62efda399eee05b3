// SPDX-License-Identifier: PMPL-1.0-or-later

//! Censuses of the Czech lands, Austrian counts 1880 to 1910 and the
//! first Czechoslovak census of 1921.

use crate::census::{col, CensusDefinition, ColumnKind::*, ColumnSpec};
use crate::date::GedcomDate;
use crate::locale::Lang;

pub const PLACE: &str = "Česko";

const COLUMNS_1880: &[ColumnSpec] = &[
    col(FullName, "Jméno", "Jméno a příjmení"),
    col(RelationToHead, "Vztah", "Vztah k přednostovi domácnosti"),
    col(SexMZ, "Pohlaví", "Pohlaví"),
    col(BirthDayMonthSlashYear, "Narození", "Datum narození"),
    col(BirthPlace, "Místo", "Místo narození"),
    col(Null, "Přísl.", "Domovská příslušnost"),
    col(Religion, "Vyznání", "Náboženské vyznání"),
    col(ConditionCzech, "Stav", "Rodinný stav"),
    col(Null, "Jazyk", "Jazyk v obcování"),
    col(Occupation, "Povolání", "Povolání"),
];

const COLUMNS_1921: &[ColumnSpec] = &[
    col(FullName, "Jméno", "Jméno a příjmení"),
    col(RelationToHead, "Vztah", "Vztah k přednostovi domácnosti"),
    col(SexMZ, "Pohlaví", "Pohlaví"),
    col(BirthDayMonthSlashYear, "Narození", "Datum narození"),
    col(BirthPlace, "Místo", "Místo narození"),
    col(Null, "Přísl.", "Domovská příslušnost"),
    col(Nationality, "Národnost", "Státní příslušnost"),
    col(Religion, "Vyznání", "Náboženské vyznání"),
    col(ConditionCzech, "Stav", "Rodinný stav"),
    col(Null, "Jazyk", "Mateřský jazyk"),
    col(Occupation, "Povolání", "Povolání"),
];

const fn census(year: i32, month: u32, day: u32, columns: &'static [ColumnSpec]) -> CensusDefinition {
    CensusDefinition::new(PLACE, GedcomDate::ymd(year, month, day), Lang::Cs, columns)
}

pub const CENSUSES: &[CensusDefinition] = &[
    census(1880, 12, 31, COLUMNS_1880),
    census(1890, 12, 31, COLUMNS_1880),
    census(1900, 12, 31, COLUMNS_1880),
    census(1910, 12, 31, COLUMNS_1880),
    census(1921, 2, 15, COLUMNS_1921),
];
