// SPDX-License-Identifier: PMPL-1.0-or-later

//! Danish folketællinger. The forms carry no separate titles.

use crate::census::{col, CensusDefinition, ColumnKind::*, ColumnSpec};
use crate::date::GedcomDate;
use crate::locale::Lang;

pub const PLACE: &str = "Danmark";

const COLUMNS_1787: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(RelationToHead, "Stilling i familien", ""),
    col(Age, "Alder", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(Occupation, "Erhverv", ""),
];

const COLUMNS_1834: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(Age, "Alder", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(Occupation, "Erhverv", ""),
    col(RelationToHead, "Stilling i familien", ""),
];

const COLUMNS_1845: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(Age, "Alder", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(Occupation, "Erhverv", ""),
    col(BirthPlace, "Fødested", ""),
    col(RelationToHead, "Stilling i familien", ""),
];

const COLUMNS_1850: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(Age, "Alder", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(Occupation, "Erhverv", ""),
    col(RelationToHead, "Stilling i familien", ""),
    col(Null, "", ""),
    col(Null, "", ""),
    col(Null, "", ""),
    col(Null, "", ""),
    col(Null, "", ""),
];

const COLUMNS_1855: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(Age, "Alder", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(Religion, "Trossamfund", ""),
    col(Occupation, "Erhverv", ""),
    col(RelationToHead, "Stilling i familien", ""),
    col(BirthPlace, "Fødested", ""),
    col(Null, "Døvstumme", ""),
    col(Null, "Blinde", ""),
];

const COLUMNS_1870: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(SexMK, "Køn", ""),
    col(Age, "Alder", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(Religion, "Trossamfund", ""),
    col(BirthPlace, "Fødested", ""),
    col(RelationToHead, "Stilling i familien", ""),
    col(Occupation, "Erhverv", ""),
];

const COLUMNS_1901: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(SexMK, "Køn", ""),
    col(BirthDaySlashMonth, "Fødselsdag", ""),
    col(BirthYear, "Fødselsår", ""),
    col(BirthPlace, "Fødested", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(Religion, "Trossamfund", ""),
    col(RelationToHead, "Stilling i familien", ""),
    col(Occupation, "Erhverv", ""),
];

const COLUMNS_1925: &[ColumnSpec] = &[
    col(FullName, "Navn", ""),
    col(SexMK, "Køn", ""),
    col(BirthDate, "Fødselsdato", ""),
    col(BirthPlace, "Fødested", ""),
    col(ConditionDanish, "Civilstand", ""),
    col(RelationToHead, "Stilling i familien", ""),
    col(Occupation, "Erhverv", ""),
];

const fn census(year: i32, month: u32, day: u32, columns: &'static [ColumnSpec]) -> CensusDefinition {
    CensusDefinition::new(PLACE, GedcomDate::ymd(year, month, day), Lang::Da, columns)
}

pub const CENSUSES: &[CensusDefinition] = &[
    census(1787, 7, 1, COLUMNS_1787),
    census(1801, 2, 1, COLUMNS_1787),
    census(1803, 2, 1, COLUMNS_1787),
    census(1834, 2, 18, COLUMNS_1834),
    census(1840, 2, 1, COLUMNS_1834),
    census(1845, 2, 1, COLUMNS_1845),
    census(1850, 2, 1, COLUMNS_1850),
    census(1855, 2, 1, COLUMNS_1855),
    census(1860, 2, 1, COLUMNS_1855),
    census(1870, 2, 1, COLUMNS_1870),
    census(1880, 2, 1, COLUMNS_1870),
    census(1885, 2, 1, COLUMNS_1870),
    census(1890, 2, 1, COLUMNS_1870),
    census(1901, 2, 1, COLUMNS_1901),
    census(1906, 2, 1, COLUMNS_1901),
    census(1911, 2, 1, COLUMNS_1901),
    census(1916, 2, 1, COLUMNS_1901),
    census(1921, 2, 1, COLUMNS_1901),
    census(1925, 11, 5, COLUMNS_1925),
    census(1930, 11, 5, COLUMNS_1925),
    census(1940, 11, 5, COLUMNS_1925),
];
