// SPDX-License-Identifier: PMPL-1.0-or-later

//! Recensements de la population. Only the year of each census is kept.
//!
//! Until 1872 the forms had one column per marital condition, marked `1`.

use crate::census::{col, CensusDefinition, ColumnKind::*, ColumnSpec};
use crate::date::GedcomDate;
use crate::locale::Lang;

pub const PLACE: &str = "France";

const COLUMNS_1836: &[ColumnSpec] = &[
    col(Surname, "Noms", "Noms de famille"),
    col(GivenNames, "Prénoms", "Prénoms"),
    col(Occupation, "Titres", "Titres, qualifications, état ou profession et fonctions"),
    col(ConditionFrenchGarcon, "Garçons", ""),
    col(ConditionFrenchHomme, "Hommes", "Hommes mariés"),
    col(ConditionFrenchVeuf, "Veufs", ""),
    col(ConditionFrenchFille, "Filles", ""),
    col(ConditionFrenchFemme, "Femmes", "Femmes mariées"),
    col(ConditionFrenchVeuve, "Veuves", ""),
    col(Age, "Âge", ""),
];

const COLUMNS_1876: &[ColumnSpec] = &[
    col(Surname, "Noms", "Noms de famille"),
    col(GivenNames, "Prénoms", ""),
    col(BirthYear, "Année", "Année de naissance"),
    col(BirthPlace, "Lieu", "Lieu de naissance"),
    col(Nationality, "Nationalité", ""),
    col(RelationToHead, "Situation", "Situation par rapport au chef de ménage"),
    col(Occupation, "Profession", ""),
];

const COLUMNS_1906: &[ColumnSpec] = &[
    col(Surname, "Noms", "Noms de famille"),
    col(GivenNames, "Prénoms", ""),
    col(BirthYear, "Année", "Année de naissance"),
    col(BirthPlace, "Lieu", "Lieu de naissance"),
    col(Nationality, "Nationalité", ""),
    col(RelationToHead, "Situation", "Situation par rapport au chef de ménage"),
    col(Occupation, "Profession", ""),
    col(Null, "Empl", "Nom du patron ou de l'entreprise"),
];

const fn census(year: i32, columns: &'static [ColumnSpec]) -> CensusDefinition {
    CensusDefinition::new(PLACE, GedcomDate::year_only(year), Lang::Fr, columns)
}

pub const CENSUSES: &[CensusDefinition] = &[
    census(1836, COLUMNS_1836),
    census(1841, COLUMNS_1836),
    census(1846, COLUMNS_1836),
    census(1851, COLUMNS_1836),
    census(1856, COLUMNS_1836),
    census(1861, COLUMNS_1836),
    census(1866, COLUMNS_1836),
    census(1872, COLUMNS_1836),
    census(1876, COLUMNS_1876),
    census(1881, COLUMNS_1876),
    census(1886, COLUMNS_1876),
    census(1891, COLUMNS_1876),
    census(1896, COLUMNS_1876),
    census(1901, COLUMNS_1876),
    census(1906, COLUMNS_1906),
    census(1911, COLUMNS_1906),
    census(1921, COLUMNS_1906),
    census(1926, COLUMNS_1906),
    census(1931, COLUMNS_1906),
    census(1936, COLUMNS_1906),
    census(1946, COLUMNS_1906),
];
