// SPDX-License-Identifier: PMPL-1.0-or-later

//! German censuses: Mecklenburg 1819 and the Reich counts from 1867.

use crate::census::{col, CensusDefinition, ColumnKind::*, ColumnSpec};
use crate::date::GedcomDate;
use crate::locale::Lang;

pub const PLACE: &str = "Deutschland";

const COLUMNS_1819: &[ColumnSpec] = &[
    col(Null, "Nr.", "Laufende Nummer"),
    col(FullName, "Name", "Vor- und Familienname"),
    col(Age, "Alter", "Alter"),
    col(BirthPlace, "Geburtsort", "Geburtsort"),
    col(Occupation, "Stand", "Stand und Gewerbe"),
    col(Religion, "Religion", "Religion"),
];

const COLUMNS_1867: &[ColumnSpec] = &[
    col(GivenNames, "Vorname", "Vorname"),
    col(Surname, "Familienname", "Familienname"),
    col(SexM, "männlich", "Geschlecht männlich"),
    col(SexF, "weiblich", "Geschlecht weiblich"),
    col(BirthYear, "Geburtsjahr", "Geburtsjahr"),
    col(Religion, "Religion", "Religionsbekenntnis"),
    col(ConditionGerman, "Familienstand", "ledig, verheiratet, verwitwet oder geschieden"),
    col(RelationToHeadGerman, "Stellung", "Stellung im Haushalt"),
    col(Occupation, "Beruf", "Stand, Beruf oder Erwerbszweig"),
    col(Nationality, "StA", "Staatsangehörigkeit"),
];

const COLUMNS_1875: &[ColumnSpec] = &[
    col(GivenNames, "Vorname", "Vorname"),
    col(Surname, "Familienname", "Familienname"),
    col(SexM, "männlich", "Geschlecht männlich"),
    col(SexF, "weiblich", "Geschlecht weiblich"),
    col(BirthYear, "Geburtsjahr", "Geburtsjahr"),
    col(BirthPlace, "Geburtsort", "Geburtsort"),
    col(Religion, "Religion", "Religionsbekenntnis"),
    col(ConditionGerman, "Familienstand", "ledig, verheiratet, verwitwet oder geschieden"),
    col(RelationToHeadGerman, "Stellung", "Stellung im Haushalt"),
    col(Occupation, "Beruf", "Stand, Beruf oder Erwerbszweig"),
    col(Nationality, "StA", "Staatsangehörigkeit"),
];

const COLUMNS_1900: &[ColumnSpec] = &[
    col(GivenNames, "Vorname", "Vorname"),
    col(Surname, "Familienname", "Familienname"),
    col(RelationToHeadGerman, "Stellung", "Verwandtschaft oder sonstige Stellung zum Haushaltungsvorstand"),
    col(SexM, "männlich", "Geschlecht männlich"),
    col(SexF, "weiblich", "Geschlecht weiblich"),
    col(ConditionGerman, "Familienstand", "ledig, verheiratet, verwitwet oder geschieden"),
    col(BirthDay, "Tag", "Geburtstag"),
    col(BirthMonth, "Monat", "Geburtsmonat"),
    col(BirthYear, "Jahr", "Geburtsjahr"),
    col(BirthPlace, "Geburtsort", "Geburtsort"),
    col(Occupation, "Beruf", "Beruf, Stand, Erwerb, Gewerbe"),
    col(Religion, "Religion", "Religionsbekenntnis"),
    col(Nationality, "StA", "Staatsangehörigkeit"),
];

const COLUMNS_1919: &[ColumnSpec] = &[
    col(GivenNames, "Vorname", "Vorname"),
    col(Surname, "Familienname", "Familienname"),
    col(RelationToHeadGerman, "Stellung", "Stellung im Haushalt"),
    col(SexM, "männlich", "Geschlecht männlich"),
    col(SexF, "weiblich", "Geschlecht weiblich"),
    col(ConditionGerman, "Familienstand", "Familienstand"),
    col(BirthDaySlashMonth, "Geburtstag", "Geburtstag und -monat"),
    col(BirthYear, "Geburtsjahr", "Geburtsjahr"),
    col(BirthPlace, "Geburtsort", "Geburtsort"),
    col(Religion, "Religion", "Religionsbekenntnis"),
    col(Occupation, "Beruf", "Beruf, Stand, Erwerb, Gewerbe"),
    col(Nationality, "StA", "Staatsangehörigkeit"),
];

pub const CENSUSES: &[CensusDefinition] = &[
    CensusDefinition::new(PLACE, GedcomDate::year_only(1819), Lang::De, COLUMNS_1819),
    CensusDefinition::new(PLACE, GedcomDate::ymd(1867, 12, 3), Lang::De, COLUMNS_1867),
    CensusDefinition::new(PLACE, GedcomDate::ymd(1875, 12, 1), Lang::De, COLUMNS_1875),
    CensusDefinition::new(PLACE, GedcomDate::ymd(1900, 12, 1), Lang::De, COLUMNS_1900),
    CensusDefinition::new(PLACE, GedcomDate::ymd(1919, 10, 8), Lang::De, COLUMNS_1919),
];
