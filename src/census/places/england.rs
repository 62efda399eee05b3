// SPDX-License-Identifier: PMPL-1.0-or-later

//! Censuses of England. Wales used the same forms.

use crate::census::{col, CensusDefinition, ColumnKind::*, ColumnSpec};
use crate::date::GedcomDate;
use crate::locale::Lang;

pub const PLACE: &str = "England";

pub(super) const COLUMNS_1841: &[ColumnSpec] = &[
    col(FullName, "Name", "Name"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(
        Occupation,
        "Occupation",
        "Profession, trade, employment or of independent means",
    ),
    col(Null, "BiC", "Born in same county"),
    col(BornForeignParts, "SIF", "Born in Scotland, Ireland or foreign parts"),
];

pub(super) const COLUMNS_1851: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(ConditionEnglish, "Condition", "Condition"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(Null, "Infirm", "Whether blind, or deaf-and-dumb"),
];

pub(super) const COLUMNS_1871: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(ConditionEnglish, "Condition", "Condition"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(
        Null,
        "Infirm",
        "Whether deaf-and-dumb, blind, imbecile, idiot or lunatic",
    ),
];

pub(super) const COLUMNS_1891: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(ConditionEnglish, "Condition", "Condition"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(Null, "Empl", "Employer"),
    col(Null, "Empd", "Employed"),
    col(Null, "OwnAc", "Own account"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(Null, "Infirm", "Whether deaf-and-dumb, blind, lunatic or imbecile"),
];

pub(super) const COLUMNS_1901: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(ConditionEnglish, "Condition", "Condition as to marriage"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(Null, "Emp", "Employer, worker or own account"),
    col(Null, "Home", "Working at home"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(
        Null,
        "Infirm",
        "Whether deaf-and-dumb, blind, lunatic, imbecile, feeble-minded",
    ),
];

pub(super) const COLUMNS_1911: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(ConditionEnglish, "Condition", "Condition as to marriage"),
    col(YearsMarried, "YrM", "Completed years the present marriage has lasted"),
    col(ChildrenBornAlive, "ChA", "Children born alive to present marriage"),
    col(ChildrenLiving, "ChL", "Children who are still alive"),
    col(ChildrenDied, "ChD", "Children who have died"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(Null, "Ind", "Industry or service with which worker is connected"),
    col(Null, "Emp", "Employer, worker or own account"),
    col(Null, "Home", "Working at home"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(Nationality, "Nat", "Nationality of every person born in a foreign country"),
    col(Null, "Infirm", "Infirmity"),
];

const COLUMNS_1939: &[ColumnSpec] = &[
    col(Null, "Schedule", "Schedule Number"),
    col(Null, "SubNum", "Schedule Sub Number"),
    col(SurnameGivenNames, "Name", "Surname & other names"),
    col(Null, "Role", "For institutions only, for example, Officer, Visitor, Servant, Patient, Inmate"),
    col(SexMF, "Sex", "Male or Female"),
    col(BirthDate, "DOB", "Date of birth"),
    col(ConditionUs, "MC", "Marital Condition - Married, Single, Widowed or Divorced"),
    col(Occupation, "Occupation", "Occupation"),
];

pub(super) const fn census(
    place: &'static str,
    year: i32,
    month: u32,
    day: u32,
    columns: &'static [ColumnSpec],
) -> CensusDefinition {
    CensusDefinition::new(place, GedcomDate::ymd(year, month, day), Lang::En, columns)
}

pub const CENSUSES: &[CensusDefinition] = &[
    census(PLACE, 1841, 6, 6, COLUMNS_1841),
    census(PLACE, 1851, 3, 30, COLUMNS_1851),
    census(PLACE, 1861, 4, 7, COLUMNS_1851),
    census(PLACE, 1871, 4, 2, COLUMNS_1871),
    census(PLACE, 1881, 4, 3, COLUMNS_1871),
    census(PLACE, 1891, 4, 5, COLUMNS_1891),
    census(PLACE, 1901, 3, 31, COLUMNS_1901),
    census(PLACE, 1911, 4, 2, COLUMNS_1911),
    census(PLACE, 1939, 9, 29, COLUMNS_1939),
];
