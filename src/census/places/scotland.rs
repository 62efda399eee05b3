// SPDX-License-Identifier: PMPL-1.0-or-later

//! Censuses of Scotland. Same dates as England; from 1861 the forms ask
//! about schooling, and from 1891 about Gaelic.

use super::england::census;
use crate::census::{col, CensusDefinition, ColumnKind::*, ColumnSpec};

pub const PLACE: &str = "Scotland";

const COLUMNS_1841: &[ColumnSpec] = &[
    col(FullName, "Name", "Name"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(
        Occupation,
        "Occupation",
        "Profession, trade, employment or of independent means",
    ),
    col(Null, "BiC", "Born in same county"),
    col(BornForeignParts, "EIF", "Born in England, Ireland or foreign parts"),
];

const COLUMNS_1851: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(ConditionEnglish, "Condition", "Condition"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(Null, "Infirm", "Whether blind, or deaf-and-dumb"),
];

const COLUMNS_1861: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(ConditionEnglish, "Condition", "Condition"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(Null, "Infirm", "Whether blind, or deaf-and-dumb"),
    col(
        Null,
        "School",
        "Number of children between 5 and 13 attending school",
    ),
];

const COLUMNS_1871: &[ColumnSpec] = &[
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
    col(
        Null,
        "School",
        "Number of children between 5 and 13 attending school or educated at home",
    ),
];

const COLUMNS_1881: &[ColumnSpec] = &[
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

const COLUMNS_1891: &[ColumnSpec] = &[
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
    col(Null, "Lang", "Language spoken"),
    col(Null, "Infirm", "Whether deaf-and-dumb, blind, lunatic or imbecile"),
];

const COLUMNS_1901: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(ConditionEnglish, "Condition", "Condition as to marriage"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Occupation, "Occupation", "Rank, profession or occupation"),
    col(Null, "Emp", "Employer, worker or own account"),
    col(Null, "Home", "Working at home"),
    col(BirthPlace, "Birthplace", "Where born"),
    col(Null, "Lang", "Language spoken"),
    col(
        Null,
        "Infirm",
        "Whether deaf-and-dumb, blind, lunatic, imbecile, feeble-minded",
    ),
];

const COLUMNS_1911: &[ColumnSpec] = &[
    col(FullName, "Name", "Name and surname"),
    col(RelationToHead, "Relation", "Relation to head of household"),
    col(AgeMale, "AgeM", "Age (males)"),
    col(AgeFemale, "AgeF", "Age (females)"),
    col(Null, "Lang", "Language spoken"),
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

pub const CENSUSES: &[CensusDefinition] = &[
    census(PLACE, 1841, 6, 6, COLUMNS_1841),
    census(PLACE, 1851, 3, 30, COLUMNS_1851),
    census(PLACE, 1861, 4, 7, COLUMNS_1861),
    census(PLACE, 1871, 4, 2, COLUMNS_1871),
    census(PLACE, 1881, 4, 3, COLUMNS_1881),
    census(PLACE, 1891, 4, 5, COLUMNS_1891),
    census(PLACE, 1901, 3, 31, COLUMNS_1901),
    census(PLACE, 1911, 4, 2, COLUMNS_1911),
];
