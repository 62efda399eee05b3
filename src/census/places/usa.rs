// SPDX-License-Identifier: PMPL-1.0-or-later

//! Federal censuses of the United States, 1790 to 1940.
//!
//! Before 1850 only the head of family is named; the other columns are
//! tallies of the household and are left blank.

use crate::census::{col, CensusDefinition, ColumnKind::*, ColumnSpec};
use crate::date::GedcomDate;
use crate::locale::Lang;

pub const PLACE: &str = "United States";

const COLUMNS_1790: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of head of family"),
    col(Null, "Occupation", "Professions, occupation, or trade"),
    col(Null, "White male 16+", "Free white males of 16 years and upward, including heads of families"),
    col(Null, "White male 0-16", "Free white males under 16 years"),
    col(Null, "White female", "Free white females, including heads of families"),
    col(Null, "Free", "All other free persons"),
    col(Null, "Slaves", "Slaves"),
    col(Null, "Total", "Total"),
];

const COLUMNS_1800: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of head of family"),
    col(Null, "M0", "Free white males 0-10 years"),
    col(Null, "M10", "Free white males 10-16 years"),
    col(Null, "M16", "Free white males 16-26 years"),
    col(Null, "M26", "Free white males 26-45 years"),
    col(Null, "M45", "Free white males 45+ years"),
    col(Null, "F0", "Free white females 0-10 years"),
    col(Null, "F10", "Free white females 10-16 years"),
    col(Null, "F16", "Free white females 16-26 years"),
    col(Null, "F26", "Free white females 26-45 years"),
    col(Null, "F45", "Free white females 45+ years"),
    col(Null, "Free", "All other free persons, except Indians not taxed"),
    col(Null, "Slaves", "Number of slaves"),
    col(Null, "Total", "Total number of all persons"),
];

const COLUMNS_1820: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of head of family"),
    col(Null, "M0", "Free white males 0-10 years"),
    col(Null, "M10", "Free white males 10-16 years"),
    col(Null, "M16", "Free white males 16-18 years"),
    col(Null, "M18", "Free white males 18-26 years"),
    col(Null, "M26", "Free white males 26-45 years"),
    col(Null, "M45", "Free white males 45+ years"),
    col(Null, "F0", "Free white females 0-10 years"),
    col(Null, "F10", "Free white females 10-16 years"),
    col(Null, "F16", "Free white females 16-26 years"),
    col(Null, "F26", "Free white females 26-45 years"),
    col(Null, "F45", "Free white females 45+ years"),
    col(Null, "FNR", "Foreigners not naturalized"),
    col(Null, "AG", "No. engaged in agriculture"),
    col(Null, "COM", "No. engaged in commerce"),
    col(Null, "MNF", "No. engaged in manufactures"),
    col(Null, "Slaves", "Slaves"),
    col(Null, "Total", "Total number of all persons"),
];

const COLUMNS_1830: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of head of family"),
    col(Null, "M0", "Free white males 0-5 years"),
    col(Null, "M5", "Free white males 5-10 years"),
    col(Null, "M10", "Free white males 10-15 years"),
    col(Null, "M15", "Free white males 15-20 years"),
    col(Null, "M20", "Free white males 20-30 years"),
    col(Null, "M30", "Free white males 30-40 years"),
    col(Null, "M40", "Free white males 40-50 years"),
    col(Null, "M50", "Free white males 50+ years"),
    col(Null, "F0", "Free white females 0-5 years"),
    col(Null, "F5", "Free white females 5-10 years"),
    col(Null, "F10", "Free white females 10-15 years"),
    col(Null, "F15", "Free white females 15-20 years"),
    col(Null, "F20", "Free white females 20-30 years"),
    col(Null, "F30", "Free white females 30-40 years"),
    col(Null, "F40", "Free white females 40-50 years"),
    col(Null, "F50", "Free white females 50+ years"),
    col(Null, "Slaves", "Slaves"),
    col(Null, "Total", "Total number of all persons"),
];

const COLUMNS_1850: &[ColumnSpec] = &[
    col(FullName, "Name", "Name"),
    col(Age, "Age", "Age"),
    col(SexMF, "Sex", "Sex"),
    col(Null, "Color", "White, black, or mulatto"),
    col(Occupation, "Occupation", "Profession, occupation, or trade"),
    col(Null, "RE", "Value of real estate owned"),
    col(BirthPlaceSimple, "Birthplace", "Place of birth, naming the state, territory, or country"),
    col(MarriedWithinYear, "Mar", "Married within the year"),
    col(Null, "School", "Attended school within the year"),
    col(Null, "R+W", "Persons over 20 years of age who cannot read and write"),
    col(Null, "Infirm", "Whether deaf and dumb, blind, insane, idiotic, pauper or convict"),
];

const COLUMNS_1860: &[ColumnSpec] = &[
    col(FullName, "Name", "Name"),
    col(Age, "Age", "Age"),
    col(SexMF, "Sex", "Sex"),
    col(Null, "Color", "White, black, or mulatto"),
    col(Occupation, "Occupation", "Profession, occupation, or trade"),
    col(Null, "RE", "Value of real estate owned"),
    col(Null, "PE", "Value of personal estate owned"),
    col(BirthPlaceSimple, "Birthplace", "Place of birth, naming the state, territory, or country"),
    col(MarriedWithinYear, "Mar", "Married within the year"),
    col(Null, "School", "Attended school within the year"),
    col(Null, "R+W", "Persons over 20 years of age who cannot read and write"),
    col(Null, "Infirm", "Whether deaf and dumb, blind, insane, idiotic, pauper or convict"),
];

const COLUMNS_1870: &[ColumnSpec] = &[
    col(FullName, "Name", "Name"),
    col(Age, "Age", "Age"),
    col(SexMF, "Sex", "Sex"),
    col(Null, "Color", "White, black, mulatto, Chinese, Indian"),
    col(Occupation, "Occupation", "Profession, occupation, or trade"),
    col(Null, "RE", "Value of real estate owned"),
    col(Null, "PE", "Value of personal estate owned"),
    col(BirthPlaceSimple, "Birthplace", "Place of birth, naming the state, territory, or country"),
    col(FatherForeign, "FFB", "Father of foreign birth"),
    col(MotherForeign, "MFB", "Mother of foreign birth"),
    col(MonthIfBornWithinYear, "Born", "If born within the year, state month"),
    col(MonthIfMarriedWithinYear, "Mar", "If married within the year, state month"),
    col(Null, "School", "Attended school within the year"),
    col(Null, "Read", "Cannot read"),
    col(Null, "Write", "Cannot write"),
    col(Null, "Infirm", "Whether deaf and dumb, blind, insane, or idiotic"),
];

const COLUMNS_1880: &[ColumnSpec] = &[
    col(Null, "Street", "Name of street"),
    col(Null, "House", "House number"),
    col(FullName, "Name", "Name"),
    col(Null, "Race", "Color"),
    col(SexMF, "Sex", "Sex"),
    col(Age, "Age", "Age at last birthday prior to June 1"),
    col(AgeMonths, "Mon", "If under 1 year, give age in months"),
    col(RelationToHead, "Relation", "Relationship of each person to the head of this family"),
    col(ConditionUs, "Cond", "Single, married, widowed or divorced"),
    col(MarriedWithinYear, "Mar", "Married during census year"),
    col(Occupation, "Occupation", "Profession, occupation or trade"),
    col(Null, "UnEm", "Number of months this person has been unemployed during the census year"),
    col(BirthPlaceSimple, "BP", "Place of birth, naming the state, territory, or country"),
    col(FatherBirthPlaceSimple, "FBP", "Place of birth of the father"),
    col(MotherBirthPlaceSimple, "MBP", "Place of birth of the mother"),
];

const COLUMNS_1890: &[ColumnSpec] = &[
    col(FullName, "Name", "Name"),
    col(Null, "Vet", "Civil war veteran"),
    col(RelationToHead, "Relation", "Relation to head of family"),
    col(Null, "Race", "Race"),
    col(SexMF, "Sex", "Sex"),
    col(Age, "Age", "Age at nearest birthday"),
    col(ConditionUs, "Cond", "Whether single, married, widowed, or divorced"),
    col(MarriedWithinYear, "Mar", "Whether married during the census year"),
    col(ChildrenBornAlive, "Chil", "Mother of how many children"),
    col(ChildrenLiving, "Chil", "Number of these children living"),
    col(BirthPlaceSimple, "BP", "Place of birth"),
    col(FatherBirthPlaceSimple, "FBP", "Place of birth of father"),
    col(MotherBirthPlaceSimple, "MBP", "Place of birth of mother"),
    col(Null, "US", "Number of years in the United States"),
    col(Null, "Natlz", "Whether naturalized"),
    col(Occupation, "Occupation", "Profession, trade, occupation"),
];

const COLUMNS_1900: &[ColumnSpec] = &[
    col(FullName, "Name", "Name"),
    col(RelationToHead, "Relation", "Relationship of each person to the head of the family"),
    col(Null, "Race", "Color or race"),
    col(SexMF, "Sex", "Sex"),
    col(BirthMonth, "Month", "Month of birth"),
    col(BirthYear, "Year", "Year of birth"),
    col(Age, "Age", "Age at last birthday"),
    col(ConditionUs, "Cond", "Whether single, married, widowed, or divorced"),
    col(YearsMarried, "Marr", "Number of years married"),
    col(ChildrenBornAlive, "Chil", "Mother of how many children"),
    col(ChildrenLiving, "Chil", "Number of these children living"),
    col(BirthPlaceSimple, "BP", "Place of birth of this person"),
    col(FatherBirthPlaceSimple, "FBP", "Place of birth of father of this person"),
    col(MotherBirthPlaceSimple, "MBP", "Place of birth of mother of this person"),
    col(Null, "Imm", "Year of immigration to the United States"),
    col(Null, "US", "Number of years in the United States"),
    col(Null, "Natlz", "Naturalization"),
    col(Occupation, "Occupation", "Occupation, trade of profession"),
];

const COLUMNS_1910: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of each person whose place of abode was in this family"),
    col(RelationToHead, "Relation", "Relationship of this person to the head of the family"),
    col(SexMF, "Sex", "Sex"),
    col(Null, "Race", "Color or race"),
    col(Age, "Age", "Age at last birthday"),
    col(ConditionUs, "Cond", "Whether single, married, widowed, or divorced"),
    col(YearsMarried, "Marr", "Number of years of present marriage"),
    col(ChildrenBornAlive, "Chil", "Mother of how many children"),
    col(ChildrenLiving, "Chil", "Number of these children living"),
    col(BirthPlaceSimple, "BP", "Place of birth of this person"),
    col(FatherBirthPlaceSimple, "FBP", "Place of birth of father of this person"),
    col(MotherBirthPlaceSimple, "MBP", "Place of birth of mother of this person"),
    col(Null, "Imm", "Year of immigration to the United States"),
    col(Null, "Natlz", "Whether naturalized or alien"),
    col(Null, "Lang", "Whether able to speak English, or, if not, give name of language spoken"),
    col(Occupation, "Occupation", "Trade or profession of, or particular kind of work done by this person"),
];

const COLUMNS_1920: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of each person whose place of abode on January 1, 1920, was in this family"),
    col(RelationToHead, "Relation", "Relationship of each person to the head of the family"),
    col(Null, "Home", "Owned or rented"),
    col(SexMF, "Sex", "Sex"),
    col(Null, "Race", "Color or race"),
    col(Age, "Age", "Age at last birthday"),
    col(ConditionUs, "Cond", "Whether single, married, widowed, or divorced"),
    col(Null, "Imm", "Year of immigration to the United States"),
    col(Null, "Natlz", "Naturalized or alien"),
    col(BirthPlaceSimple, "BP", "Place of birth of this person"),
    col(FatherBirthPlaceSimple, "FBP", "Place of birth of father of this person"),
    col(MotherBirthPlaceSimple, "MBP", "Place of birth of mother of this person"),
    col(Occupation, "Occupation", "Trade, profession, or particular kind of work done"),
];

const COLUMNS_1930: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of each person whose place of abode on April 1, 1930, was in this family"),
    col(RelationToHead, "Relation", "Relationship of this person to the head of the family"),
    col(Null, "Home", "Home owned or rented"),
    col(SexMF, "Sex", "Sex"),
    col(Null, "Race", "Color or race"),
    col(Age, "Age", "Age at last birthday"),
    col(ConditionUs, "Cond", "Marital condition"),
    col(AgeMarried, "AM", "Age at first marriage"),
    col(BirthPlaceSimple, "BP", "Place of birth of this person"),
    col(FatherBirthPlaceSimple, "FBP", "Place of birth of father of this person"),
    col(MotherBirthPlaceSimple, "MBP", "Place of birth of mother of this person"),
    col(Occupation, "Occupation", "Trade, profession, or particular kind of work done"),
];

const COLUMNS_1940: &[ColumnSpec] = &[
    col(FullName, "Name", "Name of each person whose usual place of residence on April 1, 1940, was in this household"),
    col(RelationToHead, "Relation", "Relationship of this person to the head of the household"),
    col(SexMF, "Sex", "Sex"),
    col(Null, "Race", "Color or race"),
    col(Age, "Age", "Age at last birthday"),
    col(ConditionUs, "Cond", "Marital status"),
    col(Null, "School", "Attended school or college any time since March 1, 1940"),
    col(BirthPlaceSimple, "BP", "Place of birth"),
    col(Null, "Citizen", "Citizenship of the foreign born"),
    col(Occupation, "Occupation", "Trade, profession, or particular kind of work"),
];

const fn census(year: i32, month: u32, day: u32, columns: &'static [ColumnSpec]) -> CensusDefinition {
    CensusDefinition::new(PLACE, GedcomDate::ymd(year, month, day), Lang::En, columns)
}

pub const CENSUSES: &[CensusDefinition] = &[
    census(1790, 8, 2, COLUMNS_1790),
    census(1800, 8, 4, COLUMNS_1800),
    census(1810, 8, 6, COLUMNS_1800),
    census(1820, 8, 7, COLUMNS_1820),
    census(1830, 6, 1, COLUMNS_1830),
    census(1840, 6, 1, COLUMNS_1830),
    census(1850, 6, 1, COLUMNS_1850),
    census(1860, 6, 1, COLUMNS_1860),
    census(1870, 6, 1, COLUMNS_1870),
    census(1880, 6, 1, COLUMNS_1880),
    census(1890, 6, 2, COLUMNS_1890),
    census(1900, 6, 1, COLUMNS_1900),
    census(1910, 4, 15, COLUMNS_1910),
    census(1920, 1, 1, COLUMNS_1920),
    census(1930, 4, 1, COLUMNS_1930),
    census(1940, 4, 1, COLUMNS_1940),
];
