// SPDX-License-Identifier: PMPL-1.0-or-later

//! Census columns and their formatting rules.
//!
//! A column is one of a fixed set of [`ColumnKind`]s plus the labels printed
//! on the form. Given the individual and the head of the household it
//! produces the text to transcribe; anything that cannot be worked out
//! from the tree gives an empty string.

use super::condition::{self, spouse_family, ConditionVocabulary};
use super::relationship::relationship_name;
use super::CensusDefinition;
use crate::date::{age_months, age_years, GedcomDate};
use crate::locale::Lang;
use crate::place::{same_place, Place};
use crate::types::{Individual, NameKind, NameRecord, Sex};
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// What a census column records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnKind {
    /// A column that is never filled in from the tree.
    Null,
    FullName,
    GivenNames,
    /// `Joe F` for `Joe Fred`.
    GivenNameInitial,
    Surname,
    SurnameGivenNames,
    SurnameGivenNameInitial,
    Age,
    /// Age, for anyone not recorded as female.
    AgeMale,
    AgeFemale,
    /// Age at the first marriage.
    AgeMarried,
    /// Age in months, for infants under a year old.
    AgeMonths,
    BirthDate,
    BirthDay,
    BirthMonth,
    BirthYear,
    BirthDaySlashMonth,
    BirthDayMonthSlashYear,
    BirthPlace,
    /// Country of birth, or the state/county within the census country.
    BirthPlaceSimple,
    /// `S`, `I`, `E`, `W` or `F` on British forms.
    BornForeignParts,
    ChildrenBornAlive,
    ChildrenDied,
    ChildrenLiving,
    ConditionEnglish,
    ConditionDanish,
    ConditionUs,
    ConditionGerman,
    ConditionCzech,
    ConditionFrenchGarcon,
    ConditionFrenchHomme,
    ConditionFrenchVeuf,
    ConditionFrenchFille,
    ConditionFrenchFemme,
    ConditionFrenchVeuve,
    FatherBirthPlace,
    FatherBirthPlaceSimple,
    FatherForeign,
    MotherBirthPlace,
    MotherBirthPlaceSimple,
    MotherForeign,
    MarriedWithinYear,
    MonthIfBornWithinYear,
    MonthIfMarriedWithinYear,
    Nationality,
    Occupation,
    Religion,
    RelationToHead,
    RelationToHeadDanish,
    RelationToHeadGerman,
    /// `X` for males.
    SexM,
    /// `X` for females.
    SexF,
    SexMF,
    SexMK,
    SexMZ,
    YearsMarried,
}

/// A column of a census form, bound to the census it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CensusColumn {
    kind: ColumnKind,
    abbreviation: &'static str,
    title: &'static str,
    #[serde(skip)]
    place: &'static str,
    #[serde(skip)]
    date: GedcomDate,
    #[serde(skip)]
    language: Lang,
}

impl CensusColumn {
    pub fn new(
        census: &CensusDefinition,
        kind: ColumnKind,
        abbreviation: &'static str,
        title: &'static str,
    ) -> Self {
        Self {
            kind,
            abbreviation,
            title,
            place: census.census_place(),
            date: census.census_date(),
            language: census.census_language(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// The census date.
    pub fn date(&self) -> GedcomDate {
        self.date
    }

    /// The census country; birth places there are written without it.
    pub fn place(&self) -> &'static str {
        self.place
    }

    /// The value of this column for `individual`, in the household of `head`.
    pub fn generate<'t>(&self, individual: Individual<'t>, head: Individual<'t>) -> String {
        let d = &self.date;
        match self.kind {
            ColumnKind::Null => String::new(),

            ColumnKind::FullName => self
                .name_at_census_date(individual)
                .map(NameRecord::display_name)
                .unwrap_or_default(),
            ColumnKind::GivenNames => self
                .name_at_census_date(individual)
                .map(|name| name.given_names().collect::<Vec<_>>().join(" "))
                .unwrap_or_default(),
            ColumnKind::GivenNameInitial => self
                .name_at_census_date(individual)
                .map(given_name_initial)
                .unwrap_or_default(),
            ColumnKind::Surname => self
                .name_at_census_date(individual)
                .map(|name| name.surname.clone())
                .unwrap_or_default(),
            ColumnKind::SurnameGivenNames => self
                .name_at_census_date(individual)
                .map(|name| {
                    surname_first(&name.surname, &name.given_names().collect::<Vec<_>>().join(" "))
                })
                .unwrap_or_default(),
            ColumnKind::SurnameGivenNameInitial => self
                .name_at_census_date(individual)
                .map(|name| surname_first(&name.surname, &given_name_initial(name)))
                .unwrap_or_default(),

            ColumnKind::Age => age(individual, d),
            ColumnKind::AgeMale => match individual.sex() {
                Sex::Female => String::new(),
                _ => age(individual, d),
            },
            ColumnKind::AgeFemale => match individual.sex() {
                Sex::Female => age(individual, d),
                _ => String::new(),
            },
            ColumnKind::AgeMarried => {
                let first_marriage = individual
                    .spouse_families()
                    .iter()
                    .filter_map(|family| family.marriage_date())
                    .filter(|married| married.is_before(d))
                    .min_by_key(|married| married.min_date())
                    .copied();
                match (individual.birth_date(), first_marriage) {
                    (Some(birth), Some(married)) => age_years(birth, &married).to_string(),
                    _ => String::new(),
                }
            }
            ColumnKind::AgeMonths => individual
                .birth_date()
                .and_then(|birth| age_months(birth, d))
                .filter(|months| (0..12).contains(months))
                .map(|months| months.to_string())
                .unwrap_or_default(),

            ColumnKind::BirthDate => individual
                .birth_date()
                .map(GedcomDate::to_string)
                .unwrap_or_default(),
            ColumnKind::BirthDay => individual
                .birth_date()
                .and_then(GedcomDate::day)
                .map(|day| day.to_string())
                .unwrap_or_default(),
            ColumnKind::BirthMonth => individual
                .birth_date()
                .and_then(month_name)
                .unwrap_or_default()
                .to_string(),
            ColumnKind::BirthYear => individual
                .birth_date()
                .map(|birth| birth.year().to_string())
                .unwrap_or_default(),
            ColumnKind::BirthDaySlashMonth => individual
                .birth_date()
                .and_then(|birth| Some(format!("{}/{}", birth.day()?, birth.month()?)))
                .unwrap_or_default(),
            ColumnKind::BirthDayMonthSlashYear => individual
                .birth_date()
                .map(day_month_slash_year)
                .unwrap_or_default(),

            ColumnKind::BirthPlace => individual.birth_place().without_country(self.place),
            ColumnKind::BirthPlaceSimple => self.simple_place(individual.birth_place()),
            ColumnKind::BornForeignParts => born_foreign_parts(self.place, individual.birth_place()),
            ColumnKind::FatherBirthPlace => individual
                .father()
                .map(|father| father.birth_place().without_country(self.place))
                .unwrap_or_default(),
            ColumnKind::FatherBirthPlaceSimple => individual
                .father()
                .map(|father| self.simple_place(father.birth_place()))
                .unwrap_or_default(),
            ColumnKind::FatherForeign => {
                yes_if(individual.father().map(|f| f.birth_place().is_foreign_to(self.place)))
            }
            ColumnKind::MotherBirthPlace => individual
                .mother()
                .map(|mother| mother.birth_place().without_country(self.place))
                .unwrap_or_default(),
            ColumnKind::MotherBirthPlaceSimple => individual
                .mother()
                .map(|mother| self.simple_place(mother.birth_place()))
                .unwrap_or_default(),
            ColumnKind::MotherForeign => {
                yes_if(individual.mother().map(|m| m.birth_place().is_foreign_to(self.place)))
            }
            ColumnKind::Nationality => {
                let birth_place = individual.birth_place();
                let country = if birth_place.is_empty() {
                    self.place
                } else {
                    birth_place.last_part()
                };
                nationality(country).unwrap_or(country).to_string()
            }

            ColumnKind::ChildrenBornAlive => self.count_children(individual, |_| true),
            ColumnKind::ChildrenDied => self.count_children(individual, |child| child.died_before(d)),
            ColumnKind::ChildrenLiving => {
                self.count_children(individual, |child| !child.died_before(d))
            }

            ColumnKind::ConditionEnglish => condition::ENGLISH.describe(individual, d).to_string(),
            ColumnKind::ConditionDanish => condition::DANISH.describe(individual, d).to_string(),
            ColumnKind::ConditionUs => condition::US.describe(individual, d).to_string(),
            ColumnKind::ConditionGerman => condition::GERMAN.describe(individual, d).to_string(),
            ColumnKind::ConditionCzech => condition::CZECH.describe(individual, d).to_string(),
            ColumnKind::ConditionFrenchGarcon => french(&condition::FRENCH_GARCON, individual, d),
            ColumnKind::ConditionFrenchHomme => french(&condition::FRENCH_HOMME, individual, d),
            ColumnKind::ConditionFrenchVeuf => french(&condition::FRENCH_VEUF, individual, d),
            ColumnKind::ConditionFrenchFille => french(&condition::FRENCH_FILLE, individual, d),
            ColumnKind::ConditionFrenchFemme => french(&condition::FRENCH_FEMME, individual, d),
            ColumnKind::ConditionFrenchVeuve => french(&condition::FRENCH_VEUVE, individual, d),

            ColumnKind::MarriedWithinYear => {
                yes_if(Some(self.marriage_within_year(individual).is_some()))
            }
            ColumnKind::MonthIfBornWithinYear => individual
                .birth_date()
                .filter(|birth| birth.is_within_year_before(d))
                .and_then(month_name)
                .unwrap_or_default()
                .to_string(),
            ColumnKind::MonthIfMarriedWithinYear => self
                .marriage_within_year(individual)
                .and_then(|married| month_name(&married))
                .unwrap_or_default()
                .to_string(),
            ColumnKind::YearsMarried => spouse_family(individual, d)
                .and_then(|family| family.marriage_date())
                .map(|married| age_years(married, d).to_string())
                .unwrap_or_default(),

            ColumnKind::Occupation => individual.occupation().unwrap_or_default().to_string(),
            ColumnKind::Religion => individual.religion().unwrap_or_default().to_string(),

            ColumnKind::RelationToHead => relationship_name(head, individual, self.language),
            ColumnKind::RelationToHeadDanish => relationship_name(head, individual, Lang::Da),
            ColumnKind::RelationToHeadGerman => relationship_name(head, individual, Lang::De),

            ColumnKind::SexM => mark_sex(individual.sex(), Sex::Male),
            ColumnKind::SexF => mark_sex(individual.sex(), Sex::Female),
            ColumnKind::SexMF => sex_letter(individual.sex(), "M", "F"),
            ColumnKind::SexMK => sex_letter(individual.sex(), "M", "K"),
            ColumnKind::SexMZ => sex_letter(individual.sex(), "M", "Ž"),
        }
    }

    /// The name in use on the census date: a married name taken from a
    /// spouse married before the census, otherwise the primary name.
    fn name_at_census_date<'t>(&self, individual: Individual<'t>) -> Option<&'t NameRecord> {
        let primary = individual.primary_name()?;
        for family in individual.spouse_families() {
            let married_before = family
                .marriage_date()
                .map(|married| married.is_before(&self.date))
                .unwrap_or(false);
            if !married_before {
                continue;
            }
            let Some(spouse) = family.spouse_of(&individual) else {
                continue;
            };
            let married_name = individual.all_names().iter().find(|name| {
                name.kind == NameKind::Married
                    && !name.surname.is_empty()
                    && spouse
                        .all_names()
                        .iter()
                        .any(|spouse_name| spouse_name.surname == name.surname)
            });
            if let Some(name) = married_name {
                return Some(name);
            }
        }
        Some(primary)
    }

    /// Last part of the place once the census country is removed.
    fn simple_place(&self, place: Place<'_>) -> String {
        let local = place.without_country(self.place);
        Place::new(&local).last_part().to_string()
    }

    /// Children of `individual` born before the census matching `filter`.
    /// Only recorded for women.
    fn count_children(
        &self,
        individual: Individual<'_>,
        filter: impl Fn(&Individual<'_>) -> bool,
    ) -> String {
        if individual.sex() != Sex::Female {
            return String::new();
        }
        individual
            .children()
            .iter()
            .filter(|child| {
                child
                    .birth_date()
                    .map(|born| born.is_before(&self.date))
                    .unwrap_or(false)
            })
            .filter(|child| filter(child))
            .count()
            .to_string()
    }

    fn marriage_within_year(&self, individual: Individual<'_>) -> Option<GedcomDate> {
        individual
            .spouse_families()
            .iter()
            .filter_map(|family| family.marriage_date())
            .find(|married| married.is_within_year_before(&self.date))
            .copied()
    }

}

fn age(individual: Individual<'_>, date: &GedcomDate) -> String {
    individual
        .birth_date()
        .map(|birth| age_years(birth, date).to_string())
        .unwrap_or_default()
}

fn given_name_initial(name: &NameRecord) -> String {
    let mut given = name.given_names();
    let Some(first) = given.next() else {
        return String::new();
    };
    let mut out = first.to_string();
    for other in given {
        if let Some(initial) = other.chars().next() {
            out.push(' ');
            out.push(initial);
        }
    }
    out
}

/// `Surname, Given`, leaving out whichever part is empty.
fn surname_first(surname: &str, given: &str) -> String {
    match (surname.is_empty(), given.is_empty()) {
        (false, false) => format!("{}, {}", surname, given),
        (false, true) => surname.to_string(),
        _ => given.to_string(),
    }
}

fn month_name(date: &GedcomDate) -> Option<&'static str> {
    date.month().map(|month| MONTH_NAMES[(month - 1) as usize])
}

/// `1 Feb/1850`
fn day_month_slash_year(date: &GedcomDate) -> String {
    match (date.day(), month_name(date)) {
        (Some(day), Some(month)) => format!("{} {}/{}", day, month, date.year()),
        (None, Some(month)) => format!("{}/{}", month, date.year()),
        _ => date.year().to_string(),
    }
}

fn born_foreign_parts(census_place: &str, birth_place: Place<'_>) -> String {
    let country = birth_place.last_part();
    if country.is_empty() || same_place(country, census_place) {
        return String::new();
    }
    let is = |name: &str| same_place(country, name);
    let marker = if same_place(census_place, "Scotland") {
        if is("England") {
            "E"
        } else if is("Wales") {
            "W"
        } else if is("Ireland") {
            "I"
        } else {
            "F"
        }
    } else if is("England") || is("Wales") {
        ""
    } else if is("Scotland") {
        "S"
    } else if is("Ireland") {
        "I"
    } else {
        "F"
    };
    marker.to_string()
}

/// The nationality noun for a census country.
fn nationality(country: &str) -> Option<&'static str> {
    const NATIONALITIES: &[(&str, &str)] = &[
        ("England", "British"),
        ("Scotland", "British"),
        ("Wales", "British"),
        ("Danmark", "Dansk"),
        ("Deutschland", "Deutsch"),
        ("France", "Française"),
        ("Česko", "Česká"),
        ("United States", "American"),
    ];
    NATIONALITIES
        .iter()
        .find(|(name, _)| same_place(name, country))
        .map(|(_, noun)| *noun)
}

fn french(vocabulary: &ConditionVocabulary, individual: Individual<'_>, date: &GedcomDate) -> String {
    vocabulary.describe(individual, date).to_string()
}

fn yes_if(condition: Option<bool>) -> String {
    if condition.unwrap_or(false) {
        "Y".to_string()
    } else {
        String::new()
    }
}

fn mark_sex(sex: Sex, wanted: Sex) -> String {
    if sex == wanted {
        "X".to_string()
    } else {
        String::new()
    }
}

fn sex_letter(sex: Sex, male: &str, female: &str) -> String {
    match sex {
        Sex::Male => male.to_string(),
        Sex::Female => female.to_string(),
        Sex::Unknown => String::new(),
    }
}
