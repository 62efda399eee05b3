// SPDX-License-Identifier: PMPL-1.0-or-later

//! Polish surnames: paternal, with adjectival surnames agreeing in gender
//! (`Kowalski` / `Kowalska`).

use super::{inflect, NameFields, NameTag, Surname, SurnameTradition};
use crate::types::Sex;

const INFLECT_FEMALE: &[(&str, &str)] = &[
    ("cki", "cka"),
    ("dzki", "dzka"),
    ("ski", "ska"),
    ("żki", "żka"),
];

const INFLECT_MALE: &[(&str, &str)] = &[
    ("cka", "cki"),
    ("dzka", "dzki"),
    ("ska", "ski"),
    ("żka", "żki"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PolishTradition;

impl SurnameTradition for PolishTradition {
    fn has_married_names(&self) -> bool {
        true
    }

    /// Daughters get the feminine form in `NAME`; `SURN` keeps the
    /// masculine form for indexing.
    fn new_child_names(&self, father_name: &str, _mother_name: &str, sex: Sex) -> NameFields {
        let Some(surname) = Surname::parse(father_name) else {
            return NameFields::blank();
        };
        match sex {
            Sex::Female => {
                let female = surname.with_surn(inflect(&surname.surn, INFLECT_FEMALE));
                surname.fields().with(NameTag::Name, &female.slashed())
            }
            _ => surname.fields(),
        }
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        match (sex, Surname::parse(child_name)) {
            (Sex::Male, Some(surname)) => surname
                .with_surn(inflect(&surname.surn, INFLECT_MALE))
                .fields(),
            _ => NameFields::blank(),
        }
    }

    fn new_spouse_names(&self, spouse_name: &str, sex: Sex) -> NameFields {
        match (sex, Surname::parse(spouse_name)) {
            (Sex::Female, Some(surname)) => {
                let female = surname.with_surn(inflect(&surname.surn, INFLECT_FEMALE));
                NameFields::blank().with(NameTag::MarriedName, &female.slashed())
            }
            _ => NameFields::blank(),
        }
    }
}
