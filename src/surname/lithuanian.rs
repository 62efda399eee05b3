// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lithuanian surnames: paternal, with distinct forms for unmarried
//! daughters (`Kazlauskaitė`) and wives (`Kazlauskienė`).

use super::{inflect, NameFields, NameTag, Surname, SurnameTradition};
use crate::types::Sex;

const INFLECT_DAUGHTER: &[(&str, &str)] = &[
    ("ius", "iūtė"),
    ("as", "aitė"),
    ("is", "ytė"),
    ("ys", "ytė"),
    ("us", "utė"),
];

const INFLECT_WIFE: &[(&str, &str)] = &[
    ("ius", "ienė"),
    ("as", "ienė"),
    ("is", "ienė"),
    ("ys", "ienė"),
    ("us", "ienė"),
];

const INFLECT_FATHER: &[(&str, &str)] = &[
    ("iūtė", "ius"),
    ("aitė", "as"),
    ("ytė", "is"),
    ("utė", "us"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LithuanianTradition;

impl SurnameTradition for LithuanianTradition {
    fn has_married_names(&self) -> bool {
        true
    }

    fn new_child_names(&self, father_name: &str, _mother_name: &str, sex: Sex) -> NameFields {
        let Some(surname) = Surname::parse(father_name) else {
            return NameFields::blank();
        };
        match sex {
            Sex::Female => {
                let daughter = surname.with_surn(inflect(&surname.surn, INFLECT_DAUGHTER));
                surname.fields().with(NameTag::Name, &daughter.slashed())
            }
            _ => surname.fields(),
        }
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        match (sex, Surname::parse(child_name)) {
            (Sex::Male, Some(surname)) => surname
                .with_surn(inflect(&surname.surn, INFLECT_FATHER))
                .fields(),
            _ => NameFields::blank(),
        }
    }

    fn new_spouse_names(&self, spouse_name: &str, sex: Sex) -> NameFields {
        match (sex, Surname::parse(spouse_name)) {
            (Sex::Female, Some(surname)) => {
                let wife = surname.with_surn(inflect(&surname.surn, INFLECT_WIFE));
                NameFields::blank().with(NameTag::MarriedName, &wife.slashed())
            }
            _ => NameFields::blank(),
        }
    }
}
