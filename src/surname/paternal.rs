// SPDX-License-Identifier: PMPL-1.0-or-later

//! Traditions where a surname passes down one line unchanged.

use super::{NameFields, NameTag, Surname, SurnameTradition};
use crate::types::Sex;

/// Children take the father's surname; wives take their husband's
/// surname as a married name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaternalTradition;

impl SurnameTradition for PaternalTradition {
    fn has_married_names(&self) -> bool {
        true
    }

    fn new_child_names(&self, father_name: &str, _mother_name: &str, _sex: Sex) -> NameFields {
        inherit(father_name)
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        match sex {
            Sex::Male => inherit(child_name),
            _ => NameFields::blank(),
        }
    }

    fn new_spouse_names(&self, spouse_name: &str, sex: Sex) -> NameFields {
        match (sex, Surname::parse(spouse_name)) {
            (Sex::Female, Some(surname)) => {
                NameFields::blank().with(NameTag::MarriedName, &surname.slashed())
            }
            _ => NameFields::blank(),
        }
    }
}

/// Children take the father's surname; no married names.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatrilinealTradition;

impl SurnameTradition for PatrilinealTradition {
    fn new_child_names(&self, father_name: &str, _mother_name: &str, _sex: Sex) -> NameFields {
        inherit(father_name)
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        match sex {
            Sex::Male => inherit(child_name),
            _ => NameFields::blank(),
        }
    }
}

/// Children take the mother's surname; no married names.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrilinealTradition;

impl SurnameTradition for MatrilinealTradition {
    fn new_child_names(&self, _father_name: &str, mother_name: &str, _sex: Sex) -> NameFields {
        inherit(mother_name)
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        match sex {
            Sex::Female => inherit(child_name),
            _ => NameFields::blank(),
        }
    }
}

fn inherit(name: &str) -> NameFields {
    Surname::parse(name)
        .map(|surname| surname.fields())
        .unwrap_or_else(NameFields::blank)
}
