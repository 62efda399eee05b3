// SPDX-License-Identifier: PMPL-1.0-or-later

//! Icelandic patronymics. There are no family surnames; children are
//! named after their father's given name.

use super::{NameFields, NameTag, SurnameTradition};
use crate::types::Sex;
use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_GIVEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?P<givn>[^\s/]+)").expect("given name pattern compiles"));

static PATRONYMIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<givn>[^\s/]+?)(?:sson|sd[oó]ttir)\b").expect("patronymic pattern compiles")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct IcelandicTradition;

impl SurnameTradition for IcelandicTradition {
    fn has_surnames(&self) -> bool {
        false
    }

    fn new_child_names(&self, father_name: &str, _mother_name: &str, sex: Sex) -> NameFields {
        let Some(caps) = FIRST_GIVEN.captures(father_name) else {
            return NameFields::default();
        };
        let suffix = match sex {
            Sex::Male => "sson",
            Sex::Female => "sdottir",
            Sex::Unknown => return NameFields::default(),
        };
        NameFields::default().with(NameTag::Name, &format!("{}{}", &caps["givn"], suffix))
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        match (sex, PATRONYMIC.captures(child_name)) {
            (Sex::Male, Some(caps)) => NameFields::default()
                .with(NameTag::Name, &caps["givn"])
                .with(NameTag::Givn, &caps["givn"]),
            _ => NameFields::default(),
        }
    }

    fn new_spouse_names(&self, _spouse_name: &str, _sex: Sex) -> NameFields {
        NameFields::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_surnames() {
        assert!(!IcelandicTradition.has_surnames());
        assert!(!IcelandicTradition.has_married_names());
    }

    #[test]
    fn children_take_patronymic() {
        let son = IcelandicTradition.new_child_names("Jón Einarsson", "Guðrún Pálsdóttir", Sex::Male);
        assert_eq!(son.get(NameTag::Name), Some("Jónsson"));
        let daughter =
            IcelandicTradition.new_child_names("Jón Einarsson", "Guðrún Pálsdóttir", Sex::Female);
        assert_eq!(daughter.get(NameTag::Name), Some("Jónsdottir"));
    }

    #[test]
    fn daughter_suffix_is_ascii() {
        let daughter = IcelandicTradition.new_child_names("Jon Einarsson", "", Sex::Female);
        assert_eq!(daughter.get(NameTag::Name), Some("Jonsdottir"));
    }

    #[test]
    fn unknown_sex_or_father_gives_nothing() {
        assert!(IcelandicTradition
            .new_child_names("Jón Einarsson", "", Sex::Unknown)
            .is_empty());
        assert!(IcelandicTradition
            .new_child_names("", "Guðrún Pálsdóttir", Sex::Male)
            .is_empty());
    }

    #[test]
    fn father_from_patronymic() {
        let father = IcelandicTradition.new_parent_names("Björk Guðmundsdóttir", Sex::Male);
        assert_eq!(father.get(NameTag::Name), Some("Guðmund"));
        assert_eq!(father.get(NameTag::Givn), Some("Guðmund"));
        let father = IcelandicTradition.new_parent_names("Anna Jonsdottir", Sex::Male);
        assert_eq!(father.get(NameTag::Name), Some("Jon"));
        let father = IcelandicTradition.new_parent_names("Jón Einarsson", Sex::Male);
        assert_eq!(father.get(NameTag::Name), Some("Einar"));
        assert!(IcelandicTradition
            .new_parent_names("Jón Einarsson", Sex::Female)
            .is_empty());
    }

    #[test]
    fn spouses_get_nothing() {
        assert!(IcelandicTradition
            .new_spouse_names("Jón Einarsson", Sex::Female)
            .is_empty());
    }
}
