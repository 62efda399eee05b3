// SPDX-License-Identifier: PMPL-1.0-or-later

//! Double surnames, one from each parent.
//!
//! Names are written with both surnames slashed: `Gabriel /Garcia/ /Iglesias/`.

use super::{NameFields, NameTag, SurnameTradition};
use crate::types::Sex;
use once_cell::sync::Lazy;
use regex::Regex;

static SURNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?P<surn1>[^/]*)/(?:\s*/(?P<surn2>[^/]*)/)?")
        .expect("double surname pattern compiles")
});

/// The two surnames of a name. A single surname fills only the first.
fn surnames(name: &str) -> Option<(String, Option<String>)> {
    let caps = SURNS.captures(name)?;
    Some((
        caps["surn1"].to_string(),
        caps.name("surn2").map(|m| m.as_str().to_string()),
    ))
}

fn first_surname(name: &str) -> String {
    surnames(name).map(|(first, _)| first).unwrap_or_default()
}

/// The second surname, or the only one.
fn last_surname(name: &str) -> String {
    surnames(name)
        .map(|(first, second)| second.unwrap_or(first))
        .unwrap_or_default()
}

fn double_name(first: &str, second: &str) -> NameFields {
    let surn = [first, second]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(",");
    NameFields::default()
        .with(NameTag::Name, &format!("/{}/ /{}/", first, second))
        .with(NameTag::Surn, &surn)
}

/// Children take the father's first surname followed by the mother's
/// first surname.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishTradition;

impl SurnameTradition for SpanishTradition {
    fn new_child_names(&self, father_name: &str, mother_name: &str, _sex: Sex) -> NameFields {
        double_name(&first_surname(father_name), &first_surname(mother_name))
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        let Some((first, second)) = surnames(child_name) else {
            return double_name("", "");
        };
        match sex {
            Sex::Male => double_name(&first, ""),
            Sex::Female => double_name("", &second.unwrap_or_default()),
            Sex::Unknown => double_name("", ""),
        }
    }

    fn new_spouse_names(&self, _spouse_name: &str, _sex: Sex) -> NameFields {
        double_name("", "")
    }
}

/// Children take the mother's last surname followed by the father's last
/// surname.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseTradition;

impl SurnameTradition for PortugueseTradition {
    fn new_child_names(&self, father_name: &str, mother_name: &str, _sex: Sex) -> NameFields {
        double_name(&last_surname(mother_name), &last_surname(father_name))
    }

    fn new_parent_names(&self, child_name: &str, sex: Sex) -> NameFields {
        let Some((first, second)) = surnames(child_name) else {
            return double_name("", "");
        };
        match sex {
            Sex::Male => double_name("", &second.unwrap_or_default()),
            Sex::Female => double_name(&first, ""),
            Sex::Unknown => double_name("", ""),
        }
    }

    fn new_spouse_names(&self, _spouse_name: &str, _sex: Sex) -> NameFields {
        double_name("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_surn(name: &str, surn: &str) -> NameFields {
        NameFields::default()
            .with(NameTag::Name, name)
            .with(NameTag::Surn, surn)
    }

    #[test]
    fn spanish_child() {
        let spanish = SpanishTradition;
        assert!(!spanish.has_married_names());
        assert_eq!(
            spanish.new_child_names(
                "Gabriel /Garcia/ /Iglesias/",
                "Maria /Ruiz/ /Lorca/",
                Sex::Male
            ),
            name_surn("/Garcia/ /Ruiz/", "Garcia,Ruiz")
        );
        assert_eq!(
            spanish.new_child_names("Gabriel /Garcia/ /Iglesias/", "", Sex::Female),
            name_surn("/Garcia/ //", "Garcia")
        );
        assert_eq!(
            spanish.new_child_names("", "", Sex::Unknown),
            name_surn("// //", "")
        );
    }

    #[test]
    fn spanish_parents() {
        let spanish = SpanishTradition;
        let child = "Gabriel /Garcia/ /Iglesias/";
        assert_eq!(
            spanish.new_parent_names(child, Sex::Male),
            name_surn("/Garcia/ //", "Garcia")
        );
        assert_eq!(
            spanish.new_parent_names(child, Sex::Female),
            name_surn("// /Iglesias/", "Iglesias")
        );
        assert_eq!(spanish.new_parent_names(child, Sex::Unknown), name_surn("// //", ""));
        assert_eq!(spanish.new_parent_names("Gabriel", Sex::Male), name_surn("// //", ""));
    }

    #[test]
    fn spanish_spouse() {
        assert_eq!(
            SpanishTradition.new_spouse_names("Gabriel /Garcia/ /Iglesias/", Sex::Female),
            name_surn("// //", "")
        );
    }

    #[test]
    fn portuguese_child() {
        let portuguese = PortugueseTradition;
        assert_eq!(
            portuguese.new_child_names(
                "Gabriel /Iglesias/ /Garcia/",
                "Maria /Lorca/ /Ruiz/",
                Sex::Male
            ),
            name_surn("/Ruiz/ /Garcia/", "Ruiz,Garcia")
        );
        assert_eq!(
            portuguese.new_child_names("João /Silva/", "", Sex::Male),
            name_surn("// /Silva/", "Silva")
        );
    }

    #[test]
    fn portuguese_parents() {
        let portuguese = PortugueseTradition;
        let child = "Gabriel /Ruiz/ /Garcia/";
        assert_eq!(
            portuguese.new_parent_names(child, Sex::Male),
            name_surn("// /Garcia/", "Garcia")
        );
        assert_eq!(
            portuguese.new_parent_names(child, Sex::Female),
            name_surn("/Ruiz/ //", "Ruiz")
        );
        assert_eq!(portuguese.new_parent_names(child, Sex::Unknown), name_surn("// //", ""));
    }
}
