// SPDX-License-Identifier: PMPL-1.0-or-later

//! Surname traditions looked up by identifier, as the CLI and config do.

use treeline::surname::{NameTag, Tradition};
use treeline::{surname_tradition, NameFields, Sex};

fn name_surn(name: &str, surn: &str) -> NameFields {
    NameFields::default()
        .with(NameTag::Name, name)
        .with(NameTag::Surn, surn)
}

#[test]
fn every_identifier_builds() {
    for tradition in Tradition::all() {
        assert!(surname_tradition(tradition.id()).is_ok(), "{tradition}");
        assert_eq!(tradition.id().parse::<Tradition>().unwrap(), *tradition);
    }
    assert!(surname_tradition("klingon").is_err());
}

#[test]
fn polish_family_round() {
    let polish = surname_tradition("polish").unwrap();
    assert!(polish.has_married_names());

    let daughter = polish.new_child_names("Jan /Kowalski/", "Anna /Nowak/", Sex::Female);
    assert_eq!(daughter, name_surn("/Kowalska/", "Kowalski"));

    let son = polish.new_child_names("Jan /Kowalski/", "Anna /Nowak/", Sex::Male);
    assert_eq!(son, name_surn("/Kowalski/", "Kowalski"));

    let father = polish.new_parent_names("Zofia /Zawadzka/", Sex::Male);
    assert_eq!(father, name_surn("/Zawadzki/", "Zawadzki"));

    let wife = polish.new_spouse_names("Piotr /Lewicki/", Sex::Female);
    assert_eq!(wife, NameFields::blank().with(NameTag::MarriedName, "/Lewicka/"));
}

#[test]
fn polish_leaves_other_endings_alone() {
    let polish = Tradition::Polish.build();
    assert_eq!(
        polish.new_child_names("Adam /Nowak/", "", Sex::Female),
        name_surn("/Nowak/", "Nowak")
    );
    assert_eq!(polish.new_parent_names("Adam /Nowak/", Sex::Female), NameFields::blank());
}

#[test]
fn none_tradition_proposes_nothing() {
    let none = surname_tradition("none").unwrap();
    assert_eq!(
        none.new_child_names("John /White/", "Mary /Black/", Sex::Male),
        NameFields::blank()
    );
    assert_eq!(none.new_spouse_names("John /White/", Sex::Female), NameFields::blank());
}
