// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core genealogy record types
//!
//! Records are plain serde structs, loaded from a JSON fixture or built in
//! code. [`Individual`] and [`Family`] are cheap `Copy` handles that borrow
//! a record together with its [`Tree`], so formatters can walk to parents,
//! spouses and children without owning anything.

use crate::date::GedcomDate;
use crate::place::Place;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// GEDCOM `SEX` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "U", other)]
    Unknown,
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unknown => "U",
        }
    }

    /// Anything other than `M` or `F` is treated as unknown.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "M" | "m" => Sex::Male,
            "F" | "f" => Sex::Female,
            _ => Sex::Unknown,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    #[default]
    Birth,
    Married,
    Aka,
}

/// One `NAME` structure of an individual.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameRecord {
    #[serde(default)]
    pub givn: String,
    #[serde(default)]
    pub surname: String,
    /// The GEDCOM form, with the surname between slashes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(default)]
    pub kind: NameKind,
}

impl NameRecord {
    pub fn new(givn: &str, surname: &str) -> Self {
        Self {
            givn: givn.to_string(),
            surname: surname.to_string(),
            full: None,
            kind: NameKind::Birth,
        }
    }

    /// Split a GEDCOM `NAME` value (`Joe Fred /Sixpack/`).
    pub fn from_gedcom(value: &str, kind: NameKind) -> Self {
        let mut pieces = value.splitn(3, '/');
        let givn = pieces.next().unwrap_or("").trim().to_string();
        let surname = pieces.next().unwrap_or("").trim().to_string();
        Self {
            givn,
            surname,
            full: Some(value.trim().to_string()),
            kind,
        }
    }

    pub fn married(mut self) -> Self {
        self.kind = NameKind::Married;
        self
    }

    /// The name as it is read aloud: slashes removed, spaces collapsed.
    pub fn display_name(&self) -> String {
        let raw = match &self.full {
            Some(full) => full.replace('/', " "),
            None => format!("{} {}", self.givn, self.surname),
        };
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn given_names(&self) -> impl Iterator<Item = &str> {
        self.givn.split_whitespace()
    }
}

/// A dated, placed event (`BIRT`, `DEAT`, `MARR`, `DIV`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<GedcomDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl Event {
    pub fn dated(date: GedcomDate) -> Self {
        Self {
            date: Some(date),
            place: None,
        }
    }

    pub fn at(mut self, place: &str) -> Self {
        self.place = Some(place.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub xref: String,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub names: Vec<NameRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    /// `FAMC` links.
    #[serde(default)]
    pub child_of: Vec<String>,
    /// `FAMS` links.
    #[serde(default)]
    pub spouse_in: Vec<String>,
}

impl IndividualRecord {
    pub fn new(xref: &str, sex: Sex) -> Self {
        Self {
            xref: xref.to_string(),
            sex,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: NameRecord) -> Self {
        self.names.push(name);
        self
    }

    pub fn born(mut self, event: Event) -> Self {
        self.birth = Some(event);
        self
    }

    pub fn died(mut self, event: Event) -> Self {
        self.death = Some(event);
        self
    }

    pub fn with_occupation(mut self, occupation: &str) -> Self {
        self.occupation = Some(occupation.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FamilyRecord {
    pub xref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub husband: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wife: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage: Option<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divorce: Option<Event>,
}

impl FamilyRecord {
    pub fn new(xref: &str, husband: Option<&str>, wife: Option<&str>) -> Self {
        Self {
            xref: xref.to_string(),
            husband: husband.map(str::to_string),
            wife: wife.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: &[&str]) -> Self {
        self.children = children.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn married(mut self, event: Event) -> Self {
        self.marriage = Some(event);
        self
    }

    pub fn divorced(mut self, event: Event) -> Self {
        self.divorce = Some(event);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TreeData {
    #[serde(default)]
    individuals: Vec<IndividualRecord>,
    #[serde(default)]
    families: Vec<FamilyRecord>,
}

/// An in-memory family tree: individuals and families indexed by xref.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "TreeData")]
pub struct Tree {
    individuals: HashMap<String, IndividualRecord>,
    families: HashMap<String, FamilyRecord>,
}

impl From<TreeData> for Tree {
    fn from(data: TreeData) -> Self {
        Tree::new(data.individuals, data.families)
    }
}

impl Tree {
    /// Build a tree. `FAMC`/`FAMS` links missing from the individual
    /// records are filled in from the family records.
    pub fn new(individuals: Vec<IndividualRecord>, families: Vec<FamilyRecord>) -> Self {
        let mut individuals: HashMap<String, IndividualRecord> = individuals
            .into_iter()
            .map(|record| (record.xref.clone(), record))
            .collect();

        for family in &families {
            for spouse in family.husband.iter().chain(family.wife.iter()) {
                if let Some(record) = individuals.get_mut(spouse) {
                    if !record.spouse_in.contains(&family.xref) {
                        record.spouse_in.push(family.xref.clone());
                    }
                }
            }
            for child in &family.children {
                if let Some(record) = individuals.get_mut(child) {
                    if !record.child_of.contains(&family.xref) {
                        record.child_of.push(family.xref.clone());
                    }
                }
            }
        }

        let families = families
            .into_iter()
            .map(|record| (record.xref.clone(), record))
            .collect();

        Self {
            individuals,
            families,
        }
    }

    pub fn individual(&self, xref: &str) -> Option<Individual<'_>> {
        self.individuals.get(xref).map(|record| Individual {
            tree: self,
            record,
        })
    }

    pub fn family(&self, xref: &str) -> Option<Family<'_>> {
        self.families.get(xref).map(|record| Family { tree: self, record })
    }

    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }
}

/// A borrowed individual, able to navigate its tree.
#[derive(Debug, Clone, Copy)]
pub struct Individual<'t> {
    tree: &'t Tree,
    record: &'t IndividualRecord,
}

impl PartialEq for Individual<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.xref == other.record.xref
    }
}

impl Eq for Individual<'_> {}

impl<'t> Individual<'t> {
    pub fn xref(&self) -> &'t str {
        &self.record.xref
    }

    pub fn record(&self) -> &'t IndividualRecord {
        self.record
    }

    pub fn sex(&self) -> Sex {
        self.record.sex
    }

    pub fn all_names(&self) -> &'t [NameRecord] {
        &self.record.names
    }

    /// The first non-married name.
    pub fn primary_name(&self) -> Option<&'t NameRecord> {
        self.record
            .names
            .iter()
            .find(|name| name.kind != NameKind::Married)
            .or_else(|| self.record.names.first())
    }

    pub fn birth_date(&self) -> Option<&'t GedcomDate> {
        self.record.birth.as_ref().and_then(|e| e.date.as_ref())
    }

    pub fn birth_place(&self) -> Place<'t> {
        Place::new(
            self.record
                .birth
                .as_ref()
                .and_then(|e| e.place.as_deref())
                .unwrap_or(""),
        )
    }

    pub fn death_date(&self) -> Option<&'t GedcomDate> {
        self.record.death.as_ref().and_then(|e| e.date.as_ref())
    }

    /// Died before `date`. Undated deaths do not count.
    pub fn died_before(&self, date: &GedcomDate) -> bool {
        self.death_date().map(|d| d.is_before(date)).unwrap_or(false)
    }

    pub fn occupation(&self) -> Option<&'t str> {
        self.record.occupation.as_deref()
    }

    pub fn religion(&self) -> Option<&'t str> {
        self.record.religion.as_deref()
    }

    pub fn spouse_families(&self) -> Vec<Family<'t>> {
        self.record
            .spouse_in
            .iter()
            .filter_map(|xref| self.tree.family(xref))
            .collect()
    }

    pub fn child_families(&self) -> Vec<Family<'t>> {
        self.record
            .child_of
            .iter()
            .filter_map(|xref| self.tree.family(xref))
            .collect()
    }

    pub fn father(&self) -> Option<Individual<'t>> {
        self.child_families().iter().find_map(|f| f.husband())
    }

    pub fn mother(&self) -> Option<Individual<'t>> {
        self.child_families().iter().find_map(|f| f.wife())
    }

    pub fn parents(&self) -> Vec<Individual<'t>> {
        self.child_families()
            .iter()
            .flat_map(|f| f.spouses())
            .collect()
    }

    pub fn spouses(&self) -> Vec<Individual<'t>> {
        self.spouse_families()
            .iter()
            .filter_map(|f| f.spouse_of(self))
            .collect()
    }

    pub fn children(&self) -> Vec<Individual<'t>> {
        self.spouse_families()
            .iter()
            .flat_map(|f| f.children())
            .collect()
    }

    /// Children of the same parents, excluding this individual.
    pub fn siblings(&self) -> Vec<Individual<'t>> {
        self.child_families()
            .iter()
            .flat_map(|f| f.children())
            .filter(|child| child != self)
            .collect()
    }
}

/// A borrowed family record.
#[derive(Debug, Clone, Copy)]
pub struct Family<'t> {
    tree: &'t Tree,
    record: &'t FamilyRecord,
}

impl<'t> Family<'t> {
    pub fn xref(&self) -> &'t str {
        &self.record.xref
    }

    pub fn husband(&self) -> Option<Individual<'t>> {
        self.record
            .husband
            .as_deref()
            .and_then(|xref| self.tree.individual(xref))
    }

    pub fn wife(&self) -> Option<Individual<'t>> {
        self.record
            .wife
            .as_deref()
            .and_then(|xref| self.tree.individual(xref))
    }

    pub fn spouses(&self) -> Vec<Individual<'t>> {
        self.husband().into_iter().chain(self.wife()).collect()
    }

    /// The other partner of `individual` in this family.
    pub fn spouse_of(&self, individual: &Individual<'_>) -> Option<Individual<'t>> {
        self.spouses()
            .into_iter()
            .find(|spouse| spouse.xref() != individual.xref())
    }

    pub fn children(&self) -> Vec<Individual<'t>> {
        self.record
            .children
            .iter()
            .filter_map(|xref| self.tree.individual(xref))
            .collect()
    }

    pub fn marriage_date(&self) -> Option<&'t GedcomDate> {
        self.record.marriage.as_ref().and_then(|e| e.date.as_ref())
    }

    pub fn divorce_date(&self) -> Option<&'t GedcomDate> {
        self.record.divorce.as_ref().and_then(|e| e.date.as_ref())
    }

    pub fn is_divorced(&self) -> bool {
        self.record.divorce.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> Tree {
        Tree::new(
            vec![
                IndividualRecord::new("I1", Sex::Male)
                    .with_name(NameRecord::from_gedcom("John /White/", NameKind::Birth)),
                IndividualRecord::new("I2", Sex::Female)
                    .with_name(NameRecord::from_gedcom("Mary /Black/", NameKind::Birth)),
                IndividualRecord::new("I3", Sex::Female),
                IndividualRecord::new("I4", Sex::Male),
            ],
            vec![FamilyRecord::new("F1", Some("I1"), Some("I2")).with_children(&["I3", "I4"])],
        )
    }

    #[test]
    fn sex_codes() {
        assert_eq!(Sex::from_code("M"), Sex::Male);
        assert_eq!(Sex::from_code("F"), Sex::Female);
        assert_eq!(Sex::from_code("X"), Sex::Unknown);
        assert_eq!(Sex::Female.to_string(), "F");
    }

    #[test]
    fn gedcom_name_split() {
        let name = NameRecord::from_gedcom("Joe Fred /Sixpack/", NameKind::Birth);
        assert_eq!(name.givn, "Joe Fred");
        assert_eq!(name.surname, "Sixpack");
        assert_eq!(name.display_name(), "Joe Fred Sixpack");
    }

    #[test]
    fn links_are_filled_from_families() {
        let tree = small_tree();
        let john = tree.individual("I1").unwrap();
        let daughter = tree.individual("I3").unwrap();

        assert_eq!(john.children().len(), 2);
        assert_eq!(daughter.father().map(|f| f.xref()), Some("I1"));
        assert_eq!(daughter.mother().map(|m| m.xref()), Some("I2"));
        assert_eq!(daughter.siblings().len(), 1);
        assert_eq!(john.spouses()[0].xref(), "I2");
    }

    #[test]
    fn tree_from_json() {
        let json = r#"{
            "individuals": [
                {"xref": "I1", "sex": "M", "names": [{"givn": "Joe", "surname": "Sixpack"}],
                 "birth": {"date": "ABT 1820", "place": "Leith, Scotland"}}
            ],
            "families": []
        }"#;
        let tree: Tree = serde_json::from_str(json).unwrap();
        let joe = tree.individual("I1").unwrap();
        assert_eq!(joe.birth_date().map(|d| d.year()), Some(1820));
        assert_eq!(joe.birth_place().last_part(), "Scotland");
        assert_eq!(joe.primary_name().unwrap().display_name(), "Joe Sixpack");
    }
}
