// SPDX-License-Identifier: PMPL-1.0-or-later

//! Surname traditions
//!
//! When a new relative is added to a tree, the tradition proposes the name
//! fields of the new person from the names already known. Names are GEDCOM
//! `NAME` values with the surname between slashes (`John /White/`); the
//! result is a small ordered map of GEDCOM tags.
//!
//! | Identifier    | Child                          | Married names |
//! |---------------|--------------------------------|---------------|
//! | `none`        | nothing                        | no            |
//! | `paternal`    | father's surname               | yes           |
//! | `patrilineal` | father's surname               | no            |
//! | `matrilineal` | mother's surname               | no            |
//! | `polish`      | father's, inflected by sex     | yes           |
//! | `lithuanian`  | father's, inflected by sex     | yes           |
//! | `spanish`     | father's first + mother's first| no            |
//! | `portuguese`  | mother's last + father's last  | no            |
//! | `icelandic`   | father's given + sson/sdottir  | no            |
//!
//! None of the operations fail: missing or unparseable names produce an
//! empty surname (`{NAME: "//"}`).

mod hispanic;
mod icelandic;
mod lithuanian;
mod paternal;
mod polish;

pub use hispanic::{PortugueseTradition, SpanishTradition};
pub use icelandic::IcelandicTradition;
pub use lithuanian::LithuanianTradition;
pub use paternal::{MatrilinealTradition, PaternalTradition, PatrilinealTradition};
pub use polish::PolishTradition;

use crate::types::Sex;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// GEDCOM tags a tradition may fill in. The derive order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NameTag {
    #[serde(rename = "NAME")]
    Name,
    #[serde(rename = "GIVN")]
    Givn,
    #[serde(rename = "SPFX")]
    Spfx,
    #[serde(rename = "SURN")]
    Surn,
    #[serde(rename = "_MARNM")]
    MarriedName,
}

impl NameTag {
    pub fn tag(&self) -> &'static str {
        match self {
            NameTag::Name => "NAME",
            NameTag::Givn => "GIVN",
            NameTag::Spfx => "SPFX",
            NameTag::Surn => "SURN",
            NameTag::MarriedName => "_MARNM",
        }
    }
}

/// Proposed name fields, keyed by tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameFields(BTreeMap<NameTag, String>);

impl NameFields {
    /// `{NAME: "//"}`: a name with an empty surname.
    pub fn blank() -> Self {
        Self::default().with(NameTag::Name, "//")
    }

    /// Add a field. Empty values are skipped, except for `NAME`.
    pub fn with(mut self, tag: NameTag, value: &str) -> Self {
        if tag == NameTag::Name || !value.is_empty() {
            self.0.insert(tag, value.to_string());
        }
        self
    }

    pub fn get(&self, tag: NameTag) -> Option<&str> {
        self.0.get(&tag).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NameTag, &str)> {
        self.0.iter().map(|(tag, value)| (*tag, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NameFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (tag, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", tag.tag(), value)?;
            first = false;
        }
        Ok(())
    }
}

/// Name proposals for a new relative.
///
/// The default methods describe a tradition with no rules: every new
/// person gets an empty surname.
pub trait SurnameTradition {
    /// Whether wives take a married name (`_MARNM`).
    fn has_married_names(&self) -> bool {
        false
    }

    /// Whether names in this tradition carry a surname at all.
    fn has_surnames(&self) -> bool {
        true
    }

    /// Names for a new child of the given parents.
    fn new_child_names(&self, _father_name: &str, _mother_name: &str, _sex: Sex) -> NameFields {
        NameFields::blank()
    }

    /// Names for a new parent of a child with `child_name`.
    fn new_parent_names(&self, _child_name: &str, _sex: Sex) -> NameFields {
        NameFields::blank()
    }

    /// Names for a new spouse of someone called `spouse_name`.
    fn new_spouse_names(&self, _spouse_name: &str, _sex: Sex) -> NameFields {
        NameFields::blank()
    }
}

/// No naming rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneTradition;

impl SurnameTradition for NoneTradition {}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown surname tradition '{0}'")]
pub struct UnknownTradition(pub String);

/// The configurable traditions, by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tradition {
    None,
    #[default]
    Paternal,
    Patrilineal,
    Matrilineal,
    Polish,
    Lithuanian,
    Spanish,
    Portuguese,
    Icelandic,
}

impl Tradition {
    pub fn all() -> &'static [Tradition] {
        &[
            Tradition::None,
            Tradition::Paternal,
            Tradition::Patrilineal,
            Tradition::Matrilineal,
            Tradition::Polish,
            Tradition::Lithuanian,
            Tradition::Spanish,
            Tradition::Portuguese,
            Tradition::Icelandic,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tradition::None => "none",
            Tradition::Paternal => "paternal",
            Tradition::Patrilineal => "patrilineal",
            Tradition::Matrilineal => "matrilineal",
            Tradition::Polish => "polish",
            Tradition::Lithuanian => "lithuanian",
            Tradition::Spanish => "spanish",
            Tradition::Portuguese => "portuguese",
            Tradition::Icelandic => "icelandic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tradition::None => "no surnames are proposed",
            Tradition::Paternal => "children take their father's surname, wives take their husband's",
            Tradition::Patrilineal => "children take their father's surname",
            Tradition::Matrilineal => "children take their mother's surname",
            Tradition::Polish => "paternal, with feminine forms (-ski/-ska, -cki/-cka)",
            Tradition::Lithuanian => "paternal, with daughters' and wives' suffixes",
            Tradition::Spanish => "children take their father's first and mother's first surname",
            Tradition::Portuguese => "children take their mother's last and father's last surname",
            Tradition::Icelandic => "children take a patronymic from their father's given name",
        }
    }

    pub fn build(&self) -> Box<dyn SurnameTradition> {
        match self {
            Tradition::None => Box::new(NoneTradition),
            Tradition::Paternal => Box::new(PaternalTradition),
            Tradition::Patrilineal => Box::new(PatrilinealTradition),
            Tradition::Matrilineal => Box::new(MatrilinealTradition),
            Tradition::Polish => Box::new(PolishTradition),
            Tradition::Lithuanian => Box::new(LithuanianTradition),
            Tradition::Spanish => Box::new(SpanishTradition),
            Tradition::Portuguese => Box::new(PortugueseTradition),
            Tradition::Icelandic => Box::new(IcelandicTradition),
        }
    }
}

impl FromStr for Tradition {
    type Err = UnknownTradition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Tradition::all()
            .iter()
            .copied()
            .find(|tradition| tradition.id() == wanted)
            .ok_or_else(|| UnknownTradition(s.to_string()))
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Look up a tradition implementation by identifier.
pub fn surname_tradition(id: &str) -> Result<Box<dyn SurnameTradition>, UnknownTradition> {
    id.parse::<Tradition>().map(|tradition| tradition.build())
}

/// Surname prefixes recognised in front of a surname (`/van der Berg/`).
const SURNAME_PREFIXES: &[&str] = &[
    "a", "aan", "ab", "af", "al", "ap", "as", "auf", "av", "bat", "ben", "bij", "bin", "bint",
    "da", "de", "del", "della", "dem", "den", "der", "di", "du", "el", "fitz", "het", "ibn", "la",
    "las", "le", "les", "los", "onder", "op", "over", "'s", "st", "'t", "te", "ten", "ter", "till",
    "tot", "uit", "uijt", "van", "vanden", "von", "zu",
];

static SPFX_SURN: Lazy<Regex> = Lazy::new(|| {
    let prefixes = SURNAME_PREFIXES
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"/(?P<spfx>(?:(?:{}) )*)(?P<surn>[^/]*)/",
        prefixes
    ))
    .expect("surname prefix pattern compiles")
});

/// The surname part of a GEDCOM name, split into prefix and surname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Surname {
    pub spfx: String,
    pub surn: String,
}

impl Surname {
    /// The first `/.../` section of `name`, if any.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = SPFX_SURN.captures(name)?;
        Some(Self {
            spfx: caps["spfx"].to_string(),
            surn: caps["surn"].to_string(),
        })
    }

    /// `/spfx surn/`
    pub fn slashed(&self) -> String {
        format!("/{}{}/", self.spfx, self.surn)
    }

    pub fn with_surn(&self, surn: String) -> Self {
        Self {
            spfx: self.spfx.clone(),
            surn,
        }
    }

    /// `NAME`, `SPFX` and `SURN` fields, skipping empty ones.
    pub fn fields(&self) -> NameFields {
        NameFields::default()
            .with(NameTag::Name, &self.slashed())
            .with(NameTag::Spfx, self.spfx.trim_end())
            .with(NameTag::Surn, &self.surn)
    }
}

/// Replace the first matching suffix. Tables list longer suffixes first.
pub(crate) fn inflect(surname: &str, suffixes: &[(&str, &str)]) -> String {
    for (from, to) in suffixes {
        if let Some(stem) = surname.strip_suffix(from) {
            return format!("{}{}", stem, to);
        }
    }
    surname.to_string()
}
