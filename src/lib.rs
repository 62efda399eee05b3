// SPDX-License-Identifier: PMPL-1.0-or-later

//! Treeline: genealogy reference data and module plumbing.
//!
//! - **Census**: historical census forms per country and year, with a
//!   formatting rule per column that reads an individual from the tree.
//! - **Surname traditions**: the name fields a new child, parent or spouse
//!   should start with, by cultural convention.
//! - **Module base**: settings and access levels stored in SQL, and HTML
//!   views wrapped in a layout.
//! - **Locale**: locale, language and territory metadata, number
//!   formatting and the translation catalog.

pub mod census;
pub mod config;
pub mod date;
pub mod locale;
pub mod module;
pub mod place;
pub mod report;
pub mod surname;
pub mod types;

pub use census::{find_census, generate_transcript, CensusDefinition, CensusPlace};
pub use config::Config;
pub use surname::{surname_tradition, NameFields, SurnameTradition, Tradition};
pub use types::{Individual, Sex, Tree};
