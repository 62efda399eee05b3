// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale, territory and language metadata.
//!
//! Static tables in the shape of CLDR data: every locale knows its
//! endonym (and an upper-case sortable form), its writing direction and
//! how it formats numbers and percentages. Territories carry calendar and
//! measurement conventions and are keyed by ISO 3166 alpha-2 codes or
//! UN M.49 region numbers (`KM`, `145`).
//!
//! ## Census vocabulary
//!
//! | Code | Language | Used by                          |
//! |------|----------|----------------------------------|
//! | en   | English  | England, Wales, Scotland, USA    |
//! | da   | Danish   | Denmark                          |
//! | de   | German   | Deutschland                      |
//! | fr   | French   | France                           |
//! | cs   | Czech    | Czech Republic                   |
//!
//! Translation keys use dotted namespaces (`"relation.son"`). Lookups fall
//! back to English when a key is missing in the requested language.
//!
//! Everything here is compiled in: no file I/O, no allocation on lookup.

mod catalog;
mod data;
mod format;
mod iso639;

pub use catalog::{t, t_or_key, Lang};
pub use data::{
    all_locales, language, locale_from_code, territory, Direction, LanguageData, LocaleData,
    Measurement, PaperSize, PercentFormat, TerritoryData, Weekday,
};
pub use format::{format_number, format_percent, NBSP, NNBSP, PERCENT, PLACEHOLDER};
pub use iso639::{is_valid_iso639_1, language_name, native_name};
