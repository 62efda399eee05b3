// SPDX-License-Identifier: PMPL-1.0-or-later

//! Censuses of Wales, taken on the English forms and dates.

use super::england::{
    census, COLUMNS_1841, COLUMNS_1851, COLUMNS_1871, COLUMNS_1891, COLUMNS_1901, COLUMNS_1911,
};
use crate::census::CensusDefinition;

pub const PLACE: &str = "Wales";

pub const CENSUSES: &[CensusDefinition] = &[
    census(PLACE, 1841, 6, 6, COLUMNS_1841),
    census(PLACE, 1851, 3, 30, COLUMNS_1851),
    census(PLACE, 1861, 4, 7, COLUMNS_1851),
    census(PLACE, 1871, 4, 2, COLUMNS_1871),
    census(PLACE, 1881, 4, 3, COLUMNS_1871),
    census(PLACE, 1891, 4, 5, COLUMNS_1891),
    census(PLACE, 1901, 3, 31, COLUMNS_1901),
    census(PLACE, 1911, 4, 2, COLUMNS_1911),
];
