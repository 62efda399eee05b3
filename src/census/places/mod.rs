// SPDX-License-Identifier: PMPL-1.0-or-later

//! Census form tables, one module per country.

pub(super) mod czech;
pub(super) mod denmark;
pub(super) mod deutschland;
pub(super) mod england;
pub(super) mod france;
pub(super) mod scotland;
pub(super) mod usa;
pub(super) mod wales;
