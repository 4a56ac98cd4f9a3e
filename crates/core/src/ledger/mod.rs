//! Ledger module.
//!
//! This module holds the two item lists (assets and liabilities), the pure
//! functions that edit them, and a service that keeps the current ledger for
//! a front end.

mod ledger_model;
mod ledger_ops;
mod ledger_service;
mod ledger_traits;

pub use ledger_model::*;
pub use ledger_ops::{add_item, remove_item, update_category, update_field};
pub use ledger_service::*;
pub use ledger_traits::*;

#[cfg(test)]
mod ledger_service_tests;
