//! Ledger service traits.

use chrono::NaiveDate;

use super::ledger_model::{Item, ItemField, ItemId, ItemKind, Ledger};
use crate::aggregator::Summary;
use crate::categories::CategoryRegistry;
use crate::errors::Result;
use crate::report::Report;

/// Trait defining the contract for ledger operations driven by a front end.
///
/// Mutations return the ledger as it stands after the change. A mutation that
/// fails leaves the previous ledger in place.
pub trait LedgerServiceTrait: Send + Sync {
    /// Snapshot of the current ledger.
    fn get_ledger(&self) -> Result<Ledger>;

    /// Appends a blank item with the default category for `kind`.
    ///
    /// Returns the updated ledger and the id given to the new item.
    fn add_item(&self, kind: ItemKind) -> Result<(Ledger, ItemId)>;

    /// Removes the item with `id` from the `kind` list. Unknown ids are ignored.
    fn remove_item(&self, id: ItemId, kind: ItemKind) -> Result<Ledger>;

    /// Sets the name or the raw value text of an item.
    fn update_field(
        &self,
        id: ItemId,
        kind: ItemKind,
        field: ItemField,
        value: &str,
    ) -> Result<Ledger>;

    /// Sets the category key of an item.
    fn update_category(&self, id: ItemId, kind: ItemKind, category: &str) -> Result<Ledger>;

    /// Totals and net worth for the current ledger.
    fn get_summary(&self) -> Result<Summary>;

    /// Items of `kind` that have both a name and a value.
    fn get_valid_items(&self, kind: ItemKind) -> Result<Vec<Item>>;

    /// Assembles the exportable report for the current ledger.
    ///
    /// # Arguments
    /// * `generated_on` - Date printed on the report
    fn build_report(&self, generated_on: NaiveDate) -> Result<Report>;

    /// Category tables used for defaults and display labels.
    fn category_registry(&self) -> &CategoryRegistry;
}
