//! Ledger service implementation.

use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::{Arc, RwLock};

use super::ledger_model::{Item, ItemField, ItemId, ItemKind, Ledger};
use super::ledger_ops;
use super::ledger_traits::LedgerServiceTrait;
use crate::aggregator::Summary;
use crate::categories::CategoryRegistry;
use crate::errors::Result;
use crate::report::{assemble_report, Report};

/// Holds the current ledger for a session.
///
/// Updates run a pure function over a copy of the ledger and swap the result
/// in whole, so readers never see a half-applied change.
pub struct LedgerService {
    ledger: Arc<RwLock<Ledger>>,
    category_registry: Arc<CategoryRegistry>,
}

impl LedgerService {
    /// Creates a service over an empty ledger.
    pub fn new(category_registry: Arc<CategoryRegistry>) -> Self {
        Self::with_ledger(Ledger::default(), category_registry)
    }

    /// Creates a service over the starter ledger (one blank row per list).
    pub fn with_starter_rows(category_registry: Arc<CategoryRegistry>) -> Self {
        let ledger = Ledger::starter(&category_registry);
        Self::with_ledger(ledger, category_registry)
    }

    pub fn with_ledger(ledger: Ledger, category_registry: Arc<CategoryRegistry>) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            category_registry,
        }
    }

    /// Applies `update` to the current ledger and stores the result.
    fn apply<F>(&self, update: F) -> Result<Ledger>
    where
        F: FnOnce(&Ledger) -> Ledger,
    {
        self.apply_with(|ledger| (update(ledger), ()))
            .map(|(ledger, ())| ledger)
    }

    /// Like [`Self::apply`], also passing back a value produced by `update`.
    fn apply_with<T, F>(&self, update: F) -> Result<(Ledger, T)>
    where
        F: FnOnce(&Ledger) -> (Ledger, T),
    {
        let mut guard = self.ledger.write()?;
        let (next, output) = update(&guard);
        *guard = next.clone();
        Ok((next, output))
    }

    fn read<T, F>(&self, view: F) -> Result<T>
    where
        F: FnOnce(&Ledger) -> T,
    {
        let guard = self.ledger.read()?;
        Ok(view(&guard))
    }
}

impl LedgerServiceTrait for LedgerService {
    fn get_ledger(&self) -> Result<Ledger> {
        self.read(Ledger::clone)
    }

    fn add_item(&self, kind: ItemKind) -> Result<(Ledger, ItemId)> {
        let category = self.category_registry.default_category(kind);
        self.apply_with(|ledger| {
            let (next, id) = ledger_ops::add_item(ledger, kind, category);
            debug!("Added {} {} with category '{}'", kind, id, category);
            (next, id)
        })
    }

    fn remove_item(&self, id: ItemId, kind: ItemKind) -> Result<Ledger> {
        self.apply(|ledger| {
            if ledger.find(kind, id).is_none() {
                warn!("Remove requested for unknown {} {}; ledger unchanged", kind, id);
            } else {
                debug!("Removed {} {}", kind, id);
            }
            ledger_ops::remove_item(ledger, id, kind)
        })
    }

    fn update_field(
        &self,
        id: ItemId,
        kind: ItemKind,
        field: ItemField,
        value: &str,
    ) -> Result<Ledger> {
        self.apply(|ledger| {
            if ledger.find(kind, id).is_none() {
                warn!("Edit requested for unknown {} {}; ledger unchanged", kind, id);
            } else {
                debug!("Updated {:?} of {} {}", field, kind, id);
            }
            ledger_ops::update_field(ledger, id, kind, field, value)
        })
    }

    fn update_category(&self, id: ItemId, kind: ItemKind, category: &str) -> Result<Ledger> {
        if !self.category_registry.contains(kind, category) {
            debug!(
                "Category '{}' is not in the {} table; it will display as '{}'",
                category,
                kind,
                self.category_registry.lookup(kind, category).label
            );
        }
        self.apply(|ledger| {
            if ledger.find(kind, id).is_none() {
                warn!(
                    "Category change requested for unknown {} {}; ledger unchanged",
                    kind, id
                );
            }
            ledger_ops::update_category(ledger, id, kind, category)
        })
    }

    fn get_summary(&self) -> Result<Summary> {
        self.read(Summary::from_ledger)
    }

    fn get_valid_items(&self, kind: ItemKind) -> Result<Vec<Item>> {
        self.read(|ledger| {
            crate::aggregator::valid_items(ledger.items(kind))
                .into_iter()
                .cloned()
                .collect()
        })
    }

    fn build_report(&self, generated_on: NaiveDate) -> Result<Report> {
        self.read(|ledger| assemble_report(ledger, &self.category_registry, generated_on))
    }

    fn category_registry(&self) -> &CategoryRegistry {
        &self.category_registry
    }
}
