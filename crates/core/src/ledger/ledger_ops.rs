//! Pure ledger updates.
//!
//! Every function takes the current ledger by reference and returns a new
//! one. The input is never modified, so a caller that drops the result keeps
//! its previous state intact.

use super::ledger_model::{Item, ItemField, ItemId, ItemKind, Ledger};
use crate::categories::CategoryRegistry;

impl Ledger {
    /// The ledger a fresh session starts from: one blank row per list.
    pub fn starter(registry: &CategoryRegistry) -> Self {
        ItemKind::ALL.iter().fold(Ledger::default(), |ledger, &kind| {
            add_item(&ledger, kind, registry.default_category(kind)).0
        })
    }
}

/// Appends a blank item to the `kind` list, returning the new ledger and the
/// id given to the item.
pub fn add_item(ledger: &Ledger, kind: ItemKind, category: &str) -> (Ledger, ItemId) {
    let mut next = ledger.clone();
    let id = next.allocate_id(kind);
    next.items_mut(kind).push(Item::new(id, category));
    (next, id)
}

/// Drops the item with `id` from the `kind` list. Unknown ids leave the list
/// unchanged.
pub fn remove_item(ledger: &Ledger, id: ItemId, kind: ItemKind) -> Ledger {
    let mut next = ledger.clone();
    next.items_mut(kind).retain(|item| item.id != id);
    next
}

/// Replaces the name or value text of the item with `id`.
pub fn update_field(
    ledger: &Ledger,
    id: ItemId,
    kind: ItemKind,
    field: ItemField,
    value: &str,
) -> Ledger {
    map_item(ledger, id, kind, |item| match field {
        ItemField::Name => item.name = value.to_string(),
        ItemField::Value => item.value = value.to_string(),
    })
}

/// Replaces the category key of the item with `id`.
pub fn update_category(ledger: &Ledger, id: ItemId, kind: ItemKind, category: &str) -> Ledger {
    map_item(ledger, id, kind, |item| item.category = category.to_string())
}

fn map_item<F>(ledger: &Ledger, id: ItemId, kind: ItemKind, edit: F) -> Ledger
where
    F: FnOnce(&mut Item),
{
    let mut next = ledger.clone();
    if let Some(item) = next.items_mut(kind).iter_mut().find(|item| item.id == id) {
        edit(item);
    }
    next
}
