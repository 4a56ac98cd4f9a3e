//! Ledger domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::FIRST_ITEM_ID;
use crate::errors::ValidationError;

/// Identifier of an item, unique within its list.
pub type ItemId = u32;

/// Which of the two ledger lists an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Asset,
    Liability,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Asset, ItemKind::Liability];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Asset => "asset",
            ItemKind::Liability => "liability",
        }
    }

    /// Plural heading used by views and reports.
    pub fn plural_label(&self) -> &'static str {
        match self {
            ItemKind::Asset => "Assets",
            ItemKind::Liability => "Liabilities",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asset" | "assets" => Ok(ItemKind::Asset),
            "liability" | "liabilities" => Ok(ItemKind::Liability),
            _ => Err(ValidationError::UnknownItemKind(s.to_string())),
        }
    }
}

/// The editable text fields of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Name,
    Value,
}

impl FromStr for ItemField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ItemField::Name),
            "value" => Ok(ItemField::Value),
            _ => Err(ValidationError::UnknownItemField(s.to_string())),
        }
    }
}

/// One ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Opaque category key
    pub category: String,
    pub name: String,
    /// Raw text as typed; not guaranteed to be numeric
    pub value: String,
}

impl Item {
    /// A blank item with the given id and category.
    pub fn new(id: ItemId, category: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            name: String::new(),
            value: String::new(),
        }
    }

    /// An item is valid for display when both name and value are filled in.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }
}

/// The pair of item lists making up the user's current input.
///
/// Each list has its own id counter. Counters only move forward, so an id
/// freed by a removal is never handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LedgerData")]
pub struct Ledger {
    assets: Vec<Item>,
    liabilities: Vec<Item>,
    next_asset_id: ItemId,
    next_liability_id: ItemId,
}

/// Serialized shape of a [`Ledger`]. Counters may be missing or stale; they
/// are moved past every id already present on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LedgerData {
    #[serde(default)]
    assets: Vec<Item>,
    #[serde(default)]
    liabilities: Vec<Item>,
    #[serde(default)]
    next_asset_id: ItemId,
    #[serde(default)]
    next_liability_id: ItemId,
}

impl From<LedgerData> for Ledger {
    fn from(data: LedgerData) -> Self {
        let next_asset_id = next_free_id(&data.assets, data.next_asset_id);
        let next_liability_id = next_free_id(&data.liabilities, data.next_liability_id);
        Self {
            assets: data.assets,
            liabilities: data.liabilities,
            next_asset_id,
            next_liability_id,
        }
    }
}

fn next_free_id(items: &[Item], stored: ItemId) -> ItemId {
    items
        .iter()
        .map(|item| item.id.saturating_add(1))
        .fold(stored.max(FIRST_ITEM_ID), ItemId::max)
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            liabilities: Vec::new(),
            next_asset_id: FIRST_ITEM_ID,
            next_liability_id: FIRST_ITEM_ID,
        }
    }
}

impl Ledger {
    pub fn assets(&self) -> &[Item] {
        &self.assets
    }

    pub fn liabilities(&self) -> &[Item] {
        &self.liabilities
    }

    pub fn items(&self, kind: ItemKind) -> &[Item] {
        match kind {
            ItemKind::Asset => &self.assets,
            ItemKind::Liability => &self.liabilities,
        }
    }

    pub fn find(&self, kind: ItemKind, id: ItemId) -> Option<&Item> {
        self.items(kind).iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.liabilities.is_empty()
    }

    pub(crate) fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Asset => &mut self.assets,
            ItemKind::Liability => &mut self.liabilities,
        }
    }

    /// Hands out the next id for `kind` and advances its counter.
    pub(crate) fn allocate_id(&mut self, kind: ItemKind) -> ItemId {
        let counter = match kind {
            ItemKind::Asset => &mut self.next_asset_id,
            ItemKind::Liability => &mut self.next_liability_id,
        };
        let id = *counter;
        *counter += 1;
        id
    }
}
