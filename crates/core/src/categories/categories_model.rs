//! Category display metadata.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::ledger::ItemKind;

/// Display metadata for one category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    /// Key stored on items (e.g., "cash", "credit-cards")
    pub key: String,
    /// Human readable label
    pub label: String,
    /// Icon name for front ends that draw one
    pub icon: String,
    /// Accent color hint for front ends
    pub color: String,
}

impl CategoryInfo {
    pub fn new(key: &str, label: &str, icon: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// Ordered category tables for assets and liabilities.
///
/// Both tables are non-empty. The first entry of a table is the default for
/// new items and the last entry is the catch-all for unknown keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CategoryTables")]
pub struct CategoryRegistry {
    assets: Vec<CategoryInfo>,
    liabilities: Vec<CategoryInfo>,
}

/// Unchecked serialized shape of a [`CategoryRegistry`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryTables {
    assets: Vec<CategoryInfo>,
    liabilities: Vec<CategoryInfo>,
}

impl TryFrom<CategoryTables> for CategoryRegistry {
    type Error = crate::errors::Error;

    fn try_from(tables: CategoryTables) -> Result<Self> {
        Self::new(tables.assets, tables.liabilities)
    }
}

impl CategoryRegistry {
    pub fn new(assets: Vec<CategoryInfo>, liabilities: Vec<CategoryInfo>) -> Result<Self> {
        for (kind, table) in [(ItemKind::Asset, &assets), (ItemKind::Liability, &liabilities)] {
            if table.is_empty() {
                let label = kind.plural_label().to_lowercase();
                return Err(ValidationError::EmptyCategoryTable(label).into());
            }
        }
        Ok(Self {
            assets,
            liabilities,
        })
    }

    pub fn categories(&self, kind: ItemKind) -> &[CategoryInfo] {
        match kind {
            ItemKind::Asset => &self.assets,
            ItemKind::Liability => &self.liabilities,
        }
    }

    /// Category key given to newly added items of `kind`.
    pub fn default_category(&self, kind: ItemKind) -> &str {
        // non-empty by construction
        &self.categories(kind)[0].key
    }

    /// Metadata for `key`, or the catch-all entry when the key is unknown.
    pub fn lookup(&self, kind: ItemKind, key: &str) -> &CategoryInfo {
        let table = self.categories(kind);
        table
            .iter()
            .find(|info| info.key == key)
            .unwrap_or(&table[table.len() - 1])
    }

    pub fn contains(&self, kind: ItemKind, key: &str) -> bool {
        self.categories(kind).iter().any(|info| info.key == key)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            assets: vec![
                CategoryInfo::new("cash", "Cash & Savings", "banknote", "green"),
                CategoryInfo::new("investments", "Investments", "bitcoin", "blue"),
                CategoryInfo::new("real-estate", "Real Estate", "home", "amber"),
                CategoryInfo::new("vehicles", "Vehicles", "car", "purple"),
                CategoryInfo::new("collectibles", "Collectibles", "watch", "rose"),
                CategoryInfo::new("electronics", "Electronics", "smartphone", "gray"),
                CategoryInfo::new("travel-rewards", "Travel Rewards", "plane", "sky"),
                CategoryInfo::new("education", "Education", "graduation-cap", "indigo"),
                CategoryInfo::new("other", "Other Assets", "shopping-bag", "teal"),
            ],
            liabilities: vec![
                CategoryInfo::new("mortgage", "Mortgage", "building", "red"),
                CategoryInfo::new("loans", "Loans", "landmark", "orange"),
                CategoryInfo::new("credit-cards", "Credit Cards", "credit-card", "rose"),
                CategoryInfo::new("student-loans", "Student Loans", "graduation-cap", "purple"),
                CategoryInfo::new("personal-debt", "Personal Debt", "piggy-bank", "pink"),
                CategoryInfo::new("other", "Other Debts", "shopping-bag", "red"),
            ],
        }
    }
}
