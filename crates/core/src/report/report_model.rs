//! Report domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::ItemKind;

/// One named row of a report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub name: String,
    /// Display label of the item's category
    pub category: String,
    /// Formatted amount (e.g., "$1,000")
    pub value: String,
}

/// Flat, layout-free report of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub title: String,
    pub generated_on: NaiveDate,
    /// Net worth = all assets - all liabilities
    pub net_worth: Decimal,
    pub net_worth_display: String,
    pub is_negative: bool,
    /// Named asset rows, in ledger order
    pub assets: Vec<ReportLine>,
    /// Formatted total over every asset, named or not
    pub total_assets: String,
    /// Named liability rows, in ledger order
    pub liabilities: Vec<ReportLine>,
    /// Formatted total over every liability, named or not
    pub total_liabilities: String,
}

impl Report {
    /// A report is worth exporting once it lists at least one row.
    pub fn is_exportable(&self) -> bool {
        !self.assets.is_empty() || !self.liabilities.is_empty()
    }

    /// Rows and formatted total of one section.
    pub fn section(&self, kind: ItemKind) -> (&[ReportLine], &str) {
        match kind {
            ItemKind::Asset => (self.assets.as_slice(), self.total_assets.as_str()),
            ItemKind::Liability => (self.liabilities.as_slice(), self.total_liabilities.as_str()),
        }
    }
}

/// Label of the total row closing a section.
pub fn total_label(kind: ItemKind) -> String {
    format!("Total {}", kind.plural_label())
}

/// Text shown in place of an empty section.
pub fn empty_section_message(kind: ItemKind) -> String {
    format!("No {} added yet", kind.plural_label().to_lowercase())
}
