//! Aggregated figures handed to front ends.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{format_currency, round_to_dollars};
use super::totals::{net_worth, sum};
use crate::ledger::Ledger;

/// Headline figures for the current ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    /// Net worth = total_assets - total_liabilities
    pub net_worth: Decimal,
    pub total_assets_display: String,
    pub total_liabilities_display: String,
    pub net_worth_display: String,
    pub is_negative: bool,
}

impl Summary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let total_assets = sum(ledger.assets());
        let total_liabilities = sum(ledger.liabilities());
        let net_worth = net_worth(ledger.assets(), ledger.liabilities());

        Self {
            total_assets,
            total_liabilities,
            net_worth,
            total_assets_display: format_currency(total_assets),
            total_liabilities_display: format_currency(total_liabilities),
            net_worth_display: format_currency(net_worth),
            is_negative: round_to_dollars(net_worth) < Decimal::ZERO,
        }
    }
}
