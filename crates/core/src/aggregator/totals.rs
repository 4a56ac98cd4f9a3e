//! Totals over item lists.

use rust_decimal::Decimal;

use super::value_parser::parse_value;
use crate::ledger::Item;

/// Sum of the parsed values of every item, named or not.
///
/// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
pub fn sum(items: &[Item]) -> Decimal {
    items
        .iter()
        .map(|item| parse_value(&item.value))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Total assets minus total liabilities, saturating like [`sum`].
pub fn net_worth(assets: &[Item], liabilities: &[Item]) -> Decimal {
    sum(assets).saturating_sub(sum(liabilities))
}

/// Items with both a name and a value, in list order. Only views and reports
/// filter this way; totals always cover the whole list.
pub fn valid_items(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.is_valid()).collect()
}
