//! Whole-dollar currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use super::value_parser::parse_value;
use crate::constants::{CURRENCY_SYMBOL, THOUSANDS_SEPARATOR};

/// Formats `amount` as a whole-dollar US currency string.
///
/// Halves round away from zero, so `749.50` becomes `"$750"` and `-0.5`
/// becomes `"-$1"`. Anything that rounds to zero prints as `"$0"`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_to_dollars(amount);
    if rounded.is_zero() {
        return format!("{}0", CURRENCY_SYMBOL);
    }

    let digits = group_thousands(&rounded.abs().trunc().to_string());
    if rounded.is_sign_negative() {
        format!("-{}{}", CURRENCY_SYMBOL, digits)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, digits)
    }
}

/// Rounds `amount` to whole dollars, halves away from zero.
pub fn round_to_dollars(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats raw item text. Empty or non-numeric text prints as `"$0"`.
pub fn format_value(raw: &str) -> String {
    format_currency(parse_value(raw))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
