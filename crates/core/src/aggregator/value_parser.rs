//! Turns raw item text into an amount.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Digits in `Decimal::MAX` (79,228,162,514,264,337,593,543,950,335).
const MAX_WHOLE_DIGITS: usize = 29;

/// Parses the amount held in an item's raw text.
///
/// Every character other than ASCII digits, `.` and `-` is dropped first, so
/// `"$1,250.75"` reads as `1250.75`. The cleaned text is then read as far as
/// it looks like a number: an optional leading minus, digits, and at most one
/// fractional part. Anything unreadable counts as zero. Amounts beyond the
/// `Decimal` range saturate to `Decimal::MAX` or `Decimal::MIN`.
pub fn parse_value(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let Some(literal) = numeric_prefix(&cleaned) else {
        return Decimal::ZERO;
    };
    match Decimal::from_str(&literal) {
        Ok(amount) => amount,
        Err(_) if exceeds_range(&literal) && literal.starts_with('-') => Decimal::MIN,
        Err(_) if exceeds_range(&literal) => Decimal::MAX,
        Err(_) => Decimal::ZERO,
    }
}

/// True when the whole-number part of `literal` is at least as long as
/// `Decimal::MAX`, so a failed parse means the amount overflowed.
fn exceeds_range(literal: &str) -> bool {
    let whole = literal
        .trim_start_matches('-')
        .split('.')
        .next()
        .unwrap_or_default()
        .trim_start_matches('0');
    whole.len() >= MAX_WHOLE_DIGITS
}

/// Longest leading `-?\d*(\.\d*)?` run, rewritten into a literal `Decimal`
/// accepts. `None` when the run holds no digits.
fn numeric_prefix(cleaned: &str) -> Option<String> {
    let bytes = cleaned.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let int_start = usize::from(negative);

    let int_end = digits_end(bytes, int_start);
    let int_part = &cleaned[int_start..int_end];

    let frac_part = if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_end(bytes, int_end + 1);
        &cleaned[int_end + 1..frac_end]
    } else {
        ""
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }
    Some(literal)
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| start + offset)
}
