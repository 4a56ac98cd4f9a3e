//! Aggregation module.
//!
//! Pure functions that read amounts out of raw item text, total item lists,
//! derive net worth and format amounts for display.

mod aggregator_model;
mod currency;
mod totals;
mod value_parser;

pub use aggregator_model::Summary;
pub use currency::{format_currency, format_value, round_to_dollars};
pub use totals::{net_worth, sum, valid_items};
pub use value_parser::parse_value;
