//! Net Worth Core - ledger model, aggregation and reports.
//!
//! This crate holds the lists of assets and liabilities a user enters, the
//! arithmetic derived from them (totals, net worth, currency strings) and the
//! report built from both. Front ends bind user edits to the ledger service
//! and display what it computes.

pub mod aggregator;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

// Re-export common types
pub use aggregator::{format_currency, format_value, net_worth, parse_value, sum, Summary};
pub use categories::{CategoryInfo, CategoryRegistry};
pub use ledger::{Item, ItemField, ItemId, ItemKind, Ledger, LedgerService, LedgerServiceTrait};
pub use report::{FileReportExporter, Report, ReportExporter, ReportFormat};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
