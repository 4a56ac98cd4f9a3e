//! Report module.
//!
//! Assembles a flat report from the ledger and renders it into documents
//! (plain text, Markdown, JSON, CSV) that an exporter writes out.

mod report_assembler;
mod report_exporter;
mod report_model;
mod report_renderer;

pub use report_assembler::assemble_report;
pub use report_exporter::{FileReportExporter, ReportExporter};
pub use report_model::*;
pub use report_renderer::{render_report, ReportFormat};
