//! Renders a report into a document body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::report_model::{empty_section_message, total_label, Report};
use crate::constants::{NET_WORTH_LABEL, REPORT_PAGE_WIDTH};
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::ItemKind;

/// Document formats a report can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for ReportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ValidationError::UnknownReportFormat(s.to_string())),
        }
    }
}

/// Renders `report` as a complete document in `format`.
pub fn render_report(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Markdown => Ok(render_markdown(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Csv => render_csv(report),
    }
}

fn render_text(report: &Report) -> String {
    let width = REPORT_PAGE_WIDTH;
    let rule = "-".repeat(width);
    let mut lines = vec![
        centered(&report.title, width),
        centered(&report.generated_on.format("%B %-d, %Y").to_string(), width),
        String::new(),
        centered(NET_WORTH_LABEL, width),
        centered(&report.net_worth_display, width),
    ];

    for kind in ItemKind::ALL {
        let (rows, total) = report.section(kind);
        lines.push(String::new());
        lines.push(kind.plural_label().to_string());
        lines.push(rule.clone());
        if rows.is_empty() {
            lines.push(empty_section_message(kind));
        } else {
            lines.extend(rows.iter().map(|row| spread(&row.name, &row.value, width)));
        }
        lines.push(rule.clone());
        lines.push(spread(&total_label(kind), total, width));
    }

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

fn centered(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
        .trim_end()
        .to_string()
}

/// `label` flush left and `value` flush right, at least one space apart.
fn spread(label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + value.chars().count();
    let padding = width.saturating_sub(used).max(1);
    format!("{}{}{}", label, " ".repeat(padding), value)
}

fn render_markdown(report: &Report) -> String {
    let mut lines = vec![
        format!("# {}", report.title),
        String::new(),
        format!("_Generated {}_", report.generated_on.format("%Y-%m-%d")),
        String::new(),
        format!("**{}:** {}", NET_WORTH_LABEL, report.net_worth_display),
    ];

    for kind in ItemKind::ALL {
        let (rows, total) = report.section(kind);
        lines.push(String::new());
        lines.push(format!("## {}", kind.plural_label()));
        lines.push(String::new());
        if rows.is_empty() {
            lines.push(format!("_{}_", empty_section_message(kind)));
            continue;
        }
        lines.push("| Name | Category | Value |".to_string());
        lines.push("| --- | --- | ---: |".to_string());
        for row in rows {
            lines.push(format!(
                "| {} | {} | {} |",
                escape_cell(&row.name),
                escape_cell(&row.category),
                row.value
            ));
        }
        lines.push(format!("| **{}** | | **{}** |", total_label(kind), total));
    }

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn render_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["section", "name", "category", "value"])?;

    for kind in ItemKind::ALL {
        let (rows, total) = report.section(kind);
        let section = kind.plural_label().to_lowercase();
        for row in rows {
            writer.write_record([
                section.as_str(),
                row.name.as_str(),
                row.category.as_str(),
                row.value.as_str(),
            ])?;
        }
        writer.write_record([section.as_str(), total_label(kind).as_str(), "", total])?;
    }
    writer.write_record(["net_worth", NET_WORTH_LABEL, "", report.net_worth_display.as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(format!("Failed to flush CSV report: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportLine;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn line(name: &str, category: &str, value: &str) -> ReportLine {
        ReportLine {
            name: name.to_string(),
            category: category.to_string(),
            value: value.to_string(),
        }
    }

    fn sample_report() -> Report {
        Report {
            title: "Net Worth Report".to_string(),
            generated_on: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            net_worth: dec!(749.50),
            net_worth_display: "$750".to_string(),
            is_negative: false,
            assets: vec![line("Cash", "Cash & Savings", "$1,000")],
            total_assets: "$1,000".to_string(),
            liabilities: vec![line("Credit Card", "Credit Cards", "$251")],
            total_liabilities: "$251".to_string(),
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("TEXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("json".parse::<ReportFormat>().unwrap().extension(), "json");
        assert_eq!(
            "pdf".parse::<ReportFormat>(),
            Err(ValidationError::UnknownReportFormat("pdf".to_string()))
        );
    }

    #[test]
    fn test_text_layout() {
        let text = render_report(&sample_report(), ReportFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "Net Worth Report");
        assert_eq!(lines[1].trim(), "March 5, 2024");
        assert_eq!(lines[3].trim(), "Total Net Worth");
        assert_eq!(lines[4].trim(), "$750");
        assert_eq!(lines[6], "Assets");
        assert!(lines[8].starts_with("Cash "));
        assert!(lines[8].ends_with(" $1,000"));
        assert_eq!(lines[8].len(), REPORT_PAGE_WIDTH);
        assert!(lines[10].starts_with("Total Assets"));
        assert!(text.contains("Liabilities\n"));
        assert!(text.ends_with("$251\n"));
    }

    #[test]
    fn test_text_empty_section() {
        let mut report = sample_report();
        report.liabilities.clear();
        report.total_liabilities = "$0".to_string();

        let text = render_report(&report, ReportFormat::Text).unwrap();

        assert!(text.contains("No liabilities added yet"));
        assert!(!text.contains("Credit Card"));
    }

    #[test]
    fn test_long_names_keep_a_gap() {
        assert_eq!(spread("abcdef", "$1", 4), "abcdef $1");
    }

    #[test]
    fn test_markdown_tables() {
        let mut report = sample_report();
        report.assets[0].name = "Cash | Savings".to_string();

        let markdown = render_report(&report, ReportFormat::Markdown).unwrap();

        assert!(markdown.starts_with("# Net Worth Report\n"));
        assert!(markdown.contains("**Total Net Worth:** $750"));
        assert!(markdown.contains("| Cash \\| Savings | Cash & Savings | $1,000 |"));
        assert!(markdown.contains("| **Total Liabilities** | | **$251** |"));
    }

    #[test]
    fn test_json_round_trips_report() {
        let report = sample_report();
        let json = render_report(&report, ReportFormat::Json).unwrap();

        assert!(json.contains("\"netWorthDisplay\": \"$750\""));
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.assets, report.assets);
        assert_eq!(parsed.generated_on, report.generated_on);
    }

    #[test]
    fn test_csv_rows() {
        let csv = render_report(&sample_report(), ReportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "section,name,category,value",
                "assets,Cash,Cash & Savings,\"$1,000\"",
                "assets,Total Assets,,\"$1,000\"",
                "liabilities,Credit Card,Credit Cards,$251",
                "liabilities,Total Liabilities,,$251",
                "net_worth,Total Net Worth,,$750",
            ]
        );
    }
}
