//! Plain-text views printed by the session.

use networth_core::errors::ValidationError;
use networth_core::report::{empty_section_message, total_label};
use networth_core::{CategoryRegistry, ItemKind, Ledger, Report, Summary};

const VIEW_WIDTH: usize = 48;

/// Every item of `kind`, as entered.
pub fn render_items(ledger: &Ledger, registry: &CategoryRegistry, kind: ItemKind) -> String {
    let mut lines = vec![kind.plural_label().to_string()];
    let items = ledger.items(kind);
    if items.is_empty() {
        let plural = kind.plural_label().to_lowercase();
        lines.push(format!("  (no {} yet; try 'add {}')", plural, kind));
    }
    for item in items {
        let name = if item.name.is_empty() { "(unnamed)" } else { item.name.as_str() };
        let value = if item.value.is_empty() { "0" } else { item.value.as_str() };
        lines.push(format!(
            "  #{:<3} {:<16} {:<24} ${}",
            item.id,
            registry.lookup(kind, &item.category).label,
            name,
            value
        ));
    }
    lines.join("\n")
}

/// Both lists followed by the headline figures.
pub fn render_ledger(ledger: &Ledger, registry: &CategoryRegistry, summary: &Summary) -> String {
    [
        render_items(ledger, registry, ItemKind::Asset),
        render_items(ledger, registry, ItemKind::Liability),
        render_summary(summary),
    ]
    .join("\n\n")
}

pub fn render_summary(summary: &Summary) -> String {
    [
        row("Net Worth", &summary.net_worth_display),
        row("Total Assets", &summary.total_assets_display),
        row("Total Liabilities", &summary.total_liabilities_display),
    ]
    .join("\n")
}

/// Named items with formatted values and section totals.
pub fn render_overview(report: &Report) -> String {
    let mut lines = Vec::new();
    for kind in ItemKind::ALL {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{} Overview", kind.plural_label()));
        let (rows, total) = report.section(kind);
        if rows.is_empty() {
            lines.push(format!("  {}", empty_section_message(kind)));
            continue;
        }
        lines.extend(rows.iter().map(|line| row(&line.name, &line.value)));
        lines.push(row(&total_label(kind), total));
    }
    if !report.is_exportable() {
        lines.push(String::new());
        lines.push(ValidationError::EmptyReport.to_string());
    }
    lines.join("\n")
}

pub fn render_categories(registry: &CategoryRegistry, kind: ItemKind) -> String {
    let mut lines = vec![format!("{} categories", kind.plural_label())];
    lines.extend(
        registry
            .categories(kind)
            .iter()
            .map(|info| format!("  {:<16} {}", info.key, info.label)),
    );
    lines.join("\n")
}

fn row(label: &str, value: &str) -> String {
    let padding = VIEW_WIDTH
        .saturating_sub(label.chars().count() + value.chars().count() + 2)
        .max(1);
    format!("  {}{}{}", label, " ".repeat(padding), value)
}
