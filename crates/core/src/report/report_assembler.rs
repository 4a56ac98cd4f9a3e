//! Builds a report from the current ledger.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::report_model::{Report, ReportLine};
use crate::aggregator::{
    format_currency, format_value, net_worth, round_to_dollars, sum, valid_items,
};
use crate::categories::CategoryRegistry;
use crate::constants::REPORT_TITLE;
use crate::ledger::{ItemKind, Ledger};

/// Assembles the report for `ledger`.
///
/// Rows list only items with a name and a value; totals and net worth cover
/// every item.
pub fn assemble_report(
    ledger: &Ledger,
    registry: &CategoryRegistry,
    generated_on: NaiveDate,
) -> Report {
    let total_assets = sum(ledger.assets());
    let total_liabilities = sum(ledger.liabilities());
    let net_worth = net_worth(ledger.assets(), ledger.liabilities());

    Report {
        title: REPORT_TITLE.to_string(),
        generated_on,
        net_worth,
        net_worth_display: format_currency(net_worth),
        is_negative: round_to_dollars(net_worth) < Decimal::ZERO,
        assets: report_lines(ledger, registry, ItemKind::Asset),
        total_assets: format_currency(total_assets),
        liabilities: report_lines(ledger, registry, ItemKind::Liability),
        total_liabilities: format_currency(total_liabilities),
    }
}

fn report_lines(ledger: &Ledger, registry: &CategoryRegistry, kind: ItemKind) -> Vec<ReportLine> {
    valid_items(ledger.items(kind))
        .into_iter()
        .map(|item| ReportLine {
            name: item.name.clone(),
            category: registry.lookup(kind, &item.category).label.clone(),
            value: format_value(&item.value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{add_item, update_category, update_field, ItemField};
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    fn with_item(ledger: &Ledger, kind: ItemKind, name: &str, value: &str) -> Ledger {
        let (ledger, id) = add_item(ledger, kind, "other");
        let ledger = update_field(&ledger, id, kind, ItemField::Name, name);
        update_field(&ledger, id, kind, ItemField::Value, value)
    }

    #[test]
    fn test_report_layout() {
        let ledger = with_item(&Ledger::default(), ItemKind::Asset, "Cash", "1000");
        let ledger = update_category(&ledger, 1, ItemKind::Asset, "cash");
        let ledger = with_item(&ledger, ItemKind::Asset, "House", "$350,000");
        let ledger = update_category(&ledger, 2, ItemKind::Asset, "real-estate");
        let ledger = with_item(&ledger, ItemKind::Liability, "Credit Card", "250.50");

        let report = assemble_report(&ledger, &CategoryRegistry::default(), date());

        assert_eq!(report.title, "Net Worth Report");
        assert_eq!(report.net_worth, dec!(350749.50));
        assert_eq!(report.net_worth_display, "$350,750");
        assert_eq!(
            report.assets,
            vec![
                ReportLine {
                    name: "Cash".to_string(),
                    category: "Cash & Savings".to_string(),
                    value: "$1,000".to_string(),
                },
                ReportLine {
                    name: "House".to_string(),
                    category: "Real Estate".to_string(),
                    value: "$350,000".to_string(),
                },
            ]
        );
        assert_eq!(report.total_assets, "$351,000");
        assert_eq!(report.liabilities.len(), 1);
        assert_eq!(report.liabilities[0].category, "Other Debts");
        assert_eq!(report.total_liabilities, "$251");
        assert!(report.is_exportable());
    }

    #[test]
    fn test_rows_skip_incomplete_items_but_totals_include_them() {
        let ledger = with_item(&Ledger::default(), ItemKind::Asset, "Cash", "100");
        let ledger = with_item(&ledger, ItemKind::Asset, "", "900");
        let ledger = with_item(&ledger, ItemKind::Asset, "Boat", "");

        let report = assemble_report(&ledger, &CategoryRegistry::default(), date());

        assert_eq!(report.assets.len(), 1);
        assert_eq!(report.total_assets, "$1,000");
    }

    #[test]
    fn test_negative_net_worth_flag() {
        let ledger = with_item(&Ledger::default(), ItemKind::Liability, "Loan", "10");
        let report = assemble_report(&ledger, &CategoryRegistry::default(), date());

        assert!(report.is_negative);
        assert_eq!(report.net_worth_display, "-$10");
        assert!(report.assets.is_empty());
    }

    #[test]
    fn test_sub_dollar_debt_is_not_negative() {
        let ledger = with_item(&Ledger::default(), ItemKind::Liability, "Fee", "0.40");
        let report = assemble_report(&ledger, &CategoryRegistry::default(), date());

        assert_eq!(report.net_worth_display, "$0");
        assert!(!report.is_negative);
    }

    #[test]
    fn test_huge_values_saturate() {
        let huge = Decimal::MAX.to_string();
        let ledger = with_item(&Ledger::default(), ItemKind::Asset, "House", &huge);
        let ledger = with_item(&ledger, ItemKind::Asset, "Land", &huge);
        let ledger = with_item(&ledger, ItemKind::Liability, "Loan", &format!("-{}", huge));

        let report = assemble_report(&ledger, &CategoryRegistry::default(), date());

        assert_eq!(report.net_worth, Decimal::MAX);
        assert!(!report.is_negative);
        assert_eq!(report.total_assets, format_currency(Decimal::MAX));
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let ledger = with_item(&Ledger::default(), ItemKind::Asset, "Cash", "5");
        let registry = CategoryRegistry::default();
        assert_eq!(
            assemble_report(&ledger, &registry, date()),
            assemble_report(&ledger, &registry, date())
        );
    }

    #[test]
    fn test_blank_ledger_is_not_exportable() {
        let ledger = Ledger::starter(&CategoryRegistry::default());
        let report = assemble_report(&ledger, &CategoryRegistry::default(), date());
        assert!(!report.is_exportable());
        assert_eq!(report.total_assets, "$0");
    }
}
