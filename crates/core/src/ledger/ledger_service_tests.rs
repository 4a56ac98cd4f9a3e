//! Unit tests for the ledger service.

use super::*;
use crate::categories::{CategoryInfo, CategoryRegistry};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn service() -> LedgerService {
    LedgerService::new(Arc::new(CategoryRegistry::default()))
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Adds an item of `kind` and fills in its name and value.
fn add_filled(service: &LedgerService, kind: ItemKind, name: &str, value: &str) -> ItemId {
    let (_, id) = service.add_item(kind).unwrap();
    service
        .update_field(id, kind, ItemField::Name, name)
        .unwrap();
    service
        .update_field(id, kind, ItemField::Value, value)
        .unwrap();
    id
}

// ============================================================================
// Mutations
// ============================================================================

#[test]
fn test_new_service_starts_empty() {
    let ledger = service().get_ledger().unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn test_starter_rows() {
    let service = LedgerService::with_starter_rows(Arc::new(CategoryRegistry::default()));
    let ledger = service.get_ledger().unwrap();

    assert_eq!(ledger.assets().len(), 1);
    assert_eq!(ledger.liabilities().len(), 1);
    assert!(!ledger.assets()[0].is_valid());
}

#[test]
fn test_add_item_uses_registry_default_category() {
    let registry = CategoryRegistry::new(
        vec![CategoryInfo::new("gold", "Gold", "coins", "yellow")],
        vec![CategoryInfo::new("tab", "Bar Tab", "beer", "brown")],
    )
    .unwrap();
    let service = LedgerService::new(Arc::new(registry));

    let (ledger, _) = service.add_item(ItemKind::Asset).unwrap();
    let (ledger_after, _) = service.add_item(ItemKind::Liability).unwrap();

    assert_eq!(ledger.assets()[0].category, "gold");
    assert_eq!(ledger_after.liabilities()[0].category, "tab");
}

#[test]
fn test_mutations_return_current_state() {
    let service = service();
    add_filled(&service, ItemKind::Asset, "Cash", "1000");

    let returned = service
        .update_category(1, ItemKind::Asset, "investments")
        .unwrap();

    assert_eq!(returned, service.get_ledger().unwrap());
    assert_eq!(returned.assets()[0].category, "investments");
}

#[test]
fn test_remove_item() {
    let service = service();
    add_filled(&service, ItemKind::Asset, "Cash", "1000");
    add_filled(&service, ItemKind::Asset, "Car", "8000");

    let ledger = service.remove_item(1, ItemKind::Asset).unwrap();

    assert_eq!(ledger.assets().len(), 1);
    assert_eq!(ledger.assets()[0].name, "Car");
}

#[test]
fn test_remove_unknown_item_keeps_ledger() {
    let service = service();
    add_filled(&service, ItemKind::Liability, "Loan", "300");
    let before = service.get_ledger().unwrap();

    let after = service.remove_item(7, ItemKind::Liability).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_unknown_category_is_stored_verbatim() {
    let service = service();
    service.add_item(ItemKind::Asset).unwrap();

    let ledger = service
        .update_category(1, ItemKind::Asset, "Cash and Investments")
        .unwrap();

    assert_eq!(ledger.assets()[0].category, "Cash and Investments");
}

#[test]
fn test_no_duplicate_ids_after_delete_then_add() {
    let service = service();
    service.add_item(ItemKind::Asset).unwrap();
    service.add_item(ItemKind::Asset).unwrap();
    service.remove_item(1, ItemKind::Asset).unwrap();

    let (ledger, id) = service.add_item(ItemKind::Asset).unwrap();
    let ids: Vec<ItemId> = ledger.assets().iter().map(|i| i.id).collect();

    assert_eq!(id, 3);
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_add_item_reports_new_id() {
    let service = service();
    let (_, first) = service.add_item(ItemKind::Liability).unwrap();
    let (_, second) = service.add_item(ItemKind::Liability).unwrap();
    service.remove_item(second, ItemKind::Liability).unwrap();

    let (ledger, third) = service.add_item(ItemKind::Liability).unwrap();

    assert_eq!((first, second, third), (1, 2, 3));
    assert!(ledger.find(ItemKind::Liability, third).is_some());
    assert!(ledger.find(ItemKind::Liability, second).is_none());
}

// ============================================================================
// Derived views
// ============================================================================

#[test]
fn test_summary_tracks_edits() {
    let service = service();
    add_filled(&service, ItemKind::Asset, "Cash", "1000");
    add_filled(&service, ItemKind::Liability, "Credit Card", "250.50");

    let summary = service.get_summary().unwrap();
    assert_eq!(summary.net_worth, dec!(749.50));
    assert_eq!(summary.net_worth_display, "$750");

    service
        .update_field(1, ItemKind::Liability, ItemField::Value, "2000")
        .unwrap();
    let summary = service.get_summary().unwrap();
    assert_eq!(summary.net_worth, dec!(-1000));
    assert_eq!(summary.net_worth_display, "-$1,000");
    assert!(summary.is_negative);
}

#[test]
fn test_unnamed_items_count_toward_totals_but_not_views() {
    let service = service();
    add_filled(&service, ItemKind::Asset, "Cash", "1000");
    add_filled(&service, ItemKind::Asset, "", "500");

    let summary = service.get_summary().unwrap();
    let valid = service.get_valid_items(ItemKind::Asset).unwrap();

    assert_eq!(summary.total_assets, dec!(1500));
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].name, "Cash");
}

#[test]
fn test_build_report() {
    let service = service();
    add_filled(&service, ItemKind::Asset, "Cash", "1000");
    add_filled(&service, ItemKind::Liability, "Credit Card", "250.50");
    service
        .update_category(1, ItemKind::Liability, "credit-cards")
        .unwrap();

    let report = service.build_report(report_date()).unwrap();

    assert_eq!(report.net_worth, dec!(749.50));
    assert_eq!(report.net_worth_display, "$750");
    assert_eq!(report.liabilities[0].category, "Credit Cards");
    assert_eq!(report.generated_on, report_date());
}

#[test]
fn test_empty_service_report_is_not_exportable() {
    let report = service().build_report(report_date()).unwrap();
    assert!(!report.is_exportable());
    assert_eq!(report.net_worth, Decimal::ZERO);
}
