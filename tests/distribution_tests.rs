// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fundtrack::ledger::category_distribution;
use fundtrack::models::{Account, Transaction, TxKind};
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: u64, date: &str, amount: &str, kind: TxKind, category: &str) -> Transaction {
    Transaction {
        id,
        date: d(date),
        description: format!("TX {}", id),
        amount: dec(amount),
        kind,
        account: Account::Cash,
        category: category.to_string(),
    }
}

#[test]
fn expenses_bucket_by_category_with_absolute_totals() {
    let txns = vec![
        tx(1, "2025-12-01", "-100", TxKind::Expense, "Utilities"),
        tx(2, "2025-12-05", "-250", TxKind::Expense, "Utilities"),
        tx(3, "2025-12-06", "-40", TxKind::Expense, "Food"),
        tx(4, "2025-12-07", "5000", TxKind::Fund, "Fund Transfer"),
    ];
    let totals = category_distribution(&txns, None);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].category, "Utilities");
    assert_eq!(totals[0].total, dec("350"));
    assert_eq!(totals[1].category, "Food");
    assert_eq!(totals[1].total, dec("40"));
}

#[test]
fn month_filter_matches_the_month_component() {
    let txns = vec![
        tx(1, "2025-11-15", "-100", TxKind::Expense, "Utilities"),
        tx(2, "2025-12-15", "-200", TxKind::Expense, "Utilities"),
        tx(3, "2024-12-15", "-300", TxKind::Expense, "Food"),
    ];
    let december = category_distribution(&txns, Some(12));
    // Month component only; the year is not part of the filter.
    assert_eq!(december.len(), 2);
    assert_eq!(december[0].total, dec("200"));
    assert_eq!(december[1].total, dec("300"));

    let november = category_distribution(&txns, Some(11));
    assert_eq!(november.len(), 1);
    assert_eq!(november[0].total, dec("100"));
}

#[test]
fn output_keeps_first_occurrence_order() {
    let txns = vec![
        tx(1, "2025-12-01", "-5", TxKind::Expense, "Zeta"),
        tx(2, "2025-12-02", "-900", TxKind::Expense, "Alpha"),
        tx(3, "2025-12-03", "-5", TxKind::Expense, "Zeta"),
    ];
    let totals = category_distribution(&txns, None);
    let order: Vec<&str> = totals.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(order, ["Zeta", "Alpha"]);
}

#[test]
fn no_expenses_means_no_buckets() {
    let txns = vec![tx(1, "2025-12-01", "1000", TxKind::Fund, "Fund Transfer")];
    assert!(category_distribution(&txns, None).is_empty());
    assert!(category_distribution(&[], Some(12)).is_empty());
}
