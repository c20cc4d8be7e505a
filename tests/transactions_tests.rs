// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fundtrack::cli;
use fundtrack::commands::transactions;
use fundtrack::models::{Account, TxKind};
use fundtrack::store::{NewTransaction, Store};

fn setup() -> Store {
    let mut store = Store::default();
    for day in 1..=3 {
        store.add_transaction(NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            description: "P".to_string(),
            amount: "10".parse().unwrap(),
            kind: TxKind::Expense,
            account: Account::GCash,
            category: "Utilities".to_string(),
        });
    }
    store.add_transaction(NewTransaction {
        date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        description: "Q".to_string(),
        amount: "500".parse().unwrap(),
        kind: TxKind::Fund,
        account: Account::Bdo,
        category: "Fund Transfer".to_string(),
    });
    store
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let rows =
        transactions::query_rows(&store, &list_matches(&["fundtrack", "tx", "list", "--limit", "2"]))
            .unwrap();
    assert_eq!(rows.len(), 2);
    // Newest first.
    assert_eq!(rows[0].date, "2025-02-01");
    assert_eq!(rows[1].date, "2025-01-03");
}

#[test]
fn list_filters_by_month_and_account() {
    let store = setup();
    let rows = transactions::query_rows(
        &store,
        &list_matches(&["fundtrack", "tx", "list", "--month", "2025-01"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 3);

    let rows = transactions::query_rows(
        &store,
        &list_matches(&["fundtrack", "tx", "list", "--account", "BDO"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, "500");
}

#[test]
fn list_filters_by_category() {
    let store = setup();
    let rows = transactions::query_rows(
        &store,
        &list_matches(&["fundtrack", "tx", "list", "--category", "Fund Transfer"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, "fund");
}
