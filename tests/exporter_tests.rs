// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fundtrack::commands::{exporter, importer};
use fundtrack::models::{Account, TxKind};
use fundtrack::store::{NewDieselLog, NewTransaction, Store};
use fundtrack::{cli, db};
use tempfile::tempdir;

fn seeded_store() -> Store {
    let mut store = Store::default();
    store.add_transaction(NewTransaction {
        date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        description: "ADDITIONAL ERC FUND RECEIVED".to_string(),
        amount: "227000".parse().unwrap(),
        kind: TxKind::Fund,
        account: Account::Bdo,
        category: "Fund Transfer".to_string(),
    });
    store.add_transaction(NewTransaction {
        date: NaiveDate::from_ymd_opt(2025, 12, 8).unwrap(),
        description: "UCO PREPAYMENT".to_string(),
        amount: "15010".parse().unwrap(),
        kind: TxKind::Expense,
        account: Account::Bdo,
        category: "Utilities".to_string(),
    });
    store.add_diesel_log(NewDieselLog {
        date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        amount: "15000".parse().unwrap(),
        vehicle: "Truck 1".to_string(),
        area_code: "LIPA".to_string(),
        assigned_staff: "Juan Dela Cruz".to_string(),
    });
    store
}

fn run_export(store: &Store, args: &[&str]) {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(store, sub).unwrap();
}

#[test]
fn csv_round_trip_preserves_every_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.csv");
    let store = seeded_store();
    run_export(
        &store,
        &[
            "fundtrack",
            "export",
            "transactions",
            "--format",
            "csv",
            "--out",
            path.to_str().unwrap(),
        ],
    );

    let mut restored = Store::from_parts(Vec::new(), Vec::new(), Vec::new());
    let matches = cli::build_cli().get_matches_from([
        "fundtrack",
        "import",
        "transactions",
        "--path",
        path.to_str().unwrap(),
    ]);
    let Some(("import", sub)) = matches.subcommand() else {
        panic!("no import subcommand");
    };
    importer::handle(&mut restored, sub).unwrap();

    assert_eq!(restored.transactions, store.transactions);
}

#[test]
fn json_export_writes_the_serialized_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");
    let store = seeded_store();
    run_export(
        &store,
        &[
            "fundtrack",
            "export",
            "transactions",
            "--format",
            "json",
            "--out",
            path.to_str().unwrap(),
        ],
    );

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<fundtrack::models::Transaction> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, store.transactions);
    // Persisted field names follow the storage contract.
    assert!(raw.contains("\"mode\""));
    assert!(raw.contains("\"type\""));
}

#[test]
fn diesel_export_carries_all_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("diesel.csv");
    let store = seeded_store();
    run_export(
        &store,
        &[
            "fundtrack",
            "export",
            "diesel",
            "--format",
            "csv",
            "--out",
            path.to_str().unwrap(),
        ],
    );

    let raw = std::fs::read_to_string(&path).unwrap();
    let mut lines = raw.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,amount,vehicle,areaCode,assignedStaff"
    );
    assert!(lines.next().unwrap().contains("TRUCK 1"));
}

#[test]
fn blob_round_trip_restores_the_store() {
    let dir = tempdir().unwrap();
    let store = seeded_store();
    db::save_to_dir(dir.path(), &store).unwrap();
    let restored = db::load_from_dir(dir.path());
    assert_eq!(restored.transactions, store.transactions);
    assert_eq!(restored.diesel_logs, store.diesel_logs);
    assert_eq!(restored.categories, store.categories);
}

#[test]
fn corrupt_blobs_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("transactions.json"), "{not json").unwrap();
    std::fs::write(dir.path().join("categories.json"), "[1, 2, 3]").unwrap();
    let store = db::load_from_dir(dir.path());
    assert!(store.transactions.is_empty());
    assert!(store.diesel_logs.is_empty());
    assert!(store.categories.iter().any(|c| c == "Diesel"));
}
