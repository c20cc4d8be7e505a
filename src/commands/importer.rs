// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::{Account, Transaction, TxKind};
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

/// Reads the column layout written by `export transactions --format csv`:
/// id, date, description, amount, type, mode, category.
fn import_transactions(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").map(String::as_str).unwrap_or("").trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = 0usize;
    for result in rdr.records() {
        let rec = result?;
        let id_raw = rec.get(0).context("id missing")?.trim();
        let date_raw = rec.get(1).context("date missing")?.trim();
        let description = rec.get(2).context("description missing")?.trim().to_string();
        let amount_raw = rec.get(3).context("amount missing")?.trim();
        let kind_raw = rec.get(4).context("type missing")?.trim();
        let account_raw = rec.get(5).context("mode missing")?.trim();
        let category = rec.get(6).unwrap_or("").trim().to_string();

        let id: u64 = id_raw
            .parse()
            .with_context(|| format!("Invalid id '{}'", id_raw))?;
        let date = parse_date(date_raw)
            .with_context(|| format!("Invalid transaction date '{}'", date_raw))?;
        let amount = parse_decimal(amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, description))?;
        let kind = TxKind::from_str(kind_raw).map_err(anyhow::Error::msg)?;
        let account = Account::from_str(account_raw).map_err(anyhow::Error::msg)?;

        store.import_transaction(Transaction {
            id,
            date,
            description,
            amount,
            kind,
            account,
            category,
        })?;
        imported += 1;
    }
    println!("Imported {} transactions from {}", imported, path);
    Ok(())
}
