// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use crate::advisor::Advisor;
use crate::models::{Account, Transaction, TxKind};
use crate::store::{NewTransaction, Store};
use crate::utils::{confirm, fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches, advisor: &dyn Advisor) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("parse", sub)) => parse(store, sub, advisor)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let description = sub.get_one::<String>("description").cloned().unwrap_or_default();
    let amount = parse_decimal(sub.get_one::<String>("amount").map(String::as_str).unwrap_or("0"))?;
    let kind = TxKind::from_str(sub.get_one::<String>("kind").map(String::as_str).unwrap_or(""))
        .map_err(anyhow::Error::msg)?;
    let account =
        Account::from_str(sub.get_one::<String>("account").map(String::as_str).unwrap_or(""))
            .map_err(anyhow::Error::msg)?;
    let category = sub.get_one::<String>("category").cloned().unwrap_or_default();

    let tx = store.add_transaction(NewTransaction {
        date,
        description,
        amount,
        kind,
        account,
        category,
    });
    println!(
        "Recorded #{} {} on {} at '{}' ({})",
        tx.id,
        fmt_money(&tx.amount),
        tx.date,
        tx.description,
        tx.account
    );
    Ok(())
}

fn parse(store: &mut Store, sub: &clap::ArgMatches, advisor: &dyn Advisor) -> Result<()> {
    let text = sub.get_one::<String>("text").map(String::as_str).unwrap_or("");
    let Some(draft) = advisor.parse_transaction(text) else {
        println!("Could not extract a transaction from the given text.");
        return Ok(());
    };
    let date = draft.date.unwrap_or_else(|| chrono::Utc::now().date_naive());
    println!(
        "Parsed: {} | {} | {} | {} | {} | {}",
        date,
        draft.description,
        fmt_money(&draft.amount),
        draft.kind,
        draft.account,
        draft.category
    );
    if sub.get_flag("save") {
        let tx = store.add_transaction(NewTransaction {
            date,
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            account: draft.account,
            category: draft.category,
        });
        println!("Recorded as #{}", tx.id);
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap_or(&0);
    if !confirm(&format!("Delete transaction #{}?", id), sub.get_flag("yes"))? {
        println!("Aborted; nothing deleted.");
        return Ok(());
    }
    store.delete_transaction(id)?;
    println!("Deleted transaction #{}", id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.kind.clone(),
                    r.account.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Kind", "Account", "Category"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: u64,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub account: String,
    pub category: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub.get_one::<String>("month");
    let account = match sub.get_one::<String>("account") {
        Some(s) => Some(Account::from_str(s).map_err(anyhow::Error::msg)?),
        None => None,
    };
    let category = sub.get_one::<String>("category");

    let mut matched: Vec<&Transaction> = store
        .transactions
        .iter()
        .filter(|t| {
            month
                .map(|m| t.date.format("%Y-%m").to_string() == m.as_str())
                .unwrap_or(true)
                && account.map(|a| t.account == a).unwrap_or(true)
                && category.map(|c| t.category == c.as_str())
                .unwrap_or(true)
        })
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }

    Ok(matched
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            description: t.description.clone(),
            amount: t.amount.to_string(),
            kind: t.kind.to_string(),
            account: t.account.to_string(),
            category: t.category.clone(),
        })
        .collect())
}
