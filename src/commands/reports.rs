// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::Result;

use crate::ledger::{
    category_distribution, daily_ledger, dates_in_month, diesel_ledger, financial_summary, Period,
};
use crate::models::Account;
use crate::store::Store;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_month, parse_month_component, pretty_table,
};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("daily", sub)) => daily(store, sub)?,
        Some(("diesel", sub)) => diesel(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        Some(("dates", sub)) => dates(sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let s = financial_summary(&store.transactions, &store.diesel_logs);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let rows = vec![
            vec!["BDO".into(), fmt_money(&s.bdo)],
            vec!["GCash".into(), fmt_money(&s.gcash)],
            vec!["Cash".into(), fmt_money(&s.cash)],
            vec!["Grand Total".into(), fmt_money(&s.total)],
            vec!["Funds Received".into(), fmt_money(&s.funds_received)],
            vec!["Expenses (non-diesel)".into(), fmt_money(&s.expenses)],
            vec!["Diesel Consumed".into(), fmt_money(&s.diesel_total)],
        ];
        println!("{}", pretty_table(&["Figure", "Amount"], rows));
    }
    Ok(())
}

fn daily(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let account =
        Account::from_str(sub.get_one::<String>("account").map(String::as_str).unwrap_or(""))
            .map_err(anyhow::Error::msg)?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let ledger = daily_ledger(&store.transactions, account, date);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ledger)? {
        return Ok(());
    }

    println!("{} ledger for {}", account, date);
    let mut rows = vec![vec![
        "Beginning Balance".to_string(),
        String::new(),
        fmt_money(&ledger.beginning_balance),
    ]];
    for fund in &ledger.additional_funds {
        rows.push(vec![
            fund.description.clone(),
            fund.category.clone(),
            fmt_money(&fund.amount),
        ]);
    }
    rows.push(vec![
        "Total Funds".to_string(),
        String::new(),
        fmt_money(&ledger.total_funds),
    ]);
    for group in &ledger.expenses_by_category {
        for t in &group.transactions {
            rows.push(vec![
                t.description.clone(),
                group.category.clone(),
                fmt_money(&t.amount),
            ]);
        }
    }
    rows.push(vec![
        "Total Daily Expenses".to_string(),
        String::new(),
        fmt_money(&ledger.total_expenses),
    ]);
    rows.push(vec![
        "Available Balance".to_string(),
        String::new(),
        fmt_money(&ledger.available_balance),
    ]);
    println!("{}", pretty_table(&["Item", "Category", "Amount"], rows));
    Ok(())
}

fn diesel(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let period = if let Some(month) = sub.get_one::<String>("month") {
        let (year, month) = parse_month(month)?;
        Period::Month { year, month }
    } else {
        let date = match sub.get_one::<String>("date") {
            Some(s) => parse_date(s)?,
            None => chrono::Utc::now().date_naive(),
        };
        Period::Day(date)
    };
    let ledger = diesel_ledger(&store.transactions, &store.diesel_logs, period);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ledger)? {
        return Ok(());
    }

    println!("Diesel reconciliation for {}", period.label());
    let rows: Vec<Vec<String>> = ledger
        .logs
        .iter()
        .map(|d| {
            vec![
                d.date.to_string(),
                d.vehicle.clone(),
                d.area_code.clone(),
                d.assigned_staff.clone(),
                fmt_money(&d.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Vehicle", "Area", "Staff", "Amount"], rows)
    );
    println!("Budget Allocated: {}", fmt_money(&ledger.budget_allocated));
    println!("Period Consumed:  {}", fmt_money(&ledger.period_consumed));
    if ledger.over_budget() {
        println!(
            "Returned To Fund: {}  ** OVER BUDGET **",
            fmt_money(&ledger.returned_to_fund)
        );
    } else {
        println!("Returned To Fund: {}", fmt_money(&ledger.returned_to_fund));
    }
    Ok(())
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(s) if s.as_str() != "All" => Some(parse_month_component(s)?),
        _ => None,
    };
    let totals = category_distribution(&store.transactions, month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        return Ok(());
    }
    // Rank order is a table concern; the engine keeps insertion order.
    let mut ranked = totals;
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(&c.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], rows));
    Ok(())
}

fn dates(sub: &clap::ArgMatches) -> Result<()> {
    let (year, month) = parse_month(sub.get_one::<String>("month").map(String::as_str).unwrap_or(""))?;
    for d in dates_in_month(year, month) {
        println!("{}", d);
    }
    Ok(())
}
