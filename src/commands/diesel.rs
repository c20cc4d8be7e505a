// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::{NewDieselLog, Store};
use crate::utils::{confirm, fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
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
    let amount = parse_decimal(sub.get_one::<String>("amount").map(String::as_str).unwrap_or("0"))?;
    let vehicle = sub.get_one::<String>("vehicle").cloned().unwrap_or_default();
    let area_code = sub.get_one::<String>("area").cloned().unwrap_or_default();
    let assigned_staff = sub.get_one::<String>("staff").cloned().unwrap_or_default();

    let entry = store.add_diesel_log(NewDieselLog {
        date,
        amount,
        vehicle,
        area_code,
        assigned_staff,
    });
    println!(
        "Logged #{} {} on {} ({}, {}, {})",
        entry.id,
        fmt_money(&entry.amount),
        entry.date,
        entry.vehicle,
        entry.area_code,
        entry.assigned_staff
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut logs = store.diesel_logs.clone();
    logs.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if !maybe_print_json(json_flag, jsonl_flag, &logs)? {
        let rows: Vec<Vec<String>> = logs
            .iter()
            .map(|d| {
                vec![
                    d.id.to_string(),
                    d.date.to_string(),
                    d.amount.to_string(),
                    d.vehicle.clone(),
                    d.area_code.clone(),
                    d.assigned_staff.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Amount", "Vehicle", "Area", "Staff"], rows)
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap_or(&0);
    if !confirm(&format!("Delete diesel log #{}?", id), sub.get_flag("yes"))? {
        println!("Aborted; nothing deleted.");
        return Ok(());
    }
    store.delete_diesel_log(id)?;
    println!("Deleted diesel log #{}", id);
    Ok(())
}
