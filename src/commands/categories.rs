// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{confirm, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").map(String::as_str).unwrap_or("");
            store.add_category(name)?;
            println!("Added category '{}'", name.trim());
        }
        Some(("list", _)) => {
            let data: Vec<Vec<String>> =
                store.categories.iter().map(|c| vec![c.clone()]).collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("rename", sub)) => {
            let old = sub.get_one::<String>("old").map(String::as_str).unwrap_or("");
            let new = sub.get_one::<String>("new").map(String::as_str).unwrap_or("");
            let retagged = store.rename_category(old, new)?;
            println!(
                "Renamed '{}' to '{}' ({} transaction{} retagged)",
                old,
                new.trim(),
                retagged,
                if retagged == 1 { "" } else { "s" }
            );
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").map(String::as_str).unwrap_or("");
            if !confirm(&format!("Delete category '{}'?", name), sub.get_flag("yes"))? {
                println!("Aborted; nothing deleted.");
                return Ok(());
            }
            store.delete_category(name)?;
            // Historical transactions keep the label; only the list shrinks.
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
