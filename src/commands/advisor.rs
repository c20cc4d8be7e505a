// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::advisor::{Advisor, Severity};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches, advisor: &dyn Advisor) -> Result<()> {
    let insights = advisor.insights(&store.transactions);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &insights)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = insights
        .iter()
        .map(|i| {
            let severity = match i.severity {
                Severity::Tip => "TIP",
                Severity::Warning => "WARNING",
                Severity::Positive => "POSITIVE",
            };
            vec![severity.to_string(), i.title.clone(), i.message.clone()]
        })
        .collect();
    println!("{}", pretty_table(&["Severity", "Title", "Message"], rows));
    Ok(())
}
