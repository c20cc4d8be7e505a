// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fundtrack::advisor::GeminiAdvisor;
use fundtrack::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = db::load_or_init()?;
    let advisor = GeminiAdvisor::from_env();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data directory at {}", db::data_dir()?.display());
        }
        Some(("tx", sub)) => {
            commands::transactions::handle(&mut store, sub, &advisor)?;
            db::save(&store)?;
        }
        Some(("diesel", sub)) => {
            commands::diesel::handle(&mut store, sub)?;
            db::save(&store)?;
        }
        Some(("category", sub)) => {
            commands::categories::handle(&mut store, sub)?;
            db::save(&store)?;
        }
        Some(("import", sub)) => {
            commands::importer::handle(&mut store, sub)?;
            db::save(&store)?;
        }
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("insights", sub)) => commands::advisor::handle(&store, sub, &advisor)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
