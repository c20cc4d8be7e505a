// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn yes_flag(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("yes")
            .long("yes")
            .short('y')
            .action(ArgAction::SetTrue)
            .help("Skip the confirmation prompt"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fundtrack")
        .version(crate_version!())
        .about("Single-tenant fund-movement ledger with diesel budget reconciliation")
        .subcommand(Command::new("init").about("Initialize the data directory"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a fund or expense transaction")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default: today)"))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true)
                                .help("Free text; stored uppercased"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Magnitude; sign is derived from --kind"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("fund | expense"),
                        )
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .required(true)
                                .help("BDO | GCash | Cash"),
                        )
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(
                    Command::new("parse")
                        .about("Parse a free-text entry via the advisor")
                        .arg(Arg::new("text").required(true))
                        .arg(
                            Arg::new("save")
                                .long("save")
                                .action(ArgAction::SetTrue)
                                .help("Record the parsed transaction"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("YYYY-MM filter"))
                        .arg(Arg::new("account").long("account").help("BDO | GCash | Cash"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(yes_flag(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(u64))),
                )),
        )
        .subcommand(
            Command::new("diesel")
                .about("Record and inspect diesel fuel logs")
                .subcommand(
                    Command::new("add")
                        .about("Record fuel actually consumed")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default: today)"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("vehicle").long("vehicle").required(true))
                        .arg(Arg::new("area").long("area").required(true))
                        .arg(Arg::new("staff").long("staff").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List diesel logs")))
                .subcommand(yes_flag(
                    Command::new("rm")
                        .about("Delete a diesel log by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(u64))),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Manage the category list")
                .subcommand(
                    Command::new("add")
                        .about("Add a category label")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("list").about("List categories"))
                .subcommand(
                    Command::new("rename")
                        .about("Rename a category; retags every matching transaction")
                        .arg(Arg::new("old").required(true))
                        .arg(Arg::new("new").required(true)),
                )
                .subcommand(yes_flag(
                    Command::new("rm")
                        .about("Remove a label; existing transactions keep theirs")
                        .arg(Arg::new("name").required(true)),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the ledger")
                .subcommand(json_flags(
                    Command::new("summary").about("Account balances and headline totals"),
                ))
                .subcommand(json_flags(
                    Command::new("daily")
                        .about("One account's ledger for a single day")
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .required(true)
                                .help("BDO | GCash | Cash"),
                        )
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default: today)")),
                ))
                .subcommand(json_flags(
                    Command::new("diesel")
                        .about("Diesel budget-vs-actual reconciliation")
                        .arg(Arg::new("date").long("date").help("Daily period, YYYY-MM-DD"))
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .conflicts_with("date")
                                .help("Monthly period, YYYY-MM"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Expense distribution by category")
                        .arg(Arg::new("month").long("month").help("Two-digit month filter")),
                ))
                .subcommand(
                    Command::new("dates")
                        .about("Enumerate the calendar dates of a month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write a collection to a tabular file")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("diesel")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Read a previously exported collection")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("insights").about("Advisory analysis of the transaction log"),
        ))
}
