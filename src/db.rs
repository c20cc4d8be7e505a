// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{DieselLogEntry, Transaction};
use crate::store::{Store, DEFAULT_CATEGORIES};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.fundtrack", "Fundtrack", "fundtrack"));

const TRANSACTIONS_BLOB: &str = "transactions.json";
const DIESEL_BLOB: &str = "diesel_logs.json";
const CATEGORIES_BLOB: &str = "categories.json";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// A missing or unparsable blob is never an error: that collection falls
/// back to its built-in default and the next save rewrites it.
fn load_blob<T: serde::de::DeserializeOwned>(path: &Path, default: T) -> T {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or(default),
        Err(_) => default,
    }
}

fn load_from(dir: &Path) -> Store {
    let transactions: Vec<Transaction> = load_blob(&dir.join(TRANSACTIONS_BLOB), Vec::new());
    let diesel_logs: Vec<DieselLogEntry> = load_blob(&dir.join(DIESEL_BLOB), Vec::new());
    let categories: Vec<String> = load_blob(
        &dir.join(CATEGORIES_BLOB),
        DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
    );
    Store::from_parts(transactions, diesel_logs, categories)
}

pub fn load_or_init() -> Result<Store> {
    Ok(load_from(&data_dir()?))
}

fn save_to(dir: &Path, store: &Store) -> Result<()> {
    let write = |name: &str, json: String| -> Result<()> {
        let path = dir.join(name);
        fs::write(&path, json).with_context(|| format!("Write {}", path.display()))
    };
    write(
        TRANSACTIONS_BLOB,
        serde_json::to_string_pretty(&store.transactions)?,
    )?;
    write(DIESEL_BLOB, serde_json::to_string_pretty(&store.diesel_logs)?)?;
    write(
        CATEGORIES_BLOB,
        serde_json::to_string_pretty(&store.categories)?,
    )?;
    Ok(())
}

/// Whole-store flush; each CLI invocation persists at most once, after its
/// mutation has been applied. Last write wins.
pub fn save(store: &Store) -> Result<()> {
    save_to(&data_dir()?, store)
}

/// Test hook: same load/save pair against an explicit directory.
pub fn load_from_dir(dir: &Path) -> Store {
    load_from(dir)
}

pub fn save_to_dir(dir: &Path, store: &Store) -> Result<()> {
    save_to(dir, store)
}
