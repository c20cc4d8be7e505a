// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Account, DieselLogEntry, Transaction, TxKind};

/// Category labels seeded when no persisted list exists.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Fund Transfer",
    "Utilities",
    "Cooking Oil",
    "EMB Payment",
    "Evap/Construction",
    "Diesel",
    "Budget Allocation",
    "Other Expenses",
    "Construction",
    "Withdrawal",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(u64),
    #[error("record {0} already exists")]
    DuplicateId(u64),
    #[error("category name must not be empty")]
    EmptyCategory,
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("category '{0}' not found")]
    UnknownCategory(String),
}

/// Fields supplied by the caller when recording a transaction. The sign of
/// `amount` is advisory only; the store normalizes it from `kind`.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub kind: TxKind,
    pub account: Account,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct NewDieselLog {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub vehicle: String,
    pub area_code: String,
    pub assigned_staff: String,
}

/// The sole source of truth: two append-only collections plus the mutable
/// category list. All derived views are recomputed from it on demand.
#[derive(Debug, Clone)]
pub struct Store {
    pub transactions: Vec<Transaction>,
    pub diesel_logs: Vec<DieselLogEntry>,
    pub categories: Vec<String>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            transactions: Vec::new(),
            diesel_logs: Vec::new(),
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            next_id: 1,
        }
    }
}

impl Store {
    /// Rebuild a store from persisted collections. `next_id` resumes past
    /// the highest id seen in either collection.
    pub fn from_parts(
        transactions: Vec<Transaction>,
        diesel_logs: Vec<DieselLogEntry>,
        categories: Vec<String>,
    ) -> Self {
        let max_tx = transactions.iter().map(|t| t.id).max().unwrap_or(0);
        let max_log = diesel_logs.iter().map(|d| d.id).max().unwrap_or(0);
        Store {
            transactions,
            diesel_logs,
            categories,
            next_id: max_tx.max(max_log) + 1,
        }
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a transaction. Description is display-normalized to uppercase
    /// and the stored amount carries the sign dictated by `kind`, whatever
    /// sign the caller supplied.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Transaction {
        let magnitude = new.amount.abs();
        let amount = match new.kind {
            TxKind::Fund => magnitude,
            TxKind::Expense => -magnitude,
        };
        let tx = Transaction {
            id: self.fresh_id(),
            date: new.date,
            description: new.description.trim().to_uppercase(),
            amount,
            kind: new.kind,
            account: new.account,
            category: new.category,
        };
        self.transactions.push(tx.clone());
        tx
    }

    /// Re-insert a previously exported record, keeping its id so an
    /// export/import cycle is lossless. The sign invariant is still
    /// enforced from `kind`.
    pub fn import_transaction(&mut self, mut tx: Transaction) -> Result<(), StoreError> {
        if self.transactions.iter().any(|t| t.id == tx.id) {
            return Err(StoreError::DuplicateId(tx.id));
        }
        let magnitude = tx.amount.abs();
        tx.amount = match tx.kind {
            TxKind::Fund => magnitude,
            TxKind::Expense => -magnitude,
        };
        self.next_id = self.next_id.max(tx.id + 1);
        self.transactions.push(tx);
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: u64) -> Result<(), StoreError> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    pub fn add_diesel_log(&mut self, new: NewDieselLog) -> DieselLogEntry {
        let entry = DieselLogEntry {
            id: self.fresh_id(),
            date: new.date,
            amount: new.amount.abs(),
            vehicle: new.vehicle.trim().to_uppercase(),
            area_code: new.area_code.trim().to_uppercase(),
            assigned_staff: new.assigned_staff.trim().to_uppercase(),
        };
        self.diesel_logs.push(entry.clone());
        entry
    }

    pub fn delete_diesel_log(&mut self, id: u64) -> Result<(), StoreError> {
        let before = self.diesel_logs.len();
        self.diesel_logs.retain(|d| d.id != id);
        if self.diesel_logs.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Exact, case-sensitive duplicate check; empty and whitespace-only
    /// names are rejected.
    pub fn add_category(&mut self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyCategory);
        }
        if self.categories.iter().any(|c| c == name) {
            return Err(StoreError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(name.to_string());
        Ok(())
    }

    /// Rename cascades: every transaction tagged `old` is rewritten to
    /// `new`. Categories are copied strings, not references, so this is a
    /// bulk update over the log.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<usize, StoreError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(StoreError::EmptyCategory);
        }
        if new != old && self.categories.iter().any(|c| c == new) {
            return Err(StoreError::DuplicateCategory(new.to_string()));
        }
        let slot = self
            .categories
            .iter_mut()
            .find(|c| c.as_str() == old)
            .ok_or_else(|| StoreError::UnknownCategory(old.to_string()))?;
        *slot = new.to_string();
        let mut rewritten = 0;
        for t in self.transactions.iter_mut().filter(|t| t.category == old) {
            t.category = new.to_string();
            rewritten += 1;
        }
        Ok(rewritten)
    }

    /// Removes the label from the list only. Historical transactions keep
    /// their copied category string untouched.
    pub fn delete_category(&mut self, name: &str) -> Result<(), StoreError> {
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        if self.categories.len() == before {
            return Err(StoreError::UnknownCategory(name.to_string()));
        }
        Ok(())
    }
}
