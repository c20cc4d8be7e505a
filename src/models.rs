// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three disjoint cash-holding buckets. Every transaction affects
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Account {
    #[serde(rename = "BDO")]
    Bdo,
    GCash,
    Cash,
}

impl Account {
    pub const ALL: [Account; 3] = [Account::Bdo, Account::GCash, Account::Cash];

    pub fn as_str(&self) -> &'static str {
        match self {
            Account::Bdo => "BDO",
            Account::GCash => "GCash",
            Account::Cash => "Cash",
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Account {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bdo" => Ok(Account::Bdo),
            "gcash" => Ok(Account::GCash),
            "cash" => Ok(Account::Cash),
            _ => Err(format!("Unknown account '{}' (use BDO|GCash|Cash)", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Fund,
    Expense,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Fund => f.write_str("fund"),
            TxKind::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fund" | "income" => Ok(TxKind::Fund),
            "expense" => Ok(TxKind::Expense),
            _ => Err(format!("Unknown kind '{}' (use fund|expense)", s)),
        }
    }
}

/// A single fund or expense movement. Sign invariant: `amount > 0` iff
/// `kind == Fund`, `amount < 0` iff `kind == Expense`; the store enforces
/// this at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(rename = "mode")]
    pub account: Account,
    pub category: String,
}

/// Actual fuel cost incurred; `amount` is always non-negative. Linked to
/// the transaction log only by date range and the diesel-allocation
/// convention on transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieselLogEntry {
    pub id: u64,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub vehicle: String,
    #[serde(rename = "areaCode")]
    pub area_code: String,
    #[serde(rename = "assignedStaff")]
    pub assigned_staff: String,
}
