// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure projections over the record collections. Nothing here mutates the
//! store or touches I/O; every function recomputes from the full record
//! set each call.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Account, DieselLogEntry, Transaction, TxKind};

/// Marker phrase recognized on legacy diesel budget allocations whose
/// category was never set to "Diesel". Matched case-insensitively against
/// the description.
pub const DIESEL_BUDGET_MARKER: &str = "ALLOCATED TODAY'S BUDGET FOR DIESEL";

pub const DIESEL_CATEGORY: &str = "Diesel";

/// A transaction earmarks funds for fuel when it is tagged with the diesel
/// category OR carries the legacy marker phrase. Both predicates are ORed;
/// dropping either check regresses old data.
pub fn is_diesel_budget(t: &Transaction) -> bool {
    t.category == DIESEL_CATEGORY || t.description.to_uppercase().contains(DIESEL_BUDGET_MARKER)
}

/// The reconciliation window: a single calendar day or a whole month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Period::Day(d) => date == d,
            Period::Month { year, month } => date.year() == year && date.month() == month,
        }
    }

    pub fn label(&self) -> String {
        match *self {
            Period::Day(d) => d.format("%Y-%m-%d").to_string(),
            Period::Month { year, month } => format!("{:04}-{:02}", year, month),
        }
    }
}

/// Every calendar date of the given month, in order. Used to populate
/// date pickers and period enumeration.
pub fn dates_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = 1;
    while let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
        dates.push(d);
        day += 1;
    }
    dates
}

/// All-time running balance for one account: the plain sum of signed
/// amounts, no date filter.
pub fn account_balance(transactions: &[Transaction], account: Account) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.account == account)
        .map(|t| t.amount)
        .sum()
}

/// Per-account balances plus the headline totals shown on the dashboard.
/// `expenses` excludes diesel budget allocations so fuel spending is not
/// double-counted against the general expense total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub bdo: Decimal,
    pub gcash: Decimal,
    pub cash: Decimal,
    pub total: Decimal,
    pub funds_received: Decimal,
    pub expenses: Decimal,
    pub diesel_total: Decimal,
}

pub fn financial_summary(
    transactions: &[Transaction],
    diesel_logs: &[DieselLogEntry],
) -> FinancialSummary {
    let bdo = account_balance(transactions, Account::Bdo);
    let gcash = account_balance(transactions, Account::GCash);
    let cash = account_balance(transactions, Account::Cash);
    let funds_received = transactions
        .iter()
        .filter(|t| t.kind == TxKind::Fund)
        .map(|t| t.amount)
        .sum();
    let expenses = transactions
        .iter()
        .filter(|t| t.kind == TxKind::Expense && !is_diesel_budget(t))
        .map(|t| t.amount.abs())
        .sum();
    let diesel_total = diesel_logs.iter().map(|d| d.amount).sum();
    FinancialSummary {
        bdo,
        gcash,
        cash,
        total: bdo + gcash + cash,
        funds_received,
        expenses,
        diesel_total,
    }
}

/// Same-day transactions grouped under one category label, in
/// first-occurrence order. Categories with no matching transactions never
/// appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub transactions: Vec<Transaction>,
}

fn group_by_category(transactions: Vec<Transaction>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for t in transactions {
        match groups.iter_mut().find(|g| g.category == t.category) {
            Some(g) => g.transactions.push(t),
            None => groups.push(CategoryGroup {
                category: t.category.clone(),
                transactions: vec![t],
            }),
        }
    }
    groups
}

/// One account's statement for a single day: balance carried in, funds
/// received that day, expenses grouped by category, and the closing
/// figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyLedger {
    pub account: Account,
    pub date: NaiveDate,
    pub beginning_balance: Decimal,
    pub additional_funds: Vec<Transaction>,
    pub total_funds: Decimal,
    pub expenses_by_category: Vec<CategoryGroup>,
    pub total_expenses: Decimal,
    pub available_balance: Decimal,
}

pub fn daily_ledger(transactions: &[Transaction], account: Account, date: NaiveDate) -> DailyLedger {
    let for_account: Vec<&Transaction> =
        transactions.iter().filter(|t| t.account == account).collect();
    // Strictly before the selected day; an account with no prior history
    // carries a zero beginning balance.
    let beginning_balance: Decimal = for_account
        .iter()
        .filter(|t| t.date < date)
        .map(|t| t.amount)
        .sum();
    let additional_funds: Vec<Transaction> = for_account
        .iter()
        .filter(|t| t.date == date && t.kind == TxKind::Fund)
        .map(|t| (*t).clone())
        .collect();
    let total_funds =
        beginning_balance + additional_funds.iter().map(|t| t.amount).sum::<Decimal>();
    let day_expenses: Vec<Transaction> = for_account
        .iter()
        .filter(|t| t.date == date && t.kind == TxKind::Expense)
        .map(|t| (*t).clone())
        .collect();
    let total_expenses: Decimal = day_expenses.iter().map(|t| t.amount.abs()).sum();
    let available_balance = total_funds - total_expenses;
    DailyLedger {
        account,
        date,
        beginning_balance,
        additional_funds,
        total_funds,
        expenses_by_category: group_by_category(day_expenses),
        total_expenses,
        available_balance,
    }
}

/// Budget-vs-actual for fuel over one period. `returned_to_fund` may be
/// negative: the period consumed more than was allocated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DieselLedger {
    pub budget_allocated: Decimal,
    pub logs: Vec<DieselLogEntry>,
    pub period_consumed: Decimal,
    pub returned_to_fund: Decimal,
}

impl DieselLedger {
    pub fn over_budget(&self) -> bool {
        self.returned_to_fund < Decimal::ZERO
    }
}

pub fn diesel_ledger(
    transactions: &[Transaction],
    diesel_logs: &[DieselLogEntry],
    period: Period,
) -> DieselLedger {
    let budget_allocated: Decimal = transactions
        .iter()
        .filter(|t| period.contains(t.date) && is_diesel_budget(t))
        .map(|t| t.amount.abs())
        .sum();
    let logs: Vec<DieselLogEntry> = diesel_logs
        .iter()
        .filter(|d| period.contains(d.date))
        .cloned()
        .collect();
    let period_consumed: Decimal = logs.iter().map(|d| d.amount).sum();
    DieselLedger {
        budget_allocated,
        period_consumed,
        returned_to_fund: budget_allocated - period_consumed,
        logs,
    }
}

/// One slice of the expense distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Expense totals per category, optionally restricted to one calendar
/// month (any year). Output keeps first-occurrence order; rank ordering is
/// a presentation concern left to the caller.
pub fn category_distribution(
    transactions: &[Transaction],
    month: Option<u32>,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for t in transactions.iter().filter(|t| t.kind == TxKind::Expense) {
        if let Some(m) = month {
            if t.date.month() != m {
                continue;
            }
        }
        let amount = t.amount.abs();
        match totals.iter_mut().find(|c| c.category == t.category) {
            Some(c) => c.total += amount,
            None => totals.push(CategoryTotal {
                category: t.category.clone(),
                total: amount,
            }),
        }
    }
    totals
}
