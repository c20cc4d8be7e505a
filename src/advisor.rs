// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Advisory-only text collaborator: spending insights over the transaction
//! log and best-effort parsing of free-text entries. Injected behind a
//! trait so commands and tests never depend on network availability; every
//! failure degrades to a placeholder or `None`, never an error.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Account, Transaction, TxKind};
use crate::utils::http_client;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Tip,
    Warning,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub severity: Severity,
}

impl Insight {
    /// Returned whenever the collaborator cannot produce real insights.
    pub fn unavailable() -> Insight {
        Insight {
            title: "Insight Unavailable".to_string(),
            message: "Could not generate insights at this time. Please check your connection."
                .to_string(),
            severity: Severity::Warning,
        }
    }
}

/// Partial transaction recovered from free text. `date` may be absent;
/// the caller substitutes today.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: Decimal,
    pub kind: TxKind,
    pub account: Account,
    pub category: String,
}

pub trait Advisor {
    fn insights(&self, transactions: &[Transaction]) -> Vec<Insight>;
    fn parse_transaction(&self, text: &str) -> Option<TransactionDraft>;
}

/// Loosely typed response shape; nothing about the model output is
/// trusted until every required field validates.
#[derive(Debug, Deserialize)]
struct RawDraft {
    date: Option<String>,
    description: Option<String>,
    amount: Option<serde_json::Value>,
    #[serde(rename = "type")]
    kind: Option<String>,
    mode: Option<String>,
    category: Option<String>,
}

fn validate_draft(raw: RawDraft) -> Option<TransactionDraft> {
    let description = raw.description.filter(|d| !d.trim().is_empty())?;
    let amount = match raw.amount? {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).ok()?,
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok()?,
        _ => return None,
    };
    let kind = TxKind::from_str(&raw.kind?).ok()?;
    let account = Account::from_str(&raw.mode?).ok()?;
    let category = raw.category.filter(|c| !c.trim().is_empty())?;
    let date = raw
        .date
        .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok());
    Some(TransactionDraft {
        date,
        description: description.trim().to_string(),
        amount,
        kind,
        account,
        category: category.trim().to_string(),
    })
}

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// HTTP-backed advisor. Needs `GEMINI_API_KEY`; without it every call
/// takes the degraded path immediately.
pub struct GeminiAdvisor {
    api_key: Option<String>,
}

impl GeminiAdvisor {
    pub fn from_env() -> GeminiAdvisor {
        GeminiAdvisor {
            api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }

    fn generate(&self, prompt: &str) -> Option<String> {
        let key = self.api_key.as_deref()?;
        let client = http_client().ok()?;
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });
        let resp = client
            .post(format!("{}?key={}", GEMINI_ENDPOINT, key))
            .json(&body)
            .send()
            .ok()?
            .error_for_status()
            .ok()?;
        let parsed: GenerateResponse = resp.json().ok()?;
        parsed
            .candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}

impl Advisor for GeminiAdvisor {
    fn insights(&self, transactions: &[Transaction]) -> Vec<Insight> {
        let history: Vec<String> = transactions
            .iter()
            .map(|t| {
                format!(
                    "{}: {} ({} PHP via {})",
                    t.date, t.description, t.amount, t.account
                )
            })
            .collect();
        let prompt = format!(
            "Analyze these financial transactions and provide 3 key insights. \
             Focus on spending patterns, potential savings, or unusual activities. \
             Return a JSON array of objects with 'title', 'message', and 'type' \
             (must be 'tip', 'warning', or 'positive').\n\nTransactions:\n{}",
            history.join("\n")
        );
        self.generate(&prompt)
            .and_then(|text| serde_json::from_str::<Vec<Insight>>(&text).ok())
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| vec![Insight::unavailable()])
    }

    fn parse_transaction(&self, text: &str) -> Option<TransactionDraft> {
        let today = chrono::Utc::now().date_naive();
        let prompt = format!(
            "Parse this natural language financial transaction: \"{}\". \
             Extract: date (YYYY-MM-DD), description, amount (absolute number), \
             type (fund or expense), mode (BDO, GCash, or Cash), and category. \
             If information is missing, use sensible defaults. Today is {}. \
             Return a single JSON object.",
            text, today
        );
        let raw: RawDraft = serde_json::from_str(&self.generate(&prompt)?).ok()?;
        validate_draft(raw)
    }
}

/// Deterministic stand-in used by tests and offline runs.
pub struct StubAdvisor {
    pub insights: Vec<Insight>,
    pub draft: Option<TransactionDraft>,
}

impl Advisor for StubAdvisor {
    fn insights(&self, _transactions: &[Transaction]) -> Vec<Insight> {
        if self.insights.is_empty() {
            vec![Insight::unavailable()]
        } else {
            self.insights.clone()
        }
    }

    fn parse_transaction(&self, _text: &str) -> Option<TransactionDraft> {
        self.draft.clone()
    }
}

/// Exposed for round-tripping model payloads in tests.
pub fn draft_from_json(text: &str) -> Option<TransactionDraft> {
    serde_json::from_str::<RawDraft>(text).ok().and_then(validate_draft)
}
