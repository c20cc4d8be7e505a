// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fundtrack::advisor::{draft_from_json, Advisor, Insight, Severity, StubAdvisor};
use fundtrack::models::{Account, TxKind};

#[test]
fn empty_stub_degrades_to_the_placeholder_warning() {
    let stub = StubAdvisor {
        insights: Vec::new(),
        draft: None,
    };
    let insights = stub.insights(&[]);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].severity, Severity::Warning);
    assert_eq!(insights[0], Insight::unavailable());
}

#[test]
fn stub_passes_through_configured_insights() {
    let stub = StubAdvisor {
        insights: vec![Insight {
            title: "Fuel spend is up".to_string(),
            message: "Diesel consumption rose versus last month.".to_string(),
            severity: Severity::Tip,
        }],
        draft: None,
    };
    assert_eq!(stub.insights(&[]).len(), 1);
    assert_eq!(stub.parse_transaction("anything"), None);
}

#[test]
fn well_formed_payload_yields_a_draft() {
    let draft = draft_from_json(
        r#"{"date":"2025-12-02","description":"meralco bill","amount":8842.86,
            "type":"expense","mode":"GCash","category":"Utilities"}"#,
    )
    .unwrap();
    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 12, 2));
    assert_eq!(draft.description, "meralco bill");
    assert_eq!(draft.amount, "8842.86".parse().unwrap());
    assert_eq!(draft.kind, TxKind::Expense);
    assert_eq!(draft.account, Account::GCash);
    assert_eq!(draft.category, "Utilities");
}

#[test]
fn amount_may_arrive_as_a_string() {
    let draft = draft_from_json(
        r#"{"description":"x","amount":"150","type":"fund","mode":"Cash","category":"Withdrawal"}"#,
    )
    .unwrap();
    assert_eq!(draft.amount, "150".parse().unwrap());
    assert_eq!(draft.date, None);
}

#[test]
fn missing_required_fields_are_rejected() {
    // No amount.
    assert!(draft_from_json(
        r#"{"description":"x","type":"expense","mode":"Cash","category":"Food"}"#
    )
    .is_none());
    // Unknown account.
    assert!(draft_from_json(
        r#"{"description":"x","amount":1,"type":"expense","mode":"PayMaya","category":"Food"}"#
    )
    .is_none());
    // Unknown kind.
    assert!(draft_from_json(
        r#"{"description":"x","amount":1,"type":"loan","mode":"Cash","category":"Food"}"#
    )
    .is_none());
    // Blank description.
    assert!(draft_from_json(
        r#"{"description":"  ","amount":1,"type":"expense","mode":"Cash","category":"Food"}"#
    )
    .is_none());
    // Not even JSON.
    assert!(draft_from_json("sorry, I cannot help with that").is_none());
}

#[test]
fn unparsable_date_is_dropped_but_the_draft_survives() {
    let draft = draft_from_json(
        r#"{"date":"next tuesday","description":"x","amount":5,"type":"expense",
            "mode":"Cash","category":"Food"}"#,
    )
    .unwrap();
    assert_eq!(draft.date, None);
}
