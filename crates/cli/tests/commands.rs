//! Command-level tests: drive `run` the way `main` does, without a subprocess.

use std::io::Write;

use chrono::NaiveDate;
use docgen_cli::{Command, KindArg, RuleArg, run};
use docgen_core::DocumentDefaults;
use docgen_invoicing::{InvoiceDraft, LineItemEdit};

fn invoice_file(draft: &InvoiceDraft) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(draft).unwrap().as_bytes())
        .unwrap();
    file
}

fn sample_invoice() -> InvoiceDraft {
    let draft = InvoiceDraft::new(
        &DocumentDefaults::default(),
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    );
    let id = draft.line_items[0].id;
    draft
        .with_line_item_edit(id, LineItemEdit::Description("Hosting".into()))
        .with_line_item_edit(id, LineItemEdit::Quantity(3.0))
        .with_line_item_edit(id, LineItemEdit::Rate(100.0))
        .with_tax_rate(15.0)
        .with_discount_percent(10.0)
}

#[test]
fn summary_prints_text_totals() {
    let file = invoice_file(&sample_invoice());
    let out = run(
        Command::Summary {
            path: file.path().to_path_buf(),
            json: false,
            rule: RuleArg::RateOnly,
        },
        &DocumentDefaults::default(),
    )
    .unwrap();

    assert!(out.contains("Issued: 05 Mar 2025  Due: 19 Mar 2025"));
    assert!(out.contains("Tax (15%)"));
    assert!(out.contains("-Ksh\u{a0}10.00"));
    assert!(out.trim_end().ends_with("Ksh\u{a0}105.00"));
}

#[test]
fn summary_json_honours_quantity_rule() {
    let file = invoice_file(&sample_invoice());
    let out = run(
        Command::Summary {
            path: file.path().to_path_buf(),
            json: true,
            rule: RuleArg::RateTimesQuantity,
        },
        &DocumentDefaults::default(),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["subtotal"], "Ksh\u{a0}300.00");
    assert_eq!(json["total"], "Ksh\u{a0}315.00");
}

#[test]
fn summary_reports_missing_file() {
    let err = run(
        Command::Summary {
            path: "/definitely/not/here.json".into(),
            json: false,
            rule: RuleArg::RateOnly,
        },
        &DocumentDefaults::default(),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("reading "));
}

#[test]
fn number_uses_configured_prefix() {
    let defaults = DocumentDefaults {
        contract_prefix: "AGR".into(),
        ..DocumentDefaults::default()
    };
    let out = run(Command::Number { kind: KindArg::Contract }, &defaults).unwrap();
    assert!(out.starts_with("AGR-"));
    assert_eq!(out.len(), "AGR-YYMM-RRR".len());
}

#[test]
fn new_invoice_round_trips_through_json() {
    let out = run(
        Command::New {
            kind: KindArg::Invoice,
            date: NaiveDate::from_ymd_opt(2025, 3, 5),
        },
        &DocumentDefaults::default(),
    )
    .unwrap();
    let draft: InvoiceDraft = serde_json::from_str(&out).unwrap();
    assert_eq!(draft.line_items.len(), 1);
    assert_eq!(draft.total(), 0.0);
}

#[test]
fn new_audit_starts_without_issues() {
    let out = run(
        Command::New {
            kind: KindArg::Audit,
            date: NaiveDate::from_ymd_opt(2025, 3, 5),
        },
        &DocumentDefaults::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["status"], "draft");
    assert_eq!(json["issues"].as_array().map(Vec::len), Some(0));
}

#[test]
fn money_coerces_and_falls_back() {
    let defaults = DocumentDefaults::default();
    let usd = run(
        Command::Money {
            amount: "1234.5".into(),
            currency: "USD".into(),
        },
        &defaults,
    )
    .unwrap();
    assert_eq!(usd, "$1,234.50");

    let cleared = run(
        Command::Money {
            amount: "".into(),
            currency: "XYZ".into(),
        },
        &defaults,
    )
    .unwrap();
    assert_eq!(cleared, "Ksh\u{a0}0.00");
}
