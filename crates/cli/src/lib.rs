//! `docgen` command-line front end.
//!
//! A thin developer surface over the document crates: every command builds or
//! reads a document value, runs it through the library, and returns the text
//! to print.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use docgen_core::{DocumentDefaults, DocumentKind};
use docgen_documents::{AuditReport, ContractDraft, ProposalDraft};
use docgen_formatting::{coerce_number, format_currency};
use docgen_invoicing::{InvoiceDraft, InvoiceSummary, LineAmountRule};

#[derive(Debug, Parser)]
#[command(name = "docgen", about = "Invoice, proposal, contract and audit helpers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the formatted totals of an invoice stored as JSON
    Summary {
        /// Path to the invoice JSON
        path: PathBuf,
        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
        /// How line amounts are derived
        #[arg(long, value_enum, default_value_t = RuleArg::RateOnly)]
        rule: RuleArg,
    },
    /// Mint a document number
    Number {
        #[arg(value_enum)]
        kind: KindArg,
    },
    /// Print an empty document as JSON
    New {
        #[arg(value_enum)]
        kind: KindArg,
        /// Issue date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Format an amount the way documents display it
    Money {
        /// Raw amount; unparseable input counts as 0
        amount: String,
        /// Currency code; unknown codes fall back to KES
        #[arg(long, default_value = "KES")]
        currency: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Invoice,
    Proposal,
    Contract,
    Audit,
}

impl From<KindArg> for DocumentKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Invoice => DocumentKind::Invoice,
            KindArg::Proposal => DocumentKind::Proposal,
            KindArg::Contract => DocumentKind::Contract,
            KindArg::Audit => DocumentKind::Audit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    RateOnly,
    RateTimesQuantity,
}

impl From<RuleArg> for LineAmountRule {
    fn from(value: RuleArg) -> Self {
        match value {
            RuleArg::RateOnly => LineAmountRule::RateOnly,
            RuleArg::RateTimesQuantity => LineAmountRule::RateTimesQuantity,
        }
    }
}

/// Execute `command` and return what should be printed.
pub fn run(command: Command, defaults: &DocumentDefaults) -> anyhow::Result<String> {
    match command {
        Command::Summary { path, json, rule } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let invoice: InvoiceDraft = serde_json::from_str(&raw)
                .with_context(|| format!("parsing invoice JSON from {}", path.display()))?;
            let rule = LineAmountRule::from(rule);
            if rule != LineAmountRule::RateOnly {
                tracing::info!(?rule, "using non-default line amount rule");
            }
            let summary = InvoiceSummary::render_with(&invoice, rule);
            if json {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(summary.to_string())
            }
        }
        Command::Number { kind } => Ok(defaults.next_number(kind.into()).into_inner()),
        Command::New { kind, date } => {
            let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let json = match DocumentKind::from(kind) {
                DocumentKind::Invoice => {
                    serde_json::to_string_pretty(&InvoiceDraft::new(defaults, today))?
                }
                DocumentKind::Proposal => {
                    serde_json::to_string_pretty(&ProposalDraft::new(defaults, today))?
                }
                DocumentKind::Contract => {
                    serde_json::to_string_pretty(&ContractDraft::new(defaults, today))?
                }
                DocumentKind::Audit => {
                    serde_json::to_string_pretty(&AuditReport::new(defaults, today))?
                }
            };
            Ok(json)
        }
        Command::Money { amount, currency } => {
            Ok(format_currency(coerce_number(&amount), &currency))
        }
    }
}
