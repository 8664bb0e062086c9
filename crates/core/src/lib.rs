//! `docgen-core` — building blocks shared by every document kind.
//!
//! This crate contains **pure domain** primitives (no IO beyond reading the
//! clock and process environment for defaults).

pub mod client;
pub mod config;
pub mod currency;
pub mod entity;
pub mod error;
pub mod id;
pub mod numbering;
pub mod value_object;

pub use client::ClientDetails;
pub use config::DocumentDefaults;
pub use currency::Currency;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AuditId, CostItemId, InvoiceId, IssueId, LineItemId, ScopeItemId};
pub use numbering::{DocumentKind, DocumentNumber, generate_document_number};
pub use value_object::ValueObject;
