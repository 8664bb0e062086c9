//! Contact details of the client a document is addressed to.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Client contact block.
///
/// Every field is free text and may be empty while a draft is being edited.
/// Audit reports use `website`; the other document kinds use `address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: String,
    pub website: String,
}

impl ValueObject for ClientDetails {}

impl ClientDetails {
    /// Name to greet the client by, falling back to `Client` when blank.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { "Client" } else { name }
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}
