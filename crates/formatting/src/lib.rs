//! Display formatting for document values.
//!
//! Amounts are rendered with the fixed locale of their currency; dates always
//! use the same day/month/year layout regardless of currency.

pub mod date;
pub mod money;
pub mod number;

pub use date::format_date;
pub use money::{format_currency, format_money};
pub use number::{coerce_number, format_number};
