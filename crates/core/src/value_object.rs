//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances with the same attributes are
/// equal. Documents in this workspace are edited by building a new value and
/// handing it back to the caller, never by mutating shared state.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Totals { subtotal: f64, total: f64 }
///
/// impl ValueObject for Totals {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
