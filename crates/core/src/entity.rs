//! Entity trait: identity + continuity across edits.

/// Entity marker + minimal interface.
///
/// Line items, scope items and audit issues are entities: the editing surface
/// addresses them by id, so two rows with identical text are still distinct.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
