//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An employee record stays the same entity while its name or salary change;
/// what identifies it is its id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
