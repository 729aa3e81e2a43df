//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stock levels change over time; the identifier does not.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
