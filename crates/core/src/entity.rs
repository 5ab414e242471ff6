//! Entity trait: identity + the collection a record belongs to.

use crate::Collection;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Collection (list key) records of this type are stored under.
    const COLLECTION: Collection;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
