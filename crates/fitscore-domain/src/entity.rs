//! Core Entity Trait
//!
//! Records the wizard addresses by id (traits, roles, sample candidates).

/// Basic contract for identified records
pub trait Entity: Clone {
    /// The type of the record's identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the record's identifier
    fn id(&self) -> Self::Id;
}

/// Position of the record with `id`, if present
pub fn find_by_id<T: Entity>(records: &[T], id: T::Id) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}
