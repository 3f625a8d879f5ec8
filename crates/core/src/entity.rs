//! Records with an identity of their own.

/// A record whose identity survives changes to every other field.
///
/// A product renamed and repriced is still product 7; two movements with the
/// same quantity are still two movements.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Same record, regardless of field values.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
