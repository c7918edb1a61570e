//! Stored documents: identity plus a revision that changes on every write.

/// A document with a stable identity.
///
/// Two values with the same `id` are the same document even when their
/// revisions differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Revision token assigned by the store, if it has been stored.
    fn revision(&self) -> Option<&str> {
        None
    }
}
