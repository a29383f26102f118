//! # Outbound Ports
//!
//! The engine never hashes on its own; node merging is injected.

use shared_types::Hash;

/// Merge function for two MMR nodes.
///
/// Implementations must be deterministic and order-sensitive:
/// `merge(a, b)` and `merge(b, a)` are different nodes.
pub trait HashMerger: Send + Sync {
    /// Parent of `left` and `right`.
    fn merge(&self, left: &Hash, right: &Hash) -> Hash;
}

impl<M: HashMerger + ?Sized> HashMerger for &M {
    fn merge(&self, left: &Hash, right: &Hash) -> Hash {
        (**self).merge(left, right)
    }
}
