//! BLAKE2b node merging for the MMR engine and the transaction tree.

use rv_01_mmr::HashMerger;
use shared_crypto::merge_hash;
use shared_types::Hash;

/// `merge(left, right) = BLAKE2b-256(left ‖ right)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake2bMerger;

impl HashMerger for Blake2bMerger {
    fn merge(&self, left: &Hash, right: &Hash) -> Hash {
        merge_hash(left, right)
    }
}
