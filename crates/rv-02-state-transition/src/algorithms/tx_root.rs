//! # Transaction Root
//!
//! Complete binary Merkle tree over transaction hashes, stored in heap
//! order: leaves occupy the last `n` slots and every inner node `i` is
//! `merge(nodes[2i+1], nodes[2i+2])`.
//!
//! # Time Complexity: O(n)
//! # Space Complexity: O(n)

use rv_01_mmr::HashMerger;
use shared_types::{Hash, Transaction, ZERO_HASH};

use crate::domain::tx_hash;

/// Root over leaf hashes; zero for no leaves, the leaf itself for one.
pub fn compute_tx_root<M: HashMerger>(merger: &M, leaves: &[Hash]) -> Hash {
    let n = leaves.len();
    if n == 0 {
        return ZERO_HASH;
    }

    let mut nodes = vec![ZERO_HASH; 2 * n - 1];
    nodes[n - 1..].copy_from_slice(leaves);
    for i in (0..n - 1).rev() {
        nodes[i] = merger.merge(&nodes[2 * i + 1], &nodes[2 * i + 2]);
    }
    nodes[0]
}

/// Root over the hashes of `transactions`.
pub fn transactions_root<M: HashMerger>(merger: &M, transactions: &[Transaction]) -> Hash {
    let leaves: Vec<Hash> = transactions.iter().map(tx_hash).collect();
    compute_tx_root(merger, &leaves)
}
