//! # BLAKE2b Hashing
//!
//! The fixed hash primitive behind every commitment: BLAKE2b with a
//! 256-bit output, no key and no personalization.
//!
//! On top of the one-shot digest this module provides the two tree
//! combinators used by the commitment scheme:
//!
//! - `merge_hash(left, right) = H(left ‖ right)`
//! - `counted_root(count, sub_root) = H(count_le ‖ sub_root)`

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

/// BLAKE2b-256 output.
pub type Hash = [u8; 32];

type Blake2b256 = Blake2b<U32>;

/// Stateful BLAKE2b-256 hasher.
#[derive(Clone, Default)]
pub struct Blake2bHasher {
    inner: Blake2b256,
}

impl Blake2bHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Blake2b256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        Digest::update(&mut self.inner, data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

/// Hash data with BLAKE2b-256 (one-shot).
pub fn blake2b_256(data: &[u8]) -> Hash {
    Blake2b256::digest(data).into()
}

/// Hash multiple inputs as if concatenated.
pub fn blake2b_256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Blake2bHasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// First 20 bytes of the BLAKE2b-256 digest.
pub fn blake160(data: &[u8]) -> [u8; 20] {
    let hash = blake2b_256(data);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash[..20]);
    out
}

/// Merge two tree nodes: `H(left ‖ right)`.
pub fn merge_hash(left: &Hash, right: &Hash) -> Hash {
    blake2b_256_many(&[left, right])
}

/// Bind an entry count to an MMR root: `H(count_le ‖ sub_root)`.
pub fn counted_root(count: u32, sub_root: &Hash) -> Hash {
    blake2b_256_many(&[&count.to_le_bytes(), sub_root])
}
