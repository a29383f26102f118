//! # MMR Security
//!
//! Structural limits applied before any proof is walked.
//!
//! ## Security Invariants
//!
//! - Proof verification must be deterministic
//! - Proof length is bounded before hashing starts
//! - Positions and sizes are validated before offset arithmetic

use super::errors::MmrError;
use super::position::{is_leaf, is_valid_mmr_size};

/// Maximum proof length to prevent DoS attacks.
///
/// A path inside one peak plus one item per other peak never exceeds
/// twice the height of the MMR, so 64 covers any tree of 2^32 leaves.
pub const MAX_PROOF_ITEMS: usize = 64;

/// Validate proof length.
pub fn validate_proof_len(len: usize) -> Result<(), MmrError> {
    if len > MAX_PROOF_ITEMS {
        return Err(MmrError::ProofTooLong {
            len,
            max: MAX_PROOF_ITEMS,
        });
    }
    Ok(())
}

/// Validate that `mmr_size` is reachable by appends.
pub fn validate_mmr_size(mmr_size: u64) -> Result<(), MmrError> {
    if !is_valid_mmr_size(mmr_size) {
        return Err(MmrError::InvalidMmrSize(mmr_size));
    }
    Ok(())
}

/// Validate that `pos` is a leaf inside an MMR of `mmr_size`.
pub fn validate_leaf_pos(pos: u64, mmr_size: u64) -> Result<(), MmrError> {
    if pos >= mmr_size {
        return Err(MmrError::PositionOutOfRange { pos, mmr_size });
    }
    if !is_leaf(pos) {
        return Err(MmrError::NotALeaf(pos));
    }
    Ok(())
}
