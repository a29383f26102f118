//! # Counted-Root Commitments
//!
//! A committed root binds an MMR sub-root to its entry count:
//!
//! ```text
//! root  = H(count_le32 ‖ sub_root)     count > 0
//! root  = 0x00 * 32                    empty tree
//! ```
//!
//! The count fixes the MMR size, so a proof cannot be replayed against a
//! tree of a different shape.

use rv_01_mmr::{
    calculate_root, calculate_root_with_new_leaf, leaf_index_to_mmr_size, leaf_index_to_pos,
    HashMerger,
};
use shared_crypto::counted_root;
use shared_types::{Hash, ZERO_HASH};

use crate::domain::CommitmentError;

/// MMR size for `count` entries, checked against the witnessed size.
fn expected_size(count: u32, mmr_size: u64) -> Result<(), CommitmentError> {
    let expected = match count {
        0 => 0,
        n => leaf_index_to_mmr_size(u64::from(n) - 1),
    };
    if mmr_size != expected {
        return Err(CommitmentError::SizeMismatch {
            count,
            expected,
            actual: mmr_size,
        });
    }
    Ok(())
}

/// Commitment of a tree of `count` entries in which `entry_hash` sits at
/// `index`.
///
/// # Errors
///
/// - `IndexOutOfRange` if `index >= count`
/// - `SizeMismatch` if `mmr_size` does not belong to `count` leaves
/// - `Mmr` for any structural problem with the proof
pub fn compute_existing_commitment<M: HashMerger>(
    merger: &M,
    entry_hash: Hash,
    index: u32,
    count: u32,
    mmr_size: u64,
    proof: &[Hash],
) -> Result<Hash, CommitmentError> {
    if index >= count {
        return Err(CommitmentError::IndexOutOfRange { index, count });
    }
    expected_size(count, mmr_size)?;

    let pos = leaf_index_to_pos(u64::from(index));
    let sub_root = calculate_root(merger, mmr_size, pos, entry_hash, proof)?;
    Ok(counted_root(count, &sub_root))
}

/// Commitment after appending `new_entry_hash` at `new_index`.
///
/// For `new_index == 0` the tree was empty: the proof must be empty, the
/// size zero, and the sub-root is the new leaf itself. Otherwise `proof`
/// is the proof of `prev_entry_hash` at `new_index - 1`, the last leaf.
pub fn compute_appended_commitment<M: HashMerger>(
    merger: &M,
    prev_entry_hash: Hash,
    new_entry_hash: Hash,
    new_index: u32,
    mmr_size: u64,
    proof: &[Hash],
) -> Result<Hash, CommitmentError> {
    let count = new_index
        .checked_add(1)
        .ok_or(CommitmentError::CountOverflow(new_index))?;

    let sub_root = if new_index == 0 {
        if mmr_size != 0 || !proof.is_empty() {
            return Err(CommitmentError::NonEmptyTree);
        }
        new_entry_hash
    } else {
        expected_size(new_index, mmr_size)?;
        let prev_pos = leaf_index_to_pos(u64::from(new_index) - 1);
        let new_pos = leaf_index_to_pos(u64::from(new_index));
        calculate_root_with_new_leaf(
            merger,
            mmr_size,
            prev_pos,
            prev_entry_hash,
            proof,
            new_pos,
            new_entry_hash,
        )?
    };
    Ok(counted_root(count, &sub_root))
}

/// Check that a witnessed tree is the empty tree.
pub fn verify_empty_commitment(
    root: &Hash,
    mmr_size: u64,
    proof: &[Hash],
) -> Result<(), CommitmentError> {
    if *root != ZERO_HASH || mmr_size != 0 || !proof.is_empty() {
        return Err(CommitmentError::NonEmptyTree);
    }
    Ok(())
}

/// Check that `entry_hash` at `index` authenticates against `root`.
pub fn verify_existing_commitment<M: HashMerger>(
    merger: &M,
    root: &Hash,
    entry_hash: Hash,
    index: u32,
    count: u32,
    mmr_size: u64,
    proof: &[Hash],
) -> Result<(), CommitmentError> {
    let computed = compute_existing_commitment(merger, entry_hash, index, count, mmr_size, proof)?;
    if computed != *root {
        return Err(CommitmentError::Mismatch);
    }
    Ok(())
}

/// Commitment of an in-memory tree holding `count` entries.
pub fn commitment_of(count: u32, sub_root: &Hash) -> Hash {
    if count == 0 {
        ZERO_HASH
    } else {
        counted_root(count, sub_root)
    }
}
