//! # MMR Proofs
//!
//! ## Proof layout
//!
//! For a leaf under peak `k` of `n` peaks (left to right):
//!
//! 1. the sibling path from the leaf up to peak `k`, bottom first;
//! 2. if `k` is not the last peak, one item: the bag of peaks `k+1..n`;
//! 3. the peaks left of `k`, nearest first.
//!
//! ## Bagging
//!
//! Peaks are bagged right to left keeping position order in every merge:
//!
//! ```text
//! root = merge(P1, merge(P2, ... merge(Pn-1, Pn)))
//! ```
//!
//! so the right-hand bag is merged as `merge(peak, bag)` and every left
//! peak as `merge(left_peak, acc)`.

use shared_types::Hash;

use super::errors::MmrError;
use super::position::{
    get_peaks_with_heights, leaf_index_to_pos, mmr_size_to_leaf_count, parent_offset,
    pos_height_in_tree,
};
use super::security::{validate_leaf_pos, validate_mmr_size, validate_proof_len};
use crate::ports::HashMerger;

// =============================================================================
// MMR PROOF
// =============================================================================

/// Authentication path for one leaf of an MMR of a given size.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmrProof {
    /// Size of the MMR the proof was generated against.
    pub mmr_size: u64,
    /// Path items, then the right-hand bag, then left peaks.
    pub items: Vec<Hash>,
}

impl MmrProof {
    /// Create a proof.
    pub fn new(mmr_size: u64, items: Vec<Hash>) -> Self {
        Self { mmr_size, items }
    }

    /// Root implied by `leaf` sitting at `pos`.
    pub fn calculate_root<M: HashMerger>(
        &self,
        merger: &M,
        pos: u64,
        leaf: Hash,
    ) -> Result<Hash, MmrError> {
        calculate_root(merger, self.mmr_size, pos, leaf, &self.items)
    }

    /// Root after appending `new_leaf` to the MMR this proof was made for.
    ///
    /// The proof must be the proof of the current last leaf.
    pub fn calculate_root_with_new_leaf<M: HashMerger>(
        &self,
        merger: &M,
        prev_pos: u64,
        prev_leaf: Hash,
        new_pos: u64,
        new_leaf: Hash,
    ) -> Result<Hash, MmrError> {
        calculate_root_with_new_leaf(
            merger,
            self.mmr_size,
            prev_pos,
            prev_leaf,
            &self.items,
            new_pos,
            new_leaf,
        )
    }

    /// Whether `leaf` at `pos` authenticates against `root`.
    pub fn verify<M: HashMerger>(
        &self,
        merger: &M,
        root: &Hash,
        pos: u64,
        leaf: Hash,
    ) -> Result<bool, MmrError> {
        Ok(self.calculate_root(merger, pos, leaf)? == *root)
    }
}

// =============================================================================
// BAGGING
// =============================================================================

/// Bag peak hashes (left to right) into a single root.
///
/// Returns `None` when there are no peaks.
pub fn bag_peaks<M: HashMerger>(merger: &M, peaks: &[Hash]) -> Option<Hash> {
    let (last, rest) = peaks.split_last()?;
    let mut acc = *last;
    for peak in rest.iter().rev() {
        acc = merger.merge(peak, &acc);
    }
    Some(acc)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Outcome of walking a leaf up to its peak.
struct Climb {
    /// Index of the reached peak in the peak list.
    peak_index: usize,
    /// Reconstructed peak hash.
    peak_hash: Hash,
    /// Path items consumed.
    consumed: usize,
}

fn climb_to_peak<M: HashMerger>(
    merger: &M,
    mmr_size: u64,
    peaks: &[(u32, u64)],
    mut pos: u64,
    leaf: Hash,
    items: &[Hash],
) -> Result<Climb, MmrError> {
    let mut height = 0u32;
    let mut acc = leaf;
    let mut consumed = 0usize;

    loop {
        if let Some(peak_index) = peaks.iter().position(|&(_, peak)| peak == pos) {
            return Ok(Climb {
                peak_index,
                peak_hash: acc,
                consumed,
            });
        }
        if pos >= mmr_size {
            return Err(MmrError::PositionOutOfRange { pos, mmr_size });
        }

        let item = items
            .get(consumed)
            .ok_or(MmrError::IncompletePath { height })?;
        consumed += 1;

        if pos_height_in_tree(pos + 1) > height {
            // Right child: the sibling sits to the left.
            acc = merger.merge(item, &acc);
            pos += 1;
        } else {
            acc = merger.merge(&acc, item);
            pos += parent_offset(height);
        }
        height += 1;
    }
}

/// Reconstruct the MMR root from a leaf and its proof.
///
/// # Errors
///
/// Any structural problem: invalid size, a position that is not a leaf of
/// this MMR, a path that stops short of its peak, or a number of peak
/// items that does not match the peak layout.
pub fn calculate_root<M: HashMerger>(
    merger: &M,
    mmr_size: u64,
    pos: u64,
    leaf: Hash,
    items: &[Hash],
) -> Result<Hash, MmrError> {
    validate_proof_len(items.len())?;
    validate_mmr_size(mmr_size)?;
    validate_leaf_pos(pos, mmr_size)?;

    let peaks = get_peaks_with_heights(mmr_size);
    let climb = climb_to_peak(merger, mmr_size, &peaks, pos, leaf, items)?;

    let rest = &items[climb.consumed..];
    let has_right_peaks = climb.peak_index + 1 < peaks.len();
    let expected = climb.peak_index + usize::from(has_right_peaks);
    if rest.len() != expected {
        return Err(MmrError::UnexpectedProofLength {
            expected,
            actual: rest.len(),
        });
    }

    let mut acc = climb.peak_hash;
    let mut rest = rest.iter();
    if has_right_peaks {
        if let Some(right_bag) = rest.next() {
            acc = merger.merge(&acc, right_bag);
        }
    }
    for left_peak in rest {
        acc = merger.merge(left_peak, &acc);
    }
    Ok(acc)
}

/// Compute the root after appending `new_leaf`, given the proof of the
/// current last leaf.
///
/// The proof authenticates the old peaks; the new leaf is then merged
/// into every trailing peak of equal height, exactly as an append would.
///
/// # Errors
///
/// Structural errors as in [`calculate_root`], plus:
/// - `EmptyMmr` for size 0 (the first leaf needs no proof)
/// - `NonContiguousAppend` if `new_pos` is not the next free position
/// - `NotLastLeaf` if `prev_pos` is not the current last leaf
pub fn calculate_root_with_new_leaf<M: HashMerger>(
    merger: &M,
    mmr_size: u64,
    prev_pos: u64,
    prev_leaf: Hash,
    items: &[Hash],
    new_pos: u64,
    new_leaf: Hash,
) -> Result<Hash, MmrError> {
    validate_proof_len(items.len())?;
    validate_mmr_size(mmr_size)?;
    if mmr_size == 0 {
        return Err(MmrError::EmptyMmr);
    }
    if new_pos != mmr_size {
        return Err(MmrError::NonContiguousAppend { new_pos, mmr_size });
    }
    validate_leaf_pos(prev_pos, mmr_size)?;
    let last_leaf_pos = leaf_index_to_pos(mmr_size_to_leaf_count(mmr_size) - 1);
    if prev_pos != last_leaf_pos {
        return Err(MmrError::NotLastLeaf(prev_pos));
    }

    let peaks = get_peaks_with_heights(mmr_size);
    let climb = climb_to_peak(merger, mmr_size, &peaks, prev_pos, prev_leaf, items)?;

    let left_peaks = &items[climb.consumed..];
    if left_peaks.len() != climb.peak_index {
        return Err(MmrError::UnexpectedProofLength {
            expected: climb.peak_index,
            actual: left_peaks.len(),
        });
    }

    // Rebuild the peak stack left to right; proof items list left peaks nearest first.
    let mut stack: Vec<(u32, Hash)> = peaks[..climb.peak_index]
        .iter()
        .zip(left_peaks.iter().rev())
        .map(|(&(height, _), hash)| (height, *hash))
        .collect();
    let last_height = peaks[climb.peak_index].0;
    stack.push((last_height, climb.peak_hash));

    let mut node = new_leaf;
    let mut height = 0u32;
    while let Some(&(peak_height, peak)) = stack.last() {
        if peak_height != height {
            break;
        }
        stack.pop();
        node = merger.merge(&peak, &node);
        height += 1;
    }
    stack.push((height, node));

    let hashes: Vec<Hash> = stack.into_iter().map(|(_, hash)| hash).collect();
    bag_peaks(merger, &hashes).ok_or(MmrError::EmptyMmr)
}
