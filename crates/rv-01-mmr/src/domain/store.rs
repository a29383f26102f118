//! # MMR Store
//!
//! In-memory Merkle Mountain Range that keeps every node, for the
//! aggregator side: it produces the proofs the verifier consumes.
//!
//! Nodes live in a flat vector indexed by position.

use shared_types::{Hash, ZERO_HASH};

use super::errors::MmrError;
use super::position::{get_peaks, leaf_index_to_pos, parent_offset, pos_height_in_tree, sibling_offset};
use super::proof::{bag_peaks, MmrProof};
use crate::ports::HashMerger;

/// Merkle Mountain Range accumulator.
#[derive(Debug, Clone)]
pub struct MmrStore<M: HashMerger> {
    /// Node merge function.
    merger: M,
    /// All nodes indexed by position.
    nodes: Vec<Hash>,
    /// Total number of leaves.
    leaf_count: u64,
}

impl<M: HashMerger + Default> Default for MmrStore<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<M: HashMerger> MmrStore<M> {
    /// Create a new empty MMR.
    pub fn new(merger: M) -> Self {
        Self {
            merger,
            nodes: Vec::new(),
            leaf_count: 0,
        }
    }

    /// Build an MMR from leaves in order.
    pub fn from_leaves<I: IntoIterator<Item = Hash>>(merger: M, leaves: I) -> Self {
        let mut mmr = Self::new(merger);
        for leaf in leaves {
            mmr.append(leaf);
        }
        mmr
    }

    /// The merge function in use.
    pub fn merger(&self) -> &M {
        &self.merger
    }

    /// Get the current number of leaves.
    pub fn leaf_count(&self) -> u64 {
        self.leaf_count
    }

    /// Number of occupied positions.
    pub fn mmr_size(&self) -> u64 {
        self.nodes.len() as u64
    }

    /// Whether no leaf was appended yet.
    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    fn node(&self, pos: u64) -> Hash {
        self.nodes[pos as usize]
    }

    /// Hash of leaf `index`.
    pub fn leaf(&self, index: u64) -> Option<Hash> {
        if index >= self.leaf_count {
            return None;
        }
        Some(self.node(leaf_index_to_pos(index)))
    }

    /// Get the current peaks (hashes only), left to right.
    pub fn peaks(&self) -> Vec<Hash> {
        get_peaks(self.mmr_size())
            .into_iter()
            .map(|pos| self.node(pos))
            .collect()
    }

    /// Get the current root (bag of peaks); all zeros when empty.
    pub fn root(&self) -> Hash {
        bag_peaks(&self.merger, &self.peaks()).unwrap_or(ZERO_HASH)
    }

    /// Append a new leaf to the MMR.
    ///
    /// Returns the leaf index (0-based).
    pub fn append(&mut self, leaf: Hash) -> u64 {
        let leaf_index = self.leaf_count;
        let mut pos = self.mmr_size();
        self.nodes.push(leaf);

        let mut height = 0u32;
        while pos_height_in_tree(pos + 1) > height {
            pos += 1;
            let left_pos = pos - parent_offset(height);
            let right_pos = left_pos + sibling_offset(height);
            let parent = self
                .merger
                .merge(&self.node(left_pos), &self.node(right_pos));
            self.nodes.push(parent);
            height += 1;
        }

        self.leaf_count += 1;
        leaf_index
    }

    /// Replace leaf `index` and recompute its path up to the peak.
    pub fn update_leaf(&mut self, index: u64, leaf: Hash) -> Result<(), MmrError> {
        if index >= self.leaf_count {
            return Err(MmrError::LeafIndexOutOfRange { index });
        }

        let peaks = get_peaks(self.mmr_size());
        let mut pos = leaf_index_to_pos(index);
        let mut height = 0u32;
        let mut acc = leaf;
        self.nodes[pos as usize] = acc;

        while !peaks.contains(&pos) {
            if pos_height_in_tree(pos + 1) > height {
                let sibling = self.node(pos - sibling_offset(height));
                acc = self.merger.merge(&sibling, &acc);
                pos += 1;
            } else {
                let sibling = self.node(pos + sibling_offset(height));
                acc = self.merger.merge(&acc, &sibling);
                pos += parent_offset(height);
            }
            height += 1;
            self.nodes[pos as usize] = acc;
        }
        Ok(())
    }

    /// Generate a proof for a leaf at the given index.
    pub fn gen_proof(&self, index: u64) -> Result<MmrProof, MmrError> {
        if index >= self.leaf_count {
            return Err(MmrError::LeafIndexOutOfRange { index });
        }

        let mmr_size = self.mmr_size();
        let peaks = get_peaks(mmr_size);
        let mut pos = leaf_index_to_pos(index);
        let mut height = 0u32;
        let mut items = Vec::new();

        while !peaks.contains(&pos) {
            if pos_height_in_tree(pos + 1) > height {
                items.push(self.node(pos - sibling_offset(height)));
                pos += 1;
            } else {
                items.push(self.node(pos + sibling_offset(height)));
                pos += parent_offset(height);
            }
            height += 1;
        }

        let Some(peak_index) = peaks.iter().position(|peak| *peak == pos) else {
            return Err(MmrError::PositionOutOfRange { pos, mmr_size });
        };

        let right: Vec<Hash> = peaks[peak_index + 1..]
            .iter()
            .map(|peak| self.node(*peak))
            .collect();
        if let Some(right_bag) = bag_peaks(&self.merger, &right) {
            items.push(right_bag);
        }
        for peak in peaks[..peak_index].iter().rev() {
            items.push(self.node(*peak));
        }

        Ok(MmrProof::new(mmr_size, items))
    }

    /// Proof of the last leaf, as consumed by an append.
    pub fn gen_append_proof(&self) -> Result<MmrProof, MmrError> {
        match self.leaf_count {
            0 => Err(MmrError::EmptyMmr),
            count => self.gen_proof(count - 1),
        }
    }
}
