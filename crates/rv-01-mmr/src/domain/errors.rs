//! # MMR Errors
//!
//! Every structural problem with a proof is an error; a well-formed proof
//! for the wrong leaf simply yields a different root.

use thiserror::Error;

/// Errors from MMR operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MmrError {
    /// Size is not reachable by any sequence of appends.
    #[error("Invalid MMR size: {0}")]
    InvalidMmrSize(u64),

    /// Position lies outside the MMR.
    #[error("Position {pos} out of range for MMR size {mmr_size}")]
    PositionOutOfRange {
        /// Offending position
        pos: u64,
        /// Size of the MMR
        mmr_size: u64,
    },

    /// Position does not hold a leaf.
    #[error("Position {0} is not a leaf")]
    NotALeaf(u64),

    /// Proof longer than the engine accepts.
    #[error("Proof has {len} items, maximum is {max}")]
    ProofTooLong {
        /// Items supplied
        len: usize,
        /// Maximum accepted
        max: usize,
    },

    /// Proof ran out before reaching a peak.
    #[error("Proof exhausted at height {height} before reaching a peak")]
    IncompletePath {
        /// Height reached when the proof ran out
        height: u32,
    },

    /// Items left after the climb do not match the peak layout.
    #[error("Expected {expected} peak items after the path, got {actual}")]
    UnexpectedProofLength {
        /// Items the peak layout requires
        expected: usize,
        /// Items left in the proof
        actual: usize,
    },

    /// Append proof does not start from the last leaf.
    #[error("Position {0} is not the last leaf of the MMR")]
    NotLastLeaf(u64),

    /// New leaf is not at the next free position.
    #[error("New leaf at position {new_pos}, next free position is {mmr_size}")]
    NonContiguousAppend {
        /// Claimed position of the new leaf
        new_pos: u64,
        /// Size of the MMR before the append
        mmr_size: u64,
    },

    /// Leaf index beyond the stored leaves.
    #[error("Leaf not found at index {index}")]
    LeafIndexOutOfRange {
        /// Requested leaf index
        index: u64,
    },

    /// Operation needs at least one leaf.
    #[error("MMR is empty")]
    EmptyMmr,
}
