//! # RV-01 Merkle Mountain Range
//!
//! Hash-agnostic MMR engine used to authenticate account and block
//! commitments.
//!
//! **Architecture:** Hexagonal (domain + outbound port for hashing)
//!
//! ## Purpose
//!
//! - Map leaf indices to positions and enumerate peaks
//! - Reconstruct a root from a leaf and its proof
//! - Compute the root after appending one leaf, given the proof of the
//!   previous last leaf
//! - Maintain a full in-memory MMR to generate those proofs
//!
//! ## Module Structure
//!
//! ```text
//! rv-01-mmr/
//! ├── domain/
//! │   ├── position.rs   # Offsets, heights, peaks
//! │   ├── proof.rs      # calculate_root, calculate_root_with_new_leaf
//! │   ├── security.rs   # Proof length and size limits
//! │   ├── store.rs      # MmrStore with proof generation
//! │   └── errors.rs
//! └── ports/
//!     └── outbound.rs   # HashMerger
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;

// Re-exports
pub use domain::{
    bag_peaks, calculate_root, calculate_root_with_new_leaf, get_peaks, is_valid_mmr_size,
    leaf_index_to_mmr_size, leaf_index_to_pos, pos_height_in_tree, MmrError, MmrProof, MmrStore,
    MAX_PROOF_ITEMS,
};
pub use ports::HashMerger;
