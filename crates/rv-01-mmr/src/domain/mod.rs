//! # MMR Domain
//!
//! Position arithmetic, proof verification and the in-memory store.

pub mod errors;
pub mod position;
pub mod proof;
pub mod security;
pub mod store;


pub use errors::MmrError;
pub use position::*;
pub use proof::{bag_peaks, calculate_root, calculate_root_with_new_leaf, MmrProof};
pub use security::{validate_proof_len, MAX_PROOF_ITEMS};
pub use store::MmrStore;
