//! # Algorithms Module
//!
//! Commitment arithmetic on top of the MMR engine, and the transaction tree.

pub mod commitment;
pub mod tx_root;

pub use commitment::{
    commitment_of, compute_appended_commitment, compute_existing_commitment,
    verify_empty_commitment, verify_existing_commitment,
};
pub use tx_root::{compute_tx_root, transactions_root};
