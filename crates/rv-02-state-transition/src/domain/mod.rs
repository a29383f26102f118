//! # Domain Layer
//!
//! Errors, invariants, leaf hashes and the per-action verifiers.

pub mod actions;
pub mod errors;
pub mod hashes;
pub mod invariants;

pub use actions::{
    verify_action, verify_deposit, verify_register, verify_submit_block, TransitionInput,
    VerifyContext,
};
pub use errors::*;
pub use hashes::*;
pub use invariants::*;
