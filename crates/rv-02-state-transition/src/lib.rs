//! # RV-02 State Transition Verifier
//!
//! Decides whether a proposed change of the rollup's global state is
//! legal, given the old and new state, the settlement cell capacities and
//! a witness action.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! The global state commits to two MMRs, accounts and blocks, each as a
//! counted root. Every transition is one action:
//! - `Register` appends an account entry
//! - `Deposit` credits a capacity increase to an entry
//! - `SubmitBlock` appends a block signed by an eligible aggregator
//!
//! ## Exit Contract
//!
//! | Outcome | Code |
//! |---------|------|
//! | accepted | 0 |
//! | rejected | `VerifyError::exit_code()` (negative) |
//!
//! ## Module Structure
//!
//! ```text
//! rv-02-state-transition/
//! ├── domain/          # Errors, invariants, leaf hashes, action verifiers
//! ├── algorithms/      # Counted-root commitments, transaction root
//! ├── ports/           # StateTransitionApi (inbound), HostLedger + SignatureVerifier (outbound)
//! ├── adapters/        # Blake2bMerger, Secp256k1Verifier, InMemoryHost
//! ├── application/     # StateTransitionService
//! ├── ledger.rs        # RollupLedger building honest transitions
//! └── config.rs        # VerifierConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ledger;
pub mod ports;

// Re-exports
pub use adapters::{Blake2bMerger, InMemoryHost, Secp256k1Verifier};
pub use algorithms::{
    commitment_of, compute_appended_commitment, compute_existing_commitment, compute_tx_root,
    transactions_root, verify_empty_commitment, verify_existing_commitment,
};
pub use application::StateTransitionService;
pub use config::VerifierConfig;
pub use domain::{
    block_hash, block_signing_message, entry_hash, tx_hash, verify_action, verify_deposit,
    verify_register, verify_submit_block, Commitment, CommitmentError, ConfigError, EntryField,
    Ineligibility, TransitionInput, VerifyContext, VerifyError, AGGREGATOR_REQUIRED_BALANCE,
    CONFIG_VERSION, EXIT_OK, MAX_PROOF_ITEMS, MAX_WITNESS_SIZE, NEW_ACCOUNT_REQUIRED_BALANCE,
};
pub use ledger::{LedgerError, RollupLedger};
pub use ports::{HostError, HostLedger, SignatureVerifier, StateSide, StateTransitionApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
