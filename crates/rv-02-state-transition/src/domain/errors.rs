//! # Domain Errors
//!
//! Rejection reasons for a proposed state transition, and the process
//! exit codes they map to.
//!
//! ## Exit Codes
//!
//! | Kind | Code |
//! |------|------|
//! | accepted | 0 |
//! | `HostFailure` | -4 |
//! | `StateRootMismatch` | -5 |
//! | `CapacityViolation` | -7 |
//! | `MalformedInput` | -11 |
//! | `UnknownAction` | -12 |
//! | `ProofVerificationFailure` | -14 |
//! | `EntryTransitionViolation` | -15 |
//! | `AggregatorIneligible` | -17 |
//! | `SignatureInvalid` | -18 |

use std::fmt;

use rv_01_mmr::MmrError;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Exit status of an accepted transition.
pub const EXIT_OK: i8 = 0;

/// A committed root inside global state or a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commitment {
    /// `GlobalState::account_root`.
    AccountRoot,
    /// `GlobalState::block_root`.
    BlockRoot,
    /// `AggregatorBlock::tx_root`.
    TxRoot,
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountRoot => write!(f, "account root"),
            Self::BlockRoot => write!(f, "block root"),
            Self::TxRoot => write!(f, "tx root"),
        }
    }
}

/// Account entry field whose transition rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// Leaf index.
    Index,
    /// Owner identity.
    PubkeyHash,
    /// Action counter.
    Nonce,
    /// Locked value.
    Balance,
    /// Aggregator flag.
    IsAggregator,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => write!(f, "index"),
            Self::PubkeyHash => write!(f, "pubkey_hash"),
            Self::Nonce => write!(f, "nonce"),
            Self::Balance => write!(f, "balance"),
            Self::IsAggregator => write!(f, "is_aggregator"),
        }
    }
}

/// Why an entry may not act as aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Ineligibility {
    /// Entry lacks the aggregator flag.
    #[error("entry is not flagged as aggregator")]
    NotAggregator,
    /// Entry balance below the threshold.
    #[error("balance {balance} below required {required}")]
    InsufficientBalance {
        /// Entry balance
        balance: u64,
        /// Configured threshold
        required: u64,
    },
}

/// Rejection of a proposed state transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The host could not supply an input.
    #[error("Host failure: {0}")]
    HostFailure(String),

    /// Structurally invalid state, witness or proof.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Action discriminant outside the known set.
    #[error("Unknown action tag: {0}")]
    UnknownAction(u32),

    /// Locked value changed against the action's rule.
    #[error("Capacity violation: old {old}, new {new}")]
    CapacityViolation {
        /// Capacity before the transition
        old: u64,
        /// Capacity after the transition
        new: u64,
    },

    /// An account entry field broke its transition rule.
    #[error("Entry transition violation on {0}")]
    EntryTransitionViolation(EntryField),

    /// A proof did not authenticate against its commitment.
    #[error("Proof verification failed against {commitment}: {detail}")]
    ProofVerificationFailure {
        /// Commitment the proof was checked against
        commitment: Commitment,
        /// Underlying cause
        detail: String,
    },

    /// A recomputed commitment differs from the asserted one.
    #[error("State root mismatch on {commitment}: {detail}")]
    StateRootMismatch {
        /// Commitment that differs
        commitment: Commitment,
        /// Underlying cause
        detail: String,
    },

    /// Signer may not submit blocks.
    #[error("Aggregator ineligible: {0}")]
    AggregatorIneligible(Ineligibility),

    /// Block signature check failed.
    #[error("Invalid block signature: {0}")]
    SignatureInvalid(CryptoError),
}

impl VerifyError {
    /// Process exit status for this rejection.
    pub fn exit_code(&self) -> i8 {
        match self {
            Self::HostFailure(_) => -4,
            Self::StateRootMismatch { .. } => -5,
            Self::CapacityViolation { .. } => -7,
            Self::MalformedInput(_) => -11,
            Self::UnknownAction(_) => -12,
            Self::ProofVerificationFailure { .. } => -14,
            Self::EntryTransitionViolation(_) => -15,
            Self::AggregatorIneligible(_) => -17,
            Self::SignatureInvalid(_) => -18,
        }
    }

    /// Short kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HostFailure(_) => "host_failure",
            Self::StateRootMismatch { .. } => "state_root_mismatch",
            Self::CapacityViolation { .. } => "capacity_violation",
            Self::MalformedInput(_) => "malformed_input",
            Self::UnknownAction(_) => "unknown_action",
            Self::ProofVerificationFailure { .. } => "proof_verification_failure",
            Self::EntryTransitionViolation(_) => "entry_transition_violation",
            Self::AggregatorIneligible(_) => "aggregator_ineligible",
            Self::SignatureInvalid(_) => "signature_invalid",
        }
    }

    pub(crate) fn proof_failure(commitment: Commitment, detail: impl fmt::Display) -> Self {
        Self::ProofVerificationFailure {
            commitment,
            detail: detail.to_string(),
        }
    }

    pub(crate) fn root_mismatch(commitment: Commitment, detail: impl fmt::Display) -> Self {
        Self::StateRootMismatch {
            commitment,
            detail: detail.to_string(),
        }
    }
}

impl From<shared_types::CodecError> for VerifyError {
    fn from(err: shared_types::CodecError) -> Self {
        match err {
            shared_types::CodecError::UnknownTag(tag) => Self::UnknownAction(tag),
            other => Self::MalformedInput(other.to_string()),
        }
    }
}

/// Failure to derive a commitment from a proof.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// The MMR engine rejected the proof.
    #[error(transparent)]
    Mmr(#[from] MmrError),

    /// Entry index not below the entry count.
    #[error("Leaf index {index} out of range for {count} entries")]
    IndexOutOfRange {
        /// Claimed index
        index: u32,
        /// Committed entry count
        count: u32,
    },

    /// MMR size inconsistent with the entry count.
    #[error("MMR size {actual} does not match {count} entries (expected {expected})")]
    SizeMismatch {
        /// Committed entry count
        count: u32,
        /// Size implied by the count
        expected: u64,
        /// Size supplied
        actual: u64,
    },

    /// Appending would overflow the `u32` entry count.
    #[error("Entry count overflow at index {0}")]
    CountOverflow(u32),

    /// Empty tree witnessed with a nonzero root, size or proof.
    #[error("Empty tree requires zero root, zero size and an empty proof")]
    NonEmptyTree,

    /// Recomputed commitment differs from the expected one.
    #[error("Recomputed commitment does not match")]
    Mismatch,
}

/// Invalid verifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(String),

    /// Config written for another version.
    #[error("Unsupported config version {found}, expected {supported}")]
    UnsupportedVersion {
        /// Version in the config
        found: u32,
        /// Version this build understands
        supported: u32,
    },

    /// Proof limit above what the engine accepts.
    #[error("max_proof_items {configured} exceeds engine limit {max}")]
    ProofLimitTooHigh {
        /// Configured limit
        configured: usize,
        /// Engine limit
        max: usize,
    },
}
