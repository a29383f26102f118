//! # Action Verifiers
//!
//! One verifier per action. Each checks its rules in a fixed order and
//! stops at the first violation.
//!
//! | Action | Capacity | Account root | Block root |
//! |--------|----------|--------------|------------|
//! | Register | unchanged | one entry appended | unchanged |
//! | Deposit | strictly increases | one entry replaced | unchanged |
//! | SubmitBlock | unchanged | as asserted by the block | one block appended |

mod deposit;
mod register;
mod submit_block;

pub use deposit::verify_deposit;
pub use register::verify_register;
pub use submit_block::verify_submit_block;

use shared_types::{Action, CapacityChange, GlobalState};

use crate::config::VerifierConfig;
use crate::ports::SignatureVerifier;

use super::errors::VerifyError;

/// Everything a verifier reads besides the two states and the witness.
#[derive(Clone, Copy)]
pub struct VerifyContext<'a> {
    /// Thresholds and limits.
    pub config: &'a VerifierConfig,
    /// Settlement cell capacity before and after.
    pub capacities: CapacityChange,
    /// Block signature scheme.
    pub signatures: &'a dyn SignatureVerifier,
}

impl<'a> VerifyContext<'a> {
    /// Create a context.
    pub fn new(
        config: &'a VerifierConfig,
        capacities: CapacityChange,
        signatures: &'a dyn SignatureVerifier,
    ) -> Self {
        Self {
            config,
            capacities,
            signatures,
        }
    }

    /// Reject unless capacity is unchanged.
    pub(crate) fn require_unchanged_capacity(&self) -> Result<(), VerifyError> {
        if !self.capacities.is_unchanged() {
            return Err(VerifyError::CapacityViolation {
                old: self.capacities.old,
                new: self.capacities.new,
            });
        }
        Ok(())
    }
}

/// A fully decoded transition: both states, capacities and the witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionInput {
    /// State before.
    pub old_state: GlobalState,
    /// State after.
    pub new_state: GlobalState,
    /// Settlement cell capacity before and after.
    pub capacities: CapacityChange,
    /// The witness action.
    pub action: Action,
}

/// Route an action to its verifier.
pub fn verify_action(
    ctx: &VerifyContext<'_>,
    old: &GlobalState,
    new: &GlobalState,
    action: &Action,
) -> Result<(), VerifyError> {
    match action {
        Action::Register(payload) => verify_register(ctx, old, new, payload),
        Action::Deposit(payload) => verify_deposit(ctx, old, new, payload),
        Action::SubmitBlock(payload) => verify_submit_block(ctx, old, new, payload),
    }
}

/// Reject a block root that changed under an account-only action.
pub(crate) fn require_block_root_unchanged(
    old: &GlobalState,
    new: &GlobalState,
) -> Result<(), VerifyError> {
    if old.block_root != new.block_root {
        return Err(VerifyError::root_mismatch(
            super::errors::Commitment::BlockRoot,
            "block root changed by an account action",
        ));
    }
    Ok(())
}
