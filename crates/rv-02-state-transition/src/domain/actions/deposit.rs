//! # Deposit
//!
//! Credits the capacity increase of the settlement cell to one existing
//! account. The same proof authenticates the old entry against the old
//! root and the new entry against the new root: only the leaf changes.

use shared_types::{Deposit, GlobalState};
use tracing::debug;

use super::{require_block_root_unchanged, VerifyContext};
use crate::adapters::Blake2bMerger;
use crate::algorithms::{compute_existing_commitment, verify_existing_commitment};
use crate::domain::errors::{Commitment, VerifyError};
use crate::domain::hashes::entry_hash;
use crate::domain::invariants::{check_deposit_transition, check_proof_len};

/// Verify a `Deposit` transition.
pub fn verify_deposit(
    ctx: &VerifyContext<'_>,
    old: &GlobalState,
    new: &GlobalState,
    payload: &Deposit,
) -> Result<(), VerifyError> {
    check_proof_len("deposit proof", payload.proof.len(), ctx.config.max_proof_items)?;

    let amount = ctx
        .capacities
        .increase()
        .ok_or(VerifyError::CapacityViolation {
            old: ctx.capacities.old,
            new: ctx.capacities.new,
        })?;

    let (old_entry, new_entry) = (&payload.old_entry, &payload.new_entry);
    check_deposit_transition(old_entry, new_entry, amount)
        .map_err(VerifyError::EntryTransitionViolation)?;

    verify_existing_commitment(
        &Blake2bMerger,
        &old.account_root,
        entry_hash(old_entry),
        old_entry.index,
        payload.count,
        payload.mmr_size,
        &payload.proof,
    )
    .map_err(|e| VerifyError::proof_failure(Commitment::AccountRoot, e))?;
    debug!(index = old_entry.index, amount, "deposit: old entry authenticated");

    let updated = compute_existing_commitment(
        &Blake2bMerger,
        entry_hash(new_entry),
        new_entry.index,
        payload.count,
        payload.mmr_size,
        &payload.proof,
    )
    .map_err(|e| VerifyError::root_mismatch(Commitment::AccountRoot, e))?;
    if updated != new.account_root {
        return Err(VerifyError::root_mismatch(
            Commitment::AccountRoot,
            "updated entry does not produce the new account root",
        ));
    }

    require_block_root_unchanged(old, new)
}
