//! # Register
//!
//! Appends one account entry at the next free index. The witness carries
//! the proof of the previous last entry, which authenticates the old
//! account root and yields the new one in a single pass.

use shared_types::{GlobalState, Register};
use tracing::debug;

use super::{require_block_root_unchanged, VerifyContext};
use crate::adapters::Blake2bMerger;
use crate::algorithms::{
    compute_appended_commitment, verify_empty_commitment, verify_existing_commitment,
};
use crate::domain::errors::{Commitment, VerifyError};
use crate::domain::hashes::entry_hash;
use crate::domain::invariants::{check_aggregator_eligibility, check_new_entry, check_proof_len};

/// Verify a `Register` transition.
pub fn verify_register(
    ctx: &VerifyContext<'_>,
    old: &GlobalState,
    new: &GlobalState,
    payload: &Register,
) -> Result<(), VerifyError> {
    let config = ctx.config;
    check_proof_len("register proof", payload.proof.len(), config.max_proof_items)?;

    ctx.require_unchanged_capacity()?;

    let entry = &payload.new_entry;
    check_new_entry(entry, config.new_account_required_balance)
        .map_err(VerifyError::EntryTransitionViolation)?;
    if entry.is_aggregator {
        check_aggregator_eligibility(entry, config.aggregator_required_balance)
            .map_err(VerifyError::AggregatorIneligible)?;
    }

    let index = entry.index;
    let authenticated = match index {
        0 => verify_empty_commitment(&old.account_root, payload.mmr_size, &payload.proof),
        _ => verify_existing_commitment(
            &Blake2bMerger,
            &old.account_root,
            payload.last_entry_hash,
            index - 1,
            index,
            payload.mmr_size,
            &payload.proof,
        ),
    };
    authenticated.map_err(|e| VerifyError::proof_failure(Commitment::AccountRoot, e))?;
    debug!(index, mmr_size = payload.mmr_size, "register: old account root authenticated");

    let appended = compute_appended_commitment(
        &Blake2bMerger,
        payload.last_entry_hash,
        entry_hash(entry),
        index,
        payload.mmr_size,
        &payload.proof,
    )
    .map_err(|e| VerifyError::root_mismatch(Commitment::AccountRoot, e))?;
    if appended != new.account_root {
        return Err(VerifyError::root_mismatch(
            Commitment::AccountRoot,
            "appended entry does not produce the new account root",
        ));
    }

    require_block_root_unchanged(old, new)
}
