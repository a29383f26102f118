//! # SubmitBlock
//!
//! Appends a signed aggregator block to the block tree and moves the
//! account root to the one the block asserts.
//!
//! Check order:
//!
//! 1. capacity unchanged
//! 2. submitter is an eligible aggregator and a member of the old tree
//! 3. block roots bind to the old and new account roots
//! 4. block signature recovers to the submitter
//! 5. `tx_root` commits to the carried transactions
//! 6. block number continues the block tree
//!
//! Any failure in step 6 is a root mismatch: a skipped or replayed block
//! number cannot produce the claimed block root.

use shared_types::{GlobalState, SubmitBlock};
use tracing::debug;

use super::VerifyContext;
use crate::adapters::Blake2bMerger;
use crate::algorithms::{
    compute_appended_commitment, transactions_root, verify_empty_commitment,
    verify_existing_commitment,
};
use crate::domain::errors::{Commitment, CommitmentError, VerifyError};
use crate::domain::hashes::{block_hash, block_signing_message, entry_hash};
use crate::domain::invariants::{check_aggregator_eligibility, check_proof_len};

/// Verify a `SubmitBlock` transition.
pub fn verify_submit_block(
    ctx: &VerifyContext<'_>,
    old: &GlobalState,
    new: &GlobalState,
    payload: &SubmitBlock,
) -> Result<(), VerifyError> {
    let config = ctx.config;
    check_proof_len("account proof", payload.account_proof.len(), config.max_proof_items)?;
    check_proof_len("block proof", payload.block_proof.len(), config.max_proof_items)?;

    ctx.require_unchanged_capacity()?;

    let aggregator = &payload.aggregator;
    check_aggregator_eligibility(aggregator, config.aggregator_required_balance)
        .map_err(VerifyError::AggregatorIneligible)?;
    verify_existing_commitment(
        &Blake2bMerger,
        &old.account_root,
        entry_hash(aggregator),
        aggregator.index,
        payload.account_count,
        payload.account_mmr_size,
        &payload.account_proof,
    )
    .map_err(|e| VerifyError::proof_failure(Commitment::AccountRoot, e))?;

    let block = &payload.block;
    if block.old_account_root != old.account_root {
        return Err(VerifyError::root_mismatch(
            Commitment::AccountRoot,
            "block was built on a different account root",
        ));
    }
    if block.new_account_root != new.account_root {
        return Err(VerifyError::root_mismatch(
            Commitment::AccountRoot,
            "block asserts a different new account root",
        ));
    }

    ctx.signatures
        .verify(
            &block.signature,
            &block_signing_message(block),
            &aggregator.pubkey_hash,
        )
        .map_err(VerifyError::SignatureInvalid)?;
    debug!(
        number = block.number,
        aggregator = aggregator.index,
        "submit_block: signature accepted"
    );

    let tx_root = transactions_root(&Blake2bMerger, &payload.transactions);
    if tx_root != block.tx_root {
        return Err(VerifyError::proof_failure(
            Commitment::TxRoot,
            format!("{} transactions do not hash to tx_root", payload.transactions.len()),
        ));
    }

    verify_block_custody(old, new, payload)
}

/// Authenticate the old block tree and check the appended one.
fn verify_block_custody(
    old: &GlobalState,
    new: &GlobalState,
    payload: &SubmitBlock,
) -> Result<(), VerifyError> {
    let number = payload.block.number;
    let mismatch = |e: CommitmentError| VerifyError::root_mismatch(Commitment::BlockRoot, e);

    match number {
        0 => verify_empty_commitment(&old.block_root, payload.block_mmr_size, &payload.block_proof),
        _ => verify_existing_commitment(
            &Blake2bMerger,
            &old.block_root,
            payload.last_block_hash,
            number - 1,
            number,
            payload.block_mmr_size,
            &payload.block_proof,
        ),
    }
    .map_err(mismatch)?;

    let appended = compute_appended_commitment(
        &Blake2bMerger,
        payload.last_block_hash,
        block_hash(&payload.block),
        number,
        payload.block_mmr_size,
        &payload.block_proof,
    )
    .map_err(mismatch)?;
    if appended != new.block_root {
        return Err(VerifyError::root_mismatch(
            Commitment::BlockRoot,
            "appended block does not produce the new block root",
        ));
    }
    debug!(number, "submit_block: block appended");
    Ok(())
}
