//! # Domain Invariants
//!
//! Business rules on account entries that every verifier shares.

use shared_types::AccountEntry;

use super::errors::{EntryField, Ineligibility, VerifyError};

/// Version of the constant set below.
pub const CONFIG_VERSION: u32 = 1;

/// Minimum balance of an aggregator entry.
pub const AGGREGATOR_REQUIRED_BALANCE: u64 = 2000;

/// Minimum balance of a newly registered account.
pub const NEW_ACCOUNT_REQUIRED_BALANCE: u64 = 1000;

/// Maximum items in a single proof.
pub const MAX_PROOF_ITEMS: usize = rv_01_mmr::MAX_PROOF_ITEMS;

/// Maximum witness size in bytes.
pub const MAX_WITNESS_SIZE: usize = 32 * 1024;

/// Invariant: only flagged entries at or above the threshold aggregate.
pub fn check_aggregator_eligibility(
    entry: &AccountEntry,
    required_balance: u64,
) -> Result<(), Ineligibility> {
    if !entry.is_aggregator {
        return Err(Ineligibility::NotAggregator);
    }
    if entry.balance < required_balance {
        return Err(Ineligibility::InsufficientBalance {
            balance: entry.balance,
            required: required_balance,
        });
    }
    Ok(())
}

/// Invariant: a registered entry starts fresh and funded.
pub fn check_new_entry(entry: &AccountEntry, required_balance: u64) -> Result<(), EntryField> {
    if entry.nonce != 0 {
        return Err(EntryField::Nonce);
    }
    if entry.balance < required_balance {
        return Err(EntryField::Balance);
    }
    Ok(())
}

/// Invariant: a deposit bumps the nonce and credits exactly `amount`.
///
/// Identity fields never change; overflow of either counter rejects.
pub fn check_deposit_transition(
    old: &AccountEntry,
    new: &AccountEntry,
    amount: u64,
) -> Result<(), EntryField> {
    if new.index != old.index {
        return Err(EntryField::Index);
    }
    if new.pubkey_hash != old.pubkey_hash {
        return Err(EntryField::PubkeyHash);
    }
    if new.is_aggregator != old.is_aggregator {
        return Err(EntryField::IsAggregator);
    }
    if old.nonce.checked_add(1) != Some(new.nonce) {
        return Err(EntryField::Nonce);
    }
    if old.balance.checked_add(amount) != Some(new.balance) {
        return Err(EntryField::Balance);
    }
    Ok(())
}

/// Invariant: proof vectors stay within the configured bound.
///
/// The bound never exceeds [`MAX_PROOF_ITEMS`], whatever `max` says, so an
/// overlong proof is always malformed input rather than an engine error.
pub fn check_proof_len(name: &str, len: usize, max: usize) -> Result<(), VerifyError> {
    let max = max.min(MAX_PROOF_ITEMS);
    if len > max {
        return Err(VerifyError::MalformedInput(format!(
            "{} has {} items, limit is {}",
            name, len, max
        )));
    }
    Ok(())
}
