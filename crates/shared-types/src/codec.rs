//! # Canonical Codec
//!
//! bincode with fixed-width little-endian integers. Vectors carry a `u64`
//! length prefix, arrays none, enum variants a `u32` tag.
//!
//! Decoding is always size-limited and rejects trailing bytes.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::actions::{Action, ActionTag};
use crate::entities::{AccountEntry, AggregatorBlock, GlobalState, Transaction, GLOBAL_STATE_SIZE};
use crate::errors::CodecError;

fn options(limit: u64) -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .with_limit(limit)
        .reject_trailing_bytes()
}

/// Encode any entity into its canonical bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    options(u64::MAX)
        .serialize(value)
        .map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode an entity from exactly `bytes`, reading at most `limit` bytes.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], limit: u64) -> Result<T, CodecError> {
    if bytes.len() as u64 > limit {
        return Err(CodecError::TooLarge {
            size: bytes.len(),
            limit,
        });
    }
    options(limit)
        .deserialize(bytes)
        .map_err(|e| CodecError::Decode(e.to_string()))
}

/// Decode a 64-byte global state blob.
pub fn decode_global_state(bytes: &[u8]) -> Result<GlobalState, CodecError> {
    if bytes.len() != GLOBAL_STATE_SIZE {
        return Err(CodecError::InvalidLength {
            expected: GLOBAL_STATE_SIZE,
            actual: bytes.len(),
        });
    }
    decode(bytes, GLOBAL_STATE_SIZE as u64)
}

/// Read the action tag without decoding the payload.
pub fn peek_action_tag(bytes: &[u8]) -> Result<ActionTag, CodecError> {
    let raw: [u8; 4] = bytes
        .get(..4)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or(CodecError::InvalidLength {
            expected: 4,
            actual: bytes.len(),
        })?;
    let tag = u32::from_le_bytes(raw);
    ActionTag::from_u32(tag).ok_or(CodecError::UnknownTag(tag))
}

/// Decode a witness into an [`Action`], checking the tag first.
pub fn decode_action(bytes: &[u8], limit: u64) -> Result<Action, CodecError> {
    peek_action_tag(bytes)?;
    decode(bytes, limit)
}

// =============================================================================
// CANONICAL BYTES
// =============================================================================

/// Entities whose canonical encoding cannot fail.
///
/// Fixed-layout records are written field by field; the output is identical
/// to [`encode`] and is what leaf hashes are computed over.
pub trait CanonicalBytes {
    /// Canonical encoding.
    fn to_canonical_bytes(&self) -> Vec<u8>;
}

impl CanonicalBytes for GlobalState {
    fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(GLOBAL_STATE_SIZE);
        out.extend_from_slice(&self.account_root);
        out.extend_from_slice(&self.block_root);
        out
    }
}

impl CanonicalBytes for AccountEntry {
    fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::entities::ACCOUNT_ENTRY_SIZE);
        out.extend_from_slice(&self.index.to_le_bytes());
        out.extend_from_slice(&self.pubkey_hash);
        out.extend_from_slice(&self.nonce.to_le_bytes());
        out.extend_from_slice(&self.balance.to_le_bytes());
        out.push(u8::from(self.is_aggregator));
        out
    }
}

impl CanonicalBytes for AggregatorBlock {
    fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::entities::AGGREGATOR_BLOCK_SIZE);
        out.extend_from_slice(&self.number.to_le_bytes());
        out.extend_from_slice(&self.old_account_root);
        out.extend_from_slice(&self.new_account_root);
        out.extend_from_slice(&self.tx_root);
        out.extend_from_slice(&self.signature);
        out
    }
}

impl CanonicalBytes for Transaction {
    fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(20 + self.args.len() + self.signature.len());
        out.extend_from_slice(&self.account_index.to_le_bytes());
        out.extend_from_slice(&self.fee.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
        out.extend_from_slice(&(self.args.len() as u64).to_le_bytes());
        out.extend_from_slice(&self.args);
        out.extend_from_slice(&self.signature);
        out
    }
}
