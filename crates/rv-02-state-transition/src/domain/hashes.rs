//! # Leaf Hashes
//!
//! Hashes of canonical entity bytes. These are the leaves committed into
//! the account and block MMRs and the transaction tree.

use shared_crypto::blake2b_256;
use shared_types::{AccountEntry, AggregatorBlock, CanonicalBytes, Hash, Transaction};

/// Leaf hash of an account entry.
pub fn entry_hash(entry: &AccountEntry) -> Hash {
    blake2b_256(&entry.to_canonical_bytes())
}

/// Leaf hash of a block, signature included.
pub fn block_hash(block: &AggregatorBlock) -> Hash {
    blake2b_256(&block.to_canonical_bytes())
}

/// Message an aggregator signs: the block hash with the signature zeroed.
pub fn block_signing_message(block: &AggregatorBlock) -> Hash {
    blake2b_256(&block.unsigned().to_canonical_bytes())
}

/// Hash of a transaction.
pub fn tx_hash(tx: &Transaction) -> Hash {
    blake2b_256(&tx.to_canonical_bytes())
}
