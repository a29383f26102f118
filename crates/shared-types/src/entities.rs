//! # Core Domain Entities
//!
//! Defines the rollup entities committed into global state.
//!
//! ## Clusters
//!
//! - **Commitments**: `GlobalState`, `Hash`
//! - **Accounts**: `AccountEntry`, `PubkeyHash`
//! - **Blocks**: `AggregatorBlock`, `Transaction`
//! - **Host**: `CapacityChange`
//!
//! Every entity has a fixed binary layout produced by [`crate::codec`].
//! Hashes of these layouts are what the MMR commitments bind to, so field
//! order is part of the consensus format.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

// =============================================================================
// CLUSTER A: COMMITMENTS
// =============================================================================

/// A 32-byte BLAKE2b-256 digest.
pub type Hash = [u8; 32];

/// The all-zero hash, committed by an empty tree.
pub const ZERO_HASH: Hash = [0u8; 32];

/// First 20 bytes of the BLAKE2b-256 digest of a compressed public key.
pub type PubkeyHash = [u8; 20];

/// A 65-byte recoverable secp256k1 signature (`r ‖ s ‖ recovery_id`).
pub type Signature = [u8; 65];

/// Size of a signature in bytes.
pub const SIGNATURE_SIZE: usize = 65;

/// Encoded size of [`GlobalState`].
pub const GLOBAL_STATE_SIZE: usize = 64;

/// Encoded size of [`AccountEntry`].
pub const ACCOUNT_ENTRY_SIZE: usize = 37;

/// Encoded size of [`AggregatorBlock`].
pub const AGGREGATOR_BLOCK_SIZE: usize = 165;

/// On-chain commitment pair.
///
/// Both roots are counted roots (`H(count ‖ mmr_root)`), or all zeros while
/// the corresponding tree is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GlobalState {
    /// Commitment over all registered accounts.
    pub account_root: Hash,
    /// Commitment over all submitted aggregator blocks.
    pub block_root: Hash,
}

impl GlobalState {
    /// State with both trees empty.
    pub const fn empty() -> Self {
        Self {
            account_root: ZERO_HASH,
            block_root: ZERO_HASH,
        }
    }

    /// Returns a copy with `account_root` replaced.
    pub fn with_account_root(mut self, account_root: Hash) -> Self {
        self.account_root = account_root;
        self
    }

    /// Returns a copy with `block_root` replaced.
    pub fn with_block_root(mut self, block_root: Hash) -> Self {
        self.block_root = block_root;
        self
    }
}

// =============================================================================
// CLUSTER B: ACCOUNTS
// =============================================================================

/// A leaf of the account MMR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccountEntry {
    /// Dense leaf index, assigned in registration order.
    pub index: u32,
    /// Owner identity.
    pub pubkey_hash: PubkeyHash,
    /// Incremented by every balance-changing action.
    pub nonce: u32,
    /// Locked value credited to this account.
    pub balance: u64,
    /// Whether the account may submit blocks.
    pub is_aggregator: bool,
}

impl AccountEntry {
    /// Create a fresh entry with nonce 0.
    pub fn new(index: u32, pubkey_hash: PubkeyHash, balance: u64, is_aggregator: bool) -> Self {
        Self {
            index,
            pubkey_hash,
            nonce: 0,
            balance,
            is_aggregator,
        }
    }
}

// =============================================================================
// CLUSTER C: BLOCKS
// =============================================================================

/// A rollup transaction as carried inside a submitted block.
///
/// The verifier never executes transactions; it only commits to their hashes
/// through the block's `tx_root`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sending account index.
    pub account_index: u32,
    /// Fee paid to the aggregator.
    pub fee: u32,
    /// Sender nonce.
    pub nonce: u32,
    /// Opaque call arguments.
    pub args: Vec<u8>,
    /// Sender's recoverable signature.
    #[serde_as(as = "[_; 65]")]
    pub signature: Signature,
}

/// A block submitted by an aggregator and appended to the block MMR.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorBlock {
    /// Height of the block; equals the number of blocks before it.
    pub number: u32,
    /// Account commitment the block was built on.
    pub old_account_root: Hash,
    /// Account commitment after applying the block.
    pub new_account_root: Hash,
    /// Complete binary Merkle root over the transaction hashes.
    pub tx_root: Hash,
    /// Aggregator signature over the block with this field zeroed.
    #[serde_as(as = "[_; 65]")]
    pub signature: Signature,
}

impl AggregatorBlock {
    /// Returns a copy with the signature zeroed; its hash is the signing message.
    pub fn unsigned(&self) -> Self {
        Self {
            signature: [0u8; SIGNATURE_SIZE],
            ..*self
        }
    }
}

impl Default for AggregatorBlock {
    fn default() -> Self {
        Self {
            number: 0,
            old_account_root: ZERO_HASH,
            new_account_root: ZERO_HASH,
            tx_root: ZERO_HASH,
            signature: [0u8; SIGNATURE_SIZE],
        }
    }
}

// =============================================================================
// CLUSTER D: HOST
// =============================================================================

/// Value locked by the settlement cell before and after the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapacityChange {
    /// Capacity of the input cell.
    pub old: u64,
    /// Capacity of the output cell.
    pub new: u64,
}

impl CapacityChange {
    /// Create a capacity pair.
    pub const fn new(old: u64, new: u64) -> Self {
        Self { old, new }
    }

    /// Capacity pair for actions that move no value.
    pub const fn unchanged(capacity: u64) -> Self {
        Self {
            old: capacity,
            new: capacity,
        }
    }

    /// Amount added by the transition, if capacity strictly increased.
    pub fn increase(&self) -> Option<u64> {
        match self.new.checked_sub(self.old) {
            Some(0) | None => None,
            Some(amount) => Some(amount),
        }
    }

    /// Whether no value moved.
    pub fn is_unchanged(&self) -> bool {
        self.old == self.new
    }
}
