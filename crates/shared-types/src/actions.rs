//! # Actions
//!
//! The witness of every state transition is exactly one [`Action`].
//! The set is closed: an encoded tag outside [`ActionTag`] is rejected
//! before the payload is decoded.

use serde::{Deserialize, Serialize};

use crate::entities::{AccountEntry, AggregatorBlock, Hash, Transaction};

/// Discriminant of an encoded [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ActionTag {
    /// Append a new account.
    Register = 0,
    /// Credit locked value to an existing account.
    Deposit = 1,
    /// Append an aggregator block.
    SubmitBlock = 2,
}

impl ActionTag {
    /// Map a raw tag to a known action.
    pub fn from_u32(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::Register),
            1 => Some(Self::Deposit),
            2 => Some(Self::SubmitBlock),
            _ => None,
        }
    }

    /// Human-readable action name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Deposit => "deposit",
            Self::SubmitBlock => "submit_block",
        }
    }
}

/// Register a new account at the next free index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    /// MMR size of the account tree before the append.
    pub mmr_size: u64,
    /// Proof of the previous last entry; empty for index 0.
    pub proof: Vec<Hash>,
    /// The entry being appended.
    pub new_entry: AccountEntry,
    /// Leaf hash of the entry at `new_entry.index - 1`.
    pub last_entry_hash: Hash,
}

/// Credit the capacity increase to an existing account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    /// MMR size of the account tree.
    pub mmr_size: u64,
    /// Proof of the entry at its index.
    pub proof: Vec<Hash>,
    /// Number of registered accounts.
    pub count: u32,
    /// Entry before the deposit.
    pub old_entry: AccountEntry,
    /// Entry after the deposit.
    pub new_entry: AccountEntry,
}

/// Append an aggregator block to the block tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBlock {
    /// The signed block.
    pub block: AggregatorBlock,
    /// The submitting aggregator's account entry.
    pub aggregator: AccountEntry,
    /// Number of registered accounts.
    pub account_count: u32,
    /// MMR size of the account tree.
    pub account_mmr_size: u64,
    /// Proof of `aggregator` in the account tree.
    pub account_proof: Vec<Hash>,
    /// Transactions committed by `block.tx_root`.
    pub transactions: Vec<Transaction>,
    /// MMR size of the block tree before the append.
    pub block_mmr_size: u64,
    /// Proof of the previous block; empty for block 0.
    pub block_proof: Vec<Hash>,
    /// Hash of block `number - 1`; ignored for block 0.
    pub last_block_hash: Hash,
}

/// A state-changing action carried by the witness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Tag 0.
    Register(Register),
    /// Tag 1.
    Deposit(Deposit),
    /// Tag 2.
    SubmitBlock(SubmitBlock),
}

impl Action {
    /// Discriminant of this action.
    pub fn tag(&self) -> ActionTag {
        match self {
            Self::Register(_) => ActionTag::Register,
            Self::Deposit(_) => ActionTag::Deposit,
            Self::SubmitBlock(_) => ActionTag::SubmitBlock,
        }
    }
}

impl From<Register> for Action {
    fn from(payload: Register) -> Self {
        Self::Register(payload)
    }
}

impl From<Deposit> for Action {
    fn from(payload: Deposit) -> Self {
        Self::Deposit(payload)
    }
}

impl From<SubmitBlock> for Action {
    fn from(payload: SubmitBlock) -> Self {
        Self::SubmitBlock(payload)
    }
}
