//! # Rollup Ledger
//!
//! Aggregator-side state: every account entry and block hash, kept in two
//! MMRs. Each operation applies one action and returns the transition a
//! verifier must accept, witness included.
//!
//! The ledger does not police the rules the verifier enforces (balances,
//! eligibility, signer identity); it records whatever it is told so that
//! rejected transitions can be built as easily as accepted ones.

use rv_01_mmr::{MmrError, MmrStore};
use shared_crypto::{CryptoError, Secp256k1KeyPair};
use shared_types::{
    AccountEntry, Action, AggregatorBlock, CapacityChange, Deposit, GlobalState, Hash, PubkeyHash,
    Register, SubmitBlock, Transaction, ZERO_HASH,
};
use thiserror::Error;
use tracing::debug;

use crate::adapters::Blake2bMerger;
use crate::algorithms::{commitment_of, transactions_root};
use crate::domain::{block_hash, block_signing_message, entry_hash, TransitionInput};

/// Errors from building a transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account at this index.
    #[error("Unknown account index {0}")]
    UnknownAccount(u32),

    /// Entry or block count would leave `u32`.
    #[error("{0} count limit reached")]
    CountLimit(&'static str),

    /// A counter would overflow.
    #[error("{0} overflow")]
    Overflow(&'static str),

    /// Deposits must add value.
    #[error("Deposit amount must be nonzero")]
    ZeroDeposit,

    /// The underlying MMR failed.
    #[error(transparent)]
    Mmr(#[from] MmrError),

    /// Block signing failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Account and block trees with the settlement cell capacity.
#[derive(Debug, Clone)]
pub struct RollupLedger {
    entries: Vec<AccountEntry>,
    accounts: MmrStore<Blake2bMerger>,
    blocks: MmrStore<Blake2bMerger>,
    capacity: u64,
}

impl RollupLedger {
    /// Empty ledger whose settlement cell holds `capacity`.
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: Vec::new(),
            accounts: MmrStore::new(Blake2bMerger),
            blocks: MmrStore::new(Blake2bMerger),
            capacity,
        }
    }

    /// Current committed state.
    pub fn state(&self) -> GlobalState {
        GlobalState {
            account_root: commitment_of(self.account_count(), &self.accounts.root()),
            block_root: commitment_of(self.block_count(), &self.blocks.root()),
        }
    }

    /// Current settlement cell capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Number of submitted blocks.
    pub fn block_count(&self) -> u32 {
        self.blocks.leaf_count() as u32
    }

    /// Entry at `index`.
    pub fn entry(&self, index: u32) -> Option<AccountEntry> {
        self.entries.get(index as usize).copied()
    }

    /// Hash of the last submitted block.
    pub fn last_block_hash(&self) -> Option<Hash> {
        self.blocks
            .leaf_count()
            .checked_sub(1)
            .and_then(|last| self.blocks.leaf(last))
    }

    /// Register a new account at the next free index.
    pub fn register(
        &mut self,
        pubkey_hash: PubkeyHash,
        balance: u64,
        is_aggregator: bool,
    ) -> Result<TransitionInput, LedgerError> {
        let index = u32::try_from(self.entries.len())
            .ok()
            .filter(|index| *index < u32::MAX)
            .ok_or(LedgerError::CountLimit("account"))?;
        let new_entry = AccountEntry::new(index, pubkey_hash, balance, is_aggregator);

        let old_state = self.state();
        let (mmr_size, proof, last_entry_hash) = match self.entries.last() {
            None => (0, Vec::new(), ZERO_HASH),
            Some(last) => {
                let proof = self.accounts.gen_append_proof()?;
                (proof.mmr_size, proof.items, entry_hash(last))
            }
        };

        self.accounts.append(entry_hash(&new_entry));
        self.entries.push(new_entry);
        debug!(index, "ledger: account registered");

        Ok(TransitionInput {
            old_state,
            new_state: self.state(),
            capacities: CapacityChange::unchanged(self.capacity),
            action: Action::Register(Register {
                mmr_size,
                proof,
                new_entry,
                last_entry_hash,
            }),
        })
    }

    /// Credit `amount` to account `index`, growing the cell capacity by the
    /// same amount.
    pub fn deposit(&mut self, index: u32, amount: u64) -> Result<TransitionInput, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroDeposit);
        }
        let old_entry = self.entry(index).ok_or(LedgerError::UnknownAccount(index))?;
        let new_capacity = self
            .capacity
            .checked_add(amount)
            .ok_or(LedgerError::Overflow("capacity"))?;
        let new_entry = AccountEntry {
            nonce: old_entry
                .nonce
                .checked_add(1)
                .ok_or(LedgerError::Overflow("nonce"))?,
            balance: old_entry
                .balance
                .checked_add(amount)
                .ok_or(LedgerError::Overflow("balance"))?,
            ..old_entry
        };

        let old_state = self.state();
        let proof = self.accounts.gen_proof(u64::from(index))?;
        self.accounts.update_leaf(u64::from(index), entry_hash(&new_entry))?;
        self.entries[index as usize] = new_entry;
        let capacities = CapacityChange::new(self.capacity, new_capacity);
        self.capacity = new_capacity;
        debug!(index, amount, "ledger: deposit credited");

        Ok(TransitionInput {
            old_state,
            new_state: self.state(),
            capacities,
            action: Action::Deposit(Deposit {
                mmr_size: proof.mmr_size,
                proof: proof.items,
                count: self.account_count(),
                old_entry,
                new_entry,
            }),
        })
    }

    /// Submit a block of `transactions` from aggregator `aggregator_index`,
    /// replacing the given entries and signing with `signer`.
    pub fn submit_block(
        &mut self,
        aggregator_index: u32,
        transactions: Vec<Transaction>,
        updated_entries: Vec<AccountEntry>,
        signer: &Secp256k1KeyPair,
    ) -> Result<TransitionInput, LedgerError> {
        let aggregator = self
            .entry(aggregator_index)
            .ok_or(LedgerError::UnknownAccount(aggregator_index))?;
        let number = u32::try_from(self.blocks.leaf_count())
            .ok()
            .filter(|number| *number < u32::MAX)
            .ok_or(LedgerError::CountLimit("block"))?;

        let old_state = self.state();
        let account_proof = self.accounts.gen_proof(u64::from(aggregator_index))?;
        let (block_mmr_size, block_proof, last_block_hash) = match self.last_block_hash() {
            None => (0, Vec::new(), ZERO_HASH),
            Some(last) => {
                let proof = self.blocks.gen_append_proof()?;
                (proof.mmr_size, proof.items, last)
            }
        };

        // Stage account updates so a failure leaves the ledger untouched.
        let mut entries = self.entries.clone();
        let mut accounts = self.accounts.clone();
        for entry in updated_entries {
            let slot = entries
                .get_mut(entry.index as usize)
                .ok_or(LedgerError::UnknownAccount(entry.index))?;
            accounts.update_leaf(u64::from(entry.index), entry_hash(&entry))?;
            *slot = entry;
        }
        let new_account_root = commitment_of(entries.len() as u32, &accounts.root());

        let mut block = AggregatorBlock {
            number,
            old_account_root: old_state.account_root,
            new_account_root,
            tx_root: transactions_root(&Blake2bMerger, &transactions),
            ..AggregatorBlock::default()
        };
        block.signature = signer
            .sign_prehash(&block_signing_message(&block))?
            .into_bytes();

        self.entries = entries;
        self.accounts = accounts;
        self.blocks.append(block_hash(&block));
        debug!(number, aggregator = aggregator_index, "ledger: block submitted");

        Ok(TransitionInput {
            old_state,
            new_state: self.state(),
            capacities: CapacityChange::unchanged(self.capacity),
            action: Action::SubmitBlock(SubmitBlock {
                block,
                aggregator,
                account_count: self.account_count(),
                account_mmr_size: account_proof.mmr_size,
                account_proof: account_proof.items,
                transactions,
                block_mmr_size,
                block_proof,
                last_block_hash,
            }),
        })
    }
}
