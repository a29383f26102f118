//! # Shared Fixtures
//!
//! Honest rollup histories built with `RollupLedger`, plus tracing setup.

use rand::Rng;
use rv_02_state_transition::{RollupLedger, TransitionInput, VerifierConfig};
use shared_crypto::Secp256k1KeyPair;
use shared_types::{PubkeyHash, Transaction};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initial settlement cell capacity.
pub const GENESIS_CAPACITY: u64 = 100_000;

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Random owner identity.
pub fn random_pubkey_hash() -> PubkeyHash {
    rand::thread_rng().gen()
}

/// Random transaction from `account_index`.
pub fn random_transaction(account_index: u32) -> Transaction {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(0..64);
    Transaction {
        account_index,
        fee: rng.gen_range(1..100),
        nonce: rng.gen(),
        args: (0..len).map(|_| rng.gen()).collect(),
        signature: [0u8; 65],
    }
}

/// A ledger with one aggregator at index 0 and `users` plain accounts.
pub struct Rollup {
    /// Aggregator-side state.
    pub ledger: RollupLedger,
    /// Aggregator signing key.
    pub aggregator_key: Secp256k1KeyPair,
    /// Every transition applied so far, oldest first.
    pub history: Vec<TransitionInput>,
}

impl Rollup {
    /// Aggregator plus `users` accounts, all under the default config.
    pub fn new(users: u32) -> Self {
        let config = VerifierConfig::default();
        let aggregator_key = Secp256k1KeyPair::generate();
        let mut ledger = RollupLedger::new(GENESIS_CAPACITY);
        let mut history = Vec::new();

        let aggregator_pkh = aggregator_key
            .pubkey_hash()
            .expect("fresh key has a public key");
        history.push(
            ledger
                .register(aggregator_pkh, config.aggregator_required_balance, true)
                .expect("register aggregator"),
        );
        for _ in 0..users {
            history.push(
                ledger
                    .register(random_pubkey_hash(), config.new_account_required_balance, false)
                    .expect("register user"),
            );
        }

        debug!(users, capacity = GENESIS_CAPACITY, "rollup fixture registered");
        Self {
            ledger,
            aggregator_key,
            history,
        }
    }

    /// Apply a deposit and record it.
    pub fn deposit(&mut self, index: u32, amount: u64) -> TransitionInput {
        let input = self.ledger.deposit(index, amount).expect("deposit");
        self.history.push(input.clone());
        input
    }

    /// Apply a block of `tx_count` random transactions and record it.
    pub fn submit_block(&mut self, tx_count: usize) -> TransitionInput {
        let users = self.ledger.account_count();
        let transactions = (0..tx_count)
            .map(|i| random_transaction(i as u32 % users))
            .collect();
        let input = self
            .ledger
            .submit_block(0, transactions, vec![], &self.aggregator_key)
            .expect("submit block");
        self.history.push(input.clone());
        input
    }
}
