//! # Replay and Impersonation
//!
//! Attacks that reuse valid material out of context:
//!
//! | Attack | Expected |
//! |--------|----------|
//! | Replay a register witness on a later state | -14 |
//! | Replay a deposit witness (double credit) | -14 |
//! | Resubmit an already appended block | -5 |
//! | Skip a block number | -5 |
//! | Sign a block with a non-aggregator key | -18 |
//! | Submit from a non-aggregator entry | -17 |
//! | Re-encode the recovery id (`v + 27`) under a new block root | -18 |

#[cfg(test)]
mod tests {
    use rv_02_state_transition::{
        block_hash, block_signing_message, compute_appended_commitment, Blake2bMerger,
        InMemoryHost, StateTransitionApi, StateTransitionService, TransitionInput,
        VerifierConfig,
    };
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::Action;

    use crate::fixtures::{init_tracing, random_pubkey_hash, Rollup};

    fn service() -> StateTransitionService {
        StateTransitionService::with_config(VerifierConfig::default())
    }

    fn run(input: &TransitionInput) -> i8 {
        let host = InMemoryHost::from_transition(input).unwrap();
        service().run(&host)
    }

    /// `stale` re-presented on top of the ledger's current state.
    fn replay_on(current: &TransitionInput, stale: &TransitionInput) -> TransitionInput {
        TransitionInput {
            old_state: current.new_state,
            new_state: stale.new_state,
            capacities: stale.capacities,
            action: stale.action.clone(),
        }
    }

    #[test]
    fn test_register_replay() {
        init_tracing();
        let mut rollup = Rollup::new(2);
        let stale = rollup.history[2].clone();
        let current = rollup
            .ledger
            .register(random_pubkey_hash(), 1000, false)
            .unwrap();
        assert_eq!(run(&replay_on(&current, &stale)), -14);
    }

    #[test]
    fn test_deposit_double_credit() {
        let mut rollup = Rollup::new(2);
        let first = rollup.deposit(1, 400);
        assert_eq!(run(&first), 0);

        // Same witness again: the old entry no longer authenticates.
        let mut again = replay_on(&first, &first);
        again.capacities.old = first.capacities.new;
        again.capacities.new = first.capacities.new + 400;
        assert_eq!(run(&again), -14);
    }

    #[test]
    fn test_block_resubmission() {
        let mut rollup = Rollup::new(1);
        let first = rollup.submit_block(2);
        let second = rollup.submit_block(2);
        assert_eq!(run(&second), 0);

        let replayed = replay_on(&second, &second);
        assert_eq!(run(&replayed), -5);

        let genesis_again = replay_on(&second, &first);
        assert_eq!(run(&genesis_again), -5);
    }

    #[test]
    fn test_skipped_block_number() {
        let mut rollup = Rollup::new(1);
        rollup.submit_block(1);
        let mut input = rollup.submit_block(1);

        if let Action::SubmitBlock(payload) = &mut input.action {
            payload.block.number += 1;
            let message = block_signing_message(&payload.block);
            payload.block.signature = rollup
                .aggregator_key
                .sign_prehash(&message)
                .unwrap()
                .into_bytes();
        }
        assert_eq!(run(&input), -5);
    }

    #[test]
    fn test_block_signed_by_stranger() {
        let mut rollup = Rollup::new(1);
        let stranger = Secp256k1KeyPair::generate();
        let input = rollup
            .ledger
            .submit_block(0, vec![], vec![], &stranger)
            .unwrap();
        assert_eq!(run(&input), -18);
    }

    #[test]
    fn test_block_from_plain_account() {
        let mut rollup = Rollup::new(0);
        let user_key = Secp256k1KeyPair::generate();
        let user = rollup
            .ledger
            .register(user_key.pubkey_hash().unwrap(), 5000, false)
            .unwrap();
        assert_eq!(run(&user), 0);

        let input = rollup
            .ledger
            .submit_block(1, vec![], vec![], &user_key)
            .unwrap();
        assert_eq!(run(&input), -17);
    }

    #[test]
    fn test_forged_block_promoting_user() {
        // Entry rewrites only land through a block the aggregator signed.
        let mut rollup = Rollup::new(1);
        let mut promoted = rollup.ledger.entry(1).unwrap();
        promoted.is_aggregator = true;
        promoted.balance = 1_000_000;
        let forger = Secp256k1KeyPair::generate();
        let input = rollup
            .ledger
            .submit_block(0, vec![], vec![promoted], &forger)
            .unwrap();
        assert_eq!(run(&input), -18);
    }

    #[test]
    fn test_recovery_id_alias_rejected() {
        let mut rollup = Rollup::new(1);
        rollup.submit_block(1);
        let honest = rollup.submit_block(2);
        assert_eq!(run(&honest), 0);

        // Same signed content, second encoding of v, fresh block root to match.
        let mut aliased = honest.clone();
        if let Action::SubmitBlock(payload) = &mut aliased.action {
            payload.block.signature[64] += 27;
            aliased.new_state.block_root = compute_appended_commitment(
                &Blake2bMerger,
                payload.last_block_hash,
                block_hash(&payload.block),
                payload.block.number,
                payload.block_mmr_size,
                &payload.block_proof,
            )
            .unwrap();
        }
        assert_ne!(aliased.new_state.block_root, honest.new_state.block_root);
        assert_eq!(run(&aliased), -18);
    }
}
