//! # Integration Test Flows
//!
//! A rollup lifetime: registrations, deposits and blocks interleaved, every
//! transition verified through `InMemoryHost` → `StateTransitionService`.
//!
//! ## Flows Tested:
//!
//! 1. **Register → Deposit → SubmitBlock**: each accepted with exit code 0
//! 2. **State chaining**: every transition starts from the previous new state
//! 3. **Aggregator-applied updates**: blocks that rewrite account entries

#[cfg(test)]
mod tests {
    use rv_02_state_transition::{
        InMemoryHost, RollupLedger, StateTransitionApi, StateTransitionService, TransitionInput,
        VerifierConfig, EXIT_OK,
    };
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{Action, GlobalState};

    use crate::fixtures::{init_tracing, random_transaction, Rollup};

    fn run(service: &StateTransitionService, input: &TransitionInput) -> i8 {
        let host = InMemoryHost::from_transition(input).unwrap();
        service.run(&host)
    }

    #[test]
    fn test_full_lifecycle_accepted() {
        init_tracing();
        let service = StateTransitionService::with_config(VerifierConfig::default());
        let mut rollup = Rollup::new(6);

        for round in 0..5u32 {
            rollup.deposit(1 + round % 6, 250);
            rollup.submit_block(round as usize + 1);
        }

        for (step, input) in rollup.history.iter().enumerate() {
            assert_eq!(run(&service, input), EXIT_OK, "step {} ({:?})", step, input.action.tag());
        }
    }

    #[test]
    fn test_states_chain() {
        let mut rollup = Rollup::new(3);
        rollup.deposit(2, 10);
        rollup.submit_block(2);
        rollup.submit_block(0);

        assert_eq!(rollup.history[0].old_state, GlobalState::empty());
        for pair in rollup.history.windows(2) {
            assert_eq!(pair[0].new_state, pair[1].old_state);
        }
        assert_eq!(
            rollup.history.last().map(|input| input.new_state),
            Some(rollup.ledger.state())
        );
    }

    #[test]
    fn test_block_numbers_are_sequential() {
        let mut rollup = Rollup::new(1);
        for expected in 0..4u32 {
            let input = rollup.submit_block(1);
            match input.action {
                Action::SubmitBlock(payload) => assert_eq!(payload.block.number, expected),
                other => panic!("unexpected action {:?}", other.tag()),
            }
        }
    }

    #[test]
    fn test_block_with_entry_updates() {
        init_tracing();
        let service = StateTransitionService::with_config(VerifierConfig::default());
        let key = Secp256k1KeyPair::generate();
        let mut ledger = RollupLedger::new(50_000);
        let config = VerifierConfig::default();

        let steps = vec![
            ledger
                .register(key.pubkey_hash().unwrap(), config.aggregator_required_balance, true)
                .unwrap(),
            ledger.register([0xAA; 20], 5000, false).unwrap(),
            ledger.register([0xBB; 20], 5000, false).unwrap(),
        ];
        for input in &steps {
            assert_eq!(run(&service, input), EXIT_OK);
        }

        // Transfer 700 from account 1 to account 2 inside a block.
        let mut sender = ledger.entry(1).unwrap();
        let mut receiver = ledger.entry(2).unwrap();
        sender.balance -= 700;
        sender.nonce += 1;
        receiver.balance += 700;
        let block = ledger
            .submit_block(0, vec![random_transaction(1)], vec![sender, receiver], &key)
            .unwrap();
        assert_eq!(run(&service, &block), EXIT_OK);

        // The next deposit authenticates against the post-block account tree.
        let deposit = ledger.deposit(2, 300).unwrap();
        assert_eq!(run(&service, &deposit), EXIT_OK);
        assert_eq!(ledger.entry(2).unwrap().balance, 6000);
    }

    #[test]
    fn test_testing_config_end_to_end() {
        let service = StateTransitionService::with_config(VerifierConfig::for_testing());
        let key = Secp256k1KeyPair::generate();
        let mut ledger = RollupLedger::new(1_000);

        let aggregator = ledger
            .register(key.pubkey_hash().unwrap(), 100, true)
            .unwrap();
        let user = ledger.register([7; 20], 10, false).unwrap();
        let block = ledger.submit_block(0, vec![], vec![], &key).unwrap();

        for input in [&aggregator, &user, &block] {
            assert_eq!(run(&service, input), EXIT_OK);
        }
        // Same history fails under production thresholds.
        let production = StateTransitionService::with_config(VerifierConfig::default());
        assert_eq!(run(&production, &aggregator), -15);
    }
}
