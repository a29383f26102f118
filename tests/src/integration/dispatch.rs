//! # Host Dispatch
//!
//! The byte-level boundary: fixed layouts, tag routing, witness limits and
//! the exit code of every rejection kind.

#[cfg(test)]
mod tests {
    use rv_02_state_transition::{
        HostError, HostLedger, InMemoryHost, StateSide, StateTransitionApi,
        StateTransitionService, VerifierConfig, VerifyError, EXIT_OK,
    };
    use shared_types::codec::{self, CanonicalBytes};
    use shared_types::{
        AccountEntry, AggregatorBlock, CapacityChange, GlobalState, ACCOUNT_ENTRY_SIZE,
        AGGREGATOR_BLOCK_SIZE, GLOBAL_STATE_SIZE,
    };

    use crate::fixtures::{init_tracing, Rollup};

    /// Host whose capacity read fails.
    struct BrokenHost;

    impl HostLedger for BrokenHost {
        fn load_capacities(&self) -> Result<CapacityChange, HostError> {
            Err(HostError::LoadFailed("syscall returned 1".into()))
        }

        fn load_global_state(&self, _: StateSide) -> Result<Vec<u8>, HostError> {
            Ok(vec![0; GLOBAL_STATE_SIZE])
        }

        fn load_witness(&self) -> Result<Vec<u8>, HostError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_fixed_layouts() {
        assert_eq!(codec::encode(&GlobalState::empty()).unwrap().len(), 64);
        assert_eq!(GLOBAL_STATE_SIZE, 64);

        let entry = AccountEntry::new(1, [2; 20], 3, true);
        assert_eq!(codec::encode(&entry).unwrap().len(), ACCOUNT_ENTRY_SIZE);
        assert_eq!(entry.to_canonical_bytes(), codec::encode(&entry).unwrap());

        let block = AggregatorBlock::default();
        assert_eq!(codec::encode(&block).unwrap().len(), AGGREGATOR_BLOCK_SIZE);
        assert_eq!(AGGREGATOR_BLOCK_SIZE, 165);
    }

    #[test]
    fn test_witness_tags() {
        let mut rollup = Rollup::new(1);
        let deposit = rollup.deposit(1, 5);
        let block = rollup.submit_block(1);

        let tags: Vec<u32> = [&rollup.history[0], &deposit, &block]
            .iter()
            .map(|input| {
                let witness = codec::encode(&input.action).unwrap();
                u32::from_le_bytes([witness[0], witness[1], witness[2], witness[3]])
            })
            .collect();
        assert_eq!(tags, vec![0, 1, 2]);
    }

    #[test]
    fn test_rejection_exit_codes() {
        init_tracing();
        let service = StateTransitionService::with_config(VerifierConfig::default());
        let mut rollup = Rollup::new(2);
        let input = rollup.deposit(1, 100);
        let host = InMemoryHost::from_transition(&input).unwrap();
        assert_eq!(service.run(&host), EXIT_OK);

        let cases: Vec<(InMemoryHost, i8)> = vec![
            (host.clone().without_witness(), -4),
            (host.clone().with_capacities(CapacityChange::unchanged(1)), -7),
            (host.clone().with_witness(vec![1, 0, 0]), -11),
            (host.clone().with_witness(9u32.to_le_bytes().to_vec()), -12),
            (host.clone().with_state(StateSide::Output, vec![0; 63]), -11),
            (
                host.clone()
                    .with_state(StateSide::Output, GlobalState::empty().to_canonical_bytes()),
                -5,
            ),
            (
                host.clone()
                    .with_state(StateSide::Input, GlobalState::empty().to_canonical_bytes()),
                -14,
            ),
        ];
        for (i, (host, expected)) in cases.into_iter().enumerate() {
            assert_eq!(service.run(&host), expected, "case {}", i);
        }
    }

    #[test]
    fn test_host_failure_surfaces() {
        let service = StateTransitionService::with_config(VerifierConfig::default());
        assert!(matches!(
            service.verify_from_host(&BrokenHost),
            Err(VerifyError::HostFailure(_))
        ));
        assert_eq!(service.run(&BrokenHost), -4);
    }

    #[test]
    fn test_service_is_object_safe() {
        let service: Box<dyn StateTransitionApi> =
            Box::new(StateTransitionService::with_config(VerifierConfig::default()));
        let rollup = Rollup::new(0);
        let input = rollup.history[0].clone();
        assert!(service.verify_transition(&input).is_ok());
    }

    #[test]
    fn test_config_from_json_drives_service() {
        let json = r#"{
            "version": 1,
            "aggregator_required_balance": 2000,
            "new_account_required_balance": 1000,
            "max_proof_items": 1,
            "max_witness_size": 32768
        }"#;
        let config = VerifierConfig::from_json(json).unwrap();
        let service = StateTransitionService::with_config(config);

        // Five entries: the append proof of entry 3 carries two items.
        let rollup = Rollup::new(4);
        let input = rollup.history.last().unwrap();
        assert!(matches!(
            service.verify_transition(input),
            Err(VerifyError::MalformedInput(_))
        ));
    }
}
