//! # RV-02 State Transition Benchmarks
//!
//! End-to-end cost of one verifier run, host bytes in and exit code out.
//! SubmitBlock dominates: it adds signature recovery and a tx root over
//! every transaction in the block.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use rv_02_state_transition::{
    commitment_of, transactions_root, Blake2bMerger, InMemoryHost, StateTransitionApi,
    StateTransitionService, VerifierConfig,
};
use shared_types::Hash;
use std::time::Duration;

use crate::fixtures::{random_transaction, Rollup};

pub fn commitment_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("rv-02/commitment");
    let sub_root: Hash = rand::thread_rng().gen();

    group.bench_function("counted_root", |b| {
        b.iter(|| black_box(commitment_of(black_box(1_000), &sub_root)))
    });

    for tx_count in [1usize, 16, 256, 1024] {
        let transactions: Vec<_> = (0..tx_count)
            .map(|i| random_transaction(i as u32))
            .collect();
        group.throughput(Throughput::Elements(tx_count as u64));
        group.bench_with_input(
            BenchmarkId::new("tx_root", tx_count),
            &transactions,
            |b, txs| b.iter(|| black_box(transactions_root(&Blake2bMerger, txs))),
        );
    }

    group.finish();
}

pub fn full_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("rv-02/transition");
    group.measurement_time(Duration::from_secs(10));
    let service = StateTransitionService::with_config(VerifierConfig::default());

    for users in [10u32, 1_000] {
        let mut rollup = Rollup::new(users);
        let register = rollup
            .history
            .last()
            .cloned()
            .expect("registrations recorded");
        let deposit = rollup.deposit(users / 2, 100);
        let block = rollup.submit_block(64);

        for (name, input) in [
            ("register", register),
            ("deposit", deposit),
            ("submit_block_64tx", block),
        ] {
            let host = InMemoryHost::from_transition(&input).expect("encodable transition");
            group.bench_with_input(BenchmarkId::new(name, users), &host, |b, host| {
                b.iter(|| black_box(service.run(host)))
            });
        }
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    commitment_math(c);
    full_transition(c);
}
