//! # Rollup Verifier Benchmarks
//!
//! | Crate | Group | Target |
//! |-------|-------|--------|
//! | rv-01 MMR | proof verification, 1M leaves | < 50μs |
//! | rv-01 MMR | append root | < 50μs |
//! | rv-02 State Transition | Register / Deposit | < 1ms |
//! | rv-02 State Transition | SubmitBlock, 64 txs | < 2ms |

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn mmr_benchmarks(c: &mut Criterion) {
    rv_tests::benchmarks::rv_01_mmr::register_benchmarks(c);
}

fn state_transition_benchmarks(c: &mut Criterion) {
    rv_tests::benchmarks::rv_02_state_transition::register_benchmarks(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(2));
    targets = mmr_benchmarks, state_transition_benchmarks
}
criterion_main!(benches);
