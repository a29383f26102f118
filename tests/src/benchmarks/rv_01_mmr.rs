//! # RV-01 MMR Benchmarks
//!
//! Proof work grows with log(leaf count); these groups check it stays flat
//! enough that a 2^20-leaf account tree verifies in microseconds.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use rv_01_mmr::{leaf_index_to_pos, MmrStore};
use rv_02_state_transition::Blake2bMerger;
use shared_types::Hash;
use std::time::Duration;

const TREE_SIZES: [u64; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn build_store(leaves: u64) -> MmrStore<Blake2bMerger> {
    let mut rng = rand::thread_rng();
    MmrStore::from_leaves(Blake2bMerger, (0..leaves).map(|_| rng.gen::<Hash>()))
}

pub fn proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("rv-01/proof");
    group.measurement_time(Duration::from_secs(10));

    for leaves in TREE_SIZES {
        let store = build_store(leaves);
        let root = store.root();
        let mut rng = rand::thread_rng();
        let samples: Vec<_> = (0..256)
            .map(|_| {
                let index = rng.gen_range(0..leaves);
                let proof = store.gen_proof(index).expect("index in range");
                let leaf = store.leaf(index).expect("index in range");
                (leaf_index_to_pos(index), leaf, proof)
            })
            .collect();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("verify_leaf", leaves),
            &samples,
            |b, samples| {
                let mut i = 0;
                b.iter(|| {
                    let (pos, leaf, proof) = &samples[i % samples.len()];
                    i += 1;
                    black_box(proof.verify(&Blake2bMerger, &root, *pos, *leaf))
                })
            },
        );
    }

    group.finish();
}

pub fn append_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("rv-01/append");

    for leaves in TREE_SIZES {
        let store = build_store(leaves);
        let proof = store.gen_append_proof().expect("tree is not empty");
        let prev_leaf = store.leaf(leaves - 1).expect("last leaf");
        let prev_pos = leaf_index_to_pos(leaves - 1);
        let new_pos = leaf_index_to_pos(leaves);
        let new_leaf: Hash = rand::thread_rng().gen();

        group.bench_function(BenchmarkId::new("root_with_new_leaf", leaves), |b| {
            b.iter(|| {
                black_box(proof.calculate_root_with_new_leaf(
                    &Blake2bMerger,
                    prev_pos,
                    prev_leaf,
                    new_pos,
                    new_leaf,
                ))
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    proof_verification(c);
    append_root(c);
}
