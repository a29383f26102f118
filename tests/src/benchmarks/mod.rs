//! # Verifier Benchmarks
//!
//! Criterion groups per crate, registered from `benches/verifier_benchmarks.rs`.
//!
//! | Group | Measures |
//! |-------|----------|
//! | rv-01/proof | leaf proof root recomputation vs tree size |
//! | rv-01/append | append root from the last-leaf proof |
//! | rv-02/commitment | counted-root and tx-root computation |
//! | rv-02/transition | full host-to-exit-code verification per action |

pub mod rv_01_mmr;
pub mod rv_02_state_transition;
