//! # Rollup Verifier Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per crate
//! │   ├── rv_01_mmr.rs
//! │   └── rv_02_state_transition.rs
//! │
//! ├── exploits/         # Attack simulations
//! │   ├── replay.rs     # Replayed witnesses, skipped blocks, foreign signers
//! │   └── tamper.rs     # Bit-flip mutation of honest transitions
//! │
//! └── integration/      # Ledger → host → verifier flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rv-tests
//!
//! # By category
//! cargo test -p rv-tests integration::
//! cargo test -p rv-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p rv-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod benchmarks;
pub mod exploits;
pub mod fixtures;
pub mod integration;
