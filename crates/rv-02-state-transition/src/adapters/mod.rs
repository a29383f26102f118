//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound port traits and the MMR merge function.

mod memory_host;
mod merger;
mod secp256k1;

pub use memory_host::InMemoryHost;
pub use merger::Blake2bMerger;
pub use secp256k1::Secp256k1Verifier;
