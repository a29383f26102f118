//! # Shared Crypto - Commitment and Signature Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE2b-256 | Leaf hashes, tree merges, counted roots |
//! | `ecdsa` | secp256k1 | Recoverable block signatures |
//!
//! ## Security Properties
//!
//! - **BLAKE2b**: fixed 32-byte output, unkeyed; commitments depend on it
//!   never changing
//! - **secp256k1**: RFC 6979 deterministic, low-S normalization, public key
//!   recovery from 65-byte signatures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{
    recover_public_key, verify_recoverable, RecoverableSignature, Secp256k1KeyPair,
    Secp256k1PublicKey,
};
pub use errors::CryptoError;
pub use hashing::{blake160, blake2b_256, blake2b_256_many, counted_root, merge_hash, Blake2bHasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
