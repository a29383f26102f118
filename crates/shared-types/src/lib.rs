//! # Shared Types Crate
//!
//! Domain entities, actions and the canonical codec shared by the MMR
//! engine and the state-transition verifier.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every committed record is defined here once.
//! - **Fixed Layouts**: hashes bind to the bytes produced by [`codec`], so
//!   layouts never change without a new commitment scheme.
//! - **Closed Actions**: the witness is one [`Action`] out of a fixed set.

pub mod actions;
pub mod codec;
pub mod entities;
pub mod errors;

pub use actions::*;
pub use codec::CanonicalBytes;
pub use entities::*;
pub use errors::*;
