//! # Ports
//!
//! Capabilities the engine depends on.

pub mod outbound;

pub use outbound::HashMerger;
