//! # Exploit Simulations
//!
//! Each module replays a class of attack against an honest history and
//! asserts the verifier rejects it with the expected exit code.

pub mod replay;
