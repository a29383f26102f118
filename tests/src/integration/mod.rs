//! # Integration Tests
//!
//! Ledger-built transitions pushed through the host boundary into the
//! verifier service, checked by exit code.

pub mod dispatch;
pub mod flows;
