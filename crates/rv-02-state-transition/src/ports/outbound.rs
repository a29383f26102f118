//! # Outbound Ports
//!
//! What the verifier needs from its surroundings: the host that owns the
//! settlement cell, and a signature scheme.

use shared_crypto::CryptoError;
use shared_types::{CapacityChange, Hash, PubkeyHash, Signature};
use thiserror::Error;

/// Which side of the transition a state blob belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSide {
    /// State stored in the consumed cell.
    Input,
    /// State stored in the produced cell.
    Output,
}

/// Failure to read from the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The requested item is not present.
    #[error("Host item missing: {0}")]
    Missing(&'static str),

    /// The host reported an error while loading.
    #[error("Host load failed: {0}")]
    LoadFailed(String),
}

/// Host ledger - outbound port.
///
/// Supplies the raw inputs of one transition. Implementations only load
/// bytes; every byte is decoded and checked by the verifier.
pub trait HostLedger {
    /// Capacity of the settlement cell before and after.
    fn load_capacities(&self) -> Result<CapacityChange, HostError>;

    /// Encoded `GlobalState` on the given side.
    fn load_global_state(&self, side: StateSide) -> Result<Vec<u8>, HostError>;

    /// Encoded witness action.
    fn load_witness(&self) -> Result<Vec<u8>, HostError>;
}

/// Signature verifier - outbound port.
pub trait SignatureVerifier: Send + Sync {
    /// Check that `signature` over `message` belongs to `pubkey_hash`.
    fn verify(
        &self,
        signature: &Signature,
        message: &Hash,
        pubkey_hash: &PubkeyHash,
    ) -> Result<(), CryptoError>;
}
