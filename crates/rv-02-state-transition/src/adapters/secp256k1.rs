//! # secp256k1 Signature Adapter
//!
//! Implements `SignatureVerifier` with public key recovery: the signer is
//! identified by `blake160` of its compressed key, so no key is carried in
//! the witness.

use shared_crypto::{verify_recoverable, CryptoError, RecoverableSignature};
use shared_types::{Hash, PubkeyHash, Signature};

use crate::ports::SignatureVerifier;

/// Recoverable secp256k1 verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    /// Create a verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(
        &self,
        signature: &Signature,
        message: &Hash,
        pubkey_hash: &PubkeyHash,
    ) -> Result<(), CryptoError> {
        let signature = RecoverableSignature::from_bytes(*signature);
        verify_recoverable(message, &signature, pubkey_hash)
    }
}
