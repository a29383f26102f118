//! # Recoverable ECDSA Signatures (secp256k1)
//!
//! Aggregators sign the 32-byte hash of a block; verifiers recover the
//! signer's public key from the signature and compare its pubkey hash.
//!
//! ## Format
//!
//! 65 bytes: `r (32) ‖ s (32) ‖ recovery_id (1)`. Only recovery ids 0 and 1
//! are accepted. Block hashes cover the signature bytes, so every signature
//! must have exactly one valid encoding.
//!
//! ## Identity
//!
//! `pubkey_hash = blake160(compressed_public_key)`.

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use zeroize::Zeroize;

use crate::hashing::{blake160, Hash};
use crate::CryptoError;

/// Recoverable signature length in bytes.
pub const RECOVERABLE_SIGNATURE_SIZE: usize = 65;

/// A 65-byte recoverable signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature([u8; RECOVERABLE_SIGNATURE_SIZE]);

impl RecoverableSignature {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; RECOVERABLE_SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; RECOVERABLE_SIGNATURE_SIZE] {
        &self.0
    }

    /// Consume into raw bytes.
    pub fn into_bytes(self) -> [u8; RECOVERABLE_SIGNATURE_SIZE] {
        self.0
    }
}

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self, CryptoError> {
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    fn from_verifying_key(key: &VerifyingKey) -> Result<Self, CryptoError> {
        let encoded = key.to_encoded_point(true);
        let bytes: [u8; 33] = encoded
            .as_bytes()
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Identity committed in account entries.
    pub fn pubkey_hash(&self) -> [u8; 20] {
        blake160(&self.0)
    }
}

/// secp256k1 ECDSA keypair.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> Result<Secp256k1PublicKey, CryptoError> {
        Secp256k1PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Pubkey hash of this keypair.
    pub fn pubkey_hash(&self) -> Result<[u8; 20], CryptoError> {
        Ok(self.public_key()?.pubkey_hash())
    }

    /// Sign a 32-byte message hash (deterministic RFC 6979, low-S).
    pub fn sign_prehash(&self, message_hash: &Hash) -> Result<RecoverableSignature, CryptoError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(message_hash)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // Normalizing S negates the nonce point, which flips the y parity.
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        let mut bytes = [0u8; RECOVERABLE_SIGNATURE_SIZE];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte();
        Ok(RecoverableSignature(bytes))
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}

impl Drop for Secp256k1KeyPair {
    fn drop(&mut self) {
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

/// Recover the signer's compressed public key from a prehashed message.
pub fn recover_public_key(
    message_hash: &Hash,
    signature: &RecoverableSignature,
) -> Result<Secp256k1PublicKey, CryptoError> {
    let recovery_id = parse_recovery_id(signature.0[64])?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes.copy_from_slice(&signature.0[..64]);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| CryptoError::InvalidSignatureFormat)?;

    let recovered = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;
    Secp256k1PublicKey::from_verifying_key(&recovered)
}

/// Check that `signature` over `message_hash` was produced by the owner of
/// `expected_pubkey_hash`.
pub fn verify_recoverable(
    message_hash: &Hash,
    signature: &RecoverableSignature,
    expected_pubkey_hash: &[u8; 20],
) -> Result<(), CryptoError> {
    let recovered = recover_public_key(message_hash, signature)?;
    if &recovered.pubkey_hash() != expected_pubkey_hash {
        return Err(CryptoError::SignerMismatch);
    }
    Ok(())
}

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1. The `27`/`28` offsets are rejected.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    match v {
        0 | 1 => RecoveryId::try_from(v).map_err(|_| CryptoError::InvalidRecoveryId(v)),
        _ => Err(CryptoError::InvalidRecoveryId(v)),
    }
}
