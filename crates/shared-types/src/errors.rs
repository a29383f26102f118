//! # Error Types
//!
//! Errors raised while encoding or decoding rollup entities.

use thiserror::Error;

/// Errors from the canonical codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input has the wrong fixed size.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input exceeds the decoding limit.
    #[error("Input too large: {size} bytes exceeds limit of {limit}")]
    TooLarge { size: usize, limit: u64 },

    /// Action discriminant outside the known set.
    #[error("Unknown action tag: {0}")]
    UnknownTag(u32),

    /// Payload failed schema decoding.
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Value could not be encoded.
    #[error("Encode failed: {0}")]
    Encode(String),
}
