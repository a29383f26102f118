//! # Verifier Configuration
//!
//! One versioned set of thresholds and limits for every verifier.
//! Changing any value changes which transitions are legal, so deployed
//! verifiers must agree on the version.

use serde::{Deserialize, Serialize};

use crate::domain::{
    ConfigError, AGGREGATOR_REQUIRED_BALANCE, CONFIG_VERSION, MAX_PROOF_ITEMS, MAX_WITNESS_SIZE,
    NEW_ACCOUNT_REQUIRED_BALANCE,
};

/// State-transition verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifierConfig {
    /// Configuration schema version.
    pub version: u32,

    /// Minimum balance for an entry flagged as aggregator.
    pub aggregator_required_balance: u64,

    /// Minimum balance of a newly registered account.
    pub new_account_required_balance: u64,

    /// Maximum items accepted in any single proof.
    pub max_proof_items: usize,

    /// Maximum witness size in bytes.
    pub max_witness_size: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            aggregator_required_balance: AGGREGATOR_REQUIRED_BALANCE,
            new_account_required_balance: NEW_ACCOUNT_REQUIRED_BALANCE,
            max_proof_items: MAX_PROOF_ITEMS,
            max_witness_size: MAX_WITNESS_SIZE,
        }
    }
}

impl VerifierConfig {
    /// Create a config for testing (small balances).
    pub fn for_testing() -> Self {
        Self {
            version: CONFIG_VERSION,
            aggregator_required_balance: 100,
            new_account_required_balance: 10,
            max_proof_items: MAX_PROOF_ITEMS,
            max_witness_size: MAX_WITNESS_SIZE,
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config against engine limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }
        if self.max_proof_items > MAX_PROOF_ITEMS {
            return Err(ConfigError::ProofLimitTooHigh {
                configured: self.max_proof_items,
                max: MAX_PROOF_ITEMS,
            });
        }
        if self.max_witness_size == 0 {
            return Err(ConfigError::Parse("max_witness_size must be nonzero".into()));
        }
        Ok(())
    }
}
