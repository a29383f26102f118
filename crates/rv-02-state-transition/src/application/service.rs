//! # State Transition Service
//!
//! Application service: loads a transition from the host, decodes it and
//! routes it to the verifier for its action.

use shared_types::codec::{decode_action, decode_global_state};
use tracing::{debug, info, warn};

use crate::adapters::Secp256k1Verifier;
use crate::config::VerifierConfig;
use crate::domain::{verify_action, TransitionInput, VerifyContext, VerifyError, EXIT_OK};
use crate::ports::{HostError, HostLedger, SignatureVerifier, StateSide, StateTransitionApi};

/// State transition verifier service.
pub struct StateTransitionService<S: SignatureVerifier = Secp256k1Verifier> {
    /// Configuration.
    config: VerifierConfig,
    /// Block signature scheme.
    signatures: S,
}

impl StateTransitionService<Secp256k1Verifier> {
    /// Service with the secp256k1 signature scheme.
    pub fn with_config(config: VerifierConfig) -> Self {
        Self::new(config, Secp256k1Verifier)
    }
}

impl Default for StateTransitionService<Secp256k1Verifier> {
    fn default() -> Self {
        Self::with_config(VerifierConfig::default())
    }
}

impl<S: SignatureVerifier> StateTransitionService<S> {
    /// Create a new service.
    pub fn new(config: VerifierConfig, signatures: S) -> Self {
        Self { config, signatures }
    }

    /// Active configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    fn load(&self, host: &dyn HostLedger) -> Result<TransitionInput, VerifyError> {
        let capacities = host.load_capacities().map_err(host_failure)?;
        let old_bytes = host
            .load_global_state(StateSide::Input)
            .map_err(host_failure)?;
        let new_bytes = host
            .load_global_state(StateSide::Output)
            .map_err(host_failure)?;
        let witness = host.load_witness().map_err(host_failure)?;

        let limit = self.config.max_witness_size;
        if witness.len() > limit {
            return Err(VerifyError::MalformedInput(format!(
                "witness of {} bytes exceeds {}",
                witness.len(),
                limit
            )));
        }

        let old_state = decode_global_state(&old_bytes)?;
        let new_state = decode_global_state(&new_bytes)?;
        let action = decode_action(&witness, limit as u64)?;
        debug!(
            action = action.tag().name(),
            witness_len = witness.len(),
            "Decoded transition"
        );

        Ok(TransitionInput {
            old_state,
            new_state,
            capacities,
            action,
        })
    }
}

impl<S: SignatureVerifier> StateTransitionApi for StateTransitionService<S> {
    fn verify_transition(&self, input: &TransitionInput) -> Result<(), VerifyError> {
        let ctx = VerifyContext::new(&self.config, input.capacities, &self.signatures);
        verify_action(&ctx, &input.old_state, &input.new_state, &input.action)
    }

    fn verify_from_host(&self, host: &dyn HostLedger) -> Result<(), VerifyError> {
        let input = self.load(host)?;
        self.verify_transition(&input)
    }

    fn run(&self, host: &dyn HostLedger) -> i8 {
        match self.verify_from_host(host) {
            Ok(()) => {
                info!("Transition accepted");
                EXIT_OK
            }
            Err(e) => {
                let code = e.exit_code();
                warn!(kind = e.kind(), code, "Transition rejected: {}", e);
                code
            }
        }
    }
}

fn host_failure(err: HostError) -> VerifyError {
    VerifyError::HostFailure(err.to_string())
}
