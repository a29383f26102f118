//! # Inbound Ports
//!
//! API trait defining what the state-transition verifier can do.

use super::outbound::HostLedger;
use crate::domain::{TransitionInput, VerifyError};

/// State transition API - inbound port.
pub trait StateTransitionApi: Send + Sync {
    /// Verify an already decoded transition.
    fn verify_transition(&self, input: &TransitionInput) -> Result<(), VerifyError>;

    /// Load, decode and verify the transition the host presents.
    fn verify_from_host(&self, host: &dyn HostLedger) -> Result<(), VerifyError>;

    /// Exit status for the transition the host presents: 0 when accepted.
    fn run(&self, host: &dyn HostLedger) -> i8;
}
