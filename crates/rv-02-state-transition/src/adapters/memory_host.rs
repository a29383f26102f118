//! # In-Memory Host
//!
//! `HostLedger` over owned byte buffers, for embedding the verifier and
//! for tests. Missing items surface as `HostError::Missing`.

use shared_types::{codec, CanonicalBytes, CapacityChange};

use crate::domain::TransitionInput;
use crate::ports::{HostError, HostLedger, StateSide};

/// Host ledger backed by in-memory buffers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    capacities: Option<CapacityChange>,
    input_state: Option<Vec<u8>>,
    output_state: Option<Vec<u8>>,
    witness: Option<Vec<u8>>,
}

impl InMemoryHost {
    /// Host with every item present.
    pub fn new(
        capacities: CapacityChange,
        input_state: Vec<u8>,
        output_state: Vec<u8>,
        witness: Vec<u8>,
    ) -> Self {
        Self {
            capacities: Some(capacities),
            input_state: Some(input_state),
            output_state: Some(output_state),
            witness: Some(witness),
        }
    }

    /// Host presenting an encoded transition.
    pub fn from_transition(input: &TransitionInput) -> Result<Self, HostError> {
        let witness =
            codec::encode(&input.action).map_err(|e| HostError::LoadFailed(e.to_string()))?;
        Ok(Self::new(
            input.capacities,
            input.old_state.to_canonical_bytes(),
            input.new_state.to_canonical_bytes(),
            witness,
        ))
    }

    /// Replace the capacities.
    pub fn with_capacities(mut self, capacities: CapacityChange) -> Self {
        self.capacities = Some(capacities);
        self
    }

    /// Replace the state blob on one side.
    pub fn with_state(mut self, side: StateSide, bytes: Vec<u8>) -> Self {
        match side {
            StateSide::Input => self.input_state = Some(bytes),
            StateSide::Output => self.output_state = Some(bytes),
        }
        self
    }

    /// Replace the witness.
    pub fn with_witness(mut self, witness: Vec<u8>) -> Self {
        self.witness = Some(witness);
        self
    }

    /// Drop the witness.
    pub fn without_witness(mut self) -> Self {
        self.witness = None;
        self
    }
}

impl HostLedger for InMemoryHost {
    fn load_capacities(&self) -> Result<CapacityChange, HostError> {
        self.capacities.ok_or(HostError::Missing("capacities"))
    }

    fn load_global_state(&self, side: StateSide) -> Result<Vec<u8>, HostError> {
        let state = match side {
            StateSide::Input => &self.input_state,
            StateSide::Output => &self.output_state,
        };
        state.clone().ok_or(HostError::Missing("global state"))
    }

    fn load_witness(&self) -> Result<Vec<u8>, HostError> {
        self.witness.clone().ok_or(HostError::Missing("witness"))
    }
}
