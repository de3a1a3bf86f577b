//! Checkpoint and resume functionality for automaton runs.
//!
//! A checkpoint captures a run in progress: the design it belongs to and the
//! set of states the automaton currently occupies. Long inputs can be read in
//! pieces across process restarts by saving a checkpoint, loading it later
//! and resuming the run where it stopped.

use crate::core::{Automaton, Design, State, StateSet, Symbol};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton run.
///
/// # Example
///
/// ```rust
/// use multistate::checkpoint::Checkpoint;
/// use multistate::rulebook;
/// use multistate::core::Design;
///
/// let design = Design::new(1, [4], rulebook![
///     (1, 'a', 1), (1, 'b', 1), (1, 'b', 2),
///     (2, 'a', 3), (2, 'b', 3),
///     (3, 'a', 4), (3, 'b', 4),
/// ]);
///
/// let mut automaton = design.to_automaton();
/// automaton.read_string("bb".chars());
///
/// let json = Checkpoint::capture(&design, &automaton).to_json().unwrap();
///
/// let checkpoint = Checkpoint::<i32, char>::from_json(&json).unwrap();
/// let mut resumed = checkpoint.resume().unwrap();
/// resumed.read_string("ab".chars());
/// assert!(resumed.accepting());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, C: Symbol> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Design the run belongs to
    pub design: Design<S, C>,

    /// States the automaton occupied when captured
    pub current_states: StateSet<S>,
}

impl<S: State, C: Symbol> Checkpoint<S, C> {
    /// Capture the current position of `automaton`, a run of `design`.
    pub fn capture(design: &Design<S, C>, automaton: &Automaton<S, C>) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            design: design.clone(),
            current_states: automaton.current_states().clone(),
        };

        debug!(
            "Captured checkpoint {} with {} live states",
            checkpoint.id,
            checkpoint.current_states.len()
        );

        checkpoint
    }

    /// Check the version and that every captured state belongs to the design.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let known = self.design.states();
        if !self.current_states.is_subset(&known) {
            let states: Vec<String> = self
                .current_states
                .iter()
                .filter(|state| !known.contains(state))
                .map(|state| format!("{:?}", state))
                .collect();
            return Err(CheckpointError::UnknownStates { states });
        }

        Ok(())
    }

    /// Rebuild the automaton at the captured position.
    pub fn resume(&self) -> Result<Automaton<S, C>, CheckpointError> {
        self.validate()?;
        debug!("Resuming checkpoint {}", self.id);
        Ok(self.design.automaton_at(self.current_states.clone()))
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::EncodeFailed(e.to_string()))
    }

    /// Parse and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DecodeFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::EncodeFailed(e.to_string()))
    }

    /// Decode and validate a binary checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DecodeFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}

impl<S: State, C: Symbol> Automaton<S, C> {
    /// Capture this run of `design` as a checkpoint.
    pub fn checkpoint(&self, design: &Design<S, C>) -> Checkpoint<S, C> {
        Checkpoint::capture(design, self)
    }
}
