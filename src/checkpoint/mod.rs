//! Checkpoint and resume functionality for machines.
//!
//! This module provides serialization and deserialization for machine
//! snapshots, so long-lived sessions can survive process restarts.
//! Transitions and guards are not part of a checkpoint (closures are not
//! serializable); restoring pairs a checkpoint back up with a chart.

use crate::core::{State, TransitionLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Metadata tracked by a machine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the machine was created
    pub created_at: DateTime<Utc>,

    /// Last transition time
    pub updated_at: DateTime<Utc>,

    /// Times each event has fired a transition (event name -> count)
    pub fired_events: HashMap<String, usize>,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            fired_events: HashMap::new(),
        }
    }
}

/// Serializable snapshot of a machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When the checkpoint was taken
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine
    pub initial_state: S,

    /// Current state of the machine
    pub current_state: S,

    /// Complete transition log
    pub log: TransitionLog<S>,

    /// Machine metadata
    pub metadata: MachineMetadata,
}

impl<S: State> Checkpoint<S> {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, verifying the format version.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Encode as a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from a binary blob, verifying the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}
