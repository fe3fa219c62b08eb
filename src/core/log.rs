//! Transition log for chart-driven machines.
//!
//! Provides immutable tracking of fired transitions over time, following
//! functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// Records are immutable values representing a move from one state to
/// another in response to a named event at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state the machine left
    pub from: S,
    /// The state the machine entered
    pub to: S,
    /// Name of the event that fired the transition
    pub event: String,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of fired transitions.
///
/// The log is immutable — `record` returns a new log with the entry
/// added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use headway::core::{State, TransitionLog, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LampState {
///     Off,
///     On,
/// }
///
/// impl State for LampState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: LampState::Off,
///     to: LampState::On,
///     event: "Toggle".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = log.path();
/// assert_eq!(path.len(), 2); // Off -> On
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// This is a pure function — the existing log is not mutated.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first record's source
    /// state, then the destination of each record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any transitions have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
