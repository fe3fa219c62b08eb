//! Stateful machine driven by a validated chart.
//!
//! The machine is the imperative shell around the pure chart: it holds
//! the current state, resolves incoming events against the chart, and
//! keeps an immutable log of everything that fired.

use crate::chart::StateChart;
use crate::checkpoint::{Checkpoint, CheckpointError, MachineMetadata, CHECKPOINT_VERSION};
use crate::core::{Event, State, TransitionLog, TransitionRecord};
use chrono::Utc;
use tracing::{debug, trace};
use uuid::Uuid;

/// A running machine.
///
/// # Example
///
/// ```rust
/// use headway::builder::{event_transition, ChartBuilder};
/// use headway::machine::Machine;
/// use headway::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// event_enum! {
///     enum Cycle {
///         Next,
///     }
/// }
///
/// let chart = ChartBuilder::new()
///     .initial(Light::Red)
///     .states([Light::Red, Light::Green])
///     .transitions(vec![
///         event_transition(Light::Red, Cycle::Next, Light::Green),
///         event_transition(Light::Green, Cycle::Next, Light::Red),
///     ])
///     .build()
///     .unwrap();
///
/// let mut machine = Machine::new(chart);
/// assert!(machine.is(&Light::Red));
///
/// machine.send(&Cycle::Next);
/// assert_eq!(machine.current_state(), &Light::Green);
/// ```
pub struct Machine<S: State, E: Event> {
    chart: StateChart<S, E>,
    current: S,
    log: TransitionLog<S>,
    metadata: MachineMetadata,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine positioned at the chart's initial state.
    pub fn new(chart: StateChart<S, E>) -> Self {
        let current = chart.initial().clone();
        Self {
            chart,
            current,
            log: TransitionLog::new(),
            metadata: MachineMetadata::default(),
        }
    }

    /// Send an event to the machine, returning the resulting state.
    ///
    /// When the chart resolves a transition, the machine moves, the log
    /// records the move, and the metadata counter for the event is
    /// bumped. When nothing matches, the machine stays put and the call
    /// is a no-op apart from a trace event.
    pub fn send(&mut self, event: &E) -> &S {
        match self.chart.resolve(&self.current, event) {
            Some(next) => {
                let next = next.clone();
                debug!(
                    from = self.current.name(),
                    to = next.name(),
                    event = event.name(),
                    "transition fired"
                );

                self.log = self.log.record(TransitionRecord {
                    from: self.current.clone(),
                    to: next.clone(),
                    event: event.name().to_string(),
                    timestamp: Utc::now(),
                });
                *self
                    .metadata
                    .fired_events
                    .entry(event.name().to_string())
                    .or_insert(0) += 1;
                self.metadata.updated_at = Utc::now();
                self.current = next;
            }
            None => {
                trace!(
                    state = self.current.name(),
                    event = event.name(),
                    "event ignored"
                );
            }
        }
        &self.current
    }

    /// Check whether the machine is in the given state (pure).
    pub fn is(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The chart's declared state set (pure).
    pub fn states(&self) -> &[S] {
        self.chart.states()
    }

    /// Check if the machine is in a final state (pure).
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the transition log (pure).
    pub fn log(&self) -> &TransitionLog<S> {
        &self.log
    }

    /// Get the underlying chart (pure).
    pub fn chart(&self) -> &StateChart<S, E> {
        &self.chart
    }

    /// Get machine metadata (pure).
    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    /// Take a serializable snapshot of the machine.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            initial_state: self.chart.initial().clone(),
            current_state: self.current.clone(),
            log: self.log.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Rebuild a machine from a checkpoint and a chart.
    ///
    /// The chart must recognize the checkpointed states and agree on the
    /// initial state; a checkpoint from a different or newer definition
    /// is rejected rather than silently re-interpreted.
    pub fn restore(
        chart: StateChart<S, E>,
        checkpoint: Checkpoint<S>,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if *chart.initial() != checkpoint.initial_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "chart initial state '{}' does not match checkpoint initial state '{}'",
                chart.initial().name(),
                checkpoint.initial_state.name()
            )));
        }

        if !chart.recognizes(&checkpoint.current_state) {
            return Err(CheckpointError::ValidationFailed(format!(
                "chart does not recognize checkpointed state '{}'",
                checkpoint.current_state.name()
            )));
        }

        debug!(
            state = checkpoint.current_state.name(),
            recorded = checkpoint.log.len(),
            "machine restored from checkpoint"
        );

        Ok(Self {
            chart,
            current: checkpoint.current_state,
            log: checkpoint.log,
            metadata: checkpoint.metadata,
        })
    }
}
