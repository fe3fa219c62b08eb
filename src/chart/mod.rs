//! State charts: validated transition tables.
//!
//! A chart is the declarative definition of a machine — an initial
//! state, the set of declared states, and the transitions between them.
//! Charts are pure data plus pure lookup; the stateful wrapper lives in
//! [`crate::machine`].
//!
//! Charts can only be obtained through [`crate::builder::ChartBuilder`],
//! which validates the definition eagerly, so a chart in hand is always
//! internally consistent.

mod validate;

pub use validate::{validate_definition, DefinitionViolation};

use crate::core::{Event, Guard, State};

/// A single entry in a chart's transition table.
///
/// Fires when the machine is in `from`, receives `on`, and the guard
/// (if any) accepts the current state.
pub struct ChartTransition<S: State, E: Event> {
    pub from: S,
    pub on: E,
    pub to: S,
    pub guard: Option<Guard<S>>,
}

impl<S: State, E: Event> ChartTransition<S, E> {
    /// Check if this transition fires for the given state and event (pure).
    pub fn can_fire(&self, current: &S, event: &E) -> bool {
        if *current != self.from || *event != self.on {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }
}

impl<S: State, E: Event> Clone for ChartTransition<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            on: self.on.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

/// A validated machine definition.
///
/// Resolution walks the transition table in declaration order and the
/// first entry whose `can_fire` passes wins, so guarded entries for the
/// same (state, event) pair may be layered with an unguarded fallback
/// last.
pub struct StateChart<S: State, E: Event> {
    initial: S,
    states: Vec<S>,
    transitions: Vec<ChartTransition<S, E>>,
}

impl<S: State, E: Event> StateChart<S, E> {
    /// Assemble a chart from already-validated parts.
    ///
    /// Only the builder calls this, after `validate_definition` passed.
    pub(crate) fn assemble(
        initial: S,
        states: Vec<S>,
        transitions: Vec<ChartTransition<S, E>>,
    ) -> Self {
        Self {
            initial,
            states,
            transitions,
        }
    }

    /// The state a machine built from this chart starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The declared state set.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Whether `state` is part of the declared state set.
    pub fn recognizes(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> &[ChartTransition<S, E>] {
        &self.transitions
    }

    /// Resolve an event against the table (pure).
    ///
    /// Returns the target state of the first transition that fires, or
    /// `None` when `current` is not a declared state or nothing matches.
    pub fn resolve(&self, current: &S, event: &E) -> Option<&S> {
        if !self.recognizes(current) {
            return None;
        }

        self.transitions
            .iter()
            .find(|t| t.can_fire(current, event))
            .map(|t| &t.to)
    }

    /// Compute the next state for (current, event) — total (pure).
    ///
    /// Falls back to returning `current` unchanged when no transition
    /// fires, so callers never need a failure path for unknown states
    /// or unhandled events.
    pub fn next(&self, current: &S, event: &E) -> S {
        self.resolve(current, event)
            .cloned()
            .unwrap_or_else(|| current.clone())
    }
}

impl<S: State, E: Event> Clone for StateChart<S, E> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            states: self.states.clone(),
            transitions: self.transitions.clone(),
        }
    }
}
