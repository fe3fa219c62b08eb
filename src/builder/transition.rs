//! Builder for constructing chart transitions.

use crate::builder::error::BuildError;
use crate::chart::ChartTransition;
use crate::core::{Event, Guard, State};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, E: Event> {
    from: Option<S>,
    on: Option<E>,
    to: Option<S>,
    guard: Option<Guard<S>>,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.on = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<ChartTransition<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(ChartTransition {
            from,
            on,
            to,
            guard: self.guard,
        })
    }
}

impl<S: State, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
