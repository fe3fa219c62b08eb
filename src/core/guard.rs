//! Guard predicates for controlling chart transitions.
//!
//! Guards are pure boolean functions that determine whether a transition
//! can fire. They encode pre-conditions declaratively, with no side
//! effects.

use super::state::State;
use std::sync::Arc;

/// Pure predicate that determines if a transition can fire.
///
/// Guards are evaluated during transition resolution. A transition whose
/// guard rejects the current state is skipped as if it were not defined,
/// so a later transition for the same (state, event) pair may still fire.
///
/// The predicate is stored behind an `Arc`: transitions carrying guards
/// stay cheaply cloneable.
///
/// # Example
///
/// ```rust
/// use headway::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PlayerState {
///     Stopped,
///     Playing,
///     Finished,
/// }
///
/// impl State for PlayerState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Stopped => "Stopped",
///             Self::Playing => "Playing",
///             Self::Finished => "Finished",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Finished)
///     }
/// }
///
/// let not_finished = Guard::new(|state: &PlayerState| !state.is_final());
///
/// assert!(not_finished.check(&PlayerState::Stopped));
/// assert!(not_finished.check(&PlayerState::Playing));
/// assert!(!not_finished.check(&PlayerState::Finished));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
