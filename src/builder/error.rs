//! Build errors for chart and transition builders.

use crate::chart::DefinitionViolation;
use thiserror::Error;

/// Errors that can occur when building charts and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Call .state(..) or .states(..) before .build()")]
    NoStates,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Chart definition has {} violation(s)", .violations.len())]
    InvalidDefinition { violations: Vec<DefinitionViolation> },
}
