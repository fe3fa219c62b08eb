//! Eager definition validation using Validation.
//!
//! A chart definition is checked once, at build time, and ALL problems
//! are reported together rather than one at a time. Uses Stillwater's
//! `Validation` type to accumulate violations.

use crate::chart::ChartTransition;
use crate::core::{Event, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems a chart definition can have.
///
/// A definition with any of these is rejected before a machine can be
/// built from it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionViolation {
    #[error("Initial state '{state}' is not in the declared state set")]
    UnknownInitialState { state: String },

    #[error("Transition {index} leaves undeclared state '{state}'")]
    UnknownSourceState { index: usize, state: String },

    #[error("Transition {index} targets undeclared state '{state}'")]
    UnknownTargetState { index: usize, state: String },

    #[error("Transitions {first} and {second} both handle '{event}' from '{state}' without guards")]
    ConflictingTransition {
        first: usize,
        second: usize,
        state: String,
        event: String,
    },
}

/// Validate a chart definition, accumulating ALL violations.
///
/// Returns `Validation::Success(())` for a well-formed definition, or
/// `Validation::Failure` carrying every violation found.
pub fn validate_definition<S: State, E: Event>(
    initial: &S,
    states: &[S],
    transitions: &[ChartTransition<S, E>],
) -> Validation<(), NonEmptyVec<DefinitionViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionViolation>>> = Vec::new();

    // Initial state must be declared
    let check = if states.contains(initial) {
        Validation::success(())
    } else {
        Validation::fail(DefinitionViolation::UnknownInitialState {
            state: initial.name().to_string(),
        })
    };
    checks.push(check);

    // Every transition endpoint must be declared
    for (index, transition) in transitions.iter().enumerate() {
        if !states.contains(&transition.from) {
            checks.push(Validation::fail(DefinitionViolation::UnknownSourceState {
                index,
                state: transition.from.name().to_string(),
            }));
        }
        if !states.contains(&transition.to) {
            checks.push(Validation::fail(DefinitionViolation::UnknownTargetState {
                index,
                state: transition.to.name().to_string(),
            }));
        }
    }

    // Two unguarded entries for the same (state, event) pair can never
    // both fire; the second is unreachable, which is a definition bug.
    for (i, a) in transitions.iter().enumerate() {
        for (j, b) in transitions.iter().enumerate().skip(i + 1) {
            if a.from == b.from && a.on == b.on && a.guard.is_none() && b.guard.is_none() {
                checks.push(Validation::fail(DefinitionViolation::ConflictingTransition {
                    first: i,
                    second: j,
                    state: a.from.name().to_string(),
                    event: a.on.name().to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum JobState {
        Queued,
        Running,
        Done,
    }

    impl State for JobState {
        fn name(&self) -> &str {
            match self {
                Self::Queued => "Queued",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum JobEvent {
        Start,
        Finish,
    }

    impl Event for JobEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }
    }

    fn entry(from: JobState, on: JobEvent, to: JobState) -> ChartTransition<JobState, JobEvent> {
        ChartTransition {
            from,
            on,
            to,
            guard: None,
        }
    }

    #[test]
    fn well_formed_definition_passes() {
        let states = vec![JobState::Queued, JobState::Running, JobState::Done];
        let transitions = vec![
            entry(JobState::Queued, JobEvent::Start, JobState::Running),
            entry(JobState::Running, JobEvent::Finish, JobState::Done),
        ];

        let result = validate_definition(&JobState::Queued, &states, &transitions);
        assert!(result.is_success());
    }

    #[test]
    fn unknown_initial_state_is_rejected() {
        let states = vec![JobState::Queued, JobState::Running];
        let transitions = vec![entry(JobState::Queued, JobEvent::Start, JobState::Running)];

        let result = validate_definition(&JobState::Done, &states, &transitions);

        match result {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, DefinitionViolation::UnknownInitialState { .. })));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn all_violations_are_accumulated() {
        // Undeclared initial, undeclared target, and a conflict — all
        // three must be reported in one pass.
        let states = vec![JobState::Queued, JobState::Running];
        let transitions = vec![
            entry(JobState::Queued, JobEvent::Start, JobState::Done),
            entry(JobState::Queued, JobEvent::Start, JobState::Running),
            entry(JobState::Queued, JobEvent::Start, JobState::Running),
        ];

        let result = validate_definition(&JobState::Done, &states, &transitions);

        match result {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, DefinitionViolation::UnknownInitialState { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, DefinitionViolation::UnknownTargetState { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, DefinitionViolation::ConflictingTransition { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn guarded_duplicates_are_allowed() {
        let states = vec![JobState::Queued, JobState::Running, JobState::Done];
        let transitions = vec![
            ChartTransition {
                from: JobState::Queued,
                on: JobEvent::Start,
                to: JobState::Done,
                guard: Some(Guard::new(|_: &JobState| false)),
            },
            entry(JobState::Queued, JobEvent::Start, JobState::Running),
        ];

        let result = validate_definition(&JobState::Queued, &states, &transitions);
        assert!(result.is_success());
    }

    #[test]
    fn unguarded_duplicates_are_rejected() {
        let states = vec![JobState::Queued, JobState::Running, JobState::Done];
        let transitions = vec![
            entry(JobState::Queued, JobEvent::Start, JobState::Running),
            entry(JobState::Queued, JobEvent::Start, JobState::Done),
        ];

        let result = validate_definition(&JobState::Queued, &states, &transitions);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(
                    errors.iter().next(),
                    Some(DefinitionViolation::ConflictingTransition { first: 0, second: 1, .. })
                ));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }
}
