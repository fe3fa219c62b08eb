//! Builder for constructing state charts.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::chart::{validate_definition, ChartTransition, StateChart};
use crate::core::{Event, State};
use stillwater::validation::Validation;

/// Builder for constructing charts with a fluent API.
///
/// `build()` validates the whole definition eagerly and reports every
/// violation at once.
pub struct ChartBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: Vec<S>,
    transitions: Vec<ChartTransition<S, E>>,
}

impl<S: State, E: Event> ChartBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state. Re-declaring a state is harmless.
    pub fn state(mut self, state: S) -> Self {
        if !self.states.contains(&state) {
            self.states.push(state);
        }
        self
    }

    /// Declare several states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for state in states {
            if !self.states.contains(&state) {
                self.states.push(state);
            }
        }
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: ChartTransition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<ChartTransition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the chart.
    ///
    /// Fails on a missing initial state or empty state set, and on any
    /// definition violation — all violations are reported together.
    pub fn build(self) -> Result<StateChart<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        match validate_definition(&initial, &self.states, &self.transitions) {
            Validation::Success(_) => Ok(StateChart::assemble(
                initial,
                self.states,
                self.transitions,
            )),
            Validation::Failure(violations) => Err(BuildError::InvalidDefinition {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

impl<S: State, E: Event> Default for ChartBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::DefinitionViolation;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TabState {
        Hidden,
        Visible,
        Pinned,
    }

    impl State for TabState {
        fn name(&self) -> &str {
            match self {
                Self::Hidden => "Hidden",
                Self::Visible => "Visible",
                Self::Pinned => "Pinned",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum TabEvent {
        Show,
        Pin,
    }

    impl Event for TabEvent {
        fn name(&self) -> &str {
            match self {
                Self::Show => "Show",
                Self::Pin => "Pin",
            }
        }
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = ChartBuilder::<TabState, TabEvent>::new()
            .state(TabState::Hidden)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_declared_states() {
        let result = ChartBuilder::<TabState, TabEvent>::new()
            .initial(TabState::Hidden)
            .build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn undeclared_initial_state_fails_eagerly() {
        let result = ChartBuilder::<TabState, TabEvent>::new()
            .initial(TabState::Pinned)
            .states([TabState::Hidden, TabState::Visible])
            .build();

        match result {
            Err(BuildError::InvalidDefinition { violations }) => {
                assert_eq!(violations.len(), 1);
                assert!(matches!(
                    violations[0],
                    DefinitionViolation::UnknownInitialState { .. }
                ));
            }
            Err(other) => panic!("Expected InvalidDefinition, got {other:?}"),
            Ok(_) => panic!("Expected InvalidDefinition, got a chart"),
        }
    }

    #[test]
    fn fluent_api_builds_chart() {
        let chart = ChartBuilder::new()
            .initial(TabState::Hidden)
            .states([TabState::Hidden, TabState::Visible, TabState::Pinned])
            .transition(
                TransitionBuilder::new()
                    .from(TabState::Hidden)
                    .on(TabEvent::Show)
                    .to(TabState::Visible),
            )
            .unwrap()
            .transition(
                TransitionBuilder::new()
                    .from(TabState::Visible)
                    .on(TabEvent::Pin)
                    .to(TabState::Pinned),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(chart.initial(), &TabState::Hidden);
        assert_eq!(chart.states().len(), 3);
        assert_eq!(
            chart.resolve(&TabState::Hidden, &TabEvent::Show),
            Some(&TabState::Visible)
        );
    }

    #[test]
    fn transition_builder_errors_surface_through_chart_builder() {
        let result = ChartBuilder::new()
            .initial(TabState::Hidden)
            .states([TabState::Hidden, TabState::Visible])
            .transition(TransitionBuilder::<TabState, TabEvent>::new().from(TabState::Hidden));

        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn duplicate_state_declarations_collapse() {
        let chart = ChartBuilder::<TabState, TabEvent>::new()
            .initial(TabState::Hidden)
            .state(TabState::Hidden)
            .state(TabState::Hidden)
            .state(TabState::Visible)
            .build()
            .unwrap();

        assert_eq!(chart.states().len(), 2);
    }

    #[test]
    fn all_definition_violations_surface_together() {
        let result = ChartBuilder::new()
            .initial(TabState::Pinned)
            .states([TabState::Hidden])
            .add_transition(ChartTransition {
                from: TabState::Hidden,
                on: TabEvent::Show,
                to: TabState::Visible,
                guard: None,
            })
            .build();

        match result {
            Err(BuildError::InvalidDefinition { violations }) => {
                assert_eq!(violations.len(), 2);
            }
            Err(other) => panic!("Expected InvalidDefinition, got {other:?}"),
            Ok(_) => panic!("Expected InvalidDefinition, got a chart"),
        }
    }
}
