//! Builder API for ergonomic chart construction.
//!
//! This module provides fluent builders and macros for creating charts
//! with minimal boilerplate while maintaining type safety.

pub mod chart;
pub mod error;
pub mod macros;
pub mod transition;

pub use chart::ChartBuilder;
pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::chart::ChartTransition;
use crate::core::{Event, State};

/// Create a plain transition: from `from`, event `on` moves to `to`.
///
/// # Example
///
/// ```
/// use headway::builder::event_transition;
/// use headway::{event_enum, state_enum};
///
/// state_enum! {
///     enum Toggle {
///         Off,
///         On,
///     }
/// }
///
/// event_enum! {
///     enum Flip {
///         Press,
///     }
/// }
///
/// let transition = event_transition(Toggle::Off, Flip::Press, Toggle::On);
/// assert!(transition.can_fire(&Toggle::Off, &Flip::Press));
/// ```
pub fn event_transition<S, E>(from: S, on: E, to: S) -> ChartTransition<S, E>
where
    S: State,
    E: Event,
{
    TransitionBuilder::new()
        .from(from)
        .on(on)
        .to(to)
        .build()
        .expect("Plain transition should always build")
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use headway::builder::guarded_transition;
/// use headway::core::State;
/// use headway::{event_enum, state_enum};
///
/// state_enum! {
///     enum Screen {
///         List,
///         Detail,
///         Archived,
///     }
///     final: [Archived]
/// }
///
/// event_enum! {
///     enum Nav {
///         Open,
///     }
/// }
///
/// let transition = guarded_transition(
///     Screen::List,
///     Nav::Open,
///     Screen::Detail,
///     |s: &Screen| !s.is_final(),
/// );
/// assert!(transition.can_fire(&Screen::List, &Nav::Open));
/// ```
pub fn guarded_transition<S, E, F>(from: S, on: E, to: S, guard: F) -> ChartTransition<S, E>
where
    S: State,
    E: Event,
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .from(from)
        .on(on)
        .to(to)
        .when(guard)
        .build()
        .expect("Guarded transition should always build")
}
