//! Headway: state, history, and progress primitives for interactive
//! applications.
//!
//! Headway follows a "pure core, imperative shell" philosophy: chart
//! definitions, transition resolution, and history bookkeeping are pure
//! functions over immutable values, while the stateful wrappers around
//! them stay thin.
//!
//! # Primitives
//!
//! - **Machine**: a chart-driven finite state machine — declare states
//!   and (state, event) transitions, validate eagerly, then `send`
//!   events at it
//! - **UndoStack**: bounded snapshot history with cursor-based
//!   undo/redo, duplicate suppression, and a delay-coalescing variant
//! - **Recurrence**: per-count occurrence handlers fired as a counter
//!   advances
//! - **Tappable**: an async task whose progress can be observed before
//!   it resolves
//!
//! # Example
//!
//! ```rust
//! use headway::builder::{event_transition, ChartBuilder};
//! use headway::machine::Machine;
//! use headway::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum PlaybackState {
//!         Stopped,
//!         Playing,
//!         Paused,
//!     }
//! }
//!
//! event_enum! {
//!     enum PlaybackEvent {
//!         Play,
//!         Pause,
//!         Stop,
//!     }
//! }
//!
//! let chart = ChartBuilder::new()
//!     .initial(PlaybackState::Stopped)
//!     .states([
//!         PlaybackState::Stopped,
//!         PlaybackState::Playing,
//!         PlaybackState::Paused,
//!     ])
//!     .transitions(vec![
//!         event_transition(PlaybackState::Stopped, PlaybackEvent::Play, PlaybackState::Playing),
//!         event_transition(PlaybackState::Playing, PlaybackEvent::Pause, PlaybackState::Paused),
//!         event_transition(PlaybackState::Paused, PlaybackEvent::Play, PlaybackState::Playing),
//!         event_transition(PlaybackState::Playing, PlaybackEvent::Stop, PlaybackState::Stopped),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(chart);
//!
//! machine.send(&PlaybackEvent::Play);
//! assert!(machine.is(&PlaybackState::Playing));
//!
//! // Events with no entry for the current state are ignored
//! machine.send(&PlaybackEvent::Play);
//! assert!(machine.is(&PlaybackState::Playing));
//!
//! machine.send(&PlaybackEvent::Stop);
//! assert!(machine.is(&PlaybackState::Stopped));
//! ```

pub mod builder;
pub mod chart;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod recurrence;
pub mod tap;
pub mod undo;

// Re-export commonly used types
pub use builder::{ChartBuilder, TransitionBuilder};
pub use chart::{ChartTransition, StateChart};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Event, Guard, State, TransitionLog, TransitionRecord};
pub use machine::Machine;
pub use recurrence::Recurrence;
pub use tap::{TapHandle, Tappable};
pub use undo::{DeferredUndoStack, UndoStack};
