//! Core State trait for chart-driven machines.
//!
//! Every state a machine can occupy implements this trait, which exposes
//! pure inspection methods with no side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// All methods are pure. States are immutable values describing the
/// current position in a state chart.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition log
/// - `PartialEq`: transition resolution compares states
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: states are checkpointed
///
/// # Example
///
/// ```rust
/// use headway::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DocumentState {
///     Draft,
///     InReview,
///     Published,
///     Rejected,
/// }
///
/// impl State for DocumentState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::InReview => "InReview",
///             Self::Published => "Published",
///             Self::Rejected => "Rejected",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Published | Self::Rejected)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Rejected)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are positions from which no further transitions
    /// are expected.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Error states represent failure positions. They are usually also
    /// final states, but this is not enforced.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
