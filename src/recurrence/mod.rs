//! Per-count occurrence handlers.
//!
//! A [`Recurrence`] counts how often something has happened and fires a
//! registered handler when the counter lands on that handler's count.
//! Typical use: "the third time the hint is dismissed, stop showing it".

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Errors from handler registration
#[derive(Debug, Error, PartialEq)]
pub enum RecurrenceError {
    /// Handlers are keyed by occurrence counts, which start at one
    #[error("Occurrence count must be greater than zero")]
    ZeroCount,
}

type OccurrenceHandler = Box<dyn FnMut(usize) + Send>;

/// Counter with handlers registered at exact occurrence counts.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use headway::recurrence::Recurrence;
///
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// let mut dismissals = Recurrence::new();
/// dismissals
///     .handle(3, move |_| flag.store(true, Ordering::SeqCst))
///     .unwrap();
///
/// dismissals.occur();
/// dismissals.occur();
/// assert!(!fired.load(Ordering::SeqCst));
///
/// dismissals.occur();
/// assert!(fired.load(Ordering::SeqCst));
/// ```
pub struct Recurrence {
    id: Uuid,
    count: usize,
    handlers: HashMap<usize, OccurrenceHandler>,
}

impl Recurrence {
    /// Create a recurrence with a fresh identity and a zero counter.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            count: 0,
            handlers: HashMap::new(),
        }
    }

    /// This recurrence's unique identity.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// How many occurrences have been counted.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Register a handler for an exact occurrence count.
    ///
    /// Replaces any handler already registered at that count. A count
    /// of zero is rejected — the counter starts below one and only
    /// advances onto positive counts.
    pub fn handle<F>(&mut self, count: usize, handler: F) -> Result<(), RecurrenceError>
    where
        F: FnMut(usize) + Send + 'static,
    {
        if count == 0 {
            return Err(RecurrenceError::ZeroCount);
        }
        self.handlers.insert(count, Box::new(handler));
        Ok(())
    }

    /// Remove the handler at a count, reporting whether one was there.
    pub fn eject(&mut self, count: usize) -> bool {
        self.handlers.remove(&count).is_some()
    }

    /// Count one occurrence, firing the handler at the new count.
    pub fn occur(&mut self) {
        self.occur_by(1);
    }

    /// Count `n` occurrences at once, firing only the handler at the
    /// landing count.
    ///
    /// Counts skipped over do not fire. `occur_by(0)` is a no-op.
    pub fn occur_by(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.count += n;

        if let Some(handler) = self.handlers.get_mut(&self.count) {
            debug!(id = %self.id, count = self.count, "occurrence handler fired");
            handler(self.count);
        }
    }

    /// Reset the counter to zero, keeping registered handlers.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recurrence")
            .field("id", &self.id)
            .field("count", &self.count)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
