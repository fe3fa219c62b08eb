//! Delay-coalescing undo stack.
//!
//! Editors save on every keystroke; committing each one would flood the
//! history. [`DeferredUndoStack`] holds a pending snapshot behind a
//! cancellable delay — rapid schedules collapse into the last one, and
//! any explicit save/undo/redo cancels the pending snapshot first.

use super::UndoStack;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Undo stack that coalesces rapid saves behind a delay.
///
/// Wraps an [`UndoStack`] in shared ownership so a background task can
/// commit the pending snapshot once the delay elapses. Must be used
/// within a Tokio runtime.
///
/// Cancellation is only guaranteed before the delay fires: a pending
/// save already past its delay commits even if a cancel races in.
pub struct DeferredUndoStack<T> {
    inner: Arc<Mutex<UndoStack<T>>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + 'static> DeferredUndoStack<T> {
    /// Wrap a stack, coalescing scheduled saves over `delay`.
    pub fn new(stack: UndoStack<T>, delay: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(stack)),
            delay,
            pending: None,
        }
    }

    /// Schedule a snapshot to be saved after the delay.
    ///
    /// Replaces any previously scheduled snapshot — a burst of calls
    /// commits only the last one, one delay after the burst's last call.
    pub fn schedule(&mut self, snapshot: T) {
        self.cancel();

        let inner = Arc::clone(&self.inner);
        let delay = self.delay;
        trace!(delay_ms = delay.as_millis() as u64, "snapshot scheduled");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            inner.lock().save(snapshot);
        }));
    }

    /// Save immediately, cancelling any pending snapshot.
    pub fn save(&mut self, snapshot: T) {
        self.cancel();
        self.inner.lock().save(snapshot);
    }

    /// Undo, cancelling any pending snapshot.
    ///
    /// Returns an owned copy of the snapshot at the new position.
    pub fn undo(&mut self) -> Option<T> {
        self.cancel();
        self.inner.lock().undo().cloned()
    }

    /// Redo, cancelling any pending snapshot.
    ///
    /// Returns an owned copy of the snapshot at the new position.
    pub fn redo(&mut self) -> Option<T> {
        self.cancel();
        self.inner.lock().redo().cloned()
    }

    /// Drop the pending snapshot without saving it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("pending snapshot cancelled");
        }
    }

    /// Whether a scheduled snapshot is still waiting on its delay.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// An owned copy of the current snapshot, if any.
    pub fn current(&self) -> Option<T> {
        self.inner.lock().current().cloned()
    }

    /// Number of committed snapshots.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no snapshots have been committed.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// The configured coalescing delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for DeferredUndoStack<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
