//! Progress-tappable tasks.
//!
//! A [`Tappable`] wraps an async task body with a side channel for
//! progress values. Observers registered with [`Tappable::tap`] see
//! every reported value, in order, before the task's final value is
//! returned — including values reported in the same poll that completes
//! the task.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::trace;

/// Reporter handed to the task body.
///
/// Cheap to clone; reporting never fails. Values reported after the
/// listener side is gone are silently dropped.
pub struct TapHandle<P> {
    sender: mpsc::UnboundedSender<P>,
}

impl<P> TapHandle<P> {
    /// Report a progress value to the taps.
    pub fn report(&self, progress: P) {
        let _ = self.sender.send(progress);
    }
}

impl<P> Clone for TapHandle<P> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

type TapFn<P> = Arc<dyn Fn(&P) + Send + Sync>;

/// An async task whose progress can be observed before it resolves.
///
/// # Example
///
/// ```rust
/// use headway::tap::Tappable;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let total = Tappable::new(|handle| async move {
///     let mut sum = 0u32;
///     for chunk in [10u32, 20, 30] {
///         sum += chunk;
///         handle.report(sum);
///     }
///     sum
/// })
/// .tap(|sum: &u32| println!("processed {sum} so far"))
/// .run()
/// .await;
///
/// assert_eq!(total, 60);
/// # }
/// ```
pub struct Tappable<T, P> {
    future: Pin<Box<dyn Future<Output = T> + Send>>,
    progress: mpsc::UnboundedReceiver<P>,
    taps: Vec<TapFn<P>>,
}

impl<T, P> Tappable<T, P> {
    /// Build a tappable task from a body that receives a [`TapHandle`].
    pub fn new<F, Fut>(body: F) -> Self
    where
        F: FnOnce(TapHandle<P>) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let (sender, progress) = mpsc::unbounded_channel();
        let future = Box::pin(body(TapHandle { sender }));
        Self {
            future,
            progress,
            taps: Vec::new(),
        }
    }

    /// Register a progress observer (chainable).
    ///
    /// Every tap sees every reported value, in report order.
    pub fn tap<F>(mut self, callback: F) -> Self
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.taps.push(Arc::new(callback));
        self
    }

    /// Drive the task to completion, delivering progress along the way.
    ///
    /// Progress racing completion is drained and delivered before the
    /// final value is returned.
    pub async fn run(mut self) -> T {
        loop {
            tokio::select! {
                biased;
                Some(progress) = self.progress.recv() => {
                    self.deliver(&progress);
                }
                value = &mut self.future => {
                    while let Ok(progress) = self.progress.try_recv() {
                        self.deliver(&progress);
                    }
                    trace!(taps = self.taps.len(), "tappable task resolved");
                    return value;
                }
            }
        }
    }

    fn deliver(&self, progress: &P) {
        for tap in &self.taps {
            tap(progress);
        }
    }
}
