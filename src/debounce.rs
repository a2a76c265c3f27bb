//! Cancel-and-replace deferred execution for bursty inputs (live search,
//! autosave). At most one deferred run is ever pending per debouncer; a new
//! call aborts the pending one and reschedules.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    wait: Duration,
    handler: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `handler` so it runs once per quiescent period of `wait`.
    pub fn new(wait: Duration, handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            handler: Arc::new(handler),
            pending: Mutex::new(None),
        }
    }

    /// Schedule the handler to run with `arg` after the wait period. Any
    /// previously pending run is aborted, so a burst of calls yields exactly
    /// one execution, with the argument of the last call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&self, arg: T) {
        let mut pending = self.lock_pending();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let handler = Arc::clone(&self.handler);
        let wait = self.wait;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            handler(arg);
        }));
    }
}

impl<T> Debouncer<T> {
    /// Drop a pending run without executing it. No-op when nothing is pending.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // The critical section never panics, so a poisoned lock still holds
        // a usable value.
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
