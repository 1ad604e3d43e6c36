//! View-scoped cancellation for in-flight requests.
//!
//! A view creates one `RequestScope`, routes every async request through
//! `RequestScope::run`, and closes the scope in `on_cleanup`. Closing aborts
//! pending futures, and anything that still completes afterwards is
//! discarded, so no result is ever written into a disposed view.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
struct ScopeInner {
    closed: AtomicBool,
    next_id: AtomicU64,
    pending: Mutex<Vec<(u64, AbortHandle)>>,
}

impl ScopeInner {
    fn pending(&self) -> MutexGuard<'_, Vec<(u64, AbortHandle)>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Removes one abort handle when its `run` call finishes or is dropped.
struct PendingEntry<'a> {
    inner: &'a ScopeInner,
    id: u64,
}

impl Drop for PendingEntry<'_> {
    fn drop(&mut self) {
        self.inner.pending().retain(|(id, _)| *id != self.id);
    }
}

/// Cloneable handle; all clones observe the same open/closed state.
#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    inner: Arc<ScopeInner>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Drive `fut` to completion unless the scope closes first.
    ///
    /// Returns `None` if the scope was already closed, was closed while
    /// waiting, or closed before the caller could observe the output.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_closed() {
            return None;
        }
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.pending().push((id, handle));
        let _entry = PendingEntry { inner: &self.inner, id };
        let output = Abortable::new(fut, registration).await.ok()?;
        (!self.is_closed()).then_some(output)
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.inner.pending().len()
    }

    /// Abort everything in flight and refuse new work. Idempotent.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
        let drained: Vec<(u64, AbortHandle)> = self.inner.pending().drain(..).collect();
        for (_, handle) in drained {
            handle.abort();
        }
    }
}
