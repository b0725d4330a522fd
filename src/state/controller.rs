use std::future::Future;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::FetchResult;

use super::fetch_state::FetchState;

/// How a fetch call ended from the controller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result became the controller's state.
    Applied,
    /// A newer fetch, a cancel or a teardown happened first; the result was dropped.
    Discarded,
    /// No request was issued.
    Skipped,
}

/// Proof that a fetch was started. Carries the generation it was issued under.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

struct Inner<T> {
    state: FetchState<T>,
    /// State to restore if the in-flight fetch is cancelled.
    settled: FetchState<T>,
    generation: u64,
    active: bool,
}

/// Per-view state machine for one fetch target.
///
/// Every fetch is stamped with a generation number; only a result carrying the
/// current generation may update the state, so a late answer to a superseded
/// request is dropped. Clones share the same state.
pub struct FetchController<T> {
    target: &'static str,
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for FetchController<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> FetchController<T> {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            inner: Arc::new(Mutex::new(Inner {
                state: FetchState::Idle,
                settled: FetchState::Idle,
                generation: 0,
                active: true,
            })),
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn state(&self) -> FetchState<T> {
        self.lock().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().state.is_loading()
    }

    pub fn is_active(&self) -> bool {
        self.lock().active
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Fetch unless a request is already in flight, in which case `request`
    /// is never called.
    pub async fn load<F, Fut>(&self, request: F) -> FetchOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchResult<T>>,
    {
        match self.start(false) {
            Some(ticket) => self.complete(ticket, request().await),
            None => FetchOutcome::Skipped,
        }
    }

    /// Fetch now, superseding any request still in flight.
    pub async fn refetch<F, Fut>(&self, request: F) -> FetchOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchResult<T>>,
    {
        match self.start(true) {
            Some(ticket) => self.complete(ticket, request().await),
            None => FetchOutcome::Skipped,
        }
    }

    /// Move to `Loading` under a fresh generation. Returns `None` after
    /// teardown, or when already loading and `supersede` is false.
    pub fn start(&self, supersede: bool) -> Option<FetchTicket> {
        let mut inner = self.lock();
        if !inner.active {
            return None;
        }
        if inner.state.is_loading() && !supersede {
            tracing::debug!(target_name = self.target, "Fetch already in flight; not starting another");
            return None;
        }
        inner.generation += 1;
        if !inner.state.is_loading() {
            inner.settled = mem::replace(&mut inner.state, FetchState::Loading);
        }
        tracing::debug!(target_name = self.target, generation = inner.generation, "Fetch started");
        Some(FetchTicket {
            generation: inner.generation,
        })
    }

    /// Apply `result` if `ticket` still belongs to the latest fetch.
    pub fn complete(&self, ticket: FetchTicket, result: FetchResult<T>) -> FetchOutcome {
        let mut inner = self.lock();
        if !inner.active || inner.generation != ticket.generation {
            tracing::debug!(
                target_name = self.target,
                generation = ticket.generation,
                current = inner.generation,
                "Discarding stale fetch result"
            );
            return FetchOutcome::Discarded;
        }
        if let FetchResult::Failure(ref e) = result {
            tracing::warn!(target_name = self.target, error = %e, "Fetch failed");
        }
        inner.state = result.into();
        inner.settled = FetchState::Idle;
        FetchOutcome::Applied
    }

    /// Abandon the in-flight fetch and go back to the state held before it
    /// started. Returns false when nothing was in flight.
    pub fn cancel(&self) -> bool {
        let mut inner = self.lock();
        if !inner.active || !inner.state.is_loading() {
            return false;
        }
        inner.generation += 1;
        inner.state = mem::take(&mut inner.settled);
        tracing::debug!(target_name = self.target, "Fetch cancelled");
        true
    }

    /// Detach the controller from its view. State is frozen from here on and
    /// any result still in flight is dropped.
    pub fn teardown(&self) {
        let mut inner = self.lock();
        inner.active = false;
        inner.generation += 1;
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
