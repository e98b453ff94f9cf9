//! View ownership of in-flight work.
//!
//! A view opens a [`ViewScope`] on entry and closes it on exit (explicitly or
//! by dropping it). Work started by the view carries a [`ScopeToken`]; a
//! result that resolves after the scope closed is discarded instead of being
//! written into state that no longer belongs to a mounted view.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ApiError;

#[derive(Debug)]
pub struct ViewScope {
    live: Arc<AtomicBool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    #[must_use]
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    /// Token for one piece of work owned by this view.
    #[must_use]
    pub fn token(&self) -> ScopeToken {
        ScopeToken { live: self.live.clone() }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Mark the view as exited. Idempotent.
    pub fn close(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.close();
    }
}

/// Ownership check carried by a request or realtime callback.
#[derive(Clone, Debug)]
pub struct ScopeToken {
    live: Arc<AtomicBool>,
}

impl ScopeToken {
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Await `work`, yielding its output only if the owning view is still open.
    pub async fn run<F: Future>(&self, work: F) -> Option<F::Output> {
        let output = work.await;
        if self.is_live() {
            Some(output)
        } else {
            log::debug!("view exited before work resolved; discarding result");
            None
        }
    }
}

/// Holds the scope of a view's latest request.
///
/// Views that refetch on a parameter change (a profile page whose user id
/// changes) call [`RequestSlot::begin`] for every fetch; beginning a new
/// request closes the previous one so a slow, superseded response can never
/// overwrite a newer one.
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: Mutex<Option<ViewScope>>,
}

impl RequestSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede any in-flight request and return the token for the next one.
    pub fn begin(&self) -> ScopeToken {
        let scope = ViewScope::new();
        let token = scope.token();
        match self.current.lock() {
            Ok(mut current) => {
                if let Some(previous) = current.replace(scope) {
                    previous.close();
                }
            }
            Err(poisoned) => {
                log::warn!("request slot lock poisoned; resetting");
                *poisoned.into_inner() = Some(scope);
            }
        }
        token
    }

    /// Close the in-flight request, if any. Idempotent.
    pub fn close(&self) {
        let previous = match self.current.lock() {
            Ok(mut current) => current.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(previous) = previous {
            previous.close();
        }
    }
}

/// State of a single-fetch view: loading until the first successful response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    /// Apply a fetch result. Success replaces the state verbatim; failure is
    /// logged and leaves the state untouched.
    pub fn resolve(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(value) => *self = Self::Ready(value),
            Err(e) => log::warn!("fetch failed, view keeps its current state: {e}"),
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
