//! Latest-request-wins tracking for range-driven views.
//!
//! When the user changes a date range while the previous batch is still in
//! flight, both batches race. Each invocation takes a [`Generation`] from the
//! view's [`GenerationTracker`]; when it resolves, the result is only accepted
//! if no newer generation has started in the meantime.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;

use crate::errors::{ReportError, Result};

/// Sequence number of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Per-view generation counter. One tracker per independently refreshed
/// view; share it behind an `Arc` if several tasks drive the same view.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    latest: AtomicU64,
}

impl GenerationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new invocation, superseding every earlier one.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> Generation {
        Generation(self.latest.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest() == generation
    }

    /// Passes `result` through if `generation` is still the latest, otherwise
    /// replaces it with [`ReportError::Superseded`]. Stale failures are
    /// discarded the same way as stale successes.
    pub fn accept<T>(&self, generation: Generation, result: Result<T>) -> Result<T> {
        let latest = self.latest();
        if latest != generation {
            warn!(
                "Discarding result of generation {} (latest is {})",
                generation.0, latest.0
            );
            return Err(ReportError::Superseded {
                generation: generation.0,
                latest: latest.0,
            });
        }
        result
    }

    /// Runs `fetch` as a new generation and accepts its result only if it is
    /// still the latest once it resolves.
    ///
    /// The generation is taken when `run` is called, not when the returned
    /// future is first polled, so invocation order decides which result wins.
    pub fn run<'a, F, T>(&'a self, fetch: F) -> impl Future<Output = Result<T>> + 'a
    where
        F: Future<Output = Result<T>> + 'a,
        T: 'a,
    {
        let generation = self.begin();
        async move {
            let result = fetch.await;
            self.accept(generation, result)
        }
    }
}
