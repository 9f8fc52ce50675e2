// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing.
//!
//! A [`Debounced`] wrapper owns its pending call. Every [`Debounced::call`]
//! replaces the pending argument and pushes the deadline back; the wrapped
//! function runs once, from [`Debounced::poll`], after `wait` has passed with
//! no further calls.

use std::time::{Duration, Instant};

/// Wraps `func` so bursts of calls collapse into one, see [`Debounced`].
pub fn debounce<A, F>(func: F, wait: Duration) -> Debounced<A, F>
where
    F: FnMut(A),
{
    Debounced {
        func,
        wait,
        pending: None,
    }
}

/// A debounced function. Create with [`debounce`].
pub struct Debounced<A, F> {
    func: F,
    wait: Duration,
    pending: Option<(Instant, A)>,
}

impl<A, F> Debounced<A, F>
where
    F: FnMut(A),
{
    /// Records a call at `now`. Any earlier pending call is discarded.
    pub fn call(&mut self, now: Instant, arg: A) {
        self.pending = Some((now + self.wait, arg));
    }

    /// Runs the wrapped function if the quiet period has elapsed.
    ///
    /// Returns `true` if the function ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some((deadline, arg)) if now >= deadline => {
                (self.func)(arg);
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending call will fire.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A, F> std::fmt::Debug for Debounced<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.wait)
            .field("pending", &self.pending.as_ref().map(|(deadline, _)| deadline))
            .finish_non_exhaustive()
    }
}
