#![forbid(unsafe_code)]

//! Monotonic clocks.
//!
//! Widgets never read wall time directly. They are handed a [`Clock`] and
//! schedule deferred work relative to [`Clock::now`]. In production that is a
//! [`SystemClock`]; in tests and in host-driven (WASM) embeddings it is a
//! [`ManualClock`] that only moves when the host advances it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Source of monotonic time, measured from an arbitrary origin.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall-clock backed monotonic time, origin at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock advanced explicitly by its owner.
///
/// Clones share the same time source, so a test (or host) can keep one handle
/// while a widget owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current time. Moving backwards is ignored.
    pub fn set(&self, now: Duration) {
        self.nanos.fetch_max(saturating_nanos(now), Ordering::SeqCst);
    }

    /// Advance the current time by `dt`.
    pub fn advance(&self, dt: Duration) {
        let dt = saturating_nanos(dt);
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cur| {
                Some(cur.saturating_add(dt))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
