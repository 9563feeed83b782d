#![forbid(unsafe_code)]

//! Offset tweening.
//!
//! Hosts that paint the carousel themselves (rather than delegating to a CSS
//! transition) use [`Tween`] to interpolate the strip offset between the
//! position it was at and the position a navigation requested.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f64) -> f64;

/// Constant velocity.
#[inline]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-out, close to the browser's default `ease` timing curve.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Interpolates an `f64` position from `from` to `to` over a duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Tween from `from` to `to` over `duration` using [`ease_out_cubic`].
    ///
    /// A zero duration completes on the first read.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing: ease_out_cubic,
        }
    }

    /// A tween already resting at `at`.
    #[must_use]
    pub fn settled(at: f64) -> Self {
        Self::new(at, at, Duration::ZERO)
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear progress in [0, 1] before easing.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current interpolated position.
    #[must_use]
    pub fn position(&self) -> f64 {
        let t = (self.easing)(self.progress());
        self.from + (self.to - self.from) * t
    }

    /// Final position.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Start a new tween from the current position toward `to`.
    pub fn retarget(&mut self, to: f64, duration: Duration) {
        *self = Self::new(self.position(), to, duration).easing(self.easing);
    }

    /// Jump to `to` with no interpolation.
    pub fn snap(&mut self, to: f64) {
        *self = Self::settled(to).easing(self.easing);
    }
}
