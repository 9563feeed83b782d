#![forbid(unsafe_code)]

//! Horizontal swipe recognition.
//!
//! A swipe is the displacement between a touch start and the matching touch
//! end. Only displacements strictly greater than the threshold count; anything
//! at or under it is treated as a tap and ignored.

/// Default minimum horizontal displacement for a swipe, in screen units.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left; advance to the next item.
    Next,
    /// Finger moved left to right; go back one item.
    Previous,
}

impl SwipeDirection {
    /// Navigation step for this direction.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Tracks one touch at a time and classifies its release.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f64,
    start_x: Option<f64>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeDetector {
    /// Create a detector with the given displacement threshold.
    ///
    /// Negative or NaN thresholds are treated as zero.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.max(0.0)
        };
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a touch is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Record the start of a touch. A second start replaces the first.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the touch at `x` and classify it.
    ///
    /// Returns `None` for sub-threshold movement or when no touch was begun.
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(start - x, self.threshold)
    }

    /// Drop any in-progress touch.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Classify a `start - end` displacement against `threshold`.
#[must_use]
pub fn classify(displacement: f64, threshold: f64) -> Option<SwipeDirection> {
    if displacement > threshold {
        Some(SwipeDirection::Next)
    } else if -displacement > threshold {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}
