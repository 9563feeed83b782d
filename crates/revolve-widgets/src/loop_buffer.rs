#![forbid(unsafe_code)]

//! Index arithmetic for an endlessly looping strip.
//!
//! `N` logical items are materialized `M` times back to back. The strip is
//! positioned by a signed display index into those `M·N` slots; the offset a
//! host paints is `-display_index · item_extent`.
//!
//! # Re-centering
//!
//! Navigation moves the index freely. Once it reaches either edge of the
//! safe band `[N, (M-1)·N]`, [`LoopBuffer::navigate`] hands back a
//! [`Recenter`]: the whole-copy shift that brings the index back inside the
//! band. The caller applies it *after* the animation to the out-of-band slot
//! has settled, without animation. Because every copy is identical, the snap
//! is invisible and the loop appears infinite.
//!
//! # Invariants
//!
//! 1. `current_page()` is `|display_index| mod N` and is never negative.
//! 2. Applying a [`Recenter`] never changes `current_page()`.
//! 3. After a [`Recenter`] is applied the index lies within `[N, (M-1)·N]`.

use std::fmt;

/// Smallest repeat factor that leaves a full copy of margin on both sides.
pub const MIN_REPEAT_FACTOR: usize = 3;

/// Construction and paging errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopBufferError {
    /// The strip has no logical items.
    EmptySequence,
    /// Fewer than [`MIN_REPEAT_FACTOR`] copies were requested.
    RepeatFactorTooSmall(usize),
    /// A page index at or beyond the logical count.
    PageOutOfRange {
        /// Requested page.
        page: usize,
        /// Number of logical items.
        count: usize,
    },
}

impl fmt::Display for LoopBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "loop buffer needs at least one item"),
            Self::RepeatFactorTooSmall(m) => write!(
                f,
                "repeat factor {m} is below the minimum of {MIN_REPEAT_FACTOR}"
            ),
            Self::PageOutOfRange { page, count } => {
                write!(f, "page {page} out of range for {count} items")
            }
        }
    }
}

impl std::error::Error for LoopBufferError {}

/// A pending silent correction: add `shift` to the display index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recenter {
    /// Signed slot shift. A multiple of the logical count whenever the index
    /// being corrected is non-negative.
    pub shift: i64,
}

/// Display-index state for a looping strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopBuffer {
    logical_count: usize,
    repeat_factor: usize,
    display_index: i64,
    item_extent: f64,
}

impl LoopBuffer {
    /// Materialize `repeat_factor` copies of `logical_count` items and park
    /// the index at the start of the second copy.
    pub fn new(
        logical_count: usize,
        repeat_factor: usize,
        item_extent: f64,
    ) -> Result<Self, LoopBufferError> {
        if logical_count == 0 {
            return Err(LoopBufferError::EmptySequence);
        }
        if repeat_factor < MIN_REPEAT_FACTOR {
            return Err(LoopBufferError::RepeatFactorTooSmall(repeat_factor));
        }
        Ok(Self {
            logical_count,
            repeat_factor,
            display_index: logical_count as i64,
            item_extent,
        })
    }

    /// Number of distinct logical items (`N`).
    #[must_use]
    pub fn logical_count(&self) -> usize {
        self.logical_count
    }

    /// Number of materialized copies (`M`).
    #[must_use]
    pub fn repeat_factor(&self) -> usize {
        self.repeat_factor
    }

    /// Total materialized slots (`M·N`).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.logical_count * self.repeat_factor
    }

    /// Logical item shown in materialized slot `slot`.
    #[must_use]
    pub fn slot_identity(&self, slot: usize) -> usize {
        slot % self.logical_count
    }

    /// Logical identity of every materialized slot, in strip order.
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.slot_count()).map(|slot| self.slot_identity(slot))
    }

    /// Current display index.
    #[must_use]
    pub fn display_index(&self) -> i64 {
        self.display_index
    }

    /// Pixel span of one item.
    #[must_use]
    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    /// Horizontal offset for the current index.
    #[must_use]
    pub fn offset(&self) -> f64 {
        -(self.display_index as f64) * self.item_extent
    }

    /// Lower edge of the safe band (`N`).
    #[must_use]
    pub fn lower_edge(&self) -> i64 {
        self.logical_count as i64
    }

    /// Upper edge of the safe band (`(M-1)·N`).
    #[must_use]
    pub fn upper_edge(&self) -> i64 {
        ((self.repeat_factor - 1) * self.logical_count) as i64
    }

    /// Logical page currently leading the viewport.
    #[must_use]
    pub fn current_page(&self) -> usize {
        page_of(self.display_index, self.logical_count)
    }

    /// Move by `delta` slots.
    ///
    /// Returns the correction to apply once the move has visually settled, or
    /// `None` when the new index is strictly inside the safe band.
    pub fn navigate(&mut self, delta: i64) -> Option<Recenter> {
        self.display_index = self.display_index.saturating_add(delta);
        self.recenter_needed()
    }

    /// Signed step from the current page to `page`.
    pub fn delta_to_page(&self, page: usize) -> Result<i64, LoopBufferError> {
        if page >= self.logical_count {
            return Err(LoopBufferError::PageOutOfRange {
                page,
                count: self.logical_count,
            });
        }
        Ok(page as i64 - self.current_page() as i64)
    }

    /// Correction the current index would need, if any.
    #[must_use]
    pub fn recenter_needed(&self) -> Option<Recenter> {
        let idx = self.display_index;
        let n = self.logical_count as i64;
        let (lo, hi) = (self.lower_edge(), self.upper_edge());

        let target = if idx < 0 {
            // Off the materialized strip; land on the same page in the band.
            lo + self.current_page() as i64
        } else if idx >= hi {
            let copies = ((idx - hi + n - 1) / n).max(1);
            idx - copies * n
        } else if idx <= lo {
            let copies = ((lo - idx + n - 1) / n).max(1);
            idx + copies * n
        } else {
            return None;
        };
        Some(Recenter { shift: target - idx })
    }

    /// Apply a correction previously returned by [`navigate`](Self::navigate).
    pub fn apply(&mut self, recenter: Recenter) {
        self.display_index = self.display_index.saturating_add(recenter.shift);
    }
}

/// `|index| mod count`, the page convention used throughout the carousel.
#[must_use]
pub fn page_of(index: i64, count: usize) -> usize {
    (index.unsigned_abs() % count as u64) as usize
}
