#![forbid(unsafe_code)]

//! Canonical input events pushed by the host.
//!
//! Hosts translate their native notifications (DOM listeners, media-query
//! callbacks, test scripts) into these values. Periodic ticks are not events;
//! they come from scheduled tasks.

/// A discrete input signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer entered the carousel viewport.
    PointerEnter,
    /// Pointer left the carousel viewport.
    PointerLeave,
    /// A touch began at horizontal screen position `x`.
    TouchStart {
        /// Horizontal screen coordinate.
        x: f64,
    },
    /// A touch ended at horizontal screen position `x`.
    TouchEnd {
        /// Horizontal screen coordinate.
        x: f64,
    },
    /// A pagination marker was clicked.
    IndicatorClick(usize),
    /// The theme switch was activated.
    ThemeToggle,
    /// The OS color-scheme preference changed.
    ColorSchemeChanged {
        /// Whether the OS now prefers a dark scheme.
        prefers_dark: bool,
    },
}

impl Event {
    /// Whether this event is addressed to the carousel.
    #[must_use]
    pub const fn targets_carousel(&self) -> bool {
        matches!(
            self,
            Self::PointerEnter
                | Self::PointerLeave
                | Self::TouchStart { .. }
                | Self::TouchEnd { .. }
                | Self::IndicatorClick(_)
        )
    }

    /// Whether this event is addressed to the theme switch.
    #[must_use]
    pub const fn targets_theme(&self) -> bool {
        matches!(self, Self::ThemeToggle | Self::ColorSchemeChanged { .. })
    }
}
