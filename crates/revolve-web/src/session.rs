#![forbid(unsafe_code)]

//! Step-based session runner.
//!
//! [`Session`] owns one carousel and one theme switch, both wired to
//! recording surfaces and a single host-controlled clock. The host controls
//! the loop:
//!
//! 1. Push events via [`Session::push_event`].
//! 2. Advance time via [`Session::advance_time`].
//! 3. Call [`Session::step`] to route queued events and fire due tasks.
//! 4. Read what changed via [`Session::outputs`] or [`Session::take_outputs`].
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use revolve_core::event::Event;
//! use revolve_runtime::state_persistence::MemoryStore;
//! use revolve_web::{Session, SessionConfig};
//! use revolve_widgets::FixedColorScheme;
//!
//! let mut session = Session::new(
//!     ["one", "two", "three"],
//!     SessionConfig::default(),
//!     MemoryStore::new(),
//!     FixedColorScheme(false),
//! )
//! .unwrap();
//!
//! session.push_event(Event::IndicatorClick(2));
//! session.advance_time(Duration::from_millis(16));
//! let result = session.step();
//! assert_eq!(result.events_processed, 1);
//! assert_eq!(session.outputs().page, 2);
//! ```

use core::time::Duration;
use std::collections::VecDeque;

use revolve_core::clock::{Clock, ManualClock};
use revolve_core::event::Event;
use revolve_runtime::state_persistence::{KeyValueStore, MemoryStore};
use revolve_widgets::{
    Carousel, CarouselConfig, ColorSchemeProbe, FixedColorScheme, ThemeConfig, ThemeSwitch,
};

use crate::{WebCarouselSurface, WebError, WebOutputs, WebThemeSurface};

/// Columns available to the indicator's text projection.
const DEFAULT_INDICATOR_WIDTH: usize = 32;

/// Session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Carousel settings.
    pub carousel: CarouselConfig,
    /// Theme switch settings.
    pub theme: ThemeConfig,
    /// Width budget for [`WebOutputs::indicator`]. Default: 32
    pub indicator_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            theme: ThemeConfig::default(),
            indicator_width: DEFAULT_INDICATOR_WIDTH,
        }
    }
}

/// Result of a single [`Session::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Number of events routed during this step.
    pub events_processed: u32,
    /// Number of scheduled tasks that fired during this step.
    pub tasks_fired: u32,
    /// Clock reading the step ran at.
    pub now: Duration,
}

/// Host-driven, non-blocking session.
pub struct Session<K = MemoryStore, P = FixedColorScheme>
where
    K: KeyValueStore,
    P: ColorSchemeProbe,
{
    clock: ManualClock,
    carousel: Carousel<WebCarouselSurface, ManualClock>,
    theme: ThemeSwitch<WebThemeSurface, K, P, ManualClock>,
    queue: VecDeque<Event>,
    outputs: WebOutputs,
    indicator_width: usize,
    step_idx: u64,
}

impl<K: KeyValueStore, P: ColorSchemeProbe> Session<K, P> {
    /// Mount both widgets at time zero.
    pub fn new<I, T>(items: I, config: SessionConfig, store: K, probe: P) -> Result<Self, WebError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let clock = ManualClock::new();
        let carousel = Carousel::new(
            items,
            config.carousel,
            WebCarouselSurface::new(),
            clock.clone(),
        )?;
        let theme = ThemeSwitch::new(
            config.theme,
            WebThemeSurface::new(),
            store,
            probe,
            clock.clone(),
        );
        let mut session = Self {
            clock,
            carousel,
            theme,
            queue: VecDeque::new(),
            outputs: WebOutputs::default(),
            indicator_width: config.indicator_width,
            step_idx: 0,
        };
        session.collect_outputs();
        Ok(session)
    }

    /// Queue an event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Advance time by `dt`. Running transitions progress immediately; tasks
    /// fire on the next [`step`](Self::step).
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
        self.carousel.surface_mut().tick(dt);
    }

    /// Route every queued event, then fire every task now due.
    pub fn step(&mut self) -> StepResult {
        let mut events_processed = 0u32;
        while let Some(event) = self.queue.pop_front() {
            let handled = if event.targets_carousel() {
                self.carousel.handle_event(&event)
            } else {
                self.theme.handle_event(&event)
            };
            if handled {
                events_processed += 1;
            }
        }

        let fired = self.carousel.pump() + self.theme.pump();
        self.step_idx += 1;
        self.collect_outputs();

        StepResult {
            events_processed,
            tasks_fired: u32::try_from(fired).unwrap_or(u32::MAX),
            now: self.clock.now(),
        }
    }

    /// Advance time in `frame` increments up to `total`, stepping after each.
    pub fn run_for(&mut self, total: Duration, frame: Duration) -> u32 {
        let frame = frame.max(Duration::from_millis(1));
        let mut remaining = total;
        let mut fired = 0u32;
        while !remaining.is_zero() {
            let dt = frame.min(remaining);
            self.advance_time(dt);
            fired = fired.saturating_add(self.step().tasks_fired);
            remaining -= dt;
        }
        fired
    }

    fn collect_outputs(&mut self) {
        let carousel_ops = self.carousel.surface_mut().drain_ops();
        let theme_ops = self.theme.surface_mut().drain_ops();
        self.outputs.ops.extend(carousel_ops);
        self.outputs.ops.extend(theme_ops);

        self.outputs.painted_offset = self.carousel.surface().painted_offset();
        self.outputs.page = self.carousel.current_page();
        self.outputs.indicator = self
            .carousel
            .indicator()
            .format_for_width(self.indicator_width);
        let applied = self.theme.surface().applied();
        self.outputs.appearance = applied.map(|(effective, _)| effective);
        self.outputs.theme_label = applied.map(|(_, selected)| selected);
        self.outputs.acknowledged = self.theme.surface().acknowledged();
    }

    /// Outputs accumulated since the last take.
    #[must_use]
    pub fn outputs(&self) -> &WebOutputs {
        &self.outputs
    }

    /// Take accumulated outputs, leaving the state snapshot in place.
    pub fn take_outputs(&mut self) -> WebOutputs {
        let ops = std::mem::take(&mut self.outputs.ops);
        WebOutputs {
            ops,
            ..self.outputs.clone()
        }
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Number of completed steps.
    #[must_use]
    pub fn step_idx(&self) -> u64 {
        self.step_idx
    }

    /// The carousel.
    #[must_use]
    pub fn carousel(&self) -> &Carousel<WebCarouselSurface, ManualClock> {
        &self.carousel
    }

    /// The carousel, for direct calls.
    pub fn carousel_mut(&mut self) -> &mut Carousel<WebCarouselSurface, ManualClock> {
        &mut self.carousel
    }

    /// The theme switch.
    #[must_use]
    pub fn theme(&self) -> &ThemeSwitch<WebThemeSurface, K, P, ManualClock> {
        &self.theme
    }

    /// Earliest pending task across both widgets.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.carousel.next_deadline(), self.theme.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
