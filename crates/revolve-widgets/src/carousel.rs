#![forbid(unsafe_code)]

//! Infinite carousel controller.
//!
//! [`Carousel`] wires a [`LoopBuffer`] and a [`PaginationIndicator`] to a
//! host [`CarouselSurface`], a [`Clock`] and a private [`Scheduler`]. It owns
//! every timer the widget needs:
//!
//! - **Autoplay**: a repeating task stepping forward every
//!   [`CarouselConfig::autoplay_interval`]. Hover and touch cancel it; leaving
//!   re-arms a fresh interval.
//! - **Recenter**: fired one transition after a navigation that reached the
//!   edge of the safe band. Snaps the strip back by whole copies with
//!   transitions disabled.
//! - **Enable transitions**: fired a short delay after any snap so later
//!   navigations animate again.
//!
//! Nothing fires on its own. The host advances the clock and calls
//! [`Carousel::pump`].
//!
//! # Overlapping navigation
//!
//! A navigation that arrives while a recenter is still pending follows
//! [`OverlapPolicy`]. The default settles the pending correction first so the
//! index never leaves the materialized strip.

use std::time::Duration;

use revolve_core::clock::Clock;
use revolve_core::event::Event;
use revolve_core::gesture::{DEFAULT_SWIPE_THRESHOLD, SwipeDetector};
use revolve_core::{debug, debug_span, trace, warn};
use revolve_runtime::scheduler::{Fired, Scheduler, TaskId};

use crate::loop_buffer::{LoopBuffer, LoopBufferError, Recenter};
use crate::paginator::PaginationIndicator;

// ---------------------------------------------------------------------------
// Host surface
// ---------------------------------------------------------------------------

/// How the host should move the strip to a new offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Transition over the given duration.
    Animated(Duration),
    /// Jump immediately.
    Snap,
}

/// Rendering requests the carousel issues to its host.
pub trait CarouselSurface {
    /// Create the strip; `slots[i]` is the logical item shown in slot `i`.
    fn mount_slots(&mut self, slots: &[usize]);

    /// Create `count` pagination markers.
    fn mount_markers(&mut self, count: usize);

    /// Move the strip to horizontal offset `offset`.
    fn set_offset(&mut self, offset: f64, motion: Motion);

    /// Enable or disable offset transitions.
    fn set_transitions_enabled(&mut self, enabled: bool);

    /// Highlight marker `page`; all others become inactive.
    fn mark_active(&mut self, page: usize);
}

impl<S: CarouselSurface + ?Sized> CarouselSurface for &mut S {
    fn mount_slots(&mut self, slots: &[usize]) {
        (**self).mount_slots(slots);
    }
    fn mount_markers(&mut self, count: usize) {
        (**self).mount_markers(count);
    }
    fn set_offset(&mut self, offset: f64, motion: Motion) {
        (**self).set_offset(offset, motion);
    }
    fn set_transitions_enabled(&mut self, enabled: bool) {
        (**self).set_transitions_enabled(enabled);
    }
    fn mark_active(&mut self, page: usize) {
        (**self).mark_active(page);
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What to do with a navigation that arrives while a recenter is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Apply the pending correction immediately, then navigate.
    #[default]
    SettleFirst,
    /// Ignore the navigation until the correction has fired.
    DropWhileSettling,
}

/// Carousel timing and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Number of materialized copies. Default: 3
    pub repeat_factor: usize,
    /// Pixel span of one item. Default: 320.0
    pub item_extent: f64,
    /// Duration of one animated step; the recenter fires this long after the
    /// step that needs it. Default: 500ms
    pub transition: Duration,
    /// Delay before transitions are re-enabled after a snap. Default: 10ms
    pub reenable_delay: Duration,
    /// Autoplay period, or `None` to disable autoplay. Never shorter than
    /// [`transition`](Self::transition). Default: 3000ms
    pub autoplay_interval: Option<Duration>,
    /// Minimum horizontal touch displacement for a swipe. Default: 50.0
    pub swipe_threshold: f64,
    /// Overlap handling. Default: [`OverlapPolicy::SettleFirst`]
    pub overlap: OverlapPolicy,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            repeat_factor: 3,
            item_extent: 320.0,
            transition: Duration::from_millis(500),
            reenable_delay: Duration::from_millis(10),
            autoplay_interval: Some(Duration::from_millis(3000)),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            overlap: OverlapPolicy::SettleFirst,
        }
    }
}

impl CarouselConfig {
    /// Set the repeat factor.
    #[must_use]
    pub fn with_repeat_factor(mut self, repeat_factor: usize) -> Self {
        self.repeat_factor = repeat_factor;
        self
    }

    /// Set the item extent.
    #[must_use]
    pub fn with_item_extent(mut self, item_extent: f64) -> Self {
        self.item_extent = item_extent;
        self
    }

    /// Set the transition duration.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Set the autoplay interval (`None` disables autoplay). Intervals
    /// shorter than the transition run at the transition's pace.
    #[must_use]
    pub fn with_autoplay(mut self, interval: Option<Duration>) -> Self {
        self.autoplay_interval = interval;
        self
    }

    /// Set the swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Set the overlap policy.
    #[must_use]
    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// Deferred work owned by a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselTask {
    /// Step forward by one item.
    Autoplay,
    /// Apply the pending recenter.
    Recenter,
    /// Turn transitions back on after a snap.
    EnableTransitions,
}

/// Infinite looping carousel.
#[derive(Debug)]
pub struct Carousel<S, C> {
    items: Vec<String>,
    buffer: LoopBuffer,
    indicator: PaginationIndicator<'static>,
    surface: S,
    clock: C,
    scheduler: Scheduler<CarouselTask>,
    config: CarouselConfig,
    swipe: SwipeDetector,
    autoplay: Option<TaskId>,
    pending: Option<(TaskId, Recenter)>,
    reenable: Option<TaskId>,
    transitions_enabled: bool,
    hovering: bool,
}

impl<S: CarouselSurface, C: Clock> Carousel<S, C> {
    /// Build the strip, park it on the first item and start autoplay.
    pub fn new<I, T>(
        items: I,
        config: CarouselConfig,
        mut surface: S,
        clock: C,
    ) -> Result<Self, LoopBufferError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let buffer = LoopBuffer::new(items.len(), config.repeat_factor, config.item_extent)?;

        let slots: Vec<usize> = buffer.slots().collect();
        surface.mount_slots(&slots);

        let mut indicator = PaginationIndicator::new();
        indicator.render(buffer.logical_count());
        surface.mount_markers(indicator.marker_count());

        let mut carousel = Self {
            items,
            buffer,
            indicator,
            surface,
            clock,
            scheduler: Scheduler::new(),
            swipe: SwipeDetector::new(config.swipe_threshold),
            config,
            autoplay: None,
            pending: None,
            reenable: None,
            transitions_enabled: true,
            hovering: false,
        };

        let now = carousel.clock.now();
        carousel.snap_to_current(now);
        carousel.sync_indicator();
        carousel.arm_autoplay();
        debug!(
            items = carousel.buffer.logical_count(),
            repeat = carousel.buffer.repeat_factor(),
            "carousel initialized"
        );
        Ok(carousel)
    }

    // -- navigation ---------------------------------------------------------

    /// Move by `delta` items with animation.
    ///
    /// Returns `false` when the overlap policy dropped the request.
    pub fn navigate(&mut self, delta: i64) -> bool {
        let _span = debug_span!("carousel_navigate", delta).entered();

        if self.pending.is_some() {
            match self.config.overlap {
                OverlapPolicy::SettleFirst => self.settle_now(),
                OverlapPolicy::DropWhileSettling => {
                    debug!(delta, "navigation dropped while recenter pending");
                    return false;
                }
            }
        }

        let recenter = self.buffer.navigate(delta);
        let motion = if self.transitions_enabled {
            Motion::Animated(self.config.transition)
        } else {
            Motion::Snap
        };
        self.surface.set_offset(self.buffer.offset(), motion);

        if let Some(recenter) = recenter {
            let now = self.clock.now();
            let id = self
                .scheduler
                .schedule_after(now, self.config.transition, CarouselTask::Recenter);
            self.pending = Some((id, recenter));
            trace!(shift = recenter.shift, "recenter scheduled");
        }

        self.sync_indicator();
        debug!(
            index = self.buffer.display_index(),
            page = self.buffer.current_page(),
            "navigated"
        );
        true
    }

    /// Navigate to logical page `page`.
    ///
    /// Returns `Ok(false)` if already on `page` or the overlap policy dropped
    /// the request.
    pub fn go_to_page(&mut self, page: usize) -> Result<bool, LoopBufferError> {
        let delta = self.buffer.delta_to_page(page)?;
        if delta == 0 {
            return Ok(false);
        }
        Ok(self.navigate(delta))
    }

    /// Step forward one item.
    pub fn next(&mut self) -> bool {
        self.navigate(1)
    }

    /// Step back one item.
    pub fn previous(&mut self) -> bool {
        self.navigate(-1)
    }

    /// Logical page currently leading the viewport.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.buffer.current_page()
    }

    // -- input ---------------------------------------------------------------

    /// Pointer entered: pause autoplay.
    pub fn pointer_enter(&mut self) {
        self.hovering = true;
        self.cancel_autoplay();
    }

    /// Pointer left: restart autoplay from a full interval.
    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        self.arm_autoplay();
    }

    /// Touch began at `x`: pause autoplay and start tracking.
    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
        self.cancel_autoplay();
    }

    /// Touch ended at `x`: navigate on a swipe, then restart autoplay.
    ///
    /// Returns whether a navigation happened.
    pub fn touch_end(&mut self, x: f64) -> bool {
        let navigated = match self.swipe.end(x) {
            Some(direction) => self.navigate(direction.delta()),
            None => false,
        };
        if !self.hovering {
            self.arm_autoplay();
        }
        navigated
    }

    /// Marker `index` was clicked.
    pub fn indicator_click(&mut self, index: usize) -> bool {
        match self.indicator.page_for_click(index) {
            Some(page) => self.go_to_page(page).unwrap_or(false),
            None => {
                warn!(index, markers = self.indicator.marker_count(), "click on unknown marker");
                false
            }
        }
    }

    /// Route a host event. Returns whether the carousel consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::PointerEnter => self.pointer_enter(),
            Event::PointerLeave => self.pointer_leave(),
            Event::TouchStart { x } => self.touch_start(x),
            Event::TouchEnd { x } => {
                self.touch_end(x);
            }
            Event::IndicatorClick(index) => {
                self.indicator_click(index);
            }
            Event::ThemeToggle | Event::ColorSchemeChanged { .. } => return false,
        }
        true
    }

    // -- timers --------------------------------------------------------------

    /// Fire every task due at the clock's current time. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            fired += 1;
            self.run(task);
        }
        fired
    }

    /// Earliest pending task time, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Pause autoplay without touching hover state.
    pub fn pause_autoplay(&mut self) {
        self.cancel_autoplay();
    }

    /// Restart autoplay from a full interval.
    pub fn resume_autoplay(&mut self) {
        self.arm_autoplay();
    }

    fn run(&mut self, fired: Fired<CarouselTask>) {
        trace!(task = ?fired.task, due_ms = fired.due.as_millis() as u64, "carousel task");
        match fired.task {
            CarouselTask::Autoplay => {
                self.navigate(1);
            }
            CarouselTask::Recenter => {
                if let Some((id, recenter)) = self.pending.take() {
                    debug_assert_eq!(id, fired.id);
                    self.apply_recenter(recenter, fired.due);
                }
            }
            CarouselTask::EnableTransitions => {
                self.reenable = None;
                self.set_transitions(true);
            }
        }
    }

    fn settle_now(&mut self) {
        if let Some((id, recenter)) = self.pending.take() {
            self.scheduler.cancel(id);
            let now = self.clock.now();
            self.apply_recenter(recenter, now);
            // The navigation about to follow should animate.
            if let Some(id) = self.reenable.take() {
                self.scheduler.cancel(id);
            }
            self.set_transitions(true);
        }
    }

    fn apply_recenter(&mut self, recenter: Recenter, at: Duration) {
        let page = self.buffer.current_page();
        self.buffer.apply(recenter);
        debug_assert_eq!(page, self.buffer.current_page());
        debug!(
            shift = recenter.shift,
            index = self.buffer.display_index(),
            "recentered"
        );
        self.snap_to_current(at);
    }

    fn snap_to_current(&mut self, at: Duration) {
        self.set_transitions(false);
        self.surface.set_offset(self.buffer.offset(), Motion::Snap);
        if let Some(id) = self.reenable.take() {
            self.scheduler.cancel(id);
        }
        self.reenable = Some(self.scheduler.schedule_after(
            at,
            self.config.reenable_delay,
            CarouselTask::EnableTransitions,
        ));
    }

    fn set_transitions(&mut self, enabled: bool) {
        if self.transitions_enabled != enabled {
            self.transitions_enabled = enabled;
            self.surface.set_transitions_enabled(enabled);
        }
    }

    fn sync_indicator(&mut self) {
        let page = self.buffer.current_page();
        self.indicator.sync(page);
        self.surface.mark_active(page);
    }

    fn arm_autoplay(&mut self) {
        self.cancel_autoplay();
        if let Some(interval) = self.config.autoplay_interval {
            let interval = interval.max(self.config.transition);
            let now = self.clock.now();
            self.autoplay = Some(
                self.scheduler
                    .schedule_every(now, interval, CarouselTask::Autoplay),
            );
        }
    }

    fn cancel_autoplay(&mut self) {
        if let Some(id) = self.autoplay.take() {
            self.scheduler.cancel(id);
        }
    }

    // -- accessors -----------------------------------------------------------

    /// Logical items, in order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Label of the item at logical page `page`.
    #[must_use]
    pub fn item(&self, page: usize) -> Option<&str> {
        self.items.get(page).map(String::as_str)
    }

    /// Index state.
    #[must_use]
    pub fn buffer(&self) -> &LoopBuffer {
        &self.buffer
    }

    /// Marker state.
    #[must_use]
    pub fn indicator(&self) -> &PaginationIndicator<'static> {
        &self.indicator
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Host surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Host surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether an autoplay interval is armed.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Whether a recenter is waiting for its animation to settle.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the next navigation will animate.
    #[must_use]
    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revolve_core::clock::ManualClock;

    #[derive(Debug, Default)]
    struct Log {
        slots: Vec<usize>,
        markers: usize,
        offsets: Vec<(f64, Motion)>,
        transitions: Vec<bool>,
        active: Vec<usize>,
    }

    impl CarouselSurface for Log {
        fn mount_slots(&mut self, slots: &[usize]) {
            self.slots = slots.to_vec();
        }
        fn mount_markers(&mut self, count: usize) {
            self.markers = count;
        }
        fn set_offset(&mut self, offset: f64, motion: Motion) {
            self.offsets.push((offset, motion));
        }
        fn set_transitions_enabled(&mut self, enabled: bool) {
            self.transitions.push(enabled);
        }
        fn mark_active(&mut self, page: usize) {
            self.active.push(page);
        }
    }

    const CARDS: [&str; 6] = ["Card 1", "Card 2", "Card 3", "Card 4", "Card 5", "Card 6"];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn carousel(config: CarouselConfig) -> (Carousel<Log, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let c = Carousel::new(CARDS, config, Log::default(), clock.clone()).unwrap();
        (c, clock)
    }

    #[test]
    fn init_mounts_and_snaps() {
        let (c, _) = carousel(CarouselConfig::default());
        let s = c.surface();
        assert_eq!(s.slots.len(), 18);
        assert_eq!(s.markers, 6);
        assert_eq!(s.offsets, vec![(-1920.0, Motion::Snap)]);
        assert_eq!(s.transitions, vec![false]);
        assert_eq!(s.active, vec![0]);
        assert_eq!(c.current_page(), 0);
        assert!(c.is_autoplaying());
    }

    #[test]
    fn transitions_reenable_after_initial_snap() {
        let (mut c, clock) = carousel(CarouselConfig::default());
        assert!(!c.transitions_enabled());
        clock.advance(ms(10));
        assert_eq!(c.pump(), 1);
        assert!(c.transitions_enabled());
        assert_eq!(c.surface().transitions, vec![false, true]);
    }

    #[test]
    fn navigate_animates_when_enabled() {
        let (mut c, clock) = carousel(CarouselConfig::default());
        clock.advance(ms(10));
        c.pump();
        assert!(c.next());
        assert_eq!(
            c.surface().offsets.last(),
            Some(&(-2240.0, Motion::Animated(ms(500))))
        );
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn sixth_step_recenters_after_transition() {
        let config = CarouselConfig::default().with_autoplay(None);
        let (mut c, clock) = carousel(config);
        clock.advance(ms(10));
        c.pump();

        for _ in 0..6 {
            c.next();
        }
        assert_eq!(c.buffer().display_index(), 12);
        assert_eq!(c.current_page(), 0);
        assert!(c.is_settling());

        clock.advance(ms(499));
        assert_eq!(c.pump(), 0);
        clock.advance(ms(1));
        assert_eq!(c.pump(), 1);
        assert_eq!(c.buffer().display_index(), 6);
        assert_eq!(c.surface().offsets.last(), Some(&(-1920.0, Motion::Snap)));
        assert!(!c.transitions_enabled());

        clock.advance(ms(10));
        assert_eq!(c.pump(), 1);
        assert!(c.transitions_enabled());
    }

    #[test]
    fn settle_first_applies_pending_correction() {
        let config = CarouselConfig::default().with_autoplay(None);
        let (mut c, clock) = carousel(config);
        clock.advance(ms(10));
        c.pump();

        c.previous();
        assert_eq!(c.buffer().display_index(), 5);
        assert!(c.is_settling());
        c.previous();
        // 5 -> 11 by the settle, then -> 10
        assert_eq!(c.buffer().display_index(), 10);
        assert_eq!(c.current_page(), 4);
        assert!(!c.is_settling());
        assert!(matches!(
            c.surface().offsets.last(),
            Some((_, Motion::Animated(_)))
        ));
    }

    #[test]
    fn drop_while_settling_ignores_navigation() {
        let config = CarouselConfig::default()
            .with_autoplay(None)
            .with_overlap(OverlapPolicy::DropWhileSettling);
        let (mut c, clock) = carousel(config);
        c.previous();
        assert!(!c.previous());
        assert_eq!(c.current_page(), 5);
        clock.advance(ms(500));
        c.pump();
        assert!(c.previous());
        assert_eq!(c.current_page(), 4);
    }

    #[test]
    fn go_to_page_reaches_target() {
        let (mut c, _) = carousel(CarouselConfig::default().with_autoplay(None));
        assert_eq!(c.go_to_page(4), Ok(true));
        assert_eq!(c.current_page(), 4);
        assert_eq!(c.go_to_page(4), Ok(false));
        assert_eq!(
            c.go_to_page(6),
            Err(LoopBufferError::PageOutOfRange { page: 6, count: 6 })
        );
    }

    #[test]
    fn autoplay_steps_forward() {
        let (mut c, clock) = carousel(CarouselConfig::default());
        clock.advance(ms(3000));
        c.pump();
        assert_eq!(c.current_page(), 1);
        clock.advance(ms(3000));
        c.pump();
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn hover_pauses_and_leave_restarts_fresh_interval() {
        let (mut c, clock) = carousel(CarouselConfig::default());
        clock.advance(ms(2500));
        c.pump();
        c.pointer_enter();
        assert!(!c.is_autoplaying());
        clock.advance(ms(5000));
        c.pump();
        assert_eq!(c.current_page(), 0);

        c.pointer_leave();
        clock.advance(ms(2999));
        c.pump();
        assert_eq!(c.current_page(), 0);
        clock.advance(ms(1));
        c.pump();
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn swipe_navigates_once() {
        let (mut c, _) = carousel(CarouselConfig::default());
        c.touch_start(300.0);
        assert!(!c.is_autoplaying());
        assert!(c.touch_end(240.0));
        assert_eq!(c.current_page(), 1);
        assert!(c.is_autoplaying());

        c.touch_start(300.0);
        assert!(!c.touch_end(270.0));
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let (mut c, _) = carousel(CarouselConfig::default());
        c.touch_start(100.0);
        assert!(c.touch_end(200.0));
        assert_eq!(c.current_page(), 5);
    }

    #[test]
    fn long_gap_fires_one_autoplay_step() {
        let (mut c, clock) = carousel(CarouselConfig::default());
        clock.advance(Duration::from_secs(60));
        // re-enable plus a single autoplay step
        assert_eq!(c.pump(), 2);
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.next_deadline(), Some(ms(63_000)));
    }

    #[test]
    fn zero_autoplay_interval_runs_at_transition_pace() {
        let config = CarouselConfig::default().with_autoplay(Some(Duration::ZERO));
        let (mut c, clock) = carousel(config);
        clock.advance(Duration::from_micros(200));
        assert_eq!(c.pump(), 0);
        clock.advance(ms(500));
        assert_eq!(c.pump(), 2);
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn indicator_click_routes_to_page() {
        let (mut c, _) = carousel(CarouselConfig::default());
        assert!(c.handle_event(&Event::IndicatorClick(3)));
        assert_eq!(c.current_page(), 3);
        assert_eq!(c.indicator().active(), 3);
        assert_eq!(c.surface().active.last(), Some(&3));
        assert!(!c.indicator_click(42));
        assert!(!c.handle_event(&Event::ThemeToggle));
    }

    #[test]
    fn rejects_empty_items() {
        let clock = ManualClock::new();
        let err = Carousel::new(
            Vec::<String>::new(),
            CarouselConfig::default(),
            Log::default(),
            clock,
        )
        .unwrap_err();
        assert_eq!(err, LoopBufferError::EmptySequence);
    }

    #[test]
    fn items_are_exposed() {
        let (c, _) = carousel(CarouselConfig::default());
        assert_eq!(c.item(0), Some("Card 1"));
        assert_eq!(c.item(6), None);
        assert_eq!(c.items().len(), 6);
    }
}
