#![forbid(unsafe_code)]

//! `revolve-web` runs revolve widgets inside a host-driven loop.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding page pushes input events.
//! - **Deterministic time**: the host advances a shared clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The surfaces here record every request a widget makes instead of touching
//! a DOM. A JS shim replays [`WebOutputs::ops`] onto real elements; tests
//! read the same log directly.

pub mod session;

use core::time::Duration;

use revolve_core::animation::Tween;
use revolve_widgets::{
    Appearance, CarouselSurface, LoopBufferError, Motion, ThemeChoice, ThemeSurface,
};

pub use session::{Session, SessionConfig, StepResult};

/// Web session error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// The carousel could not be built.
    Carousel(LoopBufferError),
}

impl core::fmt::Display for WebError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Carousel(e) => write!(f, "carousel: {e}"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Carousel(e) => Some(e),
        }
    }
}

impl From<LoopBufferError> for WebError {
    fn from(e: LoopBufferError) -> Self {
        Self::Carousel(e)
    }
}

/// One request a widget made of the page, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    /// Strip created with one entry per slot.
    MountSlots(Vec<usize>),
    /// Marker strip created.
    MountMarkers(usize),
    /// Strip moved.
    Offset {
        /// New horizontal offset in pixels.
        offset: f64,
        /// How to get there.
        motion: Motion,
    },
    /// CSS transitions toggled on the strip.
    Transitions(bool),
    /// Active marker changed.
    ActiveMarker(usize),
    /// Theme applied to the document.
    Theme {
        /// Palette and icon.
        effective: Appearance,
        /// Status label.
        selected: ThemeChoice,
    },
    /// Acknowledgment pulse toggled.
    Acknowledged(bool),
}

/// Recording carousel surface with a painted-offset model.
#[derive(Debug, Clone)]
pub struct WebCarouselSurface {
    ops: Vec<SurfaceOp>,
    slots: Vec<usize>,
    markers: usize,
    active: Option<usize>,
    transitions: bool,
    painted: Tween,
}

impl Default for WebCarouselSurface {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            slots: Vec::new(),
            markers: 0,
            active: None,
            transitions: true,
            painted: Tween::settled(0.0),
        }
    }
}

impl WebCarouselSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance any running transition by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.painted.tick(dt);
    }

    /// Offset currently on screen, mid-transition included.
    #[must_use]
    pub fn painted_offset(&self) -> f64 {
        self.painted.position()
    }

    /// Offset the strip is heading to.
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        self.painted.target()
    }

    /// Whether a transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.painted.is_complete()
    }

    /// Mounted slot identities.
    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Number of mounted markers.
    #[must_use]
    pub fn markers(&self) -> usize {
        self.markers
    }

    /// Active marker, once one is marked.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether strip transitions are on.
    #[must_use]
    pub fn transitions_enabled(&self) -> bool {
        self.transitions
    }

    /// Take the ops recorded since the last call.
    pub fn drain_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl CarouselSurface for WebCarouselSurface {
    fn mount_slots(&mut self, slots: &[usize]) {
        self.slots = slots.to_vec();
        self.ops.push(SurfaceOp::MountSlots(self.slots.clone()));
    }

    fn mount_markers(&mut self, count: usize) {
        self.markers = count;
        self.ops.push(SurfaceOp::MountMarkers(count));
    }

    fn set_offset(&mut self, offset: f64, motion: Motion) {
        match motion {
            Motion::Animated(duration) if self.transitions => {
                self.painted.retarget(offset, duration);
            }
            _ => self.painted.snap(offset),
        }
        self.ops.push(SurfaceOp::Offset { offset, motion });
    }

    fn set_transitions_enabled(&mut self, enabled: bool) {
        self.transitions = enabled;
        self.ops.push(SurfaceOp::Transitions(enabled));
    }

    fn mark_active(&mut self, page: usize) {
        self.active = Some(page);
        self.ops.push(SurfaceOp::ActiveMarker(page));
    }
}

/// Recording theme surface.
#[derive(Debug, Clone, Default)]
pub struct WebThemeSurface {
    ops: Vec<SurfaceOp>,
    applied: Option<(Appearance, ThemeChoice)>,
    acknowledged: bool,
}

impl WebThemeSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied appearance and label.
    #[must_use]
    pub fn applied(&self) -> Option<(Appearance, ThemeChoice)> {
        self.applied
    }

    /// Whether the pulse is showing.
    #[must_use]
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Take the ops recorded since the last call.
    pub fn drain_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl ThemeSurface for WebThemeSurface {
    fn apply(&mut self, effective: Appearance, selected: ThemeChoice) {
        self.applied = Some((effective, selected));
        self.ops.push(SurfaceOp::Theme {
            effective,
            selected,
        });
    }

    fn set_acknowledged(&mut self, on: bool) {
        self.acknowledged = on;
        self.ops.push(SurfaceOp::Acknowledged(on));
    }
}

/// Captured presentation outputs for host consumption.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WebOutputs {
    /// Surface requests accumulated since the last take, in issue order.
    pub ops: Vec<SurfaceOp>,
    /// Offset currently painted.
    pub painted_offset: f64,
    /// Active logical page.
    pub page: usize,
    /// Text projection of the pagination indicator.
    pub indicator: String,
    /// Applied appearance.
    pub appearance: Option<Appearance>,
    /// Selected theme, shown as the status label.
    pub theme_label: Option<ThemeChoice>,
    /// Whether the theme switch is pulsing.
    pub acknowledged: bool,
}

impl WebOutputs {
    /// Offsets requested, in order.
    pub fn offsets(&self) -> impl Iterator<Item = (f64, Motion)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            SurfaceOp::Offset { offset, motion } => Some((offset, motion)),
            _ => None,
        })
    }
}
