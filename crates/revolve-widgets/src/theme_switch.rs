#![forbid(unsafe_code)]

//! Tri-state theme switch.
//!
//! The user cycles `light → dark → system → light`. The choice is persisted
//! under a single key after every change. `system` defers to the OS color
//! scheme, reported by a [`ColorSchemeProbe`] at load and whenever the user
//! cycles into `system`, and by [`ThemeSwitch::on_system_preference_change`]
//! afterwards. An explicit light or dark choice is never overridden by OS
//! changes.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Stored value unrecognized | Start as `system`, logged |
//! | Store read fails | Start as `system`, logged |
//! | Store write fails | Keep the new choice in memory, logged |

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use revolve_core::clock::Clock;
use revolve_core::event::Event;
use revolve_core::{debug, warn};
use revolve_runtime::scheduler::{Scheduler, TaskId};
use revolve_runtime::state_persistence::KeyValueStore;

/// Storage key for the persisted choice.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

// ---------------------------------------------------------------------------
// Choice / appearance
// ---------------------------------------------------------------------------

/// The user's theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeChoice {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the OS preference.
    #[default]
    System,
}

impl ThemeChoice {
    /// Every choice in cycle order.
    pub const ALL: [ThemeChoice; 3] = [Self::Light, Self::Dark, Self::System];

    /// The choice that follows `self` in the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Persisted and displayed name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Whether this choice follows the OS.
    #[must_use]
    pub const fn is_system(self) -> bool {
        matches!(self, Self::System)
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is not one of `light`, `dark` or `system`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeChoiceError(String);

impl fmt::Display for ParseThemeChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized theme choice {:?}", self.0)
    }
}

impl std::error::Error for ParseThemeChoiceError {}

impl FromStr for ThemeChoice {
    type Err = ParseThemeChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeChoiceError(other.to_owned())),
        }
    }
}

/// The appearance actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    /// Light palette, sun icon.
    Light,
    /// Dark palette, moon icon.
    Dark,
}

impl Appearance {
    /// Attribute value for the host (`data-theme`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether this is the dark appearance.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a choice against the OS preference.
#[must_use]
pub const fn resolve_effective(selected: ThemeChoice, os_prefers_dark: bool) -> Appearance {
    match selected {
        ThemeChoice::Light => Appearance::Light,
        ThemeChoice::Dark => Appearance::Dark,
        ThemeChoice::System if os_prefers_dark => Appearance::Dark,
        ThemeChoice::System => Appearance::Light,
    }
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Reports the OS color-scheme preference.
pub trait ColorSchemeProbe {
    /// Whether the OS currently prefers a dark scheme.
    fn prefers_dark(&self) -> bool;
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Probe reading the `COLORFGBG` environment variable.
///
/// `COLORFGBG` is `"fg;bg"` with ANSI color indices. Background 7 or 15 means
/// light; anything else, or a missing/garbled value, means dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvColorScheme;

impl EnvColorScheme {
    fn prefers_dark_from(colorfgbg: Option<&str>) -> bool {
        if let Some(colorfgbg) = colorfgbg
            && let Some(bg_part) = colorfgbg.split(';').next_back()
            && let Ok(bg) = bg_part.trim().parse::<u8>()
        {
            return bg != 7 && bg != 15;
        }
        true
    }
}

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        Self::prefers_dark_from(env::var("COLORFGBG").ok().as_deref())
    }
}

/// Rendering requests the theme switch issues to its host.
pub trait ThemeSurface {
    /// Apply `effective` (palette attribute and icon) and show `selected` as
    /// the status label.
    fn apply(&mut self, effective: Appearance, selected: ThemeChoice);

    /// Show or hide the acknowledgment pulse on the switch.
    fn set_acknowledged(&mut self, on: bool);
}

impl<S: ThemeSurface + ?Sized> ThemeSurface for &mut S {
    fn apply(&mut self, effective: Appearance, selected: ThemeChoice) {
        (**self).apply(effective, selected);
    }
    fn set_acknowledged(&mut self, on: bool) {
        (**self).set_acknowledged(on);
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Theme switch settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Key the choice is persisted under. Default: `"theme"`
    pub storage_key: String,
    /// How long the acknowledgment pulse stays on. Default: 500ms
    pub pulse: Duration,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            pulse: Duration::from_millis(500),
        }
    }
}

impl ThemeConfig {
    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the pulse duration.
    #[must_use]
    pub fn with_pulse(mut self, pulse: Duration) -> Self {
        self.pulse = pulse;
        self
    }
}

// ---------------------------------------------------------------------------
// ThemeSwitch
// ---------------------------------------------------------------------------

/// Deferred work owned by a theme switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeTask {
    /// End the acknowledgment pulse.
    ClearPulse,
}

/// Persisted light/dark/system switch.
#[derive(Debug)]
pub struct ThemeSwitch<S, K, P, C> {
    surface: S,
    store: K,
    probe: P,
    clock: C,
    scheduler: Scheduler<ThemeTask>,
    config: ThemeConfig,
    selected: ThemeChoice,
    effective: Appearance,
    os_prefers_dark: bool,
    pulse: Option<TaskId>,
}

impl<S, K, P, C> ThemeSwitch<S, K, P, C>
where
    S: ThemeSurface,
    K: KeyValueStore,
    P: ColorSchemeProbe,
    C: Clock,
{
    /// Load the persisted choice (default `system`) and apply it.
    pub fn new(config: ThemeConfig, mut surface: S, store: K, probe: P, clock: C) -> Self {
        let selected = load_choice(&store, &config.storage_key);
        let os_prefers_dark = probe.prefers_dark();
        let effective = resolve_effective(selected, os_prefers_dark);
        surface.apply(effective, selected);
        debug!(%selected, %effective, store = store.name(), "theme loaded");
        Self {
            surface,
            store,
            probe,
            clock,
            scheduler: Scheduler::new(),
            config,
            selected,
            effective,
            os_prefers_dark,
            pulse: None,
        }
    }

    /// Advance to the next choice, persist it, apply it and pulse.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn cycle(&mut self) -> ThemeChoice {
        self.selected = self.selected.next();
        if let Err(e) = self
            .store
            .set(&self.config.storage_key, self.selected.as_str())
        {
            warn!(error = %e, store = self.store.name(), "failed to persist theme choice");
        }

        self.effective = resolve_effective(self.selected, self.os_prefers_dark);
        self.surface.apply(self.effective, self.selected);
        self.start_pulse();
        debug!(selected = %self.selected, effective = %self.effective, "theme cycled");
        self.selected
    }

    /// OS preference changed. The new preference is remembered for later
    /// cycles into `system`. Returns whether the applied appearance was
    /// recomputed (only when following the OS).
    pub fn on_system_preference_change(&mut self, os_prefers_dark: bool) -> bool {
        self.os_prefers_dark = os_prefers_dark;
        if !self.selected.is_system() {
            return false;
        }
        self.effective = resolve_effective(self.selected, os_prefers_dark);
        self.surface.apply(self.effective, self.selected);
        debug!(effective = %self.effective, "followed system color scheme");
        true
    }

    /// Re-read the OS preference from the color-scheme source, for hosts
    /// without change notifications.
    pub fn refresh_system_preference(&mut self) -> bool {
        let os_prefers_dark = self.probe.prefers_dark();
        self.on_system_preference_change(os_prefers_dark)
    }

    /// Route a host event. Returns whether the switch consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::ThemeToggle => {
                self.cycle();
                true
            }
            Event::ColorSchemeChanged { prefers_dark } => {
                self.on_system_preference_change(prefers_dark);
                true
            }
            _ => false,
        }
    }

    /// Fire every task due at the clock's current time. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            fired += 1;
            match task.task {
                ThemeTask::ClearPulse => {
                    self.pulse = None;
                    self.surface.set_acknowledged(false);
                }
            }
        }
        fired
    }

    fn start_pulse(&mut self) {
        if let Some(id) = self.pulse.take() {
            self.scheduler.cancel(id);
        }
        self.surface.set_acknowledged(true);
        let now = self.clock.now();
        self.pulse = Some(
            self.scheduler
                .schedule_after(now, self.config.pulse, ThemeTask::ClearPulse),
        );
    }

    /// The user's choice.
    #[must_use]
    pub fn selected(&self) -> ThemeChoice {
        self.selected
    }

    /// The applied appearance.
    #[must_use]
    pub fn effective(&self) -> Appearance {
        self.effective
    }

    /// Last known OS preference.
    #[must_use]
    pub fn os_prefers_dark(&self) -> bool {
        self.os_prefers_dark
    }

    /// Whether the acknowledgment pulse is showing.
    #[must_use]
    pub fn is_acknowledging(&self) -> bool {
        self.pulse.is_some()
    }

    /// Earliest pending task time, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Host surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Host surface, for hosts that drain recorded state.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Backing store.
    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Settings in effect.
    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn load_choice<K: KeyValueStore>(store: &K, key: &str) -> ThemeChoice {
    match store.get(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: ParseThemeChoiceError| {
            warn!(error = %e, "ignoring stored theme choice");
            ThemeChoice::default()
        }),
        Ok(None) => ThemeChoice::default(),
        Err(e) => {
            warn!(error = %e, store = store.name(), "failed to read theme choice");
            ThemeChoice::default()
        }
    }
}
