#![forbid(unsafe_code)]

//! Widgets for revolve: the looping carousel, its pagination indicator and
//! the persisted theme switch.
//!
//! Widgets are host-agnostic. They talk to the page through small surface
//! traits ([`CarouselSurface`], [`ThemeSurface`]) and keep time through a
//! [`revolve_core::clock::Clock`], so the same controller runs against a
//! browser shim or a deterministic test harness.

pub mod carousel;
pub mod loop_buffer;
pub mod paginator;
pub mod theme_switch;

pub use carousel::{
    Carousel, CarouselConfig, CarouselSurface, CarouselTask, Motion, OverlapPolicy,
};
pub use loop_buffer::{LoopBuffer, LoopBufferError, MIN_REPEAT_FACTOR, Recenter, page_of};
pub use paginator::{PaginationIndicator, PaginatorMode};
pub use theme_switch::{
    Appearance, ColorSchemeProbe, EnvColorScheme, FixedColorScheme, ParseThemeChoiceError,
    ThemeChoice, ThemeConfig, ThemeSurface, ThemeSwitch, ThemeTask, resolve_effective,
};
