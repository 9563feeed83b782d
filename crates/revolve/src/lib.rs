#![forbid(unsafe_code)]

//! revolve public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for wiring a carousel and theme switch into a host.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use revolve_core::animation::Tween;
pub use revolve_core::clock::{Clock, ManualClock, SystemClock};
pub use revolve_core::event::Event;
pub use revolve_core::gesture::{SwipeDetector, SwipeDirection};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "state-persistence")]
pub use revolve_runtime::FileStore;
pub use revolve_runtime::{KeyValueStore, MemoryStore, Scheduler, StorageError, TaskId};

// --- Widget re-exports -----------------------------------------------------

pub use revolve_widgets::{
    Appearance, Carousel, CarouselConfig, CarouselSurface, ColorSchemeProbe, EnvColorScheme,
    FixedColorScheme, LoopBuffer, LoopBufferError, Motion, OverlapPolicy, PaginationIndicator,
    PaginatorMode, ParseThemeChoiceError, Recenter, ThemeChoice, ThemeConfig, ThemeSurface,
    ThemeSwitch,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use revolve_web::{Session, SessionConfig, StepResult, WebError, WebOutputs};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for revolve hosts.
#[derive(Debug)]
pub enum Error {
    /// Carousel construction or paging failed.
    Carousel(LoopBufferError),
    /// Preference storage failed.
    Storage(StorageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Carousel(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Carousel(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<LoopBufferError> for Error {
    fn from(err: LoopBufferError) -> Self {
        Self::Carousel(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

#[cfg(feature = "web")]
impl From<WebError> for Error {
    fn from(err: WebError) -> Self {
        match err {
            WebError::Carousel(err) => Self::Carousel(err),
        }
    }
}

/// Standard result type for revolve APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Appearance, Carousel, CarouselConfig, CarouselSurface, Clock, Error, Event, KeyValueStore,
        MemoryStore, Motion, Result, ThemeChoice, ThemeConfig, ThemeSurface, ThemeSwitch,
    };

    #[cfg(feature = "web")]
    pub use crate::{Session, SessionConfig};

    pub use crate::{core, runtime, widgets};
}

pub use revolve_core as core;
pub use revolve_runtime as runtime;
pub use revolve_widgets as widgets;
#[cfg(feature = "web")]
pub use revolve_web as web;
