#![forbid(unsafe_code)]

//! Core: clocks, host input events, swipe recognition, and offset tweening.

pub mod animation;
pub mod clock;
pub mod event;
pub mod gesture;
pub mod logging;

// Re-export tracing macros at crate root so dependents can write
// `revolve_core::debug!` regardless of the feature set.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, info_span, trace, trace_span, warn, warn_span};
