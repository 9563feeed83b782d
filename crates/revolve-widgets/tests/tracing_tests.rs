#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//! Spans and events enabled:
//!   cargo test -p revolve-widgets --features tracing --test tracing_tests
//!
//! Without the feature the same calls compile to no-ops and must still run.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use revolve_core::clock::ManualClock;
use revolve_runtime::state_persistence::MemoryStore;
use revolve_widgets::{
    Appearance, Carousel, CarouselConfig, CarouselSurface, FixedColorScheme, Motion, ThemeChoice,
    ThemeConfig, ThemeSurface, ThemeSwitch,
};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
    span: Option<String>,
}

#[derive(Default)]
struct Captured {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

struct Capture(Arc<Mutex<Captured>>);

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.0.lock().unwrap().spans.push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message").unwrap_or_default();
        let span = ctx.event_span(event).map(|s| s.name().to_string());
        self.0.lock().unwrap().events.push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
            span,
        });
    }
}

fn with_capture<F: FnOnce()>(f: F) -> Arc<Mutex<Captured>> {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&captured)));
    tracing::subscriber::with_default(subscriber, f);
    captured
}

struct NullCarousel;

impl CarouselSurface for NullCarousel {
    fn mount_slots(&mut self, _slots: &[usize]) {}
    fn mount_markers(&mut self, _count: usize) {}
    fn set_offset(&mut self, _offset: f64, _motion: Motion) {}
    fn set_transitions_enabled(&mut self, _enabled: bool) {}
    fn mark_active(&mut self, _page: usize) {}
}

struct NullTheme;

impl ThemeSurface for NullTheme {
    fn apply(&mut self, _effective: Appearance, _selected: ThemeChoice) {}
    fn set_acknowledged(&mut self, _on: bool) {}
}

fn run_carousel() {
    let clock = ManualClock::new();
    let mut c = Carousel::new(
        ["a", "b", "c"],
        CarouselConfig::default().with_autoplay(None),
        NullCarousel,
        clock.clone(),
    )
    .unwrap();
    c.previous();
    clock.advance(Duration::from_millis(500));
    c.pump();
    c.indicator_click(99);
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn navigate_opens_span_with_delta() {
    let captured = with_capture(run_carousel);
    let captured = captured.lock().unwrap();
    let nav: Vec<_> = captured
        .spans
        .iter()
        .filter(|s| s.name == "carousel_navigate")
        .collect();
    assert_eq!(nav.len(), 1, "one navigation, got {:?}", captured.spans);
    assert_eq!(nav[0].fields.get("delta").map(String::as_str), Some("-1"));

    let navigated = captured
        .events
        .iter()
        .find(|e| e.message == "navigated")
        .expect("navigated event");
    assert_eq!(navigated.span.as_deref(), Some("carousel_navigate"));
    assert_eq!(navigated.fields.get("page").map(String::as_str), Some("2"));
}

#[test]
#[cfg(feature = "tracing")]
fn recenter_and_bad_click_are_logged() {
    let captured = with_capture(run_carousel);
    let captured = captured.lock().unwrap();
    let recentered = captured
        .events
        .iter()
        .find(|e| e.message == "recentered")
        .expect("recentered event");
    assert_eq!(recentered.fields.get("shift").map(String::as_str), Some("3"));

    let warned = captured
        .events
        .iter()
        .find(|e| e.level == tracing::Level::WARN)
        .expect("warn for unknown marker");
    assert_eq!(warned.fields.get("index").map(String::as_str), Some("99"));
}

#[test]
#[cfg(feature = "tracing")]
fn bad_stored_theme_is_warned() {
    let captured = with_capture(|| {
        let store = MemoryStore::with_entries([("theme", "sepia")]);
        let s = ThemeSwitch::new(
            ThemeConfig::default(),
            NullTheme,
            &store,
            FixedColorScheme(false),
            ManualClock::new(),
        );
        assert_eq!(s.selected(), ThemeChoice::System);
    });
    let captured = captured.lock().unwrap();
    assert!(
        captured
            .events
            .iter()
            .any(|e| e.level == tracing::Level::WARN && e.message == "ignoring stored theme choice"),
        "got {:?}",
        captured.events
    );
}

#[test]
fn instrumented_paths_run_under_any_subscriber() {
    let captured = with_capture(|| {
        run_carousel();
        let store = MemoryStore::new();
        let mut s = ThemeSwitch::new(
            ThemeConfig::default(),
            NullTheme,
            &store,
            FixedColorScheme(true),
            ManualClock::new(),
        );
        s.cycle();
    });
    let spans = captured.lock().unwrap().spans.len();
    if cfg!(feature = "tracing") {
        assert!(spans > 0, "expected carousel_navigate span");
    }
}
