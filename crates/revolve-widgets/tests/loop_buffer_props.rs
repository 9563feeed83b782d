//! Property tests for the looping strip.
//!
//! ```sh
//! cargo test -p revolve-widgets --test loop_buffer_props
//! ```
//!
//! # Invariants
//!
//! 1. A fresh strip shows page 0 with the index at `N`.
//! 2. Any run of ±1 steps tracks `(page + delta) mod N`.
//! 3. Applying a correction never changes the page and lands inside the band.
//! 4. `go_to_page(p)` always ends on `p`.

use std::time::Duration;

use proptest::prelude::*;
use revolve_core::clock::ManualClock;
use revolve_widgets::{Carousel, CarouselConfig, CarouselSurface, LoopBuffer, Motion};

struct Null;

impl CarouselSurface for Null {
    fn mount_slots(&mut self, _slots: &[usize]) {}
    fn mount_markers(&mut self, _count: usize) {}
    fn set_offset(&mut self, _offset: f64, _motion: Motion) {}
    fn set_transitions_enabled(&mut self, _enabled: bool) {}
    fn mark_active(&mut self, _page: usize) {}
}

fn step() -> impl Strategy<Value = i64> {
    prop_oneof![Just(1i64), Just(-1i64)]
}

proptest! {
    #[test]
    fn fresh_strip_shows_first_page(n in 1usize..40, m in 3usize..8) {
        let b = LoopBuffer::new(n, m, 320.0).unwrap();
        prop_assert_eq!(b.current_page(), 0);
        prop_assert_eq!(b.display_index(), n as i64);
        prop_assert_eq!(b.slot_count(), n * m);
    }

    #[test]
    fn unit_steps_track_modular_page(
        n in 1usize..12,
        m in 3usize..6,
        steps in prop::collection::vec(step(), 0..200),
    ) {
        let mut b = LoopBuffer::new(n, m, 100.0).unwrap();
        let mut expected = 0i64;
        for delta in steps {
            let fix = b.navigate(delta);
            expected = (expected + delta).rem_euclid(n as i64);
            prop_assert_eq!(b.current_page() as i64, expected);
            if let Some(fix) = fix {
                b.apply(fix);
                prop_assert_eq!(b.current_page() as i64, expected);
                prop_assert!(b.display_index() >= b.lower_edge());
                prop_assert!(b.display_index() <= b.upper_edge());
            }
        }
    }

    #[test]
    fn correction_keeps_page_for_any_jump(
        n in 1usize..20,
        m in 3usize..8,
        delta in -500i64..500,
    ) {
        let mut b = LoopBuffer::new(n, m, 10.0).unwrap();
        let fix = b.navigate(delta);
        let page = b.current_page();
        if let Some(fix) = fix {
            b.apply(fix);
            prop_assert_eq!(b.current_page(), page);
            prop_assert!(b.display_index() >= b.lower_edge());
            prop_assert!(b.display_index() <= b.upper_edge());
        }
    }

    #[test]
    fn go_to_page_lands_on_target(
        n in 1usize..10,
        targets in prop::collection::vec(0usize..10, 1..30),
    ) {
        let clock = ManualClock::new();
        let items: Vec<String> = (0..n).map(|i| format!("card {i}")).collect();
        let mut c = Carousel::new(
            items,
            CarouselConfig::default().with_autoplay(None),
            Null,
            clock.clone(),
        )
        .unwrap();
        for target in targets {
            let target = target % n;
            c.go_to_page(target).unwrap();
            prop_assert_eq!(c.current_page(), target);
            prop_assert_eq!(c.indicator().active(), target);
            clock.advance(Duration::from_millis(600));
            c.pump();
            prop_assert_eq!(c.current_page(), target);
        }
    }
}
