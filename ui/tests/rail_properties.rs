//! Property checks for the rail controller against a scripted viewport.

use proptest::prelude::*;
use ui::core::rail::{
    index_for_offset, RailConfig, RailController, RailError, RailState, ScrollBehavior,
    ScrollDirection, Viewport, ViewportMetrics,
};

#[derive(Debug, Default)]
struct ScriptedViewport {
    metrics: ViewportMetrics,
    scrolled: f64,
}

impl Viewport for ScriptedViewport {
    fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn scroll_by(&mut self, delta: f64, _behavior: ScrollBehavior) {
        self.scrolled += delta;
    }

    fn set_offset(&mut self, offset: f64) {
        self.metrics.offset = offset;
    }
}

fn rail(config: RailConfig, width: f64, offset: f64) -> RailController<ScriptedViewport> {
    let mut rail = RailController::new(config);
    rail.bind(ScriptedViewport {
        metrics: ViewportMetrics {
            width,
            offset,
            left_edge: 0.0,
            max_offset: 50_000.0,
        },
        scrolled: 0.0,
    });
    rail
}

fn any_config() -> impl Strategy<Value = RailConfig> {
    (0usize..20).prop_flat_map(|count| {
        prop_oneof![
            Just(RailConfig::facilities(count)),
            Just(RailConfig::programs(count)),
            Just(RailConfig::objectives(count)),
        ]
    })
}

proptest! {
    #[test]
    fn active_index_stays_in_bounds(
        config in any_config(),
        width in 0.0f64..3000.0,
        offset in -20_000.0f64..20_000.0,
    ) {
        let rail = rail(config, width, offset);
        let last = config.item_count.saturating_sub(1);
        prop_assert!(rail.active_index() <= last);
        prop_assert_eq!(rail.indicator_count(), config.item_count);
    }

    #[test]
    fn drag_tracks_twice_the_pointer_delta(
        start in -2000.0f64..2000.0,
        travel in -2000.0f64..2000.0,
        base in 0.0f64..5000.0,
        left in 0.0f64..400.0,
    ) {
        let mut rail = rail(RailConfig::programs(7), 800.0, base);
        rail.viewport_mut().unwrap().metrics.left_edge = left;
        rail.begin_drag(start).unwrap();
        let offset = rail.drag_move(start + travel).unwrap();
        prop_assert!((offset - (base - 2.0 * travel)).abs() < 1e-6);
        prop_assert!(rail.end_drag());
        prop_assert_eq!(rail.state(), RailState::Idle);
        prop_assert!(!rail.end_drag());
    }

    #[test]
    fn fixed_rail_steps_by_whole_cards(width in 344.0f64..4000.0) {
        let mut rail = rail(RailConfig::facilities(15), width, 0.0);
        let step = rail.advance(ScrollDirection::Forward).unwrap();
        let cards = step / 344.0;
        prop_assert!((cards - cards.round()).abs() < 1e-9);
        prop_assert!(step <= width);
        prop_assert!(width - step < 344.0);
    }

    #[test]
    fn index_rounding_matches_nearest_card(card in 0usize..7, jitter in -0.49f64..0.49) {
        let stride = 344.0;
        let offset = (card as f64 + jitter) * stride;
        prop_assert_eq!(index_for_offset(offset, stride, 7), card);
    }
}

#[test]
fn fixed_rail_step_example() {
    let mut rail = rail(RailConfig::facilities(15), 1000.0, 0.0);
    assert_eq!(rail.advance(ScrollDirection::Forward), Ok(688.0));
    assert_eq!(rail.viewport_mut().unwrap().scrolled, 688.0);
}

#[test]
fn overscroll_clamps_to_last_card() {
    let stride = 344.0;
    let rail = rail(RailConfig::facilities(7), 1000.0, 6.4 * stride);
    assert_eq!(rail.active_index(), 6);
    assert_eq!(index_for_offset(12.0 * stride, stride, 7), 6);
}

#[test]
fn unmeasured_rail_does_not_move() {
    let mut rail = rail(RailConfig::objectives(5), 0.0, 0.0);
    assert_eq!(
        rail.advance(ScrollDirection::Forward),
        Err(RailError::DegenerateStep)
    );
    let vp = rail.viewport_mut().unwrap();
    assert_eq!(vp.scrolled, 0.0);
    assert_eq!(vp.metrics.offset, 0.0);
}
