use notebar_ui_scroll::{ChromeOffset, Px, ScrollConsumption};
use proptest::prelude::*;

const EXTENT: f32 = 160.0;

fn deltas() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1_000.0f32..1_000.0, 0..64)
}

fn apply(offset: &mut ChromeOffset, deltas: &[f32]) {
    for delta in deltas {
        let _ = offset.on_scroll_delta(*delta);
    }
}

proptest! {
    #[test]
    fn offset_stays_within_extent(deltas in deltas()) {
        let mut offset = ChromeOffset::with_extent(Px(EXTENT));

        for delta in deltas {
            let consumed = offset.on_scroll_delta(delta);
            prop_assert_eq!(consumed, ScrollConsumption::Ignored);
            prop_assert!(offset.current_offset() >= -EXTENT);
            prop_assert!(offset.current_offset() <= 0.0);
        }
    }

    #[test]
    fn hidden_chrome_ignores_further_downward_scroll(delta in -1_000.0f32..=0.0) {
        let mut offset = ChromeOffset::with_extent(Px(EXTENT));
        offset.on_scroll_delta(-EXTENT);

        offset.on_scroll_delta(delta);
        prop_assert_eq!(offset.current_offset(), -EXTENT);
    }

    #[test]
    fn resting_chrome_ignores_further_upward_scroll(delta in 0.0f32..1_000.0) {
        let mut offset = ChromeOffset::with_extent(Px(EXTENT));

        offset.on_scroll_delta(delta);
        prop_assert_eq!(offset.current_offset(), 0.0);
    }

    #[test]
    fn delta_inside_range_moves_offset_linearly(
        start in 0i32..=160,
        delta in -160i32..=160,
    ) {
        // Whole-pixel values keep the arithmetic exact.
        let start = -(start as f32);
        let delta = delta as f32;
        prop_assume!(start + delta >= -EXTENT && start + delta <= 0.0);

        let mut offset = ChromeOffset::with_extent(Px(EXTENT));
        offset.on_scroll_delta(start);
        offset.on_scroll_delta(delta);

        prop_assert_eq!(offset.current_offset(), start + delta);
    }

    #[test]
    fn same_deltas_give_same_offset(deltas in deltas()) {
        let mut first = ChromeOffset::with_extent(Px(EXTENT));
        let mut second = ChromeOffset::with_extent(Px(EXTENT));

        apply(&mut first, &deltas);
        apply(&mut second, &deltas);

        prop_assert_eq!(first, second);
    }
}
