use bubblechart_rs::core::snap_value;
use proptest::prelude::*;

proptest! {
    #[test]
    fn snapped_values_are_multiples_of_the_interval(value in -100_000.0f64..100_000.0) {
        let snapped = snap_value(value, 10.0);
        let multiple = snapped / 10.0;
        prop_assert!((multiple - multiple.round()).abs() <= 1e-9);
    }

    #[test]
    fn snapping_moves_at_most_half_an_interval(value in -100_000.0f64..100_000.0) {
        let snapped = snap_value(value, 10.0);
        prop_assert!((snapped - value).abs() <= 5.0 + 1e-9);
    }

    #[test]
    fn snapping_is_idempotent(value in -100_000.0f64..100_000.0, interval in 0.5f64..500.0) {
        let once = snap_value(value, interval);
        let twice = snap_value(once, interval);
        prop_assert!((once - twice).abs() <= 1e-9);
    }
}
