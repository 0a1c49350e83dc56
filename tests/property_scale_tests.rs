use livechart::core::{Scale, ScaleGeometry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn map_x_is_monotonic_within_drawable_width(
        width in 10.0f64..4_000.0,
        padding_factor in 0.0f64..0.45,
        total in 2usize..500
    ) {
        let padding = width * padding_factor;
        let scale = Scale::new(ScaleGeometry::new(width, 300.0, padding)).expect("valid scale");

        let mut previous = scale.map_x(0, total);
        prop_assert!((previous - padding).abs() <= 1e-9);
        for index in 1..total {
            let x = scale.map_x(index, total);
            prop_assert!(x > previous);
            previous = x;
        }
        prop_assert!((previous - (width - padding)).abs() <= 1e-6);
    }

    #[test]
    fn map_y_bounds_land_on_padding_edges(
        height in 10.0f64..4_000.0,
        padding_factor in 0.0f64..0.45,
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0
    ) {
        let padding = height * padding_factor;
        let scale = Scale::new(ScaleGeometry::new(300.0, height, padding)).expect("valid scale");
        scale.set_domain(min, min + span);

        prop_assert!((scale.map_y(min) - (height - padding)).abs() <= 1e-6);
        prop_assert!((scale.map_y(min + span) - padding).abs() <= 1e-6);
    }

    #[test]
    fn higher_values_map_higher_on_screen(
        min in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        low_factor in 0.0f64..0.5,
        gap_factor in 0.01f64..0.5
    ) {
        let scale = Scale::new(ScaleGeometry::new(640.0, 360.0, 40.0)).expect("valid scale");
        scale.set_domain(min, min + span);

        let low = min + low_factor * span;
        let high = low + gap_factor * span;
        prop_assert!(scale.map_y(high) < scale.map_y(low));
    }

    #[test]
    fn domain_never_degenerates(min in -1_000_000.0f64..1_000_000.0) {
        let scale = Scale::new(ScaleGeometry::new(640.0, 360.0, 40.0)).expect("valid scale");
        scale.set_domain(min, min);

        let domain = scale.domain();
        prop_assert_eq!(domain.min, min);
        prop_assert_eq!(domain.max, min + 1.0);
        prop_assert!(scale.map_y(min).is_finite());
    }
}
