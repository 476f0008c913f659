use grouped_bar_rs::core::{
    BandScale, CategoryDomain, LegendPosition, Margin, ValueDomain, ViewSize, build_inner_scale,
    build_outer_scale, build_value_scale, calculate_view_dimensions,
};
use proptest::prelude::*;

fn keys(prefix: &str, count: usize) -> CategoryDomain {
    CategoryDomain::from_keys((0..count).map(|i| format!("{prefix}{i}"))).expect("unique keys")
}

proptest! {
    #[test]
    fn dimensions_subtract_margins_without_legend(
        width in 200.0f64..4000.0,
        height in 200.0f64..4000.0,
        top in 0.0f64..50.0,
        right in 0.0f64..50.0,
        bottom in 0.0f64..50.0,
        left in 0.0f64..50.0,
    ) {
        let dims = calculate_view_dimensions(
            ViewSize::new(width, height),
            Margin::new(top, right, bottom, left),
            false,
            false,
            false,
            9.0,
            LegendPosition::Right,
        );

        prop_assert!((dims.width - (width - left - right)).abs() <= 1e-9);
        prop_assert!((dims.height - (height - top - bottom)).abs() <= 1e-9);
    }

    #[test]
    fn legend_shrinks_width_by_exact_reserve(
        width in 300.0f64..4000.0,
        reserve in 0.0f64..100.0,
    ) {
        let view = ViewSize::new(width, 400.0);
        let margin = Margin::new(10.0, 20.0, 70.0, 100.0);
        let without = calculate_view_dimensions(
            view, margin, false, false, false, reserve, LegendPosition::Right,
        );
        let with = calculate_view_dimensions(
            view, margin, false, false, true, reserve, LegendPosition::Right,
        );

        prop_assert!((without.width - with.width - reserve).abs() <= 1e-9);
        prop_assert_eq!(without.height, with.height);
    }

    #[test]
    fn value_scale_maps_zero_and_max_to_range_ends(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000_000.0,
        width in 1.0f64..4000.0,
    ) {
        let max = min.abs() + span;
        let scale = build_value_scale(width, ValueDomain::new(min, max));

        prop_assert_eq!(scale.map(0.0), 0.0);
        prop_assert!((scale.map(max) - width).abs() <= 1e-9 * width.max(1.0));
    }

    #[test]
    fn outer_bands_increase_and_never_overlap(
        height in 100.0f64..4000.0,
        count in 1usize..12,
        padding in 0.0f64..0.5,
    ) {
        let scale = build_outer_scale(height, keys("p", count), padding).expect("outer scale");

        let starts: Vec<f64> = scale.bands().map(|(_, start)| start).collect();
        prop_assert_eq!(starts.len(), count);
        for pair in starts.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert!(pair[0] + scale.band_width() <= pair[1]);
            prop_assert_eq!(pair[1] - pair[0], scale.step());
        }
        for start in &starts {
            prop_assert!(*start >= 0.0);
            prop_assert!(start + scale.band_width() <= height);
        }
    }

    #[test]
    fn inner_span_never_exceeds_outer_band(
        height in 50.0f64..4000.0,
        outer_count in 1usize..10,
        inner_count in 1usize..8,
        outer_padding in 0.0f64..0.5,
        inner_padding in 0.0f64..0.5,
    ) {
        let outer = build_outer_scale(height, keys("p", outer_count), outer_padding)
            .expect("outer scale");
        let inner = build_inner_scale(&outer, keys("s", inner_count), inner_padding)
            .expect("inner scale");

        prop_assert!(inner.span() <= outer.band_width());
    }

    #[test]
    fn domain_keys_map_back_inside_range(
        height in 10.0f64..4000.0,
        count in 1usize..20,
        padding in 0.0f64..0.9,
    ) {
        let domain = keys("k", count);
        let scale = BandScale::new(domain.clone(), (0.0, height), padding).expect("scale");

        for key in domain.iter() {
            let position = scale.position(key).expect("domain key");
            prop_assert!((0.0..=height).contains(&position));
        }
    }
}
