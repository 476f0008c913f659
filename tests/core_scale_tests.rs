use approx::assert_relative_eq;
use grouped_bar_rs::ChartError;
use grouped_bar_rs::core::{
    BandScale, CategoryDomain, ChartScales, LinearScale, ValueDomain, ViewDimensions,
    build_inner_scale, build_outer_scale, build_value_scale,
};

fn domain(keys: &[&str]) -> CategoryDomain {
    CategoryDomain::from_keys(keys.iter().copied()).expect("unique keys")
}

#[test]
fn value_scale_anchors_at_zero_regardless_of_domain_min() {
    let scale = build_value_scale(280.0, ValueDomain::new(20.0, 50.0));

    assert_eq!(scale.domain(), (0.0, 50.0));
    assert_relative_eq!(scale.map(0.0), 0.0);
    assert_relative_eq!(scale.map(25.0), 140.0);
    assert_relative_eq!(scale.map(50.0), 280.0);
}

#[test]
fn value_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn zero_value_domain_maps_everything_to_origin() {
    let scale = build_value_scale(280.0, ValueDomain::new(0.0, 0.0));

    assert!(scale.is_degenerate());
    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(10.0), 0.0);
}

#[test]
fn non_finite_linear_domain_is_rejected() {
    let err = LinearScale::new((0.0, f64::NAN), (0.0, 100.0)).expect_err("nan domain");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn value_scale_ticks_cover_domain() {
    let scale = build_value_scale(280.0, ValueDomain::new(0.0, 50.0));
    assert_eq!(scale.ticks(5), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
}

#[test]
fn outer_scale_positions_follow_domain_order() {
    let scale = build_outer_scale(220.0, domain(&["B", "A", "C"]), 0.1).expect("outer scale");

    let b = scale.position("B").expect("B");
    let a = scale.position("A").expect("A");
    let c = scale.position("C").expect("C");
    assert!(b < a && a < c);
    assert_relative_eq!(a - b, scale.step());
    assert_relative_eq!(c - a, scale.step());
}

#[test]
fn outer_scale_rejects_unknown_key() {
    let scale = build_outer_scale(220.0, domain(&["A", "B"]), 0.1).expect("outer scale");

    let err = scale.position("Z").expect_err("Z is not in the domain");
    assert!(matches!(err, ChartError::UnknownKey { key } if key == "Z"));
}

#[test]
fn inner_scale_fits_inside_one_outer_band() {
    let outer = build_outer_scale(220.0, domain(&["A", "B"]), 0.1).expect("outer scale");
    let inner = build_inner_scale(&outer, domain(&["x", "y"]), 0.1).expect("inner scale");

    assert_eq!(inner.range(), (0.0, outer.band_width()));
    assert!(inner.span() <= outer.band_width());
    // outer band = 94 -> inner step = floor(94 / 2.1) = 44, leftover 10.4.
    assert_eq!(inner.position("x").expect("x"), 5.0);
    assert_eq!(inner.position("y").expect("y"), 49.0);
    assert_eq!(inner.band_width(), 40.0);
}

#[test]
fn single_key_domain_gets_one_centered_band() {
    let scale = BandScale::new(domain(&["only"]), (0.0, 100.0), 0.1).expect("scale");

    // step = floor(100 / 1.1) = 90, leftover = 100 - 0.9 * 90 = 19.
    assert_eq!(scale.step(), 90.0);
    assert_eq!(scale.position("only").expect("only"), 10.0);
    assert_eq!(scale.band_width(), 81.0);
}

#[test]
fn zero_padding_tiles_the_range() {
    let scale = BandScale::new(domain(&["a", "b", "c", "d"]), (0.0, 100.0), 0.0).expect("scale");

    let starts: Vec<f64> = scale.bands().map(|(_, start)| start).collect();
    assert_eq!(starts, vec![0.0, 25.0, 50.0, 75.0]);
    assert_eq!(scale.band_width(), 25.0);
    assert_eq!(scale.span(), 100.0);
}

#[test]
fn chart_scales_build_all_three_from_dimensions() {
    let dims = ViewDimensions {
        width: 280.0,
        height: 220.0,
        x_offset: 100.0,
        y_offset: 10.0,
    };
    let scales = ChartScales::build(
        dims,
        ValueDomain::new(0.0, 50.0),
        domain(&["A", "B"]),
        domain(&["x", "y"]),
        0.1,
        0.1,
    )
    .expect("scales");

    assert_relative_eq!(scales.value.map(50.0), 280.0);
    assert_eq!(scales.outer.band_width(), 94.0);
    assert_eq!(scales.inner.range().1, scales.outer.band_width());
}
