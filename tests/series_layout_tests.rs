use approx::assert_relative_eq;
use grouped_bar_rs::ChartError;
use grouped_bar_rs::core::{
    CategoryDomain, Series, Stripe, SubSeries, ValueDomain, ViewDimensions, build_inner_scale,
    build_outer_scale, build_value_scale, grid_panels, offset_for, project_series_bars,
};

fn domain(keys: &[&str]) -> CategoryDomain {
    CategoryDomain::from_keys(keys.iter().copied()).expect("unique keys")
}

fn series(name: &str, values: &[(&str, f64)]) -> Series {
    Series::new(
        name,
        values
            .iter()
            .map(|(key, value)| SubSeries::new(*key, *value))
            .collect(),
    )
}

#[test]
fn offset_moves_series_along_category_axis_only() {
    let outer = build_outer_scale(220.0, domain(&["A", "B"]), 0.1).expect("outer");

    let a = offset_for(&series("A", &[]), &outer).expect("A offset");
    let b = offset_for(&series("B", &[]), &outer).expect("B offset");

    assert_eq!(a.dx, 0.0);
    assert_eq!(b.dx, 0.0);
    assert_eq!(a.dy, 11.0);
    assert_eq!(b.dy, 115.0);
}

#[test]
fn offset_for_unknown_series_is_surfaced() {
    let outer = build_outer_scale(220.0, domain(&["A", "B"]), 0.1).expect("outer");

    let err = offset_for(&series("C", &[]), &outer).expect_err("C is not a primary key");
    assert!(matches!(err, ChartError::UnknownSeries { name } if name == "C"));
}

#[test]
fn bars_are_projected_inside_their_cluster() {
    let outer = build_outer_scale(220.0, domain(&["A", "B"]), 0.1).expect("outer");
    let inner = build_inner_scale(&outer, domain(&["x", "y"]), 0.1).expect("inner");
    let value = build_value_scale(280.0, ValueDomain::new(0.0, 50.0));

    let bars = project_series_bars(&series("B", &[("x", 50.0), ("y", 25.0)]), &outer, &inner, value)
        .expect("projection");

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].subseries, "x");
    assert_relative_eq!(bars[0].rect.x, 0.0);
    assert_relative_eq!(bars[0].rect.width, 280.0);
    assert_relative_eq!(bars[0].rect.y, 115.0 + 5.0);
    assert_relative_eq!(bars[0].rect.height, 40.0);

    assert_relative_eq!(bars[1].rect.width, 140.0);
    assert_relative_eq!(bars[1].rect.y, 115.0 + 49.0);
}

#[test]
fn missing_subseries_keeps_slot_for_remaining_bars() {
    let outer = build_outer_scale(220.0, domain(&["A", "B"]), 0.1).expect("outer");
    let inner = build_inner_scale(&outer, domain(&["x", "y"]), 0.1).expect("inner");
    let value = build_value_scale(280.0, ValueDomain::new(0.0, 50.0));

    let full = project_series_bars(&series("A", &[("x", 10.0), ("y", 10.0)]), &outer, &inner, value)
        .expect("full");
    let partial = project_series_bars(&series("A", &[("y", 10.0)]), &outer, &inner, value)
        .expect("partial");

    assert_eq!(partial.len(), 1);
    assert_eq!(partial[0].rect, full[1].rect);
}

#[test]
fn negative_value_grows_back_towards_origin() {
    let outer = build_outer_scale(220.0, domain(&["A"]), 0.1).expect("outer");
    let inner = build_inner_scale(&outer, domain(&["x"]), 0.1).expect("inner");
    let value = build_value_scale(280.0, ValueDomain::new(-10.0, 50.0));

    let bars = project_series_bars(&series("A", &[("x", -10.0)]), &outer, &inner, value)
        .expect("projection");

    assert_relative_eq!(bars[0].rect.x, -56.0);
    assert_relative_eq!(bars[0].rect.width, 56.0);
}

#[test]
fn unknown_subseries_key_fails_projection() {
    let outer = build_outer_scale(220.0, domain(&["A"]), 0.1).expect("outer");
    let inner = build_inner_scale(&outer, domain(&["x"]), 0.1).expect("inner");
    let value = build_value_scale(280.0, ValueDomain::new(0.0, 50.0));

    let err = project_series_bars(&series("A", &[("z", 1.0)]), &outer, &inner, value)
        .expect_err("z is not a secondary key");
    assert!(matches!(err, ChartError::UnknownKey { key } if key == "z"));
}

#[test]
fn grid_panels_alternate_and_tile_outer_pitch() {
    let outer = build_outer_scale(220.0, domain(&["A", "B"]), 0.1).expect("outer");
    let dims = ViewDimensions {
        width: 280.0,
        height: 220.0,
        x_offset: 100.0,
        y_offset: 10.0,
    };

    let panels = grid_panels(&[series("A", &[]), series("B", &[])], &outer, dims).expect("panels");

    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].stripe, Stripe::Even);
    assert_eq!(panels[1].stripe, Stripe::Odd);
    assert_relative_eq!(panels[0].rect.width, 280.0);
    assert_relative_eq!(panels[0].rect.height, outer.step());
    assert_relative_eq!(panels[0].rect.y + panels[0].rect.height, panels[1].rect.y);
}
