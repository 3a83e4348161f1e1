use heatcurve_core::{interpolate_at, interpolate_many};

#[test]
fn outside_table_returns_boundary_value() {
    let xs = [-20.0, 0.0, 20.0];
    let ys = [50.0, 35.0, 20.0];
    assert_eq!(interpolate_at(-40.0, &xs, &ys), 50.0);
    assert_eq!(interpolate_at(40.0, &xs, &ys), 20.0);
    assert_eq!(interpolate_at(-20.0, &xs, &ys), 50.0);
    assert_eq!(interpolate_at(20.0, &xs, &ys), 20.0);
}

#[test]
fn inside_table_is_piecewise_linear() {
    let xs = [-20.0, 0.0, 20.0];
    let ys = [50.0, 30.0, 20.0];
    assert!((interpolate_at(-10.0, &xs, &ys) - 40.0).abs() < 1e-12);
    assert!((interpolate_at(10.0, &xs, &ys) - 25.0).abs() < 1e-12);
}

#[test]
fn many_matches_single_lookups() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 10.0, 0.0];
    let q = [-1.0, 0.5, 1.0, 1.5, 3.0];
    let out = interpolate_many(&q, &xs, &ys);
    assert_eq!(out, vec![0.0, 5.0, 10.0, 5.0, 0.0]);
}

#[test]
fn mismatched_lengths_use_common_prefix() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 10.0];
    assert_eq!(interpolate_at(5.0, &xs, &ys), 10.0);
}

#[test]
fn nan_query_is_nan() {
    assert!(interpolate_at(f64::NAN, &[0.0, 1.0], &[0.0, 1.0]).is_nan());
}
