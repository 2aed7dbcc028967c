use sinewave_core::{sample_curve, CURVE_SAMPLES, DEFAULT_BOUND};

#[test]
fn curve_has_exactly_one_thousand_points() {
    assert_eq!(CURVE_SAMPLES, 1000);
    assert_eq!(sample_curve(DEFAULT_BOUND).len(), CURVE_SAMPLES);
}

#[test]
fn curve_endpoints_are_exact() {
    let bound = 6.28;
    let points = sample_curve(bound);
    assert_eq!(points[0], (0.0, 0.0));
    let (last_x, last_y) = points[CURVE_SAMPLES - 1];
    assert_eq!(last_x, bound);
    assert_eq!(last_y, bound.sin());
}

#[test]
fn curve_spacing_is_even() {
    let bound = 10.0;
    let points = sample_curve(bound);
    let step = bound / (CURVE_SAMPLES - 1) as f64;
    for (i, (x, y)) in points.iter().enumerate() {
        assert!((x - i as f64 * step).abs() < 1e-12);
        assert_eq!(*y, x.sin());
    }
}

#[test]
fn near_zero_bound_collapses_toward_origin() {
    let points = sample_curve(1e-12);
    assert_eq!(points.len(), CURVE_SAMPLES);
    for (x, y) in points {
        assert!((0.0..=1e-12).contains(&x));
        assert!(y.abs() <= 1e-12);
    }
}
