//! Curve sampling for the plot surface.

/// Number of points sampled over the plotted domain, both endpoints included.
pub const CURVE_SAMPLES: usize = 1000;

/// Samples sin(x) on [`CURVE_SAMPLES`] evenly spaced points over `[0, bound]`.
///
/// The last sample's x is exactly `bound`, so the curve endpoint always
/// agrees with the result label. Bounds arbitrarily close to zero collapse
/// the samples toward the origin; degenerate but valid.
pub fn sample_curve(bound: f64) -> Vec<(f64, f64)> {
    let last = (CURVE_SAMPLES - 1) as f64;
    (0..CURVE_SAMPLES)
        .map(|i| {
            let x = bound * i as f64 / last;
            (x, x.sin())
        })
        .collect()
}
