//! Framework-agnostic state for the sine wave viewer.
//!
//! The GUI layer owns the widgets; everything the widgets have to agree on
//! lives here: the plotted domain's upper bound, the slider tick conversion
//! and the curve sampling.

pub mod domain;
pub mod sampling;

pub use domain::{
    parse_f64_input, DomainBound, DomainInputError, DEFAULT_BOUND, SLIDER_MAX, SLIDER_SCALE,
};
pub use sampling::{sample_curve, CURVE_SAMPLES};
