//! Quadrant classification.

use crate::types::{Quadrant, RotationPoint};

/// Centre of both RRG axes.
pub const AXIS_CENTRE: f64 = 100.0;

/// Classify an (RS-Ratio, RS-Momentum) pair.
///
/// A value exactly on an axis counts as above it. Any undefined input
/// yields [`Quadrant::NoData`].
///
/// # Example
///
/// ```rust
/// use rrg_core::{rotation::classify, Quadrant};
///
/// assert_eq!(classify(Some(100.0), Some(100.0)), Quadrant::Leading);
/// assert_eq!(classify(Some(99.99), Some(100.0)), Quadrant::Improving);
/// assert_eq!(classify(None, Some(101.0)), Quadrant::NoData);
/// ```
pub fn classify(rs_ratio: Option<f64>, rs_momentum: Option<f64>) -> Quadrant {
    let (Some(ratio), Some(momentum)) = (rs_ratio, rs_momentum) else {
        return Quadrant::NoData;
    };

    // NaN compares false both ways and falls through to Lagging; keep it out
    if ratio.is_nan() || momentum.is_nan() {
        return Quadrant::NoData;
    }

    match (ratio >= AXIS_CENTRE, momentum >= AXIS_CENTRE) {
        (true, true) => Quadrant::Leading,
        (true, false) => Quadrant::Weakening,
        (false, true) => Quadrant::Improving,
        (false, false) => Quadrant::Lagging,
    }
}

impl From<RotationPoint> for Quadrant {
    fn from(point: RotationPoint) -> Self {
        classify(point.rs_ratio, point.rs_momentum)
    }
}
