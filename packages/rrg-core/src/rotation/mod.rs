//! Relative rotation engine.
//!
//! Data flows one way: [`align`] an instrument with its benchmark, compute
//! RS-Ratio and RS-Momentum with [`RotationMetric`], [`classify`] the
//! result, and assemble a sorted table with [`RotationTableBuilder`].

mod align;
mod metric;
mod quadrant;
mod table;

pub use align::{align, Insufficient};
pub use metric::{
    RotationMetric, RotationSeries, DECIMALS, MOMENTUM_WINDOW, RATIO_LONG_WINDOW,
    RATIO_SHORT_WINDOW,
};
pub use quadrant::{classify, AXIS_CENTRE};
pub use table::{RotationTableBuilder, SeriesMap};
