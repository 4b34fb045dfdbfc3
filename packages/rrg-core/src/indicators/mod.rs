//! Smoothing primitives shared by the rotation metrics.
//!
//! - **SMA**: trailing simple moving average with an explicit warm-up policy

mod sma;

pub use sma::{sma, sma_values, MinPeriods};
