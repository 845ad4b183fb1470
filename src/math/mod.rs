//! Numeric helpers shared by the ratio calculations.

pub mod rounding;

pub use rounding::*;
