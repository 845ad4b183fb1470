//! Reporting utilities: formatted terminal output for calculations, listings
//! and comparisons.

pub mod format;

pub use format::*;
