//! Input/output helpers.
//!
//! - catalog JSON read/write (`catalog`)
//! - gear table exports (JSON/CSV) (`export`)

pub mod catalog;
pub mod export;

pub use catalog::*;
pub use export::*;
