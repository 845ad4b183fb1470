//! `gear-ratios` library crate.
//!
//! The binary (`gears`) is a thin wrapper around this library so that:
//!
//! - the ratio core is testable without spawning processes
//! - callers (a web handler, a notebook) can use the engine directly
//!
//! The calculation core lives in `teeth` (input normalization) and `ratio`
//! (range, classification, gear tables). It is pure and never logs; every other
//! module is application plumbing around it.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod ratio;
pub mod report;
pub mod settings;
pub mod teeth;

pub use domain::{
    EngineResult, GearEntry, GearStatus, GearTable, PreferenceWindow, TeethSpec, ToothCount,
};
pub use error::TeethFormatError;
pub use ratio::{classify, compute_from_raw, compute_gear_tables, total_range_pct};
pub use teeth::{TeethInput, parse};
