//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - calculation inputs (`ToothCount`, `TeethSpec`, `PreferenceWindow`)
//! - calculation outputs (`GearEntry`, `GearTable`, `EngineResult`)
//! - catalog records (`Component`, `Configuration`)

pub mod types;

pub use types::*;
