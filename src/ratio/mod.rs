//! Gear ratio calculations.
//!
//! Responsibilities:
//!
//! - overall range between the hardest and easiest gear (`range`)
//! - quality label for a ratio against a preference window (`classify`)
//! - per-front gear tables with shift deltas (`engine`)
//!
//! Everything here is pure: no I/O, no logging, no shared state. Calls are
//! independent and safe to run from any number of threads.

pub mod classify;
pub mod engine;
pub mod range;

pub use classify::*;
pub use engine::*;
pub use range::*;
