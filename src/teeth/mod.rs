//! Tooth-count normalization.
//!
//! Component records carry tooth counts in several shapes (a list, a JSON list
//! string, a comma-separated string, a single number). Everything downstream
//! works on a plain ordered `TeethSpec`, produced here.

pub mod parser;

pub use parser::*;
