//! Ratio classification against a preference window.
//!
//! The warning band is 10% of the window span, measured inward from each edge.
//! Edges of the window count as outside, edges of the warning band as optimal:
//!
//! ```text
//! ratio <= min or ratio >= max              -> poor
//! ratio < min + buffer or ratio > max - buffer -> warning
//! otherwise                                   -> optimal
//! ```

use crate::domain::{GearStatus, PreferenceWindow};

/// Fraction of the window span used as the warning band on each side.
pub const WARNING_BAND: f64 = 0.10;

/// Classify `ratio`, or `None` when no window is supplied.
pub fn classify(ratio: f64, window: Option<&PreferenceWindow>) -> Option<GearStatus> {
    window.map(|w| classify_within(ratio, w))
}

/// Classify `ratio` against a concrete window.
pub fn classify_within(ratio: f64, window: &PreferenceWindow) -> GearStatus {
    let buffer = WARNING_BAND * window.span();

    if ratio <= window.min_ratio || ratio >= window.max_ratio {
        GearStatus::Poor
    } else if ratio < window.min_ratio + buffer || ratio > window.max_ratio - buffer {
        GearStatus::Warning
    } else {
        GearStatus::Optimal
    }
}
