//! Fixed-precision rounding.
//!
//! Every displayed number in a gear table is rounded to a fixed number of
//! decimals (ratio: 3, change %: 1, range: 0). Classification happens on the
//! rounded ratio, so the rounding mode is part of the observable behavior.
//!
//! Mode: **round half to even** on the exact binary value. A decimal "tie"
//! such as `2.675` is stored slightly below or above the midpoint, so it rounds
//! to the nearest side. Scaling by `10^decimals` first is not safe: the product
//! can itself round onto an exact `.5` and create a tie that was never there
//! (`6.65000000000000035 * 10 == 66.5`).

/// Number of decimals kept on a gear ratio.
pub const RATIO_DECIMALS: u32 = 3;

/// Number of decimals kept on a shift delta percentage.
pub const CHANGE_PCT_DECIMALS: u32 = 1;

/// Round `value` to `decimals` places, ties to even.
///
/// Fixed-precision formatting works from the exact binary expansion and breaks
/// ties to even, and parsing the digits back is correctly rounded.
///
/// Non-finite inputs are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.prec$}", prec = decimals as usize)
        .parse()
        .unwrap_or(value)
}

/// Round to the nearest whole number (ties to even) and convert.
///
/// Negative and non-finite values clamp to `0`.
pub fn round_to_u32(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round_ties_even();
    if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
