//! Overall gear range.
//!
//! ```text
//! hardest = max(front) / min(rear)
//! easiest = min(front) / max(rear)
//! range   = round(hardest / easiest × 100)
//! ```
//!
//! Degenerate input (an empty side, a zero rear extreme, a zero easiest ratio)
//! yields `0` instead of an error so callers can still display something.

use crate::domain::ToothCount;
use crate::math::round_to_u32;

/// Range between the hardest and easiest ratio as a whole percentage.
pub fn total_range_pct(front_teeth: &[ToothCount], rear_teeth: &[ToothCount]) -> u32 {
    let (Some(&max_front), Some(&min_front)) = (front_teeth.iter().max(), front_teeth.iter().min())
    else {
        return 0;
    };
    let (Some(&max_rear), Some(&min_rear)) = (rear_teeth.iter().max(), rear_teeth.iter().min())
    else {
        return 0;
    };

    if min_rear == 0 || max_rear == 0 {
        return 0;
    }

    let max_ratio = f64::from(max_front) / f64::from(min_rear);
    let min_ratio = f64::from(min_front) / f64::from(max_rear);

    if min_ratio == 0.0 {
        return 0;
    }

    round_to_u32(max_ratio / min_ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_double_with_road_cassette() {
        assert_eq!(total_range_pct(&[50, 34], &[11, 28]), 374);
        assert_eq!(
            total_range_pct(&[50, 34], &[11, 12, 13, 14, 15, 17, 19, 21, 23, 25, 28]),
            374
        );
    }

    #[test]
    fn single_front_uses_cassette_spread() {
        // 42 / 11 = 3.818...
        assert_eq!(
            total_range_pct(&[40], &[11, 13, 15, 17, 19, 21, 24, 28, 32, 36, 42]),
            382
        );
        assert_eq!(total_range_pct(&[50], &[11, 28]), 255);
    }

    #[test]
    fn input_order_does_not_matter() {
        assert_eq!(
            total_range_pct(&[34, 50], &[28, 11, 19]),
            total_range_pct(&[50, 34], &[11, 19, 28])
        );
    }

    #[test]
    fn one_gear_is_one_hundred_percent() {
        assert_eq!(total_range_pct(&[40], &[20]), 100);
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        assert_eq!(total_range_pct(&[], &[11, 28]), 0);
        assert_eq!(total_range_pct(&[50], &[]), 0);
        assert_eq!(total_range_pct(&[], &[]), 0);
        assert_eq!(total_range_pct(&[50], &[0, 28]), 0);
        assert_eq!(total_range_pct(&[50], &[0]), 0);
        assert_eq!(total_range_pct(&[0, 50], &[11, 28]), 0);
    }
}
