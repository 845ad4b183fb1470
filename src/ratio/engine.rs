//! Gear table computation.
//!
//! For every front tooth (in input order) we walk the rear cogs from largest to
//! smallest, i.e. from the easiest gear to the hardest, and record:
//!
//! - the ratio `front / rear` (3 decimals)
//! - the shift delta from the previous gear in percent (1 decimal)
//! - a quality label when a preference window is supplied
//!
//! The per-front `total_range` goes through [`total_range_pct`] with a
//! one-element front list rather than being derived from the table's first and
//! last ratio, so it shares the global formula's rounding and degenerate-input
//! rules.

use crate::domain::{EngineResult, GearEntry, GearTable, PreferenceWindow, ToothCount};
use crate::error::TeethFormatError;
use crate::math::{CHANGE_PCT_DECIMALS, RATIO_DECIMALS, round_to};
use crate::ratio::{classify, total_range_pct};
use crate::teeth::{TeethInput, parse};

/// Compute one gear table per front tooth.
pub fn compute_gear_tables(
    front_teeth: &[ToothCount],
    rear_teeth: &[ToothCount],
    window: Option<&PreferenceWindow>,
) -> EngineResult {
    let sorted_rear = sorted_descending(rear_teeth);

    front_teeth
        .iter()
        .map(|&front| GearTable {
            front_tooth: front,
            total_range: total_range_pct(&[front], rear_teeth),
            gears: gears_for_front(front, &sorted_rear, window),
        })
        .collect()
}

/// Parse raw front/rear inputs, then compute gear tables.
pub fn compute_from_raw(
    front: &TeethInput,
    rear: &TeethInput,
    window: Option<&PreferenceWindow>,
) -> Result<EngineResult, TeethFormatError> {
    let front_teeth = parse(front)?;
    let rear_teeth = parse(rear)?;
    Ok(compute_gear_tables(&front_teeth, &rear_teeth, window))
}

fn gears_for_front(
    front: ToothCount,
    sorted_rear: &[ToothCount],
    window: Option<&PreferenceWindow>,
) -> Vec<GearEntry> {
    let mut gears = Vec::with_capacity(sorted_rear.len());
    let mut prev_ratio: Option<f64> = None;

    for (i, &rear) in sorted_rear.iter().enumerate() {
        let ratio = round_to(f64::from(front) / f64::from(rear), RATIO_DECIMALS);
        let change_pct = if i == 0 {
            None
        } else {
            Some(change_pct(prev_ratio, ratio))
        };

        gears.push(GearEntry {
            rear_tooth: rear,
            ratio,
            gear_num: i + 1,
            change_pct,
            status: classify(ratio, window),
        });
        prev_ratio = Some(ratio);
    }

    gears
}

/// Percent change between consecutive ratios; `0` when there is no usable
/// previous ratio.
fn change_pct(prev_ratio: Option<f64>, ratio: f64) -> f64 {
    match prev_ratio {
        Some(prev) if prev != 0.0 => {
            round_to((ratio - prev) / prev * 100.0, CHANGE_PCT_DECIMALS)
        }
        _ => 0.0,
    }
}

/// Stable descending sort (largest cog first).
fn sorted_descending(teeth: &[ToothCount]) -> Vec<ToothCount> {
    let mut sorted = teeth.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted
}
