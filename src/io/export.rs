//! Export gear tables.
//!
//! - JSON: the full `Calculation` (inputs, window, overall range, tables)
//! - CSV: one flat row per (front, gear), easy to load into a spreadsheet

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::Calculation;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct GearRow<'a> {
    front_tooth: u32,
    front_total_range: u32,
    gear_num: usize,
    rear_tooth: u32,
    ratio: String,
    change_pct: Option<String>,
    status: &'a str,
}

/// Write a calculation as pretty JSON.
pub fn write_results_json(path: &Path, calculation: &Calculation) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, calculation)
        .map_err(|e| AppError::new(4, format!("Failed to write export JSON: {e}")))?;
    Ok(())
}

/// Write one CSV row per gear.
pub fn write_results_csv(path: &Path, calculation: &Calculation) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for table in &calculation.tables {
        for gear in &table.gears {
            writer
                .serialize(GearRow {
                    front_tooth: table.front_tooth,
                    front_total_range: table.total_range,
                    gear_num: gear.gear_num,
                    rear_tooth: gear.rear_tooth,
                    ratio: format!("{:.3}", gear.ratio),
                    change_pct: gear.change_pct.map(|v| format!("{v:.1}")),
                    status: gear.display_status().label(),
                })
                .map_err(|e| AppError::new(4, format!("Failed to write export CSV row: {e}")))?;
        }
    }

    writer
        .flush()
        .map_err(|e| AppError::new(4, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
