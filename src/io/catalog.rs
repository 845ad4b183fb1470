//! Read/write catalog JSON files.
//!
//! A catalog file holds components, saved configurations and an optional
//! preference window. Component `teeth` may be written in any shape the teeth
//! parser accepts (`[50, 34]`, `"50, 34"`, `"[50, 34]"`, `40`).
//!
//! The schema is defined by `catalog::Catalog`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::AppError;

/// Read a catalog JSON file.
pub fn read_catalog_json(path: &Path) -> Result<Catalog, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open catalog '{}': {e}", path.display())))?;
    let catalog: Catalog = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid catalog JSON '{}': {e}", path.display())))?;
    Ok(catalog)
}

/// Write a catalog JSON file.
pub fn write_catalog_json(path: &Path, catalog: &Catalog) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create catalog '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, catalog)
        .map_err(|e| AppError::new(4, format!("Failed to write catalog JSON: {e}")))?;
    Ok(())
}
