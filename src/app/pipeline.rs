//! Shared calculation workflows used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the lookup -> parse -> compute
//! chain across commands. The CLI can then focus on presentation.
//!
//! Unlike the ratio core, this layer logs: records it cannot use are skipped
//! with a warning rather than failing the whole listing.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::domain::{
    Calculation, Component, ComponentKind, Configuration, PreferenceWindow, TeethSpec,
};
use crate::error::{AppError, TeethFormatError};
use crate::math::{RATIO_DECIMALS, round_to};
use crate::ratio::{compute_gear_tables, total_range_pct};
use crate::teeth::{TeethInput, parse};

/// Timestamp format used in configuration listings.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One row of the saved-configuration listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationSummary {
    pub id: String,
    pub name: String,
    pub front_name: String,
    pub rear_name: String,
    pub total_range: u32,
    pub comments: Option<String>,
    pub created_at: Option<String>,
}

/// A saved configuration resolved against the catalog and computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationDetails {
    pub configuration: Configuration,
    pub front: Component,
    pub rear: Component,
    pub calculation: Calculation,
}

/// Overall range for one chainring × cassette pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixEntry {
    pub front_name: String,
    pub rear_name: String,
    pub easiest_ratio: f64,
    pub hardest_ratio: f64,
    pub total_range: u32,
}

/// Parse raw inputs and compute tables plus the overall range.
pub fn calculate(
    front: &TeethInput,
    rear: &TeethInput,
    window: Option<&PreferenceWindow>,
) -> Result<Calculation, TeethFormatError> {
    let front_teeth = parse(front)?;
    let rear_teeth = parse(rear)?;
    Ok(calculate_parsed(front_teeth, rear_teeth, window))
}

/// Compute tables for two catalog components.
pub fn calculate_from_components(
    front: &Component,
    rear: &Component,
    window: Option<&PreferenceWindow>,
) -> Result<Calculation, TeethFormatError> {
    calculate(&front.teeth, &rear.teeth, window)
}

fn calculate_parsed(
    front_teeth: TeethSpec,
    rear_teeth: TeethSpec,
    window: Option<&PreferenceWindow>,
) -> Calculation {
    Calculation {
        tables: compute_gear_tables(&front_teeth, &rear_teeth, window),
        total_range: total_range_pct(&front_teeth, &rear_teeth),
        front_teeth,
        rear_teeth,
        window: window.copied(),
    }
}

/// Resolve a saved configuration and compute its tables.
pub fn configuration_details(
    catalog: &Catalog,
    config_id: &str,
    window: Option<&PreferenceWindow>,
) -> Result<ConfigurationDetails, AppError> {
    let configuration = catalog
        .configuration(config_id)
        .ok_or_else(|| AppError::new(3, format!("Configuration '{config_id}' not found.")))?;
    let front = catalog.require_component(&configuration.front_component_id, ComponentKind::Chainring)?;
    let rear = catalog.require_component(&configuration.rear_component_id, ComponentKind::Cassette)?;

    let calculation = calculate_from_components(front, rear, window).map_err(|e| {
        AppError::new(2, format!("Configuration '{}': {e}", configuration.name))
    })?;

    Ok(ConfigurationDetails {
        configuration: configuration.clone(),
        front: front.clone(),
        rear: rear.clone(),
        calculation,
    })
}

/// One row per saved configuration with its overall range.
///
/// Configurations with a missing component or unparseable teeth are skipped.
pub fn summarize_configurations(catalog: &Catalog) -> Vec<ConfigurationSummary> {
    let mut rows = Vec::with_capacity(catalog.configurations.len());

    for configuration in &catalog.configurations {
        match summarize_one(catalog, configuration) {
            Ok(row) => rows.push(row),
            Err(err) => warn!(config = %configuration.id, "skipping configuration: {err}"),
        }
    }

    rows
}

fn summarize_one(catalog: &Catalog, configuration: &Configuration) -> Result<ConfigurationSummary, AppError> {
    let front = catalog.require_component(&configuration.front_component_id, ComponentKind::Chainring)?;
    let rear = catalog.require_component(&configuration.rear_component_id, ComponentKind::Cassette)?;

    let front_teeth = parse(&front.teeth)?;
    let rear_teeth = parse(&rear.teeth)?;

    Ok(ConfigurationSummary {
        id: configuration.id.clone(),
        name: configuration.name.clone(),
        front_name: front.name.clone(),
        rear_name: rear.name.clone(),
        total_range: total_range_pct(&front_teeth, &rear_teeth),
        comments: configuration.comments.clone(),
        created_at: configuration
            .created_at
            .map(|ts| ts.format(CREATED_AT_FORMAT).to_string()),
    })
}

/// Overall range for every chainring × cassette pairing in the catalog.
///
/// Rows are ordered by chainring, then cassette, in catalog order.
pub fn compare_matrix(catalog: &Catalog) -> Vec<MatrixEntry> {
    let fronts = parsed_components(catalog, ComponentKind::Chainring);
    let rears = parsed_components(catalog, ComponentKind::Cassette);

    let pairs: Vec<_> = fronts
        .iter()
        .flat_map(|f| rears.iter().map(move |r| (f, r)))
        .collect();
    debug!(pairs = pairs.len(), "computing comparison matrix");

    pairs
        .par_iter()
        .map(|((front, front_teeth), (rear, rear_teeth))| MatrixEntry {
            front_name: front.name.clone(),
            rear_name: rear.name.clone(),
            easiest_ratio: extreme_ratio(front_teeth.iter().min(), rear_teeth.iter().max()),
            hardest_ratio: extreme_ratio(front_teeth.iter().max(), rear_teeth.iter().min()),
            total_range: total_range_pct(front_teeth, rear_teeth),
        })
        .collect()
}

fn parsed_components(catalog: &Catalog, kind: ComponentKind) -> Vec<(&Component, TeethSpec)> {
    catalog
        .components_of(kind)
        .filter_map(|component| match parse(&component.teeth) {
            Ok(teeth) => Some((component, teeth)),
            Err(err) => {
                warn!(component = %component.id, "skipping component: {err}");
                None
            }
        })
        .collect()
}

fn extreme_ratio(front: Option<&u32>, rear: Option<&u32>) -> f64 {
    match (front, rear) {
        (Some(&f), Some(&r)) if r > 0 => round_to(f64::from(f) / f64::from(r), RATIO_DECIMALS),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use chrono::NaiveDate;

    fn configuration(id: &str, front: &str, rear: &str) -> Configuration {
        Configuration {
            id: id.to_string(),
            name: format!("Bike {id}"),
            front_component_id: front.to_string(),
            rear_component_id: rear.to_string(),
            comments: Some("test".to_string()),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9)
                .and_then(|d| d.and_hms_opt(14, 5, 0)),
        }
    }

    #[test]
    fn calculate_includes_overall_range() {
        let calc = calculate(&"50, 34".into(), &"[11, 28]".into(), None).unwrap();
        assert_eq!(calc.front_teeth, vec![50, 34]);
        assert_eq!(calc.rear_teeth, vec![11, 28]);
        assert_eq!(calc.total_range, 374);
        assert_eq!(calc.tables.len(), 2);
        assert!(calc.window.is_none());
    }

    #[test]
    fn details_for_saved_configuration() {
        let mut catalog = builtin_catalog();
        catalog.configurations.push(configuration("a", "gravel-1x", "gravel-11-42"));

        let window = PreferenceWindow::default();
        let details = configuration_details(&catalog, "a", Some(&window)).unwrap();
        assert_eq!(details.front.name, "Gravel 1x");
        assert_eq!(details.rear.name, "Gravel 11-42");
        assert_eq!(details.calculation.total_range, 382);
        assert_eq!(details.calculation.window, Some(window));

        let err = configuration_details(&catalog, "missing", None).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn summary_skips_broken_configurations() {
        let mut catalog = builtin_catalog();
        catalog.configurations.push(configuration("a", "compact-road", "road-11-28"));
        catalog.configurations.push(configuration("b", "gone", "road-11-28"));
        catalog.components[0].teeth = TeethInput::from("50,x");
        catalog.configurations.push(configuration("c", "compact-road", "road-11-32"));
        catalog.configurations.push(configuration("d", "standard-road", "road-11-32"));

        let rows = summarize_configurations(&catalog);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d"]);
        assert_eq!(rows[0].front_name, "Standard Road");
        // (53/11) / (39/32) = 3.954...
        assert_eq!(rows[0].total_range, 395);
        assert_eq!(rows[0].created_at.as_deref(), Some("2024-03-09 14:05"));
    }

    #[test]
    fn summary_and_details_agree_on_component_kinds() {
        let mut catalog = builtin_catalog();
        catalog.configurations.push(configuration("swapped", "road-11-28", "compact-road"));
        catalog.configurations.push(configuration("ok", "compact-road", "road-11-28"));

        let ids: Vec<String> = summarize_configurations(&catalog)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["ok".to_string()]);

        let err = configuration_details(&catalog, "swapped", None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn matrix_covers_every_pairing() {
        let catalog = builtin_catalog();
        let matrix = compare_matrix(&catalog);
        assert_eq!(matrix.len(), 9);

        assert_eq!(matrix[0].front_name, "Compact Road");
        assert_eq!(matrix[0].rear_name, "Road 11-28");
        assert_eq!(matrix[0].total_range, 374);
        assert_eq!(matrix[0].easiest_ratio, 1.214);
        assert_eq!(matrix[0].hardest_ratio, 4.545);

        let gravel = matrix
            .iter()
            .find(|m| m.front_name == "Gravel 1x" && m.rear_name == "Gravel 11-42")
            .unwrap();
        assert_eq!(gravel.total_range, 382);
    }
}
