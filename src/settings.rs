//! Environment-driven settings.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory:
//!
//! - `GEARS_MIN_RATIO` / `GEARS_MAX_RATIO`: preference window bounds
//! - `GEARS_CATALOG`: path to a catalog JSON file
//! - `GEARS_LOG`: default log filter when `RUST_LOG` is unset
//!
//! CLI flags override anything read here.

use std::path::PathBuf;

use crate::domain::{DEFAULT_MAX_RATIO, DEFAULT_MIN_RATIO, PreferenceWindow};
use crate::error::AppError;

pub const ENV_MIN_RATIO: &str = "GEARS_MIN_RATIO";
pub const ENV_MAX_RATIO: &str = "GEARS_MAX_RATIO";
pub const ENV_CATALOG: &str = "GEARS_CATALOG";
pub const ENV_LOG: &str = "GEARS_LOG";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub window: PreferenceWindow,
    pub catalog_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Only the log filter; used by commands that never read the window or
    /// catalog, so a malformed ratio variable cannot fail them.
    pub fn logging_from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::logging_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn logging_from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_filter: lookup(ENV_LOG).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()),
            ..Self::default()
        }
    }

    /// Build settings from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let min_ratio = match non_empty(ENV_MIN_RATIO) {
            Some(raw) => parse_ratio(ENV_MIN_RATIO, &raw)?,
            None => DEFAULT_MIN_RATIO,
        };
        let max_ratio = match non_empty(ENV_MAX_RATIO) {
            Some(raw) => parse_ratio(ENV_MAX_RATIO, &raw)?,
            None => DEFAULT_MAX_RATIO,
        };

        Ok(Self {
            window: PreferenceWindow::new(min_ratio, max_ratio),
            catalog_path: non_empty(ENV_CATALOG).map(PathBuf::from),
            log_filter: non_empty(ENV_LOG),
        })
    }
}

fn parse_ratio(key: &str, raw: &str) -> Result<f64, AppError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(AppError::new(
            2,
            format!("Invalid {key} '{raw}': expected a non-negative number."),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_values() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_MIN_RATIO, "1.0"),
            (ENV_MAX_RATIO, " 3.5 "),
            (ENV_CATALOG, "parts.json"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.window, PreferenceWindow::new(1.0, 3.5));
        assert_eq!(settings.catalog_path, Some(PathBuf::from("parts.json")));
        assert_eq!(settings.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_values_fall_back() {
        let settings = Settings::from_lookup(lookup(&[(ENV_MIN_RATIO, "  "), (ENV_CATALOG, "")])).unwrap();
        assert_eq!(settings.window.min_ratio, DEFAULT_MIN_RATIO);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn rejects_malformed_ratio() {
        let err = Settings::from_lookup(lookup(&[(ENV_MAX_RATIO, "lots")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains(ENV_MAX_RATIO));
        assert!(Settings::from_lookup(lookup(&[(ENV_MIN_RATIO, "NaN")])).is_err());
        assert!(Settings::from_lookup(lookup(&[(ENV_MIN_RATIO, "-1")])).is_err());
    }

    #[test]
    fn logging_only_ignores_ratio_variables() {
        let settings = Settings::logging_from_lookup(lookup(&[
            (ENV_MIN_RATIO, "lots"),
            (ENV_LOG, " info "),
        ]));
        assert_eq!(settings.log_filter.as_deref(), Some("info"));
        assert_eq!(settings.window, PreferenceWindow::default());
    }
}
