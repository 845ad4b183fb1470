//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads settings and initializes logging
//! - resolves the component catalog
//! - runs calculations and prints reports
//! - writes optional exports

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::catalog::{Catalog, builtin_catalog};
use crate::cli::{
    CalcArgs, CatalogArgs, Command, CompareArgs, ComponentsArgs, ShowArgs, TeethArgs, ValidateArgs,
    WindowArgs,
};
use crate::domain::{ComponentKind, PreferenceWindow};
use crate::error::AppError;
use crate::settings::Settings;
use crate::teeth::{TeethInput, format_teeth, parse_str, validate_teeth};

pub mod pipeline;

/// Entry point for the `gears` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    let settings = if cli.command.reads_settings() {
        Settings::from_env()?
    } else {
        Settings::logging_from_env()
    };
    init_logging(cli.verbose, settings.log_filter.as_deref());
    debug!(?settings, "loaded settings");

    match cli.command {
        Command::Calc(args) => handle_calc(args, &settings),
        Command::Range(args) => handle_range(args),
        Command::Compare(args) => handle_compare(args, &settings),
        Command::Show(args) => handle_show(args, &settings),
        Command::Components(args) => handle_components(args, &settings),
        Command::Summary(args) => handle_summary(args, &settings),
        Command::Matrix(args) => handle_matrix(args, &settings),
        Command::Validate(args) => handle_validate(args),
    }
}

/// Install the stderr subscriber.
///
/// Filter precedence: `RUST_LOG`, then `-v` (debug), then `GEARS_LOG`, then `warn`.
fn init_logging(verbose: bool, configured: Option<&str>) {
    let fallback = if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_calc(args: CalcArgs, settings: &Settings) -> Result<(), AppError> {
    let window = resolve_window(&args.window, settings.window)?;
    let calc = pipeline::calculate(
        &TeethInput::from(args.teeth.front.as_str()),
        &TeethInput::from(args.teeth.rear.as_str()),
        window.as_ref(),
    )?;

    println!("{}", crate::report::format_calculation(&calc));

    if let Some(path) = &args.export_json {
        crate::io::write_results_json(path, &calc)?;
        info!(path = %path.display(), "wrote JSON export");
    }
    if let Some(path) = &args.export_csv {
        crate::io::write_results_csv(path, &calc)?;
        info!(path = %path.display(), "wrote CSV export");
    }

    Ok(())
}

fn handle_range(args: TeethArgs) -> Result<(), AppError> {
    let front = parse_str(&args.front)?;
    let rear = parse_str(&args.rear)?;
    println!("{}%", crate::ratio::total_range_pct(&front, &rear));
    Ok(())
}

fn handle_compare(args: CompareArgs, settings: &Settings) -> Result<(), AppError> {
    let catalog = load_catalog(&args.catalog, settings)?;
    let window = resolve_window(&args.window, catalog_window(&catalog, settings))?;

    let front = catalog.require_component(&args.front, ComponentKind::Chainring)?;
    let rear = catalog.require_component(&args.rear, ComponentKind::Cassette)?;
    let calc = pipeline::calculate_from_components(front, rear, window.as_ref())?;

    println!("{} + {}", front.option_label(), rear.option_label());
    println!("{}", crate::report::format_calculation(&calc));
    Ok(())
}

fn handle_show(args: ShowArgs, settings: &Settings) -> Result<(), AppError> {
    let catalog = load_catalog(&args.catalog, settings)?;
    let window = resolve_window(&args.window, catalog_window(&catalog, settings))?;
    let details = pipeline::configuration_details(&catalog, &args.id, window.as_ref())?;

    println!("{}", details.configuration.name);
    println!("{} + {}", details.front.option_label(), details.rear.option_label());
    if let Some(comments) = &details.configuration.comments {
        println!("{comments}");
    }
    println!("{}", crate::report::format_calculation(&details.calculation));
    Ok(())
}

fn handle_components(args: ComponentsArgs, settings: &Settings) -> Result<(), AppError> {
    let catalog = load_catalog(&args.catalog, settings)?;
    let components = catalog
        .components
        .iter()
        .filter(|c| args.kind.is_none_or(|kind| c.kind == kind));
    print!("{}", crate::report::format_components(components));
    Ok(())
}

fn handle_summary(args: CatalogArgs, settings: &Settings) -> Result<(), AppError> {
    let catalog = load_catalog(&args, settings)?;
    let rows = pipeline::summarize_configurations(&catalog);
    print!("{}", crate::report::format_summary(&rows));
    Ok(())
}

fn handle_matrix(args: CatalogArgs, settings: &Settings) -> Result<(), AppError> {
    let catalog = load_catalog(&args, settings)?;
    let entries = pipeline::compare_matrix(&catalog);
    print!("{}", crate::report::format_matrix(&entries));
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<(), AppError> {
    let teeth = validate_teeth(&TeethInput::from(args.teeth.as_str()), args.speed)?;
    println!("ok: {} ({} teeth)", format_teeth(&teeth), teeth.len());
    Ok(())
}

/// Load the catalog from `--catalog`, then `GEARS_CATALOG`, then the built-in set.
///
/// Catalog files are strictly validated. Orphaned configurations are dropped
/// with a warning.
fn load_catalog(args: &CatalogArgs, settings: &Settings) -> Result<Catalog, AppError> {
    let path = args.catalog.as_ref().or(settings.catalog_path.as_ref());
    let mut catalog = match path {
        Some(path) => {
            debug!(path = %path.display(), "reading catalog");
            let catalog = crate::io::read_catalog_json(path)?;
            catalog.validate()?;
            catalog
        }
        None => builtin_catalog(),
    };

    let pruned = catalog.prune_orphans();
    if pruned > 0 {
        tracing::warn!(pruned, "dropped configurations referencing missing components");
    }
    Ok(catalog)
}

/// A catalog's stored preferences take precedence over env defaults.
fn catalog_window(catalog: &Catalog, settings: &Settings) -> PreferenceWindow {
    catalog.preferences.unwrap_or(settings.window)
}

/// Combine CLI overrides with the configured window.
fn resolve_window(args: &WindowArgs, configured: PreferenceWindow) -> Result<Option<PreferenceWindow>, AppError> {
    if args.no_classify {
        return Ok(None);
    }
    let window = PreferenceWindow::new(
        args.min_ratio.unwrap_or(configured.min_ratio),
        args.max_ratio.unwrap_or(configured.max_ratio),
    );
    if !(window.min_ratio.is_finite() && window.max_ratio.is_finite()) {
        return Err(AppError::new(2, "Ratio window bounds must be finite numbers."));
    }
    Ok(Some(window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_overrides() {
        let configured = PreferenceWindow::new(0.8, 3.2);

        let args = WindowArgs::default();
        assert_eq!(resolve_window(&args, configured).unwrap(), Some(configured));

        let args = WindowArgs {
            min_ratio: Some(1.0),
            ..WindowArgs::default()
        };
        assert_eq!(
            resolve_window(&args, configured).unwrap(),
            Some(PreferenceWindow::new(1.0, 3.2))
        );

        let args = WindowArgs {
            no_classify: true,
            ..WindowArgs::default()
        };
        assert_eq!(resolve_window(&args, configured).unwrap(), None);

        let args = WindowArgs {
            max_ratio: Some(f64::INFINITY),
            ..WindowArgs::default()
        };
        assert!(resolve_window(&args, configured).is_err());
    }

    #[test]
    fn catalog_preferences_win_over_settings() {
        let settings = Settings::default();
        let mut catalog = builtin_catalog();
        assert_eq!(catalog_window(&catalog, &settings), settings.window);

        catalog.preferences = Some(PreferenceWindow::new(1.1, 2.9));
        assert_eq!(catalog_window(&catalog, &settings), PreferenceWindow::new(1.1, 2.9));
    }

    #[test]
    fn builtin_catalog_when_no_path() {
        let catalog = load_catalog(&CatalogArgs::default(), &Settings::default()).unwrap();
        assert_eq!(catalog.components.len(), 6);
    }

    #[test]
    fn catalog_files_are_validated_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut catalog = builtin_catalog();
        catalog.components[3].teeth = TeethInput::from("11,12,13");
        crate::io::write_catalog_json(&path, &catalog).unwrap();

        let args = CatalogArgs {
            catalog: Some(path.clone()),
        };
        let err = load_catalog(&args, &Settings::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Road 11-28"));

        crate::io::write_catalog_json(&path, &builtin_catalog()).unwrap();
        assert!(load_catalog(&args, &Settings::default()).is_ok());
    }
}
