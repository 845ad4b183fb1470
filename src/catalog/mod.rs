//! Component catalog: chainrings, cassettes, saved configurations and the
//! rider's preference window.
//!
//! The catalog is an in-memory value. Reading and writing it as JSON lives in
//! `io::catalog`; the built-in defaults live in `seed`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Component, ComponentKind, Configuration, PreferenceWindow, TeethSpec};
use crate::error::{AppError, TeethFormatError};
use crate::teeth::validate_teeth;

pub mod seed;

pub use seed::builtin_catalog;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub configurations: Vec<Configuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PreferenceWindow>,
}

impl Catalog {
    /// Look a component up by id, then by case-insensitive name.
    pub fn component(&self, key: &str) -> Option<&Component> {
        let key = key.trim();
        self.components
            .iter()
            .find(|c| c.id == key)
            .or_else(|| self.components.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
    }

    /// Like [`Catalog::component`], but requires the given kind.
    pub fn require_component(&self, key: &str, kind: ComponentKind) -> Result<&Component, AppError> {
        let component = self
            .component(key)
            .ok_or_else(|| AppError::new(3, format!("Unknown component '{key}'.")))?;
        if component.kind != kind {
            return Err(AppError::new(
                2,
                format!(
                    "Component '{}' is a {}, expected a {}.",
                    component.name,
                    component.kind.display_name(),
                    kind.display_name()
                ),
            ));
        }
        Ok(component)
    }

    pub fn components_of(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind == kind)
    }

    pub fn configuration(&self, id: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|c| c.id == id)
    }

    /// Configurations whose front or rear component no longer exists.
    pub fn orphaned_configurations(&self) -> Vec<&Configuration> {
        let ids: HashSet<&str> = self.components.iter().map(|c| c.id.as_str()).collect();
        self.configurations
            .iter()
            .filter(|cfg| {
                !ids.contains(cfg.front_component_id.as_str())
                    || !ids.contains(cfg.rear_component_id.as_str())
            })
            .collect()
    }

    /// Drop orphaned configurations; returns how many were removed.
    pub fn prune_orphans(&mut self) -> usize {
        let orphans: HashSet<String> = self
            .orphaned_configurations()
            .into_iter()
            .map(|cfg| cfg.id.clone())
            .collect();
        let before = self.configurations.len();
        self.configurations.retain(|cfg| !orphans.contains(&cfg.id));
        before - self.configurations.len()
    }

    /// Strictly validate every component and check ids are unique.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                return Err(AppError::new(
                    2,
                    format!("Duplicate component id '{}'.", component.id),
                ));
            }
            validated_teeth(component).map_err(|e| {
                AppError::new(2, format!("Component '{}': {e}", component.name))
            })?;
        }
        Ok(())
    }
}

/// Strictly parse a component's teeth.
///
/// Cassettes must have exactly `speed` cogs when a speed is declared;
/// chainring sets are not tied to the speed count.
pub fn validated_teeth(component: &Component) -> Result<TeethSpec, TeethFormatError> {
    let declared = match component.kind {
        ComponentKind::Cassette => component.speed,
        ComponentKind::Chainring => None,
    };
    validate_teeth(&component.teeth, declared)
}
