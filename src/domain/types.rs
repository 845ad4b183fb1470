//! Shared domain types.
//!
//! These types are plain values: the engine builds them fresh on every call and
//! hands them back to the caller. They are serializable so results can be
//! exported to JSON and catalog files can be read back.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::teeth::TeethInput;

/// Teeth on a chainring, cog or sprocket.
pub type ToothCount = u32;

/// Normalized, ordered tooth counts for one component.
pub type TeethSpec = Vec<ToothCount>;

/// One [`GearTable`] per front tooth, in input front order.
pub type EngineResult = Vec<GearTable>;

/// Default lower bound of the comfortable ratio window.
pub const DEFAULT_MIN_RATIO: f64 = 0.8;

/// Default upper bound of the comfortable ratio window.
pub const DEFAULT_MAX_RATIO: f64 = 3.2;

/// The rider's comfortable ratio window used for classification.
///
/// `min_ratio < max_ratio` is expected but not enforced; a collapsed or
/// inverted window simply removes the warning band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceWindow {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl PreferenceWindow {
    pub fn new(min_ratio: f64, max_ratio: f64) -> Self {
        Self {
            min_ratio,
            max_ratio,
        }
    }

    pub fn span(&self) -> f64 {
        self.max_ratio - self.min_ratio
    }
}

impl Default for PreferenceWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RATIO, DEFAULT_MAX_RATIO)
    }
}

/// Quality label for a single gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearStatus {
    /// No classification was requested.
    Normal,
    Optimal,
    /// Inside the window but within 10% of its span from an edge.
    Warning,
    /// Outside the window (edges included).
    Poor,
}

impl GearStatus {
    pub fn label(self) -> &'static str {
        match self {
            GearStatus::Normal => "normal",
            GearStatus::Optimal => "optimal",
            GearStatus::Warning => "warning",
            GearStatus::Poor => "poor",
        }
    }
}

/// One rear cog combined with one front tooth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearEntry {
    pub rear_tooth: ToothCount,
    /// `front / rear`, rounded to 3 decimals.
    pub ratio: f64,
    /// 1-based position in the descending-rear sequence.
    pub gear_num: usize,
    /// Percent change from the previous gear's ratio, 1 decimal.
    /// `None` for the first gear.
    pub change_pct: Option<f64>,
    /// `None` when no preference window was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GearStatus>,
}

impl GearEntry {
    /// Status for display: unclassified gears read as `normal`.
    pub fn display_status(&self) -> GearStatus {
        self.status.unwrap_or(GearStatus::Normal)
    }
}

/// All gears for one front tooth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearTable {
    pub front_tooth: ToothCount,
    /// Range of this front across every rear, as an integer percentage.
    pub total_range: u32,
    pub gears: Vec<GearEntry>,
}

/// A complete calculation: normalized inputs plus one table per front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub front_teeth: TeethSpec,
    pub rear_teeth: TeethSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<PreferenceWindow>,
    /// Range across every front and rear combined.
    pub total_range: u32,
    pub tables: EngineResult,
}

/// Which side of the drivetrain a component sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ComponentKind {
    Chainring,
    Cassette,
}

impl ComponentKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Chainring => "Chainring",
            ComponentKind::Cassette => "Cassette",
        }
    }
}

/// A chainring set or cassette as stored in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Drivetrain speed count (e.g. `11` for 11-speed).
    #[serde(default)]
    pub speed: Option<u32>,
    /// Tooth counts in any shape the teeth parser accepts.
    pub teeth: TeethInput,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Component {
    /// Label used in component pickers: `"Road 11-28 (11s)"`.
    pub fn option_label(&self) -> String {
        match self.speed {
            Some(speed) => format!("{} ({speed}s)", self.name),
            None => self.name.clone(),
        }
    }
}

/// A saved front/rear pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: String,
    pub name: String,
    pub front_component_id: String,
    pub rear_component_id: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
