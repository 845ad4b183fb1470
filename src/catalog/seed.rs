//! Built-in component catalog.
//!
//! Used when no catalog file is configured, so the CLI is useful out of the box.

use crate::catalog::Catalog;
use crate::domain::{Component, ComponentKind, ToothCount};
use crate::teeth::TeethInput;

struct SeedComponent {
    id: &'static str,
    name: &'static str,
    kind: ComponentKind,
    teeth: &'static [ToothCount],
    comments: &'static str,
}

const SEED_SPEED: u32 = 11;

const SEED: [SeedComponent; 6] = [
    SeedComponent {
        id: "compact-road",
        name: "Compact Road",
        kind: ComponentKind::Chainring,
        teeth: &[50, 34],
        comments: "Standard compact road double",
    },
    SeedComponent {
        id: "standard-road",
        name: "Standard Road",
        kind: ComponentKind::Chainring,
        teeth: &[53, 39],
        comments: "Standard road double",
    },
    SeedComponent {
        id: "gravel-1x",
        name: "Gravel 1x",
        kind: ComponentKind::Chainring,
        teeth: &[40],
        comments: "Gravel single ring",
    },
    SeedComponent {
        id: "road-11-28",
        name: "Road 11-28",
        kind: ComponentKind::Cassette,
        teeth: &[11, 12, 13, 14, 15, 17, 19, 21, 23, 25, 28],
        comments: "Standard road cassette",
    },
    SeedComponent {
        id: "road-11-32",
        name: "Road 11-32",
        kind: ComponentKind::Cassette,
        teeth: &[11, 12, 13, 14, 16, 18, 20, 22, 25, 28, 32],
        comments: "Climbing road cassette",
    },
    SeedComponent {
        id: "gravel-11-42",
        name: "Gravel 11-42",
        kind: ComponentKind::Cassette,
        teeth: &[11, 13, 15, 17, 19, 21, 24, 28, 32, 36, 42],
        comments: "Wide range gravel cassette",
    },
];

/// The default chainrings and cassettes, with no saved configurations.
pub fn builtin_catalog() -> Catalog {
    let components = SEED
        .iter()
        .map(|seed| Component {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            kind: seed.kind,
            speed: Some(SEED_SPEED),
            teeth: TeethInput::from(seed.teeth),
            comments: Some(seed.comments.to_string()),
        })
        .collect();

    Catalog {
        components,
        configurations: Vec::new(),
        preferences: None,
    }
}
