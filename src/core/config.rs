//! Arena configuration
//!
//! The agent policies themselves are tuned through `constants`; this
//! config shapes the world the headless runner builds around them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Configuration for the headless arena runner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Map width in cells
    pub width: i32,
    /// Map height in cells
    pub height: i32,
    /// Turns to simulate before reporting
    pub turns: u64,
    /// Seed for world generation and hazard behavior
    pub seed: u64,
    /// Spawners placed per team at mirrored positions
    pub spawners_per_team: u32,
    /// Hazard nests scattered across the middle of the map
    pub nests: u32,
    /// Resource piles scattered across the map
    pub part_piles: u32,
    /// Resources granted to each pile
    pub parts_per_pile: u32,
    /// Resources each team starts with
    pub starting_parts: u32,
    /// Fraction of cells seeded with heavy rubble (0.0 - 1.0)
    pub rubble_cover: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 60,
            turns: 500,
            seed: 42,
            spawners_per_team: 2,
            nests: 3,
            part_piles: 12,
            parts_per_pile: 40,
            starting_parts: 120,
            rubble_cover: 0.08,
        }
    }
}

impl ArenaConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}
