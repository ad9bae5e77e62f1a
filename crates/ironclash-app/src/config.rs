//! Host configuration, loaded from an optional JSON file.
//!
//! Every field has a default, so a file only needs the values it changes.
//! Command-line flags are applied on top by the binary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ironclash_core::constants::{DEFAULT_OPPONENT_COUNT, TICK_RATE};
use ironclash_core::enums::Difficulty;
use ironclash_core::error::{IronclashError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seeds both roster generation and the battle.
    pub seed: u64,
    /// Difficulty label, validated when the roster is requested.
    pub difficulty: String,
    /// Signed so that a negative count reaches validation instead of failing to parse.
    pub opponents: i64,
    /// Archetype id to field. Defaults to the progression's selected vehicle.
    pub vehicle: Option<String>,
    /// Pace steps to wall-clock time instead of running flat out.
    pub realtime: bool,
    /// Stop after this many frames even if the battle is still running.
    pub max_frames: Option<u64>,
    /// Log a status line every this many steps. 0 disables it.
    pub log_interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::default().label().to_string(),
            opponents: DEFAULT_OPPONENT_COUNT as i64,
            vehicle: None,
            realtime: false,
            max_frames: None,
            log_interval: TICK_RATE as u64,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            IronclashError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
            .map_err(|e| IronclashError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| IronclashError::Config(format!("Failed to parse config: {e}")))
    }
}
