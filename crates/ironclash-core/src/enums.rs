//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{AGGRESSION_EASY, AGGRESSION_HARD, AGGRESSION_MEDIUM};
use crate::error::IronclashError;

/// Vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Light,
    Medium,
    Heavy,
    /// Tank destroyer.
    #[serde(rename = "td")]
    TankDestroyer,
    /// Self-propelled gun.
    #[serde(rename = "spg")]
    Artillery,
}

/// Which team a combatant or projectile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

/// Opponent difficulty tier, chosen before a battle starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Opponent behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiState {
    /// Wander inside the opponent zone.
    #[default]
    Patrol,
    /// Close in on the player, holding a standoff distance.
    Attack,
    /// Back away from the player.
    Retreat,
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Defeat,
    Victory,
    Timeout,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Probability weight that biases opponents toward attacking.
    pub fn aggression(self) -> f64 {
        match self {
            Difficulty::Easy => AGGRESSION_EASY,
            Difficulty::Medium => AGGRESSION_MEDIUM,
            Difficulty::Hard => AGGRESSION_HARD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = IronclashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(IronclashError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for AiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AiState::Patrol => "patrol",
            AiState::Attack => "attack",
            AiState::Retreat => "retreat",
        };
        f.write_str(label)
    }
}
