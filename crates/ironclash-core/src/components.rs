//! Battle-transient entities: combatants, their AI memory, and projectiles.
//!
//! These are plain data. Behavior lives in the ai and sim crates.

use serde::{Deserialize, Serialize};

use crate::enums::{AiState, Difficulty, Side};
use crate::types::{Position, Velocity};
use crate::vehicle::VehicleInstance;

/// Per-opponent decision memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEngine {
    pub difficulty: Difficulty,
    pub state: AiState,
    /// Elapsed step at which the last decision tick ran.
    pub last_decision_step: u64,
    /// Patrol heading in radians.
    pub heading: f64,
}

/// A vehicle fielded in a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub vehicle: VehicleInstance,
    pub side: Side,
    pub position: Position,
    /// Current hit points, always within 0..=max_health.
    pub health: u32,
    /// Steps remaining until the gun is loaded.
    pub reload: u32,
    /// Present for opponents only.
    pub ai: Option<DecisionEngine>,
}

/// A shell in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Position,
    pub velocity: Velocity,
    pub damage: u32,
    pub owner: Side,
}

impl DecisionEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            state: AiState::default(),
            last_decision_step: 0,
            heading: 0.0,
        }
    }
}

impl Combatant {
    /// The human-controlled combatant, at full health with a loaded gun.
    pub fn player(vehicle: VehicleInstance, position: Position) -> Self {
        Self {
            health: vehicle.stats.max_health,
            vehicle,
            side: Side::Player,
            position,
            reload: 0,
            ai: None,
        }
    }

    /// A computer-controlled combatant with a fresh decision engine.
    pub fn opponent(vehicle: VehicleInstance, position: Position, difficulty: Difficulty) -> Self {
        Self {
            health: vehicle.stats.max_health,
            vehicle,
            side: Side::Opponent,
            position,
            reload: 0,
            ai: Some(DecisionEngine::new(difficulty)),
        }
    }

    pub fn max_health(&self) -> u32 {
        self.vehicle.stats.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Current health over max health, 0.0 for a vehicle with no hit points.
    pub fn health_ratio(&self) -> f64 {
        match self.max_health() {
            0 => 0.0,
            max => self.health as f64 / max as f64,
        }
    }

    /// Subtract damage, flooring health at zero. Returns true if this killed the combatant.
    pub fn apply_damage(&mut self, damage: u32) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(damage);
        was_alive && !self.is_alive()
    }

    /// Set health directly, clamped to 0..=max_health.
    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health());
    }
}
