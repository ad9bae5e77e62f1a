//! Vehicle definitions: immutable catalog archetypes and per-battle instances.

use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;
use crate::enums::VehicleClass;

/// Base combat statistics of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStats {
    /// Hit points at full health.
    pub max_health: u32,
    /// Damage dealt per shell.
    pub damage: u32,
    pub penetration: u32,
    pub speed: u32,
    /// Steps between shots.
    pub reload_steps: u32,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleArchetype {
    pub id: String,
    pub name: String,
    pub nation: String,
    pub tier: u32,
    pub class: VehicleClass,
    pub stats: VehicleStats,
}

/// A vehicle owned by a player or fielded as an opponent.
///
/// Carries its own copy of the stats so upgrades never leak back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInstance {
    pub archetype_id: String,
    pub name: String,
    pub nation: String,
    pub tier: u32,
    pub class: VehicleClass,
    pub stats: VehicleStats,
}

impl VehicleStats {
    /// Damage per second at the nominal step rate.
    pub fn dps(&self) -> f64 {
        if self.reload_steps == 0 {
            return f64::INFINITY;
        }
        self.damage as f64 / (self.reload_steps as f64 / TICK_RATE as f64)
    }
}

impl VehicleArchetype {
    /// Build an independent instance with a deep copy of the base stats.
    pub fn instantiate(&self) -> VehicleInstance {
        VehicleInstance {
            archetype_id: self.id.clone(),
            name: self.name.clone(),
            nation: self.nation.clone(),
            tier: self.tier,
            class: self.class,
            stats: self.stats.clone(),
        }
    }
}
