//! The player's persistent record: rewards earned and vehicles unlocked.

use serde::{Deserialize, Serialize};

use ironclash_catalog::VehicleCatalog;
use ironclash_core::constants::MIN_TIER;
use ironclash_core::error::{IronclashError, Result};
use ironclash_core::outcome::Outcome;
use ironclash_core::vehicle::VehicleInstance;

use crate::rewards::reward_for;

/// What a battle needs from the progression system, and all it may change.
pub trait ProgressionStore {
    /// Tier of the vehicle the player will take into the next battle.
    fn current_tier(&self) -> u32;
    /// Add the rewards of a finished battle.
    fn apply_reward(&mut self, outcome: &Outcome);
}

/// An unlocked vehicle. The tier is captured from the catalog at unlock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageSlot {
    pub id: String,
    pub tier: u32,
}

/// In-memory progression for a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgression {
    pub name: String,
    pub experience: u32,
    pub credits: u32,
    /// Unlocked vehicles, in unlock order.
    garage: Vec<GarageSlot>,
    selected: GarageSlot,
}

impl Default for PlayerProgression {
    fn default() -> Self {
        // Both starter vehicles are tier 1 in the standard catalog.
        let garage = vec![
            GarageSlot {
                id: "t1_cunningham".to_string(),
                tier: MIN_TIER,
            },
            GarageSlot {
                id: "ms_1".to_string(),
                tier: MIN_TIER,
            },
        ];
        Self {
            name: "Commander".to_string(),
            experience: 0,
            credits: 1000,
            selected: garage[0].clone(),
            garage,
        }
    }
}

impl PlayerProgression {
    pub fn garage(&self) -> &[GarageSlot] {
        &self.garage
    }

    pub fn owns(&self, id: &str) -> bool {
        self.garage.iter().any(|slot| slot.id == id)
    }

    pub fn selected_id(&self) -> &str {
        &self.selected.id
    }

    /// Choose the vehicle for the next battle. It must already be in the garage.
    pub fn select_vehicle(&mut self, id: &str) -> Result<()> {
        let slot = self
            .garage
            .iter()
            .find(|slot| slot.id == id)
            .ok_or_else(|| IronclashError::UnknownArchetype(id.to_string()))?;
        self.selected = slot.clone();
        Ok(())
    }

    /// Add a catalog archetype to the garage. Unlocking twice is a no-op.
    pub fn unlock(&mut self, catalog: &VehicleCatalog, id: &str) -> Result<()> {
        let archetype = catalog.archetype(id)?;
        if !self.owns(id) {
            tracing::info!(vehicle = %archetype.name, tier = archetype.tier, "Vehicle unlocked");
            self.garage.push(GarageSlot {
                id: archetype.id.clone(),
                tier: archetype.tier,
            });
        }
        Ok(())
    }

    /// A fresh instance of the selected vehicle.
    pub fn selected_vehicle(&self, catalog: &VehicleCatalog) -> Result<VehicleInstance> {
        catalog.create_instance(&self.selected.id)
    }
}

impl ProgressionStore for PlayerProgression {
    fn current_tier(&self) -> u32 {
        self.selected.tier
    }

    fn apply_reward(&mut self, outcome: &Outcome) {
        let delta = reward_for(outcome);
        delta.apply(&mut self.experience, &mut self.credits);
        tracing::info!(
            player = %self.name,
            kind = ?outcome.kind,
            experience = delta.experience,
            credits = delta.credits,
            total_experience = self.experience,
            total_credits = self.credits,
            "Reward applied"
        );
    }
}
