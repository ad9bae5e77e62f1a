//! Vehicle archetype registry.
//!
//! The standard catalog is built once per process and never mutated.
//! Instances handed out by [`VehicleCatalog::create_instance`] own a deep copy
//! of the archetype's stats.

use std::collections::HashSet;
use std::sync::OnceLock;

use ironclash_core::constants::{MAX_TIER, MIN_TIER};
use ironclash_core::enums::VehicleClass;
use ironclash_core::error::{IronclashError, Result};
use ironclash_core::vehicle::{VehicleArchetype, VehicleInstance, VehicleStats};

/// Ordered collection of archetypes, keyed by id.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    archetypes: Vec<VehicleArchetype>,
}

static STANDARD: OnceLock<VehicleCatalog> = OnceLock::new();

impl VehicleCatalog {
    /// The built-in catalog shipped with the game.
    pub fn standard() -> &'static VehicleCatalog {
        STANDARD.get_or_init(|| VehicleCatalog {
            archetypes: standard_archetypes(),
        })
    }

    /// Build a custom catalog. Ids must be unique and tiers within 1..=10.
    pub fn from_archetypes(archetypes: Vec<VehicleArchetype>) -> Result<Self> {
        let mut seen = HashSet::new();
        for archetype in &archetypes {
            if !(MIN_TIER..=MAX_TIER).contains(&archetype.tier) {
                return Err(IronclashError::InvalidTier(archetype.tier as i64));
            }
            if !seen.insert(archetype.id.as_str()) {
                return Err(IronclashError::DuplicateArchetype(archetype.id.clone()));
            }
        }
        Ok(Self { archetypes })
    }

    /// Look up an archetype by id.
    pub fn archetype(&self, id: &str) -> Result<&VehicleArchetype> {
        self.archetypes
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| IronclashError::UnknownArchetype(id.to_string()))
    }

    /// Create an independent vehicle from an archetype id.
    pub fn create_instance(&self, id: &str) -> Result<VehicleInstance> {
        self.archetype(id).map(VehicleArchetype::instantiate)
    }

    /// Every archetype, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, VehicleArchetype> {
        self.archetypes.iter()
    }

    /// Archetypes of one nation. The iterator can be cloned to restart it.
    pub fn by_nation<'a>(
        &'a self,
        nation: &'a str,
    ) -> impl Iterator<Item = &'a VehicleArchetype> + Clone + 'a {
        self.archetypes.iter().filter(move |a| a.nation == nation)
    }

    /// Archetypes of one tier. The iterator can be cloned to restart it.
    pub fn by_tier(&self, tier: u32) -> impl Iterator<Item = &VehicleArchetype> + Clone + '_ {
        self.archetypes.iter().filter(move |a| a.tier == tier)
    }

    /// Archetypes whose tier lies in `min..=max`.
    pub fn in_tier_range(
        &self,
        min: u32,
        max: u32,
    ) -> impl Iterator<Item = &VehicleArchetype> + Clone + '_ {
        self.archetypes
            .iter()
            .filter(move |a| (min..=max).contains(&a.tier))
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

fn light(id: &str, name: &str, nation: &str, tier: u32, stats: [u32; 5]) -> VehicleArchetype {
    let [max_health, damage, penetration, speed, reload_steps] = stats;
    VehicleArchetype {
        id: id.to_string(),
        name: name.to_string(),
        nation: nation.to_string(),
        tier,
        class: VehicleClass::Light,
        stats: VehicleStats {
            max_health,
            damage,
            penetration,
            speed,
            reload_steps,
        },
    }
}

/// Stats are [hp, damage, penetration, speed, reload steps].
fn standard_archetypes() -> Vec<VehicleArchetype> {
    vec![
        // USA
        light("t1_cunningham", "T1 Cunningham", "usa", 1, [120, 15, 38, 32, 90]),
        light("m2_light", "M2 Light", "usa", 2, [150, 20, 42, 36, 85]),
        // Germany
        light("pz_1c", "Pz.Kpfw. I C", "germany", 3, [180, 18, 45, 40, 70]),
        // USSR
        light("ms_1", "MS-1", "ussr", 1, [110, 17, 36, 28, 95]),
        light("bt_2", "BT-2", "ussr", 2, [140, 22, 40, 42, 80]),
    ]
}
