//! Opponent roster generation.
//!
//! Each difficulty maps to a tier window around the player's tier. Opponents are
//! drawn uniformly from the catalog archetypes in that window, with replacement,
//! so a roster may contain the same archetype more than once.

use rand::Rng;

use ironclash_core::constants::{HARD_TIER_CAP, MAX_TIER, MEDIUM_TIER_CAP, MIN_TIER};
use ironclash_core::enums::Difficulty;
use ironclash_core::error::{IronclashError, Result};
use ironclash_core::vehicle::VehicleInstance;

use crate::catalog::VehicleCatalog;

/// A validated request for an opponent roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentRequest {
    pub player_tier: u32,
    pub difficulty: Difficulty,
    pub count: usize,
}

/// Inclusive tier range eligible for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierWindow {
    pub min: u32,
    pub max: u32,
}

impl OpponentRequest {
    pub fn new(player_tier: u32, difficulty: Difficulty, count: usize) -> Result<Self> {
        if !(MIN_TIER..=MAX_TIER).contains(&player_tier) {
            return Err(IronclashError::InvalidTier(player_tier as i64));
        }
        Ok(Self {
            player_tier,
            difficulty,
            count,
        })
    }

    /// Validate raw values coming from outside the core (menus, config files).
    pub fn parse(player_tier: i64, difficulty: &str, count: i64) -> Result<Self> {
        let tier =
            u32::try_from(player_tier).map_err(|_| IronclashError::InvalidTier(player_tier))?;
        let count =
            usize::try_from(count).map_err(|_| IronclashError::InvalidOpponentCount(count))?;
        let difficulty = difficulty.parse::<Difficulty>()?;
        Self::new(tier, difficulty, count)
    }

    pub fn tier_window(&self) -> TierWindow {
        tier_window(self.player_tier, self.difficulty)
    }
}

impl TierWindow {
    pub fn contains(&self, tier: u32) -> bool {
        (self.min..=self.max).contains(&tier)
    }
}

/// Tier window for a player tier under a difficulty.
///
/// easy: one tier below up to the player's tier. medium: up to one above, capped at 5.
/// hard: up to two above, capped at 6. A window may be empty (min > max) for high tiers.
pub fn tier_window(player_tier: u32, difficulty: Difficulty) -> TierWindow {
    match difficulty {
        Difficulty::Easy => TierWindow {
            min: player_tier.saturating_sub(1).max(MIN_TIER),
            max: player_tier,
        },
        Difficulty::Medium => TierWindow {
            min: player_tier,
            max: player_tier.saturating_add(1).min(MEDIUM_TIER_CAP),
        },
        Difficulty::Hard => TierWindow {
            min: player_tier,
            max: player_tier.saturating_add(2).min(HARD_TIER_CAP),
        },
    }
}

/// Draw `request.count` opponents uniformly, with replacement, from the tier window.
pub fn generate_opponents<R: Rng + ?Sized>(
    catalog: &VehicleCatalog,
    request: &OpponentRequest,
    rng: &mut R,
) -> Result<Vec<VehicleInstance>> {
    let window = request.tier_window();
    let pool: Vec<_> = catalog.in_tier_range(window.min, window.max).collect();
    if pool.is_empty() {
        return Err(IronclashError::EmptyPool {
            difficulty: request.difficulty,
            min_tier: window.min,
            max_tier: window.max,
        });
    }

    let roster: Vec<VehicleInstance> = (0..request.count)
        .map(|_| pool[rng.gen_range(0..pool.len())].instantiate())
        .collect();

    tracing::debug!(
        player_tier = request.player_tier,
        difficulty = %request.difficulty,
        min_tier = window.min,
        max_tier = window.max,
        pool = pool.len(),
        roster = ?roster.iter().map(|v| v.archetype_id.as_str()).collect::<Vec<_>>(),
        "Generated opponent roster"
    );

    Ok(roster)
}
