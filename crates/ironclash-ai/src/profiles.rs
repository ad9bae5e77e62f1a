//! Difficulty-specific behavioral profiles.
//!
//! Consolidates the tuning parameters the opponent FSM reads.

use ironclash_core::enums::Difficulty;

/// Behavioral profile for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorProfile {
    /// Bias toward attacking (0.0 - 1.0). Also the bar a wounded vehicle must clear to retreat.
    pub aggression: f64,
    /// Always attack when the player is closer than this (units).
    pub engage_range: f64,
    /// Retreat is only considered below this health ratio.
    pub retreat_health_ratio: f64,
    /// Attackers back off once closer than this (units).
    pub standoff_range: f64,
    /// Movement per step in each state (units).
    pub patrol_speed: f64,
    pub attack_speed: f64,
    pub attack_backoff: f64,
    pub retreat_speed: f64,
    /// Per-step chance of picking a new patrol heading.
    pub patrol_turn_chance: f64,
}

/// Get the behavioral profile for a given difficulty.
pub fn get_profile(difficulty: Difficulty) -> BehaviorProfile {
    use ironclash_core::constants::*;

    BehaviorProfile {
        aggression: difficulty.aggression(),
        engage_range: AI_ENGAGE_RANGE,
        retreat_health_ratio: AI_RETREAT_HEALTH_RATIO,
        standoff_range: AI_STANDOFF_RANGE,
        patrol_speed: PATROL_SPEED,
        attack_speed: ATTACK_SPEED,
        attack_backoff: ATTACK_BACKOFF,
        retreat_speed: RETREAT_SPEED,
        patrol_turn_chance: PATROL_TURN_CHANCE,
    }
}
