//! Battle snapshot — the read-only view handed to the render sink after each step.

use serde::{Deserialize, Serialize};

use crate::enums::{AiState, Side};
use crate::events::BattleEvent;
use crate::outcome::Outcome;
use crate::types::{Position, SimTime, Velocity};

/// Complete visible battle state after a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub player: CombatantView,
    pub opponents: Vec<CombatantView>,
    pub projectiles: Vec<ProjectileView>,
    /// Opponents with health above zero.
    pub opponents_remaining: usize,
    pub outcome: Option<Outcome>,
    /// Events raised during the step that produced this snapshot.
    pub events: Vec<BattleEvent>,
}

/// A combatant as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub side: Side,
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
    pub reload: u32,
    /// Behavior state, opponents only.
    pub ai_state: Option<AiState>,
}

/// A shell as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub owner: Side,
}

/// Receives a snapshot after every step. How (or whether) it draws is up to the sink.
pub trait RenderSink {
    fn present(&mut self, snapshot: &BattleSnapshot);
}

impl CombatantView {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
