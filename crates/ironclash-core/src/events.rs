//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{AiState, OutcomeKind, Side};
use crate::types::Position;

/// Something noteworthy that happened during a step.
///
/// `opponent` fields are roster indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A combatant fired a shell.
    ShotFired { side: Side, position: Position },
    /// A shell struck the player (`opponent` is None) or an opponent.
    Hit {
        opponent: Option<usize>,
        damage: u32,
        remaining_health: u32,
    },
    /// A combatant's health reached zero.
    Destroyed { opponent: Option<usize> },
    /// An opponent's decision tick changed its behavior.
    AiStateChanged {
        opponent: usize,
        from: AiState,
        to: AiState,
    },
    /// The battle reached a terminal outcome.
    BattleEnded { kind: OutcomeKind },
}
