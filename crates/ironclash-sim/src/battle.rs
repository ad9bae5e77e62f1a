//! The authoritative battle state.

use serde::{Deserialize, Serialize};

use ironclash_core::components::{Combatant, Projectile};
use ironclash_core::outcome::Outcome;
use ironclash_core::types::SimTime;

/// Everything needed to resume a battle. Mutated only by the simulator step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub time: SimTime,
    pub player: Combatant,
    /// Roster order matters: it breaks ties when a shell overlaps several opponents.
    pub opponents: Vec<Combatant>,
    /// Live shells, in the order they were fired.
    pub projectiles: Vec<Projectile>,
    pub outcome: Option<Outcome>,
}

impl BattleState {
    pub fn opponents_remaining(&self) -> usize {
        self.opponents.iter().filter(|o| o.is_alive()).count()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
