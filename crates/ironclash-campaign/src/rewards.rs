use serde::{Deserialize, Serialize};

use ironclash_core::outcome::Outcome;

/// Amounts added to the player's stored experience and credits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDelta {
    pub experience: u32,
    pub credits: u32,
}

/// Reward for a finished battle. Pure: reads the outcome and nothing else.
pub fn reward_for(outcome: &Outcome) -> RewardDelta {
    RewardDelta {
        experience: outcome.experience,
        credits: outcome.credits,
    }
}

impl RewardDelta {
    /// Add both amounts onto stored balances, saturating at `u32::MAX`.
    pub fn apply(&self, experience: &mut u32, credits: &mut u32) {
        *experience = experience.saturating_add(self.experience);
        *credits = credits.saturating_add(self.credits);
    }
}
