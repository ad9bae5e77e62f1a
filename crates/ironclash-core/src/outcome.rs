//! Terminal battle outcomes and the rewards they carry.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::OutcomeKind;

/// The result of a finished battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub victory: bool,
    pub experience: u32,
    pub credits: u32,
    /// Elapsed step at which the battle ended.
    pub step: u64,
}

impl Outcome {
    /// The player's vehicle was destroyed.
    pub fn defeat(step: u64) -> Self {
        Self {
            kind: OutcomeKind::Defeat,
            victory: false,
            experience: DEFEAT_XP,
            credits: DEFEAT_CREDITS,
            step,
        }
    }

    /// Every opponent was destroyed. Quick wins earn bonus experience.
    pub fn victory(step: u64) -> Self {
        let multiplier = if step < FAST_VICTORY_STEPS {
            FAST_VICTORY_MULTIPLIER
        } else {
            1.0
        };
        Self {
            kind: OutcomeKind::Victory,
            victory: true,
            experience: (VICTORY_XP as f64 * multiplier).round() as u32,
            credits: VICTORY_CREDITS,
            step,
        }
    }

    /// Time ran out with both sides still standing.
    pub fn timeout(step: u64) -> Self {
        Self {
            kind: OutcomeKind::Timeout,
            victory: false,
            experience: TIMEOUT_XP,
            credits: TIMEOUT_CREDITS,
            step,
        }
    }
}
