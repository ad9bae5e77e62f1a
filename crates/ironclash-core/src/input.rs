//! Player input sampled once per step.
//!
//! Only the held state matters: there is no buffering or queueing of presses.

use serde::{Deserialize, Serialize};

use crate::constants::PLAYER_SPEED;
use crate::state::BattleSnapshot;
use crate::types::Velocity;

/// Held state of the four directional signals and the fire signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Something the host can poll for the current input.
pub trait InputSource {
    fn sample(&mut self) -> InputState;

    /// Called with each snapshot after the step. Scripted sources use it to react to the battle.
    fn observe(&mut self, _snapshot: &BattleSnapshot) {}
}

impl InputState {
    pub const IDLE: InputState = InputState {
        up: false,
        down: false,
        left: false,
        right: false,
        fire: false,
    };

    /// Displacement for one step. Axes are independent, so diagonals move on both.
    pub fn movement(&self) -> Velocity {
        let mut delta = Velocity::ZERO;
        if self.up {
            delta.y -= PLAYER_SPEED;
        }
        if self.down {
            delta.y += PLAYER_SPEED;
        }
        if self.left {
            delta.x -= PLAYER_SPEED;
        }
        if self.right {
            delta.x += PLAYER_SPEED;
        }
        delta
    }
}

/// Replays the same input every step.
impl InputSource for InputState {
    fn sample(&mut self) -> InputState {
        *self
    }
}
