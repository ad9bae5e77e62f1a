//! Scripted driver for headless battles.
//!
//! Lines up vertically with the nearest living opponent and keeps the trigger
//! held, so the gun fires whenever it is loaded.

use ironclash_core::constants::PLAYER_SPEED;
use ironclash_core::input::{InputSource, InputState};
use ironclash_core::state::BattleSnapshot;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    player_y: f64,
    /// Row of the opponent being tracked. `None` until the first snapshot or after the last kill.
    target_y: Option<f64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_y(&self) -> Option<f64> {
        self.target_y
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self) -> InputState {
        let mut input = InputState {
            fire: true,
            ..InputState::IDLE
        };
        if let Some(target) = self.target_y {
            // Within one step of the row counts as lined up.
            input.up = target < self.player_y - PLAYER_SPEED;
            input.down = target > self.player_y + PLAYER_SPEED;
        }
        input
    }

    fn observe(&mut self, snapshot: &BattleSnapshot) {
        let player = snapshot.player.position;
        self.player_y = player.y;
        self.target_y = snapshot
            .opponents
            .iter()
            .filter(|o| o.is_alive())
            .min_by(|a, b| {
                a.position
                    .distance_squared(player)
                    .total_cmp(&b.position.distance_squared(player))
            })
            .map(|o| o.position.y);
    }
}
