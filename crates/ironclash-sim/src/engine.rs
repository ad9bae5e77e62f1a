//! Battle simulator — the core of the game.
//!
//! `BattleSimulator` owns the battle state and the random source, applies one
//! step of input, runs all systems in order, and produces `BattleSnapshot`s.
//! Completely headless, enabling deterministic testing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ironclash_core::enums::Difficulty;
use ironclash_core::error::Result;
use ironclash_core::events::BattleEvent;
use ironclash_core::input::InputState;
use ironclash_core::outcome::Outcome;
use ironclash_core::state::BattleSnapshot;
use ironclash_core::vehicle::VehicleInstance;

use crate::battle::BattleState;
use crate::setup;
use crate::systems;

/// Configuration for starting a new battle.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and input = same battle.
    pub seed: u64,
    /// Opponent difficulty, fixed for the whole battle.
    pub difficulty: Difficulty,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::default(),
        }
    }
}

/// The battle simulator. Owns the battle state and all randomness.
pub struct BattleSimulator<R = ChaCha8Rng> {
    state: BattleState,
    rng: R,
    /// Events raised by the most recent step.
    events: Vec<BattleEvent>,
}

impl BattleSimulator<ChaCha8Rng> {
    /// Start a new battle between the player's vehicle and an opponent roster.
    pub fn new(
        config: SimConfig,
        player: VehicleInstance,
        opponents: Vec<VehicleInstance>,
    ) -> Result<Self> {
        let state = setup::setup_battle(player, opponents, config.difficulty)?;
        tracing::info!(
            seed = config.seed,
            difficulty = %config.difficulty,
            player = %state.player.vehicle.name,
            opponents = state.opponents.len(),
            "Battle started"
        );
        Ok(Self::with_rng(state, ChaCha8Rng::seed_from_u64(config.seed)))
    }
}

impl<R: Rng> BattleSimulator<R> {
    /// Resume (or start) a battle from an existing state with a caller-supplied random source.
    pub fn with_rng(state: BattleState, rng: R) -> Self {
        Self {
            state,
            rng,
            events: Vec::new(),
        }
    }

    /// Advance the battle by one step. Returns the outcome once the battle is over.
    ///
    /// A finished battle is frozen: further calls return the same outcome
    /// without advancing time.
    pub fn step(&mut self, input: &InputState) -> Option<Outcome> {
        self.events.clear();
        if let Some(outcome) = self.state.outcome {
            return Some(outcome);
        }

        self.state.time.advance();
        // 1. Player movement and firing
        systems::player::run(&mut self.state, input, &mut self.events);
        // 2. Opponent AI and firing
        systems::opponents::run(&mut self.state, &mut self.rng, &mut self.events);
        // 3. Projectile movement
        systems::movement::run(&mut self.state.projectiles);
        // 4. Collisions (bounds, hits)
        systems::collision::run(&mut self.state, &mut self.events);
        // 5. Termination
        systems::termination::run(&mut self.state, &mut self.events)
    }

    /// Advance one step and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> BattleSnapshot {
        self.step(input);
        self.snapshot()
    }

    /// Read-only view of the current state, including the last step's events.
    pub fn snapshot(&self) -> BattleSnapshot {
        systems::snapshot::build_snapshot(&self.state, self.events.clone())
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Mutable access for hosts that restore or script a battle.
    pub fn state_mut(&mut self) -> &mut BattleState {
        &mut self.state
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    /// Events raised by the most recent step.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Hand the state and random source back, e.g. to persist them.
    pub fn into_parts(self) -> (BattleState, R) {
        (self.state, self.rng)
    }
}
