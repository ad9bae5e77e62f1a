//! One headless battle: pick the vehicles, fight, bank the reward.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use ironclash_campaign::{PlayerProgression, ProgressionStore};
use ironclash_catalog::generator::{generate_opponents, OpponentRequest};
use ironclash_catalog::VehicleCatalog;
use ironclash_core::error::Result;
use ironclash_core::outcome::Outcome;
use ironclash_sim::engine::{BattleSimulator, SimConfig};

use crate::autopilot::Autopilot;
use crate::config::AppConfig;
use crate::game_loop::{run_battle, Pacing};
use crate::render::LoggingRenderSink;

/// ChaCha stream for roster draws, kept apart from the battle's own stream.
const ROSTER_STREAM: u64 = 1;

/// What the binary prints when a session ends.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// `None` when the frame limit cut the battle short.
    pub outcome: Option<Outcome>,
    pub frames: u64,
    pub progression: PlayerProgression,
}

/// Build the simulator for the configured battle.
///
/// A configured vehicle is unlocked and selected first, so the opponent tier
/// window follows it.
pub fn prepare_battle(
    config: &AppConfig,
    progression: &mut PlayerProgression,
) -> Result<BattleSimulator> {
    let catalog = VehicleCatalog::standard();
    if let Some(id) = &config.vehicle {
        progression.unlock(catalog, id)?;
        progression.select_vehicle(id)?;
    }
    let player = progression.selected_vehicle(catalog)?;

    let request = OpponentRequest::parse(
        i64::from(progression.current_tier()),
        &config.difficulty,
        config.opponents,
    )?;
    let mut roster_rng = ChaCha8Rng::seed_from_u64(config.seed);
    roster_rng.set_stream(ROSTER_STREAM);
    let roster = generate_opponents(catalog, &request, &mut roster_rng)?;

    BattleSimulator::new(
        SimConfig {
            seed: config.seed,
            difficulty: request.difficulty,
        },
        player,
        roster,
    )
}

/// Fight one battle with the autopilot and apply the reward to `progression`.
pub fn run_session(config: &AppConfig, mut progression: PlayerProgression) -> Result<SessionReport> {
    let mut sim = prepare_battle(config, &mut progression)?;
    let mut pilot = Autopilot::new();
    let mut sink = LoggingRenderSink::new(config.log_interval);
    let pacing = if config.realtime {
        Pacing::Realtime
    } else {
        Pacing::Unpaced
    };

    let report = run_battle(&mut sim, &mut pilot, &mut sink, pacing, config.max_frames);
    if let Some(outcome) = &report.outcome {
        progression.apply_reward(outcome);
    }

    Ok(SessionReport {
        outcome: report.outcome,
        frames: report.frames,
        progression,
    })
}
