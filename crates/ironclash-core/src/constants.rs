//! Simulation constants and tuning parameters.

use glam::DVec2;

use crate::types::Bounds;

/// Simulation step rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per step.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 500.0;

/// Projectiles outside this rectangle are removed.
pub const ARENA_BOUNDS: Bounds =
    Bounds::new(DVec2::new(0.0, 0.0), DVec2::new(ARENA_WIDTH, ARENA_HEIGHT));

/// Where the player's vehicle may drive.
pub const PLAYER_BOUNDS: Bounds = Bounds::new(DVec2::new(30.0, 30.0), DVec2::new(770.0, 470.0));

/// Opponent half of the arena, used while patrolling or retreating.
pub const OPPONENT_ZONE: Bounds = Bounds::new(DVec2::new(400.0, 30.0), DVec2::new(770.0, 470.0));

// --- Spawning ---

pub const PLAYER_SPAWN: DVec2 = DVec2::new(100.0, 250.0);
pub const OPPONENT_SPAWN_X: f64 = 600.0;
pub const OPPONENT_SPAWN_Y: f64 = 100.0;
/// Vertical gap between consecutive opponents in the roster.
pub const OPPONENT_SPAWN_SPACING: f64 = 120.0;

/// Roster size used when the host does not ask for a specific one.
pub const DEFAULT_OPPONENT_COUNT: usize = 3;

// --- Player ---

/// Units per step per held direction.
pub const PLAYER_SPEED: f64 = 2.0;
pub const PLAYER_SHELL_SPEED: f64 = 10.0;
/// Shells leave the player's barrel this far ahead (+x).
pub const PLAYER_MUZZLE_OFFSET: f64 = 40.0;

// --- Opponents ---

pub const OPPONENT_SHELL_SPEED: f64 = 8.0;
/// Shells leave an opponent's barrel this far ahead (-x).
pub const OPPONENT_MUZZLE_OFFSET: f64 = 10.0;
/// Per-step chance that a loaded opponent pulls the trigger.
pub const OPPONENT_FIRE_CHANCE: f64 = 0.02;

// --- Collision ---

/// Hit box half extents (strict comparison).
pub const HIT_HALF_WIDTH: f64 = 20.0;
pub const HIT_HALF_HEIGHT: f64 = 10.0;

// --- Opponent AI ---

/// A decision fires once more than this many steps passed since the last one.
pub const AI_DECISION_INTERVAL_STEPS: u64 = 180;
pub const AI_ENGAGE_RANGE: f64 = 300.0;
pub const AI_RETREAT_HEALTH_RATIO: f64 = 0.3;
pub const AI_STANDOFF_RANGE: f64 = 150.0;

pub const PATROL_SPEED: f64 = 1.5;
pub const PATROL_TURN_CHANCE: f64 = 0.02;
pub const ATTACK_SPEED: f64 = 2.0;
pub const ATTACK_BACKOFF: f64 = 1.0;
pub const RETREAT_SPEED: f64 = 2.5;

pub const AGGRESSION_EASY: f64 = 0.3;
pub const AGGRESSION_MEDIUM: f64 = 0.6;
pub const AGGRESSION_HARD: f64 = 0.8;

// --- Tiers ---

pub const MIN_TIER: u32 = 1;
pub const MAX_TIER: u32 = 10;
/// Highest tier a medium roster may reach.
pub const MEDIUM_TIER_CAP: u32 = 5;
/// Highest tier a hard roster may reach.
pub const HARD_TIER_CAP: u32 = 6;

// --- Battle end ---

/// Battle times out once elapsed steps exceed this (30 s at 60 Hz).
pub const BATTLE_TIME_LIMIT_STEPS: u64 = 1800;
/// Victories before this step earn the fast-victory bonus (10 s at 60 Hz).
pub const FAST_VICTORY_STEPS: u64 = 600;

pub const DEFEAT_XP: u32 = 50;
pub const DEFEAT_CREDITS: u32 = 100;
pub const VICTORY_XP: u32 = 200;
pub const FAST_VICTORY_MULTIPLIER: f64 = 1.5;
pub const VICTORY_CREDITS: u32 = 500;
pub const TIMEOUT_XP: u32 = 100;
pub const TIMEOUT_CREDITS: u32 = 200;
