//! Headless IRONCLASH battle runner.
//!
//! Fights one battle with the scripted autopilot and prints the session report
//! as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Default battle: medium difficulty, three opponents, seed 42
//! cargo run -p ironclash-app
//!
//! # Hard battle in the BT-2, paced to wall-clock time
//! cargo run -p ironclash-app -- --difficulty hard --vehicle bt_2 --realtime
//!
//! # Settings from a file, with a command-line override
//! cargo run -p ironclash-app -- --config battle.json --seed 7
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ironclash_app::config::AppConfig;
use ironclash_app::session::run_session;
use ironclash_campaign::PlayerProgression;
use ironclash_core::error::{IronclashError, Result};

#[derive(Parser)]
#[command(name = "ironclash")]
#[command(about = "Headless tank battle runner")]
#[command(version)]
struct Cli {
    /// JSON config file. Flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for the roster and the battle
    #[arg(long)]
    seed: Option<u64>,

    /// Opponent difficulty: easy, medium or hard
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Number of opponents
    #[arg(short, long, allow_negative_numbers = true)]
    opponents: Option<i64>,

    /// Archetype id of the player's vehicle
    #[arg(long)]
    vehicle: Option<String>,

    /// Pace the battle to wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<u64>,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(opponents) = self.opponents {
            config.opponents = opponents;
        }
        if self.vehicle.is_some() {
            config.vehicle = self.vehicle;
        }
        if self.max_frames.is_some() {
            config.max_frames = self.max_frames;
        }
        config.realtime |= self.realtime;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG applies unless --verbose asks for everything
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Battle aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    tracing::debug!(?config, "Resolved configuration");

    let report = run_session(&config, PlayerProgression::default())?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| IronclashError::Config(format!("Failed to serialize report: {e}")))?;
    println!("{json}");
    Ok(())
}
