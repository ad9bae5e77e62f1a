//! Render sink that reports battle progress through the log.

use ironclash_core::events::BattleEvent;
use ironclash_core::state::{BattleSnapshot, RenderSink};

/// Logs a status line every `interval` steps, plus every opponent kill.
pub struct LoggingRenderSink {
    interval: u64,
    presented: u64,
}

impl LoggingRenderSink {
    /// `interval` of 0 disables the periodic status line.
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            presented: 0,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    fn status_due(&self, step: u64) -> bool {
        self.interval > 0 && step % self.interval == 0
    }
}

impl RenderSink for LoggingRenderSink {
    fn present(&mut self, snapshot: &BattleSnapshot) {
        self.presented += 1;
        let step = snapshot.time.step;

        for event in &snapshot.events {
            if let BattleEvent::Destroyed {
                opponent: Some(index),
            } = event
            {
                tracing::info!(
                    step,
                    opponent = %snapshot.opponents[*index].name,
                    remaining = snapshot.opponents_remaining,
                    "Opponent destroyed"
                );
            }
        }

        if self.status_due(step) {
            tracing::info!(
                step,
                seconds = snapshot.time.elapsed_secs(),
                player_health = snapshot.player.health,
                player_max_health = snapshot.player.max_health,
                opponents_remaining = snapshot.opponents_remaining,
                projectiles = snapshot.projectiles.len(),
                "Battle status"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironclash_catalog::VehicleCatalog;
    use ironclash_core::enums::Difficulty;
    use ironclash_sim::setup::setup_battle;
    use ironclash_sim::systems::snapshot::build_snapshot;

    #[test]
    fn test_status_interval() {
        let sink = LoggingRenderSink::new(60);
        assert!(sink.status_due(60));
        assert!(sink.status_due(120));
        assert!(!sink.status_due(61));

        let silent = LoggingRenderSink::new(0);
        assert!(!silent.status_due(60));
    }

    #[test]
    fn test_counts_presented_snapshots() {
        let catalog = VehicleCatalog::standard();
        let mut state = setup_battle(
            catalog.create_instance("t1_cunningham").unwrap(),
            vec![catalog.create_instance("ms_1").unwrap()],
            Difficulty::Medium,
        )
        .unwrap();
        state.opponents[0].set_health(0);
        let snapshot = build_snapshot(&state, vec![BattleEvent::Destroyed { opponent: Some(0) }]);

        let mut sink = LoggingRenderSink::new(60);
        assert_eq!(sink.presented(), 0);
        sink.present(&snapshot);
        sink.present(&snapshot);
        assert_eq!(sink.presented(), 2);
    }
}
