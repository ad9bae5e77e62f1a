//! Frame loop — steps the simulator once per frame and hands the snapshot on.
//!
//! Single-threaded: input is sampled, one step runs to completion, then the
//! render sink and the input source see the resulting snapshot. The host may
//! stop at any frame boundary.

use std::time::{Duration, Instant};

use rand::Rng;

use ironclash_core::constants::TICK_RATE;
use ironclash_core::input::InputSource;
use ironclash_core::outcome::Outcome;
use ironclash_core::state::RenderSink;
use ironclash_sim::engine::BattleSimulator;

/// Nominal duration of one step at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One step per `TICK_DURATION` of wall-clock time.
    Realtime,
    /// As fast as the machine allows.
    Unpaced,
}

/// Schedules frames against the wall clock.
pub struct FrameClock {
    next_frame: Instant,
    frame: Duration,
}

/// How a loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// `None` when the frame limit cut the battle short.
    pub outcome: Option<Outcome>,
    pub frames: u64,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            next_frame: Instant::now(),
            frame,
        }
    }

    /// Sleep until the next frame is due.
    pub fn wait(&mut self) {
        self.next_frame += self.frame;
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        } else if now - self.next_frame > self.frame * 2 {
            // Too far behind, reset to avoid catch-up spiral
            self.next_frame = now;
        }
    }

    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }
}

/// Drive a battle until it ends or `max_frames` frames have run.
pub fn run_battle<R, I, S>(
    sim: &mut BattleSimulator<R>,
    input: &mut I,
    sink: &mut S,
    pacing: Pacing,
    max_frames: Option<u64>,
) -> LoopReport
where
    R: Rng,
    I: InputSource + ?Sized,
    S: RenderSink + ?Sized,
{
    let mut clock = match pacing {
        Pacing::Realtime => Some(FrameClock::new(TICK_DURATION)),
        Pacing::Unpaced => None,
    };
    let mut frames = 0;

    loop {
        if max_frames.is_some_and(|max| frames >= max) {
            tracing::warn!(frames, "Frame limit reached before the battle ended");
            return LoopReport {
                outcome: sim.outcome(),
                frames,
            };
        }

        // 1. Sample held input
        let held = input.sample();

        // 2. Advance one step
        let snapshot = sim.tick(&held);
        frames += 1;

        // 3. Present, and let scripted input react
        sink.present(&snapshot);
        input.observe(&snapshot);

        if let Some(outcome) = snapshot.outcome {
            return LoopReport {
                outcome: Some(outcome),
                frames,
            };
        }

        // 4. Wait for the next frame
        if let Some(clock) = clock.as_mut() {
            clock.wait();
        }
    }
}
