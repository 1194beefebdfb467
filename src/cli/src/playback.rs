use std::{
    thread,
    time::{Duration, Instant},
};

use facelet_core::{Cube, Move, Playback};
use log::debug;

/// Helper for accurate sleep intervals.
struct Ticker {
    now: Instant,
}

impl Ticker {
    fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    fn wait(&mut self, delay: Duration) {
        // Advance the expected next time and sleep until that instant.
        self.now += delay;
        thread::sleep(self.now.saturating_duration_since(Instant::now()));
    }
}

/// Perform every remaining move of `playback`, waiting `delay` before each one
/// and calling `on_step` after it. Returns the number of moves performed.
pub fn play(
    playback: &mut Playback<'_>,
    delay: Duration,
    mut on_step: impl FnMut(Move, &Cube),
) -> usize {
    debug!(
        target: "playback",
        "Playing {} moves: delay={delay:?}",
        playback.remaining()
    );

    let mut ticker = Ticker::new();
    let mut steps = 0;
    while !playback.is_complete() {
        ticker.wait(delay);
        let Some(move_) = playback.step() else {
            break;
        };
        steps += 1;
        on_step(move_, playback.cube());
    }

    steps
}
