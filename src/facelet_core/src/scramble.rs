use log::debug;

use crate::moves::{Move, MoveSequence};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Draw `length` moves independently and uniformly from the twelve quarter
/// turns.
pub fn scramble(rng: &mut fastrand::Rng, length: usize) -> MoveSequence {
    let moves: MoveSequence = (0..length)
        .map(|_| Move::ALL[rng.usize(..Move::ALL.len())])
        .collect();
    debug!(target: "scramble", "Generated scramble: {moves}");
    moves
}
