//! A facelet model of the 3x3x3 cube and a quarter turn move engine.
//!
//! The cube is six 3x3 sticker grids. Turning a face rotates its grid and
//! cycles the edge strips of the four faces around it. Solving is done by
//! replaying the inverse of the recorded moves; there is no search.

pub mod cube;
pub mod face;
pub mod moves;
pub mod scramble;
pub mod session;

pub use cube::{Cube, FACELET_COUNT, ParseFaceletsError, Strip};
pub use face::{Color, Face};
pub use moves::{
    INVERSE_MARKER, Move, MoveSequence, ParseMoveError, apply_move, apply_sequence,
    invert_sequence, parse_move,
};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, scramble};
pub use session::{Playback, Session, SessionError};

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
