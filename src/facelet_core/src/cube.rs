//! The facelet model of a 3x3x3 cube.
//!
//! A cube is six independent 3x3 grids of stickers. Grids are stored row-major
//! (indices 0, 1, 2 are the top row) as seen from outside the cube. A quarter
//! turn is a rotation of the turned grid followed by a four-cycle of the strips
//! of three stickers that border it on the adjacent faces.

use std::{array, fmt, str::FromStr};

use log::trace;
use thiserror::Error;

use crate::{
    face::{Color, Face},
    moves::Move,
};

/// `result[i] = grid[CLOCKWISE[i]]`
const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// `result[i] = grid[COUNTER_CLOCKWISE[i]]`
const COUNTER_CLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// The number of stickers in the serialized form of a cube.
pub const FACELET_COUNT: usize = 54;

/// Three stickers of one face that border a turned face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub indices: [usize; 3],
}

const fn strip(face: Face, indices: [usize; 3]) -> Strip {
    Strip { face, indices }
}

const TOP: [usize; 3] = [0, 1, 2];
const BOTTOM: [usize; 3] = [6, 7, 8];
const LEFT: [usize; 3] = [0, 3, 6];
const RIGHT_UP: [usize; 3] = [8, 5, 2];

const fn strips_of(face: Face) -> [Strip; 4] {
    use Face::*;

    match face {
        U => [strip(B, TOP), strip(R, TOP), strip(F, TOP), strip(L, TOP)],
        D => [
            strip(F, BOTTOM),
            strip(R, BOTTOM),
            strip(B, BOTTOM),
            strip(L, BOTTOM),
        ],
        F => [
            strip(U, BOTTOM),
            strip(R, LEFT),
            strip(D, [2, 1, 0]),
            strip(L, RIGHT_UP),
        ],
        B => [
            strip(U, [2, 1, 0]),
            strip(L, LEFT),
            strip(D, BOTTOM),
            strip(R, RIGHT_UP),
        ],
        L => [
            strip(U, LEFT),
            strip(F, LEFT),
            strip(D, LEFT),
            strip(B, RIGHT_UP),
        ],
        R => [
            strip(U, [2, 5, 8]),
            strip(B, LEFT),
            strip(D, [2, 5, 8]),
            strip(F, RIGHT_UP),
        ],
    }
}

/// Indexed by `Face as usize`
static ADJACENCY: [[Strip; 4]; 6] = {
    let mut table = [[strip(Face::U, TOP); 4]; 6];
    let mut i = 0;
    while i < table.len() {
        table[i] = strips_of(Face::ALL[i]);
        i += 1;
    }
    table
};

impl Face {
    /// The four strips touched by a turn of this face, listed in the
    /// rotational order of a clockwise turn: a clockwise turn moves the
    /// stickers of each strip into the next one.
    pub fn adjacency(self) -> &'static [Strip; 4] {
        &ADJACENCY[self as usize]
    }
}

/// The sticker configuration of a cube.
///
/// `S` is the sticker type. It is [`Color`] for a real cube, but any `Copy`
/// type works, which lets tests give every sticker a unique label and follow
/// it through turns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube<S = Color> {
    faces: [[S; 9]; 6],
}

impl<S: Copy> Cube<S> {
    /// Create a cube from its face grids, indexed by `Face as usize`. The
    /// configuration is not checked for being reachable.
    pub fn from_faces(faces: [[S; 9]; 6]) -> Self {
        Cube { faces }
    }

    /// Create a cube by computing each sticker from its face and index.
    pub fn from_fn(mut sticker: impl FnMut(Face, usize) -> S) -> Self {
        Cube {
            faces: Face::ALL.map(|face| array::from_fn(|index| sticker(face, index))),
        }
    }

    pub fn face(&self, face: Face) -> &[S; 9] {
        &self.faces[face as usize]
    }

    /// All stickers in serialization order.
    pub fn stickers(&self) -> impl Iterator<Item = S> + '_ {
        self.faces.iter().flatten().copied()
    }

    /// Rotate the stickers of one face by a quarter turn. No other face is
    /// touched.
    pub fn rotate_face_in_place(&mut self, face: Face, clockwise: bool) {
        let source = if clockwise {
            &CLOCKWISE
        } else {
            &COUNTER_CLOCKWISE
        };
        let grid = &mut self.faces[face as usize];
        let old = *grid;
        *grid = source.map(|index| old[index]);
    }

    /// Shift the four strips bordering `face` one step around it, forward in
    /// the adjacency order for a clockwise turn and backward otherwise.
    pub fn apply_adjacency_cycle(&mut self, face: Face, clockwise: bool) {
        let strips = face.adjacency();

        // Every strip is read before any is written
        let snapshot: [[S; 3]; 4] = array::from_fn(|slot| {
            let Strip { face, indices } = strips[slot];
            indices.map(|index| self.faces[face as usize][index])
        });

        for (slot, strip) in strips.iter().enumerate() {
            let from = if clockwise { (slot + 3) % 4 } else { (slot + 1) % 4 };
            let grid = &mut self.faces[strip.face as usize];
            for (index, sticker) in strip.indices.into_iter().zip(snapshot[from]) {
                grid[index] = sticker;
            }
        }
    }

    /// Perform a quarter turn of `face`.
    pub fn apply_turn(&mut self, face: Face, clockwise: bool) {
        trace!(target: "cube", "Turning face={face} clockwise={clockwise}");
        self.rotate_face_in_place(face, clockwise);
        self.apply_adjacency_cycle(face, clockwise);
    }

    pub fn turn(&mut self, move_: Move) {
        self.apply_turn(move_.face, move_.clockwise);
    }

    /// Perform every move in order.
    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            self.turn(move_);
        }
    }
}

impl<S: Copy + PartialEq> Cube<S> {
    /// Whether every face shows a single sticker value.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().all(|sticker| *sticker == grid[4]))
    }
}

impl Cube<Color> {
    /// A solved cube, every face showing its own color.
    pub fn new() -> Self {
        Cube {
            faces: Face::ALL.map(|face| [face.color(); 9]),
        }
    }

    /// How many stickers of `color` are on the cube. For any cube reached by
    /// turns from the solved state this is always 9.
    pub fn count(&self, color: Color) -> usize {
        self.stickers().filter(|&sticker| sticker == color).count()
    }

    /// The canonical 54 character form: faces in the order U R F D L B, each
    /// face's stickers in index order.
    pub fn serialize(&self) -> String {
        self.stickers().map(Color::symbol).collect()
    }
}

impl Default for Cube<Color> {
    fn default() -> Self {
        Cube::new()
    }
}

impl fmt::Display for Cube<Color> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFaceletsError {
    #[error("Expected {} stickers but got {actual}", FACELET_COUNT)]
    WrongLength { actual: usize },
    #[error("Invalid sticker `{symbol}` at position {position}, expected one of w r g y o b")]
    InvalidSymbol { symbol: char, position: usize },
}

impl FromStr for Cube<Color> {
    type Err = ParseFaceletsError;

    /// Parse the serialized form. Whether the stickers describe a reachable
    /// cube is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != FACELET_COUNT {
            return Err(ParseFaceletsError::WrongLength { actual });
        }

        let mut faces = [[Color::White; 9]; 6];
        for (position, symbol) in s.chars().enumerate() {
            faces[position / 9][position % 9] = Color::from_symbol(symbol)
                .ok_or(ParseFaceletsError::InvalidSymbol { symbol, position })?;
        }

        Ok(Cube { faces })
    }
}
