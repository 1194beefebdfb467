//! Move tokens and sequences.
//!
//! A token is a face letter optionally followed by `'`. Tokens are parsed into
//! [`Move`]s right away and only turned back into text for display.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{cube::Cube, face::Face};

/// Marks a counter-clockwise turn.
pub const INVERSE_MARKER: char = '\'';

/// A quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub clockwise: bool,
}

impl Move {
    /// All twelve quarter turns.
    pub const ALL: [Move; 12] = {
        let mut moves = [Move::new(Face::U, true); 12];
        let mut i = 0;
        while i < Face::ALL.len() {
            moves[2 * i] = Move::new(Face::ALL[i], true);
            moves[2 * i + 1] = Move::new(Face::ALL[i], false);
            i += 1;
        }
        moves
    };

    pub const fn new(face: Face, clockwise: bool) -> Move {
        Move { face, clockwise }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Move {
            face: self.face,
            clockwise: !self.clockwise,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("Invalid move `{token}`, expected one of U D F B L R optionally followed by '")]
    InvalidMoveToken { token: String },
}

/// Parse a single move token such as `R` or `U'`.
pub fn parse_move(token: &str) -> Result<Move, ParseMoveError> {
    let trimmed = token.trim();
    let (letters, clockwise) = match trimmed.strip_suffix(INVERSE_MARKER) {
        Some(rest) => (rest, false),
        None => (trimmed, true),
    };

    let mut chars = letters.chars();
    match (chars.next().and_then(Face::from_letter), chars.next()) {
        (Some(face), None) => Ok(Move { face, clockwise }),
        _ => Err(ParseMoveError::InvalidMoveToken {
            token: token.to_owned(),
        }),
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clockwise {
            write!(f, "{}", self.face)
        } else {
            write!(f, "{}{INVERSE_MARKER}", self.face)
        }
    }
}

/// Parse `token` and perform it on `cube`. The cube is untouched if the token
/// is invalid.
pub fn apply_move<S: Copy>(cube: &mut Cube<S>, token: &str) -> Result<Move, ParseMoveError> {
    let move_ = parse_move(token)?;
    cube.turn(move_);
    Ok(move_)
}

/// Perform every token in order. The first invalid token stops the sequence;
/// the moves before it stay applied.
pub fn apply_sequence<S: Copy, T: AsRef<str>>(
    cube: &mut Cube<S>,
    tokens: &[T],
) -> Result<(), ParseMoveError> {
    for (i, token) in tokens.iter().enumerate() {
        if let Err(e) = apply_move(cube, token.as_ref()) {
            debug!(target: "moves", "Stopping sequence at token {i} of {}: {e}", tokens.len());
            return Err(e);
        }
    }

    Ok(())
}

/// The moves that undo `moves` when performed right after them.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}

/// An ordered list of moves, such as a scramble or a solution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    pub fn new() -> Self {
        MoveSequence(Vec::new())
    }

    pub fn push(&mut self, move_: Move) {
        self.0.push(move_);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    #[must_use]
    pub fn inverse(&self) -> MoveSequence {
        MoveSequence(invert_sequence(&self.0))
    }
}

impl FromStr for MoveSequence {
    type Err = ParseMoveError;

    /// Parse whitespace separated tokens. Nothing is returned unless every
    /// token is valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(parse_move)
            .collect::<Result<_, _>>()
            .map(MoveSequence)
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        MoveSequence(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveSequence(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
