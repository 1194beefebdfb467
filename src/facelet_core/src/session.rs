//! A single puzzle session: one cube and the log of the moves made on it
//! since it was last solved.
//!
//! The log always describes the cube: performing it on a solved cube gives
//! the current state. Manual moves and scrambles push onto it, and each step
//! of a solution playback pops the move it undoes.

use log::{debug, info};
use thiserror::Error;

use crate::{
    cube::Cube,
    moves::{Move, MoveSequence, ParseMoveError, parse_move},
    scramble::scramble,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("There is nothing to solve, scramble the cube or make a move first")]
    EmptySequence,
    #[error(transparent)]
    InvalidMove(#[from] ParseMoveError),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    cube: Cube,
    log: MoveSequence,
}

impl Session {
    /// Start with a solved cube and an empty log.
    pub fn new() -> Self {
        Session::default()
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// The moves made since the cube was last solved.
    pub fn log(&self) -> &MoveSequence {
        &self.log
    }

    /// A copy of the cube to restore later with [`Session::restore`].
    pub fn snapshot(&self) -> (Cube, MoveSequence) {
        (self.cube.clone(), self.log.clone())
    }

    pub fn restore(&mut self, (cube, log): (Cube, MoveSequence)) {
        self.cube = cube;
        self.log = log;
    }

    /// Replace the cube with a solved one and forget the log.
    pub fn reset(&mut self) {
        debug!(target: "session", "Reset");
        self.cube = Cube::new();
        self.log.clear();
    }

    /// Perform a move and record it.
    pub fn apply_move(&mut self, move_: Move) {
        self.cube.turn(move_);
        self.log.push(move_);
    }

    /// Parse a token, perform it and record it. Nothing changes if the token
    /// is invalid.
    pub fn apply(&mut self, token: &str) -> Result<Move, SessionError> {
        let move_ = parse_move(token)?;
        debug!(target: "session", "Applying {move_}");
        self.apply_move(move_);
        Ok(move_)
    }

    /// Perform and record a whitespace separated sequence. The whole text is
    /// parsed first, so an invalid token leaves the session unchanged.
    pub fn apply_all(&mut self, text: &str) -> Result<MoveSequence, SessionError> {
        let moves: MoveSequence = text.parse()?;
        for &move_ in &moves {
            self.apply_move(move_);
        }
        Ok(moves)
    }

    /// Start over from a solved cube and perform `length` random moves.
    pub fn scramble(&mut self, rng: &mut fastrand::Rng, length: usize) -> &MoveSequence {
        self.reset();
        for move_ in scramble(rng, length).0 {
            self.apply_move(move_);
        }
        info!(target: "session", "Scrambled with {} moves", self.log.len());
        &self.log
    }

    /// The inverse of the log.
    pub fn solution(&self) -> Result<MoveSequence, SessionError> {
        if self.log.is_empty() {
            return Err(SessionError::EmptySequence);
        }
        Ok(self.log.inverse())
    }

    /// Play back the solution one move at a time.
    pub fn solve(&mut self) -> Result<Playback<'_>, SessionError> {
        let moves = self.solution()?;
        Ok(Playback {
            session: self,
            moves,
            next: 0,
            mode: Mode::Undo,
        })
    }

    /// Play back `moves` one at a time, recording each of them.
    pub fn replay(&mut self, moves: MoveSequence) -> Playback<'_> {
        Playback {
            session: self,
            moves,
            next: 0,
            mode: Mode::Record,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every move undoes the last logged move
    Undo,
    Record,
}

/// Stepwise playback of a move sequence on a session's cube. Each step is one
/// whole turn; the cube is never observable halfway through a move.
#[derive(Debug)]
pub struct Playback<'a> {
    session: &'a mut Session,
    moves: MoveSequence,
    next: usize,
    mode: Mode,
}

impl Playback<'_> {
    /// Perform the next move and return it, or `None` once every move has been
    /// performed.
    pub fn step(&mut self) -> Option<Move> {
        let move_ = *self.moves.moves().get(self.next)?;
        self.next += 1;

        match self.mode {
            Mode::Undo => {
                self.session.cube.turn(move_);
                let undone = self.session.log.pop();
                debug_assert_eq!(undone.map(Move::inverse), Some(move_));
            }
            Mode::Record => self.session.apply_move(move_),
        }

        debug!(
            target: "playback",
            "Step {}/{}: {move_}",
            self.next,
            self.moves.len()
        );
        Some(move_)
    }

    /// Perform every remaining move.
    pub fn finish(&mut self) {
        while self.step().is_some() {}
    }

    pub fn is_complete(&self) -> bool {
        self.next == self.moves.len()
    }

    pub fn remaining(&self) -> usize {
        self.moves.len() - self.next
    }

    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    pub fn cube(&self) -> &Cube {
        &self.session.cube
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Face;

    #[test]
    fn manual_moves_are_logged() {
        let mut session = Session::new();
        assert_eq!(session.apply("R"), Ok(Move::new(Face::R, true)));
        assert_eq!(session.apply("U'"), Ok(Move::new(Face::U, false)));
        assert_eq!(session.log().to_string(), "R U'");
        assert!(!session.cube().is_solved());
    }

    #[test]
    fn invalid_move_is_not_logged() {
        let mut session = Session::new();
        session.apply("F").unwrap();
        let before = session.cube().clone();
        assert!(matches!(
            session.apply("X"),
            Err(SessionError::InvalidMove(_))
        ));
        assert_eq!(session.cube(), &before);
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn apply_all_is_atomic() {
        let mut session = Session::new();
        assert!(session.apply_all("R U X").is_err());
        assert!(session.cube().is_solved());
        assert!(session.log().is_empty());

        assert_eq!(session.apply_all("R U").unwrap().len(), 2);
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn solution_needs_moves() {
        let mut session = Session::new();
        assert_eq!(session.solution(), Err(SessionError::EmptySequence));
        assert!(matches!(session.solve(), Err(SessionError::EmptySequence)));
        assert!(session.cube().is_solved());
    }

    #[test]
    fn solve_pops_the_log() {
        let mut session = Session::new();
        session.apply_all("R U F'").unwrap();

        let mut playback = session.solve().unwrap();
        assert_eq!(playback.moves().to_string(), "F U' R'");
        assert_eq!(playback.step(), Some(Move::new(Face::F, true)));
        assert_eq!(playback.remaining(), 2);
        playback.finish();
        assert!(playback.is_complete());
        assert_eq!(playback.step(), None);
        assert!(playback.cube().is_solved());

        assert!(session.log().is_empty());
        assert_eq!(session.cube(), &Cube::new());
    }

    #[test]
    fn interrupted_solve_keeps_log_consistent() {
        let mut session = Session::new();
        session.apply_all("L D B' R").unwrap();
        {
            let mut playback = session.solve().unwrap();
            playback.step();
            playback.step();
        }
        assert_eq!(session.log().to_string(), "L D");

        let mut expected = Cube::new();
        expected.apply_moves(session.log());
        assert_eq!(session.cube(), &expected);
    }

    #[test]
    fn replay_records_moves() {
        let mut session = Session::new();
        let moves: MoveSequence = "U R".parse().unwrap();
        let mut playback = session.replay(moves.clone());
        playback.finish();
        assert_eq!(session.log(), &moves);
    }

    #[test]
    fn scramble_resets_first() {
        let mut session = Session::new();
        session.apply("R").unwrap();
        let mut rng = fastrand::Rng::with_seed(3);
        let length = session.scramble(&mut rng, 20).len();
        assert_eq!(length, 20);

        let mut expected = Cube::new();
        expected.apply_moves(session.log());
        assert_eq!(session.cube(), &expected);
    }

    #[test]
    fn restore_snapshot() {
        let mut session = Session::new();
        session.apply("B").unwrap();
        let snapshot = session.snapshot();
        session.apply_all("R U R' U'").unwrap();
        session.restore(snapshot);
        assert_eq!(session.log().to_string(), "B");
    }
}
