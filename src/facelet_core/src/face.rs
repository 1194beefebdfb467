use std::{fmt, str::FromStr};

use thiserror::Error;

/// One of the six faces of the cube. The discriminant is the position of the
/// face in the canonical serialization order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// Every face, in serialization order.
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, R, F, D, L, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color every sticker of this face shows when the cube is solved.
    pub const fn color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Blue,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown face `{0}`, expected one of U R F D L B")]
pub struct UnknownFaceError(pub String);

impl FromStr for Face {
    type Err = UnknownFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Face::from_letter), chars.next()) {
            (Some(face), None) => Ok(face),
            _ => Err(UnknownFaceError(s.to_owned())),
        }
    }
}

/// A sticker color. There is exactly one per face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Red, Green, Yellow, Orange, Blue];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            assert!(v[i] as usize == Face::ALL[i].color() as usize);
            i += 1;
        }

        v
    };

    /// The single character used for this color in the serialized form.
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Blue => 'b',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.symbol() == symbol)
    }

    /// The face whose solved color this is.
    pub const fn home(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Red => Face::R,
            Color::Green => Face::F,
            Color::Yellow => Face::D,
            Color::Orange => Face::L,
            Color::Blue => Face::B,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
