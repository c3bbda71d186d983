use core::fmt;
use std::str::FromStr;

use crate::error::{MazeError, Result};

/// Compass facing of the solver. The discriminants follow clockwise order so that turning is
/// arithmetic modulo 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn from_index(index: i32) -> Orientation {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    fn rotate(self, quarter_turns: i32) -> Orientation {
        Self::from_index(self as i32 + quarter_turns)
    }

    /// 90° clockwise.
    pub fn turn_right(self) -> Orientation {
        self.rotate(1)
    }

    /// 90° counter-clockwise.
    pub fn turn_left(self) -> Orientation {
        self.rotate(-1)
    }

    pub fn turn_around(self) -> Orientation {
        self.rotate(2)
    }

    /// The side the solver keeps its hand on.
    pub fn right_of(self) -> Orientation {
        self.turn_right()
    }

    pub fn left_of(self) -> Orientation {
        self.turn_left()
    }

    /// Row and column delta of a single step in this direction. Rows grow downwards.
    pub fn forward_offset(self) -> (i32, i32) {
        match self {
            Orientation::North => (-1, 0),
            Orientation::East => (0, 1),
            Orientation::South => (1, 0),
            Orientation::West => (0, -1),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Orientation {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Orientation::North),
            "E" => Ok(Orientation::East),
            "S" => Ok(Orientation::South),
            "W" => Ok(Orientation::West),
            _ => Err(MazeError::InvalidSymbol(s.to_owned())),
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = MazeError;

    fn try_from(symbol: char) -> Result<Self> {
        let mut buf = [0u8; 4];
        symbol.encode_utf8(&mut buf).parse()
    }
}
