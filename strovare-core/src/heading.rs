//! ## strovare-core::heading
//! **Cardinal headings and quarter-turn arithmetic**
//!
//! A heading is one of the four compass directions, stored as its quadrant
//! index counter-clockwise from East (`E`=0, `N`=1, `W`=2, `S`=3). Rotation
//! is index addition modulo 4 and movement deltas come from a fixed lookup
//! table, so heading math never touches floating point.

use thiserror::Error;

/// Raised when a heading token is not one of `N`, `E`, `S`, `W`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown heading {0:?}")]
pub struct UnknownHeading(pub String);

/// A quarter turn, the only rotation unit rovers support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// Counter-clockwise quarter turn.
    Left,
    /// Clockwise quarter turn.
    Right,
}

impl Rotation {
    /// Signed quadrant offset this rotation applies to a heading.
    #[inline]
    pub const fn quadrants(self) -> i64 {
        match self {
            Rotation::Left => 1,
            Rotation::Right => -1,
        }
    }
}

/// One of the four cardinal compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

/// Headings indexed by quadrant.
const HEADINGS: [Heading; 4] = [
    Heading::East,
    Heading::North,
    Heading::West,
    Heading::South,
];

/// Unit movement deltas `(dx, dy)` indexed by quadrant.
const UNIT_VECTORS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl Heading {
    /// Quadrant index of this heading, counter-clockwise from East.
    #[inline]
    pub const fn quadrant(self) -> u8 {
        self as u8
    }

    /// Heading for an arbitrary quadrant count, reduced modulo 4.
    #[inline]
    pub const fn from_quadrant(quadrant: i64) -> Self {
        HEADINGS[quadrant.rem_euclid(4) as usize]
    }

    /// Heading after applying one quarter turn.
    #[inline]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        Self::from_quadrant(self.quadrant() as i64 + rotation.quadrants())
    }

    /// Unit `(dx, dy)` delta a single forward move adds to a position.
    #[inline]
    pub const fn unit_vector(self) -> (i64, i64) {
        UNIT_VECTORS[self.quadrant() as usize]
    }

    /// Compass letter this heading renders as.
    pub const fn letter(self) -> char {
        match self {
            Heading::East => 'E',
            Heading::North => 'N',
            Heading::West => 'W',
            Heading::South => 'S',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = UnknownHeading;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'E' => Ok(Heading::East),
            'N' => Ok(Heading::North),
            'W' => Ok(Heading::West),
            'S' => Ok(Heading::South),
            other => Err(UnknownHeading(other.to_string())),
        }
    }
}

impl std::str::FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut letters = token.chars();
        match (letters.next(), letters.next()) {
            (Some(letter), None) => Heading::try_from(letter),
            _ => Err(UnknownHeading(token.to_string())),
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
