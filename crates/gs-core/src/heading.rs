//! The four cardinal facings of the agent.
//!
//! `Heading` is a closed enum: every consumer matches exhaustively, so adding
//! a facing (which the grid model never will — cells are 4-connected) would
//! be a compile error at every dispatch site rather than a runtime surprise.

use std::fmt;

/// The direction the agent is facing.
///
/// Rows grow southward and columns grow eastward, so North is `row - 1` and
/// West is `col - 1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// The heading after a single left (counter-clockwise) turn.
    #[inline]
    pub fn turned_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// The heading after a single right (clockwise) turn.
    #[inline]
    pub fn turned_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The `(Δrow, Δcol)` of a single forward step in this heading.
    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::North => (-1, 0),
            Heading::South => (1, 0),
            Heading::East => (0, 1),
            Heading::West => (0, -1),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::North => "north",
            Heading::South => "south",
            Heading::East => "east",
            Heading::West => "west",
        };
        write!(f, "{s}")
    }
}
