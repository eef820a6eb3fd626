//! The agent's primitive action vocabulary.

use std::fmt;

/// One committed primitive action.
///
/// A plan is an ordered `Vec<Move>`; replaying it from the initial pose
/// reproduces the final pose and scanned set exactly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Advance one cell in the current heading.
    Forward,
    /// Rotate 90° counter-clockwise in place.
    TurnLeft,
    /// Rotate 90° clockwise in place.
    TurnRight,
}

impl Move {
    /// All three primitives, in the expansion order used by path search.
    pub const ALL: [Move; 3] = [Move::Forward, Move::TurnLeft, Move::TurnRight];
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Forward => "forward",
            Move::TurnLeft => "turn_left",
            Move::TurnRight => "turn_right",
        };
        write!(f, "{s}")
    }
}
