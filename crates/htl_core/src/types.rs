use num_rational::Rational64;
use std::fmt;
use thiserror::Error;

/// A point on the board, `(row, col)`, 0-indexed from the top-left.
///
/// Components are exact rationals rather than integers because the opening
/// move is split at its midpoint, and that midpoint may fall between grid
/// points. Every move a player makes still starts and ends on integer
/// coordinates; see [`Coord::as_grid_pair`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: Rational64,
    pub col: Rational64,
}

impl Coord {
    /// A grid point at integer coordinates.
    pub fn new(row: i64, col: i64) -> Self {
        Self {
            row: Rational64::from_integer(row),
            col: Rational64::from_integer(col),
        }
    }

    /// A point with exact rational coordinates (used for midpoints).
    pub fn rational(row: Rational64, col: Rational64) -> Self {
        Self { row, col }
    }

    /// The integer coordinates of this point, or `None` if it lies off the
    /// grid lattice. Moves always have grid endpoints; midpoints may not.
    pub fn as_grid_pair(&self) -> Option<(i64, i64)> {
        if self.row.is_integer() && self.col.is_integer() {
            Some((self.row.to_integer(), self.col.to_integer()))
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Errors from constructing geometry primitives.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Both endpoints coincide; a segment must have nonzero length.
    #[error("segment endpoints coincide at {0}")]
    ZeroLength(Coord),
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
