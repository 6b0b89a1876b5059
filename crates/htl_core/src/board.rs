use num_rational::Rational64;

use crate::segment::Segment;
use crate::types::Coord;

/// Full state of one game.
///
/// Owns the drawn segments and the two live endpoints of the growing chain.
/// Mutation happens only through [`Board::apply_move`], which validates
/// first and touches nothing on rejection, so a `Board` is never left
/// half-updated. Lookahead takes a `Clone` of the whole board.
#[derive(Clone, Debug)]
pub struct Board {
    height: i64,
    width: i64,
    segments: Vec<Segment>,
    /// `None` until the opening move; exactly two entries thereafter.
    endpoints: Option<[Coord; 2]>,
}

impl Board {
    pub fn new(height: i64, width: i64) -> Self {
        assert!(
            height >= 1 && width >= 1,
            "board dimensions must be at least 1x1"
        );
        Self {
            height,
            width,
            segments: Vec::new(),
            endpoints: None,
        }
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    /// Drawn segments, in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The two live ends of the chain, or `None` before the opening move.
    pub fn endpoints(&self) -> Option<&[Coord; 2]> {
        self.endpoints.as_ref()
    }

    /// Whether a point lies on the board. Exact rational comparison, so
    /// fractional points (midpoints) participate correctly.
    pub fn in_bounds(&self, point: Coord) -> bool {
        let zero = Rational64::from_integer(0);
        let max_row = Rational64::from_integer(self.height - 1);
        let max_col = Rational64::from_integer(self.width - 1);
        zero <= point.row && point.row <= max_row && zero <= point.col && point.col <= max_col
    }

    /// Whether `mv` could be played right now. Never mutates.
    ///
    /// A legal move stays on the board, starts from a live endpoint once
    /// the chain exists, and crosses nothing already drawn.
    pub fn is_legal_move(&self, mv: &Segment) -> bool {
        if !self.in_bounds(mv.start()) || !self.in_bounds(mv.end()) {
            return false;
        }
        if let Some(ends) = &self.endpoints {
            if !ends.contains(&mv.start()) {
                return false;
            }
        }
        !self.segments.iter().any(|drawn| mv.intersects(drawn))
    }

    /// Play `mv` if legal; returns `false` and leaves the board untouched
    /// otherwise.
    ///
    /// The opening move has no live end to grow from, so it is stored as
    /// two half-segments meeting at its exact midpoint and both of its
    /// endpoints become live. Later moves replace the endpoint they were
    /// played from with their destination.
    pub fn apply_move(&mut self, mv: &Segment) -> bool {
        if !self.is_legal_move(mv) {
            return false;
        }

        match self.endpoints {
            None => {
                let two = Rational64::from_integer(2);
                let mid = Coord::rational(
                    (mv.start().row + mv.end().row) / two,
                    (mv.start().col + mv.end().col) / two,
                );
                // The midpoint of a nonzero-length segment differs from both
                // endpoints, so the halves are well formed. Build both before
                // storing either; rejection must leave the board untouched.
                let (Ok(first), Ok(second)) =
                    (Segment::new(mid, mv.start()), Segment::new(mid, mv.end()))
                else {
                    return false;
                };
                self.segments.push(first);
                self.segments.push(second);
                self.endpoints = Some([mv.start(), mv.end()]);
            }
            Some(ref mut ends) => {
                self.segments.push(*mv);
                for end in ends.iter_mut() {
                    if *end == mv.start() {
                        *end = mv.end();
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
