use num_rational::Rational64;

use crate::types::{Coord, GeometryError};

/// Coarse direction of a segment, decided at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Exact slope of a segment's carrying line.
///
/// `Infinite` marks verticals and only ever drives branch selection; it is
/// never used in arithmetic. Horizontal segments have slope 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slope {
    Finite(Rational64),
    Infinite,
}

/// A drawn line segment between two distinct points.
///
/// Slope and intercept are computed once here and reused by every
/// intersection test, so all tests agree on the same exact values. Floating
/// point is deliberately absent: at grid coordinates it misclassifies
/// near-collinear lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    start: Coord,
    end: Coord,
    orientation: Orientation,
    slope: Slope,
    y_intercept: Option<Rational64>,
}

impl Segment {
    /// Build a segment, rejecting the degenerate zero-length case.
    pub fn new(start: Coord, end: Coord) -> Result<Self, GeometryError> {
        if start == end {
            return Err(GeometryError::ZeroLength(start));
        }

        let d_row = end.row - start.row;
        let d_col = end.col - start.col;
        let zero = Rational64::from_integer(0);

        let (orientation, slope) = if d_row == zero {
            (Orientation::Horizontal, Slope::Finite(zero))
        } else if d_col == zero {
            (Orientation::Vertical, Slope::Infinite)
        } else {
            (Orientation::Diagonal, Slope::Finite(d_row / d_col))
        };

        // y = m*x + b; horizontals reduce to b = start.row, verticals have none.
        let y_intercept = match slope {
            Slope::Infinite => None,
            Slope::Finite(m) => Some(start.row - m * start.col),
        };

        Ok(Self {
            start,
            end,
            orientation,
            slope,
            y_intercept,
        })
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn slope(&self) -> Slope {
        self.slope
    }

    pub fn y_intercept(&self) -> Option<Rational64> {
        self.y_intercept
    }

    /// Whether two segments cross, touch, or overlap.
    ///
    /// A new segment is drawn outward from an existing endpoint, so meeting
    /// `other` exactly where `self.start == other.end` does not count as an
    /// intersection; everywhere else, any shared point does.
    pub fn intersects(&self, other: &Segment) -> bool {
        if self.slope == other.slope {
            // Parallel. Verticals carry no intercept, so collinearity for
            // them is column equality.
            let collinear = match (self.orientation, other.orientation) {
                (Orientation::Vertical, Orientation::Vertical) => {
                    self.start.col == other.start.col
                }
                _ => self.y_intercept == other.y_intercept,
            };
            if !collinear {
                return false;
            }
            self.is_on_segment(other.start)
                || (self.is_on_segment(other.end) && self.start != other.end)
                || (other.is_on_segment(self.start) && self.start != other.end)
                || other.is_on_segment(self.end)
        } else {
            // Distinct slopes: the carrying lines meet at exactly one point.
            let meet = match ((self.slope, self.y_intercept), (other.slope, other.y_intercept)) {
                ((Slope::Infinite, _), (Slope::Finite(m), Some(b))) => {
                    let col = self.start.col;
                    Coord::rational(m * col + b, col)
                }
                ((Slope::Finite(m), Some(b)), (Slope::Infinite, _)) => {
                    let col = other.start.col;
                    Coord::rational(m * col + b, col)
                }
                ((Slope::Finite(m1), Some(b1)), (Slope::Finite(m2), Some(b2))) => {
                    let col = (b2 - b1) / (m1 - m2);
                    Coord::rational(m1 * col + b1, col)
                }
                // Finite slopes always carry an intercept, and two verticals
                // compare as parallel above.
                _ => return false,
            };

            if meet == self.start && meet == other.end {
                return false;
            }
            self.is_on_segment(meet) && other.is_on_segment(meet)
        }
    }

    /// Whether `point` falls within this segment's bounding extents.
    ///
    /// Only meaningful for a point already known to lie on the segment's
    /// carrying line.
    pub fn is_on_segment(&self, point: Coord) -> bool {
        let row_lo = self.start.row.min(self.end.row);
        let row_hi = self.start.row.max(self.end.row);
        let col_lo = self.start.col.min(self.end.col);
        let col_hi = self.start.col.max(self.end.col);

        row_lo <= point.row && point.row <= row_hi && col_lo <= point.col && point.col <= col_hi
    }
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod segment_tests;
