use crate::board::Board;
use crate::segment::Segment;
use crate::types::Coord;

/// Enumerate every legal move from the current position, in a fixed order:
/// endpoint order first, then a row-major scan of destinations.
///
/// Recomputed fresh on every call; the board is not touched.
pub fn legal_moves(board: &Board) -> Vec<Segment> {
    match board.endpoints() {
        None => opening_moves(board),
        Some(ends) => {
            let mut out = Vec::new();
            for &endpoint in ends {
                for row in 0..board.height() {
                    for col in 0..board.width() {
                        let dest = Coord::new(row, col);
                        if dest == endpoint {
                            continue;
                        }
                        let Ok(candidate) = Segment::new(endpoint, dest) else {
                            continue;
                        };
                        if board.is_legal_move(&candidate) {
                            out.push(candidate);
                        }
                    }
                }
            }
            out
        }
    }
}

/// Before the chain exists, any two distinct grid points form a legal move.
///
/// Quadratic in board area, but this only ever runs on the opening move of
/// a game.
fn opening_moves(board: &Board) -> Vec<Segment> {
    let mut points = Vec::with_capacity((board.height() * board.width()) as usize);
    for row in 0..board.height() {
        for col in 0..board.width() {
            points.push(Coord::new(row, col));
        }
    }

    let mut out = Vec::with_capacity(points.len() * (points.len() - 1) / 2);
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            if let Ok(candidate) = Segment::new(a, b) {
                out.push(candidate);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
