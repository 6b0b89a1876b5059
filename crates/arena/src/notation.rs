//! Text form of moves: `(r1,c1),(r2,c2)`.
//!
//! This is the wire format a match server and the console player speak.
//! Only grid-aligned segments have a text form; the fractional midpoint
//! halves of the opening move are internal and never serialized.

use htl_core::{Coord, Segment};

/// Render a move, or `None` for a segment with non-grid endpoints.
pub fn format_move(mv: &Segment) -> Option<String> {
    let (r1, c1) = mv.start().as_grid_pair()?;
    let (r2, c2) = mv.end().as_grid_pair()?;
    Some(format!("({},{}),({},{})", r1, c1, r2, c2))
}

/// Parse a move from its text form. Whitespace between tokens is tolerated;
/// anything malformed, and the zero-length move, is rejected.
pub fn parse_move(text: &str) -> Option<Segment> {
    let [r1, c1, r2, c2] = parse_points(text)?;
    Segment::new(Coord::new(r1, c1), Coord::new(r2, c2)).ok()
}

fn parse_points(text: &str) -> Option<[i64; 4]> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let rest = compact.strip_prefix('(')?;
    let (r1, rest) = take_int(rest)?;
    let rest = rest.strip_prefix(',')?;
    let (c1, rest) = take_int(rest)?;
    let rest = rest.strip_prefix(')')?;
    let rest = rest.strip_prefix(',')?;
    let rest = rest.strip_prefix('(')?;
    let (r2, rest) = take_int(rest)?;
    let rest = rest.strip_prefix(',')?;
    let (c2, rest) = take_int(rest)?;
    let rest = rest.strip_prefix(')')?;
    if !rest.is_empty() {
        return None;
    }
    Some([r1, c1, r2, c2])
}

fn take_int(s: &str) -> Option<(i64, &str)> {
    let mut len = 0;
    for (i, ch) in s.char_indices() {
        if ch.is_ascii_digit() || (i == 0 && ch == '-') {
            len = i + ch.len_utf8();
        } else {
            break;
        }
    }
    if len == 0 {
        return None;
    }
    let value = s[..len].parse().ok()?;
    Some((value, &s[len..]))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
