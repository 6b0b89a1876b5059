use std::collections::HashSet;

use htl_core::{legal_moves, Board, Segment};

/// One-ply prognosis for a candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outlook {
    Win,
    Loss,
    Neutral,
}

/// Classify a candidate by playing it on a scratch board and counting the
/// opponent's distinct reachable destinations one ply ahead.
///
/// One reply left is a strong shape for the mover; zero or two replies go
/// on the avoid list. Zero replies landing there (rather than counting as
/// an immediate win) is long-standing behavior that selection and outcome
/// accounting are tuned around, so it stays; actual game results come from
/// the turn loop, not from this prognosis. Depth is one ply by design and
/// misclassification in deeper tactics is accepted.
pub fn classify(board: &Board, candidate: &Segment) -> Outlook {
    let mut scratch = board.clone();
    let applied = scratch.apply_move(candidate);
    debug_assert!(applied, "classify expects a pre-validated candidate");
    if !applied {
        return Outlook::Neutral;
    }

    // Two moves reaching the same point from different live ends count once:
    // this measures spaces left to move to, not segments.
    let mut seen = HashSet::new();
    let mut destinations = 0usize;
    for reply in legal_moves(&scratch) {
        if seen.insert(reply.end()) {
            destinations += 1;
        }
    }

    match destinations {
        1 => Outlook::Win,
        0 | 2 => Outlook::Loss,
        _ => Outlook::Neutral,
    }
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod heuristic_tests;
