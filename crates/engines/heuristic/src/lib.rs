//! Depth-1 Lookahead Engine
//!
//! An automated player that classifies every legal move one ply ahead and
//! picks randomly inside its preferences: take a predicted win when one
//! exists, otherwise avoid predicted losses unless every move is one. Early
//! in a game nothing classifies, so play is effectively uniform random.
//!
//! The prognosis is shallow and can misread deeper tactics; that is
//! accepted, the point is only to dodge obviously suicidal play.

use htl_core::{legal_moves, Board, Player, Segment};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub mod heuristic;

pub use heuristic::{classify, Outlook};


/// Automated player backed by the one-ply win/loss prognosis.
///
/// Owns its random source so a seeded generator can be injected; games and
/// tests that need reproducible play use [`HeuristicEngine::seeded`] or
/// [`HeuristicEngine::with_rng`].
pub struct HeuristicEngine<R: Rng = StdRng> {
    rng: R,
}

impl HeuristicEngine<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Choose a move for the current position, or `None` when there is
    /// nothing left to play (the mover has lost).
    pub fn choose_move(&mut self, board: &Board) -> Option<Segment> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return None;
        }

        let mut wins = Vec::new();
        let mut losses = Vec::new();
        for mv in &moves {
            match classify(board, mv) {
                Outlook::Win => wins.push(*mv),
                Outlook::Loss => losses.push(*mv),
                Outlook::Neutral => {}
            }
        }

        // A predicted win is taken every time; several tie-break randomly.
        if !wins.is_empty() {
            return wins.choose(&mut self.rng).copied();
        }

        // Filter predicted losses out unless they are all that remains.
        let mut pool = moves;
        if !losses.is_empty() && losses.len() != pool.len() {
            pool.retain(|mv| !losses.contains(mv));
        }
        pool.choose(&mut self.rng).copied()
    }
}

impl<R: Rng> Player for HeuristicEngine<R> {
    fn propose_move(&mut self, board: &Board) -> Option<Segment> {
        self.choose_move(board)
    }

    fn name(&self) -> &str {
        "heuristic v1"
    }
}
