//! Rules engine for Hold That Line.
//!
//! Two players take turns extending a chain of segments across an HxW grid
//! of points. A segment may not cross, touch, or overlap anything already
//! drawn (except at the endpoint it grows from), and after the opening move
//! every segment must start at one of the chain's two live ends. The first
//! player without a legal move loses.
//!
//! All geometry uses exact rational arithmetic; floating point would
//! misclassify near-collinear lines at grid coordinates.

pub mod board;
pub mod movegen;
pub mod segment;
pub mod types;

pub use board::*;
pub use movegen::*;
pub use segment::*;
pub use types::*;

// =============================================================================
// Player trait — implemented by every move source (engine, console, ...)
// =============================================================================

/// A source of moves for one side of a game.
///
/// This is the seam between the rules engine and whatever is driving a
/// player: the automated engine, a human at the console, or a remote match
/// feed. Returning `None` from [`Player::propose_move`] means the player
/// has no move to offer and has lost.
pub trait Player {
    /// Produce the next move for the current position, or `None` to concede.
    fn propose_move(&mut self, board: &Board) -> Option<Segment>;

    /// Observe a move made by the other side.
    fn notify(&mut self, _mv: &Segment) {}

    /// Name used in reports and transcripts.
    fn name(&self) -> &str;
}
