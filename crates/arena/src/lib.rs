//! Game runner for Hold That Line.
//!
//! This crate provides everything around the rules engine that a playable
//! setup needs:
//! - Running engine-vs-engine simulations and human-vs-engine console games
//! - The `(r1,c1),(r2,c2)` move text format
//! - Session configuration (TOML) and result reports (JSON)
//!
//! # Usage
//!
//! ```bash
//! # Ten seeded engine-vs-engine games on the default 4x4 board
//! cargo run -p arena -- sim --games 10 --seed 1
//!
//! # Play against the engine on a 5x5 board
//! cargo run -p arena -- play --height 5 --width 5
//! ```

mod notation;
mod players;
mod session;

pub use notation::*;
pub use players::*;
pub use session::*;
