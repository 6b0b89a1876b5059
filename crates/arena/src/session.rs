//! Turn orchestration and result reporting.

use serde::{Deserialize, Serialize};
use std::path::Path;

use htl_core::{Board, Player};

use crate::notation::format_move;

/// Configuration for a run of games.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Board height in points
    pub height: i64,
    /// Board width in points
    pub width: i64,
    /// Number of games to play (simulation mode)
    pub games: u32,
    /// Seed for the engines' random sources (None = entropy)
    pub seed: Option<u64>,
    /// Print moves and per-game results as play proceeds
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            height: 4,
            width: 4,
            games: 1,
            seed: None,
            verbose: true,
        }
    }
}

impl SessionConfig {
    /// Load a config from a TOML file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }
}

/// Which seat won a single game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

/// Record of one finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Winner,
    pub winner_name: String,
    /// Moves played before someone ran out
    pub moves: u32,
    /// The game in move-text form, in play order
    pub transcript: Vec<String>,
}

/// Aggregate report over a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    pub first: String,
    pub second: String,
    pub first_wins: u32,
    pub second_wins: u32,
    pub games: Vec<GameOutcome>,
}

impl SimReport {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            first_wins: 0,
            second_wins: 0,
            games: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner {
            Winner::First => self.first_wins += 1,
            Winner::Second => self.second_wins += 1,
        }
        self.games.push(outcome);
    }

    /// Save the report to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a report from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// One-paragraph text summary.
    pub fn summary(&self) -> String {
        format!(
            "{} {} - {} {} over {} game(s)",
            self.first,
            self.first_wins,
            self.second_wins,
            self.second,
            self.games.len()
        )
    }
}

/// Plays games between two [`Player`]s on fresh boards.
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play one game to completion. The player who cannot move, declines to
    /// move, or insists on an illegal move loses.
    pub fn play_game(&self, first: &mut dyn Player, second: &mut dyn Player) -> GameOutcome {
        let mut board = Board::new(self.config.height, self.config.width);
        let mut transcript = Vec::new();
        let mut first_to_move = true;

        loop {
            let (mover, waiter): (&mut dyn Player, &mut dyn Player) = if first_to_move {
                (&mut *first, &mut *second)
            } else {
                (&mut *second, &mut *first)
            };

            let Some(mv) = mover.propose_move(&board) else {
                break;
            };
            if !board.apply_move(&mv) {
                if self.config.verbose {
                    println!("{} proposed an illegal move; forfeiting.", mover.name());
                }
                break;
            }

            if let Some(text) = format_move(&mv) {
                if self.config.verbose {
                    println!("{}: {}", mover.name(), text);
                }
                transcript.push(text);
            }
            waiter.notify(&mv);
            first_to_move = !first_to_move;
        }

        let (winner, winner_name) = if first_to_move {
            (Winner::Second, second.name().to_string())
        } else {
            (Winner::First, first.name().to_string())
        };
        GameOutcome {
            winner,
            winner_name,
            moves: transcript.len() as u32,
            transcript,
        }
    }

    /// Play the configured number of games and aggregate the outcomes.
    pub fn run(&self, first: &mut dyn Player, second: &mut dyn Player) -> SimReport {
        let mut report = SimReport::new(first.name(), second.name());
        for game in 0..self.config.games {
            let outcome = self.play_game(first, second);
            if self.config.verbose {
                println!(
                    "Game {}/{}: {} wins after {} move(s)",
                    game + 1,
                    self.config.games,
                    outcome.winner_name,
                    outcome.moves
                );
            }
            report.record(outcome);
        }
        report
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
