//! Console-driven player.

use std::io::{self, BufRead, Write};

use htl_core::{legal_moves, Board, Player, Segment};

use crate::notation::{format_move, parse_move};

/// A human at the terminal.
///
/// Prompts until the input parses as a move the board accepts; an empty
/// legal-move list (or closed stdin) concedes.
pub struct HumanPlayer;

impl HumanPlayer {
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl Player for HumanPlayer {
    fn propose_move(&mut self, board: &Board) -> Option<Segment> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            println!("No legal moves left for you.");
            return None;
        }

        print_position(board, &moves);

        loop {
            print!("Enter move as (r1,c1),(r2,c2): ");
            let _ = io::stdout().flush();

            let line = self.read_line()?;
            let Some(mv) = parse_move(&line) else {
                println!("Could not read that as a move.");
                continue;
            };
            if let Some(ends) = board.endpoints() {
                if !ends.contains(&mv.start()) {
                    println!("Moves must start from a live endpoint.");
                    continue;
                }
            }
            if !board.is_legal_move(&mv) {
                println!("That move crosses a drawn line or leaves the board.");
                continue;
            }
            return Some(mv);
        }
    }

    fn notify(&mut self, mv: &Segment) {
        if let Some(text) = format_move(mv) {
            println!("Engine plays {}", text);
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

fn print_position(board: &Board, moves: &[Segment]) {
    println!();
    match board.endpoints() {
        None => println!("Board is empty: any two distinct points form a move."),
        Some(ends) => {
            println!("Live endpoints: {} and {}", ends[0], ends[1]);
            let lines: Vec<String> = board
                .segments()
                .iter()
                .map(|s| format!("{}-{}", s.start(), s.end()))
                .collect();
            println!("Drawn lines: {}", lines.join(", "));
            let options: Vec<String> = moves.iter().filter_map(format_move).collect();
            println!("Legal moves: {}", options.join(" "));
        }
    }
}
