//! Hold That Line CLI
//!
//! Run engine-vs-engine simulations or play against the engine.

use std::env;
use std::path::Path;
use std::str::FromStr;

use arena::{HumanPlayer, Session, SessionConfig, SimReport};
use heuristic_engine::HeuristicEngine;
use htl_core::Player;

fn print_usage() {
    println!("Hold That Line arena");
    println!();
    println!("Usage:");
    println!("  arena sim [--games N] [--height H] [--width W] [--seed S]");
    println!("            [--config FILE] [--out FILE] [--quiet]");
    println!("  arena play [--height H] [--width W] [--second]");
    println!();
    println!("Modes:");
    println!("  sim           - engine vs engine, aggregate report");
    println!("  play          - you vs the engine on the console");
    println!();
    println!("Examples:");
    println!("  arena sim --games 20 --seed 1 --out report.json");
    println!("  arena play --height 5 --width 5 --second");
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("sim") => run_sim(&args[1..]),
        Some("play") => run_play(&args[1..]),
        _ => print_usage(),
    }
}

fn flag_value<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn load_config(args: &[String]) -> Result<SessionConfig, String> {
    let mut config = match flag_value::<String>(args, "--config") {
        Some(path) => SessionConfig::load(Path::new(&path))?,
        None => SessionConfig::default(),
    };
    if let Some(games) = flag_value(args, "--games") {
        config.games = games;
    }
    if let Some(height) = flag_value(args, "--height") {
        config.height = height;
    }
    if let Some(width) = flag_value(args, "--width") {
        config.width = width;
    }
    if let Some(seed) = flag_value(args, "--seed") {
        config.seed = Some(seed);
    }
    if has_flag(args, "--quiet") {
        config.verbose = false;
    }
    if config.height < 1 || config.width < 1 {
        return Err("board dimensions must be at least 1x1".to_string());
    }
    Ok(config)
}

fn engine(seed: Option<u64>, seat: u64) -> HeuristicEngine {
    match seed {
        // Offset so the two seats do not mirror each other's choices.
        Some(s) => HeuristicEngine::seeded(s.wrapping_add(seat)),
        None => HeuristicEngine::new(),
    }
}

fn run_sim(args: &[String]) {
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut first = engine(config.seed, 0);
    let mut second = engine(config.seed, 1);
    let session = Session::new(config);
    let report: SimReport = session.run(&mut first, &mut second);

    println!("{}", report.summary());
    if let Some(out) = flag_value::<String>(args, "--out") {
        match report.save(Path::new(&out)) {
            Ok(()) => println!("Report written to {}", out),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn run_play(args: &[String]) {
    let config = match load_config(args) {
        Ok(mut config) => {
            config.games = 1;
            // The console player prints its own view of the game.
            config.verbose = false;
            config
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let engine_opens = has_flag(args, "--second");

    let mut human = HumanPlayer;
    let mut machine = engine(config.seed, 0);
    let session = Session::new(config);

    let outcome = if engine_opens {
        session.play_game(&mut machine, &mut human)
    } else {
        session.play_game(&mut human, &mut machine)
    };
    println!("{} wins.", outcome.winner_name);
}
