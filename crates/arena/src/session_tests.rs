use super::*;
use htl_core::{Coord, Segment};

fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
    Segment::new(Coord::new(a.0, a.1), Coord::new(b.0, b.1)).unwrap()
}

/// Plays from a fixed list, then concedes.
struct Scripted {
    name: &'static str,
    moves: Vec<Segment>,
    next: usize,
}

impl Scripted {
    fn new(name: &'static str, moves: Vec<Segment>) -> Self {
        Self {
            name,
            moves,
            next: 0,
        }
    }
}

impl Player for Scripted {
    fn propose_move(&mut self, _board: &Board) -> Option<Segment> {
        let mv = self.moves.get(self.next).copied();
        self.next += 1;
        mv
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn quiet_config() -> SessionConfig {
    SessionConfig {
        verbose: false,
        ..SessionConfig::default()
    }
}

#[test]
fn player_without_a_move_loses() {
    // On 1x2 the opening move exhausts the board; the second player is
    // immediately stuck.
    let config = SessionConfig {
        height: 1,
        width: 2,
        ..quiet_config()
    };
    let session = Session::new(config);

    let mut first = Scripted::new("a", vec![seg((0, 0), (0, 1))]);
    let mut second = Scripted::new("b", vec![]);
    let outcome = session.play_game(&mut first, &mut second);

    assert_eq!(outcome.winner, Winner::First);
    assert_eq!(outcome.winner_name, "a");
    assert_eq!(outcome.moves, 1);
    assert_eq!(outcome.transcript, vec!["(0,0),(0,1)"]);
}

#[test]
fn illegal_proposal_forfeits() {
    let session = Session::new(quiet_config());

    let mut first = Scripted::new("a", vec![seg((0, 0), (0, 4))]);
    let mut second = Scripted::new("b", vec![]);
    let outcome = session.play_game(&mut first, &mut second);

    assert_eq!(outcome.winner, Winner::Second);
    assert_eq!(outcome.moves, 0);
}

#[test]
fn transcript_replays_legally() {
    let config = SessionConfig {
        height: 1,
        width: 2,
        ..quiet_config()
    };
    let session = Session::new(config);

    let mut first = Scripted::new("a", vec![seg((0, 0), (0, 1))]);
    let mut second = Scripted::new("b", vec![]);
    let outcome = session.play_game(&mut first, &mut second);

    let mut board = Board::new(1, 2);
    for text in &outcome.transcript {
        let mv = crate::notation::parse_move(text).unwrap();
        assert!(board.apply_move(&mv));
    }
}

#[test]
fn report_aggregates_wins_by_seat() {
    let mut report = SimReport::new("a", "b");
    report.record(GameOutcome {
        winner: Winner::First,
        winner_name: "a".to_string(),
        moves: 1,
        transcript: vec!["(0,0),(0,1)".to_string()],
    });
    report.record(GameOutcome {
        winner: Winner::Second,
        winner_name: "b".to_string(),
        moves: 0,
        transcript: Vec::new(),
    });

    assert_eq!(report.first_wins, 1);
    assert_eq!(report.second_wins, 1);
    assert_eq!(report.summary(), "a 1 - 1 b over 2 game(s)");
}

#[test]
fn config_defaults_fill_missing_toml_keys() {
    let config: SessionConfig = toml::from_str("games = 5\nseed = 9").unwrap();
    assert_eq!(config.games, 5);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.height, 4);
    assert_eq!(config.width, 4);
    assert!(config.verbose);
}
