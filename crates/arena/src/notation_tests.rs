use super::*;

fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
    Segment::new(Coord::new(a.0, a.1), Coord::new(b.0, b.1)).unwrap()
}

#[test]
fn formats_grid_moves() {
    assert_eq!(
        format_move(&seg((0, 0), (3, 3))).as_deref(),
        Some("(0,0),(3,3)")
    );
}

#[test]
fn midpoint_halves_have_no_text_form() {
    let mut board = htl_core::Board::new(4, 4);
    assert!(board.apply_move(&seg((0, 0), (3, 3))));
    assert_eq!(format_move(&board.segments()[0]), None);
}

#[test]
fn parse_roundtrips_format() {
    let mv = seg((2, 1), (0, 3));
    let text = format_move(&mv).unwrap();
    assert_eq!(parse_move(&text), Some(mv));
}

#[test]
fn parse_tolerates_whitespace() {
    assert_eq!(parse_move(" ( 0 , 2 ) , ( 1 , 1 ) "), Some(seg((0, 2), (1, 1))));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse_move(""), None);
    assert_eq!(parse_move("0,2,1,1"), None);
    assert_eq!(parse_move("(0,2),(1)"), None);
    assert_eq!(parse_move("(0,2),(1,1) extra"), None);
    assert_eq!(parse_move("(a,b),(c,d)"), None);
}

#[test]
fn parse_rejects_zero_length_moves() {
    assert_eq!(parse_move("(1,1),(1,1)"), None);
}

#[test]
fn parse_accepts_negative_coordinates() {
    // Bounds are the board's concern, not the parser's.
    assert_eq!(parse_move("(-1,0),(2,2)"), Some(seg((-1, 0), (2, 2))));
}
