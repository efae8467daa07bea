//! Integration tests for goban-puzzle
//!
//! These exercise the public API the way a puzzle server would: build a
//! board, submit moves for either color, read back the grid, legality and
//! score.

use goban_puzzle::board::{BoardState, Color, Move};
use goban_puzzle::error::{BoardError, IllegalReason};
use goban_puzzle::puzzle::Puzzle;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Build a closed board from its digit text, sized from the text itself.
fn setpos(text: &str) -> BoardState {
    setpos_open(text, [false; 4])
}

fn setpos_open(text: &str, open: [bool; 4]) -> BoardState {
    let height = text.lines().count();
    let width = text.lines().next().map_or(0, str::len);
    BoardState::from_text(height, width, &open, text).unwrap()
}

/// Apply moves in order, each with its own color.
fn play_all(board: &mut BoardState, moves: &[(Color, Move)]) {
    for &(color, mv) in moves {
        if let Err(err) = board.apply_move(mv, color) {
            panic!("{color} {mv} rejected: {err}");
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_construct_errors() {
    assert!(matches!(
        BoardState::new(0, 5, &[false; 4]),
        Err(BoardError::InvalidDimension { .. })
    ));
    assert!(matches!(
        BoardState::new(5, 1, &[false; 4]),
        Err(BoardError::InvalidDimension { .. })
    ));
    assert_eq!(
        BoardState::new(5, 5, &[]),
        Err(BoardError::InvalidBorderSpec(0))
    );
}

#[test]
fn test_invalid_color_codes() {
    assert_eq!(Color::try_from(0), Err(BoardError::InvalidColor("0".into())));
    assert_eq!(Color::try_from(3), Err(BoardError::InvalidColor("3".into())));
    assert_eq!(Color::try_from(1), Ok(Color::Black));
}

#[test]
fn test_text_round_trip() {
    let text = "0120\n2001\n0000\n";
    let board = BoardState::from_text(3, 4, &[true, false, false, true], text).unwrap();
    assert_eq!(board.to_text(), text);
    assert_eq!(board.grid().to_text(), text);
}

// =============================================================================
// Basic moves
// =============================================================================

#[test]
fn test_center_stone_on_empty_board() {
    let mut board = BoardState::closed(5, 5).unwrap();
    board.apply_move(Move::Play((2, 2)), Color::Black).unwrap();

    assert!(!board.legality_grid(Color::Black)[2][2], "occupied");
    assert!(!board.legality_grid(Color::White)[2][2], "occupied");
    assert!(board.legality_grid(Color::White)[2][3]);
    assert_eq!(board.grid().count(Color::Black), 1);
}

#[test]
fn test_no_turn_order_enforced() {
    let mut board = BoardState::closed(5, 5).unwrap();
    play_all(
        &mut board,
        &[
            (Color::Black, Move::Play((0, 0))),
            (Color::Black, Move::Play((0, 1))),
            (Color::Black, Move::Play((0, 2))),
        ],
    );
    assert_eq!(board.grid().count(Color::Black), 3);
    assert_eq!(board.move_history().len(), 3);
    assert_eq!(board.board_history().len(), 3);
}

#[test]
fn test_histories_record_pre_move_boards() {
    let mut board = BoardState::closed(3, 3).unwrap();
    play_all(
        &mut board,
        &[
            (Color::Black, Move::Play((1, 1))),
            (Color::White, Move::Pass),
            (Color::White, Move::Play((0, 0))),
        ],
    );
    let history = board.board_history();
    assert_eq!(history[0].to_text(), "000\n000\n000\n");
    assert_eq!(history[1].to_text(), "000\n010\n000\n");
    assert_eq!(history[2].to_text(), "000\n010\n000\n");
    assert_eq!(
        board.move_history(),
        &[Move::Play((1, 1)), Move::Pass, Move::Play((0, 0))]
    );
}

// =============================================================================
// Capture tests
// =============================================================================

#[test]
fn test_capture_single_stone_sets_ko() {
    // A white stone with black on three sides and one empty neighbor
    let mut board = setpos("00000\n00100\n01200\n00100\n00000\n");
    let outcome = board.apply_move(Move::Play((2, 3)), Color::Black).unwrap();

    assert_eq!(outcome.captured, vec![(2, 2)]);
    assert_eq!(board.grid().get((2, 2)), None);
    assert_eq!(board.captured(Color::Black), 1);
    let ko = board.ko().expect("single stone capture by a lone stone");
    assert_eq!(ko.point, (2, 2));
    assert_eq!(ko.color, Color::White);
}

#[test]
fn test_capture_corner() {
    let mut board = setpos("21\n00\n");
    board.apply_move(Move::Play((1, 0)), Color::Black).unwrap();
    assert_eq!(board.grid().get((0, 0)), None, "corner stone removed");
    assert_eq!(board.captured(Color::Black), 1);
}

#[test]
fn test_capture_group_on_edge() {
    let mut board = setpos("2200\n1100\n0000\n");
    let outcome = board.apply_move(Move::Play((0, 2)), Color::Black).unwrap();
    let mut captured = outcome.captured;
    captured.sort();
    assert_eq!(captured, vec![(0, 0), (0, 1)]);
    assert_eq!(board.captured(Color::Black), 2);
    assert!(board.ko().is_none(), "two stones taken");
}

#[test]
fn test_suicide_rejected() {
    let mut board = setpos("010\n101\n010\n");
    let before = board.clone();
    let err = board.apply_move(Move::Play((1, 1)), Color::White).unwrap_err();
    assert_eq!(err.illegal_reason(), Some(IllegalReason::Suicide));
    assert_eq!(board, before);
}

#[test]
fn test_multi_stone_suicide_rejected() {
    // White filling (0,2) would connect to (0,1) and leave the pair without liberties
    let mut board = setpos("1201\n0110\n0000\n");
    let err = board.apply_move(Move::Play((0, 2)), Color::White).unwrap_err();
    assert_eq!(err.illegal_reason(), Some(IllegalReason::Suicide));
}

// =============================================================================
// Ko tests
// =============================================================================

#[test]
fn test_ko_blocks_immediate_retake_only() {
    let mut board = setpos("01200\n12020\n01200\n00000\n");
    board.apply_move(Move::Play((1, 2)), Color::Black).unwrap();

    let err = board.apply_move(Move::Play((1, 1)), Color::White).unwrap_err();
    assert_eq!(err.illegal_reason(), Some(IllegalReason::Ko));
    assert!(!board.legality_grid(Color::White)[1][1]);
    // The restriction names white only
    assert!(board.is_legal(Move::Play((1, 1)), Color::Black));

    // White plays a ko threat, black answers, and the retake is allowed
    play_all(
        &mut board,
        &[
            (Color::White, Move::Play((3, 0))),
            (Color::Black, Move::Play((3, 1))),
        ],
    );
    let outcome = board.apply_move(Move::Play((1, 1)), Color::White).unwrap();
    assert_eq!(outcome.captured, vec![(1, 2)]);
    assert_eq!(board.ko().map(|k| (k.point, k.color)), Some(((1, 2), Color::Black)));
}

#[test]
fn test_pass_clears_ko() {
    let mut board = setpos("01200\n12020\n01200\n00000\n");
    board.apply_move(Move::Play((1, 2)), Color::Black).unwrap();
    assert!(board.ko().is_some());
    board.apply_move(Move::Pass, Color::White).unwrap();
    assert!(board.ko().is_none());
}

// =============================================================================
// Pass tests
// =============================================================================

#[test]
fn test_pass_move() {
    let mut board = setpos("010\n000\n000\n");
    let grid = board.grid().clone();

    assert!(board.is_legal(Move::Pass, Color::Black));
    board.apply_move(Move::Pass, Color::Black).unwrap();

    assert_eq!(board.grid(), &grid, "pass leaves the grid alone");
    assert_eq!(board.captured(Color::White), 1);
    assert_eq!(board.move_history().last(), Some(&Move::Pass));
    assert_eq!(board.board_history().len(), 1);
}

// =============================================================================
// Open edges
// =============================================================================

#[test]
fn test_open_edge_gives_no_liberty() {
    // White on the open top edge, black on both sides and below
    let mut board = setpos_open("120\n010\n000\n", [true, false, false, false]);
    let outcome = board.apply_move(Move::Play((0, 2)), Color::Black).unwrap();
    assert_eq!(outcome.captured, vec![(0, 1)]);
}

#[test]
fn test_open_top_and_bottom_score_zero() {
    let board = BoardState::new(5, 5, &[true, false, false, true]).unwrap();
    assert_eq!(board.score().as_pair(), (0, 0));
}

#[test]
fn test_territory_sealed_from_open_edge() {
    // Black wall along row 1 cuts row 2 off from the open top edge
    let board = setpos_open("0000\n1111\n0000\n", [true, false, false, false]);
    assert_eq!(board.score().as_pair(), (4, 0));
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_score_adds_captures_to_territory() {
    let mut board = setpos("00000\n00100\n01200\n00100\n00000\n");
    board.apply_move(Move::Play((2, 3)), Color::Black).unwrap();
    // 25 points, 4 black stones, 21 black territory, plus one prisoner
    assert_eq!(board.score().as_pair(), (22, 0));
}

#[test]
fn test_score_mixed_regions() {
    let board = setpos("01020\n01020\n01020\n");
    let score = board.score();
    assert_eq!(score.of(Color::Black), 3);
    assert_eq!(score.of(Color::White), 3);
}

// =============================================================================
// Clone and queries
// =============================================================================

#[test]
fn test_clone_independence() {
    let mut original = setpos("010\n000\n000\n");
    let mut copy = original.clone();

    copy.apply_move(Move::Play((1, 1)), Color::White).unwrap();
    assert_eq!(original.grid().get((1, 1)), None);
    assert!(original.move_history().is_empty());

    original.apply_move(Move::Pass, Color::Black).unwrap();
    assert_eq!(copy.captured(Color::White), 0);
    assert_eq!(copy.move_history(), &[Move::Play((1, 1))]);
}

#[test]
fn test_queries_leave_board_unchanged() {
    let mut board = setpos("01200\n12020\n01200\n00000\n");
    board.apply_move(Move::Play((1, 2)), Color::Black).unwrap();
    let before = board.clone();

    for _ in 0..3 {
        let _ = board.legality_grid(Color::White);
        let _ = board.legality_grid(Color::Black);
        let _ = board.score();
        let _ = board.is_legal(Move::Play((1, 1)), Color::White);
    }
    assert_eq!(board, before);
}

// =============================================================================
// Puzzle records
// =============================================================================

#[test]
fn test_puzzle_json_round_trip() {
    let mut board = setpos_open("01200\n12020\n01200\n00000\n", [false, false, true, true]);
    board.apply_move(Move::Play((1, 2)), Color::Black).unwrap();
    board.apply_move(Move::Pass, Color::White).unwrap();

    let record = Puzzle::from_board(&board, Color::Black);
    let json = serde_json::to_string(&record).unwrap();
    let loaded: Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.build().unwrap(), board);
}

#[test]
fn test_puzzle_minimal_json() {
    let json = r#"{ "height": 2, "width": 3, "board": "010\n002\n" }"#;
    let puzzle: Puzzle = serde_json::from_str(json).unwrap();
    let board = puzzle.build().unwrap();
    assert_eq!(board.open_edges(), [false; 4]);
    assert_eq!(puzzle.player().unwrap(), Color::Black);
    assert_eq!(puzzle.opponent().unwrap(), Color::White);
    assert_eq!(board.grid().get((1, 2)), Some(Color::White));
}
