//! Chess rules and chess sessions.

use duel_engine::core::{Board, BoardPiece, ChessConfig, Color, Move, PromotionRule, Rejection, Square};
use duel_engine::games::chess::{ChessKind, ChessPiece, ChessRules};
use duel_engine::rules::BoardRules;
use duel_engine::session::{BoardSession, ClickOutcome, MovePayload, Session};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

// =============================================================================
// Initial Position
// =============================================================================

#[test]
fn test_every_pawn_has_two_forward_moves() {
    let rules = ChessRules::default();
    let board = rules.initial_board();

    for (color, row) in [(Color::White, 6), (Color::Black, 1)] {
        for col in 0..8 {
            let from = sq(row, col);
            let moves = rules.generate_moves(&board, from);
            assert_eq!(moves.len(), 2, "{color} pawn on {from}");
            assert!(moves.iter().all(|m| m.to.col() == col && !m.is_capture()));
        }
    }
}

#[test]
fn test_knights_have_two_jumps() {
    let rules = ChessRules::default();
    let board = rules.initial_board();

    for from in [sq(7, 1), sq(7, 6), sq(0, 1), sq(0, 6)] {
        assert_eq!(rules.generate_moves(&board, from).len(), 2, "knight on {from}");
    }
}

#[test]
fn test_back_rank_pieces_other_than_knights_are_blocked() {
    let rules = ChessRules::default();
    let board = rules.initial_board();

    for col in [0, 2, 3, 4, 5, 7] {
        assert!(rules.generate_moves(&board, sq(7, col)).is_empty());
        assert!(rules.generate_moves(&board, sq(0, col)).is_empty());
    }
    assert_eq!(rules.moves_for(&board, Color::White).len(), 20);
    assert_eq!(rules.moves_for(&board, Color::Black).len(), 20);
}

#[test]
fn test_no_destination_holds_own_piece() {
    let rules = ChessRules::default();
    let mut board = rules.initial_board();
    // open the position up a little
    for mv in [
        Move::new(sq(6, 4), sq(4, 4)),
        Move::new(sq(1, 3), sq(3, 3)),
        Move::new(sq(7, 5), sq(4, 2)),
        Move::new(sq(0, 2), sq(4, 6)),
    ] {
        board = rules.apply_move(&board, &mv);
    }

    for color in Color::ALL {
        for mv in rules.moves_for(&board, color) {
            assert!(!board.holds_own(mv.to, color), "{mv} lands on own piece");
        }
    }
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_pawn_diagonal_capture_only_on_opponent() {
    let rules = ChessRules::default();
    let board = Board::from_rows(&[
        "........", "........", "........", "........", "...p.N..", "....P...", "........",
        "........",
    ])
    .unwrap();

    let moves = rules.generate_moves(&board, sq(5, 4));
    let targets: Vec<_> = moves.iter().map(|m| m.to).collect();

    assert!(targets.contains(&sq(4, 3)), "capture on the black pawn");
    assert!(!targets.contains(&sq(4, 5)), "no capture on own knight");
    assert!(targets.contains(&sq(4, 4)));
    // off the home row: no double step
    assert_eq!(targets.len(), 2);
}

#[test]
fn test_capture_replaces_target() {
    let rules = ChessRules::default();
    let board = Board::from_rows(&[
        "........", "........", "........", "...q....", "........", "........", "........",
        "...R....",
    ])
    .unwrap();

    let mv = rules.find_move(&board, sq(7, 3), sq(3, 3)).unwrap();
    let next = rules.apply_move(&board, &mv);

    assert_eq!(next.get(sq(3, 3)), Some(ChessPiece::white(ChessKind::Rook)));
    assert!(next.is_empty(sq(7, 3)));
    assert_eq!(next.count(Color::Black), 0);
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_e2_e4_opening() {
    let mut session = BoardSession::new(ChessRules::default(), Color::White);
    let pawn = session.board().get(sq(6, 4));

    session.select(sq(6, 4), true).unwrap();
    session.move_selected(sq(4, 4), true).unwrap();

    assert!(session.board().is_empty(sq(6, 4)));
    assert_eq!(session.board().get(sq(4, 4)), pawn);
    assert!(session.board().is_empty(sq(5, 4)));
}

#[test]
fn test_black_side_session() {
    let mut session = BoardSession::new(ChessRules::default(), Color::Black);

    assert_eq!(session.select(sq(6, 4), true), Err(Rejection::IllegalSelection(sq(6, 4))));

    session.apply_remote(&Move::new(sq(6, 4), sq(4, 4))).unwrap();
    let outcome = session.click(sq(1, 3), true).unwrap();
    assert!(matches!(outcome, ClickOutcome::Selected { .. }));

    let outcome = session.click(sq(3, 3), true).unwrap();
    let ClickOutcome::Moved(payload) = outcome else {
        panic!("expected a move");
    };
    assert_eq!(payload.to_move(), Move::new(sq(1, 3), sq(3, 3)));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_turn_oracle_is_trusted() {
    let mut session = BoardSession::new(ChessRules::default(), Color::White);

    assert_eq!(session.click(sq(6, 4), false), Err(Rejection::NotYourTurn));
    assert!(session.selection().is_none());
}

#[test]
fn test_payload_board_uses_piece_letters() {
    let mut session = BoardSession::new(ChessRules::default(), Color::White);
    session.select(sq(6, 4), true).unwrap();
    let payload = session.move_selected(sq(4, 4), true).unwrap();

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["board"][0][0], "r");
    assert_eq!(json["board"][7][4], "K");
    assert_eq!(json["board"][4][4], "P");
    assert_eq!(json["board"][6][4], " ");
    assert!(json.get("captures").is_none());

    let back: MovePayload<ChessPiece> = serde_json::from_value(json).unwrap();
    assert_eq!(&back.board, session.board());
}

#[test]
fn test_payload_with_unknown_letter_is_rejected() {
    let mut rows = vec![vec![" ".to_string(); 8]; 8];
    rows[0][0] = "x".to_string();
    let json = serde_json::json!({
        "from": {"row": 6, "col": 4},
        "to": {"row": 4, "col": 4},
        "board": rows,
    });

    assert!(serde_json::from_value::<MovePayload<ChessPiece>>(json).is_err());
}

// =============================================================================
// Promotion
// =============================================================================

fn pawn_on_seventh() -> Board<ChessPiece> {
    Board::from_rows(&[
        "........", "P.......", "........", "........", "........", "........", "........",
        "....k...",
    ])
    .unwrap()
}

#[test]
fn test_pawn_stays_pawn_by_default() {
    let mut session = BoardSession::from_board(ChessRules::default(), pawn_on_seventh(), Color::White);
    session.select(sq(1, 0), true).unwrap();
    session.move_selected(sq(0, 0), true).unwrap();

    assert_eq!(session.board().get(sq(0, 0)).map(|p| p.symbol()), Some('P'));
    assert!(!session.is_over());
}

#[test]
fn test_auto_queen() {
    let rules = ChessRules::new(ChessConfig::default().with_promotion(PromotionRule::AutoQueen));
    let mut session = BoardSession::from_board(rules, pawn_on_seventh(), Color::White);
    session.select(sq(1, 0), true).unwrap();
    let payload = session.move_selected(sq(0, 0), true).unwrap();

    assert_eq!(payload.board.get(sq(0, 0)), Some(ChessPiece::white(ChessKind::Queen)));
}
