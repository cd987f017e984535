//! Russian checkers move generation with forced capture and promotion.
//!
//! Each generated capture jumps exactly one opponent piece; a turn never
//! chains several jumps. Men move and capture diagonally forward, kings in
//! all four diagonal directions, one square at a time.

use crate::core::board::Board;
use crate::core::config::{CaptureRule, CheckersConfig};
use crate::core::moves::Move;
use crate::core::side::Color;
use crate::core::square::Square;
use crate::rules::BoardRules;

use super::piece::CheckersPiece;

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rows each side's men start on.
const STARTING_ROWS: [(Color, [u8; 3]); 2] = [(Color::Black, [0, 1, 2]), (Color::White, [5, 6, 7])];

/// Russian checkers rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckersRules {
    config: CheckersConfig,
}

impl CheckersRules {
    #[must_use]
    pub fn new(config: CheckersConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CheckersConfig {
        &self.config
    }

    fn directions(piece: CheckersPiece) -> impl Iterator<Item = (i8, i8)> {
        let forward = piece.color.forward();
        DIAGONALS
            .into_iter()
            .filter(move |&(dr, _)| piece.is_king() || dr == forward)
    }

    /// Single-jump captures of the piece on `from`.
    #[must_use]
    pub fn captures(&self, board: &Board<CheckersPiece>, from: Square) -> Vec<Move> {
        let Some(piece) = board.get(from) else {
            return Vec::new();
        };

        Self::directions(piece)
            .filter_map(|(dr, dc)| {
                let over = from.offset(dr, dc)?;
                let landing = from.offset(2 * dr, 2 * dc)?;
                (board.holds_opponent(over, piece.color) && board.is_empty(landing))
                    .then(|| Move::jump(from, landing, over))
            })
            .collect()
    }

    /// Check if any piece of `color` has a capture.
    #[must_use]
    pub fn can_capture(&self, board: &Board<CheckersPiece>, color: Color) -> bool {
        board
            .squares_of(color)
            .any(|sq| !self.captures(board, sq).is_empty())
    }

    fn quiet_moves(board: &Board<CheckersPiece>, from: Square, piece: CheckersPiece) -> Vec<Move> {
        Self::directions(piece)
            .filter_map(|(dr, dc)| from.offset(dr, dc))
            .filter(|&to| board.is_empty(to))
            .map(|to| Move::new(from, to))
            .collect()
    }
}

impl BoardRules for CheckersRules {
    type Piece = CheckersPiece;

    fn initial_board(&self) -> Board<CheckersPiece> {
        let mut board = Board::empty();
        for (color, rows) in STARTING_ROWS {
            for sq in Square::all().filter(|s| s.is_dark() && rows.contains(&s.row())) {
                board.place(sq, CheckersPiece::man(color));
            }
        }
        board
    }

    fn generate_moves(&self, board: &Board<CheckersPiece>, from: Square) -> Vec<Move> {
        let Some(piece) = board.get(from) else {
            return Vec::new();
        };

        let captures = self.captures(board, from);
        if !captures.is_empty() {
            return captures;
        }

        if self.config.capture_rule == CaptureRule::Global && self.can_capture(board, piece.color) {
            return Vec::new();
        }

        Self::quiet_moves(board, from, piece)
    }

    fn apply_move(&self, board: &Board<CheckersPiece>, mv: &Move) -> Board<CheckersPiece> {
        let mut next = board.clone();
        let Some(mut piece) = next.take(mv.from) else {
            return next;
        };

        for &captured in &mv.captured {
            next.clear(captured);
        }

        if !piece.is_king() && mv.to.row() == piece.color.far_row() {
            piece = piece.crowned();
        }

        next.place(mv.to, piece);
        next
    }

    /// The mover wins once the other side has no move left, including
    /// having no pieces.
    fn winner_after(&self, board: &Board<CheckersPiece>, mover: Color) -> Option<Color> {
        let defender = mover.opposite();
        self.moves_for(board, defender).is_empty().then_some(mover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::BoardPiece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn destinations(moves: &[Move]) -> Vec<Square> {
        let mut to: Vec<_> = moves.iter().map(|m| m.to).collect();
        to.sort();
        to
    }

    #[test]
    fn test_initial_board_layout() {
        let board = CheckersRules::default().initial_board();
        assert_eq!(
            board.to_rows(),
            vec![
                ".b.b.b.b", "b.b.b.b.", ".b.b.b.b", "........", "........", "w.w.w.w.", ".w.w.w.w",
                "w.w.w.w.",
            ]
        );
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
    }

    #[test]
    fn test_black_man_quiet_moves() {
        let rules = CheckersRules::default();
        let board = rules.initial_board();

        let moves = rules.generate_moves(&board, sq(2, 3));
        assert_eq!(destinations(&moves), vec![sq(3, 2), sq(3, 4)]);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_back_row_man_is_blocked() {
        let rules = CheckersRules::default();
        let board = rules.initial_board();
        assert!(rules.generate_moves(&board, sq(7, 0)).is_empty());
    }

    #[test]
    fn test_capture_suppresses_quiet_moves() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "........", "........", "...b....", "..w.....", "........", "........",
            "........",
        ])
        .unwrap();

        let moves = rules.generate_moves(&board, sq(4, 2));
        assert_eq!(moves, vec![Move::jump(sq(4, 2), sq(2, 4), sq(3, 3))]);
    }

    #[test]
    fn test_man_does_not_capture_backwards() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "........", "........", "........", "..w.....", "...b....", "........",
            "........",
        ])
        .unwrap();

        let moves = rules.generate_moves(&board, sq(4, 2));
        assert!(moves.iter().all(|m| !m.is_capture()));
        assert_eq!(destinations(&moves), vec![sq(3, 1), sq(3, 3)]);
    }

    #[test]
    fn test_king_moves_and_captures_backwards() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "........", "........", "........", "..W.....", "...b....", "........",
            "........",
        ])
        .unwrap();

        let moves = rules.generate_moves(&board, sq(4, 2));
        assert_eq!(moves, vec![Move::jump(sq(4, 2), sq(6, 4), sq(5, 3))]);

        let lone = Board::empty().with_piece(sq(4, 2), CheckersPiece::king(Color::White));
        assert_eq!(rules.generate_moves(&lone, sq(4, 2)).len(), 4);
    }

    #[test]
    fn test_capture_needs_empty_landing_on_board() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "........", "....b...", "...b....", "..w.....", "........", "........",
            "........",
        ])
        .unwrap();
        assert!(rules.captures(&board, sq(4, 2)).is_empty());

        // jumped piece at the edge: landing would be off the board
        let edge = Board::from_rows(&[
            "........", "b.......", ".w......", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();
        assert!(rules.captures(&edge, sq(2, 1)).is_empty());
    }

    #[test]
    fn test_per_piece_rule_allows_other_piece() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "........", "........", "...b....", "..w.....", "........", "......w.",
            "........",
        ])
        .unwrap();

        assert_eq!(rules.generate_moves(&board, sq(6, 6)).len(), 2);
    }

    #[test]
    fn test_global_rule_blocks_non_capturing_piece() {
        let rules = CheckersRules::new(CheckersConfig::default().with_capture_rule(CaptureRule::Global));
        let board = Board::from_rows(&[
            "........", "........", "........", "...b....", "..w.....", "........", "......w.",
            "........",
        ])
        .unwrap();

        assert!(rules.generate_moves(&board, sq(6, 6)).is_empty());
        assert_eq!(rules.generate_moves(&board, sq(4, 2)).len(), 1);
    }

    #[test]
    fn test_apply_capture_removes_jumped_piece() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "........", "........", "...b....", "..w.....", "........", "........",
            "........",
        ])
        .unwrap();

        let next = rules.apply_move(&board, &Move::jump(sq(4, 2), sq(2, 4), sq(3, 3)));
        assert!(next.is_empty(sq(4, 2)));
        assert!(next.is_empty(sq(3, 3)));
        assert_eq!(next.get(sq(2, 4)), Some(CheckersPiece::man(Color::White)));
    }

    #[test]
    fn test_promotion_on_far_row() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "..b.....", ".w......", "........", "........", "........", "......b.",
            "........",
        ])
        .unwrap();

        let next = rules.apply_move(&board, &Move::jump(sq(2, 1), sq(0, 3), sq(1, 2)));
        assert_eq!(next.get(sq(0, 3)).map(|p| p.symbol()), Some('W'));
        assert!(next.is_empty(sq(1, 2)));

        let next = rules.apply_move(&next, &Move::new(sq(6, 6), sq(7, 7)));
        assert_eq!(next.get(sq(7, 7)).map(|p| p.symbol()), Some('B'));
    }

    #[test]
    fn test_winner_after_last_piece_taken() {
        let rules = CheckersRules::default();
        let board = Board::from_rows(&[
            "........", "........", "........", "...b....", "..w.....", "........", "........",
            "........",
        ])
        .unwrap();

        assert_eq!(rules.winner_after(&board, Color::White), None);

        let next = rules.apply_move(&board, &Move::jump(sq(4, 2), sq(2, 4), sq(3, 3)));
        assert_eq!(rules.winner_after(&next, Color::White), Some(Color::White));
    }
}
