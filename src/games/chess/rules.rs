//! Pseudo-legal chess move generation and application.
//!
//! Moves follow piece movement rules only: there is no check detection,
//! castling or en passant, and a generated move may leave the mover's king
//! attacked. Captures happen by landing on an opponent piece.

use crate::core::board::Board;
use crate::core::config::{ChessConfig, PromotionRule};
use crate::core::moves::Move;
use crate::core::side::Color;
use crate::core::square::Square;
use crate::rules::BoardRules;

use super::piece::{ChessKind, ChessPiece};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

const BACK_RANK: [ChessKind; 8] = [
    ChessKind::Rook,
    ChessKind::Knight,
    ChessKind::Bishop,
    ChessKind::Queen,
    ChessKind::King,
    ChessKind::Bishop,
    ChessKind::Knight,
    ChessKind::Rook,
];

/// Chess rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChessRules {
    config: ChessConfig,
}

impl ChessRules {
    #[must_use]
    pub fn new(config: ChessConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ChessConfig {
        &self.config
    }

    /// Row pawns of `color` start on.
    #[must_use]
    pub const fn pawn_home_row(color: Color) -> u8 {
        match color {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    fn pawn_moves(board: &Board<ChessPiece>, from: Square, color: Color, out: &mut Vec<Move>) {
        let dir = color.forward();

        if let Some(one) = from.offset(dir, 0).filter(|sq| board.is_empty(*sq)) {
            out.push(Move::new(from, one));

            if from.row() == Self::pawn_home_row(color) {
                if let Some(two) = from.offset(2 * dir, 0).filter(|sq| board.is_empty(*sq)) {
                    out.push(Move::new(from, two));
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if board.holds_opponent(target, color) {
                    out.push(Move::new(from, target));
                }
            }
        }
    }

    fn ray_moves(
        board: &Board<ChessPiece>,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        out: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut cursor = from.offset(dr, dc);
            while let Some(target) = cursor {
                if board.is_empty(target) {
                    out.push(Move::new(from, target));
                } else {
                    if board.holds_opponent(target, color) {
                        out.push(Move::new(from, target));
                    }
                    break;
                }
                cursor = target.offset(dr, dc);
            }
        }
    }

    fn step_moves(
        board: &Board<ChessPiece>,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        out: &mut Vec<Move>,
    ) {
        out.extend(
            offsets
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|&target| !board.holds_own(target, color))
                .map(|target| Move::new(from, target)),
        );
    }
}

impl BoardRules for ChessRules {
    type Piece = ChessPiece;

    fn initial_board(&self) -> Board<ChessPiece> {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for (color, back_row) in [(Color::Black, 0), (Color::White, 7)] {
                if let Some(sq) = Square::new(back_row, col) {
                    board.place(sq, ChessPiece::new(color, kind));
                }
                if let Some(sq) = Square::new(Self::pawn_home_row(color), col) {
                    board.place(sq, ChessPiece::new(color, ChessKind::Pawn));
                }
            }
        }
        board
    }

    fn generate_moves(&self, board: &Board<ChessPiece>, from: Square) -> Vec<Move> {
        let Some(piece) = board.get(from) else {
            return Vec::new();
        };

        let color = piece.color;
        let mut moves = Vec::new();
        match piece.kind {
            ChessKind::Pawn => Self::pawn_moves(board, from, color, &mut moves),
            ChessKind::Rook => Self::ray_moves(board, from, color, &ROOK_DIRECTIONS, &mut moves),
            ChessKind::Bishop => Self::ray_moves(board, from, color, &BISHOP_DIRECTIONS, &mut moves),
            ChessKind::Queen => {
                Self::ray_moves(board, from, color, &ROOK_DIRECTIONS, &mut moves);
                Self::ray_moves(board, from, color, &BISHOP_DIRECTIONS, &mut moves);
            }
            ChessKind::Knight => Self::step_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves),
            ChessKind::King => Self::step_moves(board, from, color, &KING_OFFSETS, &mut moves),
        }
        moves
    }

    fn apply_move(&self, board: &Board<ChessPiece>, mv: &Move) -> Board<ChessPiece> {
        let mut next = board.clone();
        let Some(mut piece) = next.take(mv.from) else {
            return next;
        };

        if self.config.promotion == PromotionRule::AutoQueen
            && piece.kind == ChessKind::Pawn
            && mv.to.row() == piece.color.far_row()
        {
            piece.kind = ChessKind::Queen;
        }

        // Landing overwrites whatever stood on the target square.
        next.place(mv.to, piece);
        next
    }
}
