//! Board rules trait and terminal results.
//!
//! Board games implement `BoardRules` to define:
//! - The starting position
//! - Which moves a selected piece has
//! - How a move changes the board
//!
//! Implementations are pure: no I/O, no interior state, and `apply_move`
//! returns a new board instead of mutating the old one, so the same rules
//! value can drive a client session and an authoritative mirror alike.

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, BoardPiece};
use crate::core::moves::Move;
use crate::core::side::{Color, Seat, SeatMap};
use crate::core::square::Square;

/// Who won a finished game, from this engine instance's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The local participant won.
    Local,
    /// The remote peer won.
    Peer,
    /// Nobody won.
    Draw,
}

impl Winner {
    /// The winner for a seat.
    #[must_use]
    pub const fn seat(seat: Seat) -> Self {
        match seat {
            Seat::Local => Self::Local,
            Seat::Peer => Self::Peer,
        }
    }

    /// The winning seat, or `None` for a draw.
    #[must_use]
    pub const fn as_seat(self) -> Option<Seat> {
        match self {
            Self::Local => Some(Seat::Local),
            Self::Peer => Some(Seat::Peer),
            Self::Draw => None,
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A side reached the winning number of rounds.
    #[serde(rename = "best_of_5")]
    BestOfFive,
    /// A side resigned.
    Resignation,
    /// The peer left or disconnected.
    OpponentLeft,
    /// The local participant left the game.
    Abandoned,
    /// Both sides agreed to a draw.
    DrawAgreed,
    /// The side to move had no moves left.
    NoMovesLeft,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Winner,
    pub reason: EndReason,

    /// Final round score, for games that keep one.
    #[serde(default)]
    pub score: Option<SeatMap<u32>>,
}

impl GameResult {
    /// A result without a score.
    #[must_use]
    pub const fn new(winner: Winner, reason: EndReason) -> Self {
        Self {
            winner,
            reason,
            score: None,
        }
    }

    /// Attach a final score.
    #[must_use]
    pub fn with_score(mut self, score: SeatMap<u32>) -> Self {
        self.score = Some(score);
        self
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        self.winner.as_seat() == Some(seat)
    }
}

/// Rules of a two-colour 8x8 board game.
///
/// ## Implementation Notes
///
/// - `generate_moves`: pseudo-legal moves of whatever piece stands on
///   `from`; empty if the square is empty. Callers gate on colour and turn.
/// - `apply_move`: trusts its input; a move from an empty square returns
///   the board unchanged.
/// - `winner_after`: only games that detect a finished position override it.
pub trait BoardRules {
    /// Piece type placed on this game's board.
    type Piece: BoardPiece;

    /// The starting position.
    fn initial_board(&self) -> Board<Self::Piece>;

    /// All moves of the piece on `from`.
    fn generate_moves(&self, board: &Board<Self::Piece>, from: Square) -> Vec<Move>;

    /// The board after `mv`.
    fn apply_move(&self, board: &Board<Self::Piece>, mv: &Move) -> Board<Self::Piece>;

    /// Colour that wins because of the position after a move by `mover`,
    /// if the game detects one.
    fn winner_after(&self, _board: &Board<Self::Piece>, _mover: Color) -> Option<Color> {
        None
    }

    // === Convenience Methods ===

    /// Enumerate the moves of every piece of `color`.
    fn moves_for(&self, board: &Board<Self::Piece>, color: Color) -> Vec<Move> {
        board
            .squares_of(color)
            .flat_map(|sq| self.generate_moves(board, sq))
            .collect()
    }

    /// The generated move from `from` to `to`, if there is one.
    fn find_move(&self, board: &Board<Self::Piece>, from: Square, to: Square) -> Option<Move> {
        self.generate_moves(board, from)
            .into_iter()
            .find(|mv| mv.to == to)
    }
}
