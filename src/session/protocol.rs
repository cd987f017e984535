//! Payloads handed to and received from the transport.
//!
//! The transport wraps these in its own envelope; only the `data` part is
//! modelled here. Choices travel as [`ChoicePayload`].

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, BoardPiece};
use crate::core::moves::Move;
use crate::core::square::Square;

pub use crate::games::rps::ChoicePayload;

/// A board move as sent to the peer, with the mover's board after the move.
///
/// ```
/// use duel_engine::games::chess::{ChessPiece, ChessRules};
/// use duel_engine::rules::BoardRules;
/// use duel_engine::session::MovePayload;
/// use duel_engine::core::{Move, Square};
///
/// let rules = ChessRules::default();
/// let mv = Move::new(Square::new(6, 4).unwrap(), Square::new(4, 4).unwrap());
/// let board = rules.apply_move(&rules.initial_board(), &mv);
///
/// let json = serde_json::to_string(&MovePayload::new(&mv, board)).unwrap();
/// let back: MovePayload<ChessPiece> = serde_json::from_str(&json).unwrap();
/// assert_eq!(back.to_move(), mv);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: BoardPiece", deserialize = "P: BoardPiece"))]
pub struct MovePayload<P> {
    pub from: Square,
    pub to: Square,

    /// Jumped squares; absent for quiet moves and chess captures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captures: Vec<Square>,

    /// Board after the move, 8 rows of 8 one-character strings.
    pub board: Board<P>,
}

impl<P: BoardPiece> MovePayload<P> {
    #[must_use]
    pub fn new(mv: &Move, board: Board<P>) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
            captures: mv.captured.to_vec(),
            board,
        }
    }

    /// The move this payload carries.
    #[must_use]
    pub fn to_move(&self) -> Move {
        Move::with_captures(self.from, self.to, &self.captures)
    }
}
