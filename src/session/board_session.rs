//! A two-player board game session around a `BoardRules` engine.
//!
//! The session owns the board, the local side's colour, the current piece
//! selection and the move history. Turn authority stays with the caller: every
//! local input carries a `my_turn` flag that the session trusts.
//!
//! ## Click flow
//!
//! 1. Clicking a local piece selects it and yields its destinations.
//! 2. Clicking one of those destinations plays the move and yields the
//!    payload to send to the peer.
//! 3. Any other click clears the selection and is refused.
//!
//! Remote moves are applied in arrival order through `apply_remote`.
//! `validate_proposal` is the stricter check an authoritative mirror runs
//! before accepting a move from a client.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::board::{Board, BoardPiece};
use crate::core::error::Rejection;
use crate::core::moves::{Move, MoveRecord};
use crate::core::side::{Color, Seat};
use crate::core::square::Square;
use crate::rules::{BoardRules, EndReason, GameResult, Winner};

use super::lifecycle::{Lifecycle, Session};
use super::protocol::MovePayload;

/// The selected piece and the moves generated for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub moves: Vec<Move>,
}

impl Selection {
    /// Destination squares of the selected piece.
    #[must_use]
    pub fn destinations(&self) -> Vec<Square> {
        self.moves.iter().map(|mv| mv.to).collect()
    }

    fn move_to(&self, to: Square) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.to == to)
    }
}

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome<P> {
    /// A piece was selected; these are its destinations.
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    /// The selected piece moved; send the payload to the peer.
    Moved(MovePayload<P>),
}

/// One board game between the local side and a peer.
#[derive(Clone, Debug)]
pub struct BoardSession<R: BoardRules> {
    rules: R,
    board: Board<R::Piece>,
    local_color: Color,
    selection: Option<Selection>,
    history: Vector<MoveRecord>,
    lifecycle: Lifecycle,
}

impl<R: BoardRules> BoardSession<R> {
    /// Start from the rules' initial position.
    #[must_use]
    pub fn new(rules: R, local_color: Color) -> Self {
        let board = rules.initial_board();
        Self::from_board(rules, board, local_color)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(rules: R, board: Board<R::Piece>, local_color: Color) -> Self {
        Self {
            rules,
            board,
            local_color,
            selection: None,
            history: Vector::new(),
            lifecycle: Lifecycle::new(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board<R::Piece> {
        &self.board
    }

    #[must_use]
    pub fn local_color(&self) -> Color {
        self.local_color
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Colour played by `seat`.
    #[must_use]
    pub fn color_of(&self, seat: Seat) -> Color {
        match seat {
            Seat::Local => self.local_color,
            Seat::Peer => self.local_color.opposite(),
        }
    }

    /// Seat playing `color`.
    #[must_use]
    pub fn seat_of(&self, color: Color) -> Seat {
        if color == self.local_color {
            Seat::Local
        } else {
            Seat::Peer
        }
    }

    // === Local input ===

    /// Select the local piece on `square` and return its destinations.
    ///
    /// A square without a local piece clears the selection.
    pub fn select(&mut self, square: Square, my_turn: bool) -> Result<Vec<Square>, Rejection> {
        self.lifecycle.ensure_open()?;
        if !my_turn {
            return Err(Rejection::NotYourTurn);
        }
        if !self.board.holds_own(square, self.local_color) {
            self.selection = None;
            debug!(square = %square, "selection refused");
            return Err(Rejection::IllegalSelection(square));
        }

        let selection = Selection {
            square,
            moves: self.rules.generate_moves(&self.board, square),
        };
        let destinations = selection.destinations();
        debug!(square = %square, destinations = destinations.len(), "piece selected");
        self.selection = Some(selection);
        Ok(destinations)
    }

    /// Move the selected piece to `to`.
    ///
    /// The selection is consumed whether or not `to` is legal.
    pub fn move_selected(&mut self, to: Square, my_turn: bool) -> Result<MovePayload<R::Piece>, Rejection> {
        self.lifecycle.ensure_open()?;
        if !my_turn {
            return Err(Rejection::NotYourTurn);
        }
        let selection = self.selection.take().ok_or(Rejection::NothingSelected)?;
        let Some(mv) = selection.move_to(to).cloned() else {
            debug!(from = %selection.square, to = %to, "destination refused");
            return Err(Rejection::IllegalDestination {
                from: selection.square,
                to,
            });
        };

        info!(mv = %mv, "local move");
        self.commit(Seat::Local, mv.clone());
        Ok(MovePayload::new(&mv, self.board.clone()))
    }

    /// Handle a click on `square`: select, move, or refuse.
    pub fn click(&mut self, square: Square, my_turn: bool) -> Result<ClickOutcome<R::Piece>, Rejection> {
        self.lifecycle.ensure_open()?;
        let selected = self
            .selection
            .as_ref()
            .map(|selection| (selection.square, selection.move_to(square).is_some()));

        match selected {
            Some((_, true)) => self.move_selected(square, my_turn).map(ClickOutcome::Moved),
            Some((from, false)) if !self.board.holds_own(square, self.local_color) => {
                self.selection = None;
                Err(Rejection::IllegalDestination { from, to: square })
            }
            _ => self.select(square, my_turn).map(|destinations| ClickOutcome::Selected {
                square,
                destinations,
            }),
        }
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // === Remote input ===

    /// Apply a move received from the peer.
    ///
    /// The move is trusted; use `validate_proposal` first where the peer is
    /// not. Refused once the session has ended.
    pub fn apply_remote(&mut self, mv: &Move) -> Result<(), Rejection> {
        self.lifecycle.ensure_open()?;
        info!(mv = %mv, "remote move");
        self.selection = None;
        self.commit(Seat::Peer, mv.clone());
        Ok(())
    }

    /// Check a move proposed by `mover` against a freshly generated move set.
    ///
    /// Returns the matching generated move. Origin, destination and captured
    /// squares must all match.
    pub fn validate_proposal(&self, mv: &Move, mover: Seat) -> Result<Move, Rejection> {
        self.lifecycle.ensure_open()?;
        if !self.board.holds_own(mv.from, self.color_of(mover)) {
            return Err(Rejection::IllegalSelection(mv.from));
        }
        self.rules
            .generate_moves(&self.board, mv.from)
            .into_iter()
            .find(|candidate| candidate == mv)
            .ok_or(Rejection::IllegalDestination {
                from: mv.from,
                to: mv.to,
            })
    }

    fn commit(&mut self, mover: Seat, mv: Move) {
        let color = self.color_of(mover);
        self.board = self.rules.apply_move(&self.board, &mv);
        let ply = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord::new(mover, mv, ply));

        if let Some(winner) = self.rules.winner_after(&self.board, color) {
            let seat = self.seat_of(winner);
            self.end(GameResult::new(Winner::seat(seat), EndReason::NoMovesLeft));
        }
    }

    // === Snapshots ===

    /// Capture the board, history and result.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot<R::Piece> {
        BoardSnapshot {
            board: self.board.clone(),
            local_color: self.local_color,
            history: self.history.iter().cloned().collect(),
            result: self.lifecycle.result(),
        }
    }

    /// Rebuild a session from a snapshot. The selection and any draw offer
    /// are not restored.
    #[must_use]
    pub fn restore(rules: R, snapshot: BoardSnapshot<R::Piece>) -> Self {
        let mut session = Self::from_board(rules, snapshot.board, snapshot.local_color);
        session.history = snapshot.history.into_iter().collect();
        if let Some(result) = snapshot.result {
            session.lifecycle.finish(result);
        }
        session
    }
}

impl<R: BoardRules> Session for BoardSession<R> {
    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn on_finished(&mut self) {
        self.selection = None;
    }
}

/// Errors from encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Serializable state of a `BoardSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: BoardPiece", deserialize = "P: BoardPiece"))]
pub struct BoardSnapshot<P> {
    pub board: Board<P>,
    pub local_color: Color,
    pub history: Vec<MoveRecord>,
    pub result: Option<GameResult>,
}

impl<P: BoardPiece> BoardSnapshot<P> {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode bytes produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
