//! Refusals returned by sessions.
//!
//! None of these are faults: every refused call leaves the session state as
//! it was (a refused selection also clears the current selection), so callers
//! can show a notice and carry on.

use thiserror::Error;

use super::square::Square;

/// Why a session refused an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The selected square has no piece of the local side.
    #[error("{0} holds no piece of yours")]
    IllegalSelection(Square),

    /// The destination is not in the selected piece's move set.
    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Square, to: Square },

    /// A destination was given with nothing selected.
    #[error("no piece is selected")]
    NothingSelected,

    /// The caller's turn oracle says the local side may not move.
    #[error("it is not your turn")]
    NotYourTurn,

    /// A choice was already committed for this round.
    #[error("a choice was already made in round {round}")]
    DuplicateChoice { round: u32 },

    /// A remote choice was tagged with a round other than the current one.
    #[error("choice is for round {got}, current round is {current}")]
    StaleRound { got: u32, current: u32 },

    /// The round is resolved and waiting for the next one to start.
    #[error("round {round} is already resolved")]
    RoundClosed { round: u32 },

    /// A draw was accepted with no offer from the other side pending.
    #[error("there is no draw offer to accept")]
    NoPendingDrawOffer,

    /// The session has a result; nothing more can be applied to it.
    #[error("the game is over")]
    SessionEnded,
}
