//! # duel-engine
//!
//! Rules and session state for two-player casual games: chess, Russian
//! checkers and best-of-five rock-paper-scissors.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: move generation and application never touch I/O and
//!    return new boards, so one engine can run on a client and on an
//!    authoritative mirror.
//!
//! 2. **Explicit sessions**: every game's board, selection, clock and
//!    history live in a session value owned by the caller.
//!
//! 3. **Caller-driven time**: the RPS round clock is ticked by the caller and
//!    every tick is bound to a round, so a leftover timer never fires into a
//!    later round or an ended session.
//!
//! ## Modules
//!
//! - `core`: squares, colours and seats, boards, moves, RNG, configuration, refusals
//! - `rules`: the `BoardRules` trait and terminal results
//! - `games`: chess, checkers and rock-paper-scissors
//! - `session`: board and RPS sessions, lifecycle, payloads, registry
//!
//! ## Example
//!
//! ```
//! use duel_engine::{BoardSession, ChessRules, Color, Square};
//!
//! let mut session = BoardSession::new(ChessRules::default(), Color::White);
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//!
//! session.select(e2, true).unwrap();
//! let payload = session.move_selected(e4, true).unwrap();
//! assert_eq!(payload.to, e4);
//! assert!(session.board().is_empty(e2));
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Color, Seat, SeatMap,
    Square, Board, BoardPiece, BoardParseError,
    Move, MoveRecord,
    GameRng,
    EngineConfig, ChessConfig, CheckersConfig, RpsConfig, PromotionRule, CaptureRule,
    Rejection,
};

pub use crate::rules::{BoardRules, EndReason, GameResult, Winner};

pub use crate::games::chess::{ChessKind, ChessPiece, ChessRules};
pub use crate::games::checkers::{CheckersKind, CheckersPiece, CheckersRules};
pub use crate::games::rps::{Choice, ChoiceSource, RoundOutcome, RpsMatch, RpsUpdate};

pub use crate::session::{
    BoardSession, BoardSnapshot, ClickOutcome, SnapshotError,
    GameId, GameKind, GameSession, PeerId, SessionRegistry,
    ChoicePayload, MovePayload,
    Lifecycle, RpsSession, Session,
};
