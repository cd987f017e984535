//! Core engine types: squares, sides, boards, moves, RNG, configuration, errors.
//!
//! Everything here is game-agnostic. Chess and checkers plug their own piece
//! types into `Board<P>` through `BoardPiece`.

pub mod side;
pub mod square;
pub mod board;
pub mod moves;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Color, Seat, SeatMap};
pub use square::{Square, BOARD_SIZE};
pub use board::{Board, BoardParseError, BoardPiece, EMPTY_SYMBOL};
pub use moves::{Move, MoveRecord};
pub use rng::GameRng;
pub use config::{CaptureRule, CheckersConfig, ChessConfig, EngineConfig, PromotionRule, RpsConfig};
pub use error::Rejection;
