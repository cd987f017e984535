//! Chess without check detection.
//!
//! - Pawns: one step forward onto an empty square, two from the home row,
//!   diagonal captures; no en passant
//! - Rooks, bishops, queens: rays stopping at the first occupied square
//! - Knights, kings: fixed offsets
//! - No castling; promotion is off unless `PromotionRule::AutoQueen` is set

mod piece;
mod rules;

pub use piece::{ChessKind, ChessPiece};
pub use rules::ChessRules;
