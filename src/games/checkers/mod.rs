//! Russian checkers.
//!
//! Forced capture is evaluated for the selected piece by default; see
//! `CaptureRule::Global` for the stricter variant. A man reaching the far
//! row is crowned in the same move.

mod piece;
mod rules;

pub use piece::{CheckersKind, CheckersPiece};
pub use rules::CheckersRules;
