//! Move representation: origin, destination and captured squares.
//!
//! Board games share one move shape:
//! - a quiet move or a chess capture-by-landing has no captured squares
//!   (whatever stood on `to` is simply overwritten)
//! - a checkers jump lists the jumped square, which is never `to`
//!
//! The engine never interprets moves beyond this; each `BoardRules`
//! implementation decides what `apply_move` does with the captured list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::side::Seat;
use super::square::Square;

/// A board move.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{Move, Square};
///
/// let e2 = Square::new(6, 4).unwrap();
/// let e4 = Square::new(4, 4).unwrap();
/// let push = Move::new(e2, e4);
/// assert!(!push.is_capture());
///
/// let jump = Move::jump(
///     Square::new(5, 0).unwrap(),
///     Square::new(3, 2).unwrap(),
///     Square::new(4, 1).unwrap(),
/// );
/// assert!(jump.is_capture());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the moving piece starts on.
    pub from: Square,

    /// Square the moving piece ends on.
    pub to: Square,

    /// Squares whose pieces are removed by this move, in order.
    /// SmallVec keeps the common zero/one-capture case off the heap.
    #[serde(rename = "captures", default)]
    pub captured: SmallVec<[Square; 1]>,
}

impl Move {
    /// Create a move that captures nothing by jumping.
    #[must_use]
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: SmallVec::new(),
        }
    }

    /// Create a move that removes the piece on `over`.
    #[must_use]
    pub fn jump(from: Square, to: Square, over: Square) -> Self {
        Self::with_captures(from, to, &[over])
    }

    /// Create a move that removes the pieces on every square of `captured`.
    #[must_use]
    pub fn with_captures(from: Square, to: Square, captured: &[Square]) -> Self {
        Self {
            from,
            to,
            captured: SmallVec::from_slice(captured),
        }
    }

    /// Check if this move removes pieces by jumping over them.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// A move as it entered a session's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who made the move.
    pub mover: Seat,

    /// The move itself.
    pub mv: Move,

    /// Half-move number, starting at 1.
    pub ply: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mover: Seat, mv: Move, ply: u32) -> Self {
        Self { mover, mv, ply }
    }
}
