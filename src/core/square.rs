//! Board coordinates.
//!
//! A `Square` is a (row, column) pair, both in `0..8`. Row 0 is the top of
//! the board as the white player sees it, so it corresponds to rank 8.
//!
//! ```
//! use duel_engine::core::Square;
//!
//! let e2 = Square::new(6, 4).unwrap();
//! assert_eq!(e2.to_string(), "e2");
//! assert_eq!(e2.offset(-2, 0), Square::new(4, 4));
//! assert!(Square::new(8, 0).is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Number of rows and columns on every board in this crate.
pub const BOARD_SIZE: u8 = 8;

/// A square on an 8x8 board.
///
/// Serializes as `{"row": r, "col": c}`; decoding rejects coordinates
/// outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = String;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
            .ok_or_else(|| format!("square ({}, {}) is off the board", raw.row, raw.col))
    }
}

impl Square {
    /// Create a square, or `None` if either coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row (0 = top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column (0 = left, file a).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Dense index in `0..64`, row-major.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// The square `(dr, dc)` away, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(dr)?;
        let col = (self.col as i8).checked_add(dc)?;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Dark squares of the board (the ones checkers are played on).
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}
