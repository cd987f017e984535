//! The 8x8 board shared by chess and checkers.
//!
//! A `Board<P>` holds exactly 64 cells, each either empty or holding a piece
//! of type `P`. Pieces carry their colour and kind explicitly through the
//! `BoardPiece` trait; the single-letter symbols exist only for text and
//! wire encoding.
//!
//! ## Wire format
//!
//! Boards serialize as 8 rows of 8 one-character strings, empty cells as
//! `" "`, which is the layout the game clients exchange.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::side::Color;
use super::square::{Square, BOARD_SIZE};

/// Symbol used for an empty cell on the wire.
pub const EMPTY_SYMBOL: char = ' ';

const SIZE: usize = BOARD_SIZE as usize;

/// A piece that can stand on a `Board`.
pub trait BoardPiece: Copy + Eq + std::fmt::Debug {
    /// The colour this piece belongs to.
    fn color(self) -> Color;

    /// Single-letter symbol for text and wire encoding.
    fn symbol(self) -> char;

    /// Parse a single-letter symbol. Returns `None` for unknown letters.
    fn from_symbol(symbol: char) -> Option<Self>;
}

/// Errors from building a board out of text or decoded rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unknown piece symbol {symbol:?} on {square}")]
    UnknownSymbol { square: Square, symbol: char },
}

/// An 8x8 grid of optional pieces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board<P> {
    cells: [[Option<P>; SIZE]; SIZE],
}

impl<P: BoardPiece> Default for Board<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: BoardPiece> Board<P> {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Build a board from 8 text rows, top row first.
    ///
    /// Empty cells may be written as `' '` or `'.'`.
    ///
    /// ```
    /// use duel_engine::core::Board;
    /// use duel_engine::games::chess::ChessPiece;
    ///
    /// let board: Board<ChessPiece> = Board::from_rows(&[
    ///     "....k...",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "....K...",
    /// ]).unwrap();
    /// assert_eq!(board.pieces().count(), 2);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardParseError> {
        if rows.len() != SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut grid = [[EMPTY_SYMBOL; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.as_ref().chars().collect();
            if symbols.len() != SIZE {
                return Err(BoardParseError::RowLength {
                    row: r,
                    len: symbols.len(),
                });
            }
            grid[r].copy_from_slice(&symbols);
        }
        Self::from_grid(&grid)
    }

    /// Render as 8 text rows, `'.'` for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', BoardPiece::symbol))
                    .collect()
            })
            .collect()
    }

    /// Return a copy of this board with `piece` placed on `square`.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: P) -> Self {
        self.place(square, piece);
        self
    }

    /// Return a copy of this board with `square` emptied.
    #[must_use]
    pub fn without_piece(mut self, square: Square) -> Self {
        self.clear(square);
        self
    }

    /// The piece on `square`, if any.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<P> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Check if `square` holds no piece.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Check if `square` holds a piece of `color`.
    #[must_use]
    pub fn holds_own(&self, square: Square, color: Color) -> bool {
        self.get(square).is_some_and(|p| p.color() == color)
    }

    /// Check if `square` holds a piece of the colour opposing `color`.
    #[must_use]
    pub fn holds_opponent(&self, square: Square, color: Color) -> bool {
        self.get(square).is_some_and(|p| p.color() != color)
    }

    /// Iterate over occupied squares and their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, P)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color() == color)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.squares_of(color).count()
    }

    pub(crate) fn place(&mut self, square: Square, piece: P) {
        self.cells[square.row() as usize][square.col() as usize] = Some(piece);
    }

    pub(crate) fn take(&mut self, square: Square) -> Option<P> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    pub(crate) fn clear(&mut self, square: Square) {
        self.cells[square.row() as usize][square.col() as usize] = None;
    }

    fn to_grid(&self) -> [[char; SIZE]; SIZE] {
        let mut grid = [[EMPTY_SYMBOL; SIZE]; SIZE];
        for (sq, piece) in self.pieces() {
            grid[sq.row() as usize][sq.col() as usize] = piece.symbol();
        }
        grid
    }

    fn from_grid(grid: &[[char; SIZE]; SIZE]) -> Result<Self, BoardParseError> {
        let mut board = Self::empty();
        for square in Square::all() {
            let symbol = grid[square.row() as usize][square.col() as usize];
            board.cells[square.row() as usize][square.col() as usize] = parse_cell(square, symbol)?;
        }
        Ok(board)
    }
}

fn parse_cell<P: BoardPiece>(square: Square, symbol: char) -> Result<Option<P>, BoardParseError> {
    if symbol == EMPTY_SYMBOL || symbol == '.' {
        return Ok(None);
    }
    P::from_symbol(symbol)
        .map(Some)
        .ok_or(BoardParseError::UnknownSymbol { square, symbol })
}

impl<P: BoardPiece> std::fmt::Display for Board<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<P: BoardPiece> Serialize for Board<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_grid().serialize(serializer)
    }
}

impl<'de, P: BoardPiece> Deserialize<'de> for Board<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let grid = <[[char; SIZE]; SIZE]>::deserialize(deserializer)?;
        Self::from_grid(&grid).map_err(D::Error::custom)
    }
}
