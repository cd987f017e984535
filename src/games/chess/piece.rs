//! Chess pieces.

use serde::{Deserialize, Serialize};

use crate::core::board::BoardPiece;
use crate::core::side::Color;

/// Chess piece kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChessKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl ChessKind {
    /// Lowercase letter for this kind; white pieces use the uppercase form.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'p' => Self::Pawn,
            'n' => Self::Knight,
            'b' => Self::Bishop,
            'r' => Self::Rook,
            'q' => Self::Queen,
            'k' => Self::King,
            _ => return None,
        })
    }
}

/// A chess piece with colour and kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPiece {
    pub color: Color,
    pub kind: ChessKind,
}

impl ChessPiece {
    #[must_use]
    pub const fn new(color: Color, kind: ChessKind) -> Self {
        Self { color, kind }
    }

    #[must_use]
    pub const fn white(kind: ChessKind) -> Self {
        Self::new(Color::White, kind)
    }

    #[must_use]
    pub const fn black(kind: ChessKind) -> Self {
        Self::new(Color::Black, kind)
    }
}

impl BoardPiece for ChessPiece {
    fn color(self) -> Color {
        self.color
    }

    fn symbol(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        let kind = ChessKind::from_letter(symbol.to_ascii_lowercase())?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}
