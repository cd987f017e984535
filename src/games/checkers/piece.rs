//! Checkers pieces.

use serde::{Deserialize, Serialize};

use crate::core::board::BoardPiece;
use crate::core::side::Color;

/// Man or king.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckersKind {
    /// Moves and captures diagonally forward only.
    Man,
    /// Moves and captures in all four diagonal directions.
    King,
}

/// A checker with colour and kind.
///
/// On the wire a white man is `w`, a white king `W`, a black man `b` and a
/// black king `B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckersPiece {
    pub color: Color,
    pub kind: CheckersKind,
}

impl CheckersPiece {
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            kind: CheckersKind::Man,
        }
    }

    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            kind: CheckersKind::King,
        }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, CheckersKind::King)
    }

    /// The same piece crowned.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Self::king(self.color)
    }
}

impl BoardPiece for CheckersPiece {
    fn color(self) -> Color {
        self.color
    }

    fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, CheckersKind::Man) => 'w',
            (Color::White, CheckersKind::King) => 'W',
            (Color::Black, CheckersKind::Man) => 'b',
            (Color::Black, CheckersKind::King) => 'B',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Self::man(Color::White)),
            'W' => Some(Self::king(Color::White)),
            'b' => Some(Self::man(Color::Black)),
            'B' => Some(Self::king(Color::Black)),
            _ => None,
        }
    }
}
