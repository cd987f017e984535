//! Sides of a two-player game.
//!
//! ## Color
//!
//! Board colour of a piece (white plays from the bottom rows, black from the top).
//!
//! ## Seat
//!
//! Who is sitting at the table from this engine instance's point of view:
//! the local participant or the remote peer.
//!
//! ## SeatMap
//!
//! Per-seat data storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Piece colour on an 8x8 board.
///
/// Rows are numbered from the top: white starts on rows 6-7 and moves
/// towards row 0, black starts on rows 0-1 and moves towards row 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colours, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Get the opposite colour.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of one step "forward" for this colour.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// The row this colour's pieces are trying to reach.
    #[must_use]
    pub const fn far_row(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// One of the two participants, relative to this engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// The participant driving this engine instance.
    Local,
    /// The remote opponent.
    Peer,
}

impl Seat {
    /// Both seats, local first.
    pub const ALL: [Seat; 2] = [Seat::Local, Seat::Peer];

    /// Get the other seat.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Local => Self::Peer,
            Self::Peer => Self::Local,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Peer => write!(f, "peer"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::with_value(0);
/// wins[Seat::Peer] += 1;
///
/// assert_eq!(wins[Seat::Local], 0);
/// assert_eq!(wins[Seat::Peer], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    local: T,
    peer: T,
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            local: factory(Seat::Local),
            peer: factory(Seat::Peer),
        }
    }

    /// Create a SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            local: value.clone(),
            peer: value,
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Local => &self.local,
            Seat::Peer => &self.peer,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Local => &mut self.local,
            Seat::Peer => &mut self.peer,
        }
    }

    /// Iterate over (Seat, &T) pairs, local first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        [(Seat::Local, &self.local), (Seat::Peer, &self.peer)].into_iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
