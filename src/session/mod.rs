//! Per-game session state, lifecycle and registry.
//!
//! Sessions own all mutable game state; nothing is shared between them.
//! A `SessionRegistry` holds one `GameSession` per game id.

pub mod board_session;
pub mod game;
pub mod lifecycle;
pub mod protocol;
pub mod registry;
pub mod rps_session;

pub use board_session::{BoardSession, BoardSnapshot, ClickOutcome, Selection, SnapshotError};
pub use game::{GameKind, GameSession};
pub use lifecycle::{Lifecycle, Session};
pub use protocol::{ChoicePayload, MovePayload};
pub use registry::{GameId, PeerId, SessionRegistry};
pub use rps_session::RpsSession;
