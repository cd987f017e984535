//! One session of any supported game.

use serde::{Deserialize, Serialize};

use crate::core::side::Color;
use crate::games::checkers::CheckersRules;
use crate::games::chess::ChessRules;
use crate::games::rps::RpsUpdate;

use super::board_session::BoardSession;
use super::lifecycle::{Lifecycle, Session};
use super::rps_session::RpsSession;

/// Game types a registry can start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Chess,
    Checkers,
    Rps,
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameKind::Chess => "chess",
            GameKind::Checkers => "checkers",
            GameKind::Rps => "rps",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub enum GameSession {
    Chess(BoardSession<ChessRules>),
    Checkers(BoardSession<CheckersRules>),
    Rps(RpsSession),
}

impl GameSession {
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            GameSession::Chess(_) => GameKind::Chess,
            GameSession::Checkers(_) => GameKind::Checkers,
            GameSession::Rps(_) => GameKind::Rps,
        }
    }

    /// Local colour for board games.
    #[must_use]
    pub fn local_color(&self) -> Option<Color> {
        match self {
            GameSession::Chess(session) => Some(session.local_color()),
            GameSession::Checkers(session) => Some(session.local_color()),
            GameSession::Rps(_) => None,
        }
    }

    /// Tick the round clock. Board games have no clock.
    pub fn tick(&mut self) -> Vec<RpsUpdate> {
        match self {
            GameSession::Rps(session) => session.tick(),
            GameSession::Chess(_) | GameSession::Checkers(_) => Vec::new(),
        }
    }

    pub fn as_chess_mut(&mut self) -> Option<&mut BoardSession<ChessRules>> {
        match self {
            GameSession::Chess(session) => Some(session),
            _ => None,
        }
    }

    pub fn as_checkers_mut(&mut self) -> Option<&mut BoardSession<CheckersRules>> {
        match self {
            GameSession::Checkers(session) => Some(session),
            _ => None,
        }
    }

    pub fn as_rps_mut(&mut self) -> Option<&mut RpsSession> {
        match self {
            GameSession::Rps(session) => Some(session),
            _ => None,
        }
    }
}

impl Session for GameSession {
    fn lifecycle(&self) -> &Lifecycle {
        match self {
            GameSession::Chess(session) => session.lifecycle(),
            GameSession::Checkers(session) => session.lifecycle(),
            GameSession::Rps(session) => session.lifecycle(),
        }
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        match self {
            GameSession::Chess(session) => session.lifecycle_mut(),
            GameSession::Checkers(session) => session.lifecycle_mut(),
            GameSession::Rps(session) => session.lifecycle_mut(),
        }
    }

    fn on_finished(&mut self) {
        match self {
            GameSession::Chess(session) => session.on_finished(),
            GameSession::Checkers(session) => session.on_finished(),
            GameSession::Rps(session) => session.on_finished(),
        }
    }
}
