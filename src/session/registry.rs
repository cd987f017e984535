//! Sessions by game id.
//!
//! The registry is the single owner of every live session on one side of
//! the connection. It fans timer ticks out to RPS sessions and ends every
//! session shared with a peer when that peer disconnects.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::EngineConfig;
use crate::core::rng::GameRng;
use crate::core::side::Color;
use crate::games::checkers::CheckersRules;
use crate::games::chess::ChessRules;
use crate::games::rps::RpsUpdate;
use crate::rules::GameResult;

use super::board_session::BoardSession;
use super::game::{GameKind, GameSession};
use super::lifecycle::Session;
use super::rps_session::RpsSession;

/// Transport-assigned game id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transport-assigned id of the other participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(pub String);

impl PeerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
struct Entry {
    peer: PeerId,
    session: GameSession,
}

/// All sessions of one participant.
#[derive(Debug)]
pub struct SessionRegistry {
    config: EngineConfig,
    rng: GameRng,
    sessions: FxHashMap<GameId, Entry>,
}

impl SessionRegistry {
    /// Create an empty registry. RPS sessions fork their RNG from the
    /// configured seed, or from entropy when there is none.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            rng,
            sessions: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a session of `kind` against `peer`. `local_color` is ignored for
    /// RPS. An existing session under the same id is replaced.
    pub fn start(&mut self, id: GameId, peer: PeerId, kind: GameKind, local_color: Color) -> &mut GameSession {
        let session = match kind {
            GameKind::Chess => GameSession::Chess(BoardSession::new(
                ChessRules::new(self.config.chess),
                local_color,
            )),
            GameKind::Checkers => GameSession::Checkers(BoardSession::new(
                CheckersRules::new(self.config.checkers),
                local_color,
            )),
            GameKind::Rps => GameSession::Rps(RpsSession::new(self.config.rps.clone(), self.rng.fork())),
        };

        info!(game = %id, peer = %peer, kind = %kind, "session started");
        let entry = Entry { peer, session };
        match self.sessions.entry(id) {
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                debug!(game = %slot.key(), "replacing existing session");
                slot.insert(entry);
                &mut slot.into_mut().session
            }
            std::collections::hash_map::Entry::Vacant(slot) => &mut slot.insert(entry).session,
        }
    }

    #[must_use]
    pub fn get(&self, id: &GameId) -> Option<&GameSession> {
        self.sessions.get(id).map(|entry| &entry.session)
    }

    pub fn get_mut(&mut self, id: &GameId) -> Option<&mut GameSession> {
        self.sessions.get_mut(id).map(|entry| &mut entry.session)
    }

    /// Peer of a session.
    #[must_use]
    pub fn peer_of(&self, id: &GameId) -> Option<&PeerId> {
        self.sessions.get(id).map(|entry| &entry.peer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ids of all sessions, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<_> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Tick every RPS session once.
    pub fn tick(&mut self) -> Vec<(GameId, RpsUpdate)> {
        let mut out = Vec::new();
        for (id, entry) in &mut self.sessions {
            for update in entry.session.tick() {
                out.push((id.clone(), update));
            }
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// End every open session shared with `peer` as won by the local side.
    pub fn peer_disconnected(&mut self, peer: &PeerId) -> Vec<(GameId, GameResult)> {
        info!(peer = %peer, "peer disconnected");
        let mut ended: Vec<_> = self
            .sessions
            .iter_mut()
            .filter(|(_, entry)| &entry.peer == peer)
            .filter_map(|(id, entry)| entry.session.opponent_left().map(|result| (id.clone(), result)))
            .collect();
        ended.sort_by(|a, b| a.0.cmp(&b.0));
        ended
    }

    /// Leave every open session, e.g. when the local participant disconnects.
    pub fn leave_all(&mut self) -> Vec<(GameId, GameResult)> {
        let mut ended: Vec<_> = self
            .sessions
            .iter_mut()
            .filter_map(|(id, entry)| entry.session.leave().map(|result| (id.clone(), result)))
            .collect();
        ended.sort_by(|a, b| a.0.cmp(&b.0));
        ended
    }

    /// Drop finished sessions and return their results.
    pub fn remove_finished(&mut self) -> Vec<(GameId, GameResult)> {
        let mut finished: Vec<_> = self
            .sessions
            .iter()
            .filter_map(|(id, entry)| entry.session.result().map(|result| (id.clone(), result)))
            .collect();

        for (id, _) in &finished {
            debug!(game = %id, "session removed");
            self.sessions.remove(id);
        }

        finished.sort_by(|a, b| a.0.cmp(&b.0));
        finished
    }
}
