//! Rock-paper-scissors session: an `RpsMatch` plus the shared lifecycle.
//!
//! Ending the session for any reason halts the match, so its clock stops and
//! late choices or ticks are refused or ignored.

use tracing::{debug, info, trace};

use crate::core::config::RpsConfig;
use crate::core::error::Rejection;
use crate::core::rng::GameRng;
use crate::games::rps::{Choice, ChoicePayload, RpsMatch, RpsUpdate};

use super::lifecycle::{Lifecycle, Session};

#[derive(Clone, Debug)]
pub struct RpsSession {
    game: RpsMatch,
    lifecycle: Lifecycle,
}

impl RpsSession {
    #[must_use]
    pub fn new(config: RpsConfig, rng: GameRng) -> Self {
        Self {
            game: RpsMatch::new(config, rng),
            lifecycle: Lifecycle::new(),
        }
    }

    /// The underlying match, for round, score, clock and history.
    #[must_use]
    pub fn game(&self) -> &RpsMatch {
        &self.game
    }

    /// Commit the local choice. The `Committed` update carries the payload
    /// for the peer.
    pub fn select(&mut self, choice: Choice) -> Result<Vec<RpsUpdate>, Rejection> {
        self.lifecycle.ensure_open()?;
        let updates = self.game.select(choice).inspect_err(|rejection| {
            debug!(choice = %choice, %rejection, "choice refused");
        })?;
        self.observe(&updates);
        Ok(updates)
    }

    /// Apply the peer's choice.
    pub fn apply_remote_choice(&mut self, payload: ChoicePayload) -> Result<Vec<RpsUpdate>, Rejection> {
        self.lifecycle.ensure_open()?;
        let updates = self.game.apply_remote_choice(payload).inspect_err(|rejection| {
            debug!(round = payload.round, %rejection, "remote choice refused");
        })?;
        self.observe(&updates);
        Ok(updates)
    }

    /// Advance the round clock and any settle delay by one tick.
    pub fn tick(&mut self) -> Vec<RpsUpdate> {
        if self.lifecycle.is_over() {
            return Vec::new();
        }
        let updates = self.game.tick();
        self.observe(&updates);
        updates
    }

    fn observe(&mut self, updates: &[RpsUpdate]) {
        for update in updates {
            match update {
                RpsUpdate::Committed { payload, source } => {
                    info!(round = payload.round, choice = %payload.choice, ?source, "choice committed");
                }
                RpsUpdate::PeerReady { round } => debug!(round, "peer choice held"),
                RpsUpdate::ClockTicked { round, remaining } => trace!(round, remaining, "clock tick"),
                RpsUpdate::RoundResolved(record) => {
                    info!(
                        round = record.round,
                        local = %record.local,
                        peer = %record.peer,
                        outcome = ?record.outcome,
                        "round resolved"
                    );
                }
                RpsUpdate::RoundStarted { round } => debug!(round, "round started"),
                RpsUpdate::MatchOver(result) => {
                    self.end(*result);
                }
            }
        }
    }
}

impl Session for RpsSession {
    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn on_finished(&mut self) {
        self.game.halt();
    }
}
