//! Best-of-N rock-paper-scissors match state machine.
//!
//! ## Phases
//!
//! ```text
//! AwaitingSelfChoice --commit--> AwaitingPeerChoice --peer--> Resolved
//!        |    ^                                                  |
//!        |    +----------------- settle (next round) -----------+
//!        +--peer (held)                                          |
//!                                  settle (match decided) --> MatchOver
//! ```
//!
//! Every input (local commit, timeout pick, peer choice, tick) goes through
//! one transition function, so whichever input arrives first for a round is
//! the one that counts and the second is refused. The local clock only runs
//! while the local side has not committed. A peer choice that arrives before
//! the local commit is held and the round resolves as soon as the local side
//! commits. A peer that settles first may send its choice for the next
//! round while this side is still settling; that choice waits in a pending
//! slot and is taken up when the next round starts.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::RpsConfig;
use crate::core::error::Rejection;
use crate::core::rng::GameRng;
use crate::core::side::{Seat, SeatMap};
use crate::rules::{EndReason, GameResult, Winner};

use super::choice::{resolve, Choice, ChoicePayload, RoundOutcome};
use super::clock::{ClockTick, RoundClock};

/// Where a local choice came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceSource {
    /// The player picked it.
    Player,
    /// The round clock ran out and a choice was drawn at random.
    Timeout,
}

/// One resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub local: Choice,
    pub peer: Choice,
    pub outcome: RoundOutcome,
    pub local_source: ChoiceSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// The local side has not committed; the clock is running.
    AwaitingSelfChoice,
    /// Committed locally, waiting for the peer.
    AwaitingPeerChoice,
    /// Both choices are in; the next round or the result follows after
    /// `settle_remaining` ticks.
    Resolved {
        outcome: RoundOutcome,
        settle_remaining: u32,
    },
    MatchOver,
}

/// Observable effect of a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RpsUpdate {
    /// A local choice was accepted; `payload` goes to the peer.
    Committed {
        payload: ChoicePayload,
        source: ChoiceSource,
    },
    /// The peer committed first; its choice is held until ours is in.
    PeerReady { round: u32 },
    /// The round clock counted down.
    ClockTicked { round: u32, remaining: u32 },
    RoundResolved(RoundRecord),
    RoundStarted { round: u32 },
    MatchOver(GameResult),
}

impl RpsUpdate {
    /// Payload to send to the peer, if this update carries one.
    #[must_use]
    pub fn outbound(&self) -> Option<ChoicePayload> {
        match self {
            RpsUpdate::Committed { payload, .. } => Some(*payload),
            _ => None,
        }
    }
}

enum Event {
    Commit(Choice),
    Remote(ChoicePayload),
    Tick,
}

/// A rock-paper-scissors match between the local side and one peer.
#[derive(Clone, Debug)]
pub struct RpsMatch {
    config: RpsConfig,
    rng: GameRng,
    round: u32,
    phase: RoundPhase,
    local_choice: Option<(Choice, ChoiceSource)>,
    peer_choice: Option<Choice>,
    pending_peer: Option<Choice>,
    score: SeatMap<u32>,
    clock: RoundClock,
    history: Vector<RoundRecord>,
    halted: bool,
}

impl RpsMatch {
    /// Start a match at round 1 with the clock running.
    #[must_use]
    pub fn new(config: RpsConfig, rng: GameRng) -> Self {
        let clock = RoundClock::start(1, config.round_ticks);
        Self {
            config,
            rng,
            round: 1,
            phase: RoundPhase::AwaitingSelfChoice,
            local_choice: None,
            peer_choice: None,
            pending_peer: None,
            score: SeatMap::default(),
            clock,
            history: Vector::new(),
            halted: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RpsConfig {
        &self.config
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Round wins per seat.
    #[must_use]
    pub fn score(&self) -> SeatMap<u32> {
        self.score
    }

    /// Local choice for the current round, if committed.
    #[must_use]
    pub fn local_choice(&self) -> Option<Choice> {
        self.local_choice.map(|(choice, _)| choice)
    }

    /// Whether the peer has committed for the current round.
    #[must_use]
    pub fn peer_ready(&self) -> bool {
        self.peer_choice.is_some()
    }

    #[must_use]
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    /// Resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Match result once the deciding round has settled.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            RoundPhase::MatchOver => self.match_winner().map(|seat| self.best_of_result(seat)),
            _ => None,
        }
    }

    // === Inputs ===

    /// Commit the local choice for the current round.
    pub fn select(&mut self, choice: Choice) -> Result<Vec<RpsUpdate>, Rejection> {
        self.transition(Event::Commit(choice))
    }

    /// Apply the peer's choice.
    pub fn apply_remote_choice(&mut self, payload: ChoicePayload) -> Result<Vec<RpsUpdate>, Rejection> {
        self.transition(Event::Remote(payload))
    }

    /// Advance time by one tick. Does nothing once halted.
    pub fn tick(&mut self) -> Vec<RpsUpdate> {
        self.transition(Event::Tick).unwrap_or_default()
    }

    /// Stop the match for good: cancel the clock and refuse further input.
    pub fn halt(&mut self) {
        self.clock.cancel();
        self.halted = true;
    }

    fn transition(&mut self, event: Event) -> Result<Vec<RpsUpdate>, Rejection> {
        if self.halted {
            return Err(Rejection::SessionEnded);
        }

        let mut updates = Vec::new();
        match event {
            Event::Commit(choice) => {
                match self.phase {
                    RoundPhase::AwaitingSelfChoice => {}
                    RoundPhase::AwaitingPeerChoice => {
                        return Err(Rejection::DuplicateChoice { round: self.round })
                    }
                    RoundPhase::Resolved { .. } => {
                        return Err(Rejection::RoundClosed { round: self.round })
                    }
                    RoundPhase::MatchOver => return Err(Rejection::SessionEnded),
                }
                self.commit_local(choice, ChoiceSource::Player, &mut updates);
            }
            Event::Remote(payload) => {
                match self.phase {
                    RoundPhase::MatchOver => return Err(Rejection::SessionEnded),
                    RoundPhase::Resolved { .. }
                        if payload.round == self.round + 1 && self.match_winner().is_none() =>
                    {
                        if self.pending_peer.is_some() {
                            return Err(Rejection::DuplicateChoice { round: payload.round });
                        }
                        self.pending_peer = Some(payload.choice);
                        return Ok(updates);
                    }
                    _ if payload.round != self.round => {
                        return Err(Rejection::StaleRound {
                            got: payload.round,
                            current: self.round,
                        })
                    }
                    RoundPhase::Resolved { .. } => {
                        return Err(Rejection::RoundClosed { round: self.round })
                    }
                    _ if self.peer_choice.is_some() => {
                        return Err(Rejection::DuplicateChoice { round: self.round })
                    }
                    _ => {}
                }
                self.commit_peer(payload.choice, &mut updates);
            }
            Event::Tick => self.advance(&mut updates),
        }
        Ok(updates)
    }

    fn commit_local(&mut self, choice: Choice, source: ChoiceSource, updates: &mut Vec<RpsUpdate>) {
        self.clock.cancel();
        self.local_choice = Some((choice, source));
        updates.push(RpsUpdate::Committed {
            payload: ChoicePayload::new(choice, self.round),
            source,
        });

        match self.peer_choice {
            Some(peer) => self.resolve_round(choice, peer, source, updates),
            None => self.phase = RoundPhase::AwaitingPeerChoice,
        }
    }

    fn commit_peer(&mut self, choice: Choice, updates: &mut Vec<RpsUpdate>) {
        self.peer_choice = Some(choice);
        match self.local_choice {
            Some((local, source)) => self.resolve_round(local, choice, source, updates),
            None => updates.push(RpsUpdate::PeerReady { round: self.round }),
        }
    }

    fn advance(&mut self, updates: &mut Vec<RpsUpdate>) {
        match self.phase {
            RoundPhase::AwaitingSelfChoice => match self.clock.tick(self.round) {
                ClockTick::Running { remaining } => updates.push(RpsUpdate::ClockTicked {
                    round: self.round,
                    remaining,
                }),
                ClockTick::Expired => {
                    if let Some(&pick) = self.rng.choose(&Choice::ALL) {
                        self.commit_local(pick, ChoiceSource::Timeout, updates);
                    }
                }
                ClockTick::Ignored => {}
            },
            RoundPhase::Resolved {
                outcome,
                settle_remaining,
            } if settle_remaining > 1 => {
                self.phase = RoundPhase::Resolved {
                    outcome,
                    settle_remaining: settle_remaining - 1,
                };
            }
            RoundPhase::Resolved { .. } => self.settle(updates),
            RoundPhase::AwaitingPeerChoice | RoundPhase::MatchOver => {}
        }
    }

    fn resolve_round(&mut self, local: Choice, peer: Choice, source: ChoiceSource, updates: &mut Vec<RpsUpdate>) {
        let outcome = resolve(local, peer);
        if let Some(seat) = outcome.winner() {
            self.score[seat] += 1;
        }

        let record = RoundRecord {
            round: self.round,
            local,
            peer,
            outcome,
            local_source: source,
        };
        self.history.push_back(record.clone());
        updates.push(RpsUpdate::RoundResolved(record));

        let settle = if self.match_winner().is_some() {
            self.config.match_over_delay_ticks
        } else {
            self.config.next_round_delay_ticks
        };
        self.phase = RoundPhase::Resolved {
            outcome,
            settle_remaining: settle,
        };
        if settle == 0 {
            self.settle(updates);
        }
    }

    fn settle(&mut self, updates: &mut Vec<RpsUpdate>) {
        if let Some(seat) = self.match_winner() {
            self.phase = RoundPhase::MatchOver;
            updates.push(RpsUpdate::MatchOver(self.best_of_result(seat)));
            return;
        }

        self.round += 1;
        self.local_choice = None;
        self.peer_choice = self.pending_peer.take();
        self.clock = RoundClock::start(self.round, self.config.round_ticks);
        self.phase = RoundPhase::AwaitingSelfChoice;
        updates.push(RpsUpdate::RoundStarted { round: self.round });
        if self.peer_choice.is_some() {
            updates.push(RpsUpdate::PeerReady { round: self.round });
        }
    }

    fn match_winner(&self) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&seat| self.score[seat] >= self.config.wins_needed)
    }

    fn best_of_result(&self, seat: Seat) -> GameResult {
        GameResult::new(Winner::seat(seat), EndReason::BestOfFive).with_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_match() -> RpsMatch {
        let config = RpsConfig::default().with_round_ticks(3).with_delays(1, 1);
        RpsMatch::new(config, GameRng::new(7))
    }

    fn peer(choice: Choice, round: u32) -> ChoicePayload {
        ChoicePayload::new(choice, round)
    }

    #[test]
    fn test_local_then_peer_resolves() {
        let mut game = quick_match();

        let updates = game.select(Choice::Rock).unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].outbound(), Some(peer(Choice::Rock, 1)));
        assert_eq!(game.phase(), RoundPhase::AwaitingPeerChoice);
        assert!(!game.clock().is_running());

        let updates = game.apply_remote_choice(peer(Choice::Scissors, 1)).unwrap();
        assert!(matches!(
            &updates[..],
            [RpsUpdate::RoundResolved(RoundRecord { outcome: RoundOutcome::LocalWins, .. })]
        ));
        assert_eq!(game.score()[Seat::Local], 1);
    }

    #[test]
    fn test_early_peer_choice_is_held() {
        let mut game = quick_match();

        let updates = game.apply_remote_choice(peer(Choice::Paper, 1)).unwrap();
        assert_eq!(updates, vec![RpsUpdate::PeerReady { round: 1 }]);
        assert_eq!(game.phase(), RoundPhase::AwaitingSelfChoice);
        assert!(game.clock().is_running());

        let updates = game.select(Choice::Rock).unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(game.score()[Seat::Peer], 1);
    }

    #[test]
    fn test_duplicate_and_closed_choices_are_refused() {
        let mut game = quick_match();
        game.select(Choice::Rock).unwrap();

        assert_eq!(game.select(Choice::Paper), Err(Rejection::DuplicateChoice { round: 1 }));

        game.apply_remote_choice(peer(Choice::Rock, 1)).unwrap();
        assert_eq!(game.select(Choice::Paper), Err(Rejection::RoundClosed { round: 1 }));
        assert_eq!(
            game.apply_remote_choice(peer(Choice::Rock, 1)),
            Err(Rejection::RoundClosed { round: 1 })
        );
    }

    #[test]
    fn test_stale_round_is_refused() {
        let mut game = quick_match();

        assert_eq!(
            game.apply_remote_choice(peer(Choice::Rock, 2)),
            Err(Rejection::StaleRound { got: 2, current: 1 })
        );
        assert!(!game.peer_ready());
    }

    #[test]
    fn test_next_round_choice_waits_while_settling() {
        let mut game = quick_match();
        game.select(Choice::Rock).unwrap();
        game.apply_remote_choice(peer(Choice::Rock, 1)).unwrap();

        assert_eq!(game.apply_remote_choice(peer(Choice::Paper, 2)), Ok(vec![]));
        assert!(!game.peer_ready());
        assert_eq!(
            game.apply_remote_choice(peer(Choice::Rock, 2)),
            Err(Rejection::DuplicateChoice { round: 2 })
        );
        assert_eq!(
            game.apply_remote_choice(peer(Choice::Rock, 3)),
            Err(Rejection::StaleRound { got: 3, current: 1 })
        );

        assert_eq!(
            game.tick(),
            vec![RpsUpdate::RoundStarted { round: 2 }, RpsUpdate::PeerReady { round: 2 }]
        );
        assert!(game.peer_ready());

        let updates = game.select(Choice::Scissors).unwrap();
        assert!(matches!(
            &updates[..],
            [RpsUpdate::Committed { .. }, RpsUpdate::RoundResolved(RoundRecord { round: 2, outcome: RoundOutcome::LocalWins, .. })]
        ));
    }

    #[test]
    fn test_timeout_picks_for_the_player() {
        let mut game = quick_match();

        assert!(matches!(&game.tick()[..], [RpsUpdate::ClockTicked { remaining: 2, .. }]));
        game.tick();
        let updates = game.tick();

        match &updates[..] {
            [RpsUpdate::Committed { payload, source }] => {
                assert_eq!(*source, ChoiceSource::Timeout);
                assert_eq!(payload.round, 1);
                assert_eq!(game.local_choice(), Some(payload.choice));
            }
            other => panic!("expected a timeout commit, got {other:?}"),
        }
        assert_eq!(game.select(Choice::Rock), Err(Rejection::DuplicateChoice { round: 1 }));
    }

    #[test]
    fn test_settle_starts_next_round() {
        let mut game = quick_match();
        game.select(Choice::Rock).unwrap();
        game.apply_remote_choice(peer(Choice::Rock, 1)).unwrap();

        assert_eq!(game.tick(), vec![RpsUpdate::RoundStarted { round: 2 }]);
        assert_eq!(game.round(), 2);
        assert_eq!(game.local_choice(), None);
        assert!(!game.peer_ready());
        assert!(game.clock().is_running());
        assert_eq!(game.clock().round(), 2);
    }

    #[test]
    fn test_zero_delay_settles_immediately() {
        let config = RpsConfig::default().with_delays(0, 0).with_wins_needed(1);
        let mut game = RpsMatch::new(config, GameRng::new(1));

        game.select(Choice::Paper).unwrap();
        let updates = game.apply_remote_choice(peer(Choice::Rock, 1)).unwrap();

        assert!(matches!(updates.last(), Some(RpsUpdate::MatchOver(_))));
        assert_eq!(game.phase(), RoundPhase::MatchOver);
    }

    #[test]
    fn test_halt_stops_everything() {
        let mut game = quick_match();
        game.halt();

        assert!(game.tick().is_empty());
        assert_eq!(game.select(Choice::Rock), Err(Rejection::SessionEnded));
        assert!(!game.clock().is_running());
    }
}
