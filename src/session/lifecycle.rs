//! Session lifecycle shared by every game: terminal result and draw offers.
//!
//! The first terminal result is final. Anything that would end the session
//! again, such as the peer leaving after the match was decided, is ignored
//! and reported as `None`.

use tracing::info;

use crate::core::error::Rejection;
use crate::core::side::Seat;
use crate::rules::{EndReason, GameResult, Winner};

/// Result and pending draw offer of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    result: Option<GameResult>,
    draw_offer: Option<Seat>,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Seat whose draw offer is waiting for an answer.
    #[must_use]
    pub fn pending_draw_offer(&self) -> Option<Seat> {
        self.draw_offer
    }

    /// Refuse with `SessionEnded` once a result is recorded.
    pub fn ensure_open(&self) -> Result<(), Rejection> {
        if self.is_over() {
            Err(Rejection::SessionEnded)
        } else {
            Ok(())
        }
    }

    /// Record `result` unless the session already ended.
    ///
    /// Returns the result when it was recorded.
    pub fn finish(&mut self, result: GameResult) -> Option<GameResult> {
        if self.is_over() {
            return None;
        }
        info!(winner = ?result.winner, reason = ?result.reason, "session finished");
        self.draw_offer = None;
        self.result = Some(result);
        self.result
    }

    /// Record an offer of a draw by `by`. A repeated offer replaces the
    /// previous one.
    pub fn offer_draw(&mut self, by: Seat) -> Result<(), Rejection> {
        self.ensure_open()?;
        info!(by = %by, "draw offered");
        self.draw_offer = Some(by);
        Ok(())
    }

    /// Accept the other seat's pending draw offer.
    pub fn accept_draw(&mut self, by: Seat) -> Result<GameResult, Rejection> {
        self.ensure_open()?;
        if self.draw_offer != Some(by.opposite()) {
            return Err(Rejection::NoPendingDrawOffer);
        }
        let result = GameResult::new(Winner::Draw, EndReason::DrawAgreed);
        self.finish(result);
        Ok(result)
    }

    /// Drop any pending offer.
    pub fn decline_draw(&mut self) {
        self.draw_offer = None;
    }
}

/// Ending operations common to every session type.
///
/// Implementors expose their `Lifecycle` and may override `on_finished` to
/// release what a finished session must not keep running (the RPS clock).
pub trait Session {
    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    /// Called once, right after the session gets its result.
    fn on_finished(&mut self) {}

    // === Convenience Methods ===

    fn result(&self) -> Option<GameResult> {
        self.lifecycle().result()
    }

    fn is_over(&self) -> bool {
        self.lifecycle().is_over()
    }

    /// End the session with `result` unless it already ended.
    fn end(&mut self, result: GameResult) -> Option<GameResult> {
        let recorded = self.lifecycle_mut().finish(result);
        if recorded.is_some() {
            self.on_finished();
        }
        recorded
    }

    /// `by` resigns; the other seat wins.
    fn resign(&mut self, by: Seat) -> Option<GameResult> {
        info!(by = %by, "resignation");
        self.end(GameResult::new(Winner::seat(by.opposite()), EndReason::Resignation))
    }

    /// The local participant leaves; the peer is awarded the game.
    fn leave(&mut self) -> Option<GameResult> {
        self.end(GameResult::new(Winner::Peer, EndReason::Abandoned))
    }

    /// The peer left or disconnected; the local side is awarded the game.
    fn opponent_left(&mut self) -> Option<GameResult> {
        self.end(GameResult::new(Winner::Local, EndReason::OpponentLeft))
    }

    fn offer_draw(&mut self, by: Seat) -> Result<(), Rejection> {
        self.lifecycle_mut().offer_draw(by)
    }

    fn accept_draw(&mut self, by: Seat) -> Result<GameResult, Rejection> {
        let result = self.lifecycle_mut().accept_draw(by)?;
        self.on_finished();
        Ok(result)
    }

    fn decline_draw(&mut self) {
        self.lifecycle_mut().decline_draw();
    }
}
