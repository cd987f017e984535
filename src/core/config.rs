//! Engine configuration types.
//!
//! Each game has its own small config with source-compatible defaults:
//! - `ChessConfig`: promotion behaviour
//! - `CheckersConfig`: scope of the forced-capture rule
//! - `RpsConfig`: round clock length, settle delays and match length
//! - `EngineConfig`: combines all of the above for a `SessionRegistry`

use serde::{Deserialize, Serialize};

/// What happens to a pawn that reaches the far rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionRule {
    /// The pawn stays a pawn.
    #[default]
    None,
    /// The pawn becomes a queen as part of the same move.
    AutoQueen,
}

/// Scope of the checkers forced-capture rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureRule {
    /// Only the selected piece's captures suppress its quiet moves.
    #[default]
    PerPiece,
    /// If any piece of the mover can capture, pieces that cannot capture
    /// generate no moves at all.
    Global,
}

/// Chess rule options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessConfig {
    /// Pawn promotion behaviour.
    pub promotion: PromotionRule,
}

impl ChessConfig {
    /// Set the promotion rule.
    #[must_use]
    pub fn with_promotion(mut self, promotion: PromotionRule) -> Self {
        self.promotion = promotion;
        self
    }
}

/// Checkers rule options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersConfig {
    /// Forced-capture scope.
    pub capture_rule: CaptureRule,
}

impl CheckersConfig {
    /// Set the forced-capture scope.
    #[must_use]
    pub fn with_capture_rule(mut self, capture_rule: CaptureRule) -> Self {
        self.capture_rule = capture_rule;
        self
    }
}

/// Rock-paper-scissors match timing and length.
///
/// All delays are counted in ticks of the same round clock, one tick per
/// `tick_interval_ms`. Decoding rejects a zero round clock or a zero win
/// target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRpsConfig")]
pub struct RpsConfig {
    /// Ticks a player has to choose before a choice is made for them.
    pub round_ticks: u32,

    /// Wall-clock length of one tick, for the caller's timer.
    pub tick_interval_ms: u64,

    /// Ticks between a resolved round and the start of the next one.
    pub next_round_delay_ticks: u32,

    /// Ticks between the deciding round and the match result.
    pub match_over_delay_ticks: u32,

    /// Round wins that take the match (3 for best-of-5).
    pub wins_needed: u32,
}

#[derive(Deserialize)]
struct RawRpsConfig {
    round_ticks: u32,
    tick_interval_ms: u64,
    next_round_delay_ticks: u32,
    match_over_delay_ticks: u32,
    wins_needed: u32,
}

impl TryFrom<RawRpsConfig> for RpsConfig {
    type Error = String;

    fn try_from(raw: RawRpsConfig) -> Result<Self, Self::Error> {
        if raw.round_ticks == 0 {
            return Err("round_ticks must be at least 1".to_string());
        }
        if raw.wins_needed == 0 {
            return Err("wins_needed must be at least 1".to_string());
        }
        Ok(Self {
            round_ticks: raw.round_ticks,
            tick_interval_ms: raw.tick_interval_ms,
            next_round_delay_ticks: raw.next_round_delay_ticks,
            match_over_delay_ticks: raw.match_over_delay_ticks,
            wins_needed: raw.wins_needed,
        })
    }
}

impl Default for RpsConfig {
    fn default() -> Self {
        Self {
            round_ticks: 10,
            tick_interval_ms: 1000,
            next_round_delay_ticks: 3,
            match_over_delay_ticks: 2,
            wins_needed: 3,
        }
    }
}

impl RpsConfig {
    /// Set the round clock length.
    #[must_use]
    pub fn with_round_ticks(mut self, ticks: u32) -> Self {
        assert!(ticks > 0, "Round clock needs at least 1 tick");
        self.round_ticks = ticks;
        self
    }

    /// Set the settle delays after a resolved round.
    #[must_use]
    pub fn with_delays(mut self, next_round: u32, match_over: u32) -> Self {
        self.next_round_delay_ticks = next_round;
        self.match_over_delay_ticks = match_over;
        self
    }

    /// Set the number of round wins that end the match.
    #[must_use]
    pub fn with_wins_needed(mut self, wins: u32) -> Self {
        assert!(wins > 0, "A match needs at least 1 winning round");
        self.wins_needed = wins;
        self
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub chess: ChessConfig,
    pub checkers: CheckersConfig,
    pub rps: RpsConfig,

    /// Seed for session randomness. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    #[must_use]
    pub fn with_chess(mut self, chess: ChessConfig) -> Self {
        self.chess = chess;
        self
    }

    #[must_use]
    pub fn with_checkers(mut self, checkers: CheckersConfig) -> Self {
        self.checkers = checkers;
        self
    }

    #[must_use]
    pub fn with_rps(mut self, rps: RpsConfig) -> Self {
        self.rps = rps;
        self
    }

    /// Fix the seed so every session's randomness is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
