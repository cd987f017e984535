//! Choices, round outcomes and the choice payload exchanged with the peer.

use serde::{Deserialize, Serialize};

use crate::core::side::Seat;

/// Rock, paper or scissors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All three choices, in the order the timeout pick draws from.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Check if this choice beats `other`.
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        };
        f.write_str(name)
    }
}

/// How a round ended, from the local side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    LocalWins,
    PeerWins,
    Draw,
}

impl RoundOutcome {
    /// Seat that takes the round, `None` on a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            RoundOutcome::LocalWins => Some(Seat::Local),
            RoundOutcome::PeerWins => Some(Seat::Peer),
            RoundOutcome::Draw => None,
        }
    }
}

/// Resolve a round from both committed choices.
#[must_use]
pub fn resolve(local: Choice, peer: Choice) -> RoundOutcome {
    if local == peer {
        RoundOutcome::Draw
    } else if local.beats(peer) {
        RoundOutcome::LocalWins
    } else {
        RoundOutcome::PeerWins
    }
}

/// A committed choice as sent to the peer: `{"choice": "rock", "round": 2}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoicePayload {
    pub choice: Choice,
    pub round: u32,
}

impl ChoicePayload {
    #[must_use]
    pub const fn new(choice: Choice, round: u32) -> Self {
        Self { choice, round }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_a_cycle() {
        for a in Choice::ALL {
            assert!(!a.beats(a));
            let wins = Choice::ALL.iter().filter(|&&b| a.beats(b)).count();
            assert_eq!(wins, 1, "{a} should beat exactly one choice");
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(Choice::Rock, Choice::Scissors), RoundOutcome::LocalWins);
        assert_eq!(resolve(Choice::Rock, Choice::Paper), RoundOutcome::PeerWins);
        assert_eq!(resolve(Choice::Paper, Choice::Paper), RoundOutcome::Draw);
        assert_eq!(resolve(Choice::Scissors, Choice::Paper).winner(), Some(Seat::Local));
        assert_eq!(resolve(Choice::Scissors, Choice::Scissors).winner(), None);
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = ChoicePayload::new(Choice::Scissors, 4);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"choice":"scissors","round":4}"#);

        let back: ChoicePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
        assert!(serde_json::from_str::<ChoicePayload>(r#"{"choice":"lizard","round":1}"#).is_err());
    }
}
