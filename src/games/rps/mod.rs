//! Rock-paper-scissors, best of five, with a per-round clock.

mod choice;
mod clock;
mod machine;

pub use choice::{resolve, Choice, ChoicePayload, RoundOutcome};
pub use clock::{ClockState, ClockTick, RoundClock};
pub use machine::{ChoiceSource, RoundPhase, RoundRecord, RpsMatch, RpsUpdate};
