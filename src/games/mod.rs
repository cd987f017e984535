//! Game implementations.
//!
//! - `chess` and `checkers` implement `BoardRules` and run inside a
//!   `BoardSession`
//! - `rps` is a round-based match with its own state machine

pub mod checkers;
pub mod chess;
pub mod rps;
