//! Board rules trait and game results.
//!
//! Chess and checkers implement `BoardRules`; sessions drive them without
//! interpreting game-specific concepts directly. `GameResult` is the terminal
//! value every session (board or rock-paper-scissors) reports.

pub mod engine;

pub use engine::{BoardRules, EndReason, GameResult, Winner};
