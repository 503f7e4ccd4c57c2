//! Per-player results, kept in memory for the leaderboard endpoint.
//!
//! Finished games fold into one tally per player and game. Aborted games
//! never reach this crate.

mod scoreboard;

pub use scoreboard::*;
