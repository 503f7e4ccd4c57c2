//! Matchmaking and session bookkeeping.
//!
//! The lobby owns everything between a socket and a rule engine: who is
//! waiting for which game, which sessions are live, and who sits where.
//! It is plain single-threaded state; the dispatcher above it serializes
//! all access.
//!
//! ## Architecture
//!
//! - `queue` pairs the two oldest waiters per game, first in first out
//! - `session` is one running game: seats, board, turn, lifecycle
//! - `store` hands out game ids and finds sessions by id or by player

mod queue;
mod session;
mod store;

pub use queue::*;
pub use session::*;
pub use store::*;
