//! Rule engines for the six parlor games.
//!
//! Every game sits behind the same surface: [`Board`] holds the position,
//! [`Board::apply`] validates and plays one [`Move`], [`Board::verdict`]
//! reads the outcome, and [`Board::moves`] enumerates what is legal. The
//! dispatcher upstream never needs to know which game it is running.
//!
//! ## Architecture
//!
//! - grid games (`connect`, `checkers`, `chess`, `mancala`) are pure value
//!   transforms with no hidden state
//! - card games (`blackjack`, `poker`) shuffle at deal time and draw from
//!   the unseen remainder, so applying a move may consume randomness
//! - boards serialize into the exact shapes clients render, nothing more

mod board;
mod difficulty;
mod error;
mod kind;
mod moves;
mod side;
mod verdict;

pub mod blackjack;
pub mod checkers;
pub mod chess;
pub mod connect;
pub mod mancala;
pub mod poker;

pub use board::*;
pub use difficulty::*;
pub use error::*;
pub use kind::*;
pub use moves::*;
pub use side::*;
pub use verdict::*;

pub use blackjack::Blackjack;
pub use checkers::Checkers;
pub use chess::Chess;
pub use connect::Connect;
pub use mancala::Mancala;
pub use poker::Poker;
