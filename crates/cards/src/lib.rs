//! Card primitives and poker hand evaluation.
//!
//! This crate covers every card-game need of the workspace: a compact
//! [`Card`] with rank and suit, an ordered [`Deck`] that can be shuffled or
//! rebuilt from the unseen remainder, and a bitset [`Hand`] with a lazy
//! [`Evaluator`] for showdown comparison.
//!
//! ## Representation
//!
//! - [`Card`] — A rank and a suit, isomorphic to `u8` 0..52
//! - [`Hand`] — An unordered card set as a 52-bit word
//! - [`Deck`] — An ordered pile of cards, drawn from the top
//!
//! ## Evaluation
//!
//! - [`Ranking`] — The nine hand categories, ordered
//! - [`Kickers`] — Tie-breaking side cards as a rank mask
//! - [`Strength`] — Ranking plus kickers, totally ordered
//! - [`Evaluator`] — Finds the best five-of-n interpretation of a hand
mod card;
mod deck;
mod evaluator;
mod hand;
mod kickers;
mod rank;
mod ranking;
mod strength;
mod suit;

pub use card::*;
pub use deck::*;
pub use evaluator::*;
pub use hand::*;
pub use kickers::*;
pub use rank::*;
pub use ranking::*;
pub use strength::*;
pub use suit::*;
