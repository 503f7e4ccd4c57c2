//! Computer opponents.
//!
//! One [`Cpu`] plays every game through the shared board surface. The
//! difficulty ladder is deliberately simple: easy is uniform chance,
//! medium takes an immediate win when one exists, and hard adds a block
//! against handed-over wins plus a per-game tactical lean before falling
//! back to chance.

mod cpu;
mod tactics;

pub use cpu::*;
