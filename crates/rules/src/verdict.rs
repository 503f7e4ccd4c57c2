use super::Board;
use super::Side;

/// The outcome read off a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Open,
    Win(Side),
    Draw,
}

impl Verdict {
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::Open)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Win(side) => write!(f, "{} wins", side),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// A legal move taken: the position it produced and whose turn follows.
///
/// Most games hand the turn to the other side. Mancala keeps it on a
/// store landing, and blackjack parks it on the dealer once the player
/// stands.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub board: Board,
    pub next: Side,
}
