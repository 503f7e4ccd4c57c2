use super::Blackjack;
use super::Checkers;
use super::Chess;
use super::Connect;
use super::GameKind;
use super::Mancala;
use super::Move;
use super::MoveError;
use super::Poker;
use super::Side;
use super::Step;
use super::Verdict;
use serde::Serialize;

/// Every game's position behind one tag.
///
/// Serialization is untagged: the wire carries the bare per-game value
/// (grids as nested arrays, card games as objects) because clients already
/// know which game the session is playing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Board {
    Connect(Connect),
    Checkers(Checkers),
    Chess(Chess),
    Mancala(Mancala),
    Blackjack(Blackjack),
    Poker(Poker),
}

impl Board {
    /// The starting position for a game type. Card games shuffle here.
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::Connect => Self::Connect(Connect::new()),
            GameKind::Checkers => Self::Checkers(Checkers::new()),
            GameKind::Chess => Self::Chess(Chess::new()),
            GameKind::Mancala => Self::Mancala(Mancala::new()),
            GameKind::Blackjack => Self::Blackjack(Blackjack::deal()),
            GameKind::Poker => Self::Poker(Poker::deal()),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::Connect(_) => GameKind::Connect,
            Self::Checkers(_) => GameKind::Checkers,
            Self::Chess(_) => GameKind::Chess,
            Self::Mancala(_) => GameKind::Mancala,
            Self::Blackjack(_) => GameKind::Blackjack,
            Self::Poker(_) => GameKind::Poker,
        }
    }

    /// Validate and play one move for the given side.
    ///
    /// The board is never mutated in place; a refused move leaves nothing
    /// to roll back.
    pub fn apply(&self, side: Side, mv: &Move) -> Result<Step, MoveError> {
        match self {
            Self::Connect(board) => board.apply(side, mv),
            Self::Checkers(board) => board.apply(side, mv),
            Self::Chess(board) => board.apply(side, mv),
            Self::Mancala(board) => board.apply(side, mv),
            Self::Blackjack(board) => board.apply(side, mv),
            Self::Poker(board) => board.apply(side, mv),
        }
    }

    /// The outcome, given which side would move next.
    pub fn verdict(&self, next: Side) -> Verdict {
        match self {
            Self::Connect(board) => board.verdict(next),
            Self::Checkers(board) => board.verdict(next),
            Self::Chess(board) => board.verdict(next),
            Self::Mancala(board) => board.verdict(next),
            Self::Blackjack(board) => board.verdict(next),
            Self::Poker(board) => board.verdict(next),
        }
    }

    /// Every legal move for the side. Empty when the side cannot act.
    pub fn moves(&self, side: Side) -> Vec<Move> {
        match self {
            Self::Connect(board) => board.moves(side),
            Self::Checkers(board) => board.moves(side),
            Self::Chess(board) => board.moves(side),
            Self::Mancala(board) => board.moves(side),
            Self::Blackjack(board) => board.moves(side),
            Self::Poker(board) => board.moves(side),
        }
    }
}
