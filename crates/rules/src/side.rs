use serde::Serialize;
use serde::Serializer;

/// A seat in a two-player session. Side one always moves first.
///
/// On the wire a side is the number 1 or 2, matching the turn and winner
/// fields clients read.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const fn flip(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Zero-based index, for seat arrays.
    pub const fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        match side {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

impl Serialize for Side {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*self))
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "player1"),
            Self::Two => write!(f, "player2"),
        }
    }
}
