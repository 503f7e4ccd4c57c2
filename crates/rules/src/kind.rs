use serde::Deserialize;
use serde::Serialize;

/// The six games the server hosts.
///
/// The wire labels match what clients send in JOIN_QUEUE and
/// START_CPU_GAME payloads.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    #[serde(rename = "connect4")]
    Connect,
    Checkers,
    Chess,
    Mancala,
    Blackjack,
    Poker,
}

impl GameKind {
    pub const fn all() -> [Self; 6] {
        [
            Self::Connect,
            Self::Checkers,
            Self::Chess,
            Self::Mancala,
            Self::Blackjack,
            Self::Poker,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Connect => "connect4",
            Self::Checkers => "checkers",
            Self::Chess => "chess",
            Self::Mancala => "mancala",
            Self::Blackjack => "blackjack",
            Self::Poker => "poker",
        }
    }
}

impl TryFrom<&str> for GameKind {
    type Error = String;
    fn try_from(label: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| format!("unknown game: {}", label))
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
