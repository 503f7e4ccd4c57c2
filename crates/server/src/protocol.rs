use parlor_core::GameId;
use parlor_lobby::Session;
use parlor_rules::Board;
use parlor_rules::Difficulty;
use parlor_rules::GameKind;
use parlor_rules::Side;
use parlor_rules::Verdict;
use serde::Deserialize;
use serde::Serialize;

/// Frames browsers send.
///
/// Every frame is an envelope of `type` and `payload`, with camelCase
/// keys inside the payload. The move in MAKE_MOVE stays an opaque json
/// value here; its shape depends on which game the session runs, so the
/// hub decodes it against the session rather than the frame.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    JoinQueue { game_type: GameKind },
    LeaveQueue {},
    #[serde(rename_all = "camelCase")]
    StartCpuGame {
        game_type: GameKind,
        #[serde(default)]
        difficulty: Difficulty,
    },
    #[serde(rename_all = "camelCase")]
    MakeMove {
        game_id: GameId,
        #[serde(rename = "move")]
        mv: serde_json::Value,
    },
}

/// Frames the server pushes, mirrored envelope of [`ClientMessage`].
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    MatchFound {
        game_id: GameId,
        game_type: GameKind,
        your_side: Side,
        opponent_id: String,
    },
    #[serde(rename_all = "camelCase")]
    GameUpdate { board: Board, turn: Side },
    #[serde(rename_all = "camelCase")]
    GameOver { board: Board, winner: Winner },
    OpponentDisconnected {},
    #[serde(rename_all = "camelCase")]
    Error { message: String },
}

impl ServerMessage {
    /// Announce a fresh session to the human on the given side.
    pub fn matched(session: &Session, side: Side) -> Self {
        Self::MatchFound {
            game_id: session.id,
            game_type: session.kind,
            your_side: side,
            opponent_id: session.seat(side.flip()).to_string(),
        }
    }

    /// The position as it now stands and whose turn it is.
    pub fn update(session: &Session) -> Self {
        Self::GameUpdate {
            board: session.board.clone(),
            turn: session.turn,
        }
    }

    /// The final position with the settled result.
    pub fn over(session: &Session) -> Self {
        Self::GameOver {
            board: session.board.clone(),
            winner: match session.verdict {
                Verdict::Win(side) => Winner::Side(side),
                _ => Winner::Draw,
            },
        }
    }

    pub fn disconnected() -> Self {
        Self::OpponentDisconnected {}
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

/// Terminal result on the wire: the winning seat number, or "draw".
#[derive(Debug, Clone, Copy)]
pub enum Winner {
    Side(Side),
    Draw,
}

impl Serialize for Winner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Side(side) => side.serialize(serializer),
            Self::Draw => serializer.serialize_str("draw"),
        }
    }
}
