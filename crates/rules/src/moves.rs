use super::GameKind;
use super::MoveError;
use serde::Deserialize;

/// Board coordinates as clients send them: row then column, zero-based
/// from the top-left of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Square {
    pub r: usize,
    pub c: usize,
}

/// A decoded move, shaped per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Drop a token into a four-in-a-row column.
    Drop(usize),
    /// Move a piece between squares, for checkers and chess.
    Slide { from: Square, to: Square },
    /// Sow the seeds of a mancala pit.
    Sow(usize),
    Hit,
    Stand,
    Fold,
    Check,
    Call,
    Bet,
}

#[derive(Deserialize)]
struct SlideWire {
    from: Square,
    to: Square,
}

fn action(value: &serde_json::Value) -> Result<&str, MoveError> {
    value
        .get("action")
        .and_then(|action| action.as_str())
        .ok_or_else(|| MoveError::Malformed("expected an action field".into()))
}

impl Move {
    /// Decode a MAKE_MOVE payload for the given game.
    ///
    /// The payload shape is game-specific: a bare number for column and pit
    /// games, a from/to pair for piece games, an action object for card
    /// games. Anything else is [`MoveError::Malformed`].
    pub fn decode(kind: GameKind, value: &serde_json::Value) -> Result<Self, MoveError> {
        match kind {
            GameKind::Connect => value
                .as_u64()
                .map(|column| Self::Drop(column as usize))
                .ok_or_else(|| MoveError::Malformed("expected a column number".into())),
            GameKind::Mancala => value
                .as_u64()
                .map(|pit| Self::Sow(pit as usize))
                .ok_or_else(|| MoveError::Malformed("expected a pit number".into())),
            GameKind::Checkers | GameKind::Chess => serde_json::from_value::<SlideWire>(value.clone())
                .map(|slide| Self::Slide {
                    from: slide.from,
                    to: slide.to,
                })
                .map_err(|e| MoveError::Malformed(e.to_string())),
            GameKind::Blackjack => match action(value)? {
                "hit" => Ok(Self::Hit),
                "stand" => Ok(Self::Stand),
                other => Err(MoveError::Malformed(format!("unknown action: {}", other))),
            },
            GameKind::Poker => match action(value)? {
                "fold" => Ok(Self::Fold),
                "check" => Ok(Self::Check),
                "call" => Ok(Self::Call),
                "bet" => Ok(Self::Bet),
                other => Err(MoveError::Malformed(format!("unknown action: {}", other))),
            },
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Drop(column) => write!(f, "drop {}", column),
            Self::Slide { from, to } => {
                write!(f, "({},{}) to ({},{})", from.r, from.c, to.r, to.c)
            }
            Self::Sow(pit) => write!(f, "sow {}", pit),
            Self::Hit => write!(f, "hit"),
            Self::Stand => write!(f, "stand"),
            Self::Fold => write!(f, "fold"),
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Bet => write!(f, "bet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_column() {
        let mv = Move::decode(GameKind::Connect, &json!(3)).unwrap();
        assert_eq!(mv, Move::Drop(3));
    }

    #[test]
    fn decodes_slide() {
        let mv = Move::decode(
            GameKind::Checkers,
            &json!({ "from": { "r": 5, "c": 0 }, "to": { "r": 4, "c": 1 } }),
        )
        .unwrap();
        assert_eq!(
            mv,
            Move::Slide {
                from: Square { r: 5, c: 0 },
                to: Square { r: 4, c: 1 },
            }
        );
    }

    #[test]
    fn decodes_actions() {
        let hit = Move::decode(GameKind::Blackjack, &json!({ "action": "hit" })).unwrap();
        assert_eq!(hit, Move::Hit);
        // extra fields like the bet amount ride along and are ignored
        let bet = Move::decode(GameKind::Poker, &json!({ "action": "bet", "amount": 50 })).unwrap();
        assert_eq!(bet, Move::Bet);
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(Move::decode(GameKind::Connect, &json!("three")).is_err());
        assert!(Move::decode(GameKind::Chess, &json!(4)).is_err());
        assert!(Move::decode(GameKind::Poker, &json!({ "action": "raise" })).is_err());
    }
}
