/// Why a move was refused.
///
/// Malformed means the payload could not be decoded for this game at all.
/// Illegal means it decoded fine but the rules forbid it. Both reach the
/// offending client as an ERROR frame; neither touches the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    Malformed(String),
    Illegal(String),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Malformed(reason) => write!(f, "malformed move: {}", reason),
            Self::Illegal(reason) => write!(f, "illegal move: {}", reason),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_reason() {
        let error = MoveError::Illegal("column 9 out of range".into());
        assert_eq!(error.to_string(), "illegal move: column 9 out of range");
    }
}
