use parlor_core::GameId;
use parlor_core::ID;
use parlor_rules::Board;
use parlor_rules::Difficulty;
use parlor_rules::GameKind;
use parlor_rules::Side;
use parlor_rules::Verdict;

/// Marker for socket connections. The uuid doubles as the public player
/// identity clients see in MATCH_FOUND.
pub struct Client;

pub type ClientId = ID<Client>;

/// Who occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    Human(ClientId),
    Cpu,
}

impl Participant {
    pub fn client(&self) -> Option<ClientId> {
        match self {
            Self::Human(id) => Some(*id),
            Self::Cpu => None,
        }
    }

    pub fn is_cpu(&self) -> bool {
        matches!(self, Self::Cpu)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Human(id) => write!(f, "{}", id),
            Self::Cpu => write!(f, "cpu"),
        }
    }
}

/// Session lifecycle. Finished games keep their final board; aborted ones
/// stop where the disconnect caught them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Finished,
    Aborted,
}

/// One running game.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: GameId,
    pub kind: GameKind,
    pub seats: [Participant; 2],
    pub board: Board,
    pub turn: Side,
    pub status: Status,
    pub verdict: Verdict,
    pub difficulty: Option<Difficulty>,
}

impl Session {
    /// A fresh human-versus-human session. The first player seated moves
    /// first.
    pub fn versus(id: GameId, kind: GameKind, one: ClientId, two: ClientId) -> Self {
        Self {
            id,
            kind,
            seats: [Participant::Human(one), Participant::Human(two)],
            board: Board::new(kind),
            turn: Side::One,
            status: Status::Playing,
            verdict: Verdict::Open,
            difficulty: None,
        }
    }

    /// A fresh session against the computer. The human always sits on
    /// side one.
    pub fn against_cpu(id: GameId, kind: GameKind, human: ClientId, difficulty: Difficulty) -> Self {
        Self {
            id,
            kind,
            seats: [Participant::Human(human), Participant::Cpu],
            board: Board::new(kind),
            turn: Side::One,
            status: Status::Playing,
            verdict: Verdict::Open,
            difficulty: Some(difficulty),
        }
    }

    pub fn seat(&self, side: Side) -> Participant {
        self.seats[side.index()]
    }

    /// Which side this client sits on, if they are in the game at all.
    pub fn side_of(&self, client: ClientId) -> Option<Side> {
        [Side::One, Side::Two]
            .into_iter()
            .find(|side| self.seat(*side).client() == Some(client))
    }

    /// The side the computer plays, if this is a cpu session.
    pub fn cpu_side(&self) -> Option<Side> {
        [Side::One, Side::Two]
            .into_iter()
            .find(|side| self.seat(*side).is_cpu())
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    /// Every human seated, for broadcast fan-out.
    pub fn humans(&self) -> impl Iterator<Item = ClientId> + '_ {
        self.seats.iter().filter_map(|seat| seat.client())
    }
}
