use crate::ClientId;
use crate::Session;
use crate::Status;
use parlor_core::GameId;
use parlor_rules::Board;
use parlor_rules::Difficulty;
use parlor_rules::GameKind;
use parlor_rules::Side;
use parlor_rules::Verdict;
use std::collections::HashMap;

/// In-memory session store.
///
/// Game ids count up from one and are never reused within a process
/// lifetime. Finished and aborted sessions stay in the map; only the
/// active lookup filters on status.
#[derive(Debug, Default)]
pub struct Store {
    sessions: HashMap<GameId, Session>,
    counter: GameId,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> GameId {
        self.counter += 1;
        self.counter
    }

    /// Open a human-versus-human session.
    pub fn open_match(&mut self, kind: GameKind, one: ClientId, two: ClientId) -> &Session {
        let id = self.next_id();
        log::debug!("[store] game {} opens {}: {} vs {}", id, kind, one, two);
        self.sessions
            .entry(id)
            .or_insert_with(|| Session::versus(id, kind, one, two))
    }

    /// Open a human-versus-cpu session.
    pub fn open_cpu(
        &mut self,
        kind: GameKind,
        human: ClientId,
        difficulty: Difficulty,
    ) -> &Session {
        let id = self.next_id();
        log::debug!("[store] game {} opens {}: {} vs {} cpu", id, kind, human, difficulty);
        self.sessions
            .entry(id)
            .or_insert_with(|| Session::against_cpu(id, kind, human, difficulty))
    }

    pub fn get(&self, id: GameId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: GameId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    /// Replace the mutable half of a session in one step and hand back
    /// the committed snapshot. Unknown ids change nothing.
    pub fn update(
        &mut self,
        id: GameId,
        board: Board,
        turn: Side,
        status: Status,
        verdict: Verdict,
    ) -> Option<&Session> {
        let session = self.sessions.get_mut(&id)?;
        session.board = board;
        session.turn = turn;
        session.status = status;
        session.verdict = verdict;
        Some(session)
    }

    /// The playing session this client sits in, if any. A client is in at
    /// most one at a time.
    pub fn active_id(&self, client: ClientId) -> Option<GameId> {
        self.sessions
            .values()
            .find(|session| session.is_playing() && session.side_of(client).is_some())
            .map(|session| session.id)
    }

    /// Mark a playing session aborted and hand it back.
    pub fn abort(&mut self, id: GameId) -> Option<&Session> {
        let session = self.sessions.get_mut(&id)?;
        if session.status == Status::Playing {
            session.status = Status::Aborted;
            log::debug!("[store] game {} aborted", id);
        }
        Some(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
