use crate::ClientId;
use parlor_rules::GameKind;
use std::collections::HashMap;
use std::collections::VecDeque;

/// FIFO matchmaking, one lane per game.
///
/// A client waits in at most one lane at a time. Re-joining the same lane
/// keeps the ticket's place; joining a different one moves it. Pairing
/// pops the two oldest waiters in one motion, so a ticket can never be
/// matched twice.
#[derive(Debug, Default)]
pub struct Queue {
    lanes: HashMap<GameKind, VecDeque<ClientId>>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join a lane. Re-joining the same lane keeps the ticket's place;
    /// joining a different one moves it.
    pub fn enqueue(&mut self, kind: GameKind, client: ClientId) {
        let waiting = self
            .lanes
            .get(&kind)
            .map(|lane| lane.contains(&client))
            .unwrap_or(false);
        if !waiting {
            self.dequeue(client);
            self.lanes.entry(kind).or_default().push_back(client);
            log::debug!("[queue] {} waits for {}", client, kind);
        }
    }

    /// Pop the two oldest waiters the moment the lane can pair them.
    pub fn try_match(&mut self, kind: GameKind) -> Option<(ClientId, ClientId)> {
        let lane = self.lanes.get_mut(&kind)?;
        match lane.len() {
            0 | 1 => None,
            _ => Some((lane.pop_front()?, lane.pop_front()?)),
        }
    }

    /// Leave every lane. True when the client was actually waiting.
    pub fn dequeue(&mut self, client: ClientId) -> bool {
        let mut waited = false;
        for lane in self.lanes.values_mut() {
            if let Some(at) = lane.iter().position(|waiter| *waiter == client) {
                lane.remove(at);
                waited = true;
            }
        }
        waited
    }

    /// The lane this client is waiting in, if any.
    pub fn waiting(&self, client: ClientId) -> Option<GameKind> {
        self.lanes
            .iter()
            .find(|(_, lane)| lane.contains(&client))
            .map(|(kind, _)| *kind)
    }

    pub fn len(&self) -> usize {
        self.lanes.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
