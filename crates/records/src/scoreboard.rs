use parlor_lobby::ClientId;
use parlor_lobby::Participant;
use parlor_rules::GameKind;
use parlor_rules::Side;
use parlor_rules::Verdict;
use serde::Serialize;
use std::collections::HashMap;

/// How a finished game reads from one seat's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn of(verdict: Verdict, side: Side) -> Option<Self> {
        match verdict {
            Verdict::Open => None,
            Verdict::Draw => Some(Self::Draw),
            Verdict::Win(winner) if winner == side => Some(Self::Win),
            Verdict::Win(_) => Some(Self::Loss),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u32,
    losses: u32,
    draws: u32,
}

/// One leaderboard row, shaped for the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub player_id: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// Win-loss-draw tallies per player and game.
#[derive(Debug, Default)]
pub struct Scoreboard {
    tallies: HashMap<(ClientId, GameKind), Tally>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into a seat's record. Cpu seats have no
    /// identity to rank and are skipped.
    pub fn record(&mut self, seat: Participant, kind: GameKind, outcome: Outcome) {
        let client = match seat.client() {
            Some(client) => client,
            None => return,
        };
        log::debug!("[scores] {} takes a {:?} at {}", client, outcome, kind);
        let tally = self.tallies.entry((client, kind)).or_default();
        match outcome {
            Outcome::Win => tally.wins += 1,
            Outcome::Loss => tally.losses += 1,
            Outcome::Draw => tally.draws += 1,
        }
    }

    /// The best records for one game, most wins first, at most `n` rows.
    pub fn top(&self, kind: GameKind, n: usize) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .tallies
            .iter()
            .filter(|((_, game), _)| *game == kind)
            .map(|((client, _), tally)| Entry {
                player_id: client.to_string(),
                wins: tally.wins,
                losses: tally.losses,
                draws: tally.draws,
            })
            .collect();
        entries.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
        entries.truncate(n);
        entries
    }
}
