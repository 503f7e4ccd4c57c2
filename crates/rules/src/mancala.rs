use super::*;
use serde::Serialize;

const SLOTS: usize = 14;
const SEEDS: u8 = 4;

/// Mancala on the usual two-row board, flattened the way clients render
/// it: pits 0 through 5 and store 6 belong to side one, pits 7 through 12
/// and store 13 to side two. Sowing runs counter-clockwise and skips the
/// opponent's store.
///
/// Two house rules carry the game. Landing the last seed in your own
/// store grants another turn. Landing it in one of your own pits that was
/// not empty picks that pit up and relays the sowing from there, in the
/// same turn. When either row runs dry the other side sweeps its own row
/// into its store and the fuller store wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mancala(pub [u8; SLOTS]);

impl Mancala {
    pub fn new() -> Self {
        let mut slots = [SEEDS; SLOTS];
        slots[Self::store(Side::One)] = 0;
        slots[Self::store(Side::Two)] = 0;
        Self(slots)
    }

    pub const fn store(side: Side) -> usize {
        match side {
            Side::One => 6,
            Side::Two => SLOTS - 1,
        }
    }

    pub fn pits(side: Side) -> std::ops::Range<usize> {
        match side {
            Side::One => 0..6,
            Side::Two => 7..13,
        }
    }

    fn row_empty(&self, side: Side) -> bool {
        Self::pits(side).all(|pit| self.0[pit] == 0)
    }

    pub fn moves(&self, side: Side) -> Vec<Move> {
        Self::pits(side)
            .filter(|pit| self.0[*pit] > 0)
            .map(Move::Sow)
            .collect()
    }

    pub fn apply(&self, side: Side, mv: &Move) -> Result<Step, MoveError> {
        let pit = match mv {
            Move::Sow(pit) => *pit,
            _ => return Err(MoveError::Malformed("expected a pit number".into())),
        };
        if !Self::pits(side).contains(&pit) {
            return Err(MoveError::Illegal(format!("pit {} is not yours", pit)));
        }
        if self.0[pit] == 0 {
            return Err(MoveError::Illegal(format!("pit {} is empty", pit)));
        }
        let mut next = self.clone();
        let skip = Self::store(side.flip());
        let mut pos = pit;
        let mut again = false;
        loop {
            let mut seeds = next.0[pos];
            next.0[pos] = 0;
            while seeds > 0 {
                pos = (pos + 1) % SLOTS;
                if pos == skip {
                    pos = (pos + 1) % SLOTS;
                }
                next.0[pos] += 1;
                seeds -= 1;
            }
            if pos == Self::store(side) {
                again = true;
                break;
            }
            // relay: a last seed into an already seeded pit of your own
            // row scoops it up and keeps sowing
            if Self::pits(side).contains(&pos) && next.0[pos] > 1 {
                log::debug!("[mancala] {} relays from pit {}", side, pos);
                continue;
            }
            break;
        }
        for side in [Side::One, Side::Two] {
            if next.row_empty(side) {
                let other = side.flip();
                for pit in Self::pits(other) {
                    next.0[Self::store(other)] += next.0[pit];
                    next.0[pit] = 0;
                }
                break;
            }
        }
        Ok(Step {
            board: Board::Mancala(next),
            next: if again { side } else { side.flip() },
        })
    }

    pub fn verdict(&self, _next: Side) -> Verdict {
        if self.row_empty(Side::One) && self.row_empty(Side::Two) {
            let one = self.0[Self::store(Side::One)];
            let two = self.0[Self::store(Side::Two)];
            match one.cmp(&two) {
                std::cmp::Ordering::Greater => Verdict::Win(Side::One),
                std::cmp::Ordering::Less => Verdict::Win(Side::Two),
                std::cmp::Ordering::Equal => Verdict::Draw,
            }
        } else {
            Verdict::Open
        }
    }
}

impl Default for Mancala {
    fn default() -> Self {
        Self::new()
    }
}
