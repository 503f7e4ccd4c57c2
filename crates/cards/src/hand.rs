use super::card::Card;
use super::suit::Suit;
use parlor_core::Arbitrary;

/// An unordered set of cards stored as a 52-bit word.
///
/// Each bit represents one card of the sorted deck. Single-word storage makes
/// union, removal, and per-suit masking cheap enough for the evaluator to
/// re-derive everything on demand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0 & u64::from(card) != 0
    }
    pub fn add(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// The cards of the full deck absent from this hand.
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    /// The subset of this hand in the given suit.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random::<u64>() & Self::mask())
    }
}

/// draining a hand yields its cards in deck order, lowest first
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                let card = Card::from(bits.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
}

/// u64 isomorphism, bits above the 52nd are shed
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().copied().map(u64::from).fold(0, |a, b| a | b))
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}

/// one-way projection onto a 13-bit rank mask.
/// each rank nibble collapses to its low bit, then the
/// surviving bits walk down from stride four to stride one.
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u16, |mask, i| {
            mask | (((x >> (3 * i)) as u16) & (1 << i))
        })
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        Self::from(
            s.split_whitespace()
                .map(Card::from)
                .collect::<Vec<Card>>(),
        )
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        (*self).into_iter().try_for_each(|card| write!(f, "{}", card))
    }
}
