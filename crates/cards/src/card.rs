use super::rank::Rank;
use super::suit::Suit;
use parlor_core::Arbitrary;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeStruct;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// A playing card: a rank and a suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self {
            rank: Rank::from((n.trailing_zeros() / 4) as u8),
            suit: Suit::from((n.trailing_zeros() % 4) as u8),
        }
    }
}

/// str isomorphism, rank first: "As", "Td", "10♥".
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        let last = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or_else(|| unreachable!("empty card str"));
        let (rank, suit) = s.split_at(last);
        Self {
            rank: Rank::from(rank),
            suit: Suit::from(suit),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}

/// Wire shape: `{suit, rank, value}` with the glyph suit, the client-facing
/// rank text, and the blackjack point value.
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut card = serializer.serialize_struct("Card", 3)?;
        card.serialize_field("suit", self.suit.glyph())?;
        card.serialize_field("rank", self.rank.label())?;
        card.serialize_field("value", &self.rank.value())?;
        card.end()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert_eq!(card, Card::from(u8::from(card)));
    }

    #[test]
    fn parse_str() {
        assert_eq!(Card::from("As"), Card::from((Rank::Ace, Suit::S)));
        assert_eq!(Card::from("Td"), Card::from((Rank::Ten, Suit::D)));
        assert_eq!(Card::from("10♥"), Card::from((Rank::Ten, Suit::H)));
    }

    #[test]
    fn wire_shape() {
        let json = serde_json::to_value(Card::from("Ah")).unwrap();
        assert_eq!(json["suit"], "♥");
        assert_eq!(json["rank"], "A");
        assert_eq!(json["value"], 11);
    }
}
