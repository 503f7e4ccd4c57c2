use super::card::Card;
use super::hand::Hand;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// An ordered pile of cards, drawn from the top (the end of the vec).
///
/// Blackjack carries its remaining deck inside the board; poker rebuilds one
/// from the unseen complement whenever a street is revealed. Both paths end
/// up here: a shuffled vec popped from the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A full 52-card deck in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = (0..52u8).map(Card::from).collect::<Vec<Card>>();
        cards.shuffle(rng);
        Self(cards)
    }
    /// A shuffled deck of every card absent from the given hand.
    pub fn without<R: Rng + ?Sized>(seen: &Hand, rng: &mut R) -> Self {
        let mut cards = Vec::<Card>::from(seen.complement());
        cards.shuffle(rng);
        Self(cards)
    }
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// explicit orders are useful for deterministic tests
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_is_distinct() {
        let mut deck = Deck::shuffled(&mut rand::rng());
        let mut seen = Hand::empty();
        while let Some(card) = deck.draw() {
            assert!(!seen.contains(card));
            seen.add(card);
        }
        assert_eq!(seen.size(), 52);
    }

    #[test]
    fn without_excludes_seen() {
        let seen = Hand::from("As Kd 7h");
        let mut deck = Deck::without(&seen, &mut rand::rng());
        assert_eq!(deck.len(), 49);
        while let Some(card) = deck.draw() {
            assert!(!seen.contains(card));
        }
    }

    #[test]
    fn draws_from_the_top() {
        let mut deck = Deck::from(vec![Card::from("2c"), Card::from("As")]);
        assert_eq!(deck.draw(), Some(Card::from("As")));
        assert_eq!(deck.draw(), Some(Card::from("2c")));
        assert_eq!(deck.draw(), None);
    }
}
