use super::*;
use parlor_cards::Card;
use parlor_cards::Deck;
use parlor_cards::Rank;
use parlor_core::BLACKJACK;
use parlor_core::DEALER_STAND;
use serde::Serialize;

/// Blackjack against the house.
///
/// Side one plays the hand; side two is the dealer line and never holds
/// the turn. The deal gives the player two cards and the dealer one.
/// Standing resolves the dealer in place: it draws until reaching
/// seventeen, so a resolved dealer always shows at least two cards and an
/// unresolved one exactly one. Aces count eleven and demote to one, one
/// at a time, while the total is busting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blackjack {
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<Card>,
    pub deck: Deck,
}

impl Blackjack {
    pub fn deal() -> Self {
        let mut deck = Deck::shuffled(&mut rand::rng());
        let player_hand = (0..2).filter_map(|_| deck.draw()).collect();
        let dealer_hand = (0..1).filter_map(|_| deck.draw()).collect();
        Self {
            player_hand,
            dealer_hand,
            deck,
        }
    }

    /// Best total for a hand, demoting aces from eleven to one as needed.
    pub fn score(cards: &[Card]) -> u8 {
        let mut total: u16 = cards.iter().map(|card| card.rank().value() as u16).sum();
        let mut aces = cards
            .iter()
            .filter(|card| card.rank() == Rank::Ace)
            .count();
        while total > BLACKJACK as u16 && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total as u8
    }

    pub fn moves(&self, side: Side) -> Vec<Move> {
        match side {
            Side::One if self.verdict(side) == Verdict::Open => vec![Move::Hit, Move::Stand],
            _ => vec![],
        }
    }

    pub fn apply(&self, side: Side, mv: &Move) -> Result<Step, MoveError> {
        if side == Side::Two {
            return Err(MoveError::Illegal("the dealer plays itself".into()));
        }
        let mut next = self.clone();
        match mv {
            Move::Hit => {
                let card = next
                    .deck
                    .draw()
                    .ok_or_else(|| MoveError::Illegal("the deck is exhausted".into()))?;
                next.player_hand.push(card);
                Ok(Step {
                    board: Board::Blackjack(next),
                    next: Side::One,
                })
            }
            Move::Stand => {
                while Self::score(&next.dealer_hand) < DEALER_STAND {
                    match next.deck.draw() {
                        Some(card) => next.dealer_hand.push(card),
                        None => break,
                    }
                }
                Ok(Step {
                    board: Board::Blackjack(next),
                    next: Side::Two,
                })
            }
            _ => Err(MoveError::Malformed("expected hit or stand".into())),
        }
    }

    /// A bust loses outright. Otherwise the hand is open until the dealer
    /// has resolved, then the higher total wins and a tie pushes.
    pub fn verdict(&self, _next: Side) -> Verdict {
        let player = Self::score(&self.player_hand);
        if player > BLACKJACK {
            return Verdict::Win(Side::Two);
        }
        if self.dealer_hand.len() < 2 {
            return Verdict::Open;
        }
        let dealer = Self::score(&self.dealer_hand);
        if dealer > BLACKJACK || player > dealer {
            Verdict::Win(Side::One)
        } else if dealer > player {
            Verdict::Win(Side::Two)
        } else {
            Verdict::Draw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(spec: &str) -> Vec<Card> {
        spec.split_whitespace().map(Card::from).collect()
    }

    /// Deck cards are listed bottom to top, so the last one is drawn first.
    fn fixed(player: &str, dealer: &str, deck: &str) -> Blackjack {
        Blackjack {
            player_hand: cards(player),
            dealer_hand: cards(dealer),
            deck: Deck::from(cards(deck)),
        }
    }

    #[test]
    fn ace_counts_eleven_when_it_fits() {
        assert_eq!(Blackjack::score(&cards("As Kh")), 21);
        assert_eq!(Blackjack::score(&cards("As 5d 3c")), 19);
    }

    #[test]
    fn aces_demote_one_at_a_time() {
        assert_eq!(Blackjack::score(&cards("As Ad 9h")), 21);
        assert_eq!(Blackjack::score(&cards("As Kh 5d")), 16);
        assert_eq!(Blackjack::score(&cards("As Ad Ah 8c")), 21);
    }

    #[test]
    fn hit_draws_one_card_and_keeps_the_turn() {
        let board = fixed("5c 6d", "9h", "2s 3s 4s");
        let step = board.apply(Side::One, &Move::Hit).unwrap();
        let next = match step.board {
            Board::Blackjack(next) => next,
            _ => unreachable!(),
        };
        assert_eq!(next.player_hand.len(), 3);
        assert_eq!(next.deck.len(), 2);
        assert_eq!(step.next, Side::One);
        assert_eq!(next.verdict(Side::One), Verdict::Open);
    }

    #[test]
    fn busting_hand_loses_immediately() {
        let board = fixed("Kc Qd", "9h", "2s 5s");
        let step = board.apply(Side::One, &Move::Hit).unwrap();
        let next = match step.board {
            Board::Blackjack(next) => next,
            _ => unreachable!(),
        };
        // the five of spades sits on top of the deck
        assert_eq!(Blackjack::score(&next.player_hand), 25);
        assert_eq!(next.verdict(Side::One), Verdict::Win(Side::Two));
    }

    #[test]
    fn standing_resolves_the_dealer_to_seventeen() {
        let board = fixed("Kc 9d", "6h", "2c 5d Jh");
        let step = board.apply(Side::One, &Move::Stand).unwrap();
        let next = match step.board {
            Board::Blackjack(next) => next,
            _ => unreachable!(),
        };
        // the dealer draws the jack for sixteen, the five for twenty-one
        assert_eq!(next.dealer_hand.len(), 3);
        assert_eq!(Blackjack::score(&next.dealer_hand), 21);
        assert_eq!(next.deck.len(), 1);
        assert_eq!(next.verdict(Side::Two), Verdict::Win(Side::Two));
    }

    #[test]
    fn dealer_bust_pays_the_player() {
        let board = fixed("Kc 9d", "Th", "9s 6s");
        let step = board.apply(Side::One, &Move::Stand).unwrap();
        let next = match step.board {
            Board::Blackjack(next) => next,
            _ => unreachable!(),
        };
        assert!(Blackjack::score(&next.dealer_hand) > BLACKJACK);
        assert_eq!(next.verdict(Side::Two), Verdict::Win(Side::One));
    }

    #[test]
    fn equal_totals_push() {
        let board = fixed("Kc 9d", "Th 9c", "");
        assert_eq!(board.verdict(Side::Two), Verdict::Draw);
    }

    #[test]
    fn dealer_side_never_acts() {
        let board = fixed("5c 6d", "9h", "2s");
        assert!(board.apply(Side::Two, &Move::Hit).is_err());
        assert!(board.moves(Side::Two).is_empty());
        assert_eq!(board.moves(Side::One), vec![Move::Hit, Move::Stand]);
    }
}
