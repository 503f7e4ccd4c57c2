use super::*;
use parlor_cards::Card;
use parlor_cards::Deck;
use parlor_cards::Hand;
use parlor_cards::Strength;
use parlor_core::BET;
use parlor_core::Chips;
use parlor_core::STACK;
use serde::Serialize;
use std::cmp::Ordering;

/// The betting streets, preflop through showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    const fn next(&self) -> Self {
        match self {
            Self::Preflop => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River | Self::Showdown => Self::Showdown,
        }
    }

    /// Community cards revealed on entering this street.
    const fn reveals(&self) -> usize {
        match self {
            Self::Flop => 3,
            Self::Turn | Self::River => 1,
            Self::Preflop | Self::Showdown => 0,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
            Self::Showdown => write!(f, "showdown"),
        }
    }
}

/// Heads-up poker, one fixed-limit hand per session.
///
/// Both seats start on a thousand chips with an empty pot and no blinds.
/// A bet is always fifty on top of whatever is owed; a call matches the
/// outstanding bet and closes the street; a check passes, and a check
/// behind closes the street. Streets deal from the unseen remainder of
/// the deck, so nothing about the order of earlier draws is remembered.
/// Folding concedes the pot. At showdown the better five of seven wins
/// and a tie splits the pot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poker {
    pub player_hand: Vec<Card>,
    pub cpu_hand: Vec<Card>,
    #[serde(rename = "communityCards")]
    pub community: Vec<Card>,
    pub player_chips: Chips,
    pub cpu_chips: Chips,
    pub pot: Chips,
    pub current_bet: Chips,
    #[serde(rename = "phase")]
    pub street: Street,
    pub turn: Side,
    #[serde(skip)]
    pub folded: Option<Side>,
}

impl Poker {
    pub fn deal() -> Self {
        let mut deck = Deck::shuffled(&mut rand::rng());
        Self {
            player_hand: (0..2).filter_map(|_| deck.draw()).collect(),
            cpu_hand: (0..2).filter_map(|_| deck.draw()).collect(),
            community: Vec::new(),
            player_chips: STACK,
            cpu_chips: STACK,
            pot: 0,
            current_bet: 0,
            street: Street::Preflop,
            turn: Side::One,
            folded: None,
        }
    }

    pub fn stack(&self, side: Side) -> Chips {
        match side {
            Side::One => self.player_chips,
            Side::Two => self.cpu_chips,
        }
    }

    fn stack_mut(&mut self, side: Side) -> &mut Chips {
        match side {
            Side::One => &mut self.player_chips,
            Side::Two => &mut self.cpu_chips,
        }
    }

    pub fn hole(&self, side: Side) -> &[Card] {
        match side {
            Side::One => &self.player_hand,
            Side::Two => &self.cpu_hand,
        }
    }

    /// Best five-of-seven strength for a seat, using whatever community
    /// cards are out.
    pub fn strength(&self, side: Side) -> Strength {
        let mut seen = Hand::from(self.community.clone());
        for card in self.hole(side) {
            seen.add(*card);
        }
        Strength::from(seen)
    }

    fn seen(&self) -> Hand {
        let mut seen = Hand::from(self.community.clone());
        for card in self.player_hand.iter().chain(self.cpu_hand.iter()) {
            seen.add(*card);
        }
        seen
    }

    fn pay(&mut self, side: Side, amount: Chips) {
        *self.stack_mut(side) -= amount;
        self.pot += amount;
    }

    fn award(&mut self, side: Side) {
        *self.stack_mut(side) += self.pot;
        self.pot = 0;
    }

    /// Close the street: reveal the next community cards or settle the
    /// showdown.
    fn advance(&mut self) {
        self.street = self.street.next();
        match self.street {
            Street::Showdown => self.settle(),
            street => {
                let mut deck = Deck::without(&self.seen(), &mut rand::rng());
                for _ in 0..street.reveals() {
                    if let Some(card) = deck.draw() {
                        self.community.push(card);
                    }
                }
                self.current_bet = 0;
                self.turn = Side::One;
            }
        }
    }

    fn settle(&mut self) {
        match self.strength(Side::One).cmp(&self.strength(Side::Two)) {
            Ordering::Greater => self.award(Side::One),
            Ordering::Less => self.award(Side::Two),
            Ordering::Equal => {
                let half = self.pot / 2;
                self.player_chips += half;
                self.cpu_chips += self.pot - half;
                self.pot = 0;
            }
        }
    }

    pub fn moves(&self, side: Side) -> Vec<Move> {
        if self.street == Street::Showdown || self.folded.is_some() {
            return vec![];
        }
        let mut out = vec![Move::Fold];
        if self.current_bet == 0 {
            out.push(Move::Check);
        } else if self.stack(side) >= self.current_bet {
            out.push(Move::Call);
        }
        if self.stack(side) >= self.current_bet + BET {
            out.push(Move::Bet);
        }
        out
    }

    pub fn apply(&self, side: Side, mv: &Move) -> Result<Step, MoveError> {
        if !matches!(mv, Move::Fold | Move::Check | Move::Call | Move::Bet) {
            return Err(MoveError::Malformed(
                "expected fold, check, call, or bet".into(),
            ));
        }
        if !self.moves(side).contains(mv) {
            return Err(MoveError::Illegal(format!("cannot {} here", mv)));
        }
        let mut next = self.clone();
        match mv {
            Move::Fold => {
                next.folded = Some(side);
                next.award(side.flip());
            }
            // a check behind closes the street, a first check passes
            Move::Check => match side {
                Side::One => next.turn = Side::Two,
                Side::Two => next.advance(),
            },
            Move::Call => {
                let owed = next.current_bet;
                next.pay(side, owed);
                next.advance();
            }
            Move::Bet => {
                let owed = next.current_bet + BET;
                next.pay(side, owed);
                next.current_bet = BET;
                next.turn = side.flip();
            }
            _ => unreachable!(),
        }
        let turn = next.turn;
        Ok(Step {
            board: Board::Poker(next),
            next: turn,
        })
    }

    pub fn verdict(&self, _next: Side) -> Verdict {
        if let Some(folded) = self.folded {
            return Verdict::Win(folded.flip());
        }
        if self.street != Street::Showdown {
            return Verdict::Open;
        }
        match self.strength(Side::One).cmp(&self.strength(Side::Two)) {
            Ordering::Greater => Verdict::Win(Side::One),
            Ordering::Less => Verdict::Win(Side::Two),
            Ordering::Equal => Verdict::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(spec: &str) -> Vec<Card> {
        spec.split_whitespace().map(Card::from).collect()
    }

    fn heads_up(player: &str, cpu: &str, community: &str, street: Street) -> Poker {
        Poker {
            player_hand: cards(player),
            cpu_hand: cards(cpu),
            community: cards(community),
            player_chips: STACK,
            cpu_chips: STACK,
            pot: 0,
            current_bet: 0,
            street,
            turn: Side::One,
            folded: None,
        }
    }

    fn next_board(step: Step) -> Poker {
        match step.board {
            Board::Poker(board) => board,
            _ => unreachable!(),
        }
    }

    #[test]
    fn bet_moves_chips_and_passes_the_turn() {
        let board = heads_up("As Ks", "2c 7d", "", Street::Preflop);
        let step = board.apply(Side::One, &Move::Bet).unwrap();
        let next = next_board(step);
        assert_eq!(next.player_chips, STACK - BET);
        assert_eq!(next.pot, BET);
        assert_eq!(next.current_bet, BET);
        assert_eq!(next.turn, Side::Two);
    }

    #[test]
    fn raising_owes_the_outstanding_bet_plus_fifty() {
        let board = heads_up("As Ks", "2c 7d", "", Street::Preflop);
        let step = board.apply(Side::One, &Move::Bet).unwrap();
        let step = next_board(step).apply(Side::Two, &Move::Bet).unwrap();
        let next = next_board(step);
        assert_eq!(next.cpu_chips, STACK - 2 * BET);
        assert_eq!(next.pot, 3 * BET);
        assert_eq!(next.current_bet, BET);
        assert_eq!(next.turn, Side::One);
    }

    #[test]
    fn call_closes_the_street_and_deals_the_flop() {
        let board = heads_up("As Ks", "2c 7d", "", Street::Preflop);
        let step = board.apply(Side::One, &Move::Bet).unwrap();
        let step = next_board(step).apply(Side::Two, &Move::Call).unwrap();
        let next = next_board(step);
        assert_eq!(next.street, Street::Flop);
        assert_eq!(next.community.len(), 3);
        assert_eq!(next.current_bet, 0);
        assert_eq!(next.turn, Side::One);
        assert_eq!(next.pot, 2 * BET);
        // the flop never duplicates a hole card
        for card in &next.community {
            assert!(!board.player_hand.contains(card));
            assert!(!board.cpu_hand.contains(card));
        }
    }

    #[test]
    fn check_passes_and_check_behind_closes() {
        let board = heads_up("As Ks", "2c 7d", "", Street::Preflop);
        let step = board.apply(Side::One, &Move::Check).unwrap();
        let passed = next_board(step);
        assert_eq!(passed.street, Street::Preflop);
        assert_eq!(passed.turn, Side::Two);
        let step = passed.apply(Side::Two, &Move::Check).unwrap();
        let closed = next_board(step);
        assert_eq!(closed.street, Street::Flop);
        assert_eq!(closed.community.len(), 3);
        assert_eq!(closed.turn, Side::One);
    }

    #[test]
    fn checking_into_an_outstanding_bet_is_illegal() {
        let board = heads_up("As Ks", "2c 7d", "", Street::Preflop);
        let step = board.apply(Side::One, &Move::Bet).unwrap();
        let next = next_board(step);
        assert!(next.apply(Side::Two, &Move::Check).is_err());
        assert!(next.moves(Side::Two).contains(&Move::Call));
    }

    #[test]
    fn unaffordable_call_is_illegal_rather_than_all_in() {
        let mut board = heads_up("As Ks", "2c 7d", "", Street::Preflop);
        board.cpu_chips = 30;
        board.current_bet = BET;
        board.turn = Side::Two;
        let moves = board.moves(Side::Two);
        assert!(!moves.contains(&Move::Call));
        assert!(!moves.contains(&Move::Bet));
        assert_eq!(moves, vec![Move::Fold]);
    }

    #[test]
    fn fold_concedes_the_pot() {
        let mut board = heads_up("As Ks", "2c 7d", "", Street::Flop);
        board.pot = 200;
        board.player_chips = 900;
        board.cpu_chips = 900;
        let step = board.apply(Side::Two, &Move::Fold).unwrap();
        let next = next_board(step);
        assert_eq!(next.player_chips, 1100);
        assert_eq!(next.pot, 0);
        assert_eq!(next.verdict(Side::One), Verdict::Win(Side::One));
        assert!(next.moves(Side::One).is_empty());
    }

    #[test]
    fn river_check_behind_settles_the_showdown() {
        // player holds the nut flush, cpu a straight
        let mut board = heads_up("Ah Kh", "9s 8d", "2h 7h Th 6c 5d", Street::River);
        board.pot = 100;
        board.player_chips = 950;
        board.cpu_chips = 950;
        let step = board.apply(Side::One, &Move::Check).unwrap();
        let step = next_board(step).apply(Side::Two, &Move::Check).unwrap();
        let next = next_board(step);
        assert_eq!(next.street, Street::Showdown);
        assert_eq!(next.player_chips, 1050);
        assert_eq!(next.cpu_chips, 950);
        assert_eq!(next.verdict(Side::One), Verdict::Win(Side::One));
    }

    #[test]
    fn shared_board_plays_split_the_pot() {
        // both hole pairs miss a board that already makes a straight
        let mut board = heads_up("2c 3d", "2s 3h", "Ts Js Qd Kc Ad", Street::River);
        board.pot = 100;
        board.player_chips = 950;
        board.cpu_chips = 950;
        let step = board.apply(Side::One, &Move::Check).unwrap();
        let step = next_board(step).apply(Side::Two, &Move::Check).unwrap();
        let next = next_board(step);
        assert_eq!(next.verdict(Side::One), Verdict::Draw);
        assert_eq!(next.player_chips, 1000);
        assert_eq!(next.cpu_chips, 1000);
    }

    #[test]
    fn showdown_is_deterministic() {
        let board = heads_up("Ah Kh", "9s 8d", "2h 7h Th 6c 5d", Street::River);
        for _ in 0..10 {
            assert!(board.strength(Side::One) > board.strength(Side::Two));
        }
    }

    #[test]
    fn no_moves_after_the_hand_ends() {
        let mut board = heads_up("Ah Kh", "9s 8d", "2h 7h Th 6c 5d", Street::Showdown);
        assert!(board.moves(Side::One).is_empty());
        board.street = Street::River;
        board.folded = Some(Side::Two);
        assert!(board.moves(Side::One).is_empty());
    }
}
