use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kickers::Kickers;
use super::ranking::Ranking;

/// A hand's total strength: category first, kickers to break ties.
///
/// Always constructed from a Hand, which is an unordered set of cards; the
/// evaluator picks the best five-card interpretation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.ranking();
        let kicks = evaluator.kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::rank::Rank;

    #[test]
    fn category_dominates_kickers() {
        let pair = Strength::from(Hand::from("2s 2h 3d 4c 5s 8h 9d"));
        let high = Strength::from(Hand::from("As Kh Qd Jc 9s 8d 2c"));
        assert!(pair > high);
    }

    #[test]
    fn kickers_break_ties() {
        let better = Strength::from(Hand::from("As Ah Kd 7c 2s"));
        let worse = Strength::from(Hand::from("Ad Ac Qd 7h 2d"));
        assert_eq!(better.value(), Ranking::OnePair(Rank::Ace));
        assert_eq!(worse.value(), Ranking::OnePair(Rank::Ace));
        assert!(better > worse);
    }

    #[test]
    fn identical_boards_tie() {
        let a = Strength::from(Hand::from("As Ah Kd Kc Qs"));
        let b = Strength::from(Hand::from("Ad Ac Kh Ks Qd"));
        assert_eq!(a, b);
    }
}
