use super::hand::Hand;
use super::kickers::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// ace plays low in the five-high straight
const WHEEL: u16 = 0b_1000000001111;

/// Finds the best five-card reading of a hand.
///
/// Works directly on the [`Hand`] bitset: suit masks answer flushes,
/// shifted ANDs answer straights, and per-rank popcounts answer the
/// paired categories. Nothing allocates until kickers are collected.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Evaluator {
    /// The best category this hand makes, searched from the top down.
    pub fn ranking(&self) -> Ranking {
        None.or_else(|| self.straight_flush())
            .or_else(|| self.quads())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.trips())
            .or_else(|| self.pairs())
            .or_else(|| self.high_card())
            .unwrap_or_else(|| unreachable!("a hand holds at least one card"))
    }

    /// The highest leftover ranks, as many as the category leaves room for.
    pub fn kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::from(0u16),
            n => {
                let spare = u16::from(self.0) & ranking.mask();
                Kickers::from(
                    Rank::descending()
                        .filter(|rank| spare & u16::from(*rank) != 0)
                        .take(n)
                        .collect::<Vec<Rank>>(),
                )
            }
        }
    }

    //

    fn high_card(&self) -> Option<Ranking> {
        self.repeats(1).next().map(Ranking::HighCard)
    }
    fn pairs(&self) -> Option<Ranking> {
        let mut pairs = self.repeats(2);
        let hi = pairs.next()?;
        match pairs.next() {
            Some(lo) => Some(Ranking::TwoPair(hi, lo)),
            None => Some(Ranking::OnePair(hi)),
        }
    }
    fn trips(&self) -> Option<Ranking> {
        self.repeats(3).next().map(Ranking::ThreeOAK)
    }
    fn quads(&self) -> Option<Ranking> {
        self.repeats(4).next().map(Ranking::FourOAK)
    }
    fn full_house(&self) -> Option<Ranking> {
        let triple = self.repeats(3).next()?;
        self.repeats(2)
            .find(|rank| *rank != triple)
            .map(|pair| Ranking::FullHouse(triple, pair))
    }
    fn straight(&self) -> Option<Ranking> {
        self.runs(self.0).map(Ranking::Straight)
    }
    fn flush(&self) -> Option<Ranking> {
        let suit = self.suited()?;
        let best = Rank::from(u16::from(self.0.of(&suit)));
        Some(Ranking::Flush(best))
    }
    fn straight_flush(&self) -> Option<Ranking> {
        let suit = self.suited()?;
        self.runs(self.0.of(&suit)).map(Ranking::StraightFlush)
    }

    /// Ranks held at least n times, best first.
    fn repeats(&self, n: u32) -> impl Iterator<Item = Rank> + '_ {
        Rank::descending().filter(move |rank| self.count(*rank) >= n)
    }
    fn count(&self, rank: Rank) -> u32 {
        (u64::from(self.0) & u64::from(rank)).count_ones()
    }
    /// A suit holding five or more of the hand's cards.
    fn suited(&self) -> Option<Suit> {
        Suit::all().into_iter().find(|suit| self.0.of(suit).size() >= 5)
    }
    /// The top of the longest five-long rank run, if any.
    fn runs(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let run = ranks & ranks << 1;
        let run = run & run << 1;
        let run = run & run << 2;
        match run {
            0 if WHEEL & ranks == WHEEL => Some(Rank::Five),
            0 => None,
            bits => Some(Rank::from(bits)),
        }
    }
}
