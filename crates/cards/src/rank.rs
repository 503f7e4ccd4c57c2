use parlor_core::Arbitrary;

/// Card rank, two low through ace high.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    const fn mask() -> u16 {
        0b1111111111111
    }
    /// All thirteen ranks, ace first.
    pub fn descending() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().rev()
    }
    /// Blackjack point value. Court cards count ten, aces start high.
    pub const fn value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            r => *r as u8 + 2,
        }
    }
    /// Rank text as clients render it ("10" rather than "T").
    pub const fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        Self::ALL[n as usize]
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism: the highest set bit of a 13-bit rank mask.
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        let msb = u16::BITS - 1 - (n & Self::mask()).leading_zeros();
        Rank::from(msb as u8)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// u64 injection: all four cards of this rank in a 52-bit hand.
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (u8::from(r) * 4)
    }
}

/// str isomorphism, accepting "T" or "10" for tens.
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match s {
            "T" => Rank::Ten,
            s => Self::ALL
                .into_iter()
                .find(|rank| rank.label() == s)
                .unwrap_or_else(|| unreachable!("invalid rank str: {}", s)),
        }
    }
}

impl Arbitrary for Rank {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..13u8))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ten => "T",
                r => r.label(),
            }
        )
    }
}
