use parlor_core::Arbitrary;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// The ordering (C < D < H < S) is arbitrary but consistent. Clients render
/// the unicode glyph, so that is what goes over the wire.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Unicode suit symbol for the wire.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Suit::C => "♣",
            Suit::D => "♦",
            Suit::H => "♥",
            Suit::S => "♠",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection: the 13 bit positions of this suit across a 52-bit hand.
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << u8::from(s)
    }
}

/// str isomorphism, accepting the terse letter or the wire glyph.
impl From<&str> for Suit {
    fn from(s: &str) -> Self {
        match s {
            "c" | "♣" => Suit::C,
            "d" | "♦" => Suit::D,
            "h" | "♥" => Suit::H,
            "s" | "♠" => Suit::S,
            _ => unreachable!("invalid suit str: {}", s),
        }
    }
}

impl Arbitrary for Suit {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..4u8))
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::C => "c",
                Suit::D => "d",
                Suit::H => "h",
                Suit::S => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::from(u8::from(suit)));
        }
    }

    #[test]
    fn suit_masks_cover_deck() {
        let union = Suit::all()
            .iter()
            .map(|s| u64::from(*s))
            .fold(0u64, |a, b| a | b);
        assert_eq!(union, (1u64 << 52) - 1);
    }
}
