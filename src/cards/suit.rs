use crate::Arbitrary;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// Hand notation only cares whether two suits match, so suits appear
/// solely when a hand is typed as two explicit cards ("AhKh").
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism, either case or the unicode symbol
impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::C),
            'd' | '♦' => Ok(Suit::D),
            'h' | '♥' => Ok(Suit::H),
            's' | '♠' => Ok(Suit::S),
            _ => Err(format!("invalid suit char: {}", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

impl Arbitrary for Suit {
    fn random() -> Self {
        Suit::from(rand::random_range(0..4u8))
    }
}
