use super::suit::Suit;
use crate::Arbitrary;

/// Whether the two cards of a non-pair hand share a suit.
///
/// Written as the trailing `s` or `o` of canonical notation ("AKs", "87o").
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suitedness {
    Suited,
    Offsuit,
}

impl Suitedness {
    pub const fn all() -> [Suitedness; 2] {
        [Suitedness::Suited, Suitedness::Offsuit]
    }
    /// Canonical notation suffix.
    pub const fn suffix(&self) -> char {
        match self {
            Suitedness::Suited => 's',
            Suitedness::Offsuit => 'o',
        }
    }
    /// Word used in hand labels.
    pub const fn word(&self) -> &'static str {
        match self {
            Suitedness::Suited => "suited",
            Suitedness::Offsuit => "offsuit",
        }
    }
    /// Concrete two-card holdings of one non-pair rank combination.
    pub const fn combos(&self) -> usize {
        match self {
            Suitedness::Suited => 4,
            Suitedness::Offsuit => 12,
        }
    }
}

/// inferred from two explicit suits
impl From<(Suit, Suit)> for Suitedness {
    fn from((a, b): (Suit, Suit)) -> Self {
        match a == b {
            true => Suitedness::Suited,
            false => Suitedness::Offsuit,
        }
    }
}

/// char isomorphism, strict: only the canonical lowercase suffix
impl TryFrom<char> for Suitedness {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            's' => Ok(Suitedness::Suited),
            'o' => Ok(Suitedness::Offsuit),
            _ => Err(format!("invalid suffix char: {}", c)),
        }
    }
}

/// str isomorphism, lenient: suffix or word, any case
impl TryFrom<&str> for Suitedness {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "s" | "suited" => Ok(Suitedness::Suited),
            "o" | "offsuit" => Ok(Suitedness::Offsuit),
            _ => Err(format!("invalid suffix str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suitedness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl Arbitrary for Suitedness {
    fn random() -> Self {
        match rand::random_bool(0.5) {
            true => Suitedness::Suited,
            false => Suitedness::Offsuit,
        }
    }
}
