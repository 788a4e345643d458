use crate::Arbitrary;
use crate::cards::Rank;
use crate::cards::Suitedness;

/// A starting hand in canonical notation.
///
/// Pairs carry one rank and no suffix ("QQ"). Non-pairs store the higher
/// rank first and always carry a suitedness ("AKs", "87o"). Build non-pairs
/// through [`Notation::new`], which does the ordering.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Notation {
    Pair(Rank),
    Suited(Rank, Rank),
    Offsuit(Rank, Rank),
}

impl Notation {
    /// Orders the ranks high-to-low. Equal ranks collapse to a pair,
    /// whatever the suitedness.
    pub fn new(a: Rank, b: Rank, suitedness: Suitedness) -> Self {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        match (hi == lo, suitedness) {
            (true, _) => Self::Pair(hi),
            (false, Suitedness::Suited) => Self::Suited(hi, lo),
            (false, Suitedness::Offsuit) => Self::Offsuit(hi, lo),
        }
    }
    pub fn high(&self) -> Rank {
        match self {
            Self::Pair(r) => *r,
            Self::Suited(hi, _) | Self::Offsuit(hi, _) => *hi,
        }
    }
    pub fn low(&self) -> Rank {
        match self {
            Self::Pair(r) => *r,
            Self::Suited(_, lo) | Self::Offsuit(_, lo) => *lo,
        }
    }
    /// None for pairs.
    pub fn suitedness(&self) -> Option<Suitedness> {
        match self {
            Self::Pair(_) => None,
            Self::Suited(..) => Some(Suitedness::Suited),
            Self::Offsuit(..) => Some(Suitedness::Offsuit),
        }
    }
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(_))
    }
    /// Number of concrete two-card holdings this notation stands for.
    pub fn combos(&self) -> usize {
        self.suitedness().map_or(6, |s| s.combos())
    }
    /// Human-readable label, e.g. "Ace-King suited" or "Queen-Queen pocket pair".
    pub fn label(&self) -> String {
        let hi = self.high().name();
        let lo = self.low().name();
        match self.suitedness() {
            Some(suitedness) => format!("{}-{} {}", hi, lo, suitedness.word()),
            None => format!("{}-{} pocket pair", hi, lo),
        }
    }
    /// The 169 starting hands: by high rank descending, then low rank
    /// descending, with suited before offsuit. AA, AKs, AKo, AQs, ...
    pub fn all() -> impl Iterator<Item = Self> {
        Rank::all().into_iter().rev().flat_map(|hi| {
            Rank::all()
                .into_iter()
                .rev()
                .filter(move |lo| *lo <= hi)
                .flat_map(move |lo| match hi == lo {
                    true => vec![Self::Pair(hi)],
                    false => vec![Self::Suited(hi, lo), Self::Offsuit(hi, lo)],
                })
        })
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pair(r) => write!(f, "{}{}", r, r),
            Self::Suited(hi, lo) => write!(f, "{}{}{}", hi, lo, Suitedness::Suited),
            Self::Offsuit(hi, lo) => write!(f, "{}{}{}", hi, lo, Suitedness::Offsuit),
        }
    }
}

/// str isomorphism, strict: canonical text only
impl TryFrom<&str> for Notation {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.chars().collect::<Vec<_>>().as_slice() {
            [a, b] if a == b => Ok(Self::Pair(Rank::try_from(*a)?)),
            [a, b, x] => {
                let hi = Rank::try_from(*a)?;
                let lo = Rank::try_from(*b)?;
                let suitedness = Suitedness::try_from(*x)?;
                match hi > lo {
                    true => Ok(Self::new(hi, lo, suitedness)),
                    false => Err(format!("ranks out of order: {}", s)),
                }
            }
            _ => Err(format!("not canonical notation: {}", s)),
        }
    }
}
impl TryFrom<String> for Notation {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Notation> for String {
    fn from(notation: Notation) -> Self {
        notation.to_string()
    }
}

impl Arbitrary for Notation {
    fn random() -> Self {
        Self::new(Rank::random(), Rank::random(), Suitedness::random())
    }
}

/// Two distinct ranks still waiting on a suitedness.
///
/// Displays as the suffix-less pair, higher rank first ("AK").
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(into = "String")
)]
pub struct Pending(Rank, Rank);

impl Pending {
    /// Completes the hand.
    pub fn with(&self, suitedness: Suitedness) -> Notation {
        Notation::new(self.0, self.1, suitedness)
    }
    /// Both ways the hand can be completed, suited first.
    pub fn options(&self) -> [Notation; 2] {
        Suitedness::all().map(|s| self.with(s))
    }
}

impl From<(Rank, Rank)> for Pending {
    fn from((a, b): (Rank, Rank)) -> Self {
        debug_assert!(a != b);
        match a > b {
            true => Self(a, b),
            false => Self(b, a),
        }
    }
}
impl From<Pending> for String {
    fn from(pending: Pending) -> Self {
        pending.to_string()
    }
}

impl std::fmt::Display for Pending {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_high_to_low() {
        let notation = Notation::new(Rank::King, Rank::Ace, Suitedness::Suited);
        assert!(notation == Notation::Suited(Rank::Ace, Rank::King));
        assert!(notation.to_string() == "AKs");
    }

    #[test]
    fn pairs_drop_suitedness() {
        let notation = Notation::new(Rank::Queen, Rank::Queen, Suitedness::Suited);
        assert!(notation == Notation::Pair(Rank::Queen));
        assert!(notation.suitedness().is_none());
        assert!(notation.to_string() == "QQ");
    }

    #[test]
    fn catalogue_has_169_hands() {
        let all = Notation::all().collect::<Vec<_>>();
        assert!(all.len() == 169);
        assert!(all.iter().filter(|n| n.is_pair()).count() == 13);
        assert!(all.iter().filter(|n| n.suitedness() == Some(Suitedness::Suited)).count() == 78);
        assert!(all.iter().filter(|n| n.suitedness() == Some(Suitedness::Offsuit)).count() == 78);
    }

    #[test]
    fn catalogue_starts_strongest() {
        let head = Notation::all().take(4).map(|n| n.to_string()).collect::<Vec<_>>();
        assert!(head == ["AA", "AKs", "AKo", "AQs"]);
        assert!(Notation::all().last() == Some(Notation::Pair(Rank::Two)));
    }

    #[test]
    fn catalogue_combos_sum_to_1326() {
        assert!(Notation::all().map(|n| n.combos()).sum::<usize>() == 1326);
    }

    #[test]
    fn catalogue_is_canonical() {
        for notation in Notation::all() {
            assert!(Notation::try_from(notation.to_string().as_str()) == Ok(notation));
        }
    }

    #[test]
    fn strict_parse_rejects_non_canonical() {
        assert!(Notation::try_from("KAs").is_err());
        assert!(Notation::try_from("aks").is_err());
        assert!(Notation::try_from("AKS").is_err());
        assert!(Notation::try_from("AK").is_err());
        assert!(Notation::try_from("AAs").is_err());
        assert!(Notation::try_from("").is_err());
    }

    #[test]
    fn labels() {
        assert!(Notation::try_from("AKs").unwrap().label() == "Ace-King suited");
        assert!(Notation::try_from("T9o").unwrap().label() == "Ten-Nine offsuit");
        assert!(Notation::try_from("QQ").unwrap().label() == "Queen-Queen pocket pair");
    }

    #[test]
    fn pending_completes_both_ways() {
        let pending = Pending::from((Rank::Seven, Rank::Eight));
        assert!(pending.to_string() == "87");
        let [suited, offsuit] = pending.options();
        assert!(suited.to_string() == "87s");
        assert!(offsuit.to_string() == "87o");
    }
}
