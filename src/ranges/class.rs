use crate::EquityError;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Pair,
    Suited,
    Offsuit,
}

/// One cell of the 13x13 starting hand grid: `AA`, `AKs` or `AKo`.
///
/// The higher rank always comes first. Pairs have no suitedness, and
/// non-pairs always carry one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RangeClass {
    hi: Rank,
    lo: Rank,
    kind: Kind,
}

impl RangeClass {
    pub fn pair(rank: Rank) -> Self {
        Self {
            hi: rank,
            lo: rank,
            kind: Kind::Pair,
        }
    }
    /// A non-pair class. Rank order does not matter.
    pub fn unpaired(a: Rank, b: Rank, suited: bool) -> Self {
        debug_assert!(a != b);
        Self {
            hi: a.max(b),
            lo: a.min(b),
            kind: if suited { Kind::Suited } else { Kind::Offsuit },
        }
    }
    /// All 169 classes: pairs, then suited, then offsuit, highest first.
    pub fn all() -> Vec<Self> {
        let pairs = Rank::all().into_iter().rev().map(Self::pair);
        let suited = Self::unpaired_ranks().map(|(hi, lo)| Self::unpaired(hi, lo, true));
        let offsuit = Self::unpaired_ranks().map(|(hi, lo)| Self::unpaired(hi, lo, false));
        pairs.chain(suited).chain(offsuit).collect()
    }

    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Every concrete hole belonging to this class: 6 for a pair,
    /// 4 suited, 12 offsuit.
    pub fn combos(&self) -> Vec<Hole> {
        match self.kind {
            Kind::Pair => HandIterator::from((2, Hand::from(u64::from(self.hi))))
                .map(|hand| Vec::<Card>::from(hand))
                .map(|cards| Hole::from((cards[0], cards[1])))
                .collect(),
            Kind::Suited => Suit::all()
                .into_iter()
                .map(|s| Hole::from((Card::from((self.hi, s)), Card::from((self.lo, s)))))
                .collect(),
            Kind::Offsuit => Suit::all()
                .into_iter()
                .flat_map(|a| Suit::all().into_iter().map(move |b| (a, b)))
                .filter(|(a, b)| a != b)
                .map(|(a, b)| Hole::from((Card::from((self.hi, a)), Card::from((self.lo, b)))))
                .collect(),
        }
    }

    fn unpaired_ranks() -> impl Iterator<Item = (Rank, Rank)> {
        Rank::all()
            .into_iter()
            .rev()
            .flat_map(|hi| Rank::all().into_iter().rev().filter(move |lo| *lo < hi).map(move |lo| (hi, lo)))
    }
}

impl TryFrom<&str> for RangeClass {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let malformed = || EquityError::MalformedRange(s.to_string());
        let chars = s.trim().chars().collect::<Vec<char>>();
        let (a, b) = match chars.as_slice() {
            [a, b] | [a, b, _] => (
                Rank::try_from(*a).map_err(|_| malformed())?,
                Rank::try_from(*b).map_err(|_| malformed())?,
            ),
            _ => return Err(malformed()),
        };
        let suffix = chars.get(2).map(|c| c.to_ascii_lowercase());
        match (a == b, suffix) {
            (true, None) => Ok(Self::pair(a)),
            (false, Some('s')) => Ok(Self::unpaired(a, b, true)),
            (false, Some('o')) => Ok(Self::unpaired(a, b, false)),
            _ => Err(malformed()),
        }
    }
}

impl std::fmt::Display for RangeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::Pair => write!(f, "{}{}", self.hi, self.lo),
            Kind::Suited => write!(f, "{}{}s", self.hi, self.lo),
            Kind::Offsuit => write!(f, "{}{}o", self.hi, self.lo),
        }
    }
}
