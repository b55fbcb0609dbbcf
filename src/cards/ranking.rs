use super::category::Category;
use super::rank::Rank;

/// A poker hand's category together with the ranks that define it.
///
/// Variant order is strength order, so the derived `Ord` compares
/// categories first and defining ranks second. Kickers are kept separately
/// in [`Kickers`](super::kicks::Kickers) and only matter when two Rankings
/// are equal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, same suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
    RoyalFlush,            // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// Ranks still eligible to kick once the defining ranks are used.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..)
            | Ranking::Straight(..)
            | Ranking::StraightFlush(..)
            | Ranking::RoyalFlush => 0,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::Pair,
            Ranking::TwoPair(_, _) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOfAKind,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(_, _) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOfAKind,
            Ranking::StraightFlush(_) => Category::StraightFlush,
            Ranking::RoyalFlush => Category::RoyalFlush,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
            Ranking::RoyalFlush => write!(f, "RoyalFlush      "),
        }
    }
}
