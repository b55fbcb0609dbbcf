use super::rank::Rank;

/// A hand's kicker cards as a 13-bit rank mask.
///
/// Two kicker sets of the same size compare correctly as integers: the
/// larger mask holds the highest rank at which the two sets differ.
/// Suits are not represented.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl Kickers {
    /// Keep only the `n` highest ranks of `ranks`.
    pub fn top(n: usize, ranks: u16) -> Self {
        let mut ranks = ranks & Rank::mask();
        while n < ranks.count_ones() as usize {
            ranks &= ranks - 1;
        }
        Self(ranks)
    }
}

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, highest rank first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.into_iter().map(u16::from).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_drops_lowest() {
        let ranks = Kickers::from(vec![Rank::Ace, Rank::Nine, Rank::Four, Rank::Two]);
        let top = Kickers::top(2, u16::from(ranks));
        assert_eq!(Vec::<Rank>::from(top), vec![Rank::Ace, Rank::Nine]);
    }

    #[test]
    fn compare_descending() {
        let a = Kickers::from(vec![Rank::King, Rank::Seven, Rank::Three]);
        let b = Kickers::from(vec![Rank::King, Rank::Six, Rank::Five]);
        assert!(a > b);
    }
}
