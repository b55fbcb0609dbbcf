use super::card::Card;
use super::hand::Hand;
use crate::EquityError;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards are
/// present. Construction from two equal cards is a caller bug; request-level
/// duplicate detection happens before any Hole is built.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Both cards, higher index first.
    pub fn cards(&self) -> (Card, Card) {
        let lo = self.0.nth(0).expect("two cards in Hole");
        let hi = self.0.nth(1).expect("two cards in Hole");
        (hi, lo)
    }
    pub fn is_pair(&self) -> bool {
        let (hi, lo) = self.cards();
        hi.rank() == lo.rank()
    }
    pub fn is_suited(&self) -> bool {
        let (hi, lo) = self.cards();
        hi.suit() == lo.suit()
    }
    /// Preflop shorthand for interactive output: `Pair of Aces`,
    /// `Suited AK`, `Connector 98`, `Offsuit AQ`.
    pub fn describe(&self) -> String {
        let (hi, lo) = self.cards();
        let gap = u8::from(hi.rank()) - u8::from(lo.rank());
        match (self.is_pair(), self.is_suited(), gap) {
            (true, _, _) => format!("Pair of {}", hi.rank().plural()),
            (false, true, _) => format!("Suited {}{}", hi.rank(), lo.rank()),
            (false, false, 1) => format!("Connector {}{}", hi.rank(), lo.rank()),
            (false, false, _) => format!("Offsuit {}{}", hi.rank(), lo.rank()),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (hi, lo) = self.cards();
        write!(f, "{}{}", hi, lo)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(Hand::from(u64::from(a) | u64::from(b)))
    }
}

impl TryFrom<&str> for Hole {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err(EquityError::MalformedHole(s.trim().to_string())),
        }
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Self(super::deck::Deck::new().sample(2, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn two_distinct_cards() {
        let hole = Hole::random();
        assert_eq!(Hand::from(hole).size(), 2);
        let (hi, lo) = hole.cards();
        assert!(hi > lo);
    }

    #[test]
    fn describe_preflop() {
        assert_eq!(Hole::try_from("As Ah").unwrap().describe(), "Pair of Aces");
        assert_eq!(Hole::try_from("6s 6d").unwrap().describe(), "Pair of Sixes");
        assert_eq!(Hole::try_from("Ks As").unwrap().describe(), "Suited AK");
        assert_eq!(Hole::try_from("9d 8c").unwrap().describe(), "Connector 98");
        assert_eq!(Hole::try_from("Ac Qd").unwrap().describe(), "Offsuit AQ");
    }

    #[test]
    fn reject_wrong_size() {
        for s in ["As", "As As", "As Kd Qh"] {
            assert_eq!(Hole::try_from(s), Err(EquityError::MalformedHole(s.to_string())));
        }
        assert_eq!(Hole::try_from("As Zz"), Err(EquityError::MalformedCard("Zz".into())));
    }
}
