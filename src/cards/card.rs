use super::rank::Rank;
use super::suit::Suit;
use crate::EquityError;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Parsing
///
/// Cards parse from two-character tokens like `"As"` (ace of spades) or
/// `"tc"` (ten of clubs); both characters are case-insensitive. Use
/// [`Card::parse`] for several cards at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses whitespace- or comma-separated tokens into cards, in order.
    pub fn parse(s: &str) -> Result<Vec<Self>, EquityError> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let malformed = || EquityError::MalformedCard(s.to_string());
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::try_from(r).map_err(|_| malformed())?;
                let suit = Suit::try_from(u).map_err(|_| malformed())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(malformed()),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn parse_token() {
        assert_eq!(Card::try_from("As"), Ok(Card::from((Rank::Ace, Suit::S))));
        assert_eq!(Card::try_from("tc"), Ok(Card::from((Rank::Ten, Suit::C))));
        assert_eq!(Card::try_from(" 7H "), Ok(Card::from((Rank::Seven, Suit::H))));
    }

    #[test]
    fn reject_malformed() {
        for token in ["", "A", "Asd", "1s", "Ax", "10s"] {
            assert_eq!(
                Card::try_from(token),
                Err(EquityError::MalformedCard(token.to_string()))
            );
        }
    }

    #[test]
    fn parse_list() {
        let cards = Card::parse("Ah Kd,7c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::try_from("7c").unwrap());
        assert!(Card::parse("").unwrap().is_empty());
        assert!(Card::parse("Ah Zz").is_err());
    }

    #[test]
    fn display_roundtrip() {
        let card = Card::try_from("qd").unwrap();
        assert_eq!(card.to_string(), "Qd");
    }
}
