use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::EquityError;

/// The community cards, in the order they were dealt.
///
/// Holds 0, 3, 4 or 5 distinct cards; the count names the [`Street`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn new() -> Board {
        Board(Vec::with_capacity(5))
    }
    pub fn street(&self) -> Street {
        Street::try_from(self.0.len()).expect("board size checked at construction")
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn is_complete(&self) -> bool {
        self.0.len() == 5
    }
    /// Deal the next street's cards onto the board.
    pub fn extend(&mut self, cards: Hand) {
        debug_assert!(cards.size() == self.street().n_revealed());
        self.0.extend(cards);
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = EquityError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Street::try_from(cards.len())?;
        let mut seen = Hand::empty();
        for card in cards.iter() {
            if seen.contains(card) {
                return Err(EquityError::DuplicateCard(card.to_string()));
            }
            seen.insert(*card);
        }
        Ok(Self(cards))
    }
}

impl TryFrom<&str> for Board {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        board.0.iter().copied().collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flop_turn_river() {
        let mut board = Board::try_from("Ah Kd 7c").unwrap();
        assert_eq!(board.street(), Street::Flop);
        board.extend(Hand::try_from("2s").unwrap());
        assert_eq!(board.street(), Street::Turn);
        board.extend(Hand::try_from("9s").unwrap());
        assert!(board.is_complete());
        assert_eq!(board.to_string(), "Ah Kd 7c 2s 9s");
    }

    #[test]
    fn reject_bad_sizes() {
        assert_eq!(Board::try_from("Ah Kd"), Err(EquityError::InvalidBoardSize(2)));
        assert_eq!(
            Board::try_from("Ah Kd 7c 2s 9s 3d"),
            Err(EquityError::InvalidBoardSize(6))
        );
    }

    #[test]
    fn reject_repeats() {
        assert_eq!(
            Board::try_from("Ah Kd Ah"),
            Err(EquityError::DuplicateCard("Ah".into()))
        );
    }
}
