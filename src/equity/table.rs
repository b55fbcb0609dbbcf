use super::showdown::Showdown;
use crate::EquityError;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;

/// A validated simulation request: who holds what, what is on the board,
/// and how many runouts to sample.
///
/// Every Table upholds the request invariants. Between 2 and 10 players,
/// no card appears twice across holes and board, and at least one trial.
/// A complete board always means exactly one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    holes: Vec<Hole>,
    board: Board,
    trials: usize,
}

impl Table {
    /// Validate raw card tokens, reporting the first violation found.
    /// Players are counted first. Each hand then has its shape checked, and
    /// every token, hands before board, is parsed and checked against the
    /// cards before it. Board size and trial count come last.
    pub fn parse<S: AsRef<str>>(hands: &[Vec<S>], board: &[S], trials: i64) -> Result<Self, EquityError> {
        Self::check_players(hands.len())?;
        let mut seen = Hand::empty();
        let mut holes = Vec::with_capacity(hands.len());
        for (i, hand) in hands.iter().enumerate() {
            if hand.len() != 2 {
                return Err(EquityError::MalformedHand {
                    player: i + 1,
                    count: hand.len(),
                });
            }
            let pocket = Self::tokens(hand, &mut seen)?;
            holes.push(Hole::from((pocket[0], pocket[1])));
        }
        let public = Self::tokens(board, &mut seen)?;
        let board = Board::try_from(public)?;
        Self::new(holes, board, trials)
    }

    /// Assemble a Table from already-typed cards.
    pub fn new(holes: Vec<Hole>, board: Board, trials: i64) -> Result<Self, EquityError> {
        Self::check_players(holes.len())?;
        Self::check_repeats(
            holes
                .iter()
                .copied()
                .flat_map(Hand::from)
                .collect::<Vec<Card>>()
                .iter()
                .chain(board.cards().iter()),
        )?;
        let trials = match (board.is_complete(), trials) {
            (true, _) => 1,
            (false, n) if n > 0 => n as usize,
            (false, n) => return Err(EquityError::InvalidTrialCount(n)),
        };
        Ok(Self {
            holes,
            board,
            trials,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn n_players(&self) -> usize {
        self.holes.len()
    }
    /// Every card held or showing.
    pub fn used(&self) -> Hand {
        self.holes
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::from(&self.board), Hand::add)
    }
    /// The cards a runout may draw from.
    pub fn deck(&self) -> Deck {
        Deck::remaining(self.used())
    }
    /// Board cards still to come.
    pub fn pending(&self) -> usize {
        self.board.street().n_pending()
    }

    /// Settle one trial: the known board plus `runout` completes every hand.
    pub fn showdown(&self, runout: Hand) -> Showdown {
        let public = Hand::add(Hand::from(&self.board), runout);
        let strengths = self
            .holes
            .iter()
            .copied()
            .map(Hand::from)
            .map(|pocket| Hand::add(pocket, public))
            .map(Strength::best)
            .collect::<Vec<Strength>>();
        Showdown::from(strengths.as_slice())
    }
    /// Each player's strength from the cards known right now.
    pub fn present(&self) -> Vec<Strength> {
        let public = Hand::from(&self.board);
        self.holes
            .iter()
            .copied()
            .map(Hand::from)
            .map(|pocket| Hand::add(pocket, public))
            .map(Strength::best)
            .collect()
    }

    fn check_players(n: usize) -> Result<(), EquityError> {
        match n {
            n if n < MIN_PLAYERS => Err(EquityError::InsufficientPlayers { min: MIN_PLAYERS, got: n }),
            n if n > MAX_PLAYERS => Err(EquityError::TooManyPlayers { max: MAX_PLAYERS, got: n }),
            _ => Ok(()),
        }
    }
    fn check_repeats<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), EquityError> {
        let mut seen = Hand::empty();
        cards.copied().try_for_each(|card| Self::witness(card, &mut seen))
    }
    fn witness(card: Card, seen: &mut Hand) -> Result<(), EquityError> {
        if seen.contains(&card) {
            return Err(EquityError::DuplicateCard(card.to_string()));
        }
        seen.insert(card);
        Ok(())
    }
    /// Parse tokens in order, rejecting each one that repeats a card in `seen`.
    fn tokens<S: AsRef<str>>(tokens: &[S], seen: &mut Hand) -> Result<Vec<Card>, EquityError> {
        tokens
            .iter()
            .map(|token| {
                let card = Card::try_from(token.as_ref())?;
                Self::witness(card, seen)?;
                Ok(card)
            })
            .collect()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, hole) in self.holes.iter().enumerate() {
            write!(f, "P{} {}  ", i + 1, hole)?;
        }
        write!(f, "| {}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(hands: &[[&'static str; 2]]) -> Vec<Vec<&'static str>> {
        hands.iter().map(|h| h.to_vec()).collect()
    }

    #[test]
    fn accepts_heads_up_preflop() {
        let table = Table::parse(&hands(&[["As", "Ah"], ["Ks", "Kh"]]), &[], 1000).unwrap();
        assert_eq!(table.n_players(), 2);
        assert_eq!(table.trials(), 1000);
        assert_eq!(table.pending(), 5);
        assert_eq!(table.deck().size(), 48);
    }

    #[test]
    fn complete_board_forces_one_trial() {
        let board = ["2c", "7d", "9h", "Jc", "3s"];
        let table = Table::parse(&hands(&[["As", "Ah"], ["Ks", "Kh"]]), &board, 0).unwrap();
        assert_eq!(table.trials(), 1);
        assert_eq!(table.pending(), 0);
    }

    #[test]
    fn rejects_player_counts() {
        let one = Table::parse(&hands(&[["As", "Ah"]]), &[], 10);
        assert_eq!(one, Err(EquityError::InsufficientPlayers { min: 2, got: 1 }));
        let none = Table::parse::<&str>(&[], &[], 10);
        assert_eq!(none, Err(EquityError::InsufficientPlayers { min: 2, got: 0 }));
        let eleven = (0..11).map(|_| vec!["As", "Ah"]).collect::<Vec<_>>();
        assert_eq!(
            Table::parse(&eleven, &[], 10),
            Err(EquityError::TooManyPlayers { max: 10, got: 11 })
        );
    }

    #[test]
    fn rejects_hand_shape() {
        let table = Table::parse(&[vec!["As", "Ah"], vec!["Ks"]], &[], 10);
        assert_eq!(table, Err(EquityError::MalformedHand { player: 2, count: 1 }));
    }

    #[test]
    fn rejects_bad_tokens() {
        let table = Table::parse(&hands(&[["As", "Ah"], ["Kx", "Kh"]]), &[], 10);
        assert_eq!(table, Err(EquityError::MalformedCard("Kx".into())));
        let table = Table::parse(&hands(&[["As", "Ah"], ["Ks", "Kh"]]), &["10h", "2c", "3c"], 10);
        assert_eq!(table, Err(EquityError::MalformedCard("10h".into())));
    }

    #[test]
    fn rejects_board_size() {
        let table = Table::parse(&hands(&[["As", "Ah"], ["Ks", "Kh"]]), &["2c", "3c"], 10);
        assert_eq!(table, Err(EquityError::InvalidBoardSize(2)));
    }

    #[test]
    fn rejects_duplicates() {
        let table = Table::parse(&hands(&[["As", "As"], ["Kh", "Qd"]]), &[], 1000);
        assert_eq!(table, Err(EquityError::DuplicateCard("As".into())));
        let table = Table::parse(&hands(&[["As", "Ah"], ["Kh", "Qd"]]), &["Qd", "2c", "3c"], 1000);
        assert_eq!(table, Err(EquityError::DuplicateCard("Qd".into())));
    }

    #[test]
    fn rejects_trial_counts() {
        let table = Table::parse(&hands(&[["As", "Ah"], ["Ks", "Kh"]]), &[], 0);
        assert_eq!(table, Err(EquityError::InvalidTrialCount(0)));
        let table = Table::parse(&hands(&[["As", "Ah"], ["Ks", "Kh"]]), &["2c", "7d", "9h"], -5);
        assert_eq!(table, Err(EquityError::InvalidTrialCount(-5)));
    }

    #[test]
    fn first_violation_wins() {
        // a repeat in the hands is reported before a bad board size
        let table = Table::parse(&hands(&[["As", "As"], ["Kd", "Kh"]]), &["2c"], 100);
        assert_eq!(table, Err(EquityError::DuplicateCard("As".into())));
        // tokens are checked in order, so an early repeat beats later bad syntax
        let table = Table::parse(&hands(&[["As", "As"], ["Zz", "Kh"]]), &[], 100);
        assert_eq!(table, Err(EquityError::DuplicateCard("As".into())));
        // and early bad syntax beats a later repeat
        let table = Table::parse(&hands(&[["Zz", "As"], ["As", "Kh"]]), &[], 100);
        assert_eq!(table, Err(EquityError::MalformedCard("Zz".into())));
        // a board card repeating a hole card beats a bad board size
        let table = Table::parse(&hands(&[["As", "Ah"], ["Kd", "Kh"]]), &["Kd", "2c"], 100);
        assert_eq!(table, Err(EquityError::DuplicateCard("Kd".into())));
        // seat 1's repeat is found before seat 2's bad shape
        let table = Table::parse(&[vec!["As", "As"], vec!["Kd"]], &[], 100);
        assert_eq!(table, Err(EquityError::DuplicateCard("As".into())));
        // board size beats trial count
        let table = Table::parse(&hands(&[["As", "Ah"], ["Kd", "Kh"]]), &["2c"], 0);
        assert_eq!(table, Err(EquityError::InvalidBoardSize(1)));
    }

    #[test]
    fn tokens_are_case_insensitive() {
        let table = Table::parse(&hands(&[["as", "AH"], [" kS ", "kh"]]), &[], 10).unwrap();
        assert_eq!(table.used(), Hand::try_from("As Ah Ks Kh").unwrap());
    }
}
