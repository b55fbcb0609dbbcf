/// Every way a request can be rejected before a single trial runs.
///
/// Validation is fail-fast: the first violation found is the one reported.
/// Each variant maps to a stable wire name via [`EquityError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquityError {
    #[error("invalid card '{0}': expected a rank (2-9, T, J, Q, K, A) followed by a suit (s, h, d, c)")]
    MalformedCard(String),
    #[error("player {player} must have exactly 2 cards, got {count}")]
    MalformedHand { player: usize, count: usize },
    #[error("hole cards '{0}' must be exactly 2 distinct cards")]
    MalformedHole(String),
    #[error("duplicate card '{0}' found")]
    DuplicateCard(String),
    #[error("at least {min} players are required, got {got}")]
    InsufficientPlayers { min: usize, got: usize },
    #[error("at most {max} players are allowed, got {got}")]
    TooManyPlayers { max: usize, got: usize },
    #[error("board must have 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("number of simulations must be positive, got {0}")]
    InvalidTrialCount(i64),
    #[error("requested {requested} trials exceeds the budget of {budget}")]
    TrialBudgetExceeded { requested: usize, budget: usize },
    #[error("invalid range '{0}'")]
    MalformedRange(String),
    #[error("no pairing of the two ranges is compatible with each other and the board")]
    NoValidPairings,
}

impl EquityError {
    /// Stable name of the error kind, as surfaced to collaborators.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedCard(_) => "MalformedCardError",
            Self::MalformedHand { .. } => "MalformedHandError",
            Self::MalformedHole(_) => "MalformedHandError",
            Self::DuplicateCard(_) => "DuplicateCardError",
            Self::InsufficientPlayers { .. } => "InsufficientPlayersError",
            Self::TooManyPlayers { .. } => "TooManyPlayersError",
            Self::InvalidBoardSize(_) => "InvalidBoardSizeError",
            Self::InvalidTrialCount(_) => "InvalidTrialCountError",
            Self::TrialBudgetExceeded { .. } => "TrialBudgetExceededError",
            Self::MalformedRange(_) => "MalformedRangeError",
            Self::NoValidPairings => "NoValidPairingsError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_wire_names() {
        assert_eq!(EquityError::DuplicateCard("As".into()).kind(), "DuplicateCardError");
        assert_eq!(EquityError::InvalidBoardSize(2).kind(), "InvalidBoardSizeError");
        assert_eq!(EquityError::InvalidTrialCount(0).kind(), "InvalidTrialCountError");
    }

    #[test]
    fn messages_name_the_offender() {
        let e = EquityError::MalformedCard("Xz".into());
        assert!(e.to_string().contains("'Xz'"));
        let e = EquityError::MalformedHand { player: 2, count: 3 };
        assert_eq!(e.to_string(), "player 2 must have exactly 2 cards, got 3");
        let e = EquityError::MalformedHole("As".into());
        assert_eq!(e.kind(), "MalformedHandError");
        assert_eq!(e.to_string(), "hole cards 'As' must be exactly 2 distinct cards");
    }
}
