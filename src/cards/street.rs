/// Betting round, determined entirely by how many community cards are known.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::Rive,
            Self::Rive => panic!("terminal"),
        }
    }
    /// Community cards visible on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Community cards dealt when moving to the next street.
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Pref => 3,
            Self::Flop => 1,
            Self::Turn => 1,
            Self::Rive => panic!("terminal"),
        }
    }
    /// Community cards still to come before showdown.
    pub const fn n_pending(&self) -> usize {
        5 - self.n_observed()
    }
}

/// board size isomorphism. only 0, 3, 4, 5 name a street
impl TryFrom<usize> for Street {
    type Error = crate::EquityError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            n => Err(crate::EquityError::InvalidBoardSize(n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EquityError;

    #[test]
    fn board_sizes() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.n_observed()), Ok(*street));
        }
        for n in [1, 2, 6, 7] {
            assert_eq!(Street::try_from(n), Err(EquityError::InvalidBoardSize(n)));
        }
    }

    #[test]
    fn revealed_adds_up() {
        let mut street = Street::Pref;
        let mut seen = 0;
        while street != Street::Rive {
            seen += street.n_revealed();
            street = street.next();
            assert_eq!(seen, street.n_observed());
        }
        assert_eq!(Street::Pref.n_pending(), 5);
        assert_eq!(Street::Rive.n_pending(), 0);
    }
}
