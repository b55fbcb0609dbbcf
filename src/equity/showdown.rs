use crate::cards::strength::Strength;

/// Who takes the pot in one completed trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Showdown {
    /// Exactly one player holds the strongest hand.
    Winner(usize),
    /// Two or more players share the strongest hand, ascending by seat.
    Tie(Vec<usize>),
}

impl Showdown {
    pub fn winners(&self) -> &[usize] {
        match self {
            Self::Winner(i) => std::slice::from_ref(i),
            Self::Tie(seats) => seats,
        }
    }
}

impl From<&[Strength]> for Showdown {
    fn from(strengths: &[Strength]) -> Self {
        let best = strengths
            .iter()
            .max()
            .expect("at least one player at showdown");
        let seats = strengths
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == best)
            .map(|(i, _)| i)
            .collect::<Vec<usize>>();
        match seats.as_slice() {
            [only] => Self::Winner(*only),
            _ => Self::Tie(seats),
        }
    }
}
