use super::showdown::Showdown;
use crate::Count;
use crate::Percent;

/// Win and tie counters for every seat over some number of trials.
///
/// Each trial lands in exactly one of two places: one seat's win counter,
/// or (for a chop) the tie counter of every seat sharing the pot. So
/// `sum(wins) + chops == trials` always holds. Tallies from disjoint
/// batches add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<Count>,
    ties: Vec<Count>,
    trials: Count,
    chops: Count,
}

impl Tally {
    pub fn new(n: usize) -> Self {
        Self {
            wins: vec![0; n],
            ties: vec![0; n],
            trials: 0,
            chops: 0,
        }
    }
    /// Fold one trial's outcome into the counters.
    pub fn witness(mut self, showdown: Showdown) -> Self {
        self.trials += 1;
        match showdown {
            Showdown::Winner(i) => self.wins[i] += 1,
            Showdown::Tie(seats) => {
                self.chops += 1;
                seats.into_iter().for_each(|i| self.ties[i] += 1);
            }
        }
        self
    }

    pub fn wins(&self) -> &[Count] {
        &self.wins
    }
    pub fn ties(&self) -> &[Count] {
        &self.ties
    }
    pub fn trials(&self) -> Count {
        self.trials
    }
    /// Trials that ended with a split pot.
    pub fn chops(&self) -> Count {
        self.chops
    }
    pub fn win_percentages(&self) -> Vec<Percent> {
        self.wins.iter().map(|w| self.percent(*w)).collect()
    }
    pub fn tie_percentages(&self) -> Vec<Percent> {
        self.ties.iter().map(|t| self.percent(*t)).collect()
    }

    fn percent(&self, n: Count) -> Percent {
        match self.trials {
            0 => 0.,
            t => 100. * n as Percent / t as Percent,
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        debug_assert!(self.wins.len() == other.wins.len());
        Self {
            wins: self.wins.iter().zip(other.wins).map(|(a, b)| a + b).collect(),
            ties: self.ties.iter().zip(other.ties).map(|(a, b)| a + b).collect(),
            trials: self.trials + other.trials,
            chops: self.chops + other.chops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn witness_partitions_trials() {
        let tally = Tally::new(3)
            .witness(Showdown::Winner(0))
            .witness(Showdown::Tie(vec![1, 2]))
            .witness(Showdown::Winner(2))
            .witness(Showdown::Tie(vec![0, 1, 2]));
        assert_eq!(tally.wins(), &[1, 0, 1]);
        assert_eq!(tally.ties(), &[1, 2, 2]);
        assert_eq!(tally.trials(), 4);
        assert_eq!(tally.chops(), 2);
        assert_eq!(tally.wins().iter().sum::<Count>() + tally.chops(), tally.trials());
    }

    #[test]
    fn add_is_elementwise() {
        let a = Tally::new(2).witness(Showdown::Winner(0));
        let b = Tally::new(2).witness(Showdown::Tie(vec![0, 1]));
        let sum = a.clone() + b.clone();
        assert_eq!(sum, b + a);
        assert_eq!(sum.wins(), &[1, 0]);
        assert_eq!(sum.ties(), &[1, 1]);
        assert_eq!(sum.trials(), 2);
    }

    #[test]
    fn percentages_scale_to_hundred() {
        let tally = (0..4)
            .map(|i| match i {
                3 => Showdown::Tie(vec![0, 1]),
                _ => Showdown::Winner(0),
            })
            .fold(Tally::new(2), Tally::witness);
        assert_eq!(tally.win_percentages(), vec![75., 0.]);
        assert_eq!(tally.tie_percentages(), vec![25., 25.]);
    }

    #[test]
    fn empty_tally_reports_zero() {
        assert_eq!(Tally::new(2).win_percentages(), vec![0., 0.]);
    }
}
