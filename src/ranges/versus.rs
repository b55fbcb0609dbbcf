use super::range::Range;
use crate::EquityError;
use crate::Percent;
use crate::RANGE_TRIALS;
use crate::TRIAL_BUDGET;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::equity::simulation::Simulation;
use crate::equity::substream;
use crate::equity::table::Table;
use crate::equity::tally::Tally;
use rayon::prelude::*;

/// Averaged result of a range-vs-range comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    /// Mean win share of hero and villain across pairings.
    pub win_percentages: [Percent; 2],
    /// Mean tie share of hero and villain across pairings.
    pub tie_percentages: [Percent; 2],
    /// Concrete hole pairings that survived card removal.
    pub pairings: usize,
}

/// Hero range against villain range on a fixed board.
///
/// Every hero combo meets every villain combo; pairings that share a card
/// with each other or with the board are dropped. Each survivor gets its own
/// heads-up [`Simulation`], and every survivor counts equally in the mean.
#[derive(Debug, Clone)]
pub struct Versus {
    hero: Range,
    villain: Range,
    board: Board,
    trials: usize,
    seed: Option<u64>,
    budget: usize,
}

impl From<(Range, Range)> for Versus {
    fn from((hero, villain): (Range, Range)) -> Self {
        Self {
            hero,
            villain,
            board: Board::new(),
            trials: RANGE_TRIALS,
            seed: None,
            budget: TRIAL_BUDGET,
        }
    }
}

impl Versus {
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }
    /// Trials per pairing.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    /// Ceiling on pairings times trials.
    pub fn budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Hero and villain holes that can coexist with each other and the board.
    pub fn pairings(&self) -> Vec<(Hole, Hole)> {
        let board = Hand::from(&self.board);
        let villains = self
            .villain
            .combos()
            .into_iter()
            .filter(|v| !Hand::from(*v).overlaps(&board))
            .collect::<Vec<Hole>>();
        self.hero
            .combos()
            .into_iter()
            .filter(|h| !Hand::from(*h).overlaps(&board))
            .flat_map(|h| villains.iter().map(move |v| (h, *v)))
            .filter(|(h, v)| !Hand::from(*h).overlaps(&Hand::from(*v)))
            .collect()
    }

    pub fn run(&self) -> Result<Matchup, EquityError> {
        for range in [&self.hero, &self.villain] {
            if range.classes().is_empty() {
                return Err(EquityError::MalformedRange(String::new()));
            }
        }
        let pairings = self.pairings();
        if pairings.is_empty() {
            return Err(EquityError::NoValidPairings);
        }
        let trials = match (self.board.is_complete(), self.trials) {
            (true, _) => 1,
            (false, 0) => return Err(EquityError::InvalidTrialCount(0)),
            (false, n) => n,
        };
        let requested = pairings.len().saturating_mul(trials);
        if requested > self.budget {
            return Err(EquityError::TrialBudgetExceeded {
                requested,
                budget: self.budget,
            });
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!(
            "{} pairings x {} trials on [{}] (seed {})",
            pairings.len(),
            trials,
            self.board,
            seed
        );
        let tallies = pairings
            .par_iter()
            .enumerate()
            .map(|(i, (hero, villain))| self.simulate(*hero, *villain, trials, substream(seed, i)))
            .collect::<Result<Vec<Tally>, EquityError>>()?;
        Ok(Self::average(&tallies))
    }

    fn simulate(&self, hero: Hole, villain: Hole, trials: usize, seed: u64) -> Result<Tally, EquityError> {
        let table = Table::new(vec![hero, villain], self.board.clone(), trials as i64)?;
        Simulation::from(table)
            .seed(Some(seed))
            .budget(trials)
            .run()
    }

    fn average(tallies: &[Tally]) -> Matchup {
        let n = tallies.len() as Percent;
        let mean = |f: fn(&Tally) -> Vec<Percent>, seat: usize| {
            tallies.iter().map(|t| f(t)[seat]).sum::<Percent>() / n
        };
        Matchup {
            win_percentages: [mean(Tally::win_percentages, 0), mean(Tally::win_percentages, 1)],
            tie_percentages: [mean(Tally::tie_percentages, 0), mean(Tally::tie_percentages, 1)],
            pairings: tallies.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versus(hero: &str, villain: &str) -> Versus {
        Versus::from((Range::try_from(hero).unwrap(), Range::try_from(villain).unwrap()))
    }

    #[test]
    fn blockers_remove_pairings() {
        // each AA combo leaves exactly one disjoint AA combo
        assert_eq!(versus("AA", "AA").pairings().len(), 6);
        assert_eq!(versus("AA", "KK").pairings().len(), 36);
        // each AKs combo blocks the 3 AA combos holding its ace
        assert_eq!(versus("AA", "AKs").pairings().len(), 12);
    }

    #[test]
    fn board_removes_combos() {
        let board = Board::try_from("Ah 7c 2d").unwrap();
        let v = versus("AA", "KK").board(board);
        assert_eq!(v.pairings().len(), 3 * 6);
    }

    #[test]
    fn no_pairings_is_an_error() {
        let board = Board::try_from("As Ah Ad").unwrap();
        let v = versus("AA", "KK").board(board);
        assert_eq!(v.run(), Err(EquityError::NoValidPairings));
    }

    #[test]
    fn budget_covers_all_pairings() {
        let v = versus("AA", "KK").trials(100).budget(3599);
        assert_eq!(
            v.run(),
            Err(EquityError::TrialBudgetExceeded {
                requested: 3600,
                budget: 3599
            })
        );
    }

    #[test]
    fn seeded_matchups_repeat() {
        let a = versus("QQ", "AKs").trials(50).seed(Some(9)).run().unwrap();
        let b = versus("QQ", "AKs").trials(50).seed(Some(9)).run().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.pairings, 24);
    }

    #[test]
    fn overpair_favoured_on_dry_board() {
        let board = Board::try_from("7c 4d 2h 9s").unwrap();
        let m = versus("AA", "KK").board(board).trials(100).seed(Some(1)).run().unwrap();
        assert!(m.win_percentages[0] > 80.);
        assert!(m.win_percentages[0] + m.win_percentages[1] <= 100. + 1e-9);
    }

    #[test]
    fn river_matchup_is_exact() {
        let board = Board::try_from("7c 4d 2h 9s 3c").unwrap();
        let m = versus("AA", "KK").board(board).run().unwrap();
        assert_eq!(m.pairings, 36);
        assert_eq!(m.win_percentages, [100., 0.]);
        assert_eq!(m.tie_percentages, [0., 0.]);
    }
}
