use super::report::Report;
use super::table::Table;
use super::tally::Tally;
use crate::BATCH_SIZE;
use crate::EquityError;
use crate::TRIAL_BUDGET;
use crate::cards::hand::Hand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Monte Carlo runner over a validated [`Table`].
///
/// Trials are split into fixed-size batches. Each batch samples its runouts
/// from its own `SmallRng`, seeded from the run seed and the batch index, and
/// returns a [`Tally`]; rayon sums the batches. Since the split never depends
/// on the thread pool, a seeded run is reproducible to the last count.
#[derive(Debug, Clone)]
pub struct Simulation {
    table: Table,
    seed: Option<u64>,
    budget: usize,
}

impl From<Table> for Simulation {
    fn from(table: Table) -> Self {
        Self {
            table,
            seed: None,
            budget: TRIAL_BUDGET,
        }
    }
}

impl Simulation {
    /// Fix the randomness. `None` draws a fresh seed per run.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    /// Ceiling on trials this run may perform.
    pub fn budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Sample every trial and sum the outcomes.
    pub fn run(&self) -> Result<Tally, EquityError> {
        let trials = self.table.trials();
        if trials > self.budget {
            return Err(EquityError::TrialBudgetExceeded {
                requested: trials,
                budget: self.budget,
            });
        }
        if self.table.board().is_complete() {
            log::debug!("complete board, settling {} once", self.table);
            let n = self.table.n_players();
            let showdown = self.table.showdown(Hand::empty());
            return Ok(Tally::new(n).witness(showdown));
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        let batches = trials.div_ceil(BATCH_SIZE);
        log::debug!("simulating {} trials in {} batches (seed {})", trials, batches, seed);
        let tally = (0..batches)
            .into_par_iter()
            .map(|index| self.batch(seed, index))
            .reduce(|| Tally::new(self.table.n_players()), |a, b| a + b);
        log::trace!("{} chops over {} trials", tally.chops(), tally.trials());
        Ok(tally)
    }

    /// Run and convert counts to the reported form.
    pub fn report(&self) -> Result<Report, EquityError> {
        self.run().map(|tally| Report::from((&self.table, tally)))
    }

    fn batch(&self, seed: u64, index: usize) -> Tally {
        let size = BATCH_SIZE.min(self.table.trials() - index * BATCH_SIZE);
        let pending = self.table.pending();
        let deck = self.table.deck();
        let ref mut rng = SmallRng::seed_from_u64(super::substream(seed, index));
        (0..size)
            .map(|_| deck.sample(pending, rng))
            .map(|runout| self.table.showdown(runout))
            .fold(Tally::new(self.table.n_players()), Tally::witness)
    }
}
