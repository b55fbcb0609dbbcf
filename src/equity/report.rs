use super::table::Table;
use super::tally::Tally;
use crate::Count;
use crate::Percent;
use crate::cards::category::Category;

/// What a caller gets back from one simulation.
///
/// Percentages are on a 0-100 scale. `hand_rankings` describes each
/// player's hole cards plus the board as given, never a sampled runout, so
/// preflop it can only read High Card or Pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub wins: Vec<Count>,
    pub ties: Vec<Count>,
    pub trials: Count,
    pub win_percentages: Vec<Percent>,
    pub tie_percentages: Vec<Percent>,
    pub hand_rankings: Vec<Category>,
}

impl From<(&Table, Tally)> for Report {
    fn from((table, tally): (&Table, Tally)) -> Self {
        Self {
            win_percentages: tally.win_percentages(),
            tie_percentages: tally.tie_percentages(),
            hand_rankings: table.present().iter().map(|s| s.category()).collect(),
            wins: tally.wins().to_vec(),
            ties: tally.ties().to_vec(),
            trials: tally.trials(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for i in 0..self.wins.len() {
            writeln!(
                f,
                "P{:<2} win {:>6.2}%  tie {:>6.2}%  {}",
                i + 1,
                self.win_percentages[i],
                self.tie_percentages[i],
                self.hand_rankings[i],
            )?;
        }
        Ok(())
    }
}
