use super::response::OddsResponse;
use crate::DEFAULT_TRIALS;
use crate::EquityError;
use crate::equity::simulation::Simulation;
use crate::equity::table::Table;
use serde::Deserialize;
use serde::Serialize;

/// One odds calculation, as collaborators send it.
///
/// ```json
/// {"hands": [["As","Ah"],["Ks","Kh"]], "board": [], "num_sims": 1000, "seed": 7}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsRequest {
    pub hands: Vec<Vec<String>>,
    #[serde(default)]
    pub board: Vec<String>,
    #[serde(default = "default_trials")]
    pub num_sims: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_trials() -> i64 {
    DEFAULT_TRIALS as i64
}

impl OddsRequest {
    pub fn table(&self) -> Result<Table, EquityError> {
        Table::parse(&self.hands, &self.board, self.num_sims)
    }
    /// Validate, simulate within `budget` trials, and shape the response.
    pub fn simulate(&self, budget: usize) -> Result<OddsResponse, EquityError> {
        Simulation::from(self.table()?)
            .seed(self.seed)
            .budget(budget)
            .report()
            .map(OddsResponse::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TRIAL_BUDGET;

    #[test]
    fn defaults_fill_in() {
        let request = serde_json::from_str::<OddsRequest>(r#"{"hands": [["As","Ah"],["Ks","Kh"]]}"#).unwrap();
        assert_eq!(request.board, Vec::<String>::new());
        assert_eq!(request.num_sims, 1000);
        assert_eq!(request.seed, None);
    }

    #[test]
    fn negative_trials_reach_validation() {
        let json = r#"{"hands": [["As","Ah"],["Ks","Kh"]], "num_sims": -3}"#;
        let request = serde_json::from_str::<OddsRequest>(json).unwrap();
        assert_eq!(request.simulate(TRIAL_BUDGET), Err(EquityError::InvalidTrialCount(-3)));
    }

    #[test]
    fn seeded_requests_repeat() {
        let json = r#"{"hands": [["As","Kd"],["7h","7c"]], "board": ["2s","9d","Jc"], "num_sims": 2000, "seed": 7}"#;
        let request = serde_json::from_str::<OddsRequest>(json).unwrap();
        let a = request.simulate(TRIAL_BUDGET).unwrap();
        let b = request.simulate(TRIAL_BUDGET).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.wins.len(), 2);
    }
}
