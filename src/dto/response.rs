use crate::Count;
use crate::EquityError;
use crate::Percent;
use crate::equity::report::Report;
use crate::ranges::versus::Matchup;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsResponse {
    pub wins: Vec<Count>,
    pub ties: Vec<Count>,
    pub win_percentages: Vec<Percent>,
    pub tie_percentages: Vec<Percent>,
    pub hand_rankings: Vec<String>,
}

impl From<Report> for OddsResponse {
    fn from(report: Report) -> Self {
        Self {
            wins: report.wins,
            ties: report.ties,
            win_percentages: report.win_percentages,
            tie_percentages: report.tie_percentages,
            hand_rankings: report
                .hand_rankings
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
        }
    }
}

/// Averaged range-vs-range equity. `equity` is the hero's mean win share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeResponse {
    pub range1: String,
    pub range2: String,
    pub win_percentages: [Percent; 2],
    pub tie_percentages: [Percent; 2],
    pub equity: Percent,
    pub total_hands: usize,
}

impl From<(String, String, Matchup)> for RangeResponse {
    fn from((range1, range2, matchup): (String, String, Matchup)) -> Self {
        Self {
            range1,
            range2,
            equity: matchup.win_percentages[0],
            win_percentages: matchup.win_percentages,
            tie_percentages: matchup.tie_percentages,
            total_hands: matchup.pairings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

/// `{"error": {"kind": "...", "message": "..."}}` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl From<&EquityError> for ErrorResponse {
    fn from(e: &EquityError) -> Self {
        Self {
            error: ErrorBody {
                kind: e.kind().to_string(),
                message: e.to_string(),
            },
        }
    }
}

/// A request body that never deserialized into a request.
impl From<&serde_json::Error> for ErrorResponse {
    fn from(e: &serde_json::Error) -> Self {
        Self {
            error: ErrorBody {
                kind: "MalformedRequestError".to_string(),
                message: e.to_string(),
            },
        }
    }
}
