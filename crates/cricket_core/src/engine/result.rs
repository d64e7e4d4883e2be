use std::fmt;

use serde::{Deserialize, Serialize};

use super::match_state::MatchState;
use super::rules::{CHASING_INDEX, FIRST_BATTING_INDEX, MAX_WICKETS};
use crate::models::Team;

/// How a win is measured.
///
/// The side batting first wins by runs; the chasing side wins by wickets
/// in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinMargin {
    Runs(u32),
    Wickets(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Won { winner: String, margin: WinMargin },
    Tied,
}

impl MatchResult {
    /// Compare the two totals. Defined at any point of the match, not just
    /// after the final ball.
    pub fn from_state(state: &MatchState, teams: &[Team; 2]) -> Self {
        let first = state.scores[FIRST_BATTING_INDEX];
        let chasing = state.scores[CHASING_INDEX];

        if first > chasing {
            MatchResult::Won {
                winner: teams[FIRST_BATTING_INDEX].name.clone(),
                margin: WinMargin::Runs(first - chasing),
            }
        } else if chasing > first {
            MatchResult::Won {
                winner: teams[CHASING_INDEX].name.clone(),
                margin: WinMargin::Wickets(MAX_WICKETS.saturating_sub(state.wickets[CHASING_INDEX])),
            }
        } else {
            MatchResult::Tied
        }
    }

    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchResult::Won { winner, .. } => Some(winner.as_str()),
            MatchResult::Tied => None,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Won { winner, margin: WinMargin::Runs(n) } => {
                write!(f, "{winner} wins by {n} runs")
            }
            MatchResult::Won { winner, margin: WinMargin::Wickets(n) } => {
                write!(f, "{winner} wins by {n} wickets")
            }
            MatchResult::Tied => f.write_str("Match tied"),
        }
    }
}
