//! Render-ready view of the match after each delivery.
//!
//! Callers never touch `MatchState` directly; every mutating call hands
//! back one of these instead.

use serde::{Deserialize, Serialize};

use super::match_state::MatchState;
use super::rules::overs_display;
use crate::models::Team;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub batting_team: String,
    pub bowling_team: String,
    /// Indexed by team (0 = batting first).
    pub scores: [u32; 2],
    pub wickets: [u32; 2],
    /// Legal deliveries in the current innings.
    pub balls_bowled: u32,
    /// `balls_bowled` as "overs.balls".
    pub overs: String,
    /// Legal deliveries faced per team over the match.
    pub balls_faced: [u32; 2],
    pub innings: u8,
    pub finished: bool,
    pub last_outcome: String,
}

impl MatchSnapshot {
    pub fn capture(state: &MatchState, teams: &[Team; 2]) -> Self {
        Self {
            batting_team: teams[state.batting_team_index].name.clone(),
            bowling_team: teams[state.bowling_team_index()].name.clone(),
            scores: state.scores,
            wickets: state.wickets,
            balls_bowled: state.balls_bowled,
            overs: overs_display(state.balls_bowled),
            balls_faced: state.balls_faced,
            innings: state.innings_number,
            finished: state.finished,
            last_outcome: state.last_outcome.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_names_sides_by_current_role() {
        let teams = [Team::new("India", "in.jpg"), Team::new("England", "en.jpg")];
        let mut state = MatchState::new();
        state.balls_bowled = 7;

        let snap = MatchSnapshot::capture(&state, &teams);
        assert_eq!(snap.batting_team, "India");
        assert_eq!(snap.bowling_team, "England");
        assert_eq!(snap.overs, "1.1");

        state.switch_innings();
        let snap = MatchSnapshot::capture(&state, &teams);
        assert_eq!(snap.batting_team, "England");
        assert_eq!(snap.bowling_team, "India");
        assert_eq!(snap.overs, "0.0");
        assert_eq!(snap.innings, 2);
    }
}
