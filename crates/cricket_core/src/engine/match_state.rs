//! Mutable match record owned by the simulator.
//!
//! Figures are indexed by team identity (0 = batting first, 1 = chasing),
//! never by innings slot, so each side keeps its own total across the
//! innings switch.

use serde::{Deserialize, Serialize};

use super::rules::{CHASING_INDEX, FIRST_BATTING_INDEX, MAX_BALLS, MAX_WICKETS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Index of the side currently batting.
    pub batting_team_index: usize,
    pub scores: [u32; 2],
    pub wickets: [u32; 2],
    /// Legal deliveries in the current innings.
    pub balls_bowled: u32,
    /// Legal deliveries faced by each side over the whole match.
    pub balls_faced: [u32; 2],
    /// 1 or 2.
    pub innings_number: u8,
    pub finished: bool,
    /// Label of the most recent delivery, empty before the first ball.
    pub last_outcome: String,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            batting_team_index: FIRST_BATTING_INDEX,
            scores: [0; 2],
            wickets: [0; 2],
            balls_bowled: 0,
            balls_faced: [0; 2],
            innings_number: 1,
            finished: false,
            last_outcome: String::new(),
        }
    }

    pub fn bowling_team_index(&self) -> usize {
        1 - self.batting_team_index
    }

    pub fn batting_score(&self) -> u32 {
        self.scores[self.batting_team_index]
    }

    pub fn batting_wickets(&self) -> u32 {
        self.wickets[self.batting_team_index]
    }

    pub(crate) fn add_runs(&mut self, runs: u32) {
        let idx = self.batting_team_index;
        self.scores[idx] = self.scores[idx].saturating_add(runs);
    }

    pub(crate) fn add_wicket(&mut self) {
        let idx = self.batting_team_index;
        self.wickets[idx] = (self.wickets[idx] + 1).min(MAX_WICKETS);
    }

    pub(crate) fn add_legal_ball(&mut self) {
        self.balls_bowled += 1;
        self.balls_faced[self.batting_team_index] += 1;
    }

    pub fn overs_exhausted(&self) -> bool {
        self.balls_bowled >= MAX_BALLS
    }

    pub fn all_out(&self) -> bool {
        self.batting_wickets() >= MAX_WICKETS
    }

    /// The chasing side has passed the first-innings total.
    pub fn chase_complete(&self) -> bool {
        self.innings_number == 2 && self.scores[CHASING_INDEX] > self.scores[FIRST_BATTING_INDEX]
    }

    /// Whether the given side has come in to bat yet.
    pub fn has_batted(&self, team_index: usize) -> bool {
        team_index == FIRST_BATTING_INDEX || self.innings_number > 1
    }

    pub(crate) fn switch_innings(&mut self) {
        self.innings_number = 2;
        self.balls_bowled = 0;
        self.batting_team_index = self.bowling_team_index();
    }

    pub(crate) fn end_match(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_first_team_batting() {
        let state = MatchState::new();
        assert_eq!(state.batting_team_index, 0);
        assert_eq!(state.bowling_team_index(), 1);
        assert_eq!(state.innings_number, 1);
        assert!(!state.finished);
        assert!(state.last_outcome.is_empty());
        assert!(state.has_batted(0));
        assert!(!state.has_batted(1));
    }

    #[test]
    fn switch_keeps_per_team_figures() {
        let mut state = MatchState::new();
        state.add_runs(12);
        state.add_wicket();
        state.add_legal_ball();
        state.switch_innings();

        assert_eq!(state.innings_number, 2);
        assert_eq!(state.batting_team_index, 1);
        assert_eq!(state.balls_bowled, 0);
        assert_eq!(state.scores, [12, 0]);
        assert_eq!(state.wickets, [1, 0]);
        assert_eq!(state.balls_faced, [1, 0]);
        assert!(state.has_batted(1));
    }

    #[test]
    fn chase_requires_second_innings_and_a_higher_score() {
        let mut state = MatchState::new();
        state.scores = [10, 11];
        assert!(!state.chase_complete());

        state.switch_innings();
        assert!(state.chase_complete());

        state.scores = [10, 10];
        assert!(!state.chase_complete());
    }

    #[test]
    fn runs_saturate_instead_of_overflowing() {
        let mut state = MatchState::new();
        state.add_runs(u32::MAX);
        state.add_runs(1);
        assert_eq!(state.scores, [u32::MAX, 0]);
    }

    #[test]
    fn wickets_saturate_at_the_limit() {
        let mut state = MatchState::new();
        for _ in 0..(MAX_WICKETS + 2) {
            state.add_wicket();
        }
        assert_eq!(state.wickets[0], MAX_WICKETS);
        assert!(state.all_out());
    }
}
