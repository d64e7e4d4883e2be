//! Ball-by-ball match simulator.
//!
//! ## Delivery flow
//!
//! ```text
//! advance_ball()
//!   ├─ finished?            → "Match Over", nothing changes
//!   ├─ draw outcome         (OutcomeSource)
//!   ├─ apply outcome        runs / wicket / extra
//!   ├─ log delivery
//!   └─ end-of-innings check (first match wins)
//!        1. 2nd innings, chasing side ahead   → end match
//!        2. overs exhausted                   → switch innings | end match
//!        3. batting side all out              → switch innings | end match
//! ```

use log::{debug, info};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::events::DeliveryRecord;
use super::match_state::MatchState;
use super::outcome::{BallOutcome, OutcomeSource, WeightedOutcomes};
use super::result::MatchResult;
use super::rules::overs_display;
use super::scoreboard::Scoreboard;
use super::snapshot::MatchSnapshot;
use crate::error::{MatchError, Result};
use crate::models::{Team, TeamSelection};

/// Label returned when a ball is requested after the match has ended.
pub const MATCH_OVER_LABEL: &str = "Match Over";

/// What a single `advance_ball()` call produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallReport {
    /// Display label, also stored as the state's last outcome. Equals
    /// [`MATCH_OVER_LABEL`] for the post-match no-op.
    pub label: String,
    /// `None` when no ball was bowled.
    pub outcome: Option<BallOutcome>,
    pub snapshot: MatchSnapshot,
}

/// How the innings ended on a given ball, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InningsEnd {
    ChaseComplete,
    OversExhausted,
    AllOut,
}

#[derive(Debug)]
pub struct MatchSimulator<S = WeightedOutcomes<ChaCha8Rng>> {
    teams: [Team; 2],
    state: MatchState,
    source: S,
    deliveries: Vec<DeliveryRecord>,
}

impl MatchSimulator<WeightedOutcomes<ChaCha8Rng>> {
    /// Seeded match: the same seed and teams always play out identically.
    pub fn new(team_a: Team, team_b: Team, seed: u64) -> Result<Self> {
        Self::with_source(team_a, team_b, WeightedOutcomes::seeded(seed))
    }

    /// Start a match from a completed selection (first pick bats first).
    pub fn from_selection(selection: TeamSelection, seed: u64) -> Result<Self> {
        let (team_a, team_b) = selection.into_pair()?;
        Self::new(team_a, team_b, seed)
    }
}

impl<S: OutcomeSource> MatchSimulator<S> {
    /// `team_a` bats first. Team names must differ.
    pub fn with_source(team_a: Team, team_b: Team, source: S) -> Result<Self> {
        if team_a.name == team_b.name {
            return Err(MatchError::DuplicateTeam(team_a.name));
        }
        info!("match start: {} v {}", team_a.name, team_b.name);
        Ok(Self { teams: [team_a, team_b], state: MatchState::new(), source, deliveries: Vec::new() })
    }

    /// Bowl one delivery and apply the innings/match rules.
    pub fn advance_ball(&mut self) -> BallReport {
        if self.state.finished {
            return BallReport {
                label: MATCH_OVER_LABEL.to_string(),
                outcome: None,
                snapshot: self.snapshot(),
            };
        }

        let outcome = self.source.next_outcome();
        let label = outcome.label();
        self.apply(outcome);
        self.state.last_outcome = label.clone();
        self.record(outcome, &label);

        if let Some(end) = self.innings_end() {
            self.close_innings(end);
        }

        BallReport { label, outcome: Some(outcome), snapshot: self.snapshot() }
    }

    fn apply(&mut self, outcome: BallOutcome) {
        match outcome {
            BallOutcome::Runs(runs) => {
                self.state.add_runs(runs);
                self.state.add_legal_ball();
            }
            BallOutcome::Out => {
                self.state.add_wicket();
                self.state.add_legal_ball();
            }
            BallOutcome::Wide | BallOutcome::NoBall => {
                self.state.add_runs(outcome.runs());
            }
        }
    }

    fn record(&mut self, outcome: BallOutcome, label: &str) {
        let record = DeliveryRecord {
            innings: self.state.innings_number,
            batting_team: self.state.batting_team_index,
            over: overs_display(self.state.balls_bowled),
            outcome,
            label: label.to_string(),
            score: self.state.batting_score(),
            wickets: self.state.batting_wickets(),
        };
        debug!(
            "innings {} {}: {}",
            record.innings,
            self.teams[record.batting_team].name,
            record.commentary()
        );
        self.deliveries.push(record);
    }

    fn innings_end(&self) -> Option<InningsEnd> {
        if self.state.chase_complete() {
            Some(InningsEnd::ChaseComplete)
        } else if self.state.overs_exhausted() {
            Some(InningsEnd::OversExhausted)
        } else if self.state.all_out() {
            Some(InningsEnd::AllOut)
        } else {
            None
        }
    }

    fn close_innings(&mut self, end: InningsEnd) {
        let batting = &self.teams[self.state.batting_team_index].name;
        info!(
            "innings {} closed ({:?}): {} {}/{}",
            self.state.innings_number,
            end,
            batting,
            self.state.batting_score(),
            self.state.batting_wickets()
        );

        if end == InningsEnd::ChaseComplete || self.state.innings_number == 2 {
            self.state.end_match();
            info!("match over: {}", self.result());
        } else {
            self.state.switch_innings();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Current result by comparing totals. Meaningful at any time, final
    /// once [`is_finished`](Self::is_finished) is true.
    pub fn result(&self) -> MatchResult {
        MatchResult::from_state(&self.state, &self.teams)
    }

    pub fn result_text(&self) -> String {
        self.result().to_string()
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.state, &self.teams)
    }

    /// Match-screen strings for the current state.
    pub fn scoreboard(&self) -> Scoreboard {
        let names = [self.teams[0].name.as_str(), self.teams[1].name.as_str()];
        Scoreboard::from_snapshot(&self.snapshot(), names, &self.result_text())
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn deliveries(&self) -> &[DeliveryRecord] {
        &self.deliveries
    }

    /// Bowl until the match ends, returning the final result.
    pub fn play_to_completion(&mut self) -> MatchResult {
        while !self.state.finished {
            self.advance_ball();
        }
        self.result()
    }
}
