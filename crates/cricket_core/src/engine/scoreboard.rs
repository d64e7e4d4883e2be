//! Scoreboard view model.
//!
//! Turns a [`MatchSnapshot`] into the strings a match screen shows: one card
//! per team, the big outcome banner, the action button label and, at the
//! end, the result line.

use serde::{Deserialize, Serialize};

use super::rules::{overs_display, FIRST_BATTING_INDEX};
use super::simulator::MATCH_OVER_LABEL;
use super::snapshot::MatchSnapshot;

pub const WAITING_BANNER: &str = "Waiting...";
pub const YET_TO_BAT: &str = "Yet to bat";
pub const PLAY_NEXT_BALL: &str = "Play Next Ball";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    Batting,
    Bowling,
}

impl TeamRole {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamRole::Batting => "Batting",
            TeamRole::Bowling => "Bowling",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCard {
    pub name: String,
    pub role: TeamRole,
    /// "runs/wickets", or "Yet to bat".
    pub score_line: String,
    /// Overs faced by this team, once it has batted.
    pub overs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub cards: [TeamCard; 2],
    pub outcome_banner: String,
    pub action_label: String,
    pub result: Option<String>,
}

impl Scoreboard {
    /// `team_names` are in team order (batting first, chasing). `result` is
    /// shown only once the match has finished.
    pub fn from_snapshot(snapshot: &MatchSnapshot, team_names: [&str; 2], result: &str) -> Self {
        let card = |idx: usize| {
            let name = team_names[idx];
            let has_batted = idx == FIRST_BATTING_INDEX || snapshot.innings > 1;
            TeamCard {
                name: name.to_string(),
                role: if snapshot.batting_team == name { TeamRole::Batting } else { TeamRole::Bowling },
                score_line: if has_batted {
                    format!("{}/{}", snapshot.scores[idx], snapshot.wickets[idx])
                } else {
                    YET_TO_BAT.to_string()
                },
                overs: has_batted.then(|| overs_display(snapshot.balls_faced[idx])),
            }
        };

        let outcome_banner = if snapshot.last_outcome.is_empty() {
            WAITING_BANNER.to_string()
        } else {
            snapshot.last_outcome.clone()
        };

        Self {
            cards: [card(0), card(1)],
            outcome_banner,
            action_label: if snapshot.finished { MATCH_OVER_LABEL } else { PLAY_NEXT_BALL }.to_string(),
            result: snapshot.finished.then(|| result.to_string()),
        }
    }
}
