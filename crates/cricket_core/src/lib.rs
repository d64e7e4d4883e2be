//! # cricket_core - Ball-by-Ball Cricket Match Simulation
//!
//! Two teams, two innings, a weighted random outcome per delivery.
//!
//! ## Features
//! - Deterministic simulation (same seed = same match)
//! - Injectable outcome source for scripted scenarios and replays
//! - Render-ready snapshot after every delivery
//! - JSON API for front ends

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    list_teams_json, parse_request, simulate_match, simulate_match_json, MatchRequest,
    MatchResponse,
};
pub use error::{MatchError, ProbabilityError, Result, TeamListError};

pub use data::{default_teams, find_team, load_teams, LoadedTeams, TeamListSource};
pub use engine::{
    calibrate, BallOutcome, BallReport, CalibrationReport, DeliveryRecord, MatchResult,
    MatchSimulator, MatchSnapshot, OutcomeSource, Scoreboard, ScriptedOutcomes, TeamCard,
    TeamRole, WeightedOutcomes, WinMargin, MATCH_OVER_LABEL,
};
pub use models::{Team, TeamSelection};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
