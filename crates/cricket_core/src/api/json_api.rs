use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::load_teams;
use crate::engine::{
    BallOutcome, DeliveryRecord, MatchResult, MatchSimulator, MatchSnapshot, OutcomeSource,
    ScriptedOutcomes,
};
use crate::error::MatchError;
use crate::models::Team;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Bats first.
    pub team_a: Team,
    pub team_b: Team,
    /// Replay these outcomes instead of drawing from the seeded table.
    #[serde(default)]
    pub script: Option<Vec<BallOutcome>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub result: String,
    pub outcome: MatchResult,
    pub final_state: MatchSnapshot,
    pub deliveries: Vec<DeliveryRecord>,
}

fn play<S: OutcomeSource>(mut sim: MatchSimulator<S>, seed: u64) -> MatchResponse {
    let outcome = sim.play_to_completion();
    MatchResponse {
        schema_version: SCHEMA_VERSION,
        seed,
        result: outcome.to_string(),
        outcome,
        final_state: sim.snapshot(),
        deliveries: sim.deliveries().to_vec(),
    }
}

/// Decode a request body. Schema and script checks happen in
/// [`simulate_match`].
pub fn parse_request(request_json: &str) -> Result<MatchRequest, MatchError> {
    Ok(serde_json::from_str(request_json)?)
}

/// Every scripted delivery must be one the outcome table can produce.
fn validate_script(script: &[BallOutcome]) -> Result<(), MatchError> {
    match script.iter().position(|outcome| !outcome.is_canonical()) {
        Some(index) => Err(MatchError::InvalidOutcome { index, outcome: script[index] }),
        None => Ok(()),
    }
}

/// Validate a request, then play the whole match.
pub fn simulate_match(request: MatchRequest) -> Result<MatchResponse, MatchError> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::UnsupportedSchemaVersion(request.schema_version));
    }
    if let Some(script) = &request.script {
        validate_script(script)?;
    }

    let MatchRequest { seed, team_a, team_b, script, .. } = request;
    let response = match script {
        Some(script) => {
            play(MatchSimulator::with_source(team_a, team_b, ScriptedOutcomes::new(script))?, seed)
        }
        None => play(MatchSimulator::new(team_a, team_b, seed)?, seed),
    };
    Ok(response)
}

/// JSON in, JSON out. Same request always yields the same response.
pub fn simulate_match_json(request_json: &str) -> Result<String, String> {
    let request =
        parse_request(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    let response = simulate_match(request).map_err(|e| format!("Simulation failed: {}", e))?;

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

/// Loaded (or fallback) team list as JSON, including where it came from.
pub fn list_teams_json(path: Option<&Path>) -> Result<String, String> {
    let loaded = load_teams(path).map_err(|e| format!("{}: {}", e.user_message(), e))?;
    serde_json::to_string(&loaded).map_err(|e| format!("Failed to serialize team list: {}", e))
}
