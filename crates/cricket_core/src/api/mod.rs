pub mod json_api;

pub use json_api::{
    list_teams_json, parse_request, simulate_match, simulate_match_json, MatchRequest,
    MatchResponse,
};
