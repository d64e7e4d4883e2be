//! Bundled game data
//!
//! - Team list (embedded default + file loader with fallback)

pub mod teams;

pub use teams::{
    default_teams, find_team, load_team_list, load_teams, parse_team_list, resolve_teams_path,
    LoadedTeams, TeamListSource, DEFAULT_TEAMS_JSON, DEFAULT_TEAMS_REL_PATH, TEAMS_PATH_ENV,
};
