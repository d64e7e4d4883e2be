//! Team list loader.
//!
//! Format: a JSON array of `{ "name": string, "flag": string }` records.
//!
//! Resolution order for the list path:
//! 1) explicit path passed by the caller
//! 2) `CRICKET_TEAMS_PATH` if set
//! 3) `data/teams.json` (relative)
//!
//! An unreadable file falls back to the embedded default list. A file that
//! reads but does not parse (or holds no teams) is reported to the caller.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::TeamListError;
use crate::models::Team;

/// Env var for overriding the team list path.
pub const TEAMS_PATH_ENV: &str = "CRICKET_TEAMS_PATH";

/// Default relative path used when `CRICKET_TEAMS_PATH` is not set.
pub const DEFAULT_TEAMS_REL_PATH: &str = "data/teams.json";

/// Bundled team list (10 international sides).
pub const DEFAULT_TEAMS_JSON: &str = include_str!("../../data/teams.json");

static DEFAULT_TEAMS: Lazy<Vec<Team>> = Lazy::new(|| {
    // Covered by `embedded_list_parses`; an empty list is the only way this
    // can degrade.
    parse_team_list(DEFAULT_TEAMS_JSON).unwrap_or_default()
});

/// Where a loaded list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamListSource {
    File,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadedTeams {
    pub teams: Vec<Team>,
    pub source: TeamListSource,
    /// Path that was tried.
    pub path: PathBuf,
}

/// The embedded default list.
pub fn default_teams() -> &'static [Team] {
    &DEFAULT_TEAMS
}

pub fn resolve_teams_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = env::var(TEAMS_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_TEAMS_REL_PATH)
}

pub fn parse_team_list(json: &str) -> Result<Vec<Team>, TeamListError> {
    let teams: Vec<Team> = serde_json::from_str(json)?;
    if teams.is_empty() {
        return Err(TeamListError::Empty);
    }
    Ok(teams)
}

/// Read and parse a team list file. No fallback.
pub fn load_team_list(path: &Path) -> Result<Vec<Team>, TeamListError> {
    let json = fs::read_to_string(path)
        .map_err(|source| TeamListError::Io { path: path.to_path_buf(), source })?;
    parse_team_list(&json)
}

/// Load the team list, falling back to the embedded list when the file
/// cannot be read.
pub fn load_teams(explicit: Option<&Path>) -> Result<LoadedTeams, TeamListError> {
    let path = resolve_teams_path(explicit);
    match load_team_list(&path) {
        Ok(teams) => Ok(LoadedTeams { teams, source: TeamListSource::File, path }),
        Err(err) if err.is_recoverable() => {
            warn!("{err}; using bundled team list");
            Ok(LoadedTeams { teams: default_teams().to_vec(), source: TeamListSource::Fallback, path })
        }
        Err(err) => Err(err),
    }
}

/// Look a team up by name (case-insensitive) or by 0-based index.
pub fn find_team<'a>(teams: &'a [Team], key: &str) -> Option<&'a Team> {
    let key = key.trim();
    if let Ok(idx) = key.parse::<usize>() {
        return teams.get(idx);
    }
    teams.iter().find(|t| t.name.eq_ignore_ascii_case(key))
}
