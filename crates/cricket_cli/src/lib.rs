//! Cricket CLI Library
//!
//! Terminal rendering for the match screen, the team list and the
//! calibration table. The binary in `main.rs` only parses arguments and
//! wires these together.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use cricket_core::{find_team, CalibrationReport, DeliveryRecord, Scoreboard, Team, TeamCard};

/// Use the given seed, or draw one so the match can still be replayed.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Resolve the two `NAME|INDEX` keys against the loaded list.
pub fn pick_teams(teams: &[Team], team_a: &str, team_b: &str) -> Result<(Team, Team)> {
    let lookup = |key: &str| {
        find_team(teams, key)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown team '{}' (run `cricket teams` for the list)", key))
    };
    Ok((lookup(team_a)?, lookup(team_b)?))
}

pub fn read_request(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file '{}'", path.display()))
}

/// Numbered team list, one team per line.
pub fn render_team_list(teams: &[Team]) -> String {
    let mut out = String::new();
    for (idx, team) in teams.iter().enumerate() {
        let _ = writeln!(out, "{:>2}  {:<16} {}", idx, team.name, team.flag);
    }
    out
}

fn render_card(card: &TeamCard) -> String {
    format!(
        "{:<16} {:<8} {:>10}  {}",
        card.name,
        card.role.as_str(),
        card.score_line,
        card.overs.as_deref().map(|o| format!("({o} ov)")).unwrap_or_default()
    )
}

/// Match screen: both team cards, the outcome banner and (once finished)
/// the result line.
pub fn render_scoreboard(board: &Scoreboard) -> String {
    let mut out = String::new();
    for card in &board.cards {
        let _ = writeln!(out, "{}", render_card(card).trim_end());
    }
    let _ = writeln!(out, "  >> {}", board.outcome_banner);
    if let Some(result) = &board.result {
        let _ = writeln!(out, "*** {} ***", result);
    }
    out
}

/// One commentary line per delivery, prefixed with the batting side.
pub fn render_delivery(record: &DeliveryRecord, teams: &[Team; 2]) -> String {
    format!("[{}] {}", teams[record.batting_team].name, record.commentary())
}

pub fn render_calibration(report: &CalibrationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "seed {}  trials {}", report.seed, report.trials);
    let _ = writeln!(out, "{:<20} {:>9} {:>9} {:>9}", "outcome", "count", "expected", "observed");
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<20} {:>9} {:>8.2}% {:>8.2}%",
            row.label,
            row.count,
            row.expected * 100.0,
            row.observed * 100.0
        );
    }
    let _ = writeln!(out, "max deviation {:.3}%", report.max_deviation * 100.0);
    match &report.violation {
        None => {
            let _ = writeln!(out, "within tolerance");
        }
        Some(msg) => {
            let _ = writeln!(out, "OUT OF TOLERANCE: {}", msg);
        }
    }
    out
}
