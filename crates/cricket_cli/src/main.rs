//! Cricket CLI
//!
//! Team list, ball-by-ball matches, outcome calibration and the JSON API
//! from the terminal.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "cricket")]
#[command(about = "Ball-by-ball cricket match simulator", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the available teams
    Teams {
        /// Team list JSON (falls back to the bundled list if unreadable)
        #[arg(long, env = "CRICKET_TEAMS_PATH")]
        teams: Option<PathBuf>,
    },

    /// Play a match ball by ball
    Play {
        /// Side batting first (name or index from `cricket teams`)
        #[arg(long)]
        team_a: String,

        /// Chasing side (name or index)
        #[arg(long)]
        team_b: String,

        /// RNG seed; a random one is drawn and printed when omitted
        #[arg(long, env = "CRICKET_SEED")]
        seed: Option<u64>,

        /// Team list JSON
        #[arg(long, env = "CRICKET_TEAMS_PATH")]
        teams: Option<PathBuf>,

        /// Wait for Enter before every delivery
        #[arg(long, default_value = "false")]
        step: bool,
    },

    /// Sample the outcome table and compare against the configured weights
    Calibrate {
        #[arg(long, default_value = "100000")]
        trials: u64,

        #[arg(long, env = "CRICKET_SEED", default_value = "0")]
        seed: u64,
    },

    /// Run a JSON match request and print the response
    SimulateJson {
        /// Request JSON file
        #[arg(long)]
        request: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Teams { teams } => {
            let loaded = load_teams(teams.as_deref())?;
            print!("{}", cricket_cli::render_team_list(&loaded.teams));
        }

        Commands::Play { team_a, team_b, seed, teams, step } => {
            let loaded = load_teams(teams.as_deref())?;
            let (a, b) = cricket_cli::pick_teams(&loaded.teams, &team_a, &team_b)?;
            let seed = cricket_cli::resolve_seed(seed);
            println!("{} v {}  (seed {})", a.name, b.name, seed);

            let sim = cricket_core::MatchSimulator::new(a, b, seed)?;
            play(sim, step)?;
        }

        Commands::Calibrate { trials, seed } => {
            let report = cricket_core::calibrate(seed, trials);
            print!("{}", cricket_cli::render_calibration(&report));
            if !report.within_tolerance() {
                log::warn!("calibration outside tolerance for seed {}", seed);
            }
        }

        Commands::SimulateJson { request } => {
            let body = cricket_cli::read_request(&request)?;
            let response = cricket_core::simulate_match_json(&body).map_err(anyhow::Error::msg)?;
            let pretty: serde_json::Value =
                serde_json::from_str(&response).context("Response was not valid JSON")?;
            println!("{}", serde_json::to_string_pretty(&pretty)?);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_teams(path: Option<&std::path::Path>) -> Result<cricket_core::LoadedTeams> {
    let loaded = cricket_core::load_teams(path)
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;
    if loaded.source == cricket_core::TeamListSource::Fallback {
        println!("Using bundled team list ({} not readable)", loaded.path.display());
    }
    Ok(loaded)
}

#[cfg(feature = "cli")]
fn play(mut sim: cricket_core::MatchSimulator, step: bool) -> Result<()> {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    print!("{}", cricket_cli::render_scoreboard(&sim.scoreboard()));
    while !sim.is_finished() {
        if step {
            println!("[Enter] Play Next Ball");
            // stdin closed: finish the match without waiting
            if let Some(line) = lines.next() {
                line.context("Failed to read from stdin")?;
            }
        }

        sim.advance_ball();
        if let Some(record) = sim.deliveries().last() {
            println!("{}", cricket_cli::render_delivery(record, sim.teams()));
        }
        if step {
            print!("{}", cricket_cli::render_scoreboard(&sim.scoreboard()));
        }
    }

    if !step {
        print!("{}", cricket_cli::render_scoreboard(&sim.scoreboard()));
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("cricket CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
