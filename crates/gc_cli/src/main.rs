//! Umpire CLI
//!
//! Drives the scoring engine against a state file: start a match, record or
//! undo deliveries, advance innings, and print scorecards. Each command
//! loads the snapshot, applies one operation, and writes the snapshot back.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

use gc_core::{
    CreateMatchRequest, ExtraType, RecordBallRequest, SaveManager, ScoringService, TossWinner,
    TransitionOutcome,
};

#[derive(Parser)]
#[command(name = "gc_cli")]
#[command(about = "Gully-cricket umpire scoring console", long_about = None)]
struct Cli {
    /// State snapshot file
    #[arg(long, global = true, default_value = "scoring.gcsv")]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TossArg {
    TeamA,
    TeamB,
}

impl From<TossArg> for TossWinner {
    fn from(arg: TossArg) -> Self {
        match arg {
            TossArg::TeamA => TossWinner::TeamA,
            TossArg::TeamB => TossWinner::TeamB,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExtraArg {
    Wide,
    Noball,
}

impl From<ExtraArg> for ExtraType {
    fn from(arg: ExtraArg) -> Self {
        match arg {
            ExtraArg::Wide => ExtraType::Wide,
            ExtraArg::Noball => ExtraType::NoBall,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new match (creates both teams and the first innings)
    New {
        #[arg(long)]
        location: String,

        #[arg(long)]
        team_a: String,

        #[arg(long)]
        team_b: String,

        /// Players per side (the all-out threshold)
        #[arg(long, default_value = "11")]
        players: u8,

        /// Overs per innings
        #[arg(long)]
        overs: u32,

        /// Toss winner; bats first
        #[arg(long, value_enum)]
        toss: TossArg,
    },

    /// Record one delivery against the current innings
    Ball {
        /// Match id; defaults to the most recent match
        #[arg(long)]
        match_id: Option<Uuid>,

        /// Runs scored (for extras, including the mandatory 1)
        #[arg(long, default_value = "0")]
        runs: u32,

        /// The batter is out on this delivery
        #[arg(long)]
        wicket: bool,

        /// Wide or no-ball; does not consume a legal delivery
        #[arg(long, value_enum)]
        extra: Option<ExtraArg>,
    },

    /// Undo the most recent delivery of the current innings
    Undo {
        #[arg(long)]
        match_id: Option<Uuid>,
    },

    /// Print the full scorecard for a match
    Show {
        #[arg(long)]
        match_id: Option<Uuid>,
    },

    /// List all matches, newest first
    List,

    /// Close the current innings and advance the match
    NextInnings {
        #[arg(long)]
        match_id: Option<Uuid>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let state_path = cli.state;

    let mut service = SaveManager::load_or_default(&state_path)
        .with_context(|| format!("failed to load state from {}", state_path.display()))?;

    match cli.command {
        Commands::New { location, team_a, team_b, players, overs, toss } => {
            let details = service.create_match(CreateMatchRequest {
                location,
                team_a_name: team_a,
                team_b_name: team_b,
                players_per_team: players,
                total_overs: overs,
                toss_won_by: toss.into(),
            })?;
            SaveManager::save_to_path(&state_path, &service)?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }

        Commands::Ball { match_id, runs, wicket, extra } => {
            let innings_id = current_innings_id(&service, match_id)?;
            let extra_type = extra.map(ExtraType::from).unwrap_or_default();
            let response = service.record_ball(RecordBallRequest {
                innings_id,
                over_number: None,
                ball_number: None,
                runs,
                is_wicket: wicket,
                is_extra: extra_type.is_extra(),
                extra_type,
            })?;
            SaveManager::save_to_path(&state_path, &service)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Undo { match_id } => {
            let innings_id = current_innings_id(&service, match_id)?;
            let last_ball_id = service
                .store()
                .last_ball(innings_id)
                .map(|ball| ball.id)
                .ok_or_else(|| anyhow!("no ball to delete"))?;
            let removed = service.delete_last_ball(last_ball_id)?;
            SaveManager::save_to_path(&state_path, &service)?;
            println!("{}", serde_json::to_string_pretty(&removed)?);
        }

        Commands::Show { match_id } => {
            let match_id = resolve_match_id(&service, match_id)?;
            let details = service.get_match_details(match_id)?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }

        Commands::List => {
            println!("{}", serde_json::to_string_pretty(&service.list_matches())?);
        }

        Commands::NextInnings { match_id } => {
            let match_id = resolve_match_id(&service, match_id)?;
            let outcome = service.transition_innings(match_id)?;
            SaveManager::save_to_path(&state_path, &service)?;
            match &outcome {
                TransitionOutcome::InningsStarted { innings } => {
                    println!("Second innings started: {}", innings.innings.id);
                }
                TransitionOutcome::MatchCompleted { winner_message, .. } => {
                    println!("{}", winner_message);
                }
            }
        }
    }

    Ok(())
}

/// Use the given match id or fall back to the most recent match.
fn resolve_match_id(service: &ScoringService, match_id: Option<Uuid>) -> Result<Uuid> {
    if let Some(id) = match_id {
        return Ok(id);
    }
    let matches = service.list_matches();
    match matches.first() {
        Some(summary) => Ok(summary.id),
        None => bail!("no matches recorded yet; start one with `gc_cli new`"),
    }
}

fn current_innings_id(service: &ScoringService, match_id: Option<Uuid>) -> Result<Uuid> {
    let match_id = resolve_match_id(service, match_id)?;
    let details = service.get_match_details(match_id)?;
    let current = details.current_innings;
    details
        .innings
        .iter()
        .find(|detail| detail.innings.innings_number == current)
        .map(|detail| detail.innings.id)
        .ok_or_else(|| anyhow!("current innings not found for match {}", match_id))
}
