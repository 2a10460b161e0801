//! # gc_core - Gully-Cricket Match-State Engine
//!
//! Ball-by-ball live scoring for a two-innings limited-overs match: umpires
//! record deliveries (runs, extras, wickets), the engine maintains a
//! consistent score, over count, and innings/match transitions, and
//! spectators read live scorecards derived from it.
//!
//! ## Features
//! - Deterministic fold of an append-only ball ledger into innings aggregates
//! - Over/ball arithmetic with the "extras don't consume a delivery" rule
//! - Innings-completion judging and match-result arbitration
//! - JSON API over a global state singleton for non-Rust hosts
//! - Compressed, checksummed state snapshots

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;
pub mod state;
pub mod store;

// Re-export main API surface
pub use api::{
    create_match_json, delete_last_ball_json, get_innings_json, get_match_details_json,
    list_matches_json, record_ball_json, transition_innings_json,
};
pub use api::{
    CreateMatchRequest, InningsDetail, InningsSnapshot, MatchDetails, MatchSummary,
    RecordBallRequest, RecordBallResponse, ScoringService, TossWinner, TransitionOutcome,
};
pub use engine::{BallPosition, CompletionSignal, InningsEndReason, MatchOutcome, OversCompleted, BALLS_PER_OVER};
pub use error::{Result, ScoringError};
pub use models::{
    BallEvent, BattingOrder, ExtraType, Innings, InningsStatus, Match, MatchStatus, Team,
};
pub use save::{SaveError, SaveManager, ScoreSave};
pub use state::{get_state, get_state_mut, reset_state, set_state, SCORING_STATE};
pub use store::ScoreStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
