//! JSON string entry points over the global scoring state.
//!
//! Thin wrappers for hosts that speak JSON rather than linking against the
//! typed service: each function deserializes its request, runs the operation
//! against [`crate::state`], and serializes the response. Errors come back as
//! `ScoringError`; `status_code()` gives the transport mapping.

use uuid::Uuid;

use super::service::{CreateMatchRequest, RecordBallRequest};
use crate::error::{Result, ScoringError};
use crate::state;

fn parse_id(kind: &str, raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ScoringError::Validation(format!("Invalid {} ID format", kind)))
}

/// `CreateMatch`: create teams, match, and the first innings.
pub fn create_match_json(request_json: &str) -> Result<String> {
    let request: CreateMatchRequest = serde_json::from_str(request_json)?;
    let details = state::get_state_mut().create_match(request)?;
    Ok(serde_json::to_string(&details)?)
}

/// `RecordBall`: append a delivery and update the innings aggregate.
pub fn record_ball_json(request_json: &str) -> Result<String> {
    let request: RecordBallRequest = serde_json::from_str(request_json)?;
    let response = state::get_state_mut().record_ball(request)?;
    Ok(serde_json::to_string(&response)?)
}

/// `DeleteLastBall`: undo the most recent delivery of its innings.
pub fn delete_last_ball_json(ball_id: &str) -> Result<String> {
    let id = parse_id("ball", ball_id)?;
    let removed = state::get_state_mut().delete_last_ball(id)?;
    Ok(serde_json::to_string(&removed)?)
}

/// `GetInnings`: innings snapshot with its overs-completed string.
pub fn get_innings_json(innings_id: &str) -> Result<String> {
    let id = parse_id("innings", innings_id)?;
    let snapshot = state::get_state().get_innings(id)?;
    Ok(serde_json::to_string(&snapshot)?)
}

/// `GetMatchDetails`: match, teams, and both innings with their ledgers.
pub fn get_match_details_json(match_id: &str) -> Result<String> {
    let id = parse_id("match", match_id)?;
    let details = state::get_state().get_match_details(id)?;
    Ok(serde_json::to_string(&details)?)
}

/// `TransitionInnings`: close the current innings and advance the match.
pub fn transition_innings_json(match_id: &str) -> Result<String> {
    let id = parse_id("match", match_id)?;
    let outcome = state::get_state_mut().transition_innings(id)?;
    Ok(serde_json::to_string(&outcome)?)
}

/// `ListMatches`: all matches, newest first.
pub fn list_matches_json() -> Result<String> {
    let summaries = state::get_state().list_matches();
    Ok(serde_json::to_string(&summaries)?)
}
