//! In-memory document store.
//!
//! Stand-in for the hosted document store the reference deployment assumed.
//! Collections are keyed by id; each innings additionally owns an
//! insertion-ordered ball ledger. The ledger is append-only except for its
//! most recent entry, which may be removed (the undo path).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ScoringError};
use crate::models::{BallEvent, Innings, Match, Team};

/// All persisted match-scoring state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreStore {
    matches: HashMap<Uuid, Match>,
    teams: HashMap<Uuid, Team>,
    innings: HashMap<Uuid, Innings>,
    balls: HashMap<Uuid, BallEvent>,
    /// Per-innings ledger, in insertion order.
    ledgers: HashMap<Uuid, Vec<Uuid>>,
    /// Match ids in creation order.
    match_order: Vec<Uuid>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- matches ----

    pub fn insert_match(&mut self, the_match: Match) {
        self.match_order.push(the_match.id);
        self.matches.insert(the_match.id, the_match);
    }

    pub fn get_match(&self, id: Uuid) -> Result<&Match> {
        self.matches.get(&id).ok_or_else(|| ScoringError::not_found("match", id))
    }

    pub fn get_match_mut(&mut self, id: Uuid) -> Result<&mut Match> {
        self.matches.get_mut(&id).ok_or_else(|| ScoringError::not_found("match", id))
    }

    /// All matches, newest first.
    pub fn matches_newest_first(&self) -> Vec<&Match> {
        self.match_order.iter().rev().filter_map(|id| self.matches.get(id)).collect()
    }

    // ---- teams ----

    pub fn insert_team(&mut self, team: Team) {
        self.teams.insert(team.id, team);
    }

    pub fn get_team(&self, id: Uuid) -> Result<&Team> {
        self.teams.get(&id).ok_or_else(|| ScoringError::not_found("team", id))
    }

    // ---- innings ----

    pub fn insert_innings(&mut self, innings: Innings) {
        self.ledgers.entry(innings.id).or_default();
        self.innings.insert(innings.id, innings);
    }

    pub fn get_innings(&self, id: Uuid) -> Result<&Innings> {
        self.innings.get(&id).ok_or_else(|| ScoringError::not_found("innings", id))
    }

    pub fn get_innings_mut(&mut self, id: Uuid) -> Result<&mut Innings> {
        self.innings.get_mut(&id).ok_or_else(|| ScoringError::not_found("innings", id))
    }

    // ---- ball ledger ----

    pub fn get_ball(&self, id: Uuid) -> Result<&BallEvent> {
        self.balls.get(&id).ok_or_else(|| ScoringError::not_found("ball", id))
    }

    /// Append a delivery to its innings ledger.
    pub fn push_ball(&mut self, ball: BallEvent) -> Result<()> {
        if !self.innings.contains_key(&ball.innings_id) {
            return Err(ScoringError::not_found("innings", ball.innings_id));
        }
        self.ledgers.entry(ball.innings_id).or_default().push(ball.id);
        self.balls.insert(ball.id, ball);
        Ok(())
    }

    /// The most recently recorded delivery of an innings.
    pub fn last_ball(&self, innings_id: Uuid) -> Option<&BallEvent> {
        let ledger = self.ledgers.get(&innings_id)?;
        ledger.last().and_then(|id| self.balls.get(id))
    }

    /// Remove a delivery, which must be the most recent entry of its innings
    /// ledger. Anything else is a conflict: mid-ledger deletion is not a
    /// meaningful operation.
    pub fn remove_last_ball(&mut self, ball_id: Uuid) -> Result<BallEvent> {
        let innings_id = self.get_ball(ball_id)?.innings_id;
        let ledger = self
            .ledgers
            .get_mut(&innings_id)
            .ok_or_else(|| ScoringError::not_found("innings", innings_id))?;

        match ledger.last() {
            Some(last) if *last == ball_id => {
                ledger.pop();
            }
            _ => {
                return Err(ScoringError::StateConflict(
                    "Only the most recent ball of an innings can be deleted".to_string(),
                ));
            }
        }

        self.balls
            .remove(&ball_id)
            .ok_or_else(|| ScoringError::not_found("ball", ball_id))
    }

    /// Deliveries of an innings, newest first (the reference wire order).
    pub fn balls_newest_first(&self, innings_id: Uuid) -> Vec<&BallEvent> {
        self.ledgers
            .get(&innings_id)
            .map(|ledger| ledger.iter().rev().filter_map(|id| self.balls.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn ball_count(&self, innings_id: Uuid) -> usize {
        self.ledgers.get(&innings_id).map_or(0, |ledger| ledger.len())
    }
}
