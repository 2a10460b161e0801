//! Typed service layer: the seven logical operations the external
//! collaborator calls into, plus the match orchestration between them.
//!
//! Every ball-recording call is a serialized read-modify-write against one
//! innings: the canonical delivery position is always derived here from the
//! stored last ball, and client-supplied positions are only checked against
//! it. A retried request therefore carries a stale position and is rejected
//! instead of double-applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::aggregate::{apply_ball, revert_ball};
use crate::engine::completion::{check_innings_complete, CompletionSignal};
use crate::engine::outcome::compute_outcome;
use crate::engine::over_count::{next_ball, OversCompleted};
use crate::engine::target::target_text;
use crate::error::{Result, ScoringError};
use crate::models::{
    BallEvent, BattingOrder, ExtraType, Innings, Match, MatchStatus, Team,
};
use crate::store::ScoreStore;

/// Which side won the toss; the toss winner bats first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TossWinner {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    pub location: String,
    pub team_a_name: String,
    pub team_b_name: String,
    pub players_per_team: u8,
    pub total_overs: u32,
    pub toss_won_by: TossWinner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordBallRequest {
    pub innings_id: Uuid,
    /// Advisory; the server recomputes the canonical position and rejects a
    /// mismatch.
    #[serde(default)]
    pub over_number: Option<u32>,
    #[serde(default)]
    pub ball_number: Option<u8>,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub is_wicket: bool,
    #[serde(default)]
    pub is_extra: bool,
    #[serde(default)]
    pub extra_type: ExtraType,
}

/// Innings snapshot with its computed overs-completed display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InningsSnapshot {
    #[serde(flatten)]
    pub innings: Innings,
    pub overs_completed: String,
}

/// Innings snapshot with its ball ledger, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InningsDetail {
    #[serde(flatten)]
    pub innings: Innings,
    pub overs_completed: String,
    pub balls: Vec<BallEvent>,
}

/// Match with teams and innings populated in place of their id references,
/// the shape the reference API served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetails {
    pub id: Uuid,
    pub location: String,
    pub overs: u32,
    pub status: MatchStatus,
    pub current_innings: u8,
    pub teams: Vec<Team>,
    pub innings: Vec<InningsDetail>,
    pub won_by: Option<Uuid>,
    pub winner_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Live chase/remaining line for the current innings; absent once the
    /// match is completed.
    pub target_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: Uuid,
    pub location: String,
    pub overs: u32,
    pub status: MatchStatus,
    pub current_innings: u8,
    pub teams: Vec<Team>,
    pub innings: Vec<InningsSnapshot>,
    pub won_by: Option<Uuid>,
    pub winner_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordBallResponse {
    pub ball: BallEvent,
    pub innings: InningsSnapshot,
    /// Set when this delivery ended the innings. For the first innings the
    /// caller must confirm the transition; a terminal second-innings delivery
    /// has already completed the match by the time this returns.
    pub completion: Option<CompletionSignal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum TransitionOutcome {
    /// Innings 1 closed, innings 2 opened with teams swapped.
    InningsStarted { innings: InningsSnapshot },
    /// Innings 2 closed; final result recorded on the match.
    MatchCompleted { won_by: Option<Uuid>, winner_message: String },
}

/// The match-state engine behind the external interface. One instance owns
/// the whole store; callers serialize access to it.
#[derive(Debug, Default)]
pub struct ScoringService {
    store: ScoreStore,
}

impl ScoringService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: ScoreStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    /// Create teams, match, and the first innings. The toss winner bats
    /// first.
    pub fn create_match(&mut self, request: CreateMatchRequest) -> Result<MatchDetails> {
        if request.location.trim().is_empty()
            || request.team_a_name.trim().is_empty()
            || request.team_b_name.trim().is_empty()
            || request.players_per_team == 0
            || request.total_overs == 0
        {
            return Err(ScoringError::Validation("Missing required fields".to_string()));
        }

        let (order_a, order_b) = match request.toss_won_by {
            TossWinner::TeamA => (BattingOrder::First, BattingOrder::Second),
            TossWinner::TeamB => (BattingOrder::Second, BattingOrder::First),
        };
        let team_a = Team::new(request.team_a_name.trim(), request.players_per_team, order_a);
        let team_b = Team::new(request.team_b_name.trim(), request.players_per_team, order_b);
        team_a.validate().map_err(ScoringError::Validation)?;
        team_b.validate().map_err(ScoringError::Validation)?;

        let (batting_id, bowling_id) = match request.toss_won_by {
            TossWinner::TeamA => (team_a.id, team_b.id),
            TossWinner::TeamB => (team_b.id, team_a.id),
        };

        let mut the_match =
            Match::new(request.location.trim(), request.total_overs, [team_a.id, team_b.id]);
        let first_innings = Innings::new(the_match.id, 1, batting_id, bowling_id);
        the_match.innings.push(first_innings.id);

        let match_id = the_match.id;
        log::info!(
            "Match created at {}: {} vs {}, {} overs",
            the_match.location,
            team_a.name,
            team_b.name,
            the_match.overs
        );

        self.store.insert_team(team_a);
        self.store.insert_team(team_b);
        self.store.insert_innings(first_innings);
        self.store.insert_match(the_match);

        self.get_match_details(match_id)
    }

    /// Append a delivery to the innings ledger and fold it into the
    /// aggregate. Terminal deliveries return a completion signal; a terminal
    /// second-innings delivery also completes the match before returning.
    pub fn record_ball(&mut self, request: RecordBallRequest) -> Result<RecordBallResponse> {
        if request.is_extra != request.extra_type.is_extra() {
            return Err(ScoringError::Validation(format!(
                "isExtra ({}) inconsistent with extraType ({:?})",
                request.is_extra, request.extra_type
            )));
        }

        let innings = self.store.get_innings(request.innings_id)?;
        if innings.is_completed() {
            return Err(ScoringError::StateConflict(
                "Innings is already completed".to_string(),
            ));
        }
        let match_id = innings.match_id;
        let the_match = self.store.get_match(match_id)?.clone();
        let batting_team = self.store.get_team(innings.batting_team_id)?.clone();

        if request.is_wicket && innings.wickets >= batting_team.number_of_players {
            return Err(ScoringError::StateConflict(
                "Batting side is already all out".to_string(),
            ));
        }

        // Canonical position comes from the stored last ball, never from the
        // client. A stale resubmission fails the advisory check below.
        let position = next_ball(self.store.last_ball(request.innings_id));
        if let Some(over) = request.over_number {
            if over != position.over_number {
                return Err(ScoringError::Validation(format!(
                    "overNumber {} does not match expected {}",
                    over, position.over_number
                )));
            }
        }
        if let Some(ball_number) = request.ball_number {
            if ball_number != position.ball_number {
                return Err(ScoringError::Validation(format!(
                    "ballNumber {} does not match expected {}",
                    ball_number, position.ball_number
                )));
            }
        }

        let ball = BallEvent::new(
            request.innings_id,
            position.over_number,
            position.ball_number,
            request.runs,
            request.is_wicket,
            request.extra_type,
        );
        ball.validate().map_err(ScoringError::Validation)?;

        self.store.push_ball(ball.clone())?;
        let innings = self.store.get_innings_mut(request.innings_id)?;
        apply_ball(innings, &ball);
        let innings = innings.clone();

        log::info!(
            "Ball recorded at {}.{} for innings {}: {} run(s){}{}",
            ball.over_number,
            ball.ball_number,
            ball.innings_id,
            ball.runs,
            if ball.is_wicket { ", wicket" } else { "" },
            if ball.is_extra { ", extra" } else { "" },
        );

        let overs = OversCompleted::from_last_ball(Some(&ball));
        let first_innings_score = self.first_innings_score(&the_match)?;
        let completion =
            check_innings_complete(&the_match, &innings, &batting_team, overs, first_innings_score);

        // The second innings ending always ends the match; nothing follows
        // it, so no confirmation step.
        if matches!(completion, Some(CompletionSignal::CompleteMatch(_))) {
            self.transition_innings(match_id)?;
        }

        let snapshot = self.innings_snapshot(request.innings_id)?;
        Ok(RecordBallResponse { ball, innings: snapshot, completion })
    }

    /// Undo: remove the most recent delivery of its innings and reverse its
    /// aggregate contribution. Ledger removal and aggregate revert happen
    /// together or not at all.
    pub fn delete_last_ball(&mut self, ball_id: Uuid) -> Result<BallEvent> {
        let innings_id = self.store.get_ball(ball_id)?.innings_id;
        let innings = self.store.get_innings(innings_id)?;
        if innings.is_completed() {
            return Err(ScoringError::StateConflict(
                "Cannot delete a ball from a completed innings".to_string(),
            ));
        }

        let removed = self.store.remove_last_ball(ball_id)?;
        let innings = self.store.get_innings_mut(innings_id)?;
        revert_ball(innings, &removed);

        log::info!(
            "Ball {} deleted from innings {}; reverted {} run(s){}",
            removed.id,
            innings_id,
            removed.runs,
            if removed.is_wicket { " and 1 wicket" } else { "" },
        );
        Ok(removed)
    }

    pub fn get_innings(&self, innings_id: Uuid) -> Result<InningsSnapshot> {
        self.innings_snapshot(innings_id)
    }

    pub fn get_match_details(&self, match_id: Uuid) -> Result<MatchDetails> {
        let the_match = self.store.get_match(match_id)?.clone();
        let teams = self.match_teams(&the_match)?;

        let mut innings_details = Vec::with_capacity(the_match.innings.len());
        for innings_id in &the_match.innings {
            let innings = self.store.get_innings(*innings_id)?.clone();
            let overs = self.overs_completed(*innings_id);
            innings_details.push(InningsDetail {
                overs_completed: overs.rounded().to_string(),
                balls: self.store.balls_newest_first(*innings_id).into_iter().cloned().collect(),
                innings,
            });
        }

        let target = if the_match.is_completed() {
            None
        } else {
            self.current_innings(&the_match).ok().map(|current| {
                let overs = self.overs_completed(current.id);
                let first_score = self.first_innings_score(&the_match).unwrap_or(None);
                target_text(&the_match, current.score, overs, first_score)
            })
        };

        Ok(MatchDetails {
            id: the_match.id,
            location: the_match.location,
            overs: the_match.overs,
            status: the_match.status,
            current_innings: the_match.current_innings,
            teams: teams.to_vec(),
            innings: innings_details,
            won_by: the_match.won_by,
            winner_message: the_match.winner_message,
            created_at: the_match.created_at,
            completed_at: the_match.completed_at,
            target_text: target,
        })
    }

    /// Close the current innings and advance the match: innings 1 → open
    /// innings 2 with the batting order swapped; innings 2 → compute the
    /// result and complete the match.
    pub fn transition_innings(&mut self, match_id: Uuid) -> Result<TransitionOutcome> {
        let the_match = self.store.get_match(match_id)?.clone();
        if the_match.is_completed() {
            return Err(ScoringError::StateConflict("Match is already completed".to_string()));
        }

        let current = self.current_innings(&the_match)?.clone();
        if current.is_completed() {
            return Err(ScoringError::StateConflict(
                "Current innings is already completed".to_string(),
            ));
        }

        self.store.get_innings_mut(current.id)?.complete();

        if the_match.current_innings == 1 {
            let teams = self.match_teams(&the_match)?;
            let batting = teams
                .iter()
                .find(|team| team.batting_order == BattingOrder::Second)
                .ok_or_else(|| {
                    ScoringError::Storage("Teams configuration error".to_string())
                })?;
            let bowling = teams
                .iter()
                .find(|team| team.batting_order == BattingOrder::First)
                .ok_or_else(|| {
                    ScoringError::Storage("Teams configuration error".to_string())
                })?;

            let second = Innings::new(match_id, 2, batting.id, bowling.id);
            let second_id = second.id;
            self.store.insert_innings(second);
            let the_match = self.store.get_match_mut(match_id)?;
            the_match.innings.push(second_id);
            the_match.current_innings = 2;

            log::info!("Innings transition for match {}: {} now batting", match_id, batting.name);
            Ok(TransitionOutcome::InningsStarted { innings: self.innings_snapshot(second_id)? })
        } else {
            let first = self.innings_by_number(&the_match, 1)?.clone();
            let second = self.store.get_innings(current.id)?.clone();
            let teams = self.match_teams(&the_match)?;
            let outcome = compute_outcome(&first, &second, &teams);

            let the_match = self.store.get_match_mut(match_id)?;
            the_match.status = MatchStatus::Completed;
            the_match.completed_at = Some(chrono::Utc::now());
            the_match.won_by = outcome.won_by;
            the_match.winner_message = Some(outcome.winner_message.clone());

            log::info!("Match {} completed: {}", match_id, outcome.winner_message);
            Ok(TransitionOutcome::MatchCompleted {
                won_by: outcome.won_by,
                winner_message: outcome.winner_message,
            })
        }
    }

    /// All matches, newest first.
    pub fn list_matches(&self) -> Vec<MatchSummary> {
        self.store
            .matches_newest_first()
            .into_iter()
            .map(|the_match| {
                let teams = self.match_teams(the_match).map(|t| t.to_vec()).unwrap_or_default();
                let innings = the_match
                    .innings
                    .iter()
                    .filter_map(|id| self.innings_snapshot(*id).ok())
                    .collect();
                MatchSummary {
                    id: the_match.id,
                    location: the_match.location.clone(),
                    overs: the_match.overs,
                    status: the_match.status,
                    current_innings: the_match.current_innings,
                    teams,
                    innings,
                    won_by: the_match.won_by,
                    winner_message: the_match.winner_message.clone(),
                    created_at: the_match.created_at,
                }
            })
            .collect()
    }

    // ---- helpers ----

    fn overs_completed(&self, innings_id: Uuid) -> OversCompleted {
        OversCompleted::from_last_ball(self.store.last_ball(innings_id))
    }

    fn innings_snapshot(&self, innings_id: Uuid) -> Result<InningsSnapshot> {
        let innings = self.store.get_innings(innings_id)?.clone();
        let overs = self.overs_completed(innings_id);
        Ok(InningsSnapshot { innings, overs_completed: overs.rounded().to_string() })
    }

    fn match_teams(&self, the_match: &Match) -> Result<[Team; 2]> {
        Ok([
            self.store.get_team(the_match.teams[0])?.clone(),
            self.store.get_team(the_match.teams[1])?.clone(),
        ])
    }

    fn current_innings(&self, the_match: &Match) -> Result<&Innings> {
        self.innings_by_number(the_match, the_match.current_innings)
    }

    fn innings_by_number(&self, the_match: &Match, number: u8) -> Result<&Innings> {
        the_match
            .innings
            .iter()
            .filter_map(|id| self.store.get_innings(*id).ok())
            .find(|innings| innings.innings_number == number)
            .ok_or_else(|| ScoringError::not_found("innings", format!("number {}", number)))
    }

    fn first_innings_score(&self, the_match: &Match) -> Result<Option<u32>> {
        if the_match.current_innings != 2 {
            return Ok(None);
        }
        Ok(Some(self.innings_by_number(the_match, 1)?.score))
    }
}
