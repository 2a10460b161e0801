use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InningsStatus {
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

/// One team's turn at batting. Score and wickets are the running aggregate
/// maintained by the innings aggregator; the ball ledger is the source of
/// truth they are reconstructed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Innings {
    pub id: Uuid,
    pub match_id: Uuid,
    /// 1 or 2.
    pub innings_number: u8,
    pub batting_team_id: Uuid,
    pub bowling_team_id: Uuid,
    pub score: u32,
    pub wickets: u8,
    pub status: InningsStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Innings {
    pub fn new(match_id: Uuid, innings_number: u8, batting_team_id: Uuid, bowling_team_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            innings_number,
            batting_team_id,
            bowling_team_id,
            score: 0,
            wickets: 0,
            status: InningsStatus::InProgress,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == InningsStatus::Completed
    }

    /// One-way transition; completing twice keeps the first timestamp.
    pub fn complete(&mut self) {
        if self.status != InningsStatus::Completed {
            self.status = InningsStatus::Completed;
            self.completed_at = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_innings_starts_fresh() {
        let innings = Innings::new(Uuid::new_v4(), 1, Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(innings.score, 0);
        assert_eq!(innings.wickets, 0);
        assert_eq!(innings.status, InningsStatus::InProgress);
        assert!(innings.completed_at.is_none());
    }

    #[test]
    fn test_complete_is_one_way() {
        let mut innings = Innings::new(Uuid::new_v4(), 2, Uuid::new_v4(), Uuid::new_v4());
        innings.complete();
        let first = innings.completed_at;
        assert!(innings.is_completed());
        innings.complete();
        assert_eq!(innings.completed_at, first);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&InningsStatus::InProgress).unwrap(), "\"in-progress\"");
    }
}
