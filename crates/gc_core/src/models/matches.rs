use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

/// A two-innings limited-overs match. Owns its two teams and one or two
/// innings (the second is created lazily at the innings transition).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub location: String,
    /// Overs per innings; legal deliveries per innings is `overs * 6`.
    pub overs: u32,
    pub status: MatchStatus,
    /// 1 while the first innings is live, 2 afterwards.
    pub current_innings: u8,
    pub teams: [Uuid; 2],
    pub innings: Vec<Uuid>,
    pub won_by: Option<Uuid>,
    pub winner_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Match {
    pub fn new(location: impl Into<String>, overs: u32, teams: [Uuid; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            location: location.into(),
            overs,
            status: MatchStatus::InProgress,
            current_innings: 1,
            teams,
            innings: Vec::new(),
            won_by: None,
            winner_message: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}
