use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Batting order slot, assigned from the toss result when the match starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattingOrder {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
}

/// A side in the match. Immutable once the match has started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    /// Roster size; the all-out threshold for the innings this team bats.
    pub number_of_players: u8,
    pub batting_order: BattingOrder,
}

impl Team {
    pub fn new(name: impl Into<String>, number_of_players: u8, batting_order: BattingOrder) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), number_of_players, batting_order }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Team name must not be empty".to_string());
        }
        if self.number_of_players == 0 {
            return Err("Team must have at least 1 player".to_string());
        }
        Ok(())
    }
}
