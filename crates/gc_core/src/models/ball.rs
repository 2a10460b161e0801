use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a delivery. Exactly one of normal / wide / no-ball
/// applies; a wicket may co-occur with any of them (e.g. run-out on a wide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExtraType {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "wide")]
    Wide,
    #[serde(rename = "noball")]
    NoBall,
}

impl ExtraType {
    pub fn is_extra(&self) -> bool {
        !matches!(self, ExtraType::None)
    }
}

/// One recorded delivery. Owned by an innings ledger; holds only a
/// back-reference to its innings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallEvent {
    pub id: Uuid,
    pub innings_id: Uuid,
    /// Zero-based over index.
    pub over_number: u32,
    /// 1-based legal-delivery slot within the over (1..=6). An extra is
    /// recorded against the slot it occurred on without consuming it.
    pub ball_number: u8,
    /// For extras this includes the mandatory 1 plus any runs actually run.
    pub runs: u32,
    pub is_wicket: bool,
    pub is_extra: bool,
    pub extra_type: ExtraType,
    pub timestamp: DateTime<Utc>,
}

impl BallEvent {
    pub fn new(
        innings_id: Uuid,
        over_number: u32,
        ball_number: u8,
        runs: u32,
        is_wicket: bool,
        extra_type: ExtraType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            innings_id,
            over_number,
            ball_number,
            runs,
            is_wicket,
            is_extra: extra_type.is_extra(),
            extra_type,
            timestamp: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=6).contains(&self.ball_number) {
            return Err(format!("ball_number must be 1..=6, got {}", self.ball_number));
        }
        if self.is_extra != self.extra_type.is_extra() {
            return Err(format!(
                "is_extra ({}) inconsistent with extra_type ({:?})",
                self.is_extra, self.extra_type
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_type_wire_format() {
        assert_eq!(serde_json::to_string(&ExtraType::NoBall).unwrap(), "\"noball\"");
        let back: ExtraType = serde_json::from_str("\"wide\"").unwrap();
        assert_eq!(back, ExtraType::Wide);
    }

    #[test]
    fn test_new_sets_is_extra_from_type() {
        let ball = BallEvent::new(Uuid::new_v4(), 0, 1, 1, false, ExtraType::Wide);
        assert!(ball.is_extra);
        assert!(ball.validate().is_ok());

        let ball = BallEvent::new(Uuid::new_v4(), 0, 1, 4, false, ExtraType::None);
        assert!(!ball.is_extra);
    }

    #[test]
    fn test_validate_rejects_out_of_range_ball_number() {
        let mut ball = BallEvent::new(Uuid::new_v4(), 0, 1, 0, false, ExtraType::None);
        ball.ball_number = 7;
        assert!(ball.validate().is_err());
        ball.ball_number = 0;
        assert!(ball.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inconsistent_classification() {
        let mut ball = BallEvent::new(Uuid::new_v4(), 0, 1, 1, false, ExtraType::Wide);
        ball.is_extra = false;
        assert!(ball.validate().is_err());
    }
}
