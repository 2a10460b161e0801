//! Over/ball arithmetic.
//!
//! A single rule set owns everything about delivery positions: where the next
//! ball goes, what "overs completed" means, and the round-off applied when an
//! over has just finished. Callers never do this arithmetic themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::BallEvent;

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u8 = 6;

/// Position a delivery is recorded against: zero-based over, 1-based
/// legal-delivery slot within the over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallPosition {
    pub over_number: u32,
    pub ball_number: u8,
}

/// Position to assign to the next delivery, derived from the last recorded
/// ball of the innings (or `None` before the first delivery).
///
/// An extra does not consume a legal delivery, so the ball after an extra
/// repeats the same position. The 6th legal delivery rolls over into
/// `(over + 1, 1)`.
pub fn next_ball(last: Option<&BallEvent>) -> BallPosition {
    let (current_over, current_ball) = match last {
        Some(ball) => (ball.over_number, ball.ball_number),
        None => (0, 0),
    };

    if last.is_some_and(|ball| ball.is_extra) {
        return BallPosition { over_number: current_over, ball_number: current_ball };
    }

    let mut new_ball = current_ball + 1;
    let mut new_over = current_over;
    if new_ball > BALLS_PER_OVER {
        new_over = current_over + 1;
        new_ball = 1;
    }

    BallPosition { over_number: new_over, ball_number: new_ball }
}

/// Overs actually completed, as shown on the scoreboard ("3.4" = 3 full overs
/// plus 4 legal deliveries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OversCompleted {
    pub overs: u32,
    pub balls: u8,
}

impl OversCompleted {
    /// Derive from the last recorded ball. If that ball was itself an extra
    /// it did not complete a legal delivery, so its slot is not counted.
    pub fn from_last_ball(last: Option<&BallEvent>) -> Self {
        match last {
            None => Self { overs: 0, balls: 0 },
            Some(ball) => {
                let balls = if ball.is_extra { ball.ball_number - 1 } else { ball.ball_number };
                Self { overs: ball.over_number, balls }
            }
        }
    }

    /// Scoreboard round-off: a just-finished over reads "{over+1}.0" rather
    /// than "{over}.6".
    pub fn rounded(self) -> Self {
        if self.balls == BALLS_PER_OVER {
            Self { overs: self.overs + 1, balls: 0 }
        } else {
            self
        }
    }

    /// Whole overs completed, after round-off.
    pub fn completed_overs(self) -> u32 {
        self.rounded().overs
    }

    /// Total legal deliveries bowled.
    pub fn balls_bowled(self) -> u32 {
        self.overs * BALLS_PER_OVER as u32 + self.balls as u32
    }
}

impl fmt::Display for OversCompleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.overs, self.balls)
    }
}

/// Legal deliveries still to be bowled in an innings of `total_overs` overs.
pub fn balls_remaining(total_overs: u32, overs_completed: OversCompleted) -> u32 {
    let total_balls = total_overs * BALLS_PER_OVER as u32;
    total_balls.saturating_sub(overs_completed.balls_bowled())
}
