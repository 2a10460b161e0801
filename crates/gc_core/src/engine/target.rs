//! Target / balls-remaining display strings for the live scoreboard.
//!
//! Pure and read-only. Pluralization matches the reference display: "runs"
//! when more than one is needed, "balls" whenever the count is not exactly
//! one.

use super::over_count::{balls_remaining, OversCompleted};
use crate::models::Match;

/// Live chase/remaining line shown under the score.
///
/// During the first innings (or whenever the first-innings score is not yet
/// known) this reports remaining deliveries; during the chase it reports the
/// runs still needed against the target of `first_innings_score + 1`.
pub fn target_text(
    the_match: &Match,
    current_score: u32,
    overs_completed: OversCompleted,
    first_innings_score: Option<u32>,
) -> String {
    let balls_left = balls_remaining(the_match.overs, overs_completed);

    let first_score = match (the_match.current_innings, first_innings_score) {
        (2, Some(score)) => score,
        _ => return format!("Remaining balls: {}", balls_left),
    };

    let target = first_score + 1;
    if current_score >= target {
        return "Target Achieved!".to_string();
    }
    let runs_needed = target - current_score;

    format!(
        "Needs {} run{} in {} ball{}",
        runs_needed,
        if runs_needed > 1 { "s" } else { "" },
        balls_left,
        if balls_left != 1 { "s" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_test_match(overs: u32, current_innings: u8) -> Match {
        let mut the_match = Match::new("Park strip", overs, [Uuid::new_v4(), Uuid::new_v4()]);
        the_match.current_innings = current_innings;
        the_match
    }

    #[test]
    fn test_first_innings_shows_remaining_balls() {
        let the_match = create_test_match(10, 1);
        let oc = OversCompleted { overs: 2, balls: 3 };
        assert_eq!(target_text(&the_match, 34, oc, None), "Remaining balls: 45");
    }

    #[test]
    fn test_second_innings_without_known_score_falls_back() {
        let the_match = create_test_match(10, 2);
        let oc = OversCompleted { overs: 0, balls: 0 };
        assert_eq!(target_text(&the_match, 0, oc, None), "Remaining balls: 60");
    }

    #[test]
    fn test_chase_needs_runs() {
        let the_match = create_test_match(10, 2);
        let oc = OversCompleted { overs: 8, balls: 0 };
        assert_eq!(target_text(&the_match, 100, oc, Some(120)), "Needs 21 runs in 12 balls");
    }

    #[test]
    fn test_chase_singular_run_and_ball() {
        let the_match = create_test_match(10, 2);
        let oc = OversCompleted { overs: 9, balls: 5 };
        assert_eq!(target_text(&the_match, 120, oc, Some(120)), "Needs 1 run in 1 ball");
    }

    #[test]
    fn test_chase_zero_balls_pluralized() {
        let the_match = create_test_match(10, 2);
        let oc = OversCompleted { overs: 9, balls: 6 };
        assert_eq!(target_text(&the_match, 110, oc, Some(120)), "Needs 11 runs in 0 balls");
    }

    #[test]
    fn test_target_achieved() {
        let the_match = create_test_match(10, 2);
        let oc = OversCompleted { overs: 5, balls: 2 };
        assert_eq!(target_text(&the_match, 121, oc, Some(120)), "Target Achieved!");
        assert_eq!(target_text(&the_match, 140, oc, Some(120)), "Target Achieved!");
    }
}
