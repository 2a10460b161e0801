//! Running innings aggregate.
//!
//! `apply_ball` and `revert_ball` are exact inverses. `revert_ball` is only
//! ever invoked on the most-recently-applied event; the store enforces that
//! ledger discipline.

use crate::models::{BallEvent, Innings};

/// Fold one delivery into the innings aggregate.
pub fn apply_ball(innings: &mut Innings, ball: &BallEvent) {
    innings.score += ball.runs;
    if ball.is_wicket {
        innings.wickets += 1;
    }
}

/// Reverse the contribution of the most-recently-applied delivery.
pub fn revert_ball(innings: &mut Innings, ball: &BallEvent) {
    innings.score = innings.score.saturating_sub(ball.runs);
    if ball.is_wicket {
        innings.wickets = innings.wickets.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtraType;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn create_test_innings() -> Innings {
        Innings::new(Uuid::new_v4(), 1, Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn test_apply_adds_runs_and_wicket() {
        let mut innings = create_test_innings();
        let ball = BallEvent::new(innings.id, 0, 1, 4, true, ExtraType::None);
        apply_ball(&mut innings, &ball);
        assert_eq!(innings.score, 4);
        assert_eq!(innings.wickets, 1);
    }

    #[test]
    fn test_revert_restores_exactly() {
        let mut innings = create_test_innings();
        innings.score = 37;
        innings.wickets = 2;

        let ball = BallEvent::new(innings.id, 5, 2, 6, true, ExtraType::NoBall);
        apply_ball(&mut innings, &ball);
        revert_ball(&mut innings, &ball);

        assert_eq!(innings.score, 37);
        assert_eq!(innings.wickets, 2);
    }

    #[test]
    fn test_revert_only_ball_empties_aggregate() {
        let mut innings = create_test_innings();
        let ball = BallEvent::new(innings.id, 0, 1, 4, false, ExtraType::None);
        apply_ball(&mut innings, &ball);
        revert_ball(&mut innings, &ball);
        assert_eq!(innings.score, 0);
        assert_eq!(innings.wickets, 0);
    }

    proptest! {
        /// Score and wickets are non-decreasing under any applied sequence.
        #[test]
        fn prop_aggregate_monotonic(events in proptest::collection::vec((0u32..8, any::<bool>()), 0..100)) {
            let mut innings = create_test_innings();
            let mut prev = (0u32, 0u8);
            for (runs, wicket) in events {
                let ball = BallEvent::new(innings.id, 0, 1, runs, wicket, ExtraType::None);
                apply_ball(&mut innings, &ball);
                prop_assert!(innings.score >= prev.0);
                prop_assert!(innings.wickets >= prev.1);
                prev = (innings.score, innings.wickets);
            }
        }

        /// apply followed by revert is the identity on the aggregate.
        #[test]
        fn prop_apply_revert_round_trip(score in 0u32..500, wickets in 0u8..10, runs in 0u32..8, wicket in any::<bool>()) {
            let mut innings = create_test_innings();
            innings.score = score;
            innings.wickets = wickets;

            let ball = BallEvent::new(innings.id, 0, 1, runs, wicket, ExtraType::None);
            apply_ball(&mut innings, &ball);
            revert_ball(&mut innings, &ball);

            prop_assert_eq!(innings.score, score);
            prop_assert_eq!(innings.wickets, wickets);
        }
    }
}
