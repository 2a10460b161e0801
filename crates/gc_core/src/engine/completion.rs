//! Innings-completion judge.
//!
//! Evaluated after every applied ball. An innings ends when the batting side
//! is all out, the overs are exhausted, or (chasing only) the target has been
//! passed. Ending the first innings asks the umpire to confirm the change of
//! innings; ending the second always ends the match, so that transition is
//! automatic.

use serde::{Deserialize, Serialize};

use super::over_count::OversCompleted;
use crate::models::{Innings, Match, Team};

/// Why an innings ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InningsEndReason {
    AllOut,
    OversExhausted,
    TargetReached,
}

/// What the caller should do about a finished innings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "reason", rename_all = "snake_case")]
pub enum CompletionSignal {
    /// First innings done; wait for the umpire to start the next innings.
    ConfirmNextInnings(InningsEndReason),
    /// Second innings done; the match is to be completed immediately.
    CompleteMatch(InningsEndReason),
}

impl CompletionSignal {
    pub fn reason(&self) -> InningsEndReason {
        match self {
            CompletionSignal::ConfirmNextInnings(reason) => *reason,
            CompletionSignal::CompleteMatch(reason) => *reason,
        }
    }
}

/// Judge whether the current innings must end, in trigger priority order:
/// all out, overs exhausted, target reached. `first_innings_score` is only
/// consulted for the chasing innings.
pub fn check_innings_complete(
    the_match: &Match,
    innings: &Innings,
    batting_team: &Team,
    overs_completed: OversCompleted,
    first_innings_score: Option<u32>,
) -> Option<CompletionSignal> {
    let reason = end_reason(the_match, innings, batting_team, overs_completed, first_innings_score)?;

    if innings.innings_number == 1 {
        Some(CompletionSignal::ConfirmNextInnings(reason))
    } else {
        Some(CompletionSignal::CompleteMatch(reason))
    }
}

fn end_reason(
    the_match: &Match,
    innings: &Innings,
    batting_team: &Team,
    overs_completed: OversCompleted,
    first_innings_score: Option<u32>,
) -> Option<InningsEndReason> {
    if innings.wickets >= batting_team.number_of_players {
        return Some(InningsEndReason::AllOut);
    }

    if overs_completed.completed_overs() >= the_match.overs {
        return Some(InningsEndReason::OversExhausted);
    }

    if innings.innings_number == 2 {
        if let Some(target_base) = first_innings_score {
            if innings.score > target_base {
                return Some(InningsEndReason::TargetReached);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BattingOrder;
    use uuid::Uuid;

    fn create_test_fixture(overs: u32, players: u8) -> (Match, Team) {
        let team = Team::new("Lane Lions", players, BattingOrder::First);
        let the_match = Match::new("Street corner", overs, [team.id, Uuid::new_v4()]);
        (the_match, team)
    }

    fn innings_with(the_match: &Match, number: u8, score: u32, wickets: u8) -> Innings {
        let mut innings = Innings::new(the_match.id, number, the_match.teams[0], the_match.teams[1]);
        innings.score = score;
        innings.wickets = wickets;
        innings
    }

    #[test]
    fn test_in_progress_innings_not_flagged() {
        let (the_match, team) = create_test_fixture(10, 8);
        let innings = innings_with(&the_match, 1, 40, 3);
        let oc = OversCompleted { overs: 4, balls: 2 };
        assert_eq!(check_innings_complete(&the_match, &innings, &team, oc, None), None);
    }

    #[test]
    fn test_all_out_before_overs_run_out() {
        // Scenario: 10-over match, roster of 8, all out at over 6 ball 3.
        let (the_match, team) = create_test_fixture(10, 8);
        let innings = innings_with(&the_match, 1, 55, 8);
        let oc = OversCompleted { overs: 6, balls: 3 };
        assert_eq!(
            check_innings_complete(&the_match, &innings, &team, oc, None),
            Some(CompletionSignal::ConfirmNextInnings(InningsEndReason::AllOut))
        );
    }

    #[test]
    fn test_overs_exhausted_uses_rounded_count() {
        let (the_match, team) = create_test_fixture(10, 8);
        let innings = innings_with(&the_match, 1, 72, 4);
        // Last legal ball of over 9 reads 9.6, which rounds to 10.0.
        let oc = OversCompleted { overs: 9, balls: 6 };
        assert_eq!(
            check_innings_complete(&the_match, &innings, &team, oc, None),
            Some(CompletionSignal::ConfirmNextInnings(InningsEndReason::OversExhausted))
        );
    }

    #[test]
    fn test_target_reached_only_in_second_innings() {
        let (the_match, team) = create_test_fixture(10, 8);
        let oc = OversCompleted { overs: 5, balls: 1 };

        // Same score in innings 1 is not a trigger.
        let first = innings_with(&the_match, 1, 121, 2);
        assert_eq!(check_innings_complete(&the_match, &first, &team, oc, None), None);

        let chase = innings_with(&the_match, 2, 121, 2);
        assert_eq!(
            check_innings_complete(&the_match, &chase, &team, oc, Some(120)),
            Some(CompletionSignal::CompleteMatch(InningsEndReason::TargetReached))
        );

        // Level is not past the target.
        let level = innings_with(&the_match, 2, 120, 2);
        assert_eq!(check_innings_complete(&the_match, &level, &team, oc, Some(120)), None);
    }

    #[test]
    fn test_all_out_wins_trigger_priority() {
        let (the_match, team) = create_test_fixture(10, 8);
        let innings = innings_with(&the_match, 2, 130, 8);
        let oc = OversCompleted { overs: 9, balls: 6 };
        let signal =
            check_innings_complete(&the_match, &innings, &team, oc, Some(120)).unwrap();
        assert_eq!(signal.reason(), InningsEndReason::AllOut);
    }
}
