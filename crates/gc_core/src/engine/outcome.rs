//! Final result arbitration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Innings, Team};

/// Result of a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Winning team, absent on a tie.
    pub won_by: Option<Uuid>,
    pub winner_message: String,
}

/// Compare the two innings and name the winner and margin. Only called once
/// both innings exist and the second is being closed.
pub fn compute_outcome(first: &Innings, second: &Innings, teams: &[Team; 2]) -> MatchOutcome {
    if second.score > first.score {
        let margin = second.score - first.score;
        MatchOutcome {
            won_by: Some(second.batting_team_id),
            winner_message: won_by_message(second.batting_team_id, margin, teams),
        }
    } else if second.score < first.score {
        let margin = first.score - second.score;
        MatchOutcome {
            won_by: Some(first.batting_team_id),
            winner_message: won_by_message(first.batting_team_id, margin, teams),
        }
    } else {
        MatchOutcome { won_by: None, winner_message: "Match tied".to_string() }
    }
}

fn won_by_message(team_id: Uuid, margin: u32, teams: &[Team; 2]) -> String {
    let name = teams
        .iter()
        .find(|team| team.id == team_id)
        .map(|team| team.name.as_str())
        .unwrap_or("Unknown team");
    format!("{} won by {} runs", name, margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BattingOrder;
    use proptest::prelude::*;

    fn create_test_sides() -> ([Team; 2], Innings, Innings) {
        let team_a = Team::new("Alley Cats", 8, BattingOrder::First);
        let team_b = Team::new("Rooftop Rangers", 8, BattingOrder::Second);
        let match_id = Uuid::new_v4();
        let first = Innings::new(match_id, 1, team_a.id, team_b.id);
        let second = Innings::new(match_id, 2, team_b.id, team_a.id);
        ([team_a, team_b], first, second)
    }

    #[test]
    fn test_chasing_team_wins_by_margin() {
        let (teams, mut first, mut second) = create_test_sides();
        first.score = 120;
        second.score = 121;
        let outcome = compute_outcome(&first, &second, &teams);
        assert_eq!(outcome.won_by, Some(second.batting_team_id));
        assert_eq!(outcome.winner_message, "Rooftop Rangers won by 1 runs");
    }

    #[test]
    fn test_defending_team_wins_by_margin() {
        let (teams, mut first, mut second) = create_test_sides();
        first.score = 150;
        second.score = 132;
        let outcome = compute_outcome(&first, &second, &teams);
        assert_eq!(outcome.won_by, Some(first.batting_team_id));
        assert_eq!(outcome.winner_message, "Alley Cats won by 18 runs");
    }

    #[test]
    fn test_level_scores_tie() {
        let (teams, mut first, mut second) = create_test_sides();
        first.score = 150;
        second.score = 150;
        let outcome = compute_outcome(&first, &second, &teams);
        assert_eq!(outcome.won_by, None);
        assert_eq!(outcome.winner_message, "Match tied");
    }

    proptest! {
        /// The higher-scoring batting side always wins with margin |s1 - s2|;
        /// level scores always tie with no winner.
        #[test]
        fn prop_result_symmetry(s1 in 0u32..400, s2 in 0u32..400) {
            let (teams, mut first, mut second) = create_test_sides();
            first.score = s1;
            second.score = s2;
            let outcome = compute_outcome(&first, &second, &teams);
            if s1 == s2 {
                prop_assert_eq!(outcome.won_by, None);
            } else {
                let expected = if s2 > s1 { second.batting_team_id } else { first.batting_team_id };
                prop_assert_eq!(outcome.won_by, Some(expected));
                let margin = s1.abs_diff(s2);
                let expected_fragment = format!("won by {} runs", margin);
                prop_assert!(outcome.winner_message.contains(&expected_fragment));
            }
        }
    }
}
