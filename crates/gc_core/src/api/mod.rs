pub mod json_api;
pub mod service;

pub use json_api::{
    create_match_json, delete_last_ball_json, get_innings_json, get_match_details_json,
    list_matches_json, record_ball_json, transition_innings_json,
};
pub use service::{
    CreateMatchRequest, InningsDetail, InningsSnapshot, MatchDetails, MatchSummary,
    RecordBallRequest, RecordBallResponse, ScoringService, TossWinner, TransitionOutcome,
};
