//! Global scoring state.
//!
//! Holds the live `ScoringService` behind a `RwLock` for callers that consume
//! the JSON API rather than owning a service instance themselves.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::api::service::ScoringService;

/// Global scoring service singleton.
pub static SCORING_STATE: Lazy<Arc<RwLock<ScoringService>>> =
    Lazy::new(|| Arc::new(RwLock::new(ScoringService::new())));

/// Get a read lock on the global scoring state.
pub fn get_state() -> std::sync::RwLockReadGuard<'static, ScoringService> {
    SCORING_STATE.read().expect("SCORING_STATE lock poisoned")
}

/// Get a write lock on the global scoring state.
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, ScoringService> {
    SCORING_STATE.write().expect("SCORING_STATE lock poisoned")
}

/// Reset the global state to empty.
pub fn reset_state() {
    *SCORING_STATE.write().expect("SCORING_STATE lock poisoned") = ScoringService::new();
}

/// Replace the entire global state.
pub fn set_state(new_state: ScoringService) {
    *SCORING_STATE.write().expect("SCORING_STATE lock poisoned") = new_state;
}
