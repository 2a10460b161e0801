use thiserror::Error;

/// Errors surfaced by the scoring core.
///
/// The calling layer maps these to user-facing messages; the core never
/// retries. `status_code` carries the transport mapping so every caller
/// agrees on it.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    StateConflict(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ScoringError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        ScoringError::NotFound { entity, id: id.to_string() }
    }

    /// HTTP status the reference implementation used for this class of error.
    pub fn status_code(&self) -> u16 {
        match self {
            ScoringError::Validation(_) => 400,
            ScoringError::NotFound { .. } => 404,
            // The reference surfaced "already completed" conflicts as 400.
            ScoringError::StateConflict(_) => 400,
            ScoringError::Storage(_) => 500,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ScoringError::Storage(_))
    }
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        ScoringError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ScoringError::Validation("x".into()).status_code(), 400);
        assert_eq!(ScoringError::not_found("innings", "abc").status_code(), 404);
        assert_eq!(ScoringError::StateConflict("done".into()).status_code(), 400);
        assert_eq!(ScoringError::Storage("io".into()).status_code(), 500);
    }

    #[test]
    fn test_not_found_display() {
        let err = ScoringError::not_found("match", "123");
        assert_eq!(err.to_string(), "match not found: 123");
    }
}
