pub mod aggregate;
pub mod completion;
pub mod outcome;
pub mod over_count;
pub mod target;

pub use completion::{CompletionSignal, InningsEndReason};
pub use outcome::MatchOutcome;
pub use over_count::{BallPosition, OversCompleted, BALLS_PER_OVER};
