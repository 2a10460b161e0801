//! Snapshot persistence for the scoring state.

pub mod error;
pub mod format;
pub mod manager;

pub use error::SaveError;
pub use format::{ScoreSave, SAVE_MAGIC};
pub use manager::SaveManager;

/// Current save format version.
pub const SAVE_VERSION: u32 = 1;
