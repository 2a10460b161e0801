pub mod ball;
pub mod innings;
pub mod matches;
pub mod team;

pub use ball::{BallEvent, ExtraType};
pub use innings::{Innings, InningsStatus};
pub use matches::{Match, MatchStatus};
pub use team::{BattingOrder, Team};
