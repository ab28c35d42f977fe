pub mod guesses;
pub mod matches;
pub mod messages;

// Re-export all types
pub use guesses::*;
pub use matches::*;
pub use messages::*;

pub type MatchId = uuid::Uuid;
pub type GuessId = uuid::Uuid;
pub type PlayerId = uuid::Uuid;
