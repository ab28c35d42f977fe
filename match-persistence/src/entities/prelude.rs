pub use super::guesses::Entity as Guesses;
pub use super::matches::Entity as Matches;
